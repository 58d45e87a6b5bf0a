use super::{
    crop_selection::CropSelectionRule, disease_risk::DiseaseRiskRule, fruit_tree::FruitTreeRule,
    irrigation::IrrigationRule, planting::PlantingRule, Rule,
};
use crate::error::{AdvisorError, Result};
use crate::models::{ForecastRecord, Recommendation};

pub struct RulesEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl RulesEngine {
    pub fn new() -> Self {
        let rules: Vec<Box<dyn Rule>> = vec![
            Box::new(IrrigationRule),
            Box::new(PlantingRule),
            Box::new(DiseaseRiskRule),
            Box::new(FruitTreeRule),
            Box::new(CropSelectionRule),
        ];

        Self { rules }
    }

    /// One recommendation per rule, in display order
    pub fn evaluate(&self, forecast: &ForecastRecord) -> Vec<Recommendation> {
        self.rules
            .iter()
            .map(|rule| rule.evaluate(forecast))
            .collect()
    }

    /// Evaluate the first forecast in the sequence.
    ///
    /// An empty sequence yields `NoForecastAvailable` without running any rule.
    pub fn advise(&self, forecasts: &[ForecastRecord]) -> Result<Vec<Recommendation>> {
        let forecast = forecasts.first().ok_or(AdvisorError::NoForecastAvailable)?;
        tracing::debug!(?forecast, "Evaluating {} rules", self.rules.len());
        Ok(self.evaluate(forecast))
    }

    /// Run a single rule by id; `None` if no rule has that id
    pub fn evaluate_rule(&self, rule_id: &str, forecast: &ForecastRecord) -> Option<Recommendation> {
        self.rules
            .iter()
            .find(|r| r.id() == rule_id)
            .map(|rule| rule.evaluate(forecast))
    }

    pub fn list_rules(&self) -> Vec<(&'static str, &'static str)> {
        self.rules.iter().map(|r| (r.id(), r.name())).collect()
    }
}

impl Default for RulesEngine {
    fn default() -> Self {
        Self::new()
    }
}

use super::Rule;
use crate::models::{ForecastRecord, Recommendation, RecommendationCategory};

/// Irrigation advice from expected rainfall, then daytime heat
///
/// Checked in order, first match wins:
/// - Rain >15mm: no irrigation
/// - Rain >10mm: light irrigation
/// - Rain >5mm: moderate irrigation
/// - Max temp >35°C: increase frequency
/// - Max temp >30°C: regular irrigation, warm
///
/// Rain is checked before heat, so a wet heatwave still gets the rainfall message.
pub struct IrrigationRule;

impl Rule for IrrigationRule {
    fn id(&self) -> &'static str {
        "irrigation"
    }

    fn name(&self) -> &'static str {
        "Irrigation"
    }

    fn category(&self) -> RecommendationCategory {
        RecommendationCategory::Irrigation
    }

    fn evaluate(&self, forecast: &ForecastRecord) -> Recommendation {
        Recommendation::new(self.category(), irrigation_advice(forecast))
    }
}

pub fn irrigation_advice(forecast: &ForecastRecord) -> String {
    let precipitation = forecast.total_precipitation_mm;
    let temperature = forecast.max_temperature_c;

    let advice = if precipitation > 15.0 {
        "Natural rainfall is sufficient. No irrigation needed. \
         Consider drainage management for excess water."
    } else if precipitation > 10.0 {
        "Light irrigation may be needed for water-intensive crops like tomatoes and cucumbers."
    } else if precipitation > 5.0 {
        "Moderate irrigation recommended. Focus on deep-rooted crops like olives and grapes."
    } else if temperature > 35.0 {
        "High temperatures expected. Increase irrigation frequency for all crops, \
         especially for citrus trees and vegetables."
    } else if temperature > 30.0 {
        "Warm conditions. Ensure regular irrigation for fruit trees and heat-sensitive crops."
    } else {
        "Regular irrigation recommended. Monitor soil moisture levels, \
         particularly for young plantings and shallow-rooted crops."
    };

    advice.to_string()
}

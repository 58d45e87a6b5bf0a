use super::Rule;
use crate::models::{ForecastRecord, Recommendation, RecommendationCategory};

const HEAT_EXTREME: &str = "Extreme heat stress for fruit trees. Increase irrigation and \
     consider shade cloth for sensitive trees like avocados. ";
const HEAT_HIGH: &str = "High temperatures may stress fruit trees. Ensure adequate irrigation, \
     especially for citrus and stone fruits. ";
const TEMP_OPTIMAL: &str =
    "Optimal temperature range for most fruit trees. Good conditions for fruit development. ";
const COLD_STRESS: &str = "Cold stress possible. Protect sensitive trees like young citrus. \
     Delay pruning of deciduous fruit trees. ";
const WATERLOGGING: &str = "Heavy rain may lead to waterlogging. Ensure good drainage in orchards. \
     Watch for fungal diseases in susceptible fruits like peaches. ";
const DROUGHT: &str =
    "Dry conditions. Prioritize irrigation for fruit trees, especially those with developing fruits. ";
const HIGH_WIND: &str =
    "High winds forecasted. Secure young trees and consider wind breaks for orchards. ";
const PEST_MONITORING: &str = "Regular monitoring for pests and diseases is always recommended.";

/// Fruit tree care, assembled from independent clauses
///
/// One temperature clause (10-20°C has none), one rainfall clause, a wind
/// clause, then the pest-monitoring reminder which is always last.
pub struct FruitTreeRule;

impl Rule for FruitTreeRule {
    fn id(&self) -> &'static str {
        "fruit_tree"
    }

    fn name(&self) -> &'static str {
        "Fruit Tree Care"
    }

    fn category(&self) -> RecommendationCategory {
        RecommendationCategory::FruitTreeCare
    }

    fn evaluate(&self, forecast: &ForecastRecord) -> Recommendation {
        Recommendation::new(self.category(), fruit_tree_advice(forecast))
    }
}

pub fn fruit_tree_advice(forecast: &ForecastRecord) -> String {
    let temperature = forecast.max_temperature_c;
    let precipitation = forecast.total_precipitation_mm;

    let mut advice = String::new();

    if temperature > 35.0 {
        advice.push_str(HEAT_EXTREME);
    } else if (30.0..=35.0).contains(&temperature) {
        advice.push_str(HEAT_HIGH);
    } else if (20.0..=30.0).contains(&temperature) {
        advice.push_str(TEMP_OPTIMAL);
    } else if temperature < 10.0 {
        advice.push_str(COLD_STRESS);
    }

    if precipitation > 20.0 {
        advice.push_str(WATERLOGGING);
    } else if precipitation < 5.0 && temperature > 25.0 {
        advice.push_str(DROUGHT);
    }

    if forecast.wind_speed_kmh > 30.0 {
        advice.push_str(HIGH_WIND);
    }

    advice.push_str(PEST_MONITORING);
    advice
}

use super::Rule;
use crate::models::{ForecastRecord, Recommendation, RecommendationCategory};

/// Plant disease risk from rain probability, heat and cloud cover
///
/// Risk levels, first match wins:
/// - High: rain chance >70%, max temp >20°C and cloud cover >70%
/// - Moderate: rain chance >50% with max temp 15-25°C
/// - Heat stress: max temp >30°C with rain chance <30%
/// - Otherwise low
pub struct DiseaseRiskRule;

impl Rule for DiseaseRiskRule {
    fn id(&self) -> &'static str {
        "disease_risk"
    }

    fn name(&self) -> &'static str {
        "Plant Disease Risk"
    }

    fn category(&self) -> RecommendationCategory {
        RecommendationCategory::DiseaseRisk
    }

    fn evaluate(&self, forecast: &ForecastRecord) -> Recommendation {
        Recommendation::new(self.category(), plant_disease_risk(forecast))
    }
}

pub fn plant_disease_risk(forecast: &ForecastRecord) -> String {
    let probability = forecast.precipitation_probability_pct;
    let temperature = forecast.max_temperature_c;
    let cloud_cover = forecast.cloud_cover_pct;

    let advice = if probability > 70 && temperature > 20.0 && cloud_cover > 70 {
        "High risk of fungal diseases, especially for grapes and tomatoes. \
         Monitor crops closely and consider preventive fungicide application. \
         Ensure good air circulation in orchards and vineyards."
    } else if probability > 50 && (15.0..=25.0).contains(&temperature) {
        "Moderate risk of plant diseases. Watch for early blight in tomatoes and potatoes. \
         Ensure good air circulation in crops and avoid overhead irrigation."
    } else if temperature > 30.0 && probability < 30 {
        "Low fungal disease risk, but watch for heat stress and sunscald, \
         especially in fruit trees and peppers. \
         Monitor for insect pests which may thrive in hot conditions."
    } else {
        "Low risk of plant diseases. Maintain regular monitoring practices. \
         Focus on general plant health to improve disease resistance."
    };

    advice.to_string()
}

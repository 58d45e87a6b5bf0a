use super::Rule;
use crate::models::{ForecastRecord, Recommendation, RecommendationCategory};

/// Crop selection from the day's average temperature, rainfall and sunshine
///
/// Average temperature is the midpoint of the forecast min and max. Branches:
/// - Hot and dry: avg >25°C, rain <10mm, sun >8h
/// - Moderate: avg 20-25°C, rain 10-20mm
/// - Cool and wet: avg 15-20°C, rain >20mm
/// - Cool: avg <15°C
/// - Otherwise diversify
pub struct CropSelectionRule;

impl Rule for CropSelectionRule {
    fn id(&self) -> &'static str {
        "crop_selection"
    }

    fn name(&self) -> &'static str {
        "Crop Selection"
    }

    fn category(&self) -> RecommendationCategory {
        RecommendationCategory::CropSelection
    }

    fn evaluate(&self, forecast: &ForecastRecord) -> Recommendation {
        Recommendation::new(self.category(), crop_selection_advice(forecast))
    }
}

pub fn crop_selection_advice(forecast: &ForecastRecord) -> String {
    let average_temp = forecast.average_temperature_c();
    let precipitation = forecast.total_precipitation_mm;
    let sun_hours = forecast.sun_hours;

    let advice = if average_temp > 25.0 && precipitation < 10.0 && sun_hours > 8.0 {
        "Hot and dry conditions forecasted. Consider drought-tolerant crops like olives, figs, \
         almonds, and pomegranates. For vegetables, okra, sweet potatoes, and heat-resistant \
         tomato varieties are good choices."
    } else if (20.0..=25.0).contains(&average_temp) && (10.0..=20.0).contains(&precipitation) {
        "Moderate temperatures with adequate rainfall. Excellent conditions for a wide range \
         of crops including citrus fruits, grapes, tomatoes, peppers, and eggplants. Consider \
         planting herbs like thyme and rosemary which thrive in Mediterranean climates."
    } else if (15.0..=20.0).contains(&average_temp) && precipitation > 20.0 {
        "Cool temperatures with high rainfall expected. Good conditions for leafy greens, \
         brassicas (cabbage, cauliflower), and root vegetables. Consider planting cover crops \
         to prevent soil erosion."
    } else if average_temp < 15.0 {
        "Cool conditions forecasted. Focus on cold-hardy crops like spinach, kale, carrots, \
         and onions. It's a good time to plant deciduous fruit trees while they're dormant."
    } else {
        "Varied conditions expected. Diversify your crop selection to mitigate risks. \
         Consider intercropping compatible plants to maximize land use and resilience."
    };

    advice.to_string()
}

use super::Rule;
use crate::models::{ForecastRecord, Recommendation, RecommendationCategory};

/// Planting advice keyed on the daytime high
///
/// Bands are closed ranges checked in order, so a shared boundary belongs to
/// the cooler band (15°C is "cool season", 25°C is "ideal").
///
/// The rainfall clauses only apply when the temperature is not comparable
/// (NaN); every real temperature is claimed by one of the bands above them.
pub struct PlantingRule;

impl Rule for PlantingRule {
    fn id(&self) -> &'static str {
        "planting"
    }

    fn name(&self) -> &'static str {
        "Planting"
    }

    fn category(&self) -> RecommendationCategory {
        RecommendationCategory::Planting
    }

    fn evaluate(&self, forecast: &ForecastRecord) -> Recommendation {
        Recommendation::new(self.category(), planting_advice(forecast))
    }
}

pub fn planting_advice(forecast: &ForecastRecord) -> String {
    let temperature = forecast.max_temperature_c;
    let precipitation = forecast.total_precipitation_mm;

    let advice = if temperature < 10.0 {
        "Too cold for most plantings. Consider cold-resistant crops like spinach, carrots, \
         or plant cover crops to protect soil."
    } else if (10.0..=15.0).contains(&temperature) {
        "Good conditions for planting cool-season crops like peas, lettuce, and brassicas. \
         Protect tender seedlings from frost."
    } else if (15.0..=25.0).contains(&temperature) {
        "Ideal planting conditions for a wide range of crops. \
         Good time for tomatoes, peppers, and eggplants."
    } else if (25.0..=30.0).contains(&temperature) {
        "Suitable for heat-loving crops like melons, squash, and okra. \
         Ensure adequate irrigation for new plantings."
    } else if temperature > 30.0 {
        "High temperatures may stress new plantings. Focus on drought-tolerant crops like \
         sorghum or millet. Provide shade and extra water if planting."
    } else if precipitation > 20.0 {
        "Soil may be too wet for planting. Wait for drier conditions. \
         Consider raised beds or improve drainage."
    } else if precipitation < 5.0 {
        "Dry conditions. Ensure irrigation is available before planting. \
         Consider drought-resistant varieties."
    } else {
        "Good conditions for planting. Ensure proper soil preparation and \
         choose crops suitable for the season."
    };

    advice.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::rules::test_support::{extremes, mild_day};

    fn day(max_temp: f64, precipitation: f64) -> ForecastRecord {
        ForecastRecord {
            max_temperature_c: max_temp,
            total_precipitation_mm: precipitation,
            ..mild_day()
        }
    }

    #[test]
    fn temperature_bands() {
        assert!(planting_advice(&day(-3.0, 0.0)).starts_with("Too cold"));
        assert!(planting_advice(&day(9.99, 0.0)).starts_with("Too cold"));
        assert!(planting_advice(&day(12.0, 0.0)).contains("cool-season crops"));
        assert!(planting_advice(&day(20.0, 0.0)).starts_with("Ideal planting conditions"));
        assert!(planting_advice(&day(27.0, 0.0)).starts_with("Suitable for heat-loving"));
        assert!(planting_advice(&day(31.0, 0.0)).starts_with("High temperatures"));
    }

    #[test]
    fn shared_boundaries_go_to_earlier_band() {
        assert!(planting_advice(&day(10.0, 0.0)).contains("cool-season crops"));
        assert!(planting_advice(&day(15.0, 0.0)).contains("cool-season crops"));
        assert!(planting_advice(&day(25.0, 0.0)).starts_with("Ideal planting conditions"));
        assert!(planting_advice(&day(30.0, 0.0)).starts_with("Suitable for heat-loving"));
    }

    #[test]
    fn rainfall_never_overrides_a_real_temperature() {
        assert!(planting_advice(&day(20.0, 50.0)).starts_with("Ideal planting conditions"));
        assert!(planting_advice(&day(5.0, 0.0)).starts_with("Too cold"));
    }

    #[test]
    fn rainfall_clauses_with_unknown_temperature() {
        assert!(planting_advice(&day(f64::NAN, 25.0)).starts_with("Soil may be too wet"));
        assert!(planting_advice(&day(f64::NAN, 1.0)).starts_with("Dry conditions"));
        assert!(planting_advice(&day(f64::NAN, 10.0)).starts_with("Good conditions for planting."));
    }

    #[test]
    fn total_over_extremes() {
        for forecast in extremes() {
            assert!(!planting_advice(&forecast).is_empty());
        }
    }
}

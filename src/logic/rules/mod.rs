pub mod crop_selection;
pub mod disease_risk;
pub mod engine;
pub mod fruit_tree;
pub mod irrigation;
pub mod planting;

pub use engine::RulesEngine;

use crate::models::{ForecastRecord, Recommendation, RecommendationCategory};

/// Trait for agronomic advice tables
///
/// Every rule is total: it always yields a recommendation, whatever the
/// numbers in the forecast.
pub trait Rule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    fn category(&self) -> RecommendationCategory;

    /// Evaluate the decision table against one day's forecast
    fn evaluate(&self, forecast: &ForecastRecord) -> Recommendation;
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::models::ForecastRecord;

    /// A mild, dry, calm day that sits outside every special branch
    pub fn mild_day() -> ForecastRecord {
        ForecastRecord {
            max_temperature_c: 12.0,
            min_temperature_c: 6.0,
            total_precipitation_mm: 8.0,
            precipitation_probability_pct: 40,
            cloud_cover_pct: 40,
            wind_speed_kmh: 10.0,
            sun_hours: 5.0,
        }
    }

    /// Inputs that have to be handled without failing
    pub fn extremes() -> Vec<ForecastRecord> {
        let values = [
            f64::MIN,
            -273.15,
            -40.0,
            0.0,
            f64::EPSILON,
            15.0,
            25.0,
            30.0,
            35.0,
            1_000.0,
            f64::MAX,
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::NAN,
        ];
        let percents = [0u8, 30, 50, 70, 71, 100];

        let mut out = Vec::new();
        for &value in &values {
            for &pct in &percents {
                out.push(ForecastRecord {
                    max_temperature_c: value,
                    min_temperature_c: value,
                    total_precipitation_mm: value,
                    precipitation_probability_pct: pct,
                    cloud_cover_pct: pct,
                    wind_speed_kmh: value,
                    sun_hours: value,
                });
            }
        }
        out
    }
}

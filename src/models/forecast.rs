use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// One period's weather measurements, the sole input to the rules engine.
///
/// Built by the forecast provider and passed by reference; rules never
/// mutate or retain it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastRecord {
    pub max_temperature_c: f64,
    pub min_temperature_c: f64,
    pub total_precipitation_mm: f64,
    pub precipitation_probability_pct: u8, // 0-100
    pub cloud_cover_pct: u8,               // 0-100
    pub wind_speed_kmh: f64,
    pub sun_hours: f64,
}

impl ForecastRecord {
    pub fn average_temperature_c(&self) -> f64 {
        (self.max_temperature_c + self.min_temperature_c) / 2.0
    }
}

impl Default for ForecastRecord {
    fn default() -> Self {
        Self {
            max_temperature_c: 20.0,
            min_temperature_c: 10.0,
            total_precipitation_mm: 0.0,
            precipitation_probability_pct: 0,
            cloud_cover_pct: 0,
            wind_speed_kmh: 0.0,
            sun_hours: 0.0,
        }
    }
}

/// Weather payload from the advisory backend (`GET azure-maps/weather`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherForecast {
    pub summary: ForecastSummary,
    #[serde(default)]
    pub forecasts: Vec<DailyForecast>,
}

impl WeatherForecast {
    pub fn is_empty(&self) -> bool {
        self.forecasts.is_empty()
    }

    /// The forecast whose date falls on `date` in the provider's local offset
    pub fn for_date(&self, date: NaiveDate) -> Option<ForecastRecord> {
        self.forecasts
            .iter()
            .find(|f| f.local_date() == Some(date))
            .map(DailyForecast::to_record)
    }

    /// Every day in sequence order, tagged with its local date when parseable
    pub fn records(&self) -> Vec<(Option<NaiveDate>, ForecastRecord)> {
        self.forecasts
            .iter()
            .map(|f| (f.local_date(), f.to_record()))
            .collect()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ForecastSummary {
    pub start_date: String,
    pub severity: i32,
    pub phrase: String,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyForecast {
    pub date: String,
    pub temperature: TemperatureRange,
    #[serde(default)]
    pub hours_of_sun: f64,
    pub day: ForecastPeriod,
    pub night: Option<ForecastPeriod>,
}

impl DailyForecast {
    /// Maps the daytime period onto the record the rules consume
    pub fn to_record(&self) -> ForecastRecord {
        ForecastRecord {
            max_temperature_c: self.temperature.maximum.value,
            min_temperature_c: self.temperature.minimum.value,
            total_precipitation_mm: self.day.total_liquid.value,
            precipitation_probability_pct: self.day.precipitation_probability,
            cloud_cover_pct: self.day.cloud_cover,
            wind_speed_kmh: self.day.wind.speed.value,
            sun_hours: self.hours_of_sun,
        }
    }

    pub fn local_date(&self) -> Option<NaiveDate> {
        DateTime::parse_from_rfc3339(&self.date)
            .map(|dt| dt.date_naive())
            .ok()
            .or_else(|| NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemperatureRange {
    pub minimum: Measurement,
    pub maximum: Measurement,
}

/// A value with its unit, as the backend reports temperature, speed and liquid
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    pub value: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub unit_type: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPeriod {
    #[serde(default)]
    pub icon_phrase: String,
    #[serde(default)]
    pub has_precipitation: bool,
    #[serde(default)]
    pub precipitation_probability: u8,
    #[serde(default)]
    pub cloud_cover: u8,
    pub wind: Wind,
    pub total_liquid: Measurement,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wind {
    pub speed: Measurement,
}

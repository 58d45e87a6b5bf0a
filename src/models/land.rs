use super::forecast::WeatherForecast;
use crate::error::{AdvisorError, Result};
use serde::{Deserialize, Serialize};

/// A registered plot of land (`land-info` resource)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandInfo {
    /// Assigned by the backend on create
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub area: f64,
    pub soil_type: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl LandInfo {
    pub fn new(area: f64, soil_type: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            id: None,
            area,
            soil_type: soil_type.into(),
            latitude,
            longitude,
        }
    }

    /// Reject plots the backend would store with nonsense coordinates
    pub fn validate(&self) -> Result<()> {
        if !self.area.is_finite() || self.area <= 0.0 {
            return Err(AdvisorError::InvalidData(format!(
                "area must be a positive number, got {}",
                self.area
            )));
        }
        if self.soil_type.trim().is_empty() {
            return Err(AdvisorError::InvalidData("soil type is required".into()));
        }
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(AdvisorError::InvalidData(format!(
                "latitude {} is outside -90..90",
                self.latitude
            )));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(AdvisorError::InvalidData(format!(
                "longitude {} is outside -180..180",
                self.longitude
            )));
        }
        Ok(())
    }
}

/// A plot together with the forecast for its coordinates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandWeather {
    #[serde(flatten)]
    pub land: LandInfo,
    #[serde(default)]
    pub weather: Option<WeatherForecast>,
}

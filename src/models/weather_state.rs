use super::forecast::WeatherForecast;
use crate::error::AdvisorError;

/// Lifecycle of a single weather request
#[derive(Debug, Clone, Default)]
pub enum WeatherState {
    #[default]
    Loading,
    Success(WeatherForecast),
    Error(String),
    Unauthorized,
}

impl WeatherState {
    /// Settle a finished fetch into its terminal state
    pub fn from_fetch(result: Result<WeatherForecast, AdvisorError>) -> Self {
        match result {
            Ok(weather) if weather.is_empty() => {
                WeatherState::Error("No weather data available".to_string())
            }
            Ok(weather) => WeatherState::Success(weather),
            Err(AdvisorError::Unauthorized) => WeatherState::Unauthorized,
            Err(AdvisorError::HttpStatus(status)) => {
                WeatherState::Error(format!("Failed to fetch weather data: {}", status))
            }
            Err(e) => WeatherState::Error(format!("An error occurred: {}", e)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherState::Loading => "Loading",
            WeatherState::Success(_) => "Success",
            WeatherState::Error(_) => "Error",
            WeatherState::Unauthorized => "Unauthorized",
        }
    }

}

impl std::fmt::Display for WeatherState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeatherState::Error(message) => write!(f, "Error: {}", message),
            _ => write!(f, "{}", self.as_str()),
        }
    }
}

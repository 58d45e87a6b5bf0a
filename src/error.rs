use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data source unavailable: {0}")]
    DataSourceUnavailable(String),

    #[error("Server returned status {0}")]
    HttpStatus(u16),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Unauthorized: access token missing or rejected")]
    Unauthorized,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Unknown rule '{0}'")]
    UnknownRule(String),

    #[error("No forecast data available.")]
    NoForecastAvailable,
}

pub type Result<T> = std::result::Result<T, AdvisorError>;

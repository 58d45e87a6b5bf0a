use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One product quote from `GET market-prices`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketPrice {
    pub id: String,
    pub product_name: String,
    pub price: f64,
    #[serde(default)]
    pub predicted_price: Option<f64>,
    pub unit: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    /// Relative to the API host until resolved by the client
    #[serde(default)]
    pub image_url: Option<String>,
}

impl MarketPrice {
    /// Rewrite a server-relative image path into a full URL
    pub fn resolve_image_url(mut self, resolve: impl Fn(&str) -> String) -> Self {
        self.image_url = match self.image_url.take() {
            Some(url) if url.trim().is_empty() => None,
            Some(url) if url.starts_with("http") => Some(url),
            Some(url) => Some(resolve(&url)),
            None => None,
        };
        self
    }

    /// Predicted minus current price, when the backend has a prediction
    pub fn predicted_change(&self) -> Option<f64> {
        self.predicted_price.map(|predicted| predicted - self.price)
    }
}

use crate::config::ApiConfig;
use crate::error::{AdvisorError, Result};
use crate::models::{LandInfo, LandWeather, MarketPrice, WeatherForecast};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const WEATHER_PATH: &str = "azure-maps/weather";
const LOGIN_PATH: &str = "auth/login";
const MARKET_PRICES_PATH: &str = "market-prices";
const LAND_INFO_PATH: &str = "land-info";

/// Client for the advisory backend's REST API
pub struct AdvisorApiClient {
    client: reqwest::Client,
    config: ApiConfig,
    token: Option<String>,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginResponse {
    #[serde(default)]
    access_token: Option<String>,
}

impl AdvisorApiClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            token: config.access_token.clone(),
            config,
        })
    }

    /// Fall back to a stored bearer token when none is configured
    pub fn with_stored_token(mut self, token: Option<String>) -> Self {
        if self.token.is_none() {
            self.token = token;
        }
        self
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Fetch the multi-day forecast
    pub async fn fetch_weather(&self) -> Result<WeatherForecast> {
        let weather: WeatherForecast = self.get_json(WEATHER_PATH, "weather").await?;
        tracing::debug!("Received {} forecast days", weather.forecasts.len());
        Ok(weather)
    }

    /// Exchange credentials for an access token
    pub async fn login(&self, email: &str, password: &str) -> Result<String> {
        let request = self
            .client
            .post(self.config.endpoint(LOGIN_PATH))
            .json(&LoginRequest { email, password });
        let response = send(request).await?;

        check_login_status(response.status())?;

        let body: LoginResponse = parse(response, "login").await?;
        extract_token(body)
    }

    /// Current market quotes with image URLs made absolute
    pub async fn market_prices(&self) -> Result<Vec<MarketPrice>> {
        let prices: Vec<MarketPrice> = self.get_json(MARKET_PRICES_PATH, "market price").await?;
        tracing::debug!("Received {} market prices", prices.len());

        Ok(prices
            .into_iter()
            .map(|price| price.resolve_image_url(|path| self.config.endpoint(path)))
            .collect())
    }

    pub async fn list_land(&self) -> Result<Vec<LandInfo>> {
        self.get_json(LAND_INFO_PATH, "land info").await
    }

    pub async fn get_land(&self, id: &str) -> Result<LandInfo> {
        self.get_json(&land_path(id), "land info").await
    }

    pub async fn create_land(&self, land: &LandInfo) -> Result<LandInfo> {
        land.validate()?;
        let request = self.request(Method::POST, LAND_INFO_PATH).json(land);
        let response = checked(send(request).await?)?;
        parse(response, "land info").await
    }

    pub async fn update_land(&self, id: &str, land: &LandInfo) -> Result<LandInfo> {
        land.validate()?;
        let body = LandInfo {
            id: Some(id.to_string()),
            ..land.clone()
        };
        let request = self.request(Method::PUT, &land_path(id)).json(&body);
        let response = checked(send(request).await?)?;
        parse(response, "land info").await
    }

    pub async fn delete_land(&self, id: &str) -> Result<()> {
        let request = self.request(Method::DELETE, &land_path(id));
        checked(send(request).await?)?;
        Ok(())
    }

    /// A plot together with the forecast at its coordinates
    pub async fn land_weather(&self, id: &str) -> Result<LandWeather> {
        self.get_json(&format!("{}/weather", land_path(id)), "land weather")
            .await
    }

    /// Test connection to the weather endpoint
    pub async fn test_connection(&self) -> Result<bool> {
        let response = self.get(WEATHER_PATH).await?;
        Ok(response.status().is_success())
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.config.endpoint(path);
        tracing::debug!("{} {}", method, url);

        let request = self.client.request(method, url);
        match self.token {
            Some(ref token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn get(&self, path: &str) -> Result<Response> {
        send(self.request(Method::GET, path)).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, what: &str) -> Result<T> {
        let response = checked(self.get(path).await?)?;
        parse(response, what).await
    }
}

fn land_path(id: &str) -> String {
    format!("{}/{}", LAND_INFO_PATH, id)
}

async fn send(request: RequestBuilder) -> Result<Response> {
    request
        .send()
        .await
        .map_err(|e| AdvisorError::DataSourceUnavailable(format!("Advisory API: {}", e)))
}

async fn parse<T: DeserializeOwned>(response: Response, what: &str) -> Result<T> {
    response.json().await.map_err(|e| {
        AdvisorError::DataSourceUnavailable(format!("Failed to parse {} response: {}", what, e))
    })
}

fn checked(response: Response) -> Result<Response> {
    check_status(response.status())?;
    Ok(response)
}

fn check_status(status: StatusCode) -> Result<()> {
    if status.is_success() {
        Ok(())
    } else if status == StatusCode::UNAUTHORIZED {
        Err(AdvisorError::Unauthorized)
    } else {
        Err(AdvisorError::HttpStatus(status.as_u16()))
    }
}

/// On login a 401 means the credentials were wrong, not the token
fn check_login_status(status: StatusCode) -> Result<()> {
    match check_status(status) {
        Err(AdvisorError::Unauthorized) => Err(AdvisorError::InvalidCredentials),
        other => other,
    }
}

fn extract_token(body: LoginResponse) -> Result<String> {
    body.access_token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AdvisorError::InvalidData("No accessToken received from server".into()))
}

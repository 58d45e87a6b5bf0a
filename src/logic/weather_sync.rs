use crate::datasources::AdvisorApiClient;
use crate::error::{AdvisorError, Result};
use crate::logic::RulesEngine;
use crate::models::{DayAdvice, WeatherForecast, WeatherState};
use chrono::NaiveDate;
use tokio::sync::RwLock;

/// Which forecast days and rules an advice run covers
#[derive(Debug, Clone, Default)]
pub struct AdviceRequest {
    /// Day to evaluate; the first forecast day when `None`
    pub date: Option<NaiveDate>,
    pub all_days: bool,
    /// Only run the rule with this id
    pub rule: Option<String>,
}

/// Fetches the forecast and republishes it as a `WeatherState`
pub struct WeatherSyncService {
    client: AdvisorApiClient,
    engine: RulesEngine,
    state: RwLock<WeatherState>,
}

impl WeatherSyncService {
    pub fn new(client: AdvisorApiClient) -> Self {
        if !client.has_token() {
            tracing::info!("No access token configured - requests are sent unauthenticated");
        }

        Self {
            client,
            engine: RulesEngine::new(),
            state: RwLock::new(WeatherState::Loading),
        }
    }

    pub async fn refresh(&self) -> WeatherState {
        self.set_state(WeatherState::Loading).await;

        let result = self.client.fetch_weather().await;
        if let Err(ref e) = result {
            tracing::warn!("Failed to fetch weather data: {}", e);
        }

        let state = WeatherState::from_fetch(result);
        tracing::debug!("Weather state: {}", state);
        self.set_state(state.clone()).await;
        state
    }

    /// Recommendations for the days selected by `request` from the last fetch
    pub async fn recommendations(&self, request: &AdviceRequest) -> Result<Vec<DayAdvice>> {
        let state = self.state.read().await;
        match &*state {
            WeatherState::Success(weather) => recommend(&self.engine, weather, request),
            WeatherState::Unauthorized => Err(AdvisorError::Unauthorized),
            WeatherState::Loading | WeatherState::Error(_) => {
                Err(AdvisorError::NoForecastAvailable)
            }
        }
    }

    async fn set_state(&self, state: WeatherState) {
        *self.state.write().await = state;
    }
}

/// Select forecast days per `request` and run the rules on each
pub fn recommend(
    engine: &RulesEngine,
    weather: &WeatherForecast,
    request: &AdviceRequest,
) -> Result<Vec<DayAdvice>> {
    let days: Vec<_> = match request.date {
        Some(date) => weather
            .for_date(date)
            .map(|record| (Some(date), record))
            .into_iter()
            .collect(),
        None if request.all_days => weather.records(),
        None => weather.records().into_iter().take(1).collect(),
    };

    if days.is_empty() {
        return Err(AdvisorError::NoForecastAvailable);
    }

    days.into_iter()
        .map(|(date, record)| -> Result<DayAdvice> {
            let recommendations = match request.rule.as_deref() {
                Some(id) => vec![engine
                    .evaluate_rule(id, &record)
                    .ok_or_else(|| AdvisorError::UnknownRule(id.to_string()))?],
                None => engine.advise(std::slice::from_ref(&record))?,
            };
            Ok(DayAdvice {
                date,
                recommendations,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::models::RecommendationCategory;

    fn weather() -> WeatherForecast {
        serde_json::from_value(serde_json::json!({
            "summary": { "phrase": "Hot weekend" },
            "forecasts": [
                {
                    "date": "2025-07-04T07:00:00-04:00",
                    "temperature": {
                        "minimum": { "value": 22.0 },
                        "maximum": { "value": 37.0 }
                    },
                    "hoursOfSun": 11.0,
                    "day": {
                        "precipitationProbability": 5,
                        "cloudCover": 10,
                        "wind": { "speed": { "value": 8.0 } },
                        "totalLiquid": { "value": 0.0 }
                    }
                },
                {
                    "date": "2025-07-05T07:00:00-04:00",
                    "temperature": {
                        "minimum": { "value": 18.0 },
                        "maximum": { "value": 26.0 }
                    },
                    "hoursOfSun": 2.0,
                    "day": {
                        "precipitationProbability": 90,
                        "cloudCover": 95,
                        "wind": { "speed": { "value": 40.0 } },
                        "totalLiquid": { "value": 22.0 }
                    }
                }
            ]
        }))
        .unwrap()
    }

    fn service() -> WeatherSyncService {
        let client = AdvisorApiClient::new(ApiConfig::default()).unwrap();
        WeatherSyncService::new(client)
    }

    fn on(day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2025, 7, day)
    }

    #[test]
    fn recommend_first_day_by_default() {
        let days = recommend(&RulesEngine::new(), &weather(), &AdviceRequest::default()).unwrap();
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].date, on(4));

        let recs = &days[0].recommendations;
        assert_eq!(recs.len(), 5);
        assert!(recs[0].text.starts_with("High temperatures expected"));
        assert!(recs[4].text.starts_with("Hot and dry"));
    }

    #[test]
    fn recommend_for_requested_date() {
        let request = AdviceRequest {
            date: on(5),
            ..Default::default()
        };
        let days = recommend(&RulesEngine::new(), &weather(), &request).unwrap();

        let disease = days[0]
            .recommendations
            .iter()
            .find(|r| r.category == RecommendationCategory::DiseaseRisk)
            .unwrap();
        assert!(disease.text.starts_with("High risk of fungal"));
    }

    #[test]
    fn missing_date_has_no_forecast() {
        let request = AdviceRequest {
            date: NaiveDate::from_ymd_opt(2025, 8, 1),
            ..Default::default()
        };
        let err = recommend(&RulesEngine::new(), &weather(), &request).unwrap_err();
        assert!(matches!(err, AdvisorError::NoForecastAvailable));
    }

    #[test]
    fn all_days_in_sequence_order() {
        let request = AdviceRequest {
            all_days: true,
            ..Default::default()
        };
        let days = recommend(&RulesEngine::new(), &weather(), &request).unwrap();

        let dates: Vec<_> = days.iter().map(|d| d.date).collect();
        assert_eq!(dates, [on(4), on(5)]);
        assert!(days.iter().all(|d| d.recommendations.len() == 5));
    }

    #[test]
    fn all_days_of_empty_forecast() {
        let empty: WeatherForecast =
            serde_json::from_str(r#"{ "summary": {}, "forecasts": [] }"#).unwrap();
        let request = AdviceRequest {
            all_days: true,
            ..Default::default()
        };
        assert!(matches!(
            recommend(&RulesEngine::new(), &empty, &request),
            Err(AdvisorError::NoForecastAvailable)
        ));
    }

    #[test]
    fn single_rule_selection() {
        let request = AdviceRequest {
            all_days: true,
            rule: Some("irrigation".into()),
            ..Default::default()
        };
        let days = recommend(&RulesEngine::new(), &weather(), &request).unwrap();

        assert!(days.iter().all(|d| d.recommendations.len() == 1));
        assert_eq!(
            days[1].recommendations[0].category,
            RecommendationCategory::Irrigation
        );
        assert!(days[1].recommendations[0]
            .text
            .starts_with("Natural rainfall is sufficient"));
    }

    #[test]
    fn unknown_rule_is_an_error() {
        let request = AdviceRequest {
            rule: Some("frost".into()),
            ..Default::default()
        };
        match recommend(&RulesEngine::new(), &weather(), &request) {
            Err(AdvisorError::UnknownRule(id)) => assert_eq!(id, "frost"),
            other => panic!("expected unknown rule, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn starts_loading_without_recommendations() {
        let service = service();
        assert!(matches!(*service.state.read().await, WeatherState::Loading));
        assert!(matches!(
            service.recommendations(&AdviceRequest::default()).await,
            Err(AdvisorError::NoForecastAvailable)
        ));
    }

    #[tokio::test]
    async fn recommendations_follow_state() {
        let service = service();
        let request = AdviceRequest::default();

        service.set_state(WeatherState::Success(weather())).await;
        let days = service.recommendations(&request).await.unwrap();
        assert_eq!(days[0].recommendations.len(), 5);

        service.set_state(WeatherState::Unauthorized).await;
        assert!(matches!(
            service.recommendations(&request).await,
            Err(AdvisorError::Unauthorized)
        ));

        service
            .set_state(WeatherState::Error("No weather data available".into()))
            .await;
        assert!(matches!(
            service.recommendations(&request).await,
            Err(AdvisorError::NoForecastAvailable)
        ));
    }
}

pub mod rules;
pub mod weather_sync;

pub use rules::RulesEngine;
pub use weather_sync::{AdviceRequest, WeatherSyncService};

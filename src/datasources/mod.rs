pub mod advisor_api;

pub use advisor_api::AdvisorApiClient;

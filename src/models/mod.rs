pub mod forecast;
pub mod land;
pub mod market;
pub mod recommendation;
pub mod weather_state;

pub use forecast::*;
pub use land::*;
pub use market::*;
pub use recommendation::*;
pub use weather_state::*;

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod store;
pub mod upstream;

pub use config::AtlasConfig;
pub use error::AtlasError;
pub use models::{Event, Location, WeatherReport};
pub use upstream::{
    EventsClient, GeocodeClient, Upstream, UpstreamError, WeatherClient, EVENT_SEARCH_RADIUS_KM,
};

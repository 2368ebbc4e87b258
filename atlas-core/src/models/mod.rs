pub mod event;
pub mod location;
pub mod weather;

pub use event::Event;
pub use location::Location;
pub use weather::WeatherReport;

/// Human-readable day rendering shared by weather times and event dates,
/// e.g. "Fri Jan 01 2021".
pub(crate) const DAY_FORMAT: &str = "%a %b %d %Y";

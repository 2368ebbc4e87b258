use chrono::{TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::models::DAY_FORMAT;
use crate::upstream::weather::DailyForecast;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct WeatherReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<i32>,
    pub forecast: String,
    pub time: String,
}

impl WeatherReport {
    /// Normalize one daily forecast entry. `time` arrives as Unix seconds and
    /// is rendered as a human-readable day in UTC.
    pub fn from_daily(location_id: Option<i32>, day: &DailyForecast) -> Self {
        Self {
            location_id,
            forecast: day.summary.clone(),
            time: format_unix_day(day.time),
        }
    }
}

fn format_unix_day(secs: i64) -> String {
    match Utc.timestamp_opt(secs, 0).single() {
        Some(dt) => dt.format(DAY_FORMAT).to_string(),
        None => secs.to_string(),
    }
}

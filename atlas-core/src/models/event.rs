use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::DAY_FORMAT;
use crate::upstream::events::UpstreamEvent;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Event {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_query: Option<String>,
    pub link: String,
    pub name: String,
    pub event_date: String,
    pub summary: String,
}

impl Event {
    /// Normalize one upstream event item. The link is the record's natural
    /// key; the start date is rendered as a human-readable day when it
    /// parses, and passed through verbatim otherwise.
    pub fn from_upstream(search_query: Option<&str>, event: &UpstreamEvent) -> Self {
        Self {
            search_query: search_query.map(str::to_string),
            link: event.url.clone(),
            name: event.name.text.clone(),
            event_date: format_event_day(&event.start.local),
            summary: event.summary.clone().unwrap_or_default(),
        }
    }
}

fn format_event_day(local: &str) -> String {
    match NaiveDateTime::parse_from_str(local, "%Y-%m-%dT%H:%M:%S") {
        Ok(dt) => dt.format(DAY_FORMAT).to_string(),
        Err(_) => local.to_string(),
    }
}

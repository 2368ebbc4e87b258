use serde::{Deserialize, Serialize};

use crate::upstream::geocode::GeocodeResponse;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Location {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub search_query: String,
    pub formatted_query: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    /// Normalize a geocode response into a location record, taking the first
    /// result's formatted address and coordinates. Returns `None` when the
    /// response carries no results.
    pub fn from_geocode(query: &str, geo: &GeocodeResponse) -> Option<Self> {
        let first = geo.results.first()?;
        Some(Self {
            id: None,
            search_query: query.to_string(),
            formatted_query: first.formatted_address.clone(),
            latitude: first.geometry.location.lat,
            longitude: first.geometry.location.lng,
        })
    }
}

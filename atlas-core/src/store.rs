//! Persistence gateway — parameterized lookups and inserts per resource kind
//!
//! Lookups are exact matches on each resource's cache key; inserts are
//! insert-or-ignore on the natural key (`locations.search_query`,
//! `events.link`), so a duplicate fetch never creates a second row. No
//! pagination and no ordering guarantee beyond storage order.

use sqlx::PgPool;

use crate::models::{Event, Location, WeatherReport};

pub async fn find_location(pool: &PgPool, query: &str) -> Result<Option<Location>, sqlx::Error> {
    sqlx::query_as::<_, Location>(
        "SELECT id, search_query, formatted_query, latitude, longitude \
         FROM locations WHERE search_query = $1",
    )
    .bind(query)
    .fetch_optional(pool)
    .await
}

pub async fn find_location_by_coords(
    pool: &PgPool,
    latitude: f64,
    longitude: f64,
) -> Result<Option<Location>, sqlx::Error> {
    sqlx::query_as::<_, Location>(
        "SELECT id, search_query, formatted_query, latitude, longitude \
         FROM locations WHERE latitude = $1 AND longitude = $2",
    )
    .bind(latitude)
    .bind(longitude)
    .fetch_optional(pool)
    .await
}

/// Insert a location, ignoring the row if its search query is already
/// cached. Returns the generated id, or `None` on conflict.
pub async fn insert_location(pool: &PgPool, location: &Location) -> Result<Option<i32>, sqlx::Error> {
    let row: Option<(i32,)> = sqlx::query_as(
        "INSERT INTO locations (search_query, formatted_query, latitude, longitude) \
         VALUES ($1, $2, $3, $4) ON CONFLICT (search_query) DO NOTHING RETURNING id",
    )
    .bind(&location.search_query)
    .bind(&location.formatted_query)
    .bind(location.latitude)
    .bind(location.longitude)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| r.0))
}

pub async fn find_weather(pool: &PgPool, location_id: i32) -> Result<Vec<WeatherReport>, sqlx::Error> {
    sqlx::query_as::<_, WeatherReport>(
        "SELECT location_id, forecast, time FROM weather WHERE location_id = $1",
    )
    .bind(location_id)
    .fetch_all(pool)
    .await
}

pub async fn insert_weather(pool: &PgPool, report: &WeatherReport) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO weather (location_id, forecast, time) VALUES ($1, $2, $3)")
        .bind(report.location_id)
        .bind(&report.forecast)
        .bind(&report.time)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn find_events(pool: &PgPool, query: &str) -> Result<Vec<Event>, sqlx::Error> {
    sqlx::query_as::<_, Event>(
        "SELECT search_query, link, name, event_date, summary \
         FROM events WHERE search_query = $1",
    )
    .bind(query)
    .fetch_all(pool)
    .await
}

/// Insert an event, ignoring the row if its link is already cached.
pub async fn insert_event(pool: &PgPool, event: &Event) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO events (search_query, link, name, event_date, summary) \
         VALUES ($1, $2, $3, $4, $5) ON CONFLICT (link) DO NOTHING",
    )
    .bind(&event.search_query)
    .bind(&event.link)
    .bind(&event.name)
    .bind(&event.event_date)
    .bind(&event.summary)
    .execute(pool)
    .await?;
    Ok(())
}

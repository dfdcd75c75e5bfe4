use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    response::Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::services::timezone::{TimezoneService, ZoneOffset};
use crate::utils::datetime::{format_datetime, parse_instant};
use crate::utils::logging::{log_request_start, log_request_success};
use crate::utils::validation::validate_timezone_identifier;

#[derive(Debug, Serialize, Deserialize)]
pub struct TimezoneList {
    /// Length of `timezones`
    pub count: usize,
    /// Identifiers in database order
    pub timezones: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct OffsetQuery {
    /// IANA identifier
    pub zone: String,
    /// RFC 3339 or Unix seconds; now when absent
    pub at: Option<String>,
}

pub async fn list_timezones(State(service): State<TimezoneService>) -> Json<TimezoneList> {
    let timezones = service.available_timezones();
    Json(TimezoneList {
        count: timezones.len(),
        timezones,
    })
}

pub async fn current_offset(
    State(service): State<TimezoneService>,
    Path(zone): Path<String>,
) -> Result<Json<ZoneOffset>, ApiError> {
    lookup(&service, &zone, Utc::now()).map(Json)
}

pub async fn offset_at(
    State(service): State<TimezoneService>,
    query: Result<Query<OffsetQuery>, QueryRejection>,
) -> Result<Json<ZoneOffset>, ApiError> {
    let Query(query) = query?;
    let at = match query.at.as_deref() {
        Some(raw) => parse_instant(raw).map_err(|e| ApiError::bad_request(e.to_string()))?,
        None => Utc::now(),
    };
    lookup(&service, &query.zone, at).map(Json)
}

fn lookup(service: &TimezoneService, zone: &str, at: DateTime<Utc>) -> Result<ZoneOffset, ApiError> {
    let details = format!("{} at {}", zone, format_datetime(&at));
    log_request_start("offset", Some(&details));

    validate_timezone_identifier(zone).map_err(|e| ApiError::bad_request(e.to_string()))?;
    let offset = service.zone_offset(at, zone)?;

    log_request_success("offset", Some(&format!("{} = {}", details, offset.offset)));
    Ok(offset)
}

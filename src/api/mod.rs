//! HTTP surface over [`TimezoneService`].
//!
//! ```text
//! GET /timezones                 list every identifier
//! GET /timezones/{zone}          offset of `zone` right now
//! GET /offset?zone=..&at=..      offset of `zone` at `at` (RFC 3339 or Unix seconds)
//! ```

/// JSON error responses
pub mod error;
/// Timezone route handlers
pub mod timezones;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::services::health::HealthService;
use crate::services::timezone::TimezoneService;

/// Timezone routes only.
pub fn router(timezones: TimezoneService) -> Router {
    Router::new()
        .route("/timezones", get(timezones::list_timezones))
        .route("/timezones/*zone", get(timezones::current_offset))
        .route("/offset", get(timezones::offset_at))
        .with_state(timezones)
}

/// Timezone routes plus health checks, with request tracing.
pub fn app(timezones: TimezoneService) -> Router {
    router(timezones)
        .merge(HealthService::new(timezones).router)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}

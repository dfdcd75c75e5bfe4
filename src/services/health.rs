use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use crate::services::timezone::TimezoneService;

/// Body of `GET /health`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub timezone_database: TimezoneDatabaseHealth,
    pub uptime_seconds: u64,
}

/// Timezone database section of [`HealthResponse`].
#[derive(Debug, Serialize, Deserialize)]
pub struct TimezoneDatabaseHealth {
    pub status: String,
    pub timezone_count: usize,
    pub response_time_ms: u64,
}

#[derive(Clone)]
pub struct HealthState {
    pub timezones: TimezoneService,
    pub start_time: DateTime<Utc>,
}

/// Router serving the health endpoints.
pub struct HealthService {
    pub router: Router,
}

impl HealthService {
    pub fn new(timezones: TimezoneService) -> Self {
        let state = HealthState {
            timezones,
            start_time: Utc::now(),
        };

        let router = Router::new()
            .route("/health", get(health_check))
            .route("/health/ready", get(readiness_check))
            .route("/health/live", get(liveness_check))
            .with_state(state);

        Self { router }
    }
}

async fn health_check(State(state): State<HealthState>) -> Result<Json<HealthResponse>, StatusCode> {
    let start = std::time::Instant::now();

    let db_status = if timezone_database_ready(&state.timezones) {
        "healthy"
    } else {
        "unhealthy"
    };

    let response_time_ms = start.elapsed().as_millis() as u64;
    let uptime = Utc::now()
        .signed_duration_since(state.start_time)
        .num_seconds()
        .max(0) as u64;

    let health_response = HealthResponse {
        status: db_status.to_string(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timezone_database: TimezoneDatabaseHealth {
            status: db_status.to_string(),
            timezone_count: state.timezones.timezone_count(),
            response_time_ms,
        },
        uptime_seconds: uptime,
    };

    if health_response.status == "healthy" {
        Ok(Json(health_response))
    } else {
        Err(StatusCode::SERVICE_UNAVAILABLE)
    }
}

async fn readiness_check(State(state): State<HealthState>) -> Result<Json<&'static str>, StatusCode> {
    if timezone_database_ready(&state.timezones) {
        Ok(Json("ready"))
    } else {
        Err(StatusCode::SERVICE_UNAVAILABLE)
    }
}

async fn liveness_check() -> Json<&'static str> {
    Json("alive")
}

/// The database must list at least one zone and resolve UTC to a zero offset.
fn timezone_database_ready(timezones: &TimezoneService) -> bool {
    timezones.timezone_count() > 0 && timezones.offset_seconds(Utc::now(), "UTC") == Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;

    fn create_test_server() -> TestServer {
        let health_service = HealthService::new(TimezoneService::new());
        TestServer::new(health_service.router).expect("Failed to create test server")
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let server = create_test_server();

        let response = server.get("/health").await;

        assert_eq!(response.status_code(), StatusCode::OK);

        let health_response: HealthResponse = response.json();
        assert_eq!(health_response.status, "healthy");
        assert_eq!(health_response.timezone_database.status, "healthy");
        assert!(health_response.timezone_database.timezone_count > 0);
        assert_eq!(health_response.version, env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_readiness_endpoint() {
        let server = create_test_server();

        let response = server.get("/health/ready").await;

        assert_eq!(response.status_code(), StatusCode::OK);

        let ready_response: String = response.json();
        assert_eq!(ready_response, "ready");
    }

    #[tokio::test]
    async fn test_liveness_endpoint() {
        let server = create_test_server();

        let response = server.get("/health/live").await;

        assert_eq!(response.status_code(), StatusCode::OK);

        let alive_response: String = response.json();
        assert_eq!(alive_response, "alive");
    }
}

//! JSON error bodies: `{ "code": "unknown_timezone", "message": "..." }`.

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::services::timezone::TimezoneError;
use crate::utils::logging::log_request_error;

/// Body of every 4xx response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Machine-readable error kind, e.g. `unknown_timezone`
    pub code: String,
    /// Human-readable detail
    pub message: String,
}

/// Error returned by handlers; rendered as [`ApiErrorBody`].
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            code: "bad_request",
            message: msg.into(),
        }
    }

    pub fn unknown_timezone(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            code: "unknown_timezone",
            message: msg.into(),
        }
    }
}

impl From<TimezoneError> for ApiError {
    fn from(err: TimezoneError) -> Self {
        match err {
            TimezoneError::UnknownTimezone(_) => ApiError::unknown_timezone(err.to_string()),
            TimezoneError::InstantOutOfRange(_) => ApiError::bad_request(err.to_string()),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        log_request_error(self.code, &self.message);

        let body = ApiErrorBody {
            code: self.code.to_string(),
            message: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

use tracing::{error, info, warn};

/// Logs request start with consistent format
pub fn log_request_start(operation: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("REQ_START: {} - {}", operation, d),
        None => info!("REQ_START: {}", operation),
    }
}

/// Logs request completion with consistent format
pub fn log_request_success(operation: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("REQ_SUCCESS: {} - {}", operation, d),
        None => info!("REQ_SUCCESS: {}", operation),
    }
}

/// Logs request errors with consistent format
pub fn log_request_error(operation: &str, error: &str) {
    error!("REQ_ERROR: {} - {}", operation, error);
}

/// Logs lookups of identifiers missing from the timezone database
pub fn log_unknown_timezone(zone_id: &str) {
    warn!("UNKNOWN_TZ: '{}' is not in the timezone database", zone_id);
}

/// Logs system events with consistent format
pub fn log_system_event(event: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("SYSTEM: {} - {}", event, d),
        None => info!("SYSTEM: {}", event),
    }
}

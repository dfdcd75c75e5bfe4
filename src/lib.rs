//! # tz-datetime
//!
//! Timezone lookups backed by the IANA tz database compiled into `chrono-tz`.
//!
//! ## Features
//! - List every known timezone identifier
//! - Resolve the UTC offset of a zone at any instant, DST included
//! - Unknown zones are reported as errors, never as a zero offset
//! - HTTP endpoints and a `tzquery` command line tool over the same service

/// HTTP routes exposing the timezone service
pub mod api;
/// Configuration management and environment variables
pub mod config;
/// Timezone lookups and health endpoints
pub mod services;
/// Utility functions for datetime, validation, and logging
pub mod utils;

pub use services::timezone::{TimezoneError, TimezoneService, ZoneOffset};

/// Instant parsing and offset formatting
pub mod datetime;
/// Structured log helpers
pub mod logging;
/// Input checks ahead of database lookups
pub mod validation;

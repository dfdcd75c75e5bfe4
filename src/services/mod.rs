/// Health and readiness endpoints
pub mod health;
/// Timezone listing and offset lookups
pub mod timezone;

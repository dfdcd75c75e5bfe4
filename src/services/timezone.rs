//! Timezone lookups against the IANA database bundled with `chrono-tz`.

use chrono::{DateTime, Offset, TimeZone, Utc};
use chrono_tz::{Tz, TZ_VARIANTS};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::datetime::format_offset;
use crate::utils::logging::log_unknown_timezone;

/// Errors returned by [`TimezoneService`] lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimezoneError {
    /// The identifier is not present in the timezone database.
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    /// The epoch value cannot be represented as a datetime.
    #[error("Instant out of range: {0}ms since epoch")]
    InstantOutOfRange(i64),
}

/// A resolved offset for one zone at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneOffset {
    /// Canonical identifier as spelled in the database
    pub zone: String,
    /// Instant the offset applies to
    pub at: DateTime<Utc>,
    /// Seconds east of UTC
    pub offset_seconds: i32,
    /// `offset_seconds` rendered as `+HH:MM`
    pub offset: String,
}

/// Stateless adapter over the timezone database.
///
/// Every method is a pure lookup, so the service can be copied freely and
/// shared across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimezoneService;

// Lookups go to the compiled-in database; `self` carries no state.
#[allow(clippy::unused_self)]
impl TimezoneService {
    /// Creates a handle to the bundled timezone database.
    pub fn new() -> Self {
        Self
    }

    /// Every identifier known to the database, in database order.
    pub fn available_timezones(&self) -> Vec<String> {
        TZ_VARIANTS.iter().map(|tz| tz.name().to_string()).collect()
    }

    /// Number of identifiers in the database.
    pub fn timezone_count(&self) -> usize {
        TZ_VARIANTS.len()
    }

    /// Whether `zone_id` names a zone in the database.
    pub fn is_known(&self, zone_id: &str) -> bool {
        zone_id.parse::<Tz>().is_ok()
    }

    /// Looks up `zone_id`, exact match only.
    pub fn resolve(&self, zone_id: &str) -> Result<Tz, TimezoneError> {
        zone_id.parse::<Tz>().map_err(|_| {
            log_unknown_timezone(zone_id);
            TimezoneError::UnknownTimezone(zone_id.to_string())
        })
    }

    /// Signed offset from UTC, in seconds, that `zone_id` observes at `instant`.
    pub fn offset_seconds(&self, instant: DateTime<Utc>, zone_id: &str) -> Result<i32, TimezoneError> {
        let tz = self.resolve(zone_id)?;
        Ok(offset_of(tz, instant))
    }

    /// Millisecond variant of [`offset_seconds`](Self::offset_seconds) taking
    /// the instant as milliseconds since the Unix epoch.
    pub fn offset_millis(&self, zone_id: &str, utc_millis: i64) -> Result<i64, TimezoneError> {
        let tz = self.resolve(zone_id)?;
        let instant = DateTime::from_timestamp_millis(utc_millis)
            .ok_or(TimezoneError::InstantOutOfRange(utc_millis))?;
        Ok(i64::from(offset_of(tz, instant)) * 1000)
    }

    /// Resolved offset of `zone_id` at `instant`, with its `+HH:MM` rendering.
    pub fn zone_offset(&self, instant: DateTime<Utc>, zone_id: &str) -> Result<ZoneOffset, TimezoneError> {
        let tz = self.resolve(zone_id)?;
        let offset_seconds = offset_of(tz, instant);

        Ok(ZoneOffset {
            zone: tz.name().to_string(),
            at: instant,
            offset_seconds,
            offset: format_offset(offset_seconds),
        })
    }
}

fn offset_of(tz: Tz, instant: DateTime<Utc>) -> i32 {
    tz.offset_from_utc_datetime(&instant.naive_utc())
        .fix()
        .local_minus_utc()
}

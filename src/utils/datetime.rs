use anyhow::{anyhow, Result};
use chrono::{DateTime, SecondsFormat, Utc};

/// Parses an instant given either as RFC 3339 or as signed Unix seconds.
pub fn parse_instant(input: &str) -> Result<DateTime<Utc>> {
    let input = input.trim();

    if input.is_empty() {
        return Err(anyhow!("Instant cannot be empty"));
    }

    if let Ok(seconds) = input.parse::<i64>() {
        return DateTime::from_timestamp(seconds, 0)
            .ok_or_else(|| anyhow!("Unix timestamp {} is out of range", seconds));
    }

    DateTime::parse_from_rfc3339(input)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| anyhow!("Invalid instant '{}': {}", input, e))
}

pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Renders an offset in seconds as `+HH:MM`, or `+HH:MM:SS` when it is not
/// a whole number of minutes.
pub fn format_offset(offset_seconds: i32) -> String {
    let sign = if offset_seconds < 0 { '-' } else { '+' };
    let total = offset_seconds.unsigned_abs();
    let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);

    if seconds == 0 {
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        format!("{}{:02}:{:02}:{:02}", sign, hours, minutes, seconds)
    }
}

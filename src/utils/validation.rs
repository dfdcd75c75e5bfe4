use anyhow::{anyhow, Result};

/// Longest identifier accepted before a database lookup is attempted.
pub const MAX_TIMEZONE_ID_LEN: usize = 64;

/// Syntax check for an IANA-style identifier. Whether the zone exists is
/// decided by the timezone service, not here.
pub fn validate_timezone_identifier(zone_id: &str) -> Result<()> {
    if zone_id.trim().is_empty() {
        return Err(anyhow!("Timezone identifier cannot be empty"));
    }

    if zone_id.len() > MAX_TIMEZONE_ID_LEN {
        return Err(anyhow!(
            "Timezone identifier cannot be longer than {} characters",
            MAX_TIMEZONE_ID_LEN
        ));
    }

    if !zone_id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | '_' | '+' | '-'))
    {
        return Err(anyhow!(
            "Timezone identifier can only contain letters, digits, '/', '_', '+' and '-'"
        ));
    }

    if zone_id.starts_with('/') || zone_id.ends_with('/') || zone_id.contains("//") {
        return Err(anyhow!("Timezone identifier has an empty path segment"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_timezone_identifier_valid() {
        assert!(validate_timezone_identifier("UTC").is_ok());
        assert!(validate_timezone_identifier("America/New_York").is_ok());
        assert!(validate_timezone_identifier("America/Argentina/Buenos_Aires").is_ok());
        assert!(validate_timezone_identifier("Etc/GMT+5").is_ok());
        assert!(validate_timezone_identifier("America/Port-au-Prince").is_ok());
    }

    #[test]
    fn test_validate_timezone_identifier_empty() {
        assert!(validate_timezone_identifier("").is_err());
        assert!(validate_timezone_identifier("   ").is_err());
    }

    #[test]
    fn test_validate_timezone_identifier_bad_chars() {
        assert!(validate_timezone_identifier("Europe/Paris ").is_err());
        assert!(validate_timezone_identifier("../etc/passwd").is_err());
        assert!(validate_timezone_identifier("Europe\\Paris").is_err());
    }

    #[test]
    fn test_validate_timezone_identifier_segments() {
        assert!(validate_timezone_identifier("/Europe").is_err());
        assert!(validate_timezone_identifier("Europe/").is_err());
        assert!(validate_timezone_identifier("Europe//Paris").is_err());
    }

    #[test]
    fn test_validate_timezone_identifier_length() {
        assert!(validate_timezone_identifier(&"A".repeat(MAX_TIMEZONE_ID_LEN)).is_ok());
        assert!(validate_timezone_identifier(&"A".repeat(MAX_TIMEZONE_ID_LEN + 1)).is_err());
    }
}

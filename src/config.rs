use anyhow::{anyhow, Result};
use std::env;

use crate::utils::validation::validate_timezone_identifier;

/// Runtime settings read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// `BIND_ADDRESS`, default `0.0.0.0`
    pub bind_address: String,
    /// `HTTP_PORT`, default `3000`
    pub http_port: u16,
    /// `DEFAULT_TIMEZONE`, default `UTC`; zone used by `tzquery offset` without a zone
    pub default_timezone: String,
}

impl Config {
    /// Reads the settings, falling back to defaults for unset variables.
    pub fn from_env() -> Result<Self> {
        let bind_address = env::var("BIND_ADDRESS")
            .unwrap_or_else(|_| "0.0.0.0".to_string());
        let bind_address = if bind_address.trim().is_empty() {
            "0.0.0.0".to_string()
        } else {
            bind_address.trim().to_string()
        };

        let port_str = env::var("HTTP_PORT")
            .unwrap_or_else(|_| "3000".to_string());
        let http_port = port_str.trim()
            .parse()
            .map_err(|_| anyhow!("Invalid HTTP_PORT"))?;

        let default_timezone = env::var("DEFAULT_TIMEZONE")
            .unwrap_or_else(|_| "UTC".to_string());
        validate_timezone_identifier(&default_timezone)
            .map_err(|e| anyhow!("Invalid DEFAULT_TIMEZONE: {}", e))?;

        Ok(Config {
            bind_address,
            http_port,
            default_timezone,
        })
    }

    /// `bind_address:http_port`
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.http_port)
    }
}

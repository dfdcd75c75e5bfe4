//! # tz-datetime Main Entry Point
//!
//! Initializes logging, loads configuration and serves the timezone and
//! health endpoints until Ctrl-C.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tz_datetime::api;
use tz_datetime::config::Config;
use tz_datetime::services::timezone::TimezoneService;
use tz_datetime::utils::logging::log_system_event;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tz_datetime=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting tz-datetime v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration loaded - Listen: {}, Default timezone: {}",
        config.listen_addr(), config.default_timezone);

    let timezones = TimezoneService::new();
    log_system_event(
        "timezone database loaded",
        Some(&format!("{} zones", timezones.timezone_count())),
    );

    let listener = tokio::net::TcpListener::bind(config.listen_addr())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", config.listen_addr(), e))?;

    info!("HTTP server starting on {}", config.listen_addr());

    axum::serve(listener, api::app(timezones))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("HTTP server error: {}", e))?;

    info!("Application stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    log_system_event("shutdown requested", None);
}

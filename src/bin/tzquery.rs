use anyhow::{anyhow, Result};
use chrono::Utc;
use std::env;
use tz_datetime::config::Config;
use tz_datetime::services::timezone::{TimezoneError, TimezoneService};
use tz_datetime::utils::datetime::{format_datetime, parse_instant};
use tz_datetime::utils::validation::validate_timezone_identifier;

fn main() -> Result<()> {
    // Quiet by default; RUST_LOG=tz_datetime=debug shows lookups
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "error".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let command = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match command {
        "list" => {
            list_timezones(args.get(2).map(|s| s.as_str()));
            Ok(())
        }
        "offset" => show_offset(args.get(2).map(|s| s.as_str()), args.get(3).map(|s| s.as_str())),
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            print_help();
            std::process::exit(1);
        }
    }
}

fn list_timezones(prefix: Option<&str>) {
    let service = TimezoneService::new();

    for zone in service.available_timezones() {
        if prefix.map_or(true, |p| zone.starts_with(p)) {
            println!("{zone}");
        }
    }
}

fn show_offset(zone: Option<&str>, instant: Option<&str>) -> Result<()> {
    let zone = match zone {
        Some(zone) => zone.to_string(),
        None => {
            dotenvy::dotenv().ok();
            Config::from_env()?.default_timezone
        }
    };

    validate_timezone_identifier(&zone)?;

    let at = match instant {
        Some(raw) => parse_instant(raw)?,
        None => Utc::now(),
    };

    let service = TimezoneService::new();
    match service.zone_offset(at, &zone) {
        Ok(offset) => {
            println!("{}  {}  {} ({}s)",
                offset.zone, format_datetime(&offset.at), offset.offset, offset.offset_seconds);
            Ok(())
        }
        Err(TimezoneError::UnknownTimezone(zone)) => {
            eprintln!("❌ Unknown timezone: {zone}");
            eprintln!("💡 Run 'tzquery list' to see the available identifiers");
            std::process::exit(1);
        }
        Err(e) => Err(anyhow!(e)),
    }
}

fn print_help() {
    println!("🕐 tz-datetime - Timezone Query Tool");
    println!();
    println!("USAGE:");
    println!("    tzquery [COMMAND]");
    println!();
    println!("COMMANDS:");
    println!("    list [PREFIX]              List timezone identifiers, optionally filtered by prefix");
    println!("    offset [ZONE] [INSTANT]    Show the UTC offset of ZONE at INSTANT (default: now)");
    println!("    help                       Show this help message");
    println!();
    println!("INSTANT is RFC 3339 (2024-07-01T12:00:00Z) or Unix seconds.");
    println!();
    println!("ENVIRONMENT:");
    println!("    DEFAULT_TIMEZONE   Zone used when ZONE is omitted (default: UTC)");
    println!();
    println!("EXAMPLES:");
    println!("    tzquery list Europe/                        # European zones");
    println!("    tzquery offset America/New_York             # Offset right now");
    println!("    tzquery offset Asia/Kolkata 1700000000      # Offset at a Unix time");
    println!();
}

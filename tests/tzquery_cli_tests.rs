#![allow(clippy::unwrap_used)]

use std::process::{Command, Output};

fn tzquery(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tzquery"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_offset_known_zone() {
    // 2024-01-15T12:00:00Z
    let output = tzquery(&["offset", "Asia/Kolkata", "1705320000"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Asia/Kolkata"));
    assert!(stdout.contains("+05:30"));
    assert!(stdout.contains("(19800s)"));
}

#[test]
fn test_offset_unknown_zone_exits_with_error() {
    let output = tzquery(&["offset", "invalid/zone", "1705320000"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty(), "Unknown zone must not print an offset");
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Unknown timezone: invalid/zone"));
}

#[test]
fn test_offset_malformed_zone_rejected() {
    let output = tzquery(&["offset", "Europe//Paris", "0"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_list_with_prefix() {
    let output = tzquery(&["list", "Europe/"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.lines().any(|l| l == "Europe/Paris"));
    assert!(stdout.lines().all(|l| l.starts_with("Europe/")));
}

#[test]
fn test_unknown_command_exits_with_error() {
    let output = tzquery(&["frobnicate"]);
    assert_eq!(output.status.code(), Some(1));
}

//! Tests for CLI argument parsing.

use clap::Parser;
use std::path::PathBuf;
use trace_clean::{Config, LogFormat, LogLevel};

#[test]
fn test_minimal_invocation() {
    let config = Config::try_parse_from(["trace_clean", "trace.json"]).unwrap();
    assert_eq!(config.file, PathBuf::from("trace.json"));
    assert!(config.output.is_none());
    assert!(config.status_codes.is_none());
}

#[test]
fn test_stdin_sentinel_accepted() {
    let config = Config::try_parse_from(["trace_clean", "-"]).unwrap();
    assert_eq!(config.file, PathBuf::from("-"));
}

#[test]
fn test_output_flag() {
    let config =
        Config::try_parse_from(["trace_clean", "trace.json", "--output", "out.json"]).unwrap();
    assert_eq!(config.output, Some(PathBuf::from("out.json")));

    let short = Config::try_parse_from(["trace_clean", "trace.json", "-o", "out.json"]).unwrap();
    assert_eq!(short.output, Some(PathBuf::from("out.json")));
}

#[test]
fn test_status_codes_flag_accepts_path_or_url() {
    let local = Config::try_parse_from([
        "trace_clean",
        "trace.json",
        "--status-codes",
        "static/data/http_status_codes.json",
    ])
    .unwrap();
    assert_eq!(
        local.status_codes.as_deref(),
        Some("static/data/http_status_codes.json")
    );

    let remote = Config::try_parse_from([
        "trace_clean",
        "trace.json",
        "--status-codes",
        "https://example.com/http_status_codes.json",
    ])
    .unwrap();
    assert_eq!(
        remote.status_codes.as_deref(),
        Some("https://example.com/http_status_codes.json")
    );
}

#[test]
fn test_log_flags() {
    let config = Config::try_parse_from([
        "trace_clean",
        "trace.json",
        "--log-level",
        "debug",
        "--log-format",
        "json",
    ])
    .unwrap();
    assert!(matches!(config.log_level, LogLevel::Debug));
    assert!(matches!(config.log_format, LogFormat::Json));
}

#[test]
fn test_missing_input_file_is_an_error() {
    assert!(Config::try_parse_from(["trace_clean"]).is_err());
}

#[test]
fn test_unknown_flag_is_an_error() {
    assert!(Config::try_parse_from(["trace_clean", "trace.json", "--frobnicate"]).is_err());
}

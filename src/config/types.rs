//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Application configuration, parsed from the command line.
///
/// The input file carries a traced hop chain as a JSON array of
/// `{"Hop", "Status", "URL"}` objects; `trace_clean` sanitizes the final hop,
/// resolves status tooltips, and writes the export artifact.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "trace_clean",
    version,
    about = "Strips tracking parameters from a traced redirect chain and exports the result"
)]
pub struct Config {
    /// Trace input file containing the hop chain as JSON ("-" reads stdin)
    pub file: PathBuf,

    /// Where to write the export artifact (default: gotrace_data.json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Status-code table source: a local JSON path or an http(s):// URL
    #[arg(long)]
    pub status_codes: Option<String>,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}

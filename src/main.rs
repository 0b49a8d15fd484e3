//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `trace_clean` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use trace_clean::{init_logger_with, run_clean, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_clean(config).await {
        Ok(report) => {
            println!(
                "Processed {} hop{}",
                report.total_hops,
                if report.total_hops == 1 { "" } else { "s" }
            );
            if let Some(url) = &report.cleaned_url {
                println!("Final hop: {url}");
            }
            if !report.removed_params.is_empty() {
                println!("Removed parameters: {}", report.removed_params.join(", "));
            }
            println!("Export saved to {}", report.export_path.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("trace_clean error: {:#}", e);
            process::exit(1);
        }
    }
}

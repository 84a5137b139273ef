//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `ip_lookup` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use ip_lookup::initialization::init_logger_with;
use ip_lookup::{run_lookup, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_lookup(config).await {
        Ok(report) => {
            println!(
                "Looked up {} address{} ({} succeeded, {} failed, {} errored) in {:.1}s",
                report.total,
                if report.total == 1 { "" } else { "es" },
                report.succeeded,
                report.failed,
                report.errored,
                report.elapsed_seconds
            );
            if report.cancelled {
                println!("Run was cancelled before all addresses were attempted");
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("ip_lookup error: {:#}", e);
            process::exit(1);
        }
    }
}

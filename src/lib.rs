//! ip_lookup library: rate-limited sequential IP geolocation lookups
//!
//! This library reads a list of IP addresses, queries a geolocation provider
//! for each one sequentially with a fixed inter-request delay (the provider's
//! free tier caps requests per rolling minute), and accumulates exactly one
//! result record per address in input order. A per-item failure is contained
//! in its record; it is never retried and never aborts the rest of the batch.
//! The completed collection can be exported to CSV.
//!
//! # Example
//!
//! ```no_run
//! use ip_lookup::{run_lookup, Config};
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     file: PathBuf::from("ips.txt"),
//!     delay_ms: 1500,
//!     ..Default::default()
//! };
//!
//! let report = run_lookup(config).await?;
//! println!(
//!     "Looked up {} addresses: {} succeeded",
//!     report.total, report.succeeded
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod config;
pub mod error_handling;
pub mod export;
pub mod initialization;
pub mod input;
pub mod models;
pub mod provider;
pub mod runner;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{FailureKind, LookupError, RunStats};
pub use export::export_csv;
pub use models::{LookupRecord, LookupStatus, PLACEHOLDER};
pub use provider::{GeoLookup, GeoProvider, IpApiProvider, ProxiedProvider};
pub use run::{run_lookup, LookupReport};
pub use runner::{run_batch, RecordObserver};

// Internal run module (wires configuration, provider, and runner together)
mod run {
    use std::sync::Arc;
    use std::time::Duration;

    use anyhow::{Context, Result};
    use log::{info, warn};
    use tokio_util::sync::CancellationToken;

    use crate::config::Config;
    use crate::error_handling::RunStats;
    use crate::export::export_csv;
    use crate::initialization::init_client;
    use crate::input::read_targets;
    use crate::models::{LookupRecord, LookupStatus};
    use crate::provider::{GeoProvider, IpApiProvider, ProxiedProvider};
    use crate::runner::{run_batch, RecordObserver};

    /// Results of a completed (or cancelled) lookup run.
    #[derive(Debug, Clone)]
    pub struct LookupReport {
        /// Number of addresses attempted (equals `records.len()`)
        pub total: usize,
        /// Lookups the provider resolved
        pub succeeded: usize,
        /// Lookups the provider declined to resolve
        pub failed: usize,
        /// Lookups where the transport itself failed
        pub errored: usize,
        /// Whether the run was cancelled before all addresses were attempted
        pub cancelled: bool,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
        /// The result collection, one record per attempted address in input
        /// order
        pub records: Vec<LookupRecord>,
    }

    /// Runs a batch lookup with the provided configuration.
    ///
    /// This is the main entry point for the library. It reads addresses from
    /// the input file (or stdin), looks each one up sequentially with pacing,
    /// and optionally exports the completed collection to CSV.
    ///
    /// # Errors
    ///
    /// This function returns an error if:
    /// - The input file cannot be read
    /// - The input contains no addresses (checked before any network call)
    /// - The HTTP client cannot be initialized
    /// - The CSV export fails
    ///
    /// Per-address lookup failures are not errors: they are contained in the
    /// result records.
    pub async fn run_lookup(config: Config) -> Result<LookupReport> {
        let targets = read_targets(&config.file).await?;
        if targets.is_empty() {
            anyhow::bail!("input contains no addresses to look up");
        }

        info!(
            "Looking up {} address(es) with {} ms spacing",
            targets.len(),
            config.delay_ms
        );

        let client = init_client(&config).context("Failed to initialize HTTP client")?;
        let provider: Box<dyn GeoProvider> = match config.proxy.as_deref() {
            Some(proxy) => {
                info!("Routing lookups through fetch proxy {proxy}");
                Box::new(ProxiedProvider::new(
                    Arc::clone(&client),
                    proxy,
                    &config.endpoint,
                ))
            }
            None => Box::new(IpApiProvider::new(Arc::clone(&client), &config.endpoint)),
        };

        let cancel = CancellationToken::new();
        let signal_cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("Interrupt received, stopping after the current lookup");
                signal_cancel.cancel();
            }
        });

        let stats = RunStats::new();

        // Presentation stays out of the batch loop: the runner hands each
        // finished record to this observer and knows nothing about rendering.
        let observer: RecordObserver = Arc::new(|record: &LookupRecord| match &record.status {
            LookupStatus::Success => info!(
                "{}: {} | {} | {}, {}, {} ({}, {})",
                record.ip,
                record.isp,
                record.org,
                record.city,
                record.region,
                record.country,
                record.lat,
                record.lon
            ),
            LookupStatus::Failed { message } => warn!("{}: failed: {}", record.ip, message),
            LookupStatus::Error { message } => warn!("{}: error: {}", record.ip, message),
        });

        let start_time = std::time::Instant::now();
        let records = run_batch(
            provider.as_ref(),
            &targets,
            Duration::from_millis(config.delay_ms),
            &cancel,
            &stats,
            Some(&observer),
        )
        .await;
        let elapsed_seconds = start_time.elapsed().as_secs_f64();

        stats.log_summary();

        if let Some(output) = &config.output {
            let written =
                export_csv(&records, Some(output)).context("Failed to export results to CSV")?;
            info!("Exported {} row(s) to {}", written, output.display());
        }

        let succeeded = records
            .iter()
            .filter(|r| matches!(r.status, LookupStatus::Success))
            .count();
        let failed = records
            .iter()
            .filter(|r| matches!(r.status, LookupStatus::Failed { .. }))
            .count();
        let errored = records
            .iter()
            .filter(|r| matches!(r.status, LookupStatus::Error { .. }))
            .count();
        let cancelled = records.len() < targets.len();

        Ok(LookupReport {
            total: records.len(),
            succeeded,
            failed,
            errored,
            cancelled,
            elapsed_seconds,
            records,
        })
    }
}

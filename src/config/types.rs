//! Configuration types and CLI options.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_DELAY_MS, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};

/// Logging level for the application.
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
/// - `Plain`: human-readable format with colors (default)
/// - `Json`: structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options and library configuration.
///
/// Generated by `clap` from the field attributes; can also be constructed
/// programmatically via `Config { .. Default::default() }` when used as a
/// library.
///
/// # Examples
///
/// ```bash
/// # Basic usage
/// ip_lookup ips.txt
///
/// # Read from stdin, export to CSV
/// cat ips.txt | ip_lookup - --output results.csv
///
/// # Route through a fetch proxy with tighter pacing
/// ip_lookup ips.txt --proxy https://api.allorigins.win --delay-ms 2000
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ip_lookup",
    about = "Looks up geolocation data for a list of IP addresses."
)]
pub struct Config {
    /// File to read addresses from, one per line (`-` for stdin)
    #[arg(value_parser)]
    pub file: PathBuf,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Pause between lookups in milliseconds
    ///
    /// The free ip-api.com tier allows 45 requests per rolling minute, so
    /// 60_000 / delay_ms must stay under that ceiling. The default (1500 ms)
    /// works out to at most 40 requests/minute.
    #[arg(long, default_value_t = DEFAULT_DELAY_MS)]
    pub delay_ms: u64,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Geolocation endpoint base URL; the address is appended as a path
    /// segment
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Fetch-proxy base URL (e.g. https://api.allorigins.win)
    ///
    /// When set, lookups are routed through the proxy's `/get?url=` JSON
    /// envelope instead of calling the endpoint directly.
    #[arg(long)]
    pub proxy: Option<String>,

    /// Write the completed result collection to this CSV file
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from("ips.txt"),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            delay_ms: DEFAULT_DELAY_MS,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            proxy: None,
            output: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.delay_ms, DEFAULT_DELAY_MS);
        assert_eq!(config.timeout_seconds, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(config.proxy.is_none());
        assert!(config.output.is_none());
    }
}

//! Error type definitions.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Categories of failed lookups, used for run statistics.
///
/// Transport categories mirror the distinctions `reqwest` exposes; `Envelope`
/// covers fetch-proxy unwrap failures and `Provider` covers lookups where the
/// provider responded but declined to resolve the address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FailureKind {
    /// The request timed out.
    Timeout,
    /// The connection could not be established.
    Connect,
    /// The server returned a non-2xx HTTP status.
    HttpStatus,
    /// The response body could not be decoded as the expected JSON.
    Decode,
    /// The fetch-proxy envelope was missing or malformed.
    Envelope,
    /// The provider responded but reported a non-success status.
    Provider,
    /// Any other transport-level failure.
    Other,
}

impl FailureKind {
    /// Returns a human-readable string representation of the failure kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Timeout => "Request timeout",
            FailureKind::Connect => "Connection failure",
            FailureKind::HttpStatus => "HTTP status error",
            FailureKind::Decode => "Response decode error",
            FailureKind::Envelope => "Proxy envelope error",
            FailureKind::Provider => "Provider failure",
            FailureKind::Other => "Other transport error",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single failed lookup.
///
/// `Transport` means nothing usable came back from the network (connection
/// failure, timeout, non-2xx status, malformed envelope or JSON). `Provider`
/// means the transport succeeded but the remote service declined to resolve
/// the address. The runner converts both into result records; neither aborts
/// the batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The network call itself failed.
    #[error("{message}")]
    Transport {
        /// Category of the transport failure.
        kind: FailureKind,
        /// Short diagnostic message.
        message: String,
    },

    /// The provider responded but reported a non-success status.
    #[error("{message}")]
    Provider {
        /// The provider's message, or a generic placeholder.
        message: String,
    },
}

impl LookupError {
    /// Returns the statistics category for this error.
    pub fn kind(&self) -> FailureKind {
        match self {
            LookupError::Transport { kind, .. } => *kind,
            LookupError::Provider { .. } => FailureKind::Provider,
        }
    }
}

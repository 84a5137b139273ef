//! Categorization of transport errors into statistics buckets.

use super::types::{FailureKind, LookupError};

/// Categorizes a `reqwest::Error` into a [`FailureKind`].
///
/// This is the single place where reqwest's error taxonomy is mapped onto
/// ours, so the statistics and the record messages always agree.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> FailureKind {
    if error.is_timeout() {
        FailureKind::Timeout
    } else if error.is_connect() {
        FailureKind::Connect
    } else if error.is_status() {
        FailureKind::HttpStatus
    } else if error.is_decode() {
        FailureKind::Decode
    } else {
        FailureKind::Other
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(error: reqwest::Error) -> Self {
        let kind = categorize_reqwest_error(&error);
        // Keep the diagnostic short: these messages end up in result records,
        // not in logs, so the full error chain would be noise.
        let message = match kind {
            FailureKind::Timeout => "request timed out".to_string(),
            FailureKind::Connect => "connection failed".to_string(),
            FailureKind::HttpStatus => match error.status() {
                Some(status) => format!("HTTP status {status}"),
                None => "unexpected HTTP status".to_string(),
            },
            FailureKind::Decode => "response was not valid JSON".to_string(),
            _ => "network request failed".to_string(),
        };
        LookupError::Transport { kind, message }
    }
}

// Note: constructing real reqwest::Error values requires an actual HTTP
// exchange, so categorize_reqwest_error is exercised end-to-end by the
// wiremock tests in tests/ip_api_provider.rs rather than unit-tested here.

//! Error handling and run statistics.
//!
//! This module provides:
//! - The per-item error taxonomy ([`LookupError`]) and its statistics
//!   categories ([`FailureKind`])
//! - Categorization of `reqwest` errors into that taxonomy
//! - Per-run outcome counters ([`RunStats`])
//!
//! A per-item failure never propagates out of the batch loop; it is
//! converted into a result record and counted here.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use stats::RunStats;
pub use types::{FailureKind, InitializationError, LookupError};

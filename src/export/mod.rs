//! Export of the completed result collection.
//!
//! The exporter only reads the collection after the run completes; it never
//! mutates it.

mod csv;

// Re-export public API
pub use csv::{export_csv, CSV_HEADER};

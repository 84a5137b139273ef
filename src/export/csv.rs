//! CSV export functionality.
//!
//! Exports the completed result collection as a flat spreadsheet: one header
//! row followed by one row per record in collection order. Records that
//! ended in `Failed` or `Error` appear with their placeholder fields, so the
//! exported row count always matches the input count.

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use csv::Writer;
use log::warn;

use crate::models::LookupRecord;

/// Header row of the exported spreadsheet.
pub const CSV_HEADER: [&str; 8] = [
    "IP Address",
    "ISP",
    "Org",
    "Country",
    "Region",
    "City",
    "Latitude",
    "Longitude",
];

/// Exports records to CSV format.
///
/// # Arguments
///
/// * `records` - The completed result collection, in run order
/// * `output` - Output file path (or stdout if None)
///
/// # Returns
///
/// Returns the number of data rows written. An empty collection is a no-op
/// that writes nothing (not even a header) and returns 0.
pub fn export_csv(records: &[LookupRecord], output: Option<&Path>) -> Result<usize> {
    if records.is_empty() {
        warn!("No lookup results to export");
        return Ok(0);
    }

    // Use a trait object so both File and Stdout work
    let mut writer: Writer<Box<dyn Write>> = if let Some(output_path) = output {
        let file = std::fs::File::create(output_path).with_context(|| {
            format!("Failed to create output file: {}", output_path.display())
        })?;
        Writer::from_writer(Box::new(file) as Box<dyn Write>)
    } else {
        Writer::from_writer(Box::new(io::stdout()) as Box<dyn Write>)
    };

    writer.write_record(CSV_HEADER)?;

    for record in records {
        writer.write_record([
            &record.ip,
            &record.isp,
            &record.org,
            &record.country,
            &record.region,
            &record.city,
            &record.lat,
            &record.lon,
        ])?;
    }

    writer.flush()?;

    Ok(records.len())
}

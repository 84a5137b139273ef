//! Input parsing: newline-separated addresses from a file or stdin.

use std::path::Path;

use anyhow::{Context, Result};
use tokio::io::AsyncReadExt;

/// Parses raw multi-line text into an ordered list of lookup targets.
///
/// Each line is trimmed; empty lines and `#` comment lines are discarded.
/// Order is preserved. No validation is performed on the remaining lines:
/// a malformed address is still sent to the provider, which reports it as
/// a failed lookup like any other.
pub fn parse_targets(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Reads lookup targets from `path`, or from stdin when `path` is `-`.
pub async fn read_targets(path: &Path) -> Result<Vec<String>> {
    let raw = if path.as_os_str() == "-" {
        let mut buf = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buf)
            .await
            .context("Failed to read addresses from stdin")?;
        buf
    } else {
        tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read input file {}", path.display()))?
    };
    Ok(parse_targets(&raw))
}

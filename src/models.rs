//! Result records produced by the batch lookup runner.

use crate::provider::GeoLookup;

/// Placeholder value used for every data field of a record whose lookup
/// did not succeed.
pub const PLACEHOLDER: &str = "N/A";

/// Terminal state of a single lookup.
///
/// Every input address reaches exactly one of these states:
/// - `Success`: the provider resolved the address and returned data
/// - `Failed`: the provider responded but declined to resolve the address
///   (reserved range, invalid query, provider-side throttling)
/// - `Error`: the transport itself failed (connection, timeout, non-2xx
///   status, malformed envelope or JSON) and nothing usable came back
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupStatus {
    /// The provider resolved the address.
    Success,
    /// The provider responded but declined to resolve the address.
    Failed {
        /// Provider-supplied reason, or a generic placeholder.
        message: String,
    },
    /// The transport call itself failed.
    Error {
        /// Short diagnostic describing what went wrong.
        message: String,
    },
}

impl LookupStatus {
    /// Returns the short label for this state ("Success", "Failed", "Error").
    pub fn label(&self) -> &'static str {
        match self {
            LookupStatus::Success => "Success",
            LookupStatus::Failed { .. } => "Failed",
            LookupStatus::Error { .. } => "Error",
        }
    }
}

/// One row of the result collection: the input address, the extracted
/// geolocation fields (or [`PLACEHOLDER`] when the lookup did not succeed),
/// and the terminal status.
///
/// The runner guarantees exactly one record per input address, in input
/// order, regardless of outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRecord {
    /// The address as it appeared in the input (trimmed).
    pub ip: String,
    /// Internet service provider name.
    pub isp: String,
    /// Organization name.
    pub org: String,
    /// Country name.
    pub country: String,
    /// Region name.
    pub region: String,
    /// City name.
    pub city: String,
    /// Latitude, formatted as returned by the provider.
    pub lat: String,
    /// Longitude, formatted as returned by the provider.
    pub lon: String,
    /// Terminal state of this lookup.
    pub status: LookupStatus,
}

impl LookupRecord {
    /// Builds a successful record from the provider's extracted fields.
    pub fn from_geo(ip: &str, geo: GeoLookup) -> Self {
        Self {
            ip: ip.to_string(),
            isp: geo.isp,
            org: geo.org,
            country: geo.country,
            region: geo.region,
            city: geo.city,
            lat: geo.lat,
            lon: geo.lon,
            status: LookupStatus::Success,
        }
    }

    /// Builds a record with placeholder data fields for a lookup that
    /// ended in `Failed` or `Error`.
    pub fn placeholder(ip: &str, status: LookupStatus) -> Self {
        Self {
            ip: ip.to_string(),
            isp: PLACEHOLDER.to_string(),
            org: PLACEHOLDER.to_string(),
            country: PLACEHOLDER.to_string(),
            region: PLACEHOLDER.to_string(),
            city: PLACEHOLDER.to_string(),
            lat: PLACEHOLDER.to_string(),
            lon: PLACEHOLDER.to_string(),
            status,
        }
    }
}

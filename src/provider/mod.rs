//! Geolocation providers.
//!
//! The batch runner talks to a [`GeoProvider`]; the two implementations are
//! [`IpApiProvider`] (direct calls to an ip-api.com style endpoint) and
//! [`ProxiedProvider`] (the same endpoint reached through a fetch-proxy
//! that wraps the payload in a JSON envelope). Tests stub the trait.

mod ip_api;
mod proxy;

use async_trait::async_trait;

use crate::error_handling::LookupError;

pub use ip_api::{IpApiProvider, IpApiResponse};
pub use proxy::ProxiedProvider;

/// Geolocation fields extracted verbatim from a successful provider
/// response. Coordinates are kept as formatted strings; the tool never does
/// arithmetic on them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeoLookup {
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
    /// Latitude.
    pub lat: String,
    /// Longitude.
    pub lon: String,
}

/// A remote geolocation lookup service.
///
/// One call per address. Implementations must map every failure into a
/// [`LookupError`] so the runner can contain it; they must never panic on
/// malformed responses.
#[async_trait]
pub trait GeoProvider: Send + Sync {
    /// Looks up geolocation data for a single address.
    async fn lookup(&self, ip: &str) -> Result<GeoLookup, LookupError>;
}

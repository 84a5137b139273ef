//! Direct ip-api.com style provider.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use super::{GeoLookup, GeoProvider};
use crate::error_handling::LookupError;

/// Wire format of an ip-api.com JSON response.
///
/// On success `status` is `"success"` and the data fields are present; on
/// failure `status` is `"fail"` and `message` explains why (e.g. "private
/// range", "invalid query"). All fields except `status` are optional so a
/// failure body deserializes cleanly.
#[derive(Debug, Deserialize)]
pub struct IpApiResponse {
    /// `"success"` or `"fail"`.
    pub status: String,
    /// Failure reason, present when `status` is `"fail"`.
    #[serde(default)]
    pub message: Option<String>,
    /// Internet service provider name.
    #[serde(default)]
    pub isp: Option<String>,
    /// Organization name.
    #[serde(default)]
    pub org: Option<String>,
    /// Country name.
    #[serde(default)]
    pub country: Option<String>,
    /// Region name.
    #[serde(rename = "regionName", default)]
    pub region_name: Option<String>,
    /// City name.
    #[serde(default)]
    pub city: Option<String>,
    /// Latitude.
    #[serde(default)]
    pub lat: Option<f64>,
    /// Longitude.
    #[serde(default)]
    pub lon: Option<f64>,
}

impl IpApiResponse {
    /// Converts the wire response into a [`GeoLookup`], or a
    /// [`LookupError::Provider`] when the provider reported a non-success
    /// status.
    pub fn into_lookup(self) -> Result<GeoLookup, LookupError> {
        if self.status == "success" {
            Ok(GeoLookup {
                isp: self.isp.unwrap_or_default(),
                org: self.org.unwrap_or_default(),
                country: self.country.unwrap_or_default(),
                region: self.region_name.unwrap_or_default(),
                city: self.city.unwrap_or_default(),
                lat: self.lat.map(|v| v.to_string()).unwrap_or_default(),
                lon: self.lon.map(|v| v.to_string()).unwrap_or_default(),
            })
        } else {
            Err(LookupError::Provider {
                message: self
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| "Unknown reason".to_string()),
            })
        }
    }
}

/// Provider that calls the geolocation endpoint directly:
/// `GET {endpoint}/{ip}`.
pub struct IpApiProvider {
    client: Arc<reqwest::Client>,
    endpoint: String,
}

impl IpApiProvider {
    /// Creates a provider for the given endpoint base URL
    /// (e.g. `http://ip-api.com/json`).
    pub fn new(client: Arc<reqwest::Client>, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl GeoProvider for IpApiProvider {
    async fn lookup(&self, ip: &str) -> Result<GeoLookup, LookupError> {
        let url = format!("{}/{}", self.endpoint.trim_end_matches('/'), ip);
        let response = self.client.get(&url).send().await?.error_for_status()?;
        let body: IpApiResponse = response.json().await?;
        body.into_lookup()
    }
}

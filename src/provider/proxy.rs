//! Fetch-proxy provider for environments where direct calls to the
//! geolocation endpoint are blocked.
//!
//! The proxy (allorigins style) is called as `GET {proxy}/get?url={target}`
//! and returns the target's body wrapped in a JSON envelope:
//! `{ "contents": "<raw body>" }`. The envelope must be unwrapped before
//! the payload is interpreted; an unwrap failure is a transport error, not
//! a provider failure.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use super::ip_api::IpApiResponse;
use super::{GeoLookup, GeoProvider};
use crate::error_handling::{FailureKind, LookupError};

#[derive(Debug, Deserialize)]
struct ProxyEnvelope {
    contents: String,
}

/// Provider that reaches the geolocation endpoint through a fetch-proxy
/// envelope.
pub struct ProxiedProvider {
    client: Arc<reqwest::Client>,
    proxy_base: String,
    endpoint: String,
}

impl ProxiedProvider {
    /// Creates a provider that asks `proxy_base` to fetch
    /// `{endpoint}/{ip}` on its behalf.
    pub fn new(
        client: Arc<reqwest::Client>,
        proxy_base: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            client,
            proxy_base: proxy_base.into(),
            endpoint: endpoint.into(),
        }
    }

    fn envelope_error(message: &str) -> LookupError {
        LookupError::Transport {
            kind: FailureKind::Envelope,
            message: message.to_string(),
        }
    }
}

#[async_trait]
impl GeoProvider for ProxiedProvider {
    async fn lookup(&self, ip: &str) -> Result<GeoLookup, LookupError> {
        let target = format!("{}/{}", self.endpoint.trim_end_matches('/'), ip);
        let proxy_url = format!("{}/get", self.proxy_base.trim_end_matches('/'));

        let response = self
            .client
            .get(&proxy_url)
            // reqwest percent-encodes the target URL for us
            .query(&[("url", target.as_str())])
            .send()
            .await?
            .error_for_status()?;

        let envelope: ProxyEnvelope = response
            .json()
            .await
            .map_err(|_| Self::envelope_error("proxy response is not a valid envelope"))?;

        let payload: IpApiResponse = serde_json::from_str(&envelope.contents)
            .map_err(|_| Self::envelope_error("proxied payload is not valid JSON"))?;

        payload.into_lookup()
    }
}

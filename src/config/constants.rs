//! Configuration constants.

/// Documented ip-api.com free-tier ceiling: 45 requests per rolling minute.
/// Exceeding it gets the client IP temporarily banned by the provider.
pub const PROVIDER_REQUESTS_PER_MINUTE: u64 = 45;

/// Default pause between lookups in milliseconds.
///
/// Sized from the provider's ceiling rather than picked by feel:
/// 60_000 ms / 45 requests ≈ 1334 ms is the break-even spacing, so 1500 ms
/// keeps the theoretical maximum at 40 requests/minute with margin for
/// request latency jitter. Override with `--delay-ms` when targeting a
/// different provider or a paid tier.
pub const DEFAULT_DELAY_MS: u64 = 1500;

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default geolocation endpoint base URL. The address is appended as a path
/// segment: `{endpoint}/{ip}`.
pub const DEFAULT_ENDPOINT: &str = "http://ip-api.com/json";

/// Default User-Agent header value for HTTP requests.
pub const DEFAULT_USER_AGENT: &str = concat!("ip_lookup/", env!("CARGO_PKG_VERSION"));

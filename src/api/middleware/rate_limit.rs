//! Per-client rate limiting for the JSON API.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use std::time::Duration;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

use crate::config::RateLimitConfig;

pub type ApiRateLimitLayer =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Creates the token bucket limiter for `/api`.
///
/// Each client IP starts with `burst` tokens and gets one back every
/// `1 / per_second` seconds, so the defaults (see [`RateLimitConfig`]) allow 50
/// requests at once and then 5 per second. Requests over the limit receive
/// `429 Too Many Requests`. Every API request costs one remote content store
/// call, so the limit also caps the load a single client can put on the store.
///
/// Keys are the socket peer IP. The server must be run with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// Returns `None` when either limit is zero; [`crate::config::Config::validate`]
/// rejects such values at startup.
///
/// # Example
///
/// ```rust,ignore
/// let limiter = rate_limit::layer(&config.rate_limit).unwrap();
/// let app = Router::new().nest("/api", content_routes().layer(limiter));
/// ```
pub fn layer(limits: &RateLimitConfig) -> Option<ApiRateLimitLayer> {
    let governor_conf = GovernorConfigBuilder::default()
        .period(replenish_period(limits.per_second)?)
        .burst_size(limits.burst)
        .finish()?;

    Some(GovernorLayer::new(Arc::new(governor_conf)))
}

/// Time to regain one token at `per_second` requests per second.
fn replenish_period(per_second: u64) -> Option<Duration> {
    if per_second == 0 {
        return None;
    }
    Some(Duration::from_nanos((1_000_000_000 / per_second).max(1)))
}

// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use std::sync::OnceLock;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

/// Sustained write requests per second allowed for one client address.
pub const WRITES_PER_SECOND: u64 = 5;
pub const WRITE_BURST: u32 = 10;

pub type WriteRateLimitLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Shared per-IP limiter for post writes. Every route that carries it draws
/// from the same buckets.
pub fn rate_limit_layer() -> WriteRateLimitLayer {
    static RATE_LIMITER: OnceLock<WriteRateLimitLayer> = OnceLock::new();

    RATE_LIMITER
        .get_or_init(|| {
            let config = GovernorConfigBuilder::default()
                .per_second(WRITES_PER_SECOND)
                .burst_size(WRITE_BURST)
                .key_extractor(SmartIpKeyExtractor)
                .finish()
                .expect("rate limit quota is non-zero");

            GovernorLayer::new(config)
        })
        .clone()
}

// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Rate Gate
 * Shared token bucket bounding aggregate request rate across workers
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use governor::{
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};
use nonzero_ext::nonzero;
use std::num::NonZeroU32;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::errors::ScannerError;

/// Shared token bucket that every worker draws from before issuing any
/// HTTP request. `rate_limit` is both the refill rate (tokens/second) and
/// the burst capacity. One instance is shared by the whole pool; it
/// throttles aggregate throughput and is the only intentional
/// serialization point between workers.
pub struct RateGate {
    limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
}

impl RateGate {
    pub fn new(rate_limit: u32) -> Self {
        let quota = Quota::per_second(NonZeroU32::new(rate_limit).unwrap_or(nonzero!(1u32)));
        Self {
            limiter: RateLimiter::direct(quota),
        }
    }

    /// Wait until one request token is available.
    ///
    /// Returns `RateLimited` if the run is cancelled first; no token is
    /// consumed in that case and the caller abandons the current target.
    pub async fn acquire(&self, cancel: &CancellationToken) -> Result<(), ScannerError> {
        tokio::select! {
            () = self.limiter.until_ready() => Ok(()),
            () = cancel.cancelled() => {
                debug!("[RateGate] Token wait cancelled");
                Err(ScannerError::RateLimited)
            }
        }
    }
}

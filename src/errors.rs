// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Scanner Error Types
 * Error taxonomy for the canary scan pipeline
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use thiserror::Error;

/// Main scanner error type.
///
/// Everything except `Config` is recoverable at the worker boundary:
/// per-URL and per-candidate failures are logged and the run continues
/// with the next queued target.
#[derive(Error, Debug)]
pub enum ScannerError {
    /// Network-level fetch failure (connect, DNS, TLS, timeout).
    #[error("fetch failed for {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Malformed HTML or URL encountered mid-pipeline.
    #[error("parse error: {0}")]
    Parse(String),

    /// A configured detection pattern failed to compile. The pattern is
    /// skipped for the remainder of the run.
    #[error("invalid detection pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The run was cancelled while waiting for a rate token.
    #[error("cancelled while waiting for a rate token")]
    RateLimited,

    /// Unusable configuration or target list. Fatal before any scanning
    /// starts; never raised once workers are running.
    #[error("configuration error: {0}")]
    Config(String),
}

// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

use serde::{Deserialize, Serialize};

use crate::errors::ScannerError;

/// Runtime settings, loaded from a YAML file or defaulted.
///
/// CLI flags override individual fields after loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanSettings {
    /// Extra detection patterns applied alongside the built-in default.
    /// Each pattern's first capture group binds a candidate variable name.
    #[serde(default)]
    pub patterns: Vec<String>,

    /// Upstream proxies rotated per request, e.g.
    /// `http://127.0.0.1:8080` or `socks5://127.0.0.1:1080`.
    #[serde(default)]
    pub proxies: Vec<String>,

    /// Aggregate requests per second across all workers; also the burst
    /// capacity of the token bucket.
    #[serde(default = "default_rate_limit")]
    pub rate_limit: u32,

    /// Number of concurrent scan workers.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

fn default_rate_limit() -> u32 {
    5
}

fn default_concurrency() -> usize {
    5
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            patterns: Vec::new(),
            proxies: Vec::new(),
            rate_limit: default_rate_limit(),
            concurrency: default_concurrency(),
        }
    }
}

impl ScanSettings {
    pub fn validate(&self) -> Result<(), ScannerError> {
        if self.rate_limit == 0 {
            return Err(ScannerError::Config(
                "rate_limit must be greater than zero".to_string(),
            ));
        }
        if self.concurrency == 0 {
            return Err(ScannerError::Config(
                "concurrency must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

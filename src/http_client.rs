// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - HTTP Client Provider
 * Round-robin client rotation with optional upstream proxies
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use reqwest::Client;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::errors::ScannerError;
use crate::rate_limiter::RateGate;

/// Per-request timeout applied uniformly to every client in the pool.
/// Bounds worst-case latency per fetch so one unresponsive target cannot
/// pin a worker indefinitely.
const REQUEST_TIMEOUT_SECS: u64 = 15;

/// One slot in the rotation: a prebuilt client plus the proxy it actually
/// routes through (`None` for direct, including proxy-construction
/// fallbacks).
struct PooledClient {
    client: Arc<Client>,
    proxy: Option<String>,
}

/// Rotating pool of HTTP transports, direct or proxied (http, https,
/// socks5, socks5h).
///
/// Clients are built once up front; `next()` hands them out round-robin
/// starting from the first configured proxy. With no proxies configured
/// every call returns the direct client. The cursor is an atomic
/// fetch-and-increment, safe for concurrent callers.
pub struct ClientProvider {
    pool: Vec<PooledClient>,
    cursor: AtomicUsize,
    gate: Arc<RateGate>,
    cancel: CancellationToken,
}

impl ClientProvider {
    pub fn new(
        proxies: &[String],
        gate: Arc<RateGate>,
        cancel: CancellationToken,
    ) -> Result<Self, ScannerError> {
        let direct = Arc::new(
            build_client(None)
                .map_err(|e| ScannerError::Config(format!("failed to build HTTP client: {e}")))?,
        );

        let mut pool = Vec::with_capacity(proxies.len().max(1));
        for proxy in proxies {
            if proxy.is_empty() {
                pool.push(PooledClient {
                    client: Arc::clone(&direct),
                    proxy: None,
                });
                continue;
            }
            match build_client(Some(proxy)) {
                Ok(client) => pool.push(PooledClient {
                    client: Arc::new(client),
                    proxy: Some(proxy.clone()),
                }),
                Err(e) => {
                    // Unusable proxy entries keep their rotation slot but
                    // route directly; the eventual fetch fails naturally
                    // if the target was only reachable through the proxy.
                    warn!("[Client] Unusable proxy {}: {}; using direct client", proxy, e);
                    pool.push(PooledClient {
                        client: Arc::clone(&direct),
                        proxy: None,
                    });
                }
            }
        }

        if pool.is_empty() {
            pool.push(PooledClient {
                client: direct,
                proxy: None,
            });
        }

        Ok(Self {
            pool,
            cursor: AtomicUsize::new(0),
            gate,
            cancel,
        })
    }

    /// Next client in round-robin order, wrapped with the shared rate
    /// gate so every request it issues pays one token.
    pub fn next(&self) -> ScanClient {
        let idx = self.cursor.fetch_add(1, Ordering::Relaxed) % self.pool.len();
        let slot = &self.pool[idx];
        ScanClient {
            client: Arc::clone(&slot.client),
            proxy: slot.proxy.clone(),
            gate: Arc::clone(&self.gate),
            cancel: self.cancel.clone(),
        }
    }
}

fn build_client(proxy: Option<&str>) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder().timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS));

    if let Some(proxy_url) = proxy {
        builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
    }

    builder.build()
}

/// One rotated client handle.
///
/// `get` acquires a rate token per call, so the baseline fetch and the
/// injected re-fetch of the two-stage protocol are throttled separately.
#[derive(Clone)]
pub struct ScanClient {
    client: Arc<Client>,
    proxy: Option<String>,
    gate: Arc<RateGate>,
    cancel: CancellationToken,
}

impl ScanClient {
    /// Send a GET request. Any retrievable body is returned regardless of
    /// status code; only transport failures are errors.
    pub async fn get(&self, url: &str) -> Result<HttpResponse, ScannerError> {
        self.gate.acquire(&self.cancel).await?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ScannerError::Fetch {
                url: url.to_string(),
                source: e,
            })?;

        let status_code = response.status().as_u16();
        let body = response.text().await.map_err(|e| ScannerError::Fetch {
            url: url.to_string(),
            source: e,
        })?;

        debug!(
            "[Client] GET {} -> {} ({} bytes, proxy: {})",
            url,
            status_code,
            body.len(),
            self.proxy.as_deref().unwrap_or("direct")
        );

        Ok(HttpResponse { status_code, body })
    }

    /// The proxy this handle routes through, if any.
    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status_code: u16,
    pub body: String,
}

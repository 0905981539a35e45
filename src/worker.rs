// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Worker Pool
 * Fixed pool of scan executors over a shared URL queue
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{info, warn};

use crate::http_client::ClientProvider;
use crate::reporting::types::Finding;
use crate::scanners::InlineJsScanner;

/// Fixed-size pool of concurrent scan executors.
///
/// Targets fan out over a shared FIFO queue; findings fan in through one
/// results channel. Workers never block each other except through the
/// shared rate gate inside the client handles.
pub struct WorkerPool {
    scanner: Arc<InlineJsScanner>,
    provider: Arc<ClientProvider>,
    concurrency: usize,
}

/// What a completed run produced.
pub struct ScanOutcome {
    pub findings: Vec<Finding>,
    pub processed: usize,
}

impl WorkerPool {
    pub fn new(
        scanner: Arc<InlineJsScanner>,
        provider: Arc<ClientProvider>,
        concurrency: usize,
    ) -> Self {
        Self {
            scanner,
            provider,
            concurrency: concurrency.max(1),
        }
    }

    /// Drain `targets` through the pool and collect every finding.
    ///
    /// Per-target errors are logged and never stop a worker. The channel
    /// capacities below are hints sized to the target list; the findings
    /// channel is drained concurrently, so correctness does not depend on
    /// them. Workers are joined before the outcome is returned.
    pub async fn run(&self, targets: Vec<String>) -> ScanOutcome {
        let total = targets.len();
        let (url_tx, url_rx) = async_channel::bounded::<String>(total.max(1));
        let (finding_tx, mut finding_rx) = mpsc::channel::<Finding>((total * 5).max(1));
        let processed = Arc::new(AtomicUsize::new(0));

        info!(
            "[Pool] Spawning {} worker(s) for {} target(s)",
            self.concurrency, total
        );

        let mut workers = JoinSet::new();
        for worker_id in 0..self.concurrency {
            let url_rx = url_rx.clone();
            let finding_tx = finding_tx.clone();
            let scanner = Arc::clone(&self.scanner);
            let provider = Arc::clone(&self.provider);
            let processed = Arc::clone(&processed);

            workers.spawn(async move {
                while let Ok(target) = url_rx.recv().await {
                    let client = provider.next();
                    match scanner.scan(&target, &client).await {
                        Ok(findings) => {
                            for finding in findings {
                                info!(
                                    "[Worker {}] Reflection detected: variable '{}' at {}",
                                    worker_id, finding.variable, finding.url
                                );
                                if finding_tx.send(finding).await.is_err() {
                                    // Collector gone; nothing left to report to.
                                    return;
                                }
                            }
                        }
                        Err(e) => {
                            warn!("[Worker {}] Error processing {}: {}", worker_id, target, e);
                        }
                    }
                    processed.fetch_add(1, Ordering::Relaxed);
                }
            });
        }
        drop(finding_tx);

        // Single producer: the queue holds the whole list, workers are
        // already pulling.
        for target in targets {
            if url_tx.send(target).await.is_err() {
                break;
            }
        }
        url_tx.close();

        // The findings channel closes once every worker has dropped its
        // sender, i.e. once the queue is drained and all executors exited.
        let mut findings = Vec::new();
        while let Some(finding) = finding_rx.recv().await {
            findings.push(finding);
        }

        // Explicit join barrier before handing results to the renderer.
        while workers.join_next().await.is_some() {}

        ScanOutcome {
            findings,
            processed: processed.load(Ordering::Relaxed),
        }
    }
}

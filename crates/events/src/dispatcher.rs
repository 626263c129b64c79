//! Background alert dispatch.
//!
//! The ingestion path hands a [`LeakAlert`] to [`AlertDispatcher::dispatch`],
//! which only enqueues it. A single worker task drains the queue and calls
//! the [`Notifier`], so a slow or hanging SMS provider never delays the HTTP
//! response. Outcomes are logged and counted in [`AlertStats`].

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use gaswatch_core::alert::LeakAlert;
use serde::Serialize;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::notifier::Notifier;

/// Default bound on alerts waiting for the worker.
pub const DEFAULT_QUEUE_CAPACITY: usize = 256;

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

/// Monotonic counters describing alert delivery.
#[derive(Debug, Default)]
pub struct AlertStats {
    queued: AtomicU64,
    attempted: AtomicU64,
    delivered: AtomicU64,
    logged: AtomicU64,
    failed: AtomicU64,
    dropped: AtomicU64,
}

/// Point-in-time copy of [`AlertStats`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlertStatsSnapshot {
    /// Alerts accepted onto the queue.
    pub queued: u64,
    /// Alerts handed to the transport.
    pub attempted: u64,
    /// Attempts the transport reported as sent by SMS.
    pub delivered: u64,
    /// Attempts handled by the log-only transport; no SMS was sent.
    pub logged: u64,
    /// Attempts that errored or timed out.
    pub failed: u64,
    /// Alerts rejected because the queue was full or closed.
    pub dropped: u64,
}

impl AlertStats {
    pub fn snapshot(&self) -> AlertStatsSnapshot {
        AlertStatsSnapshot {
            queued: self.queued.load(Ordering::Relaxed),
            attempted: self.attempted.load(Ordering::Relaxed),
            delivered: self.delivered.load(Ordering::Relaxed),
            logged: self.logged.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
            dropped: self.dropped.load(Ordering::Relaxed),
        }
    }
}

// ---------------------------------------------------------------------------
// AlertDispatcher
// ---------------------------------------------------------------------------

/// Cheaply cloneable handle for enqueueing alerts.
///
/// The worker exits once every handle has been dropped and the queue is
/// drained.
#[derive(Clone)]
pub struct AlertDispatcher {
    sender: mpsc::Sender<LeakAlert>,
    stats: Arc<AlertStats>,
}

impl AlertDispatcher {
    /// Spawn the worker task and return a handle to it.
    pub fn start(notifier: Notifier, capacity: usize) -> (Self, JoinHandle<()>) {
        let (sender, receiver) = mpsc::channel(capacity.max(1));
        let stats = Arc::new(AlertStats::default());
        let handle = tokio::spawn(run_worker(notifier, receiver, Arc::clone(&stats)));
        (Self { sender, stats }, handle)
    }

    /// Enqueue an alert without waiting. Returns `false` if it was dropped.
    pub fn dispatch(&self, alert: LeakAlert) -> bool {
        let reading_id = alert.reading_id;
        match self.sender.try_send(alert) {
            Ok(()) => {
                self.stats.queued.fetch_add(1, Ordering::Relaxed);
                true
            }
            Err(mpsc::error::TrySendError::Full(_)) => {
                self.stats.dropped.fetch_add(1, Ordering::Relaxed);
                tracing::error!(reading_id, "Alert queue full, leak alert dropped");
                false
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                self.stats.dropped.fetch_add(1, Ordering::Relaxed);
                tracing::error!(reading_id, "Alert worker stopped, leak alert dropped");
                false
            }
        }
    }

    pub fn stats(&self) -> AlertStatsSnapshot {
        self.stats.snapshot()
    }
}

async fn run_worker(
    notifier: Notifier,
    mut receiver: mpsc::Receiver<LeakAlert>,
    stats: Arc<AlertStats>,
) {
    tracing::info!(transport = notifier.transport_name(), "Alert worker started");

    while let Some(alert) = receiver.recv().await {
        stats.attempted.fetch_add(1, Ordering::Relaxed);
        match notifier.notify_leak(&alert).await {
            Ok(()) if notifier.delivers_sms() => {
                stats.delivered.fetch_add(1, Ordering::Relaxed);
                tracing::info!(
                    reading_id = alert.reading_id,
                    gas_leak = alert.gas_leak,
                    "Leak alert sent"
                );
            }
            Ok(()) => {
                stats.logged.fetch_add(1, Ordering::Relaxed);
            }
            Err(e) => {
                stats.failed.fetch_add(1, Ordering::Relaxed);
                tracing::error!(
                    reading_id = alert.reading_id,
                    gas_leak = alert.gas_leak,
                    error = %e,
                    "Leak alert delivery failed"
                );
            }
        }
    }

    tracing::info!("Alert queue closed, alert worker shutting down");
}

//! # Non-blocking record fan-out to multiple log sinks.
//!
//! Provides [`SinkSet`] — distributes records to every attached sink without
//! blocking the context.
//!
//! ## Architecture
//! ```text
//! emit(record)
//!     │
//!     ├──► [queue 1] ──► worker 1 ──► sink1.write()
//!     │    (bounded)         └──────► panic → caught, counted
//!     ├──► [queue 2] ──► worker 2 ──► sink2.write()
//!     └──► [queue N] ──► worker N ──► sinkN.write()
//! ```
//!
//! ## Rules
//! - **Non-blocking**: `emit()` returns immediately (uses `try_send`)
//! - **Isolation**: a slow or panicking sink doesn't affect the others
//! - **Per-sink FIFO**: each sink sees records in emit order
//! - **Overflow**: the record is dropped for that sink only, and counted

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;

use futures::FutureExt;
use tokio::{sync::mpsc, task::JoinHandle};

use super::record::LogRecord;
use super::sink::LogSink;

/// Fan-out coordinator for the attached log sinks.
///
/// Manages per-sink queues and worker tasks. Workers start immediately and
/// run until [`SinkSet::shutdown`] closes their queues.
pub struct SinkSet {
    channels: Vec<mpsc::Sender<Arc<LogRecord>>>,
    workers: Vec<JoinHandle<()>>,
    dropped: Arc<AtomicU64>,
    panicked: Arc<AtomicU64>,
}

impl SinkSet {
    /// Creates a new set and spawns one worker task per sink.
    ///
    /// `default_capacity` bounds each sink's queue unless the sink declares
    /// its own via [`LogSink::queue_capacity`]; the effective minimum is 1.
    #[must_use]
    pub fn new(sinks: Vec<Arc<dyn LogSink>>, default_capacity: usize) -> Self {
        let mut channels = Vec::with_capacity(sinks.len());
        let mut workers = Vec::with_capacity(sinks.len());
        let panicked = Arc::new(AtomicU64::new(0));

        for sink in sinks {
            let cap = sink.queue_capacity().unwrap_or(default_capacity).max(1);
            let (tx, mut rx) = mpsc::channel::<Arc<LogRecord>>(cap);
            let panics = Arc::clone(&panicked);

            let handle = tokio::spawn(async move {
                while let Some(rec) = rx.recv().await {
                    let fut = sink.write(rec.as_ref());
                    if std::panic::AssertUnwindSafe(fut).catch_unwind().await.is_err() {
                        panics.fetch_add(1, AtomicOrdering::Relaxed);
                    }
                }
            });
            channels.push(tx);
            workers.push(handle);
        }
        Self {
            channels,
            workers,
            dropped: Arc::new(AtomicU64::new(0)),
            panicked,
        }
    }

    /// Emits a record to every sink (non-blocking).
    ///
    /// On a full or closed sink queue the record is dropped for that sink
    /// and the drop counter is incremented; other sinks are unaffected.
    pub fn emit(&self, record: LogRecord) {
        let record = Arc::new(record);
        for sender in &self.channels {
            match sender.try_send(Arc::clone(&record)) {
                Ok(()) => {}
                Err(mpsc::error::TrySendError::Full(_))
                | Err(mpsc::error::TrySendError::Closed(_)) => {
                    self.dropped.fetch_add(1, AtomicOrdering::Relaxed);
                }
            }
        }
    }

    /// Number of attached sinks.
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Total records dropped across all sinks due to overflow or closure.
    pub fn dropped(&self) -> u64 {
        self.dropped.load(AtomicOrdering::Relaxed)
    }

    /// Total sink panics caught by the workers.
    pub fn panicked(&self) -> u64 {
        self.panicked.load(AtomicOrdering::Relaxed)
    }

    /// Gracefully shuts down all sink workers.
    ///
    /// 1. Drops all channel senders (workers see the queue closed)
    /// 2. Awaits all worker tasks to finish
    pub async fn shutdown(self) {
        drop(self.channels);

        for h in self.workers {
            let _ = h.await;
        }
    }
}

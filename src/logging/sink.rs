//! # Core log sink trait
//!
//! `LogSink` is the extension point for plugging side channels into the
//! context. Each sink is driven by a dedicated worker loop fed by a bounded
//! queue owned by the [`SinkSet`](crate::logging::SinkSet).
//!
//! ## Contract
//! - Implementations may be slow (I/O, batching) — they do **not** block the
//!   context nor other sinks.
//! - Each sink declares its preferred queue capacity via
//!   [`LogSink::queue_capacity`]. On overflow, records for that sink are
//!   dropped and counted.

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::BoxFuture;

use super::record::LogRecord;

/// Contract for log sinks.
///
/// Called from a sink-dedicated worker task. Implementations should avoid
/// blocking the async runtime (prefer async I/O and cooperative waits).
#[async_trait]
pub trait LogSink: Send + Sync + 'static {
    /// Handles a single record for this sink.
    async fn write(&self, record: &LogRecord);

    /// Human-readable name (for overflow accounting and diagnostics).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Preferred capacity of this sink's queue.
    ///
    /// `None` uses the set-wide default from the context configuration.
    fn queue_capacity(&self) -> Option<usize> {
        None
    }
}

/// Closure-backed log sink.
///
/// Wraps `F: Fn(LogRecord) -> Fut`, producing a fresh future per record.
/// This is the `add_log_action` surface: attach a callback without writing
/// a full trait impl.
///
/// ## Example
/// ```rust
/// use omnibus::logging::{LogFn, LogRecord};
///
/// let sink = LogFn::arc("stderr", |rec: LogRecord| async move {
///     eprintln!("{rec}");
/// });
/// assert_eq!(sink.name(), "stderr");
/// # use omnibus::logging::LogSink;
/// ```
pub struct LogFn {
    name: &'static str,
    f: Box<dyn Fn(LogRecord) -> BoxFuture<'static, ()> + Send + Sync>,
}

impl LogFn {
    /// Creates a closure-backed sink with the given name.
    pub fn new<F, Fut>(name: &'static str, f: F) -> Self
    where
        F: Fn(LogRecord) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self {
            name,
            f: Box::new(move |rec| Box::pin(f(rec))),
        }
    }

    /// Creates the sink and returns it as a shared handle.
    pub fn arc<F, Fut>(name: &'static str, f: F) -> Arc<Self>
    where
        F: Fn(LogRecord) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Arc::new(Self::new(name, f))
    }
}

#[async_trait]
impl LogSink for LogFn {
    async fn write(&self, record: &LogRecord) {
        (self.f)(record.clone()).await;
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

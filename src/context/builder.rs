//! # Context builder.
//!
//! Assembles an inert [`EventContext`] from configuration, log sinks, and an
//! optional custom work queue. The context does nothing until
//! [`EventContext::initialize`] is called.
//!
//! ## Example
//! ```rust,no_run
//! use omnibus::{ContextConfig, EventContext};
//!
//! # async fn demo() -> Result<(), omnibus::ContextError> {
//! let ctx = EventContext::builder()
//!     .with_config(ContextConfig::default())
//!     .add_log_action("stderr", |rec| async move { eprintln!("{rec}") })
//!     .build();
//! ctx.initialize().await?;
//! # Ok(())
//! # }
//! ```

use std::future::Future;
use std::sync::Arc;

use crate::config::ContextConfig;
use crate::logging::{LogFn, LogRecord, LogSink, SinkSet};
use crate::queue::{MemoryQueue, WorkQueue};

use super::context::EventContext;

/// Builder for [`EventContext`].
///
/// Defaults: [`ContextConfig::default`], no log sinks, in-memory work queue.
#[derive(Default)]
pub struct ContextBuilder {
    cfg: ContextConfig,
    sinks: Vec<Arc<dyn LogSink>>,
    queue: Option<Arc<dyn WorkQueue>>,
}

impl ContextBuilder {
    /// Creates a builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the runtime configuration.
    pub fn with_config(mut self, cfg: ContextConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Attaches a log sink. Sinks receive every record, each behind its own
    /// bounded queue and worker.
    pub fn with_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    /// Attaches a closure-backed log sink.
    ///
    /// Convenience over [`with_sink`](Self::with_sink) + [`LogFn`].
    pub fn add_log_action<F, Fut>(self, name: &'static str, f: F) -> Self
    where
        F: Fn(LogRecord) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.with_sink(LogFn::arc(name, f))
    }

    /// Replaces the default in-memory work queue.
    pub fn with_queue(mut self, queue: Arc<dyn WorkQueue>) -> Self {
        self.queue = Some(queue);
        self
    }

    /// Builds the context. Inert until `initialize` is called.
    pub fn build(self) -> EventContext {
        let default_cap = self.cfg.sink_queue_capacity_clamped();
        let sinks = SinkSet::new(self.sinks, default_cap);
        let queue = self
            .queue
            .unwrap_or_else(|| Arc::new(MemoryQueue::new()));
        EventContext::from_parts(self.cfg, sinks, queue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queue::MemoryQueue;

    #[tokio::test]
    async fn built_context_is_inert() {
        let ctx = ContextBuilder::new().build();
        assert!(ctx.id().is_none());
    }

    #[tokio::test]
    async fn custom_queue_is_used() {
        let queue = Arc::new(MemoryQueue::new());
        let ctx = ContextBuilder::new()
            .with_queue(Arc::clone(&queue) as Arc<dyn WorkQueue>)
            .build();
        queue.enqueue(crate::events::Event::new(crate::events::Kind::new("x")));
        assert_eq!(ctx.work_queue().len(), 1);
    }
}

//! # Queue-draining producer.
//!
//! Owns a recurring timer over a [`WorkQueue`]: after a short initial delay
//! it dequeues at most one buffered event per tick and raises it into the
//! context, tagged with itself as source. An empty dequeue is not an error;
//! the drainer simply tries again on its next tick.
//!
//! Ticks never overlap: the drain loop is a single task, so a tick that is
//! still processing delays the next one instead of racing a second dequeue
//! (`MissedTickBehavior::Delay`).

use std::sync::Arc;
use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::context::{Binding, ContextHandle};
use crate::error::ContextError;
use crate::queue::WorkQueue;

use super::produce::Produce;

/// Poll-based producer forwarding buffered work-queue events.
pub struct QueueProducer {
    binding: Binding,
    queue: Arc<dyn WorkQueue>,
    interval: Duration,
    initial_delay: Duration,
}

impl QueueProducer {
    /// Creates a drainer over `queue`, ticking every `interval` after an
    /// `initial_delay`.
    pub fn new(queue: Arc<dyn WorkQueue>, interval: Duration, initial_delay: Duration) -> Self {
        Self {
            binding: Binding::new("queue-drain"),
            queue,
            interval,
            initial_delay,
        }
    }
}

impl Produce for QueueProducer {
    fn name(&self) -> &str {
        self.binding.name()
    }

    fn bind(&self, ctx: ContextHandle) -> Result<(), ContextError> {
        self.binding.bind(ctx)
    }

    fn bound_context(&self) -> Option<Arc<str>> {
        self.binding.bound_context()
    }

    fn start(&self, cancel: CancellationToken) -> Result<(), ContextError> {
        let handle = self.binding.handle()?.clone();
        let source: Arc<str> = self.binding.name().into();
        let queue = Arc::clone(&self.queue);
        let interval = self.interval;
        let initial_delay = self.initial_delay;

        tokio::spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => return,
                _ = tokio::time::sleep(initial_delay) => {}
            }

            let mut tick = tokio::time::interval(interval);
            tick.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = cancel.cancelled() => break,
                    _ = tick.tick() => {
                        // At most one item per tick; the loop serializes
                        // dequeues, so ticks cannot overlap.
                        if let Some(ev) = queue.dequeue(1).into_iter().next() {
                            if handle.raise_event(ev, Arc::clone(&source)).is_err() {
                                break;
                            }
                        }
                    }
                }
            }
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queue::MemoryQueue;

    #[test]
    fn start_before_bind_is_refused() {
        let drain = QueueProducer::new(
            Arc::new(MemoryQueue::new()),
            Duration::from_secs(1),
            Duration::from_millis(100),
        );
        let err = drain.start(CancellationToken::new());
        assert!(matches!(err, Err(ContextError::NotBound { .. })));
    }
}

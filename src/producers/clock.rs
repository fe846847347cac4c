//! # Built-in periodic clock producer.
//!
//! Raises a [`TIME`] event stamped with the current instant on every tick of
//! a configured interval (default 60 s, see
//! [`ContextConfig::clock_interval`](crate::config::ContextConfig)). This is
//! the heartbeat that drives schedule-gated consumers: attach a
//! [`TimeConsumer`](crate::consumers::TimeConsumer) and its schedules are
//! evaluated against every stamped tick.
//!
//! The clock is owned by its context and parameterized explicitly; there is
//! no ambient or static clock state.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::context::{Binding, ContextHandle};
use crate::error::ContextError;
use crate::events::{Event, TIME};

use super::produce::Produce;

/// Periodic source of [`TIME`] events.
pub struct ClockProducer {
    binding: Binding,
    interval: Duration,
}

impl ClockProducer {
    /// Creates a clock firing every `interval`.
    pub fn new(interval: Duration) -> Self {
        Self {
            binding: Binding::new("clock"),
            interval,
        }
    }
}

impl Produce for ClockProducer {
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
        let interval = self.interval;

        tokio::spawn(async move {
            let mut tick = tokio::time::interval(interval);
            tick.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately; the clock waits a full
            // interval before its first event.
            tick.tick().await;

            loop {
                tokio::select! {
                    _ = cancel.cancelled() => break,
                    _ = tick.tick() => {
                        let ev = Event::new(TIME).stamped(Utc::now());
                        if handle.raise_event(ev, Arc::clone(&source)).is_err() {
                            break;
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

    #[test]
    fn start_before_bind_is_refused() {
        let clock = ClockProducer::new(Duration::from_secs(60));
        let err = clock.start(CancellationToken::new());
        assert!(matches!(err, Err(ContextError::NotBound { .. })));
    }

    #[test]
    fn unbound_clock_reports_no_context() {
        let clock = ClockProducer::new(Duration::from_secs(60));
        assert!(clock.bound_context().is_none());
    }
}

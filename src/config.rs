//! # Global context configuration.
//!
//! Provides [`ContextConfig`], the centralized settings for an
//! [`EventContext`](crate::context::EventContext) and its built-in producers.
//!
//! ## Sentinel values
//! - `max_concurrent_dispatch = 0` → unlimited (no dispatch semaphore)
//! - `history_capacity` is clamped to a minimum of 1 by the history buffer

use std::time::Duration;

/// Configuration for the event context runtime.
///
/// ## Field semantics
/// - `clock_interval`: cadence of the built-in clock producer
/// - `drain_interval`: cadence of the queue-draining producer
/// - `drain_initial_delay`: wait before the drainer's first tick
/// - `history_capacity`: audit-trail ring size (oldest evicted beyond this)
/// - `sink_queue_capacity`: per-log-sink queue size (overflow drops records)
/// - `max_concurrent_dispatch`: cap on in-flight dispatches (`0` = unlimited)
#[derive(Clone, Debug)]
pub struct ContextConfig {
    /// Interval between generated time events.
    pub clock_interval: Duration,

    /// Interval between work-queue drain ticks.
    pub drain_interval: Duration,

    /// Delay before the first drain tick.
    pub drain_initial_delay: Duration,

    /// Maximum number of events retained in history.
    pub history_capacity: usize,

    /// Capacity of each log sink's bounded queue.
    ///
    /// Sinks that fall behind have records dropped (counted, never blocking
    /// the publisher). Minimum value is 1 (enforced by the sink set).
    pub sink_queue_capacity: usize,

    /// Maximum number of dispatches in flight at once.
    ///
    /// - `0` = unlimited (no semaphore)
    /// - `n > 0` = at most `n` events dispatched simultaneously
    pub max_concurrent_dispatch: usize,
}

impl ContextConfig {
    /// Returns the dispatch concurrency cap as an `Option`.
    ///
    /// - `None` → unlimited (no semaphore)
    /// - `Some(n)` → at most `n` concurrent dispatches
    #[inline]
    pub fn dispatch_limit(&self) -> Option<usize> {
        if self.max_concurrent_dispatch == 0 {
            None
        } else {
            Some(self.max_concurrent_dispatch)
        }
    }

    /// Returns the sink queue capacity clamped to a minimum of 1.
    #[inline]
    pub fn sink_queue_capacity_clamped(&self) -> usize {
        self.sink_queue_capacity.max(1)
    }
}

impl Default for ContextConfig {
    /// Default configuration:
    ///
    /// - `clock_interval = 60s` (one time event per minute)
    /// - `drain_interval = 1s`, `drain_initial_delay = 100ms`
    /// - `history_capacity = 4096`
    /// - `sink_queue_capacity = 1024`
    /// - `max_concurrent_dispatch = 0` (unlimited)
    fn default() -> Self {
        Self {
            clock_interval: Duration::from_secs(60),
            drain_interval: Duration::from_secs(1),
            drain_initial_delay: Duration::from_millis(100),
            history_capacity: 4096,
            sink_queue_capacity: 1024,
            max_concurrent_dispatch: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_limit_sentinel() {
        let mut cfg = ContextConfig::default();
        assert_eq!(cfg.dispatch_limit(), None);
        cfg.max_concurrent_dispatch = 4;
        assert_eq!(cfg.dispatch_limit(), Some(4));
    }

    #[test]
    fn sink_capacity_is_clamped() {
        let cfg = ContextConfig {
            sink_queue_capacity: 0,
            ..ContextConfig::default()
        };
        assert_eq!(cfg.sink_queue_capacity_clamped(), 1);
    }
}

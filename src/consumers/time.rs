//! # Schedule-gated time consumer.
//!
//! [`TimeConsumer`] is how callers attach "run this callback when time T
//! arrives" behavior without writing a producer: it consumes the built-in
//! [`TIME`] events, evaluates its [`Schedule`]s against each stamped
//! instant, and on a match runs its trigger exactly once for that event.
//! The trigger receives a [`ContextHandle`], so it typically raises a
//! derived event back into the context (event chaining) — the derived
//! event re-enters the same dispatch path asynchronously.
//!
//! Schedules are OR-combined; non-matching events are dropped silently
//! (no error, nothing beyond normal delivery logging).
//!
//! ## Example
//! ```rust,no_run
//! use chrono::NaiveTime;
//! use omnibus::{Event, Kind, Schedule, TimeConsumer};
//!
//! const REPORT_DUE: Kind = Kind::new("report-due");
//!
//! let timer = TimeConsumer::arc(
//!     "daily-report",
//!     vec![Schedule::once_per_day(NaiveTime::from_hms_opt(6, 0, 0).unwrap())],
//!     |ctx, ev| async move {
//!         let _ = ctx.raise_event(Event::new(REPORT_DUE).stamped(ev.at), "daily-report");
//!     },
//! );
//! ```

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::BoxFuture;

use crate::context::{Binding, ContextHandle};
use crate::error::ContextError;
use crate::events::{Event, Kind, TIME};
use crate::logging::{LogKind, LogRecord};
use crate::schedule::Schedule;

use super::consume::Consume;

static TIME_KINDS: [Kind; 1] = [TIME];

/// Consumer firing a trigger when a time event matches one of its schedules.
pub struct TimeConsumer {
    binding: Binding,
    schedules: Vec<Schedule>,
    trigger: Box<dyn Fn(ContextHandle, Event) -> BoxFuture<'static, ()> + Send + Sync>,
}

impl TimeConsumer {
    /// Creates a time consumer with the given schedules and trigger.
    pub fn new<F, Fut>(name: &'static str, schedules: Vec<Schedule>, trigger: F) -> Self
    where
        F: Fn(ContextHandle, Event) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self {
            binding: Binding::new(name),
            schedules,
            trigger: Box::new(move |ctx, ev| Box::pin(trigger(ctx, ev))),
        }
    }

    /// Creates the consumer and returns it as a shared handle.
    pub fn arc<F, Fut>(name: &'static str, schedules: Vec<Schedule>, trigger: F) -> Arc<Self>
    where
        F: Fn(ContextHandle, Event) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Arc::new(Self::new(name, schedules, trigger))
    }

    /// The configured schedules, in evaluation order.
    pub fn schedules(&self) -> &[Schedule] {
        &self.schedules
    }
}

#[async_trait]
impl Consume for TimeConsumer {
    fn name(&self) -> &str {
        self.binding.name()
    }

    fn consumes(&self) -> &[Kind] {
        &TIME_KINDS
    }

    fn bind(&self, ctx: ContextHandle) -> Result<(), ContextError> {
        self.binding.bind(ctx)
    }

    async fn on_event(&self, ev: &Event) {
        let Ok(handle) = self.binding.handle() else {
            return;
        };

        handle.log(
            LogRecord::new(LogKind::EventReceived)
                .with_message(ev.to_string())
                .with_source(self.binding.name()),
        );

        // OR-combined: any match fires the trigger, once per event.
        if self.schedules.iter().any(|s| s.is_match(ev.at)) {
            (self.trigger)(handle.clone(), ev.clone()).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn declares_only_the_time_kind() {
        let c = TimeConsumer::new("t", Vec::new(), |_ctx, _ev| async {});
        assert_eq!(c.consumes(), &[TIME]);
        assert!(c.accepts(TIME));
        assert!(!c.accepts(Kind::new("other")));
    }

    #[test]
    fn keeps_schedule_order() {
        let first = Schedule::once_per_day(NaiveTime::from_hms_opt(1, 0, 0).unwrap());
        let second = Schedule::once_per_minute(30);
        let c = TimeConsumer::new("t", vec![first, second], |_ctx, _ev| async {});
        assert_eq!(c.schedules(), &[first, second]);
    }
}

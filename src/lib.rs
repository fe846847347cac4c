//! # Omnibus
//!
//! **In-process typed event bus: producers raise, the context routes,
//! consumers react.**
//!
//! Omnibus wires event *producers* (timers, queue drainers, anything that
//! pushes) to event *consumers* (typed handlers) through a central
//! [`EventContext`]. Events carry an explicit [`Kind`] tag; the context
//! routes each raised event to every consumer registered for that kind,
//! records it in a bounded history, and reports every step through
//! pluggable log sinks.
//!
//! ## Architecture
//!
//! ```text
//!                         ┌────────────────────────────┐
//!  ClockProducer ───────► │        EventContext        │ ───► LogSink(s)
//!  QueueProducer ───────► │  routes: Kind → consumers  │      (SinkSet)
//!  your producers ──────► │  history: bounded ring     │
//!  raise_event(..) ─────► │  queue:   WorkQueue        │
//!                         └─────────────┬──────────────┘
//!                                       │ per-event, registration order,
//!                                       │ panic-isolated
//!                                       ▼
//!                     FnConsumer · TimeConsumer · your consumers
//! ```
//!
//! - **Typed routing** — events are tagged with a [`Kind`]; consumers
//!   declare the kinds they accept and never see anything else.
//! - **Two raise modes** — [`EventContext::raise_event`] is
//!   fire-and-forget; [`EventContext::raise_event_awaited`] completes only
//!   after every consumer has handled the event.
//! - **Built-in producers** — a clock ticking [`TIME`] events and a drainer
//!   pumping the [`WorkQueue`], both registered by
//!   [`EventContext::initialize`].
//! - **Schedules** — [`TimeConsumer`] gates a trigger behind
//!   [`Schedule`] predicates (daily at a time, or at a second each minute).
//! - **Isolation** — a panicking consumer is caught and logged; siblings
//!   and history are unaffected. Slow log sinks drop records instead of
//!   blocking dispatch.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use omnibus::{Event, EventContext, FnConsumer, Kind};
//!
//! const ORDER_CREATED: Kind = Kind::new("order-created");
//!
//! #[tokio::main]
//! async fn main() -> Result<(), omnibus::ContextError> {
//!     let ctx = EventContext::builder()
//!         .add_log_action("stdout", |rec| async move { println!("{rec}") })
//!         .build();
//!     ctx.initialize().await?;
//!
//!     let auditor = FnConsumer::arc("auditor", vec![ORDER_CREATED], |ev: Event| async move {
//!         println!("handled: {ev}");
//!     });
//!     ctx.register_consumer(ORDER_CREATED, auditor).await?;
//!
//!     ctx.raise_event_awaited(Event::new(ORDER_CREATED), "demo").await?;
//!     ctx.shutdown();
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod consumers;
pub mod context;
pub mod error;
pub mod events;
pub mod logging;
pub mod producers;
pub mod queue;
pub mod schedule;

pub use config::ContextConfig;
pub use consumers::{Consume, FnConsumer, TimeConsumer};
pub use context::{Binding, ContextBuilder, ContextHandle, EventContext};
pub use error::{ContextError, DeliveryError};
pub use events::{Event, EventHistory, Kind, TIME};
pub use logging::{LogKind, LogRecord, LogSink};
pub use producers::{ClockProducer, Produce, QueueProducer};
pub use queue::{MemoryQueue, WorkQueue};
pub use schedule::Schedule;

#[cfg(feature = "logging")]
pub use logging::StdoutWriter;

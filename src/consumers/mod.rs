//! Event consumers: typed sinks reacting to declared event kinds.
//!
//! ## Contents
//! - [`Consume`] — the consumer contract (declared kinds + handler)
//! - [`FnConsumer`] — closure-backed consumer for simple reactions
//! - [`TimeConsumer`] — schedule-gated trigger over [`TIME`](crate::events::TIME) events
//!
//! Consumers are registered per kind through
//! [`EventContext::register_consumer`](crate::context::EventContext::register_consumer);
//! a single instance may be registered under several kinds.

mod consume;
mod time;

pub use consume::{Consume, FnConsumer};
pub use time::TimeConsumer;

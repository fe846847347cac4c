//! Event data model: kinds, events, and the bounded history.
//!
//! ## Contents
//! - [`Kind`], [`Event`] — the routing tag and the routed fact
//! - [`EventHistory`] — bounded audit trail kept by the context
//! - [`TIME`] — the built-in kind the clock producer emits
//!
//! ## Quick reference
//! - **Creators**: producers ([`ClockProducer`](crate::producers::ClockProducer),
//!   [`QueueProducer`](crate::producers::QueueProducer)) and any caller of
//!   [`EventContext::raise_event`](crate::context::EventContext::raise_event).
//! - **Owner**: once raised, the context appends the event to its history.

mod event;
mod history;

pub use event::{Event, Kind, TIME};
pub use history::EventHistory;

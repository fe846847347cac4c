//! Event producers: the push/poll sources feeding the context.
//!
//! ## Contents
//! - [`Produce`] — the producer lifecycle contract (bind, verify, start)
//! - [`ClockProducer`] — built-in periodic [`TIME`](crate::events::TIME) source
//! - [`QueueProducer`] — drains a [`WorkQueue`](crate::queue::WorkQueue) on a timer
//!
//! Both built-ins are registered automatically by
//! [`EventContext::initialize`](crate::context::EventContext::initialize);
//! custom producers go through
//! [`EventContext::register_producer`](crate::context::EventContext::register_producer).

mod clock;
mod drain;
mod produce;

pub use clock::ClockProducer;
pub use drain::QueueProducer;
pub use produce::Produce;

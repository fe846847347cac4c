//! # Log side channel: records, sinks, and fan-out.
//!
//! The context notifies this channel on every lifecycle and delivery step.
//! Sinks are pluggable and isolated: each gets a bounded queue and a
//! dedicated worker, so a slow or panicking sink never blocks the context
//! or its siblings.
//!
//! ## Contents
//! - [`LogKind`], [`LogRecord`] — the structured record model
//! - [`LogSink`] — the sink trait; [`LogFn`] adapts a plain callback
//! - [`SinkSet`] — bounded fan-out with overflow accounting
//! - [`StdoutWriter`] — feature-gated reference sink (`logging`)

mod record;
mod sink;
mod sink_set;

pub use record::{LogKind, LogRecord};
pub use sink::{LogFn, LogSink};
pub use sink_set::SinkSet;

#[cfg(feature = "logging")]
mod writer;
#[cfg(feature = "logging")]
pub use writer::StdoutWriter;

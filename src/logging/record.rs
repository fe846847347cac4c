//! # Structured log records emitted by the context.
//!
//! Every lifecycle and delivery step the context takes is described by a
//! [`LogRecord`] and fanned out to the attached sinks. Records classify
//! themselves with [`LogKind`]; sinks decide what to do with each class
//! (print, persist, count) — persistence and formatting beyond [`Display`]
//! are the sink's business, not the bus's.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};

/// Classification of log records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    /// An event was raised into the context.
    EventSent,
    /// A consumer received an event.
    EventReceived,

    /// A producer was registered and bound.
    ProducerRegistered,
    /// A consumer was registered under a kind.
    ConsumerRegistered,

    /// The context was initialized and assigned its identity.
    ContextStartup,
    /// The context was shut down and producer timers cancelled.
    ContextShutdown,

    /// A failure was contained (handler panic, contract violation, overflow).
    Error,
    /// Anything informational.
    Info,
}

impl LogKind {
    /// Returns a short stable label (snake_case) for sinks that key on it.
    pub fn as_label(&self) -> &'static str {
        match self {
            LogKind::EventSent => "event_sent",
            LogKind::EventReceived => "event_received",
            LogKind::ProducerRegistered => "producer_registered",
            LogKind::ConsumerRegistered => "consumer_registered",
            LogKind::ContextStartup => "context_startup",
            LogKind::ContextShutdown => "context_shutdown",
            LogKind::Error => "error",
            LogKind::Info => "info",
        }
    }
}

/// Structured record handed to every attached log sink.
#[derive(Clone, Debug)]
pub struct LogRecord {
    /// Wall-clock timestamp of the record.
    pub at: DateTime<Utc>,
    /// Record classification.
    pub kind: LogKind,
    /// Optional human-readable message.
    pub message: Option<Arc<str>>,
    /// Descriptor of the component the record is about.
    pub source: Option<Arc<str>>,
    /// Error label/message, set for `LogKind::Error` records.
    pub error: Option<Arc<str>>,
}

impl LogRecord {
    /// Creates a record of the given kind stamped with the current instant.
    pub fn new(kind: LogKind) -> Self {
        Self {
            at: Utc::now(),
            kind,
            message: None,
            source: None,
            error: None,
        }
    }

    /// Attaches a human-readable message.
    #[inline]
    pub fn with_message(mut self, message: impl Into<Arc<str>>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Attaches the descriptor of the component this record is about.
    #[inline]
    pub fn with_source(mut self, source: impl Into<Arc<str>>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Attaches an error label or message.
    #[inline]
    pub fn with_error(mut self, error: impl Into<Arc<str>>) -> Self {
        self.error = Some(error.into());
        self
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} {}",
            self.source.as_deref().unwrap_or("context"),
            self.at.format("%Y-%m-%dT%H:%M:%S%.3fZ"),
            self.kind.as_label(),
        )?;
        if let Some(msg) = &self.message {
            write!(f, ": {msg}")?;
        }
        if let Some(err) = &self.error {
            write!(f, " (error: {err})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_source_kind_and_message() {
        let rec = LogRecord::new(LogKind::EventSent)
            .with_source("clock")
            .with_message("tick");
        let s = rec.to_string();
        assert!(s.starts_with("[clock]"), "{s}");
        assert!(s.contains("event_sent"), "{s}");
        assert!(s.ends_with(": tick"), "{s}");
    }

    #[test]
    fn display_defaults_source_to_context() {
        let rec = LogRecord::new(LogKind::Info);
        assert!(rec.to_string().starts_with("[context]"));
    }
}

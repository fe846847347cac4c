//! # Events routed by the bus.
//!
//! An [`Event`] is an immutable, timestamped fact. Its [`Kind`] is an explicit
//! tag declared by whoever produces the event; the context routes exclusively
//! on this tag (exact match, no structural or type-id lookup).
//!
//! ## Ordering guarantees
//! Each event carries a globally unique sequence number (`seq`) that increases
//! monotonically. Use `seq` to restore the order in which events were created
//! when history interleaves concurrent raisers.
//!
//! ## Example
//! ```rust
//! use omnibus::{Event, Kind};
//!
//! const AUDIT: Kind = Kind::new("audit");
//!
//! let ev = Event::new(AUDIT)
//!     .with_message("user logged in")
//!     .with_source("session-service");
//!
//! assert_eq!(ev.kind, AUDIT);
//! assert_eq!(ev.message.as_deref(), Some("user logged in"));
//! ```

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;

use chrono::{DateTime, Utc};

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Routable event-kind tag.
///
/// A `Kind` wraps a stable `&'static str` identifier. Every event-producing
/// path declares its kind explicitly; the routing table is keyed on it.
/// Two kinds are the same route if and only if their identifiers are equal.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Kind(&'static str);

impl Kind {
    /// Declares a new kind with the given stable identifier.
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    /// Returns the identifier this kind routes on.
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl fmt::Debug for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Kind({})", self.0)
    }
}

/// Built-in kind emitted by the periodic clock producer.
pub const TIME: Kind = Kind::new("time");

/// Immutable routed fact with optional metadata.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: the instant the event describes (clock events are stamped with
///   the tick instant; everything else defaults to creation time)
/// - `kind`: routing tag
/// - `message` / `source`: optional human-readable metadata
#[derive(Clone, Debug)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// The instant this event is about.
    pub at: DateTime<Utc>,
    /// Routing tag.
    pub kind: Kind,
    /// Optional human-readable payload.
    pub message: Option<Arc<str>>,
    /// Identifier of whatever raised the event, set by the context on raise.
    pub source: Option<Arc<str>>,
}

impl Event {
    /// Creates a new event of the given kind stamped with the current instant.
    pub fn new(kind: Kind) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: Utc::now(),
            kind,
            message: None,
            source: None,
        }
    }

    /// Re-stamps the event with an explicit instant.
    ///
    /// Used by the clock producer so schedule evaluation sees the tick
    /// instant, not the allocation instant.
    #[inline]
    pub fn stamped(mut self, at: DateTime<Utc>) -> Self {
        self.at = at;
        self
    }

    /// Attaches a human-readable message.
    #[inline]
    pub fn with_message(mut self, message: impl Into<Arc<str>>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Attaches the identifier of the raising component.
    #[inline]
    pub fn with_source(mut self, source: impl Into<Arc<str>>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] #{} at {}", self.kind, self.seq, self.at)?;
        if let Some(msg) = &self.message {
            write!(f, ": {msg}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Kind = Kind::new("a");
    const ALSO_A: Kind = Kind::new("a");
    const B: Kind = Kind::new("b");

    #[test]
    fn kind_equality_is_identifier_equality() {
        assert_eq!(A, ALSO_A);
        assert_ne!(A, B);
        assert_eq!(A.as_str(), "a");
    }

    #[test]
    fn seq_is_strictly_increasing() {
        let first = Event::new(A);
        let second = Event::new(A);
        assert!(second.seq > first.seq, "{} !> {}", second.seq, first.seq);
    }

    #[test]
    fn stamped_overrides_creation_instant() {
        let at = Utc::now() - chrono::Duration::hours(3);
        let ev = Event::new(TIME).stamped(at);
        assert_eq!(ev.at, at);
    }

    #[test]
    fn builder_attaches_metadata() {
        let ev = Event::new(B).with_message("m").with_source("s");
        assert_eq!(ev.message.as_deref(), Some("m"));
        assert_eq!(ev.source.as_deref(), Some("s"));
    }
}

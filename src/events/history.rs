//! # Bounded in-memory event history.
//!
//! [`EventHistory`] is the context's audit trail: an append-only ring buffer
//! of delivered events. Unbounded concurrent append structures are a
//! resource-exhaustion risk in long-running processes, so the buffer evicts
//! its oldest entry once `capacity` is reached and counts what it evicted.
//!
//! Reads are point-in-time snapshots; callers never observe a partially
//! applied append.

use chrono::{DateTime, Utc};
use std::collections::VecDeque;

use super::event::Event;

/// Ring buffer of delivered events, newest at the back.
#[derive(Debug)]
pub struct EventHistory {
    buf: VecDeque<Event>,
    capacity: usize,
    evicted: u64,
}

impl EventHistory {
    /// Creates a history retaining at most `capacity` events (min 1, clamped).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            buf: VecDeque::with_capacity(capacity),
            capacity,
            evicted: 0,
        }
    }

    /// Appends an event, evicting the oldest entry when at capacity.
    pub fn push(&mut self, ev: Event) {
        if self.buf.len() == self.capacity {
            self.buf.pop_front();
            self.evicted += 1;
        }
        self.buf.push_back(ev);
    }

    /// Returns a snapshot of retained events in insertion order,
    /// optionally filtered to events stamped at or after `since`.
    pub fn snapshot_since(&self, since: Option<DateTime<Utc>>) -> Vec<Event> {
        match since {
            None => self.buf.iter().cloned().collect(),
            Some(since) => self.buf.iter().filter(|e| e.at >= since).cloned().collect(),
        }
    }

    /// Number of currently retained events.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Total number of events evicted by the retention policy.
    pub fn evicted(&self) -> u64 {
        self.evicted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::event::Kind;
    use chrono::Duration;

    const K: Kind = Kind::new("k");

    #[test]
    fn push_retains_insertion_order() {
        let mut h = EventHistory::new(8);
        for _ in 0..3 {
            h.push(Event::new(K));
        }
        let snap = h.snapshot_since(None);
        assert_eq!(snap.len(), 3);
        assert!(snap[0].seq < snap[1].seq && snap[1].seq < snap[2].seq);
    }

    #[test]
    fn capacity_evicts_oldest_first() {
        let mut h = EventHistory::new(2);
        let first = Event::new(K);
        let first_seq = first.seq;
        h.push(first);
        h.push(Event::new(K));
        h.push(Event::new(K));

        assert_eq!(h.len(), 2);
        assert_eq!(h.evicted(), 1);
        assert!(h.snapshot_since(None).iter().all(|e| e.seq != first_seq));
    }

    #[test]
    fn snapshot_since_filters_inclusive() {
        let base = Utc::now();
        let mut h = EventHistory::new(8);
        h.push(Event::new(K).stamped(base - Duration::seconds(2)));
        h.push(Event::new(K).stamped(base));
        h.push(Event::new(K).stamped(base + Duration::seconds(2)));

        let snap = h.snapshot_since(Some(base));
        assert_eq!(snap.len(), 2);
        assert!(snap.iter().all(|e| e.at >= base));
    }

    #[test]
    fn snapshot_since_after_last_event_is_empty() {
        let mut h = EventHistory::new(8);
        h.push(Event::new(K));
        let later = Utc::now() + Duration::seconds(60);
        assert!(h.snapshot_since(Some(later)).is_empty());
    }

    #[test]
    fn zero_capacity_is_clamped() {
        let mut h = EventHistory::new(0);
        h.push(Event::new(K));
        assert_eq!(h.len(), 1);
    }
}

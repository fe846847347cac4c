//! # In-memory FIFO work queue.
//!
//! [`MemoryQueue`] is the default [`WorkQueue`] implementation: an unbounded
//! `VecDeque` behind a mutex. It tolerates concurrent enqueuers; in the
//! common wiring a single [`QueueProducer`](crate::producers::QueueProducer)
//! is the only dequeuer.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::events::Event;
use crate::queue::WorkQueue;

/// Unbounded FIFO buffer of pending events.
#[derive(Debug, Default)]
pub struct MemoryQueue {
    buf: Mutex<VecDeque<Event>>,
}

impl MemoryQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }
}

impl WorkQueue for MemoryQueue {
    fn enqueue(&self, ev: Event) {
        self.buf.lock().expect("queue mutex poisoned").push_back(ev);
    }

    fn dequeue(&self, count: usize) -> Vec<Event> {
        let mut buf = self.buf.lock().expect("queue mutex poisoned");
        let take = count.min(buf.len());
        buf.drain(..take).collect()
    }

    fn len(&self) -> usize {
        self.buf.lock().expect("queue mutex poisoned").len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Kind;

    const K: Kind = Kind::new("queued");

    #[test]
    fn dequeue_is_fifo() {
        let q = MemoryQueue::new();
        let first = Event::new(K);
        let first_seq = first.seq;
        q.enqueue(first);
        q.enqueue(Event::new(K));

        let got = q.dequeue(1);
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].seq, first_seq);
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn dequeue_returns_fewer_when_short() {
        let q = MemoryQueue::new();
        q.enqueue(Event::new(K));
        assert_eq!(q.dequeue(10).len(), 1);
    }

    #[test]
    fn empty_dequeue_is_not_an_error() {
        let q = MemoryQueue::new();
        assert!(q.dequeue(5).is_empty());
        assert!(q.is_empty());
    }

    #[test]
    fn concurrent_enqueues_are_not_lost() {
        use std::sync::Arc;

        let q = Arc::new(MemoryQueue::new());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let q = Arc::clone(&q);
            handles.push(std::thread::spawn(move || {
                for _ in 0..50 {
                    q.enqueue(Event::new(K));
                }
            }));
        }
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(q.len(), 400);
    }
}

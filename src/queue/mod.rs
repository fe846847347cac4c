//! Work queue: FIFO buffering that decouples event origination from delivery.
//!
//! Producers that cannot (or should not) raise events inline deposit them
//! here; the context's [`QueueProducer`](crate::producers::QueueProducer)
//! drains the queue on a timer and forwards each item into the dispatch path.
//!
//! ## Contract
//! - `enqueue` appends to the tail.
//! - `dequeue(n)` removes and returns up to `n` items from the head; fewer
//!   when the queue is shorter, and an empty vec when empty — underflow is
//!   not an error.
//! - The queue owns entries until dequeued; entries have no identity beyond
//!   position.

mod memory;

pub use memory::MemoryQueue;

use crate::events::Event;

/// FIFO buffer of pending events.
///
/// Implementations must tolerate concurrent enqueuers.
pub trait WorkQueue: Send + Sync + 'static {
    /// Appends an event to the tail.
    fn enqueue(&self, ev: Event);

    /// Removes and returns up to `count` events from the head.
    fn dequeue(&self, count: usize) -> Vec<Event>;

    /// Number of buffered events.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

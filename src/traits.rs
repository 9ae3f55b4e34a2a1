//! Common trait for the priority queue implementations
//!
//! This module provides the shared contract implemented by both queue
//! variants in this crate:
//!
//! - [`ListPriorityQueue`](crate::sorted_list::ListPriorityQueue): sorted linked list
//! - [`HeapPriorityQueue`](crate::binary_heap::HeapPriorityQueue): complete binary heap
//!
//! Both are min-queues: lower priority numbers take precedence, so a
//! priority 1.0 entry is dequeued before a priority 2.0 entry. Entries with
//! equal priorities come out in insertion order (FIFO).

use std::fmt;

/// Error returned by [`PriorityQueue::dequeue`] and [`PriorityQueue::peek`]
/// when the queue contains no elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyQueueError;

impl fmt::Display for EmptyQueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "operation on empty priority queue")
    }
}

impl std::error::Error for EmptyQueueError {}

/// Shared contract for min-priority queues
///
/// Unlike `std::collections::BinaryHeap`, which orders values directly via
/// `Ord`, these queues pair each value with an `f64` priority supplied at
/// enqueue time, and they are min-queues: `dequeue` returns the element with
/// the smallest priority. Ties on priority are broken in favor of the
/// earlier-enqueued element, so a queue behaves as a plain FIFO queue when
/// every element shares one priority.
///
/// Priorities are totally ordered via `ordered_float::OrderedFloat`; a NaN
/// priority sorts after every other priority rather than being rejected.
///
/// # Example
///
/// ```rust
/// use stable_pqueue::PriorityQueue;
/// use stable_pqueue::binary_heap::HeapPriorityQueue;
///
/// let mut queue = HeapPriorityQueue::new();
/// queue.enqueue("reindex", 2.0);
/// queue.enqueue("flush", 1.0);
///
/// assert_eq!(queue.peek(), Ok(&"flush"));
/// assert_eq!(queue.dequeue(), Ok("flush"));
/// assert_eq!(queue.dequeue(), Ok("reindex"));
/// ```
pub trait PriorityQueue<T> {
    /// Creates a new empty queue
    fn new() -> Self;

    /// Returns the number of elements in the queue
    ///
    /// # Time Complexity
    /// O(1) for both implementations.
    fn len(&self) -> usize;

    /// Returns true if the queue is empty
    fn is_empty(&self) -> bool;

    /// Removes all elements, returning the queue to its initial empty state
    fn clear(&mut self);

    /// Inserts a value with the given priority
    ///
    /// Never fails; duplicate priorities are allowed and preserve insertion
    /// order among themselves.
    ///
    /// # Time Complexity
    /// O(log n) for the heap variant, O(n) worst case for the list variant
    /// (O(1) when the priority lands at either end of the list).
    fn enqueue(&mut self, value: T, priority: f64);

    /// Removes and returns the value with the smallest priority
    ///
    /// Ties on priority are resolved in favor of the earliest-enqueued value.
    ///
    /// # Errors
    /// Returns [`EmptyQueueError`] if the queue is empty.
    ///
    /// # Time Complexity
    /// O(1) for the list variant, O(log n) for the heap variant.
    fn dequeue(&mut self) -> Result<T, EmptyQueueError>;

    /// Returns the value `dequeue` would remove, without removing it
    ///
    /// # Errors
    /// Returns [`EmptyQueueError`] if the queue is empty.
    ///
    /// # Time Complexity
    /// O(1) for both implementations.
    fn peek(&self) -> Result<&T, EmptyQueueError>;
}

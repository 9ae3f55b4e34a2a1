//! Stable min-priority queues
//!
//! This crate provides two interchangeable min-priority queue implementations
//! behind one [`PriorityQueue`] trait. Both pair each value with an `f64`
//! priority and both are *stable*: elements enqueued with equal priorities
//! are dequeued in insertion order (FIFO).
//!
//! # Implementations
//!
//! - [`sorted_list::ListPriorityQueue`]: singly linked list kept sorted by
//!   priority; O(1) dequeue/peek, O(n) worst-case enqueue. Stability is
//!   structural: ties append after the run of equal-priority entries.
//! - [`binary_heap::HeapPriorityQueue`]: complete binary heap over a `Vec`;
//!   O(log n) enqueue/dequeue. Stability comes from a per-queue monotonic
//!   sequence counter folded into the heap ordering.
//!
//! # Example
//!
//! ```rust
//! use stable_pqueue::PriorityQueue;
//! use stable_pqueue::binary_heap::HeapPriorityQueue;
//!
//! let mut queue = HeapPriorityQueue::new();
//! queue.enqueue("compact", 3.0);
//! queue.enqueue("flush", 1.0);
//! queue.enqueue("sync", 1.0);
//!
//! assert_eq!(queue.dequeue(), Ok("flush"));
//! assert_eq!(queue.dequeue(), Ok("sync"));
//! assert_eq!(queue.dequeue(), Ok("compact"));
//! assert!(queue.dequeue().is_err());
//! ```

pub mod binary_heap;
pub mod sorted_list;
pub mod traits;

// Re-export the trait and error for convenience
pub use traits::{EmptyQueueError, PriorityQueue};

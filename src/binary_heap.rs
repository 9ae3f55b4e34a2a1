//! Binary-heap priority queue
//!
//! A min-priority queue backed by a complete binary heap stored in a `Vec`,
//! using the implicit-tree layout: the node at index `i` has its parent at
//! `(i - 1) / 2` and its children at `2i + 1` and `2i + 2`.
//!
//! Every entry is stamped with a monotonically increasing sequence number at
//! enqueue time; the heap invariant is maintained over the `(priority,
//! sequence)` pair, so entries with equal priorities are dequeued in
//! insertion order.
//!
//! The removal path keeps the tree *complete* in a stronger sense than the
//! usual array heap: every interior node has exactly two children while the
//! sift-down loop runs. When moving the last entry to the root would leave a
//! node with a single child, a transient duplicate of the relocated entry is
//! appended first and stripped off once the sift-down finishes. This lets
//! the loop compare against both children unconditionally instead of
//! special-casing a missing right child.
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `enqueue` | O(log n)   |
//! | `dequeue` | O(log n)   |
//! | `peek`    | O(1)       |
//! | `clear`   | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use stable_pqueue::PriorityQueue;
//! use stable_pqueue::binary_heap::HeapPriorityQueue;
//!
//! let mut queue = HeapPriorityQueue::new();
//! queue.enqueue("b", 1.0);
//! queue.enqueue("c", 1.0);
//! queue.enqueue("a", 0.5);
//!
//! assert_eq!(queue.dequeue(), Ok("a"));
//! // equal priorities drain in insertion order
//! assert_eq!(queue.dequeue(), Ok("b"));
//! assert_eq!(queue.dequeue(), Ok("c"));
//! ```

use crate::traits::{EmptyQueueError, PriorityQueue};
use ordered_float::OrderedFloat;
use std::fmt;

#[inline]
fn parent(i: usize) -> usize {
    (i - 1) / 2
}

#[inline]
fn left_child(i: usize) -> usize {
    2 * i + 1
}

#[inline]
fn right_child(i: usize) -> usize {
    2 * i + 2
}

/// One occupied position in the backing array
#[derive(Debug, Clone)]
struct Slot<T> {
    value: T,
    priority: OrderedFloat<f64>,
    seq: u64,
}

impl<T> Slot<T> {
    /// The total order the heap invariant is maintained over: priority
    /// first, then insertion order
    #[inline]
    fn key(&self) -> (OrderedFloat<f64>, u64) {
        (self.priority, self.seq)
    }
}

/// A min-priority queue backed by a complete binary heap over a `Vec`
///
/// `count` mirrors the backing vector's length outside of `dequeue`; inside
/// `dequeue` the two move in lockstep through the transient duplicate slot.
/// `next_seq` is incremented exactly once per enqueue and never reused, even
/// across `clear`, so insertion order is totally ordered for the lifetime of
/// the queue.
#[derive(Debug, Clone)]
pub struct HeapPriorityQueue<T> {
    slots: Vec<Slot<T>>,
    count: usize,
    next_seq: u64,
}

impl<T: Clone> PriorityQueue<T> for HeapPriorityQueue<T> {
    fn new() -> Self {
        Self {
            slots: Vec::new(),
            count: 0,
            next_seq: 0,
        }
    }

    fn len(&self) -> usize {
        self.count
    }

    fn is_empty(&self) -> bool {
        self.count == 0
    }

    fn clear(&mut self) {
        // next_seq keeps running: it only has to be monotone over the
        // queue's lifetime, not dense
        self.slots.clear();
        self.count = 0;
    }

    fn enqueue(&mut self, value: T, priority: f64) {
        let mut anchor = self.count;
        self.slots.push(Slot {
            value,
            priority: OrderedFloat(priority),
            seq: self.next_seq,
        });
        self.next_seq += 1;
        self.count += 1;

        // Sift up on strict priority only: an equal-priority parent was
        // enqueued earlier and must stay above the new entry
        while anchor != 0 && self.slots[anchor].priority < self.slots[parent(anchor)].priority {
            self.slots.swap(anchor, parent(anchor));
            anchor = parent(anchor);
        }
    }

    fn dequeue(&mut self) -> Result<T, EmptyQueueError> {
        if self.count == 0 {
            return Err(EmptyQueueError);
        }

        // Overwrite the root with the last entry and shrink by one; for a
        // single-element heap this is the whole removal
        let removed = self.slots.swap_remove(0);
        self.count -= 1;
        if self.count <= 1 {
            return Ok(removed.value);
        }

        // Completeness fix-up: an even count means some node would be left
        // with exactly one child, which the loop below cannot handle.
        // Appending a duplicate of the relocated root restores the
        // every-node-has-zero-or-two-children shape; the duplicate can never
        // win a comparison against the entry it copies, so it stays put at
        // the end until stripped.
        let duplicated = self.count % 2 == 0;
        if duplicated {
            self.slots.push(self.slots[0].clone());
            self.count += 1;
        }

        // Sift down. The loop condition plus the odd count guarantee both
        // children exist at every step.
        let mut anchor = 0;
        while self.count >= 2 * anchor + 2 {
            let left = left_child(anchor);
            let right = right_child(anchor);
            if self.slots[anchor].key() <= self.slots[left].key()
                && self.slots[anchor].key() <= self.slots[right].key()
            {
                break;
            }
            // Swap with the smaller child; equal priorities fall back to the
            // earlier-enqueued one via the sequence component of the key
            let smaller = if self.slots[left].key() <= self.slots[right].key() {
                left
            } else {
                right
            };
            self.slots.swap(anchor, smaller);
            anchor = smaller;
        }

        if duplicated {
            self.slots.pop();
            self.count -= 1;
        }
        Ok(removed.value)
    }

    fn peek(&self) -> Result<&T, EmptyQueueError> {
        self.slots.first().map(|s| &s.value).ok_or(EmptyQueueError)
    }
}

impl<T: Clone> HeapPriorityQueue<T> {
    /// Returns a lazy iterator over the contained values in removal order
    ///
    /// The iterator drains a clone of the queue, so the original is left
    /// untouched and the sequence can be restarted by calling this again.
    pub fn iter_ordered(&self) -> Ordered<T> {
        Ordered {
            queue: self.clone(),
        }
    }
}

/// Iterator over a [`HeapPriorityQueue`]'s values in removal order
///
/// Produced by [`HeapPriorityQueue::iter_ordered`]; owns an independent copy
/// of the queue.
pub struct Ordered<T: Clone> {
    queue: HeapPriorityQueue<T>,
}

impl<T: Clone> Iterator for Ordered<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.queue.dequeue().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

impl<T: Clone> ExactSizeIterator for Ordered<T> {}

impl<T: Clone + fmt::Display> fmt::Display for HeapPriorityQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.iter_ordered() {
            write!(f, "{} ", value)?;
        }
        writeln!(f)
    }
}

impl<T: Clone> Default for HeapPriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

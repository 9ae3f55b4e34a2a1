//! Sorted-linked-list priority queue
//!
//! A min-priority queue backed by a singly linked list kept in non-decreasing
//! priority order. The head always holds the minimum, so removal is trivial;
//! insertion pays the ordering cost up front by splicing into the sorted
//! chain. A tail pointer makes appending at or past the current maximum
//! priority O(1), which also gives FIFO ordering among equal priorities for
//! free: a tied element is always appended after the existing run of elements
//! with that priority.
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `enqueue` | O(n) worst case, O(1) at either end |
//! | `dequeue` | O(1)       |
//! | `peek`    | O(1)       |
//! | `clear`   | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use stable_pqueue::PriorityQueue;
//! use stable_pqueue::sorted_list::ListPriorityQueue;
//!
//! let mut queue = ListPriorityQueue::new();
//! queue.enqueue("low", 5.0);
//! queue.enqueue("high", 1.0);
//! queue.enqueue("mid", 3.0);
//!
//! assert_eq!(queue.dequeue(), Ok("high"));
//! assert_eq!(queue.dequeue(), Ok("mid"));
//! assert_eq!(queue.dequeue(), Ok("low"));
//! assert!(queue.dequeue().is_err());
//! ```

use crate::traits::{EmptyQueueError, PriorityQueue};
use ordered_float::OrderedFloat;
use std::fmt;
use std::ptr::NonNull;

struct Node<T> {
    value: T,
    priority: OrderedFloat<f64>,
    next: Option<NonNull<Node<T>>>,
}

/// A min-priority queue backed by a sorted singly linked list
///
/// Nodes are kept in non-decreasing priority order; `head` holds the minimum
/// and `tail` the maximum. FIFO among equal priorities is structural: ties
/// are inserted after the run of equal-priority nodes, so no insertion-order
/// tag is needed.
pub struct ListPriorityQueue<T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
    _phantom: std::marker::PhantomData<T>,
}

// The queue exclusively owns its nodes; there is no shared or interior
// mutability, so it is as thread-transferable as the values it holds.
unsafe impl<T: Send> Send for ListPriorityQueue<T> {}
unsafe impl<T: Sync> Sync for ListPriorityQueue<T> {}

impl<T> PriorityQueue<T> for ListPriorityQueue<T> {
    fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _phantom: std::marker::PhantomData,
        }
    }

    fn len(&self) -> usize {
        self.len
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn clear(&mut self) {
        let mut cursor = self.head.take();
        while let Some(node) = cursor {
            // Reclaim the node; the Box drop frees value and cell together
            cursor = unsafe { Box::from_raw(node.as_ptr()) }.next;
        }
        self.tail = None;
        self.len = 0;
    }

    fn enqueue(&mut self, value: T, priority: f64) {
        let priority = OrderedFloat(priority);
        let node = Box::into_raw(Box::new(Node {
            value,
            priority,
            next: None,
        }));
        // SAFETY: Box::into_raw never returns null
        let node = unsafe { NonNull::new_unchecked(node) };

        unsafe {
            match (self.head, self.tail) {
                (None, _) => {
                    self.head = Some(node);
                    self.tail = Some(node);
                }
                (Some(head), _) if priority < (*head.as_ptr()).priority => {
                    (*node.as_ptr()).next = Some(head);
                    self.head = Some(node);
                }
                (_, Some(tail)) if priority >= (*tail.as_ptr()).priority => {
                    // Covers ties with the current maximum: appending after the
                    // run of equal priorities is what keeps ties FIFO
                    (*tail.as_ptr()).next = Some(node);
                    self.tail = Some(node);
                }
                (Some(head), _) => {
                    // Interior splice: advance past every node whose successor
                    // is still <= priority. The tail test above guarantees a
                    // strictly greater successor exists before the chain ends.
                    let mut cursor = head;
                    while let Some(next) = (*cursor.as_ptr()).next {
                        if priority < (*next.as_ptr()).priority {
                            break;
                        }
                        cursor = next;
                    }
                    (*node.as_ptr()).next = (*cursor.as_ptr()).next;
                    (*cursor.as_ptr()).next = Some(node);
                }
            }
        }
        self.len += 1;
    }

    fn dequeue(&mut self) -> Result<T, EmptyQueueError> {
        let head = self.head.ok_or(EmptyQueueError)?;
        // SAFETY: head came from Box::into_raw in enqueue and is unlinked
        // before the Box is dropped
        let node = unsafe { Box::from_raw(head.as_ptr()) };
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Ok(node.value)
    }

    fn peek(&self) -> Result<&T, EmptyQueueError> {
        match self.head {
            Some(head) => unsafe { Ok(&(*head.as_ptr()).value) },
            None => Err(EmptyQueueError),
        }
    }
}

impl<T: Clone> ListPriorityQueue<T> {
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

/// Iterator over a [`ListPriorityQueue`]'s values in removal order
///
/// Produced by [`ListPriorityQueue::iter_ordered`]; owns an independent copy
/// of the queue.
pub struct Ordered<T: Clone> {
    queue: ListPriorityQueue<T>,
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

impl<T: Clone> Clone for ListPriorityQueue<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        let mut cursor = self.head;
        while let Some(node) = cursor {
            // SAFETY: nodes are alive for the lifetime of &self
            let node = unsafe { &*node.as_ptr() };
            // The source chain is sorted, so every replayed enqueue takes the
            // O(1) tail-append path and ties keep their relative order
            copy.enqueue(node.value.clone(), node.priority.into_inner());
            cursor = node.next;
        }
        copy
    }
}

impl<T: Clone + fmt::Display> fmt::Display for ListPriorityQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.iter_ordered() {
            write!(f, "{} ", value)?;
        }
        writeln!(f)
    }
}

impl<T> fmt::Debug for ListPriorityQueue<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        let mut cursor = self.head;
        while let Some(node) = cursor {
            let node = unsafe { &*node.as_ptr() };
            list.entry(&(&node.value, node.priority.into_inner()));
            cursor = node.next;
        }
        list.finish()
    }
}

impl<T> Drop for ListPriorityQueue<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for ListPriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

//! Property-based tests using proptest
//!
//! These tests generate random operation sequences and verify the queue
//! invariants against a reference model: both implementations must drain in
//! the order of a stable sort over (priority, insertion index).

use proptest::prelude::*;
use stable_pqueue::binary_heap::HeapPriorityQueue;
use stable_pqueue::sorted_list::ListPriorityQueue;
use stable_pqueue::PriorityQueue;

/// Drain order equals a stable sort of the input by priority
///
/// Priorities come from a small integer range so ties are frequent; values
/// are the insertion indices, which makes FIFO violations directly visible.
fn test_drain_matches_stable_sort<Q: PriorityQueue<usize>>(
    priorities: Vec<u8>,
) -> Result<(), TestCaseError> {
    let mut queue = Q::new();
    for (i, &p) in priorities.iter().enumerate() {
        queue.enqueue(i, p as f64);
    }

    let mut expected: Vec<(usize, u8)> = priorities.iter().copied().enumerate().collect();
    expected.sort_by_key(|&(_, p)| p);

    for &(index, _) in &expected {
        prop_assert_eq!(queue.dequeue(), Ok(index));
    }
    prop_assert!(queue.is_empty());
    prop_assert!(queue.dequeue().is_err());

    Ok(())
}

/// Dequeued priorities are non-decreasing under interleaved operations
fn test_priorities_non_decreasing<Q: PriorityQueue<i32>>(
    ops: Vec<(bool, i16)>,
) -> Result<(), TestCaseError> {
    let mut queue = Q::new();
    let mut model: Vec<i16> = Vec::new();

    for (should_dequeue, priority) in ops {
        if should_dequeue && !queue.is_empty() {
            let value = queue.dequeue();
            prop_assert!(value.is_ok());
            // The dequeued value encodes its priority
            let dequeued = value.unwrap() as i16;
            let min = *model.iter().min().expect("model tracks queue contents");
            prop_assert_eq!(dequeued, min);
            let pos = model
                .iter()
                .position(|&p| p == dequeued)
                .expect("dequeued priority was enqueued");
            model.remove(pos);
        } else {
            queue.enqueue(priority as i32, priority as f64);
            model.push(priority);
        }

        prop_assert_eq!(queue.len(), model.len());
    }

    Ok(())
}

/// len() tracks enqueues minus successful dequeues, with clears resetting
fn test_len_invariant<Q: PriorityQueue<i32>>(
    ops: Vec<(u8, i16)>,
) -> Result<(), TestCaseError> {
    let mut queue = Q::new();
    let mut expected_len = 0usize;

    for (op, value) in ops {
        match op % 8 {
            0 => {
                // Rare clear
                queue.clear();
                expected_len = 0;
            }
            1 | 2 => {
                if queue.dequeue().is_ok() {
                    expected_len -= 1;
                } else {
                    prop_assert_eq!(expected_len, 0);
                }
            }
            _ => {
                queue.enqueue(value as i32, value as f64);
                expected_len += 1;
            }
        }

        prop_assert_eq!(queue.len(), expected_len);
        prop_assert_eq!(queue.is_empty(), expected_len == 0);
    }

    Ok(())
}

/// Both variants drain identically for any input
fn test_variants_agree(priorities: Vec<u8>) -> Result<(), TestCaseError> {
    let mut list: ListPriorityQueue<usize> = ListPriorityQueue::new();
    let mut heap: HeapPriorityQueue<usize> = HeapPriorityQueue::new();

    for (i, &p) in priorities.iter().enumerate() {
        list.enqueue(i, p as f64);
        heap.enqueue(i, p as f64);
    }

    for _ in 0..priorities.len() {
        prop_assert_eq!(list.dequeue(), heap.dequeue());
    }
    prop_assert!(list.is_empty() && heap.is_empty());

    Ok(())
}

proptest! {
    #[test]
    fn list_drain_matches_stable_sort(priorities in prop::collection::vec(0u8..8, 0..200)) {
        test_drain_matches_stable_sort::<ListPriorityQueue<usize>>(priorities)?;
    }

    #[test]
    fn list_priorities_non_decreasing(ops in prop::collection::vec((prop::bool::ANY, -100i16..100), 0..200)) {
        test_priorities_non_decreasing::<ListPriorityQueue<i32>>(ops)?;
    }

    #[test]
    fn list_len_invariant(ops in prop::collection::vec((0u8..=255, -100i16..100), 0..200)) {
        test_len_invariant::<ListPriorityQueue<i32>>(ops)?;
    }

    #[test]
    fn heap_drain_matches_stable_sort(priorities in prop::collection::vec(0u8..8, 0..200)) {
        test_drain_matches_stable_sort::<HeapPriorityQueue<usize>>(priorities)?;
    }

    #[test]
    fn heap_priorities_non_decreasing(ops in prop::collection::vec((prop::bool::ANY, -100i16..100), 0..200)) {
        test_priorities_non_decreasing::<HeapPriorityQueue<i32>>(ops)?;
    }

    #[test]
    fn heap_len_invariant(ops in prop::collection::vec((0u8..=255, -100i16..100), 0..200)) {
        test_len_invariant::<HeapPriorityQueue<i32>>(ops)?;
    }

    #[test]
    fn variants_agree(priorities in prop::collection::vec(0u8..8, 0..200)) {
        test_variants_agree(priorities)?;
    }
}

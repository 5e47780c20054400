#![cfg(all(feature = "ring", feature = "list"))]
//! Property-based tests for the deque operations.
//!
//! Random operation sequences are applied to each container and to a
//! `VecDeque` model; contents, length and errors must agree after every step.

use std::collections::VecDeque;

use proptest::prelude::*;
use sentinel_deque::list::DualSentinelList;
use sentinel_deque::ring::SentinelRingDeque;
use sentinel_deque::{Deque, ErrorKind};

// =============================================================================
// Strategy for generating operation sequences
// =============================================================================

#[derive(Debug, Clone)]
enum Operation {
    AddFront(i32),
    AddBack(i32),
    RemoveFront,
    RemoveBack,
}

fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        any::<i32>().prop_map(Operation::AddFront),
        any::<i32>().prop_map(Operation::AddBack),
        Just(Operation::RemoveFront),
        Just(Operation::RemoveBack),
    ]
}

fn operations() -> impl Strategy<Value = Vec<Operation>> {
    prop::collection::vec(operation_strategy(), 0..200)
}

/// Applies `operations` to `deque` and the model, checking they agree after
/// each step. Returns the model.
fn run_against_model<D>(
    mut deque: D,
    operations: &[Operation],
) -> Result<(D, VecDeque<i32>), TestCaseError>
where
    D: Deque<i32>,
{
    let mut model = VecDeque::new();
    for operation in operations {
        match *operation {
            Operation::AddFront(value) => {
                deque.add_front(value);
                model.push_front(value);
            }
            Operation::AddBack(value) => {
                deque.add_back(value);
                model.push_back(value);
            }
            Operation::RemoveFront => match model.pop_front() {
                Some(expected) => prop_assert_eq!(deque.remove_front(), Ok(expected)),
                None => prop_assert_eq!(
                    deque.remove_front().map_err(|error| error.kind()),
                    Err(ErrorKind::EmptyCollection)
                ),
            },
            Operation::RemoveBack => match model.pop_back() {
                Some(expected) => prop_assert_eq!(deque.remove_back(), Ok(expected)),
                None => prop_assert_eq!(
                    deque.remove_back().map_err(|error| error.kind()),
                    Err(ErrorKind::EmptyCollection)
                ),
            },
        }
        prop_assert_eq!(deque.len(), model.len());
        prop_assert_eq!(deque.is_empty(), model.is_empty());
        prop_assert_eq!(deque.front().ok(), model.front());
        prop_assert_eq!(deque.back().ok(), model.back());
    }
    Ok((deque, model))
}

fn count_adds(operations: &[Operation]) -> usize {
    operations
        .iter()
        .filter(|operation| matches!(operation, Operation::AddFront(_) | Operation::AddBack(_)))
        .count()
}

proptest! {
    // =========================================================================
    // Model agreement
    // =========================================================================

    #[test]
    fn prop_ring_matches_model(operations in operations()) {
        let (deque, model) = run_against_model(SentinelRingDeque::new(), &operations)?;
        prop_assert!(deque.iter().eq(model.iter()));
    }

    #[test]
    fn prop_list_matches_model(operations in operations()) {
        let (list, model) = run_against_model(DualSentinelList::new(), &operations)?;
        prop_assert!(list.iter().eq(model.iter()));
        prop_assert!(list.iter().rev().eq(model.iter().rev()));
    }

    // =========================================================================
    // Size accounting
    // =========================================================================

    #[test]
    fn prop_ring_len_is_adds_minus_removes(values in prop::collection::vec(any::<i32>(), 0..100), removals in 0usize..150) {
        let mut deque: SentinelRingDeque<i32> = values.iter().copied().collect();
        let mut removed = 0;
        for step in 0..removals {
            let result = if step % 2 == 0 { deque.remove_front() } else { deque.remove_back() };
            if result.is_ok() {
                removed += 1;
            }
        }
        prop_assert_eq!(removed, removals.min(values.len()));
        prop_assert_eq!(deque.len(), values.len() - removed);
    }

    // =========================================================================
    // Allocation discipline
    // =========================================================================

    #[test]
    fn prop_ring_teardown_releases_every_link(operations in operations()) {
        let (deque, _) = run_against_model(SentinelRingDeque::new(), &operations)?;
        prop_assert_eq!(deque.allocation_stats().outstanding(), deque.len() + 1);

        let stats = deque.destroy();
        prop_assert_eq!(stats.allocations, count_adds(&operations) + 1);
        prop_assert_eq!(stats.outstanding(), 0);
    }

    #[test]
    fn prop_list_teardown_releases_every_link(operations in operations()) {
        let (list, _) = run_against_model(DualSentinelList::new(), &operations)?;
        prop_assert_eq!(list.allocation_stats().outstanding(), list.len() + 2);

        let stats = list.destroy();
        prop_assert_eq!(stats.allocations, count_adds(&operations) + 2);
        prop_assert_eq!(stats.outstanding(), 0);
    }
}

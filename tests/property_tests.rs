//! Property-based tests using proptest
//!
//! These tests generate random sequences of operations and verify
//! that the heap invariants are always maintained.

use proptest::prelude::*;
use min_heap_sort::heap_sort::{heap_sort, heap_sorted};
use min_heap_sort::min_heap::MinHeap;
use min_heap_sort::{Heap, HeapError};

/// Test that insert and remove_min keep heap order, size and minimum correct
fn test_insert_remove_invariant<H: Heap<i32, i32>>(
    ops: Vec<(bool, i32)>,
    is_heap: impl Fn(&H) -> bool,
) -> Result<(), TestCaseError> {
    let mut heap = H::new();
    let mut resident: Vec<i32> = Vec::new();

    for (should_remove, value) in ops {
        if should_remove && !heap.is_empty() {
            let removed = heap.remove_min().expect("heap is not empty");
            // Every key still resident must be >= the removed one
            let min_resident = resident.iter().min().copied();
            prop_assert_eq!(Some(removed), min_resident);
            let pos = resident
                .iter()
                .position(|&v| v == removed)
                .expect("removed value was inserted");
            resident.swap_remove(pos);
        } else {
            heap.insert(value, value);
            resident.push(value);
        }

        prop_assert!(is_heap(&heap), "heap order violated");
        prop_assert_eq!(heap.len(), resident.len());
        prop_assert_eq!(heap.is_empty(), resident.is_empty());
        prop_assert_eq!(heap.peek().map(|(k, _)| *k), resident.iter().min().copied());
    }

    Ok(())
}

/// Test that all removed elements are in non-decreasing order
fn test_remove_order_invariant<H: Heap<i32, i32>>(values: Vec<i32>) -> Result<(), TestCaseError> {
    let mut heap = H::new();

    for val in &values {
        heap.insert(*val, *val);
    }

    let mut last = i32::MIN;
    let mut removed = Vec::with_capacity(values.len());
    while !heap.is_empty() {
        let value = heap.remove_min().expect("heap is not empty");
        prop_assert!(value >= last, "Removed {} after {}", value, last);
        last = value;
        removed.push(value);
    }

    let mut expected = values;
    expected.sort_unstable();
    prop_assert_eq!(removed, expected);
    prop_assert_eq!(heap.remove_min(), Err(HeapError::Empty));

    Ok(())
}

proptest! {
    #[test]
    fn test_min_heap_insert_remove(ops in prop::collection::vec((any::<bool>(), any::<i32>()), 0..200)) {
        test_insert_remove_invariant::<MinHeap<i32>>(ops, |h: &MinHeap<i32>| h.is_heap())?;
    }

    #[test]
    fn test_min_heap_remove_order(values in prop::collection::vec(any::<i32>(), 0..300)) {
        test_remove_order_invariant::<MinHeap<i32>>(values)?;
    }

    #[test]
    fn test_heap_sort_matches_sort(values in prop::collection::vec(-1000i32..1000, 0..500)) {
        let mut expected = values.clone();
        expected.sort();

        prop_assert_eq!(heap_sorted(&values), expected.clone());

        let mut in_place = values;
        heap_sort(&mut in_place);
        prop_assert_eq!(in_place, expected);
    }

    #[test]
    fn test_clone_independence(
        values in prop::collection::vec(any::<i16>(), 1..100),
        drain_original in any::<bool>(),
    ) {
        let mut original: MinHeap<i16, i16> = values.iter().map(|&v| (v, v)).collect();
        let mut copy = original.clone();
        let expected = original.clone().into_sorted_vec();

        let (drained, kept) = if drain_original {
            (&mut original, copy)
        } else {
            (&mut copy, original.clone())
        };

        while drained.remove_min().is_ok() {}
        prop_assert!(drained.is_empty());

        prop_assert_eq!(kept.len(), values.len());
        prop_assert_eq!(kept.into_sorted_vec(), expected);
    }

    #[test]
    fn test_decrease_key_keeps_order(
        values in prop::collection::vec(-500i32..500, 1..100),
        index in any::<prop::sample::Index>(),
        delta in 0i32..1000,
    ) {
        let mut heap: MinHeap<i32> = values.iter().map(|&v| (v, v)).collect();
        let slot = index.index(heap.len());
        let current = *heap.iter().nth(slot).map(|(k, _)| k).expect("slot is in range");

        prop_assert_eq!(heap.decrease_key(slot, current - delta), Ok(()));
        prop_assert!(heap.is_heap());
        prop_assert_eq!(heap.len(), values.len());
    }

    #[test]
    fn test_rejected_decrease_is_no_op(
        values in prop::collection::vec(-500i32..500, 1..100),
        index in any::<prop::sample::Index>(),
        delta in 1i32..1000,
    ) {
        let mut heap: MinHeap<i32> = values.iter().map(|&v| (v, v)).collect();
        let before: Vec<(i32, i32)> = heap.iter().map(|(k, t)| (*k, *t)).collect();
        let slot = index.index(heap.len());

        prop_assert_eq!(
            heap.decrease_key(slot, before[slot].0 + delta),
            Err(HeapError::KeyNotDecreased)
        );

        let after: Vec<(i32, i32)> = heap.iter().map(|(k, t)| (*k, *t)).collect();
        prop_assert_eq!(before, after);
    }
}

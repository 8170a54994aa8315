//! Heap sort
//!
//! Sorts by inserting every value into a [`ScalarMinHeap`] and removing the
//! minimum once per value. Both phases are O(n log n). The sort is not
//! stable, which only matters for keys that compare equal but are
//! distinguishable.
//!
//! # Example
//!
//! ```rust
//! use min_heap_sort::heap_sort::heap_sort;
//!
//! let mut values = [3, 1, 5, 2, 4, -5];
//! heap_sort(&mut values);
//! assert_eq!(values, [-5, 1, 2, 3, 4, 5]);
//! ```

use log::debug;

use crate::key::HeapKey;
use crate::scalar::ScalarMinHeap;

/// Sorts `values` in ascending order
pub fn heap_sort<K: HeapKey>(values: &mut [K]) {
    debug!("heap_sort: building heap of {} values", values.len());
    let mut heap = ScalarMinHeap::from_slice(values);

    debug!("heap_sort: extracting {} values", heap.len());
    let minimums = std::iter::from_fn(|| heap.remove_min().ok());
    for (slot, value) in values.iter_mut().zip(minimums) {
        *slot = value;
    }
}

/// Returns a sorted copy of `values`
pub fn heap_sorted<K: HeapKey>(values: &[K]) -> Vec<K> {
    debug!("heap_sorted: sorting {} values", values.len());
    ScalarMinHeap::from_slice(values).into_sorted_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts_small_input() {
        let mut values = [3, 1, 5, 2, 4, -5];
        heap_sort(&mut values);
        assert_eq!(values, [-5, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_empty_and_single() {
        let mut empty: [i32; 0] = [];
        heap_sort(&mut empty);
        assert_eq!(heap_sorted::<i32>(&[]), Vec::<i32>::new());

        let mut one = [42u8];
        heap_sort(&mut one);
        assert_eq!(one, [42]);
    }

    #[test]
    fn test_duplicates() {
        let values = [5, 1, 5, 1, 3, 3, 3, 0];
        let mut expected = values;
        expected.sort_unstable();
        assert_eq!(heap_sorted(&values), expected.to_vec());
    }

    #[test]
    fn test_matches_reference_sort() {
        let values: Vec<i64> = (0..1000).map(|i| (i * 7919) % 1009 - 500).collect();
        let mut expected = values.clone();
        expected.sort();

        let mut actual = values;
        heap_sort(&mut actual);
        assert_eq!(actual, expected);
    }
}

//! Heap of scalar keys
//!
//! [`ScalarMinHeap`] is the case where each value is its own ordering key,
//! as when sorting integers. It wraps a [`MinHeap<K, K>`] and inserts every
//! value `v` as `(v, v)`.
//!
//! # Example
//!
//! ```rust
//! use min_heap_sort::scalar::ScalarMinHeap;
//!
//! let mut heap = ScalarMinHeap::from_slice(&[3, 1, 5, 2, 4, -5]);
//! let mut out = [0; 6];
//! heap.write_sorted(&mut out).unwrap();
//! assert_eq!(out, [-5, 1, 2, 3, 4, 5]);
//! assert!(heap.is_empty());
//! ```

use std::fmt;

use crate::key::HeapKey;
use crate::min_heap::MinHeap;
use crate::traits::HeapError;

/// A min-heap whose values are their own keys
#[derive(Debug, Clone)]
pub struct ScalarMinHeap<K: HeapKey> {
    heap: MinHeap<K, K>,
}

/// The integer heap used by the heap-sort driver
pub type IntMinHeap = ScalarMinHeap<i32>;

impl<K: HeapKey> ScalarMinHeap<K> {
    /// Creates a new empty heap
    pub fn new() -> Self {
        Self {
            heap: MinHeap::new(),
        }
    }

    /// Creates a heap holding every value in `values`
    pub fn from_slice(values: &[K]) -> Self {
        let mut heap = MinHeap::with_capacity(values.len());
        for &value in values {
            heap.insert(value, value);
        }
        Self { heap }
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of values in the heap
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Inserts a value; the value itself is the key
    pub fn insert(&mut self, value: K) {
        self.heap.insert(value, value)
    }

    /// Returns the smallest value without removing it
    pub fn peek(&self) -> Option<&K> {
        self.heap.peek().map(|(key, _)| key)
    }

    /// Removes and returns the smallest value
    pub fn remove_min(&mut self) -> Result<K, HeapError> {
        self.heap.remove_min()
    }

    /// Removes every value from the heap
    pub fn clear(&mut self) {
        self.heap.clear()
    }

    /// Iterates over values in storage order
    pub fn iter(&self) -> impl Iterator<Item = &K> + '_ {
        self.heap.iter().map(|(_, value)| value)
    }

    /// Fills `out` with successive minimums
    ///
    /// Removes `out.len()` values, writing them to `out` in ascending order,
    /// and returns the number written.
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap runs out before `out` is
    /// full. Positions written before that point keep their values.
    pub fn write_sorted(&mut self, out: &mut [K]) -> Result<usize, HeapError> {
        for slot in out.iter_mut() {
            *slot = self.heap.remove_min()?;
        }
        Ok(out.len())
    }

    /// Returns true if the underlying heap satisfies the heap-order invariant
    pub fn is_heap(&self) -> bool {
        self.heap.is_heap()
    }

    /// Consumes the heap and returns its values in ascending order
    pub fn into_sorted_vec(self) -> Vec<K> {
        self.heap.into_sorted_vec()
    }
}

impl<K: HeapKey> Default for ScalarMinHeap<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: HeapKey> FromIterator<K> for ScalarMinHeap<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self {
            heap: iter.into_iter().map(|v| (v, v)).collect(),
        }
    }
}

impl<K: HeapKey + fmt::Display> fmt::Display for ScalarMinHeap<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.heap, f)
    }
}

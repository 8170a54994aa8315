//! Binary min-heap over `(item, key)` pairs
//!
//! An array-backed implicit binary tree. Slot `i` has its parent at
//! `(i - 1) / 2` and its children at `2i + 1` and `2i + 2`; a child index at
//! or past `len()` means the child does not exist. The key at every slot is
//! greater than or equal to the key at its parent, so slot 0 holds the
//! minimum.
//!
//! Insertion appends a slot seeded with [`HeapKey::MAX`] and lowers it to the
//! real key with [`MinHeap::decrease_key`], which sifts the element upward.
//! Removal moves the last element into the root and sifts it downward.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity |
//! |----------------|------------|
//! | `insert`       | O(log n)   |
//! | `remove_min`   | O(log n)   |
//! | `decrease_key` | O(log n)   |
//! | `peek`         | O(1)       |
//! | `len`          | O(1)       |
//! | `clone`        | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use min_heap_sort::min_heap::MinHeap;
//!
//! let mut heap = MinHeap::new();
//! heap.insert("job c", 3);
//! heap.insert("job a", 1);
//! heap.insert("RUSH!", -5);
//!
//! assert_eq!(heap.remove_min(), Ok("RUSH!"));
//! assert_eq!(heap.remove_min(), Ok("job a"));
//! assert_eq!(heap.remove_min(), Ok("job c"));
//! assert!(heap.remove_min().is_err());
//! ```

use std::fmt;

use log::warn;

use crate::key::HeapKey;
use crate::traits::{Heap, HeapError};

/// A binary min-heap
///
/// Stores `(item, key)` pairs and always removes the element with the
/// minimum key first. Each stored item is owned by the heap; `remove_min`
/// moves it out to the caller and `clone` produces an independent deep copy.
///
/// The key type defaults to `i32`.
#[derive(Debug)]
pub struct MinHeap<T, K: HeapKey = i32> {
    /// Slots in storage order, as (key, item) pairs
    data: Vec<(K, T)>,
}

impl<T, K: HeapKey> MinHeap<T, K> {
    /// Creates a new empty heap
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates a new empty heap with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Inserts `item` with ordering key `key`
    pub fn insert(&mut self, item: T, key: K) {
        self.data.push((K::MAX, item));
        let last = self.data.len() - 1;
        // K::MAX is never below a real key, so this is always a decrease.
        self.lower_key(last, key);
    }

    /// Returns the minimum key and its item without removing them
    pub fn peek(&self) -> Option<(&K, &T)> {
        self.data.first().map(|(k, t)| (k, t))
    }

    /// Removes the element with the minimum key and returns its item
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap holds no elements.
    pub fn remove_min(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::Empty);
        }

        // Moves the last slot into the root.
        let (_key, item) = self.data.swap_remove(0);

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        Ok(item)
    }

    /// Lowers the key of the element stored at `index` and restores order
    ///
    /// `index` is a position in storage order, as yielded by [`iter`](Self::iter).
    /// A key equal to the current one is accepted.
    ///
    /// # Errors
    /// - [`HeapError::IndexOutOfRange`] if `index >= len()`
    /// - [`HeapError::KeyNotDecreased`] if `key` is greater than the current key
    ///
    /// The heap is left unmodified when an error is returned.
    pub fn decrease_key(&mut self, index: usize, key: K) -> Result<(), HeapError> {
        let len = self.data.len();
        let Some((current, _)) = self.data.get(index) else {
            return Err(HeapError::IndexOutOfRange { index, len });
        };

        if key > *current {
            warn!(
                "rejected decrease_key at slot {}: {:?} > {:?}",
                index, key, current
            );
            return Err(HeapError::KeyNotDecreased);
        }

        self.lower_key(index, key);
        Ok(())
    }

    /// Removes every element from the heap
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Iterates over `(key, item)` pairs in storage order
    ///
    /// Storage order is heap order, not sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &T)> + '_ {
        self.data.iter().map(|(k, t)| (k, t))
    }

    /// Returns true if every slot's key is at least its parent's key
    pub fn is_heap(&self) -> bool {
        (1..self.data.len()).all(|i| self.data[(i - 1) / 2].0 <= self.data[i].0)
    }

    /// Consumes the heap, yielding items in ascending key order
    pub fn into_iter_sorted(self) -> IntoIterSorted<T, K> {
        IntoIterSorted { inner: self }
    }

    /// Consumes the heap and returns its items in ascending key order
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.into_iter_sorted().collect()
    }

    /// Sets the key at `index` and sifts it upward
    ///
    /// Caller guarantees `key <= self.data[index].0`.
    fn lower_key(&mut self, index: usize, key: K) {
        self.data[index].0 = key;
        self.sift_up(index);
    }

    /// Swaps the element at `index` with its parent until the parent's key
    /// is no greater, or the element reaches the root
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.data[parent].0 <= self.data[index].0 {
                break;
            }
            self.data.swap(index, parent);
            index = parent;
        }
    }

    /// Swaps the element at `index` with its smallest-keyed child until
    /// neither child has a smaller key
    ///
    /// On equal keys the current slot wins over the left child and the left
    /// child wins over the right.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let mut smallest = index;
            for child in [2 * index + 1, 2 * index + 2] {
                if child < len && self.data[child].0 < self.data[smallest].0 {
                    smallest = child;
                }
            }

            if smallest == index {
                break;
            }
            self.data.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<T, K: HeapKey> Heap<T, K> for MinHeap<T, K> {
    fn new() -> Self {
        MinHeap::new()
    }

    fn is_empty(&self) -> bool {
        MinHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        MinHeap::len(self)
    }

    fn insert(&mut self, item: T, key: K) {
        MinHeap::insert(self, item, key)
    }

    fn peek(&self) -> Option<(&K, &T)> {
        MinHeap::peek(self)
    }

    fn remove_min(&mut self) -> Result<T, HeapError> {
        MinHeap::remove_min(self)
    }
}

impl<T, K: HeapKey> Default for MinHeap<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, K: HeapKey> Clone for MinHeap<T, K> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.data.clear();
        self.data.extend(source.data.iter().cloned());
    }
}

impl<T: fmt::Display, K: HeapKey> fmt::Display for MinHeap<T, K> {
    /// Writes items in storage order, e.g. `[a, b, c]`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, (_, item)) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}

impl<T, K: HeapKey> FromIterator<(T, K)> for MinHeap<T, K> {
    fn from_iter<I: IntoIterator<Item = (T, K)>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

impl<T, K: HeapKey> Extend<(T, K)> for MinHeap<T, K> {
    fn extend<I: IntoIterator<Item = (T, K)>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for (item, key) in iter {
            self.insert(item, key);
        }
    }
}

/// Draining iterator returned by [`MinHeap::into_iter_sorted`]
#[derive(Debug)]
pub struct IntoIterSorted<T, K: HeapKey> {
    inner: MinHeap<T, K>,
}

impl<T, K: HeapKey> Iterator for IntoIterSorted<T, K> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.remove_min().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.inner.len(), Some(self.inner.len()))
    }
}

impl<T, K: HeapKey> ExactSizeIterator for IntoIterSorted<T, K> {}

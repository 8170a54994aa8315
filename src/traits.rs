//! Common traits for heap data structures
//!
//! [`Heap`] is the interface shared by the heaps in this crate. It stores
//! `(item, key)` pairs, orders them by key, and hands the item back on
//! removal. Unlike `std::collections::BinaryHeap` this is a min-heap and the
//! ordering key is kept separate from the payload.

use thiserror::Error;

use crate::key::HeapKey;

/// Error type for heap operations
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// Removal was requested from a heap holding no elements
    #[error("heap is empty")]
    Empty,
    /// The new key is greater than the element's current key
    #[error("new key is greater than the current key")]
    KeyNotDecreased,
    /// The addressed slot does not exist
    #[error("index {index} out of range for heap of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Base trait for min-heaps over `(item, key)` pairs
///
/// # Example
///
/// ```rust
/// use min_heap_sort::Heap;
/// use min_heap_sort::min_heap::MinHeap;
///
/// let mut heap: MinHeap<&str> = Heap::new();
/// heap.insert("job c", 3);
/// heap.insert("job a", 1);
/// heap.insert("job b", 2);
///
/// assert_eq!(heap.peek(), Some((&1, &"job a")));
/// assert_eq!(heap.remove_min(), Ok("job a"));
/// assert_eq!(heap.len(), 2);
/// ```
pub trait Heap<T, K: HeapKey> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an item with the given key
    ///
    /// # Time Complexity
    /// O(log n)
    fn insert(&mut self, item: T, key: K);

    /// Returns the minimum key and its item without removing them
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<(&K, &T)>;

    /// Removes the element with the minimum key and returns its item
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap holds no elements.
    ///
    /// # Time Complexity
    /// O(log n)
    fn remove_min(&mut self) -> Result<T, HeapError>;
}

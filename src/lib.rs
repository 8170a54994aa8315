//! Binary min-heap and heap sort for Rust
//!
//! This crate provides an array-backed binary min-heap that stores
//! `(item, key)` pairs, and a heap sort built on top of it.
//!
//! # Features
//!
//! - **MinHeap**: O(log n) insert and remove-min; O(1) peek; deep-copy `Clone`
//! - **ScalarMinHeap**: the same heap where every value is its own key
//! - **heap_sort**: ascending sort by n inserts followed by n remove-mins
//!
//! # Example
//!
//! ```rust
//! use min_heap_sort::min_heap::MinHeap;
//! use min_heap_sort::HeapError;
//!
//! let mut heap = MinHeap::new();
//! heap.insert("job b", 2);
//! heap.insert("job a", 1);
//! assert_eq!(heap.remove_min(), Ok("job a"));
//! assert_eq!(heap.remove_min(), Ok("job b"));
//! assert_eq!(heap.remove_min(), Err(HeapError::Empty));
//! ```

pub mod heap_sort;
pub mod key;
pub mod min_heap;
pub mod scalar;
pub mod traits;

// Re-export the main types for convenience
pub use key::HeapKey;
pub use traits::{Heap, HeapError};

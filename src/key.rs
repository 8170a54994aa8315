//! Ordering keys
//!
//! Every slot in a [`MinHeap`](crate::min_heap::MinHeap) carries a key. New
//! slots are seeded with [`HeapKey::MAX`] and then lowered to their real key,
//! so a key type needs a value that no real key exceeds.

use std::fmt::Debug;

/// A totally ordered key with a maximum sentinel
///
/// Implemented for all primitive integer types. The sentinel must compare
/// greater than or equal to every key that will ever be inserted.
pub trait HeapKey: Ord + Copy + Debug {
    /// The largest representable key, used to seed freshly inserted slots
    const MAX: Self;
}

macro_rules! impl_heap_key {
    ($($t:ty),* $(,)?) => {
        $(
            impl HeapKey for $t {
                const MAX: Self = <$t>::MAX;
            }
        )*
    };
}

impl_heap_key!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod arena;
pub mod ordered_map;

extern crate alloc;

#[cfg(feature = "std")]
type RandomState = std::hash::RandomState;
#[cfg(not(feature = "std"))]
type RandomState = hashbrown::DefaultHashBuilder;

/// A hash map that keeps its entries in an explicit, rearrangeable order,
/// using the default hasher.
///
/// For custom hashers, use [`ordered_map::OrderedMap`] directly.
///
/// # Examples
///
/// ```
/// use ring_map::OrderedMap;
///
/// let mut map = OrderedMap::new();
/// map.set("a", 1);
/// map.set("b", 2);
///
/// let entries: Vec<_> = map.iter().collect();
/// assert_eq!(entries, [(&"a", &1), (&"b", &2)]);
/// ```
pub type OrderedMap<K, V> = crate::ordered_map::OrderedMap<K, V, RandomState>;
use core::num::NonZeroU32;

pub use ordered_map::IntoIter;
pub use ordered_map::Iter;
pub use ordered_map::Keys;
pub use ordered_map::Values;

/// Handle to a slot in the arena backing an [`OrderedMap`].
///
/// Handles are non-generational: once a slot is freed, its handle may be
/// handed out again for a new entry. Slot 0 is always the sentinel.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub(crate) struct Ptr(NonZeroU32);

impl core::fmt::Debug for Ptr {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if *self == Ptr::ROOT {
            write!(f, "Ptr(root)")
        } else {
            write!(f, "Ptr({})", self.unchecked_get())
        }
    }
}

impl Ptr {
    /// The sentinel slot. Its `next` is the head of the list and its `prev`
    /// is the tail.
    pub(crate) const ROOT: Ptr = Ptr(NonZeroU32::MIN);

    pub(crate) fn unchecked_from(index: usize) -> Self {
        debug_assert!(
            index < u32::MAX as usize,
            "Index too large to fit in Ptr: {index}"
        );
        Ptr(NonZeroU32::MIN.saturating_add(index as u32))
    }

    pub(crate) fn unchecked_get(self) -> usize {
        self.0.get() as usize - 1
    }
}

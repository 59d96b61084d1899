//! Ordered hash map implementation.
//!
//! This module provides the core [`OrderedMap`] type and its iterators. The
//! map keeps its entries in an explicit order that callers can rearrange,
//! while providing expected O(1) lookup, insertion, removal and
//! move-to-front/back. Entries can also be addressed by position, with
//! indices wrapping around the current length.
//!
//! # Examples
//!
//! ```
//! use ring_map::ordered_map::OrderedMap;
//!
//! let mut map = OrderedMap::new();
//! map.set("first", 1);
//! map.set("second", 2);
//! map.insert(0, "zeroth", 0);
//!
//! let entries: Vec<_> = map.iter().collect();
//! assert_eq!(entries, [(&"zeroth", &0), (&"first", &1), (&"second", &2)]);
//! assert_eq!(map.get_at(-1), Some((&"second", &2)));
//! ```

use alloc::vec::Vec;
use core::fmt;
use core::hash::BuildHasher;
use core::hash::Hash;
use core::ops::Index;
use core::ops::IndexMut;

use hashbrown::HashTable;

use crate::Ptr;
use crate::RandomState;
use crate::arena::Arena;

mod iter;

pub use iter::IntoIter;
pub use iter::Iter;
pub use iter::Keys;
pub use iter::Values;

/// A hash map that keeps its entries in an explicit order.
///
/// New keys are appended at the tail. The order only changes through
/// [`insert`], [`to_head`] and [`to_tail`]; updating the value of an
/// existing key with [`set`] leaves it where it is, and removing an entry
/// leaves its neighbours' relative order intact.
///
/// The generic parameters are:
/// - `K`: Key type, must implement `Hash + Eq`
/// - `T`: Value type
/// - `S`: Hash builder type, defaults to the standard hasher
///
/// [`insert`]: OrderedMap::insert
/// [`to_head`]: OrderedMap::to_head
/// [`to_tail`]: OrderedMap::to_tail
/// [`set`]: OrderedMap::set
///
/// # Examples
///
/// ```
/// use ring_map::ordered_map::OrderedMap;
///
/// let mut map = OrderedMap::new();
/// map.set("apple", 5);
/// map.set("banana", 3);
/// map.set("cherry", 8);
///
/// map.to_head(&"cherry");
///
/// let keys: Vec<_> = map.keys().copied().collect();
/// assert_eq!(keys, ["cherry", "apple", "banana"]);
/// ```
#[derive(Clone)]
pub struct OrderedMap<K, T, S = RandomState> {
    nodes: Arena<K, T>,
    table: HashTable<Ptr>,
    hasher: S,
}

impl<K: fmt::Debug, T: fmt::Debug, S> fmt::Debug for OrderedMap<K, T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Renders the entries in order as `OrderedMap[k1:v1 k2:v2]`.
impl<K: fmt::Display, T: fmt::Display, S> fmt::Display for OrderedMap<K, T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OrderedMap[")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{key}:{value}")?;
        }
        f.write_str("]")
    }
}

impl<K, T, S: Default> Default for OrderedMap<K, T, S> {
    fn default() -> Self {
        OrderedMap::with_hasher(S::default())
    }
}

impl<K, T> OrderedMap<K, T> {
    /// Creates a new, empty map.
    ///
    /// The map will not allocate entry storage until the first element is
    /// inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_map::OrderedMap;
    ///
    /// let mut map: OrderedMap<&str, i32> = OrderedMap::new();
    /// assert!(map.is_empty());
    /// map.set("key", 42);
    /// assert!(!map.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a new map able to hold at least `capacity` entries without
    /// reallocating.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_map::OrderedMap;
    ///
    /// let map: OrderedMap<&str, i32> = OrderedMap::with_capacity(10);
    /// assert!(map.capacity() >= 10);
    /// assert_eq!(map.len(), 0);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, RandomState::default())
    }
}

impl<K, T, S> OrderedMap<K, T, S> {
    /// Creates an empty map which will use the given hash builder to hash
    /// keys.
    pub fn with_hasher(hasher: S) -> Self {
        OrderedMap {
            nodes: Arena::new(),
            table: HashTable::new(),
            hasher,
        }
    }

    /// Creates an empty map with the specified capacity, using `hasher` to
    /// hash the keys.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hashbrown::DefaultHashBuilder as RandomState;
    /// use ring_map::ordered_map::OrderedMap;
    ///
    /// let hasher = RandomState::default();
    /// let mut map: OrderedMap<&str, i32, _> = OrderedMap::with_capacity_and_hasher(10, hasher);
    /// map.set("key", 42);
    /// ```
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        OrderedMap {
            nodes: Arena::with_capacity(capacity),
            table: HashTable::with_capacity(capacity),
            hasher,
        }
    }

    /// Returns a reference to the map's hash builder.
    pub fn hasher(&self) -> &S {
        &self.hasher
    }

    /// Returns the number of entries the map can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.nodes.capacity().min(self.table.capacity())
    }

    /// Reserves capacity for at least `additional` more entries.
    pub fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional);
        let nodes = &self.nodes;
        self.table.reserve(additional, |&ptr| nodes[ptr].hash);
    }

    /// Returns the number of entries in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_map::OrderedMap;
    ///
    /// let mut a = OrderedMap::new();
    /// assert_eq!(a.len(), 0);
    /// a.set(1, "a");
    /// assert_eq!(a.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the map contains no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every entry.
    ///
    /// Afterwards the internal list is back to its initial empty circle, so
    /// the map behaves exactly like a freshly constructed one. The hash
    /// index keeps its allocation.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_map::OrderedMap;
    ///
    /// let mut a = OrderedMap::new();
    /// a.set(1, "a");
    /// a.clear();
    /// assert!(a.is_empty());
    /// assert_eq!(a.get(&1), None);
    /// ```
    pub fn clear(&mut self) {
        self.table.clear();
        self.nodes.clear();
    }

    /// Returns an iterator over the entries in order.
    ///
    /// The iterator is a live cursor over the map: it is single-pass and,
    /// once exhausted, keeps returning `None`. The borrow it holds prevents
    /// the map from being modified while it is in use.
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
    /// let mut iter = map.iter();
    /// assert_eq!(iter.next(), Some((&"a", &1)));
    /// assert_eq!(iter.next(), Some((&"b", &2)));
    /// assert_eq!(iter.next(), None);
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, T> {
        Iter::new(&self.nodes, self.len())
    }

    /// Returns an iterator over the keys in order.
    pub fn keys(&self) -> Keys<'_, K, T> {
        Keys { inner: self.iter() }
    }

    /// Returns an iterator over the values in order.
    pub fn values(&self) -> Values<'_, K, T> {
        Values { inner: self.iter() }
    }

    /// Returns an owned snapshot of the keys in their current order.
    ///
    /// Unlike [`keys`](Self::keys), the returned vector is independent of
    /// the map and can be kept across later modifications.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_map::OrderedMap;
    ///
    /// let mut map: OrderedMap<_, _> = (0..3).map(|i| (i, i * 10)).collect();
    /// let snapshot = map.keys_vec();
    /// map.delete(&1);
    /// assert_eq!(snapshot, [0, 1, 2]);
    /// assert_eq!(map.keys_vec(), [0, 2]);
    /// ```
    pub fn keys_vec(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.keys().cloned().collect()
    }

    /// Returns an owned snapshot of the values in their current order.
    pub fn values_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.values().cloned().collect()
    }

    /// Returns an owned snapshot of the key-value pairs in their current
    /// order.
    pub fn items(&self) -> Vec<(K, T)>
    where
        K: Clone,
        T: Clone,
    {
        self.iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Returns the first entry, if any. O(1).
    pub fn front(&self) -> Option<(&K, &T)> {
        self.entry_at_ptr(self.nodes.head())
    }

    /// Returns the last entry, if any. O(1).
    pub fn back(&self) -> Option<(&K, &T)> {
        self.entry_at_ptr(self.nodes.tail())
    }

    fn entry_at_ptr(&self, ptr: Ptr) -> Option<(&K, &T)> {
        if ptr == Ptr::ROOT {
            return None;
        }
        let data = &self.nodes[ptr];
        Some((&data.key, &data.value))
    }

    /// Resolves a possibly negative index to a slot by walking from the head.
    ///
    /// The index is taken modulo the length, so `-1` is the tail and `len()`
    /// is the head again. `None` only when the map is empty.
    fn ptr_at(&self, index: isize) -> Option<Ptr> {
        let len = self.len();
        if len == 0 {
            return None;
        }
        let idx = index.rem_euclid(len as isize) as usize;
        Some(self.nodes.walk(idx))
    }

    /// Returns the entry at `index`.
    ///
    /// The index wraps around: for a map of length `n`, any integer is
    /// valid, `-1` refers to the last entry and `n` to the first. Returns
    /// `None` only if the map is empty. This walks the list from the head,
    /// so it costs O(index mod n).
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_map::OrderedMap;
    ///
    /// let map: OrderedMap<_, _> = (0..5).map(|i| (i, i)).collect();
    /// assert_eq!(map.get_at(2), Some((&2, &2)));
    /// assert_eq!(map.get_at(-1), map.get_at(4));
    /// assert_eq!(map.get_at(5), map.get_at(0));
    ///
    /// let empty: OrderedMap<i32, i32> = OrderedMap::new();
    /// assert_eq!(empty.get_at(0), None);
    /// ```
    pub fn get_at(&self, index: isize) -> Option<(&K, &T)> {
        let ptr = self.ptr_at(index)?;
        let data = &self.nodes[ptr];
        Some((&data.key, &data.value))
    }

    /// Returns the entry at `index` with a mutable reference to its value.
    /// Indexing works as in [`get_at`](Self::get_at).
    pub fn get_at_mut(&mut self, index: isize) -> Option<(&K, &mut T)> {
        let ptr = self.ptr_at(index)?;
        let data = &mut self.nodes[ptr];
        Some((&data.key, &mut data.value))
    }

    /// Unlinks and frees `ptr`, removing it from the hash index.
    fn remove_ptr(&mut self, ptr: Ptr) -> (K, T) {
        let hash = self.nodes[ptr].hash;
        match self.table.find_entry(hash, |&p| p == ptr) {
            Ok(occupied) => {
                occupied.remove();
            }
            Err(_) => {
                #[cold]
                #[inline(never)]
                fn die() -> ! {
                    panic!("Pointer not found in table");
                }
                die()
            }
        }

        self.nodes.unlink(ptr);
        let data = self.nodes.free(ptr);
        (data.key, data.value)
    }

    /// Removes the entry at `index`, returning whether anything was removed.
    /// Indexing works as in [`get_at`](Self::get_at), so this only returns
    /// `false` on an empty map.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_map::OrderedMap;
    ///
    /// let mut map: OrderedMap<_, _> = (0..5).map(|i| (i, i)).collect();
    /// assert!(map.delete_at(2));
    /// assert!(map.delete_at(-1));
    /// assert_eq!(map.keys_vec(), [0, 1, 3]);
    /// ```
    pub fn delete_at(&mut self, index: isize) -> bool {
        self.pop_at(index).is_some()
    }

    /// Removes and returns the entry at `index`. Indexing works as in
    /// [`get_at`](Self::get_at).
    pub fn pop_at(&mut self, index: isize) -> Option<(K, T)> {
        let ptr = self.ptr_at(index)?;
        Some(self.remove_ptr(ptr))
    }

    /// Removes and returns the first entry. O(1).
    pub fn pop_front(&mut self) -> Option<(K, T)> {
        let head = self.nodes.head();
        (head != Ptr::ROOT).then(|| self.remove_ptr(head))
    }

    /// Removes and returns the last entry. O(1).
    pub fn pop_back(&mut self) -> Option<(K, T)> {
        let tail = self.nodes.tail();
        (tail != Ptr::ROOT).then(|| self.remove_ptr(tail))
    }

    /// Retains only the entries for which `f(&key, &mut value)` returns
    /// `true`. Entries are visited in order, and the predicate may modify
    /// the values it keeps.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_map::OrderedMap;
    ///
    /// let mut map: OrderedMap<_, _> = (0..6).map(|i| (i, i)).collect();
    /// map.retain(|_, value| {
    ///     *value *= 10;
    ///     *value % 20 == 0
    /// });
    /// assert_eq!(map.items(), [(0, 0), (2, 20), (4, 40)]);
    /// ```
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&K, &mut T) -> bool,
    {
        let mut ptr = self.nodes.head();
        while ptr != Ptr::ROOT {
            let next = self.nodes.links(ptr).next;
            let data = &mut self.nodes[ptr];
            if !f(&data.key, &mut data.value) {
                self.remove_ptr(ptr);
            }
            ptr = next;
        }
    }

    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        let mut forward = Vec::new();
        let mut prev = Ptr::ROOT;
        let mut curr = self.nodes.head();
        while curr != Ptr::ROOT {
            assert!(forward.len() < self.len(), "list is longer than the index");
            assert_eq!(self.nodes.links(curr).prev, prev, "broken prev link");
            assert!(
                self.table.find(self.nodes[curr].hash, |&p| p == curr).is_some(),
                "reachable node missing from the index"
            );
            forward.push(curr);
            prev = curr;
            curr = self.nodes.links(curr).next;
        }
        assert_eq!(self.nodes.tail(), prev, "sentinel prev is not the tail");
        assert_eq!(forward.len(), self.len(), "list and index disagree on length");

        let mut backward = Vec::new();
        let mut curr = self.nodes.tail();
        while curr != Ptr::ROOT {
            backward.push(curr);
            curr = self.nodes.links(curr).prev;
        }
        backward.reverse();
        assert_eq!(forward, backward);
    }
}

impl<K: Hash + Eq, T, S: BuildHasher> OrderedMap<K, T, S> {
    fn get_ptr(&self, key: &K) -> Option<Ptr> {
        let hash = self.hasher.hash_one(key);
        self.table
            .find(hash, |&ptr| self.nodes[ptr].key == *key)
            .copied()
    }

    /// Removes the entry for `key` given its precomputed hash.
    fn take_hashed(&mut self, hash: u64, key: &K) -> Option<(K, T)> {
        let nodes = &self.nodes;
        let ptr = match self.table.find_entry(hash, |&ptr| nodes[ptr].key == *key) {
            Ok(occupied) => occupied.remove().0,
            Err(_) => return None,
        };

        self.nodes.unlink(ptr);
        let data = self.nodes.free(ptr);
        Some((data.key, data.value))
    }

    fn link_new(&mut self, key: K, value: T, hash: u64) -> Ptr {
        let ptr = self.nodes.alloc(key, value, hash);
        let nodes = &self.nodes;
        self.table.insert_unique(hash, ptr, |&p| nodes[p].hash);
        ptr
    }

    /// Returns `true` if the map contains an entry for `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.set(1, "a");
    /// assert!(map.contains_key(&1));
    /// assert!(!map.contains_key(&2));
    /// ```
    pub fn contains_key(&self, key: &K) -> bool {
        self.get_ptr(key).is_some()
    }

    /// Returns a reference to the value for `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.set(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&T> {
        self.get_ptr(key).map(|ptr| &self.nodes[ptr].value)
    }

    /// Returns a mutable reference to the value for `key`.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut T> {
        let ptr = self.get_ptr(key)?;
        Some(&mut self.nodes[ptr].value)
    }

    /// Returns the stored key and value for `key`.
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &T)> {
        let ptr = self.get_ptr(key)?;
        let data = &self.nodes[ptr];
        Some((&data.key, &data.value))
    }

    /// Returns the current position of `key`, counted from the head. O(n).
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.set("a", 1);
    /// map.set("b", 2);
    /// assert_eq!(map.index_of(&"b"), Some(1));
    /// assert_eq!(map.index_of(&"z"), None);
    /// ```
    pub fn index_of(&self, key: &K) -> Option<usize> {
        let target = self.get_ptr(key)?;
        let mut curr = self.nodes.head();
        let mut index = 0;
        while curr != target {
            curr = self.nodes.links(curr).next;
            index += 1;
        }
        Some(index)
    }

    /// Sets the value for `key`.
    ///
    /// If the key is new, the entry is appended at the tail and `None` is
    /// returned. Otherwise the value is replaced in place, the entry keeps
    /// its position, and the old value is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// assert_eq!(map.set("a", 1), None);
    /// assert_eq!(map.set("b", 2), None);
    /// assert_eq!(map.set("a", 10), Some(1));
    ///
    /// let entries: Vec<_> = map.iter().collect();
    /// assert_eq!(entries, [(&"a", &10), (&"b", &2)]);
    /// ```
    pub fn set(&mut self, key: K, value: T) -> Option<T> {
        let hash = self.hasher.hash_one(&key);
        if let Some(&ptr) = self.table.find(hash, |&p| self.nodes[p].key == key) {
            return Some(core::mem::replace(&mut self.nodes[ptr].value, value));
        }

        let ptr = self.link_new(key, value, hash);
        self.nodes.link_before(ptr, Ptr::ROOT);
        None
    }

    /// Inserts `key` next to the entry currently at `index`.
    ///
    /// The neighbour is resolved like [`get_at`](Self::get_at). For
    /// `index >= 0` the new entry goes immediately **before** the
    /// neighbour, so it ends up at position `index`; for `index < 0` it goes
    /// immediately **after** the neighbour, so `-1` appends at the tail.
    ///
    /// If `key` is already present elsewhere, that entry is removed first
    /// and its value returned. If the map is empty, or the neighbour is the
    /// entry for `key` itself, this behaves exactly like [`set`](Self::set).
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_map::OrderedMap;
    ///
    /// let mut map: OrderedMap<_, _> = (0..5).map(|i| (i, i.to_string())).collect();
    /// map.insert(1, 10, "10".to_string());
    /// assert_eq!(map.keys_vec(), [0, 10, 1, 2, 3, 4]);
    ///
    /// map.insert(-1, 20, "20".to_string());
    /// assert_eq!(map.keys_vec(), [0, 10, 1, 2, 3, 4, 20]);
    ///
    /// // Moving an existing key returns its old value.
    /// assert_eq!(map.insert(0, 3, "3!".to_string()), Some("3".to_string()));
    /// assert_eq!(map.keys_vec(), [3, 0, 10, 1, 2, 4, 20]);
    /// ```
    pub fn insert(&mut self, index: isize, key: K, value: T) -> Option<T> {
        let Some(neighbour) = self.ptr_at(index) else {
            return self.set(key, value);
        };
        if self.nodes[neighbour].key == key {
            return self.set(key, value);
        }

        let hash = self.hasher.hash_one(&key);
        let old = self.take_hashed(hash, &key).map(|(_, value)| value);

        let ptr = self.link_new(key, value, hash);
        if index >= 0 {
            self.nodes.link_before(ptr, neighbour);
        } else {
            self.nodes.link_after(ptr, neighbour);
        }
        old
    }

    /// Removes `key`, returning whether it was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.set(1, "a");
    /// assert!(map.delete(&1));
    /// assert!(!map.delete(&1));
    /// ```
    pub fn delete(&mut self, key: &K) -> bool {
        self.pop(key).is_some()
    }

    /// Removes `key`, returning the stored key and value if it was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.set(1, "a");
    /// assert_eq!(map.pop(&1), Some((1, "a")));
    /// assert_eq!(map.pop(&1), None);
    /// ```
    pub fn pop(&mut self, key: &K) -> Option<(K, T)> {
        if self.is_empty() {
            return None;
        }
        let hash = self.hasher.hash_one(key);
        self.take_hashed(hash, key)
    }

    /// Moves the entry for `key` to the head. Returns `false`, changing
    /// nothing, if the key is absent. O(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_map::OrderedMap;
    ///
    /// let mut map: OrderedMap<_, _> = (0..5).map(|i| (i, i)).collect();
    /// map.to_head(&3);
    /// map.to_tail(&0);
    /// assert_eq!(map.keys_vec(), [3, 1, 2, 4, 0]);
    /// assert!(!map.to_head(&42));
    /// ```
    pub fn to_head(&mut self, key: &K) -> bool {
        let Some(ptr) = self.get_ptr(key) else {
            return false;
        };
        self.nodes.unlink(ptr);
        self.nodes.link_after(ptr, Ptr::ROOT);
        true
    }

    /// Moves the entry for `key` to the tail. Returns `false`, changing
    /// nothing, if the key is absent. O(1).
    pub fn to_tail(&mut self, key: &K) -> bool {
        let Some(ptr) = self.get_ptr(key) else {
            return false;
        };
        self.nodes.unlink(ptr);
        self.nodes.link_before(ptr, Ptr::ROOT);
        true
    }
}

/// Two maps are equal when they hold equal entries in the same order.
impl<K, T, S> PartialEq for OrderedMap<K, T, S>
where
    K: PartialEq,
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K, T, S> Eq for OrderedMap<K, T, S>
where
    K: Eq,
    T: Eq,
{
}

impl<K, T, S> FromIterator<(K, T)> for OrderedMap<K, T, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<K, T, S> Extend<(K, T)> for OrderedMap<K, T, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, T)>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<'a, K, T, S> Extend<(&'a K, &'a T)> for OrderedMap<K, T, S>
where
    K: Hash + Eq + Clone,
    T: Clone,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (&'a K, &'a T)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key.clone(), value.clone());
        }
    }
}

impl<K, T, S> IntoIterator for OrderedMap<K, T, S> {
    type IntoIter = IntoIter<K, T>;
    type Item = (K, T);

    fn into_iter(self) -> Self::IntoIter {
        let len = self.len();
        IntoIter::new(self.nodes, len)
    }
}

impl<'a, K, T, S> IntoIterator for &'a OrderedMap<K, T, S> {
    type IntoIter = Iter<'a, K, T>;
    type Item = (&'a K, &'a T);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, T, S> Index<&K> for OrderedMap<K, T, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Output = T;

    fn index(&self, key: &K) -> &Self::Output {
        self.get(key).expect("no entry found for key")
    }
}

impl<K, T, S> IndexMut<&K> for OrderedMap<K, T, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn index_mut(&mut self, key: &K) -> &mut Self::Output {
        self.get_mut(key).expect("no entry found for key")
    }
}

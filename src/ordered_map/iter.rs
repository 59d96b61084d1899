use core::fmt;
use core::iter::FusedIterator;

use derive_where::derive_where;

use crate::Ptr;
use crate::arena::Arena;

/// An iterator over the entries of an `OrderedMap`, in order.
///
/// This struct is created by the [`iter`] method on [`OrderedMap`]. See its
/// documentation for more.
///
/// The iterator walks the map's internal list directly rather than a copy
/// of it. Once it has returned `None` it keeps doing so.
///
/// [`iter`]: super::OrderedMap::iter
/// [`OrderedMap`]: super::OrderedMap
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
/// for (key, value) in map.iter() {
///     println!("{}: {}", key, value);
/// }
/// ```
#[derive_where(Clone)]
pub struct Iter<'a, K, T> {
    front: Ptr,
    back: Ptr,
    remaining: usize,
    nodes: &'a Arena<K, T>,
}

impl<'a, K, T> Iter<'a, K, T> {
    pub(crate) fn new(nodes: &'a Arena<K, T>, len: usize) -> Self {
        Iter {
            front: nodes.head(),
            back: nodes.tail(),
            remaining: len,
            nodes,
        }
    }
}

impl<K: fmt::Debug, T: fmt::Debug> fmt::Debug for Iter<'_, K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, T> Iterator for Iter<'a, K, T> {
    type Item = (&'a K, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let nodes = self.nodes;
        let ptr = self.front;
        self.front = nodes.links(ptr).next;
        self.remaining -= 1;

        let data = &nodes[ptr];
        Some((&data.key, &data.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, T> DoubleEndedIterator for Iter<'_, K, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let nodes = self.nodes;
        let ptr = self.back;
        self.back = nodes.links(ptr).prev;
        self.remaining -= 1;

        let data = &nodes[ptr];
        Some((&data.key, &data.value))
    }
}

impl<K, T> ExactSizeIterator for Iter<'_, K, T> {}

impl<K, T> FusedIterator for Iter<'_, K, T> {}

/// An iterator over the keys of an `OrderedMap`, in order.
///
/// This struct is created by [`OrderedMap::keys`](super::OrderedMap::keys).
#[derive_where(Clone)]
pub struct Keys<'a, K, T> {
    pub(crate) inner: Iter<'a, K, T>,
}

impl<'a, K, T> Iterator for Keys<'a, K, T> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, T> DoubleEndedIterator for Keys<'_, K, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, _)| key)
    }
}

impl<K, T> ExactSizeIterator for Keys<'_, K, T> {}

impl<K, T> FusedIterator for Keys<'_, K, T> {}

/// An iterator over the values of an `OrderedMap`, in order.
///
/// This struct is created by
/// [`OrderedMap::values`](super::OrderedMap::values).
#[derive_where(Clone)]
pub struct Values<'a, K, T> {
    pub(crate) inner: Iter<'a, K, T>,
}

impl<'a, K, T> Iterator for Values<'a, K, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, T> DoubleEndedIterator for Values<'_, K, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, value)| value)
    }
}

impl<K, T> ExactSizeIterator for Values<'_, K, T> {}

impl<K, T> FusedIterator for Values<'_, K, T> {}

#[derive(Debug)]
/// An owning iterator over the entries of an `OrderedMap`, in order.
///
/// This struct is created by the [`into_iter`] method on
/// [`OrderedMap`](super::OrderedMap) (provided by the [`IntoIterator`]
/// trait).
///
/// [`into_iter`]: IntoIterator::into_iter
/// [`IntoIterator`]: core::iter::IntoIterator
///
/// # Examples
///
/// ```
/// use ring_map::OrderedMap;
///
/// let mut map = OrderedMap::new();
/// map.set("a", 1);
/// map.set("b", 2);
/// map.to_head(&"b");
///
/// let entries: Vec<_> = map.into_iter().collect();
/// assert_eq!(entries, [("b", 2), ("a", 1)]);
/// ```
pub struct IntoIter<K, T> {
    nodes: Arena<K, T>,
    front: Ptr,
    back: Ptr,
    remaining: usize,
}

impl<K, T> IntoIter<K, T> {
    pub(crate) fn new(nodes: Arena<K, T>, len: usize) -> Self {
        IntoIter {
            front: nodes.head(),
            back: nodes.tail(),
            remaining: len,
            nodes,
        }
    }
}

impl<K, T> Iterator for IntoIter<K, T> {
    type Item = (K, T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        // Slots are freed without unlinking; the links of entries not yet
        // yielded stay valid because nothing is relinked.
        let ptr = self.front;
        self.front = self.nodes.links(ptr).next;
        self.remaining -= 1;

        let data = self.nodes.free(ptr);
        Some((data.key, data.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, T> DoubleEndedIterator for IntoIter<K, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let ptr = self.back;
        self.back = self.nodes.links(ptr).prev;
        self.remaining -= 1;

        let data = self.nodes.free(ptr);
        Some((data.key, data.value))
    }
}

impl<K, T> ExactSizeIterator for IntoIter<K, T> {}

impl<K, T> FusedIterator for IntoIter<K, T> {}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::String;
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::assert_eq;

    use crate::OrderedMap;

    fn abc() -> OrderedMap<&'static str, i32> {
        let mut map = OrderedMap::new();
        map.set("a", 1);
        map.set("b", 2);
        map.set("c", 3);
        map
    }

    #[test]
    fn test_iter_order_follows_moves() {
        let mut map = abc();
        map.to_head(&"c");
        let items: Vec<_> = map.iter().collect();
        assert_eq!(items, vec![(&"c", &3), (&"a", &1), (&"b", &2)]);
    }

    #[test]
    fn test_iter_exhaustion_is_permanent() {
        let map = abc();
        let mut iter = map.iter();
        assert_eq!(iter.len(), 3);
        for _ in 0..3 {
            assert!(iter.next().is_some());
        }
        for _ in 0..10 {
            assert_eq!(iter.next(), None);
            assert_eq!(iter.next_back(), None);
        }
        assert_eq!(iter.len(), 0);
    }

    #[test]
    fn test_iter_empty() {
        let map: OrderedMap<i32, i32> = OrderedMap::new();
        let mut iter = map.iter();
        assert_eq!(iter.size_hint(), (0, Some(0)));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_iter_double_ended_meets_in_middle() {
        let map = abc();
        let mut iter = map.iter();
        assert_eq!(iter.next(), Some((&"a", &1)));
        assert_eq!(iter.next_back(), Some((&"c", &3)));
        assert_eq!(iter.next_back(), Some((&"b", &2)));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn test_iter_rev() {
        let map = abc();
        let keys: Vec<_> = map.iter().rev().map(|(k, _)| *k).collect();
        assert_eq!(keys, ["c", "b", "a"]);
    }

    #[test]
    fn test_iter_clone_is_independent() {
        let map = abc();
        let mut iter = map.iter();
        iter.next();
        let cloned = iter.clone();
        assert_eq!(iter.count(), 2);
        assert_eq!(cloned.map(|(_, v)| *v).sum::<i32>(), 5);
    }

    #[test]
    fn test_iter_debug() {
        let map = abc();
        assert_eq!(
            format!("{:?}", map.iter()),
            r#"[("a", 1), ("b", 2), ("c", 3)]"#
        );
    }

    #[test]
    fn test_keys_and_values() {
        let mut map = abc();
        map.delete(&"b");
        let keys: Vec<_> = map.keys().collect();
        assert_eq!(keys, [&"a", &"c"]);
        let values: Vec<_> = map.values().rev().collect();
        assert_eq!(values, [&3, &1]);
        assert_eq!(map.keys().len(), 2);
    }

    #[test]
    fn test_for_loop_over_reference() {
        let map = abc();
        let mut total = 0;
        for (_, value) in &map {
            total += value;
        }
        assert_eq!(total, 6);
    }

    #[test]
    fn test_into_iter() {
        let mut map: OrderedMap<i32, String> = OrderedMap::new();
        for i in 0..4 {
            map.set(i, i.to_string());
        }
        map.to_tail(&1);

        let items: Vec<_> = map.into_iter().collect();
        assert_eq!(
            items,
            [
                (0, "0".to_string()),
                (2, "2".to_string()),
                (3, "3".to_string()),
                (1, "1".to_string()),
            ]
        );
    }

    #[test]
    fn test_into_iter_double_ended() {
        let mut map = abc();
        map.set("d", 4);
        let mut iter = map.into_iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next_back(), Some(("d", 4)));
        assert_eq!(iter.next(), Some(("a", 1)));
        assert_eq!(iter.next_back(), Some(("c", 3)));
        assert_eq!(iter.next(), Some(("b", 2)));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn test_into_iter_after_deletes_and_partial_drop() {
        let mut map: OrderedMap<i32, Vec<i32>> = OrderedMap::new();
        for i in 0..6 {
            map.set(i, vec![i]);
        }
        map.delete(&0);
        map.delete(&3);
        map.set(6, vec![6]);

        let mut iter = map.into_iter();
        assert_eq!(iter.next(), Some((1, vec![1])));
        assert_eq!(iter.next_back(), Some((6, vec![6])));
        drop(iter);
    }
}

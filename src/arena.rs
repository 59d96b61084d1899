use alloc::vec::Vec;
use core::ops::Index;
use core::ops::IndexMut;

use crate::Ptr;

#[cold]
#[inline(never)]
fn assert_free() -> ! {
    panic!("Attempted to access data of free slot");
}

#[cold]
#[inline(never)]
fn assert_root() -> ! {
    panic!("Attempted to access data of the sentinel slot");
}

/// Neighbour handles of a slot in the circular list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Links {
    pub(crate) prev: Ptr,
    pub(crate) next: Ptr,
}

impl Links {
    const SELF_LOOP: Links = Links {
        prev: Ptr::ROOT,
        next: Ptr::ROOT,
    };
}

#[derive(Debug, Clone)]
pub(crate) struct LLData<K, T> {
    pub(crate) hash: u64,
    pub(crate) key: K,
    pub(crate) value: T,
}

#[derive(Debug, Clone)]
enum SlotState<K, T> {
    Root,
    /// Holds the next slot in the free list.
    Free(Option<Ptr>),
    Data(LLData<K, T>),
}

#[derive(Debug, Clone)]
pub(crate) struct LLSlot<K, T> {
    links: Links,
    state: SlotState<K, T>,
}

impl<K, T> LLSlot<K, T> {
    fn root() -> Self {
        LLSlot {
            links: Links::SELF_LOOP,
            state: SlotState::Root,
        }
    }

    pub(crate) fn data(&self) -> &LLData<K, T> {
        match &self.state {
            SlotState::Data(data) => data,
            SlotState::Free(_) => assert_free(),
            SlotState::Root => assert_root(),
        }
    }

    pub(crate) fn data_mut(&mut self) -> &mut LLData<K, T> {
        match &mut self.state {
            SlotState::Data(data) => data,
            SlotState::Free(_) => assert_free(),
            SlotState::Root => assert_root(),
        }
    }
}

/// Slab of list slots. Slot 0 is the sentinel; every other slot is either a
/// live entry or a member of the free list.
///
/// The arena owns the circular list structure but knows nothing about
/// hashing: keeping the hash index in step is the map's job.
#[derive(Debug, Clone)]
pub(crate) struct Arena<K, T> {
    nodes: Vec<LLSlot<K, T>>,
    free_head: Option<Ptr>,
}

impl<K, T> Arena<K, T> {
    pub(crate) fn new() -> Self {
        Self::with_capacity(0)
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.saturating_add(1));
        nodes.push(LLSlot::root());
        Arena {
            nodes,
            free_head: None,
        }
    }

    /// Number of entries that fit without reallocating, not counting the
    /// sentinel.
    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity() - 1
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional);
    }

    pub(crate) fn links(&self, ptr: Ptr) -> Links {
        self.nodes[ptr.unchecked_get()].links
    }

    fn links_mut(&mut self, ptr: Ptr) -> &mut Links {
        &mut self.nodes[ptr.unchecked_get()].links
    }

    pub(crate) fn head(&self) -> Ptr {
        self.links(Ptr::ROOT).next
    }

    pub(crate) fn tail(&self) -> Ptr {
        self.links(Ptr::ROOT).prev
    }

    /// Drops every entry and restores the sentinel to an empty self-loop.
    pub(crate) fn clear(&mut self) {
        self.nodes.truncate(1);
        self.nodes[0] = LLSlot::root();
        self.free_head = None;
    }

    /// Stores an entry in a free slot. The slot is not linked into the list.
    pub(crate) fn alloc(&mut self, key: K, value: T, hash: u64) -> Ptr {
        let slot = LLSlot {
            links: Links::SELF_LOOP,
            state: SlotState::Data(LLData { hash, key, value }),
        };

        match self.free_head {
            Some(ptr) => {
                let old = core::mem::replace(&mut self.nodes[ptr.unchecked_get()], slot);
                self.free_head = match old.state {
                    SlotState::Free(next) => next,
                    _ => assert_free(),
                };
                ptr
            }
            None => {
                let ptr = Ptr::unchecked_from(self.nodes.len());
                self.nodes.push(slot);
                ptr
            }
        }
    }

    pub(crate) fn is_occupied(&self, ptr: Ptr) -> bool {
        matches!(
            self.nodes.get(ptr.unchecked_get()),
            Some(LLSlot {
                state: SlotState::Data(_),
                ..
            })
        )
    }

    /// Returns the slot to the free list. The slot must already be unlinked.
    pub(crate) fn free(&mut self, ptr: Ptr) -> LLData<K, T> {
        assert!(self.is_occupied(ptr), "Pointer to free must be occupied");
        let slot = &mut self.nodes[ptr.unchecked_get()];
        let state = core::mem::replace(&mut slot.state, SlotState::Free(self.free_head));
        self.free_head = Some(ptr);

        match state {
            SlotState::Data(data) => data,
            _ => assert_free(),
        }
    }

    /// Links `node` immediately after `prev`.
    pub(crate) fn link_after(&mut self, node: Ptr, prev: Ptr) {
        debug_assert_ne!(node, Ptr::ROOT);
        debug_assert_ne!(node, prev);
        let next = self.links(prev).next;
        *self.links_mut(node) = Links { prev, next };
        self.links_mut(prev).next = node;
        self.links_mut(next).prev = node;
    }

    /// Links `node` immediately before `next`.
    pub(crate) fn link_before(&mut self, node: Ptr, next: Ptr) {
        let prev = self.links(next).prev;
        self.link_after(node, prev);
    }

    /// Detaches `node` from its neighbours. Its own links go stale and must
    /// not be followed until it is linked again.
    pub(crate) fn unlink(&mut self, node: Ptr) {
        debug_assert_ne!(node, Ptr::ROOT);
        let Links { prev, next } = self.links(node);
        self.links_mut(prev).next = next;
        self.links_mut(next).prev = prev;
    }

    /// Walks `steps` entries forward from the head, stepping over the
    /// sentinel if the walk wraps around. Returns the sentinel only when the
    /// list is empty.
    pub(crate) fn walk(&self, steps: usize) -> Ptr {
        let mut curr = self.head();
        for _ in 0..steps {
            curr = self.links(curr).next;
            if curr == Ptr::ROOT {
                curr = self.links(curr).next;
            }
        }
        curr
    }
}

impl<K, T> Index<Ptr> for Arena<K, T> {
    type Output = LLData<K, T>;

    fn index(&self, index: Ptr) -> &Self::Output {
        self.nodes[index.unchecked_get()].data()
    }
}

impl<K, T> IndexMut<Ptr> for Arena<K, T> {
    fn index_mut(&mut self, index: Ptr) -> &mut Self::Output {
        self.nodes[index.unchecked_get()].data_mut()
    }
}

//! Index-addressed node storage shared by the linked containers.
//!
//! Every list, tree and trie in this crate owns its nodes through an [`Arena`] and links
//! nodes together with [`NodeId`]s instead of pointers. A `NodeId` is a plain `Copy` value so
//! "back" links (like a doubly linked list's `prev`) never fight the borrow checker, and
//! dropping a container is a flat `Vec` drop no matter how deep its links go.
//!
//! Slots are recycled after removal. Each slot carries a generation that is bumped on removal,
//! so a handle to a removed node is rejected instead of silently aliasing the slot's next
//! occupant. Each arena is also stamped with an owner id that every handle it hands out
//! carries, so a handle from another container is rejected even when its index is in range.

use std::ops::{Index, IndexMut};
use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_OWNER: AtomicU32 = AtomicU32::new(0);

/// A handle to a node inside one of this crate's containers.
///
/// Handles are only meaningful to the container that produced them (and to clones of it, which
/// share its node layout). Handed to any other container, or once the node they refer to is
/// removed, every accessor taking the handle returns `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    owner: u32,
    index: usize,
    generation: u32,
}

#[derive(Debug, Clone)]
struct Entry<N> {
    generation: u32,
    node: Option<N>,
}

#[derive(Debug, Clone)]
pub(crate) struct Arena<N> {
    /// Stamped on every handle this arena hands out. Clones keep it, since their nodes link to
    /// each other through handles carrying it.
    owner: u32,
    entries: Vec<Entry<N>>,
    /// Indices of vacant entries, reused LIFO.
    free: Vec<usize>,
    len: usize,
}

impl<N> Default for Arena<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Arena<N> {
    pub(crate) fn new() -> Self {
        Self {
            owner: NEXT_OWNER.fetch_add(1, Ordering::Relaxed),
            entries: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Number of live nodes.
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn insert(&mut self, node: N) -> NodeId {
        self.len += 1;
        match self.free.pop() {
            Some(index) => {
                let entry = &mut self.entries[index];
                debug_assert!(entry.node.is_none(), "free list pointed at a live node");
                entry.node = Some(node);
                NodeId {
                    owner: self.owner,
                    index,
                    generation: entry.generation,
                }
            }
            None => {
                self.entries.push(Entry {
                    generation: 0,
                    node: Some(node),
                });
                NodeId {
                    owner: self.owner,
                    index: self.entries.len() - 1,
                    generation: 0,
                }
            }
        }
    }

    /// Removes the node behind `id`, returning it. Stale handles yield `None`.
    pub(crate) fn remove(&mut self, id: NodeId) -> Option<N> {
        if id.owner != self.owner {
            return None;
        }
        let entry = self.entries.get_mut(id.index)?;
        if entry.generation != id.generation {
            return None;
        }
        let node = entry.node.take()?;
        entry.generation = entry.generation.wrapping_add(1);
        self.free.push(id.index);
        self.len -= 1;
        Some(node)
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&N> {
        if id.owner != self.owner {
            return None;
        }
        self.entries
            .get(id.index)
            .filter(|entry| entry.generation == id.generation)
            .and_then(|entry| entry.node.as_ref())
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut N> {
        if id.owner != self.owner {
            return None;
        }
        self.entries
            .get_mut(id.index)
            .filter(|entry| entry.generation == id.generation)
            .and_then(|entry| entry.node.as_mut())
    }

    pub(crate) fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }
}

/// Indexing is for links the container itself maintains. A miss means a container broke its
/// own linkage invariant, so it panics.
impl<N> Index<NodeId> for Arena<N> {
    type Output = N;

    fn index(&self, id: NodeId) -> &N {
        self.get(id).expect("container linked to a removed node")
    }
}

impl<N> IndexMut<NodeId> for Arena<N> {
    fn index_mut(&mut self, id: NodeId) -> &mut N {
        self.get_mut(id).expect("container linked to a removed node")
    }
}

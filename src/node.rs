//! Arena nodes.
//!
//! Nodes live in a single `Vec` owned by the list and refer to each other by
//! [`Idx`]. A link at any level is only a handle, so the same node can be
//! reachable from several levels without shared ownership.

use smallvec::SmallVec;
use smallvec::smallvec;

/// Node index type. u32 saves space vs usize on 64-bit.
pub(crate) type Idx = u32;

/// Null index marker.
pub(crate) const NULL: Idx = Idx::MAX;

/// Handle for the arena slot at `slot`. The arena holds at most `NULL`
/// slots, since `NULL` itself is reserved.
pub(crate) fn handle(slot: usize) -> Idx {
    assert!(
        slot < NULL as usize,
        "arena full: slot {} does not fit a node handle",
        slot
    );
    slot as Idx
}

/// Links stored inline before spilling to the heap. Three in four nodes
/// have two levels or fewer.
const INLINE_LINKS: usize = 4;

/// One level of a node: where it points and how far that is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Link {
    /// Next node at this level, or `NULL` at the end of the level.
    pub next: Idx,
    /// Position delta to `next`. On the last edge of a level, the number of
    /// elements after this node.
    pub span: usize,
}

impl Link {
    pub const END: Link = Link { next: NULL, span: 0 };
}

#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    /// `None` for the sentinel and for slots on the free list.
    pub value: Option<T>,
    /// One link per level, `links[0]` is the base level.
    pub links: SmallVec<[Link; INLINE_LINKS]>,
}

impl<T> Node<T> {
    pub fn new(value: T, level: usize) -> Self {
        Node {
            value: Some(value),
            links: smallvec![Link::END; level + 1],
        }
    }

    pub fn sentinel(levels: usize) -> Self {
        Node {
            value: None,
            links: smallvec![Link::END; levels],
        }
    }

    /// Refill a recycled slot.
    pub fn reset(&mut self, value: T, level: usize) {
        self.value = Some(value);
        self.links.clear();
        self.links.resize(level + 1, Link::END);
    }

    /// Highest level this node participates in.
    pub fn level(&self) -> usize {
        self.links.len() - 1
    }
}

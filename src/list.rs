//! Positional Skip List
//!
//! A sequence container addressed by position, with expected O(log n) get,
//! set, insert and remove anywhere in the list.
//!
//! # Span Semantics
//!
//! Every link carries a span: the number of positions it jumps.
//!
//! - `node.links[level].span` = position of `next` minus position of `node`
//! - The sentinel sits at position -1, so its spans count from there
//! - On the last edge of a level, the span is the number of elements after
//!   the node, so spans along any level always sum to `len()`
//!
//! ```text
//! Level 2: HEAD -3-------------------------> C -1-------> END
//! Level 1: HEAD -1-> A -2-----------------> C -1-------> END
//! Level 0: HEAD -1-> A -1-> B -1-----------> C -1-> D -0-> END
//! ```
//!
//! # Operations
//!
//! All positional operations share one descent: start at the sentinel on the
//! top level, move right while the next node still lies before the target,
//! then drop a level. Insert and remove patch spans on the way down.
//!
//! - `get(index)` / `get_mut(index)` / `set(index, value)`: O(log n)
//! - `insert(index, value)`: O(log n), `index == len()` appends
//! - `remove(index)`: O(log n)
//! - `len()`: O(1)

use std::fmt;
use std::iter::FusedIterator;
use std::ops::Index;
use std::ops::IndexMut;

use rustc_hash::FxHashMap;
use tracing::debug;
use tracing::trace;

use crate::config::Config;
use crate::error::Error;
use crate::error::Result;
use crate::level::Geometric;
use crate::level::LevelGenerator;
use crate::node;
use crate::node::Idx;
use crate::node::Link;
use crate::node::NULL;
use crate::node::Node;

/// The sentinel always occupies the first arena slot.
const HEAD: Idx = 0;

/// A position in the descent: a node and the number of elements up to and
/// including it (0 for the sentinel).
#[derive(Debug, Clone, Copy)]
struct Cursor {
    node: Idx,
    pos: usize,
}

impl Cursor {
    const HEAD: Cursor = Cursor { node: HEAD, pos: 0 };
}

/// A sequence with logarithmic positional access, insertion and removal.
#[derive(Clone)]
pub struct SkipList<T, G = Geometric> {
    /// Arena of nodes. Slot 0 is the sentinel.
    nodes: Vec<Node<T>>,
    /// Highest level with at least one real node.
    top_level: usize,
    /// Number of elements (not counting the sentinel).
    len: usize,
    /// Free list for reusing removed node slots.
    free_list: Vec<Idx>,
    /// Level source for new nodes.
    levels: G,
}

impl<T> SkipList<T> {
    /// An empty list with the default 32 levels and an OS-seeded generator.
    pub fn new() -> Self {
        let config = Config::default();
        Self::from_parts(config.max_levels, config.generator())
    }

    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(config.max_levels, config.generator()))
    }
}

impl<T> Default for SkipList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, G> SkipList<T, G> {
    /// An empty list drawing levels from `levels`. `config.seed` is unused.
    pub fn with_generator(config: Config, levels: G) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(config.max_levels, levels))
    }

    fn from_parts(max_levels: usize, levels: G) -> Self {
        debug!(max_levels, "creating skip list");
        SkipList {
            nodes: vec![Node::sentinel(max_levels)],
            top_level: 0,
            len: 0,
            free_list: Vec::new(),
            levels,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Same as [`len`](Self::len).
    pub fn count(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Highest level currently in use.
    pub fn top_level(&self) -> usize {
        self.top_level
    }

    /// Number of levels the sentinel was allocated with.
    pub fn max_levels(&self) -> usize {
        self.node(HEAD).links.len()
    }

    // --- Node access helpers ---

    fn node(&self, idx: Idx) -> &Node<T> {
        &self.nodes[idx as usize]
    }

    fn node_mut(&mut self, idx: Idx) -> &mut Node<T> {
        &mut self.nodes[idx as usize]
    }

    fn value(&self, idx: Idx) -> &T {
        match &self.node(idx).value {
            Some(value) => value,
            None => unreachable!("node {} is linked but holds no value", idx),
        }
    }

    fn value_mut(&mut self, idx: Idx) -> &mut T {
        match &mut self.node_mut(idx).value {
            Some(value) => value,
            None => unreachable!("node {} is linked but holds no value", idx),
        }
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if self.len == 0 {
            return Err(Error::Empty { index });
        }
        if index >= self.len {
            return Err(Error::OutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(())
    }

    // --- Rank traversal ---

    /// Move right along `level` while the next node lies before `index`.
    fn advance(&self, mut cursor: Cursor, level: usize, index: usize) -> Cursor {
        loop {
            let link = self.node(cursor.node).links[level];
            if link.next == NULL || cursor.pos + link.span > index {
                return cursor;
            }
            cursor = Cursor {
                node: link.next,
                pos: cursor.pos + link.span,
            };
        }
    }

    /// The node immediately before position `index` at level 0.
    fn find_preceding(&self, index: usize) -> Idx {
        let mut cursor = Cursor::HEAD;
        for level in (0..=self.top_level).rev() {
            cursor = self.advance(cursor, level, index);
        }
        cursor.node
    }

    /// The node at `index`. Caller checks bounds.
    fn node_at(&self, index: usize) -> Idx {
        self.node(self.find_preceding(index)).links[0].next
    }

    // --- Reads and writes ---

    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_index(index)?;
        Ok(self.value(self.node_at(index)))
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.check_index(index)?;
        let idx = self.node_at(index);
        Ok(self.value_mut(idx))
    }

    /// Replace the element at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, value))
    }

    pub fn first(&self) -> Option<&T> {
        self.get(0).ok()
    }

    pub fn last(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|index| self.get(index).ok())
    }

    // --- Removal ---

    /// Remove the element at `index`, shifting later elements down by one.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;

        let mut target = NULL;
        let mut cursor = Cursor::HEAD;
        for level in (0..=self.top_level).rev() {
            cursor = self.advance(cursor, level, index);
            let link = {
                let pred = &mut self.node_mut(cursor.node).links[level];
                pred.span -= 1;
                *pred
            };
            // After the decrement, the target sits exactly at pos + span.
            if link.next != NULL && cursor.pos + link.span == index {
                let after = self.node(link.next).links[level];
                self.node_mut(cursor.node).links[level] = Link {
                    next: after.next,
                    span: link.span + after.span,
                };
                target = link.next;
            }
        }
        debug_assert_ne!(target, NULL, "no node unlinked at level 0");

        self.lower_top_level();
        self.len -= 1;
        let value = self.release(target);
        self.debug_check();
        Ok(value)
    }

    /// Remove the last element.
    pub fn pop(&mut self) -> Option<T> {
        let index = self.len.checked_sub(1)?;
        self.remove(index).ok()
    }

    /// Drop every element. The sentinel keeps its capacity.
    pub fn clear(&mut self) {
        debug!(len = self.len, "clearing skip list");
        let max_levels = self.max_levels();
        self.nodes.truncate(1);
        self.nodes[HEAD as usize] = Node::sentinel(max_levels);
        self.free_list.clear();
        self.top_level = 0;
        self.len = 0;
    }

    /// Lower `top_level` past levels the sentinel no longer links into.
    /// The sentinel precedes every node, so an empty sentinel edge means an
    /// empty level.
    fn lower_top_level(&mut self) {
        let from = self.top_level;
        while self.top_level > 0 && self.node(HEAD).links[self.top_level].next == NULL {
            self.top_level -= 1;
        }
        if self.top_level != from {
            trace!(from, to = self.top_level, "lowered top level");
        }
    }

    fn release(&mut self, idx: Idx) -> T {
        let value = self.node_mut(idx).value.take();
        self.free_list.push(idx);
        match value {
            Some(value) => value,
            None => unreachable!("node {} was linked without a value", idx),
        }
    }

    // --- Traversal and rendering ---

    /// Iterate over all elements in order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            current: self.node(HEAD).links[0].next,
            remaining: self.len,
        }
    }

    /// Render as `[a, b, c]`.
    pub fn describe(&self) -> String
    where
        T: fmt::Display,
    {
        self.to_string()
    }

    // --- Invariant checking ---

    /// Validate the whole structure, panicking on the first violation.
    ///
    /// Checks that every level is a strictly increasing chain whose spans
    /// match position deltas and sum to `len()`, that level membership is
    /// contiguous from 0, and that `top_level` is exact. O(n · levels).
    pub fn check_invariants(&self) {
        let head = self.node(HEAD);
        let mut positions: FxHashMap<Idx, usize> = FxHashMap::default();
        let mut per_level = vec![0usize; self.max_levels()];

        let mut idx = head.links[0].next;
        let mut pos = 0usize;
        while idx != NULL {
            pos += 1;
            let node = self.node(idx);
            assert!(
                node.value.is_some(),
                "INVARIANT VIOLATED: linked node {} holds no value",
                idx
            );
            assert!(
                node.level() <= self.top_level,
                "INVARIANT VIOLATED: node {} at level {} above top_level={}",
                idx,
                node.level(),
                self.top_level
            );
            assert!(
                positions.insert(idx, pos).is_none(),
                "INVARIANT VIOLATED: node {} reached twice at level 0",
                idx
            );
            for count in &mut per_level[..=node.level()] {
                *count += 1;
            }
            idx = node.links[0].next;
        }
        assert_eq!(
            pos, self.len,
            "INVARIANT VIOLATED: level 0 holds {} nodes != len()={}",
            pos, self.len
        );

        for level in 0..self.max_levels() {
            if level > self.top_level {
                assert_eq!(
                    head.links[level].next, NULL,
                    "INVARIANT VIOLATED: level {} above top_level={} is linked",
                    level, self.top_level
                );
                continue;
            }

            let mut idx = HEAD;
            let mut pos = 0usize;
            let mut total = 0usize;
            let mut visited = 0usize;
            loop {
                let link = self.node(idx).links[level];
                total += link.span;
                if link.next == NULL {
                    assert_eq!(
                        link.span,
                        self.len - pos,
                        "INVARIANT VIOLATED: last span at level {} is {}, expected {}",
                        level,
                        link.span,
                        self.len - pos
                    );
                    break;
                }
                let Some(&next_pos) = positions.get(&link.next) else {
                    panic!(
                        "INVARIANT VIOLATED: node {} linked at level {} but not at level 0",
                        link.next, level
                    );
                };
                assert!(
                    self.node(link.next).level() >= level,
                    "INVARIANT VIOLATED: node {} linked at level {} above its own level",
                    link.next,
                    level
                );
                assert_eq!(
                    next_pos,
                    pos + link.span,
                    "INVARIANT VIOLATED: span {} at level {} does not reach position {}",
                    link.span,
                    level,
                    next_pos
                );
                visited += 1;
                idx = link.next;
                pos = next_pos;
            }
            assert_eq!(
                total, self.len,
                "INVARIANT VIOLATED: spans at level {} sum to {} != len()={}",
                level, total, self.len
            );
            assert_eq!(
                visited, per_level[level],
                "INVARIANT VIOLATED: level {} links {} of {} eligible nodes",
                level, visited, per_level[level]
            );
        }

        if self.top_level > 0 {
            assert_ne!(
                head.links[self.top_level].next, NULL,
                "INVARIANT VIOLATED: top_level={} is empty",
                self.top_level
            );
        }
    }

    #[cfg(debug_assertions)]
    fn debug_check(&self) {
        self.check_invariants();
    }

    #[cfg(not(debug_assertions))]
    #[inline(always)]
    fn debug_check(&self) {}
}

impl<T, G: LevelGenerator> SkipList<T, G> {
    /// Insert `value` so that it ends up at `index`, shifting later elements
    /// up by one. `index == len()` appends.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len {
            return Err(Error::OutOfRange {
                index,
                len: self.len,
            });
        }
        let capacity = self.max_levels();
        let level = self.levels.pick_level(capacity - 1);
        if level >= capacity {
            return Err(Error::LevelCapacity { level, capacity });
        }
        if level > self.top_level {
            self.raise_top_level(level);
        }
        let new_idx = self.alloc_node(value, level);

        let mut cursor = Cursor::HEAD;
        for l in (0..=self.top_level).rev() {
            cursor = self.advance(cursor, l, index);
            // Every edge over the insertion point grows by one.
            let pred = &mut self.node_mut(cursor.node).links[l];
            pred.span += 1;
            if l <= level {
                let distance = index + 1 - cursor.pos;
                let old = *pred;
                *pred = Link {
                    next: new_idx,
                    span: distance,
                };
                self.node_mut(new_idx).links[l] = Link {
                    next: old.next,
                    span: old.span - distance,
                };
            }
        }

        self.len += 1;
        self.debug_check();
        Ok(())
    }

    /// Append to the end.
    pub fn push(&mut self, value: T) -> Result<()> {
        self.insert(self.len, value)
    }

    /// Open levels `top_level + 1..=level`. Their sentinel edges span the
    /// whole list.
    fn raise_top_level(&mut self, level: usize) {
        trace!(from = self.top_level, to = level, "raised top level");
        let len = self.len;
        let from = self.top_level;
        for link in &mut self.node_mut(HEAD).links[from + 1..=level] {
            *link = Link {
                next: NULL,
                span: len,
            };
        }
        self.top_level = level;
    }

    fn alloc_node(&mut self, value: T, level: usize) -> Idx {
        if let Some(idx) = self.free_list.pop() {
            trace!(idx, level, "reusing free slot");
            self.node_mut(idx).reset(value, level);
            idx
        } else {
            let idx = node::handle(self.nodes.len());
            self.nodes.push(Node::new(value, level));
            idx
        }
    }
}

impl<T, G> Index<usize> for SkipList<T, G> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T, G> IndexMut<usize> for SkipList<T, G> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T: fmt::Display, G> fmt::Display for SkipList<T, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

impl<T: fmt::Debug, G> fmt::Debug for SkipList<T, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, G, H> PartialEq<SkipList<T, H>> for SkipList<T, G> {
    fn eq(&self, other: &SkipList<T, H>) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq, G> Eq for SkipList<T, G> {}

impl<T, G: LevelGenerator> Extend<T> for SkipList<T, G> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            if let Err(err) = self.push(value) {
                panic!("{}", err);
            }
        }
    }
}

impl<T> FromIterator<T> for SkipList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SkipList::new();
        list.extend(iter);
        list
    }
}

impl<'a, T, G> IntoIterator for &'a SkipList<T, G> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// In-order iterator over a [`SkipList`], following level 0.
pub struct Iter<'a, T> {
    nodes: &'a [Node<T>],
    current: Idx,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == NULL {
            return None;
        }

        let node = &self.nodes[self.current as usize];
        self.current = node.links[0].next;
        self.remaining -= 1;
        node.value.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Flat;

    /// Hands out a fixed sequence of levels, then level 0.
    struct Scripted(Vec<usize>);

    impl LevelGenerator for Scripted {
        fn pick_level(&mut self, _max_level: usize) -> usize {
            if self.0.is_empty() { 0 } else { self.0.remove(0) }
        }
    }

    fn scripted(levels: &[usize]) -> SkipList<i32, Scripted> {
        SkipList::with_generator(Config::default(), Scripted(levels.to_vec())).unwrap()
    }

    fn items<G>(list: &SkipList<i32, G>) -> Vec<i32> {
        list.iter().cloned().collect()
    }

    #[test]
    fn empty_list() {
        let list: SkipList<i32> = SkipList::new();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
        assert_eq!(list.top_level(), 0);
        assert_eq!(list.get(0), Err(Error::Empty { index: 0 }));
        assert_eq!(list.describe(), "[]");
        list.check_invariants();
    }

    #[test]
    fn insert_scenario() {
        let mut list = SkipList::with_config(Config::seeded(1)).unwrap();
        list.insert(0, 0).unwrap();
        assert_eq!(list.describe(), "[0]");
        list.insert(1, 0).unwrap();
        assert_eq!(list.describe(), "[0, 0]");
        list.insert(2, 3).unwrap();
        assert_eq!(list.describe(), "[0, 0, 3]");
        list.insert(0, 3).unwrap();
        assert_eq!(list.describe(), "[3, 0, 0, 3]");
        assert_eq!(list.count(), 4);

        assert_eq!(list.remove(1), Ok(0));
        assert_eq!(list.describe(), "[3, 0, 3]");
    }

    #[test]
    fn spans_follow_the_diagram() {
        // A=1, B=0, C=2, D=0 as in the module docs.
        let mut list = scripted(&[1, 0, 2, 0]);
        for (i, value) in [10, 20, 30, 40].into_iter().enumerate() {
            list.insert(i, value).unwrap();
        }
        assert_eq!(list.top_level(), 2);

        let head = &list.node(HEAD).links;
        assert_eq!(head[0].span, 1);
        assert_eq!(head[1].span, 1);
        assert_eq!(head[2].span, 3);

        let c = head[2].next;
        assert_eq!(list.value(c), &30);
        assert_eq!(list.node(c).links[2], Link { next: NULL, span: 1 });
        list.check_invariants();
    }

    #[test]
    fn out_of_range() {
        let mut list = scripted(&[]);
        list.push(1).unwrap();
        list.push(2).unwrap();

        assert_eq!(list.get(2), Err(Error::OutOfRange { index: 2, len: 2 }));
        assert_eq!(list.set(5, 0), Err(Error::OutOfRange { index: 5, len: 2 }));
        assert_eq!(list.remove(2), Err(Error::OutOfRange { index: 2, len: 2 }));
        assert_eq!(list.insert(3, 0), Err(Error::OutOfRange { index: 3, len: 2 }));
        assert_eq!(items(&list), vec![1, 2]);
    }

    #[test]
    fn empty_list_errors() {
        let mut list = scripted(&[]);
        assert_eq!(list.remove(0), Err(Error::Empty { index: 0 }));
        assert_eq!(list.set(0, 1), Err(Error::Empty { index: 0 }));
        assert!(list.get_mut(3).is_err());
        assert_eq!(list.pop(), None);
        assert_eq!(list.len(), 0);
        list.check_invariants();
    }

    #[test]
    fn rejects_level_beyond_capacity() {
        let config = Config::default().max_levels(4);
        let mut list = SkipList::with_generator(config, Scripted(vec![2, 4])).unwrap();
        list.push(1).unwrap();
        assert_eq!(
            list.push(2),
            Err(Error::LevelCapacity {
                level: 4,
                capacity: 4
            })
        );
        assert_eq!(items(&list), vec![1]);
        assert_eq!(list.top_level(), 2);
        list.check_invariants();
    }

    #[test]
    fn set_returns_previous() {
        let mut list: SkipList<i32> = (0..10).collect();
        assert_eq!(list.set(4, 40), Ok(4));
        assert_eq!(list[4], 40);
        list[5] = 50;
        assert_eq!(list.get(5), Ok(&50));
        *list.get_mut(0).unwrap() = -1;
        assert_eq!(items(&list), vec![-1, 1, 2, 3, 40, 50, 6, 7, 8, 9]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn index_panics_out_of_range() {
        let list: SkipList<i32> = (0..3).collect();
        let _ = list[3];
    }

    #[test]
    fn top_level_lowers_when_emptied() {
        let mut list = scripted(&[0, 3, 1]);
        list.push(1).unwrap();
        list.push(2).unwrap();
        list.push(3).unwrap();
        assert_eq!(list.top_level(), 3);

        // Removing the only level-3 node drops straight to level 1.
        assert_eq!(list.remove(1), Ok(2));
        assert_eq!(list.top_level(), 1);
        assert_eq!(list.remove(1), Ok(3));
        assert_eq!(list.top_level(), 0);
        list.check_invariants();
    }

    #[test]
    fn reopened_level_spans_whole_list() {
        let mut list = scripted(&[2, 0, 0, 0, 0, 3]);
        for value in 0..5 {
            list.push(value).unwrap();
        }
        list.remove(0).unwrap();
        assert_eq!(list.top_level(), 0);

        list.push(4).unwrap();
        list.push(5).unwrap();
        list.insert(2, 9).unwrap();
        assert_eq!(list.top_level(), 3);
        assert_eq!(items(&list), vec![1, 2, 9, 3, 4, 4, 5]);
        list.check_invariants();
    }

    #[test]
    fn free_slots_are_reused() {
        let mut list = scripted(&[]);
        for value in 0..4 {
            list.push(value).unwrap();
        }
        let arena = list.nodes.len();
        list.remove(1).unwrap();
        list.remove(1).unwrap();
        list.insert(0, 7).unwrap();
        list.insert(0, 8).unwrap();
        assert_eq!(list.nodes.len(), arena);
        assert_eq!(items(&list), vec![8, 7, 0, 3]);
    }

    #[test]
    fn flat_list_still_positional() {
        let mut list = SkipList::with_generator(Config::default(), Flat).unwrap();
        for i in 0..50 {
            list.insert(i / 2, i as i32).unwrap();
        }
        assert_eq!(list.top_level(), 0);
        let expected: Vec<i32> = {
            let mut v = Vec::new();
            for i in 0..50 {
                v.insert(i / 2, i as i32);
            }
            v
        };
        assert_eq!(items(&list), expected);
    }

    #[test]
    fn clear_resets() {
        let mut list: SkipList<i32> = (0..100).collect();
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.top_level(), 0);
        assert_eq!(list.describe(), "[]");
        list.check_invariants();
        list.push(1).unwrap();
        assert_eq!(items(&list), vec![1]);
    }

    #[test]
    fn first_last_pop() {
        let mut list: SkipList<i32> = (1..=3).collect();
        assert_eq!(list.first(), Some(&1));
        assert_eq!(list.last(), Some(&3));
        assert_eq!(list.pop(), Some(3));
        assert_eq!(list.pop(), Some(2));
        assert_eq!(list.pop(), Some(1));
        assert_eq!(list.pop(), None);
        assert_eq!(list.first(), None);
        assert_eq!(list.last(), None);
    }

    #[test]
    fn equality_ignores_shape() {
        let a: SkipList<i32> = (0..20).collect();
        let mut b = scripted(&[5, 0, 2]);
        for value in (0..20).rev() {
            b.insert(0, value).unwrap();
        }
        assert_eq!(a, b);
        b.pop();
        assert_ne!(a, b);
    }

    #[test]
    fn debug_and_display() {
        let list: SkipList<&str> = ["a", "b"].into_iter().collect();
        assert_eq!(format!("{:?}", list), r#"["a", "b"]"#);
        assert_eq!(format!("{}", list), "[a, b]");
    }

    #[test]
    fn iter_is_exact_size() {
        let list: SkipList<i32> = (0..7).collect();
        let mut iter = list.iter();
        assert_eq!(iter.len(), 7);
        iter.next();
        assert_eq!(iter.len(), 6);
        assert_eq!((&list).into_iter().sum::<i32>(), 21);
    }

    #[test]
    fn stress_test() {
        let mut list = SkipList::with_config(Config::seeded(99)).unwrap();
        for i in 0..1000 {
            list.insert(i, i).unwrap();
        }
        assert_eq!(list.len(), 1000);
        for i in 0..1000 {
            assert_eq!(list.get(i), Ok(&i), "failed at {}", i);
        }

        // Remove every other item from the end
        for i in (0..500).rev() {
            list.remove(i * 2).unwrap();
        }
        assert_eq!(list.len(), 500);
        for i in 0..500 {
            let expected = i * 2 + 1;
            assert_eq!(list.get(i), Ok(&expected), "failed at index {}", i);
        }
    }
}

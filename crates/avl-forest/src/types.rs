//! Node view trait and comparator type.
//!
//! Both tree variants store children as `Option<Box<Node>>`. The traversal,
//! search and print helpers in [`crate::util`] and [`crate::print`] only need
//! read access, so they work against [`BinaryNode`] instead of a concrete
//! node type.

use std::cmp::Ordering;

/// Read-only view of a binary tree node.
pub trait BinaryNode {
    type Key;

    fn key(&self) -> &Self::Key;
    fn left(&self) -> Option<&Self>;
    fn right(&self) -> Option<&Self>;
}

/// Comparator used by the tree structures.
///
/// Must describe a total order over the keys stored in one tree.
pub type Comparator<K> = dyn Fn(&K, &K) -> Ordering;

pub fn default_comparator<K: Ord>(a: &K, b: &K) -> Ordering {
    a.cmp(b)
}

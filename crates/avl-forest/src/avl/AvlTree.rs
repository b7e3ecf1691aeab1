use std::cmp::Ordering;
use std::fmt;

use log::debug;

use crate::error::{require, TreeError};
use crate::print::print_node;
use crate::types::default_comparator;
use crate::util;

use super::types::{AvlNode, Link};
use super::util::{assert_avl_tree, insert, print, remove};

/// AVL tree set of ordered keys.
///
/// Every mutating call descends one search path, edits at the bottom and
/// repairs height, balance factor and shape on the way back up. After each
/// call every node's balance factor is in `{-1, 0, 1}`, so `insert`,
/// `remove`, `get` and `contains` are `O(log n)` and [`height`] is `O(1)`.
///
/// Duplicate keys (by the comparator) are ignored on insertion.
///
/// [`height`]: AvlTree::height
#[derive(Clone)]
pub struct AvlTree<K, C = fn(&K, &K) -> Ordering>
where
    C: Fn(&K, &K) -> Ordering,
{
    root: Link<K>,
    size: usize,
    comparator: C,
}

impl<K> AvlTree<K, fn(&K, &K) -> Ordering>
where
    K: Ord,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }

    /// Builds a tree by inserting `keys` in iteration order.
    ///
    /// Fails with [`TreeError::InvalidArgument`] on the first `None` element.
    pub fn try_from_keys<I, T>(keys: I) -> Result<Self, TreeError>
    where
        I: IntoIterator<Item = T>,
        T: Into<Option<K>>,
    {
        let mut tree = Self::new();
        tree.try_extend(keys)?;
        Ok(tree)
    }
}

impl<K> Default for AvlTree<K, fn(&K, &K) -> Ordering>
where
    K: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> AvlTree<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            size: 0,
            comparator,
        }
    }

    /// Inserts `key`. A key comparing equal to a stored one is a no-op.
    pub fn insert(&mut self, key: impl Into<Option<K>>) -> Result<(), TreeError> {
        let key = require(key.into())?;
        let (root, inserted) = insert(self.root.take(), key, &self.comparator);
        self.root = Some(root);
        if inserted {
            self.size += 1;
        }
        Ok(())
    }

    /// Inserts every element of `keys` in order.
    ///
    /// All elements are checked before the first insertion, so a `None`
    /// element fails with [`TreeError::InvalidArgument`] and leaves the tree
    /// unchanged.
    pub fn try_extend<I, T>(&mut self, keys: I) -> Result<(), TreeError>
    where
        I: IntoIterator<Item = T>,
        T: Into<Option<K>>,
    {
        let keys = keys
            .into_iter()
            .map(|key| {
                key.into()
                    .ok_or(TreeError::InvalidArgument("sequence element is None"))
            })
            .collect::<Result<Vec<K>, _>>()?;
        self.extend(keys);
        Ok(())
    }

    /// Removes the key comparing equal to `key` and returns the stored key.
    ///
    /// Fails with [`TreeError::NotFound`] without touching the tree when no
    /// such key exists.
    pub fn remove<'q>(&mut self, key: impl Into<Option<&'q K>>) -> Result<K, TreeError>
    where
        K: 'q,
    {
        let key = require(key.into())?;
        match remove(self.root.take(), key, &self.comparator) {
            Ok((root, removed)) => {
                self.root = root;
                self.size -= 1;
                Ok(removed)
            }
            Err(root) => {
                self.root = root;
                Err(TreeError::NotFound)
            }
        }
    }

    /// Returns the stored key comparing equal to `key`.
    pub fn get<'q>(&self, key: impl Into<Option<&'q K>>) -> Result<&K, TreeError>
    where
        K: 'q,
    {
        let key = require(key.into())?;
        util::find(self.root(), key, &self.comparator)
            .map(AvlNode::key)
            .ok_or(TreeError::NotFound)
    }

    pub fn contains<'q>(&self, key: impl Into<Option<&'q K>>) -> Result<bool, TreeError>
    where
        K: 'q,
    {
        let key = require(key.into())?;
        Ok(util::find(self.root(), key, &self.comparator).is_some())
    }

    pub fn clear(&mut self) {
        debug!("clearing tree of {} keys", self.size);
        self.root = None;
        self.size = 0;
    }

    /// Height of the root, `-1` for an empty tree. `O(1)`.
    pub fn height(&self) -> i32 {
        self.root.as_ref().map_or(-1, |n| n.height)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn root(&self) -> Option<&AvlNode<K>> {
        self.root.as_deref()
    }

    pub fn first(&self) -> Option<&K> {
        util::first(self.root()).map(AvlNode::key)
    }

    pub fn last(&self) -> Option<&K> {
        util::last(self.root()).map(AvlNode::key)
    }

    pub fn pre_order(&self) -> Vec<&K> {
        util::pre_order(self.root())
    }

    pub fn in_order(&self) -> Vec<&K> {
        util::in_order(self.root())
    }

    pub fn post_order(&self) -> Vec<&K> {
        util::post_order(self.root())
    }

    pub fn level_order(&self) -> Vec<&K> {
        util::level_order(self.root())
    }

    pub fn assert_valid(&self) -> Result<(), String> {
        assert_avl_tree(self.root(), &self.comparator)?;
        let count = util::size(self.root());
        if count != self.size {
            return Err(format!("Size mismatch: expected {count}, got {}", self.size));
        }
        Ok(())
    }
}

impl<K: Ord> FromIterator<K> for AvlTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K, C> Extend<K> for AvlTree<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            let (root, inserted) = insert(self.root.take(), key, &self.comparator);
            self.root = Some(root);
            if inserted {
                self.size += 1;
            }
        }
    }
}

impl<K, C> fmt::Display for AvlTree<K, C>
where
    K: fmt::Display,
    C: Fn(&K, &K) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = |n: &AvlNode<K>| n.key.to_string();
        let Some(root) = self.root() else {
            return write!(f, "AvlTree");
        };
        write!(f, "AvlTree\n└─ {}", print_node(root, "   ", &label))
    }
}

impl<K, C> fmt::Debug for AvlTree<K, C>
where
    K: fmt::Debug,
    C: Fn(&K, &K) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AvlTree[size={}] {}", self.size, print(self.root(), ""))
    }
}

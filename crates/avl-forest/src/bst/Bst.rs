use std::cmp::Ordering;
use std::fmt;

use log::debug;

use crate::error::{require, TreeError};
use crate::print::print_node;
use crate::types::default_comparator;
use crate::util;

use super::types::{BstNode, Link};
use super::util::{clone_link, drop_link, insert, remove};

/// Binary search tree without balancing.
///
/// Operations are `O(height)`, which degrades to `O(n)` on sorted input.
/// [`height`](Bst::height) is recomputed on every call. No operation
/// recurses over the tree's depth, including `Clone` and `Drop`.
pub struct Bst<K, C = fn(&K, &K) -> Ordering>
where
    C: Fn(&K, &K) -> Ordering,
{
    root: Link<K>,
    size: usize,
    comparator: C,
}

impl<K> Bst<K, fn(&K, &K) -> Ordering>
where
    K: Ord,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }

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

impl<K> Default for Bst<K, fn(&K, &K) -> Ordering>
where
    K: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> Bst<K, C>
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

    pub fn insert(&mut self, key: impl Into<Option<K>>) -> Result<(), TreeError> {
        let key = require(key.into())?;
        if insert(&mut self.root, key, &self.comparator) {
            self.size += 1;
        }
        Ok(())
    }

    /// Inserts every element of `keys` in order. A `None` element fails with
    /// [`TreeError::InvalidArgument`] before anything is inserted.
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

    pub fn remove<'q>(&mut self, key: impl Into<Option<&'q K>>) -> Result<K, TreeError>
    where
        K: 'q,
    {
        let key = require(key.into())?;
        let removed = remove(&mut self.root, key, &self.comparator).ok_or(TreeError::NotFound)?;
        self.size -= 1;
        Ok(removed)
    }

    pub fn get<'q>(&self, key: impl Into<Option<&'q K>>) -> Result<&K, TreeError>
    where
        K: 'q,
    {
        let key = require(key.into())?;
        util::find(self.root(), key, &self.comparator)
            .map(BstNode::key)
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
        drop_link(self.root.take());
        self.size = 0;
    }

    /// Height of the root, `-1` for an empty tree. `O(n)`.
    pub fn height(&self) -> i32 {
        util::height(self.root())
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn root(&self) -> Option<&BstNode<K>> {
        self.root.as_deref()
    }

    pub fn first(&self) -> Option<&K> {
        util::first(self.root()).map(BstNode::key)
    }

    pub fn last(&self) -> Option<&K> {
        util::last(self.root()).map(BstNode::key)
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
}

impl<K: Ord> FromIterator<K> for Bst<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K, C> Extend<K> for Bst<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            if insert(&mut self.root, key, &self.comparator) {
                self.size += 1;
            }
        }
    }
}

impl<K, C> Clone for Bst<K, C>
where
    K: Clone,
    C: Fn(&K, &K) -> Ordering + Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: clone_link(self.root()),
            size: self.size,
            comparator: self.comparator.clone(),
        }
    }
}

impl<K, C> Drop for Bst<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    fn drop(&mut self) {
        drop_link(self.root.take());
    }
}

impl<K, C> fmt::Display for Bst<K, C>
where
    K: fmt::Display,
    C: Fn(&K, &K) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = |n: &BstNode<K>| n.key.to_string();
        let Some(root) = self.root() else {
            return write!(f, "Bst");
        };
        write!(f, "Bst\n└─ {}", print_node(root, "   ", &label))
    }
}

impl<K, C> fmt::Debug for Bst<K, C>
where
    K: fmt::Debug,
    C: Fn(&K, &K) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bst")
            .field("size", &self.size)
            .field("keys", &self.in_order())
            .finish()
    }
}

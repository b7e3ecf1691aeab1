use std::fmt;

use crate::types::BinaryNode;

pub(crate) type Link<K> = Option<Box<BstNode<K>>>;

/// Plain BST node.
///
/// Not `Clone`: a degenerate tree is as deep as it is large, so copies and
/// teardown go through [`Bst`](super::Bst), which walks it iteratively.
pub struct BstNode<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> BstNode<K> {
    pub(crate) fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn left(&self) -> Option<&BstNode<K>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&BstNode<K>> {
        self.right.as_deref()
    }
}

impl<K> BinaryNode for BstNode<K> {
    type Key = K;

    fn key(&self) -> &K {
        &self.key
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}

/// Shows the key and the children's keys only, so formatting never recurses.
impl<K: fmt::Debug> fmt::Debug for BstNode<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BstNode")
            .field("key", &self.key)
            .field("left", &self.left().map(BstNode::key))
            .field("right", &self.right().map(BstNode::key))
            .finish()
    }
}

//! Iterative engines for the plain tree.
//!
//! Depth is unbounded (sorted input builds a spine), so nothing here
//! recurses: descents move a `&mut Link` cursor and whole-tree walks use an
//! explicit stack.

use std::cmp::Ordering;

use log::{debug, trace};

use crate::util::post_order_nodes;

use super::types::{BstNode, Link};

/// Inserts `key` as a new leaf below `link`. Returns whether a node was
/// created; an equal key leaves the tree untouched.
pub(crate) fn insert<K, C>(link: &mut Link<K>, key: K, comparator: &C) -> bool
where
    C: Fn(&K, &K) -> Ordering,
{
    let mut slot = link;
    while let Some(node) = slot {
        slot = match comparator(&key, &node.key) {
            Ordering::Less => &mut node.left,
            Ordering::Greater => &mut node.right,
            Ordering::Equal => {
                trace!("duplicate key ignored");
                return false;
            }
        };
    }
    *slot = Some(Box::new(BstNode::new(key)));
    true
}

/// Removes the node comparing equal to `key` and returns the stored key.
/// `None` means no such node; the tree is not touched in that case.
pub(crate) fn remove<K, C>(link: &mut Link<K>, key: &K, comparator: &C) -> Option<K>
where
    C: Fn(&K, &K) -> Ordering,
{
    let mut slot = link;
    loop {
        let ord = match slot.as_deref() {
            Some(node) => comparator(key, &node.key),
            None => return None,
        };
        if ord == Ordering::Equal {
            break;
        }
        let Some(node) = slot else {
            return None;
        };
        slot = if ord == Ordering::Less {
            &mut node.left
        } else {
            &mut node.right
        };
    }
    let node = slot.take()?;
    let (rest, removed) = splice(node);
    *slot = rest;
    Some(removed)
}

fn splice<K>(mut node: Box<BstNode<K>>) -> (Link<K>, K) {
    match (node.left.take(), node.right.take()) {
        (None, None) => (None, node.key),
        (Some(child), None) | (None, Some(child)) => (Some(child), node.key),
        (Some(left), Some(right)) => {
            debug!("removed node with two children, promoting predecessor");
            let mut left = Some(left);
            let Some(predecessor) = take_rightmost(&mut left) else {
                return (Some(right), node.key);
            };
            node.left = left;
            node.right = Some(right);
            let removed = std::mem::replace(&mut node.key, predecessor);
            (Some(node), removed)
        }
    }
}

/// Detaches the rightmost node under `link` (the in-order predecessor of the
/// subtree's parent), relinking its left child in its place.
fn take_rightmost<K>(link: &mut Link<K>) -> Option<K> {
    let mut slot = link;
    while slot.as_ref().is_some_and(|n| n.right.is_some()) {
        let Some(node) = slot else {
            break;
        };
        slot = &mut node.right;
    }
    let node = slot.take()?;
    let BstNode { key, left, .. } = *node;
    *slot = left;
    Some(key)
}

/// Deep copy built bottom-up from a post-order walk.
pub(crate) fn clone_link<K: Clone>(root: Option<&BstNode<K>>) -> Link<K> {
    let mut built: Vec<Box<BstNode<K>>> = Vec::new();
    for node in post_order_nodes(root) {
        let right = if node.right.is_some() { built.pop() } else { None };
        let left = if node.left.is_some() { built.pop() } else { None };
        built.push(Box::new(BstNode {
            key: node.key.clone(),
            left,
            right,
        }));
    }
    built.pop()
}

/// Frees a subtree without recursing through `Box` drops.
pub(crate) fn drop_link<K>(link: Link<K>) {
    let mut stack: Vec<Box<BstNode<K>>> = link.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

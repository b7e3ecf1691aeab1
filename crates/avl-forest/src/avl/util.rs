use std::cmp::Ordering;
use std::fmt::Debug;

use log::{debug, trace};

use crate::print::print_node;
use crate::util::in_order;

use super::types::{AvlNode, Link};

/// Right rotation of `c` around its left child `b`.
///
/// `b` takes `c`'s place, `c` becomes `b`'s right child and `b`'s old right
/// subtree becomes `c`'s left subtree. `c` is updated first since it ends up
/// below `b`.
pub(crate) fn rotate_right<K>(mut c: Box<AvlNode<K>>) -> Box<AvlNode<K>> {
    let Some(mut b) = c.left.take() else {
        return c;
    };
    c.left = b.right.take();
    c.update();
    b.right = Some(c);
    b.update();
    trace!("right rotation, subtree height {}", b.height);
    b
}

/// Mirror of [`rotate_right`].
pub(crate) fn rotate_left<K>(mut a: Box<AvlNode<K>>) -> Box<AvlNode<K>> {
    let Some(mut b) = a.right.take() else {
        return a;
    };
    a.right = b.left.take();
    a.update();
    b.left = Some(a);
    b.update();
    trace!("left rotation, subtree height {}", b.height);
    b
}

/// Recomputes `curr`'s height and balance factor, then applies at most one
/// single or double rotation. Returns the new subtree root.
pub(crate) fn rebalance<K>(mut curr: Box<AvlNode<K>>) -> Box<AvlNode<K>> {
    curr.update();
    let left_bf = curr.left.as_ref().map_or(0, |n| n.bf);
    let right_bf = curr.right.as_ref().map_or(0, |n| n.bf);
    match curr.bf {
        bf if bf > 1 && left_bf >= 0 => rotate_right(curr),
        bf if bf < -1 && right_bf <= 0 => rotate_left(curr),
        bf if bf > 1 => {
            curr.left = curr.left.take().map(rotate_left);
            rotate_right(curr)
        }
        bf if bf < -1 => {
            curr.right = curr.right.take().map(rotate_right);
            rotate_left(curr)
        }
        _ => curr,
    }
}

/// Inserts `key` below `link` and returns the new subtree root together with
/// whether a node was created. An equal key leaves the subtree untouched.
pub(crate) fn insert<K, C>(link: Link<K>, key: K, comparator: &C) -> (Box<AvlNode<K>>, bool)
where
    C: Fn(&K, &K) -> Ordering,
{
    let Some(mut curr) = link else {
        return (Box::new(AvlNode::new(key)), true);
    };
    let inserted = match comparator(&key, &curr.key) {
        Ordering::Less => {
            let (left, inserted) = insert(curr.left.take(), key, comparator);
            curr.left = Some(left);
            inserted
        }
        Ordering::Greater => {
            let (right, inserted) = insert(curr.right.take(), key, comparator);
            curr.right = Some(right);
            inserted
        }
        Ordering::Equal => {
            trace!("duplicate key ignored");
            false
        }
    };
    if inserted {
        (rebalance(curr), true)
    } else {
        (curr, false)
    }
}

/// Removes the node comparing equal to `key` from below `link`.
///
/// On success returns the new subtree root and the key that was stored in
/// the tree. When no such node exists the untouched subtree is handed back
/// in `Err`.
pub(crate) fn remove<K, C>(link: Link<K>, key: &K, comparator: &C) -> Result<(Link<K>, K), Link<K>>
where
    C: Fn(&K, &K) -> Ordering,
{
    let Some(mut curr) = link else {
        return Err(None);
    };
    match comparator(key, &curr.key) {
        Ordering::Less => match remove(curr.left.take(), key, comparator) {
            Ok((left, removed)) => {
                curr.left = left;
                Ok((Some(rebalance(curr)), removed))
            }
            Err(left) => {
                curr.left = left;
                Err(Some(curr))
            }
        },
        Ordering::Greater => match remove(curr.right.take(), key, comparator) {
            Ok((right, removed)) => {
                curr.right = right;
                Ok((Some(rebalance(curr)), removed))
            }
            Err(right) => {
                curr.right = right;
                Err(Some(curr))
            }
        },
        Ordering::Equal => Ok(splice(curr)),
    }
}

/// Unlinks `curr` from its subtree. A node with two children takes over its
/// in-order successor's key instead and the successor node is dropped.
fn splice<K>(mut curr: Box<AvlNode<K>>) -> (Link<K>, K) {
    match (curr.left.take(), curr.right.take()) {
        (None, None) => {
            debug!("removed leaf");
            (None, curr.key)
        }
        (Some(child), None) | (None, Some(child)) => {
            debug!("removed node with one child");
            (Some(child), curr.key)
        }
        (Some(left), Some(right)) => {
            debug!("removed node with two children");
            let (right, successor) = remove_successor(right);
            curr.left = Some(left);
            curr.right = right;
            let removed = std::mem::replace(&mut curr.key, successor);
            (Some(rebalance(curr)), removed)
        }
    }
}

/// Detaches the leftmost node under `curr`, returning the rebalanced
/// remainder and the detached key.
fn remove_successor<K>(mut curr: Box<AvlNode<K>>) -> (Link<K>, K) {
    match curr.left.take() {
        None => (curr.right.take(), curr.key),
        Some(left) => {
            let (left, successor) = remove_successor(left);
            curr.left = left;
            (Some(rebalance(curr)), successor)
        }
    }
}

/// Checks stored heights and balance factors against a full recomputation,
/// the AVL balance condition and strict key order.
pub fn assert_avl_tree<K, C>(root: Option<&AvlNode<K>>, comparator: &C) -> Result<(), String>
where
    C: Fn(&K, &K) -> Ordering,
{
    fn validate<K>(node: Option<&AvlNode<K>>) -> Result<i32, String> {
        let Some(node) = node else {
            return Ok(-1);
        };
        let lh = validate(node.left())?;
        let rh = validate(node.right())?;
        let height = 1 + lh.max(rh);
        if node.height != height {
            return Err(format!(
                "Height mismatch: expected {height}, got {}",
                node.height
            ));
        }
        let expected_bf = lh - rh;
        if node.bf != expected_bf {
            return Err(format!(
                "Balance factor mismatch: expected {expected_bf}, got {}",
                node.bf
            ));
        }
        if !(-1..=1).contains(&node.bf) {
            return Err("AVL balance violated".to_string());
        }
        Ok(height)
    }

    validate(root)?;

    let keys = in_order(root);
    for pair in keys.windows(2) {
        if comparator(pair[0], pair[1]) != Ordering::Less {
            return Err("Node order violated".to_string());
        }
    }

    Ok(())
}

/// Debug printer for AVL subtrees, one node per line with its height and
/// balance factor.
pub fn print<K: Debug>(node: Option<&AvlNode<K>>, tab: &str) -> String {
    match node {
        None => "∅".to_string(),
        Some(n) => print_node(n, tab, &|n: &AvlNode<K>| {
            format!("{:?} [h={}, bf={}]", n.key, n.height, n.bf)
        }),
    }
}

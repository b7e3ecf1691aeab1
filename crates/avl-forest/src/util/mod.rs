//! Read-only helpers over any [`BinaryNode`].
//!
//! None of these maintain invariants; they are shared by the balanced and
//! the plain tree.

use std::cmp::Ordering;
use std::collections::VecDeque;

use crate::types::BinaryNode;

/// Finds the node whose key compares equal to `key`.
pub fn find<'a, N, C>(root: Option<&'a N>, key: &N::Key, comparator: &C) -> Option<&'a N>
where
    N: BinaryNode,
    C: Fn(&N::Key, &N::Key) -> Ordering,
{
    let mut curr = root;
    while let Some(node) = curr {
        curr = match comparator(key, node.key()) {
            Ordering::Less => node.left(),
            Ordering::Greater => node.right(),
            Ordering::Equal => return Some(node),
        };
    }
    None
}

/// Leftmost node in the tree.
pub fn first<N: BinaryNode>(root: Option<&N>) -> Option<&N> {
    let mut curr = root?;
    while let Some(l) = curr.left() {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node in the tree.
pub fn last<N: BinaryNode>(root: Option<&N>) -> Option<&N> {
    let mut curr = root?;
    while let Some(r) = curr.right() {
        curr = r;
    }
    Some(curr)
}

/// Height recomputed from scratch. An empty subtree has height `-1`.
pub fn height<N: BinaryNode>(root: Option<&N>) -> i32 {
    let mut height = -1;
    let mut level: Vec<&N> = root.into_iter().collect();
    while !level.is_empty() {
        height += 1;
        level = level
            .into_iter()
            .flat_map(|n| n.left().into_iter().chain(n.right()))
            .collect();
    }
    height
}

/// Number of nodes under `root`.
pub fn size<N: BinaryNode>(root: Option<&N>) -> usize {
    let mut count = 0;
    let mut stack: Vec<&N> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        count += 1;
        stack.extend(node.left());
        stack.extend(node.right());
    }
    count
}

pub fn pre_order<N: BinaryNode>(root: Option<&N>) -> Vec<&N::Key> {
    let mut out = Vec::new();
    let mut stack: Vec<&N> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        out.push(node.key());
        stack.extend(node.right());
        stack.extend(node.left());
    }
    out
}

pub fn in_order<N: BinaryNode>(root: Option<&N>) -> Vec<&N::Key> {
    let mut out = Vec::new();
    let mut stack: Vec<&N> = Vec::new();
    let mut curr = root;
    loop {
        while let Some(node) = curr {
            stack.push(node);
            curr = node.left();
        }
        let Some(node) = stack.pop() else {
            return out;
        };
        out.push(node.key());
        curr = node.right();
    }
}

/// Nodes in post-order: left subtree, right subtree, then the node itself.
pub fn post_order_nodes<N: BinaryNode>(root: Option<&N>) -> Vec<&N> {
    // Node-right-left pre-order, reversed.
    let mut out = Vec::new();
    let mut stack: Vec<&N> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        out.push(node);
        stack.extend(node.left());
        stack.extend(node.right());
    }
    out.reverse();
    out
}

pub fn post_order<N: BinaryNode>(root: Option<&N>) -> Vec<&N::Key> {
    post_order_nodes(root).into_iter().map(N::key).collect()
}

/// Breadth-first traversal, left to right within each level.
pub fn level_order<N: BinaryNode>(root: Option<&N>) -> Vec<&N::Key> {
    let mut out = Vec::new();
    let mut queue: VecDeque<&N> = root.into_iter().collect();
    while let Some(node) = queue.pop_front() {
        out.push(node.key());
        queue.extend(node.left());
        queue.extend(node.right());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Leaf {
        k: i32,
        l: Option<Box<Leaf>>,
        r: Option<Box<Leaf>>,
    }

    impl BinaryNode for Leaf {
        type Key = i32;

        fn key(&self) -> &i32 {
            &self.k
        }

        fn left(&self) -> Option<&Self> {
            self.l.as_deref()
        }

        fn right(&self) -> Option<&Self> {
            self.r.as_deref()
        }
    }

    impl Drop for Leaf {
        fn drop(&mut self) {
            let mut stack: Vec<Box<Leaf>> =
                self.l.take().into_iter().chain(self.r.take()).collect();
            while let Some(mut n) = stack.pop() {
                stack.extend(n.l.take());
                stack.extend(n.r.take());
            }
        }
    }

    fn node(k: i32, l: Option<Leaf>, r: Option<Leaf>) -> Leaf {
        Leaf {
            k,
            l: l.map(Box::new),
            r: r.map(Box::new),
        }
    }

    //     4
    //   2   6
    //  1   5 7
    fn sample() -> Leaf {
        node(
            4,
            Some(node(2, Some(node(1, None, None)), None)),
            Some(node(6, Some(node(5, None, None)), Some(node(7, None, None)))),
        )
    }

    #[test]
    fn test_traversals() {
        let root = sample();
        let root = Some(&root);
        assert_eq!(pre_order(root), vec![&4, &2, &1, &6, &5, &7]);
        assert_eq!(in_order(root), vec![&1, &2, &4, &5, &6, &7]);
        assert_eq!(post_order(root), vec![&1, &2, &5, &7, &6, &4]);
        assert_eq!(level_order(root), vec![&4, &2, &6, &1, &5, &7]);
    }

    #[test]
    fn test_empty() {
        let root: Option<&Leaf> = None;
        assert!(in_order(root).is_empty());
        assert!(level_order(root).is_empty());
        assert_eq!(height(root), -1);
        assert_eq!(size(root), 0);
        assert!(first(root).is_none());
    }

    #[test]
    fn test_height_size_first_last() {
        let root = sample();
        assert_eq!(height(Some(&root)), 2);
        assert_eq!(size(Some(&root)), 6);
        assert_eq!(first(Some(&root)).map(|n| n.k), Some(1));
        assert_eq!(last(Some(&root)).map(|n| n.k), Some(7));
    }

    #[test]
    fn test_deep_spine() {
        let mut root = node(0, None, None);
        for k in 1..50_000 {
            root = node(k, None, Some(root));
        }
        let root = Some(&root);
        assert_eq!(height(root), 49_999);
        assert_eq!(size(root), 50_000);
        assert_eq!(in_order(root).first(), Some(&&0));
        assert_eq!(pre_order(root).first(), Some(&&49_999));
        assert_eq!(post_order(root).first(), Some(&&0));
    }

    #[test]
    fn test_find() {
        let root = sample();
        let cmp = |a: &i32, b: &i32| a.cmp(b);
        assert_eq!(find(Some(&root), &5, &cmp).map(|n| n.k), Some(5));
        assert!(find(Some(&root), &3, &cmp).is_none());
    }
}

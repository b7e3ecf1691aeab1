use crate::types::BinaryNode;

/// Owned child link. `None` is an empty subtree of height `-1`.
pub(crate) type Link<K> = Option<Box<AvlNode<K>>>;

/// AVL tree node.
///
/// `height` and `bf` are maintained incrementally by the insertion and
/// deletion engines; they are never recomputed from the whole subtree.
#[derive(Clone, Debug)]
pub struct AvlNode<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
    pub(crate) height: i32,
    /// Balance factor, `height(left) - height(right)`.
    pub(crate) bf: i32,
}

impl<K> AvlNode<K> {
    pub(crate) fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
            height: 0,
            bf: 0,
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn left(&self) -> Option<&AvlNode<K>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&AvlNode<K>> {
        self.right.as_deref()
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn balance_factor(&self) -> i32 {
        self.bf
    }

    /// Recomputes `height` and `bf` from the children's stored heights.
    pub(crate) fn update(&mut self) {
        let lh = link_height(&self.left);
        let rh = link_height(&self.right);
        self.height = 1 + lh.max(rh);
        self.bf = lh - rh;
    }
}

#[inline]
fn link_height<K>(link: &Link<K>) -> i32 {
    link.as_ref().map_or(-1, |n| n.height)
}

impl<K> BinaryNode for AvlNode<K> {
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

//! Self-balancing (AVL) binary search tree.

#[path = "AvlTree.rs"]
pub mod avl_tree;
pub mod types;
pub mod util;

pub use avl_tree::AvlTree;
pub use types::AvlNode;
pub use util::{assert_avl_tree, print};

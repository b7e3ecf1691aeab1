//! Plain (non-balancing) binary search tree.
//!
//! Shares the node and ordering model of [`crate::avl`] without heights or
//! balance factors. Removal of a node with two children takes the in-order
//! predecessor rather than the successor.

#[path = "Bst.rs"]
pub mod binary_search_tree;
pub mod types;
pub mod util;

pub use binary_search_tree::Bst;
pub use types::BstNode;

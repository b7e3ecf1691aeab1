//! Ordered binary search trees over exclusively owned boxed nodes.
//!
//! Two variants share one node/ordering model:
//!
//! - [`AvlTree`] keeps every node's balance factor in `{-1, 0, 1}` by
//!   recomputing height and balance factor on the unwind of each mutating
//!   call and applying at most one (single or double) rotation per ancestor.
//! - [`Bst`] is the plain, non-balancing tree with traversal helpers.
//!
//! Each child link is an `Option<Box<_>>`. There are no parent pointers:
//! mutating operations move a subtree in and return the (possibly rotated)
//! subtree root to the caller, which rewires its own child slot.
//!
//! # Examples
//!
//! ```
//! use avl_forest::{AvlTree, TreeError};
//!
//! let mut tree = AvlTree::<i32>::try_from_keys([30, 10, 20]).unwrap();
//! assert_eq!(tree.root().map(|n| *n.key()), Some(20));
//! assert_eq!(tree.height(), 1);
//!
//! assert_eq!(tree.remove(&10), Ok(10));
//! assert_eq!(tree.remove(&10), Err(TreeError::NotFound));
//! assert_eq!(tree.insert(None::<i32>), Err(TreeError::InvalidArgument("key is None")));
//! ```
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`error`] | [`TreeError`] |
//! [`types`] | [`BinaryNode`] view trait, [`Comparator`] |
//! [`util`] | Traversals, `first` / `last`, recomputed height |
//! [`print`] | Tree-dump rendering (`print_node`) |
//! [`avl`] | [`AvlNode`], rotations, insertion/deletion engines, [`AvlTree`] |
//! [`bst`] | [`BstNode`], [`Bst`] |

pub mod avl;
pub mod bst;
pub mod error;
pub mod print;
pub mod types;
pub mod util;

pub use avl::{AvlNode, AvlTree};
pub use bst::{Bst, BstNode};
pub use error::TreeError;
pub use types::{BinaryNode, Comparator};

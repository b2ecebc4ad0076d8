//! This crate exposes an owned, unbalanced Binary Search Tree of unique values.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! may have a left and a right child `Node`. The most important invariants
//! of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Because the comparisons are strict, a value appears at most once. Inserting
//! a value that is already present leaves the tree untouched.
//!
//! Searching takes `O(height)` (where `height` is the number of nodes on the
//! longest path from the root `Node` to a leaf `Node`). [`Tree`] does no
//! rebalancing, so inserting values in sorted order degrades it into a linked
//! list with `height == N`. Every traversal in this crate uses an explicit
//! stack so such trees are still safe to measure, copy, and drop.
//!
//! ```
//! use bstree::Tree;
//!
//! let mut tree: Tree<_> = [4, 2, 6, 1, 3].into_iter().collect();
//!
//! assert_eq!(tree.height(), 3);
//! assert_eq!(tree.node_count(), 5);
//! assert_eq!(tree.leaf_count(), 3);
//!
//! // 4 has two children so its predecessor, 3, takes its place.
//! tree.delete(&4);
//! assert_eq!(tree.preorder(), vec![&3, &2, &1, &6]);
//! assert!(tree.verify().is_ok());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
mod node;
pub mod tree;
mod walk;


pub use error::OrderViolation;
pub use tree::Tree;

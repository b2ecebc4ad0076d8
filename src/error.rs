//! Error types for the tree

use thiserror::Error;

/// A place where a tree breaks the BST order invariant, as reported by
/// [`Tree::verify`](crate::Tree::verify).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderViolation {
    /// A node in some ancestor's right subtree is not greater than that ancestor.
    #[error("node at depth {depth} is not greater than an ancestor it descends right from")]
    BelowLowerBound {
        /// Depth of the offending node. The root is at depth 1.
        depth: usize,
    },

    /// A node in some ancestor's left subtree is not less than that ancestor.
    #[error("node at depth {depth} is not less than an ancestor it descends left from")]
    AboveUpperBound {
        /// Depth of the offending node. The root is at depth 1.
        depth: usize,
    },
}

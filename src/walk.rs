//! Stack based pre-order traversal. Every structural metric is computed from this walk instead
//! of recursion so that a tree which has devolved into a linked list can't overflow the stack.

use crate::node::Node;

/// Visits root, then left subtree, then right subtree, yielding each node with its depth. The
/// root is at depth 1.
pub(crate) struct Preorder<'a, T> {
    stack: Vec<(&'a Node<T>, usize)>,
}

impl<'a, T> Preorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.map(|root| (root, 1)).into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for Preorder<'a, T> {
    type Item = (&'a Node<T>, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth) = self.stack.pop()?;
        // Right goes on first so left comes off first.
        self.stack.extend(node.right().map(|n| (n, depth + 1)));
        self.stack.extend(node.left().map(|n| (n, depth + 1)));
        Some((node, depth))
    }
}

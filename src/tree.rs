//! An owned, unbalanced BST of unique values. Every node exclusively owns its children so a
//! `Tree` owns its whole node graph and cloning it produces a fully independent copy.
//!
//! # Examples
//!
//! ```
//! use bstree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.is_empty());
//! assert!(!tree.search(&2));
//!
//! tree.insert(2);
//! tree.insert(1);
//! tree.insert(3);
//! assert!(tree.search(&2));
//! assert_eq!(tree.height(), 2);
//! assert_eq!(tree.node_count(), 3);
//! assert_eq!(tree.leaf_count(), 2);
//!
//! // Inserting a value that's already present does nothing.
//! assert!(!tree.insert(3));
//! assert_eq!(tree.node_count(), 3);
//!
//! // Copies don't share nodes with the original.
//! let mut copied = tree.clone();
//! copied.delete(&2);
//! assert!(tree.search(&2));
//! assert!(!copied.search(&2));
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::trace;

use crate::error::OrderViolation;
use crate::node::{self, Link, Node};
use crate::walk::Preorder;

/// A Binary Search Tree holding unique values. This can be used for inserting, searching for, and
/// deleting values. The tree never rebalances itself so its shape follows insertion order.
pub struct Tree<T> {
    root: Link<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: copy_subtree(self.root.as_deref()),
        }
    }

    /// Releases every node this tree owns and then deep-copies `source` into it.
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.root = copy_subtree(source.root.as_deref());
    }
}

/// Two trees are equal when they have the same shape and equal values in the same positions.
impl<T> PartialEq for Tree<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self.root.as_deref(), other.root.as_deref())];
        while let Some(pair) = pending.pop() {
            match pair {
                (None, None) => {}
                (Some(a), Some(b)) if a.info == b.info => {
                    pending.push((a.left(), b.left()));
                    pending.push((a.right(), b.right()));
                }
                _ => return false,
            }
        }
        true
    }
}

impl<T> Eq for Tree<T> where T: Eq {}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("preorder", &self.preorder())
            .finish()
    }
}

/// Renders the tree for debugging. One value per line, indented by depth, in pre-order. When a
/// node has a single child the missing one shows up as `-` so the shape is unambiguous.
///
/// ```text
/// 5
///   3
///   8
///     -
///     9
/// ```
impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(root) = self.root.as_deref() else {
            return writeln!(f, "(empty)");
        };

        let mut pending = vec![(Some(root), 0usize)];
        while let Some((slot, depth)) = pending.pop() {
            let indent = depth * 2;
            match slot {
                None => writeln!(f, "{:indent$}-", "")?,
                Some(node) => {
                    writeln!(f, "{:indent$}{}", "", node.info)?;
                    if !node.is_leaf() {
                        pending.push((node.right(), depth + 1));
                        pending.push((node.left(), depth + 1));
                    }
                }
            }
        }
        Ok(())
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

/// Inserts in iteration order, skipping values that are already present.
impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of nodes on the longest path from the root down to a leaf. An empty tree has a
    /// height of 0 and a tree with only a root has a height of 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), 0);
    ///
    /// // Ascending inserts build a list, not a bushy tree.
    /// tree.extend([1, 2, 3]);
    /// assert_eq!(tree.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        self.walk().map(|(_, depth)| depth).max().unwrap_or(0)
    }

    /// The number of nodes in the tree, internal nodes and leaves alike.
    pub fn node_count(&self) -> usize {
        self.walk().count()
    }

    /// The number of nodes that have no children.
    pub fn leaf_count(&self) -> usize {
        self.walk().filter(|(node, _)| node.is_leaf()).count()
    }

    /// Returns the values in pre-order (a node, then its left subtree, then its right subtree).
    /// Unlike sorted order, this captures the shape of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 4].into_iter().collect();
    /// assert_eq!(tree.preorder(), vec![&5, &3, &4, &8]);
    /// ```
    pub fn preorder(&self) -> Vec<&T> {
        self.walk().map(|(node, _)| &node.info).collect()
    }

    /// Drops every node, leaving the tree empty. Does nothing to an empty tree.
    pub fn clear(&mut self) {
        let released = self.release();
        if released > 0 {
            trace!(released, "cleared tree");
        }
    }

    /// Returns `true` if the tree contains `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.search(&1));
    /// assert!(!tree.search(&42));
    /// ```
    pub fn search(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match value.cmp(&node.info) {
                Ordering::Less => node.left(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right(),
            };
        }
        false
    }

    /// Adds `value` as a new leaf. If the tree already contains an equal value nothing happens:
    /// the existing value is kept and `false` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.node_count(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        node::attach(&mut self.root, value)
    }

    /// Deletes the node holding `value`, returning whether there was one. A node with two children
    /// is replaced by its in-order predecessor.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert!(tree.delete(&2));
    /// assert!(!tree.search(&2));
    /// assert_eq!(tree.preorder(), vec![&1, &3]);
    ///
    /// // Deleting something that isn't there is a no-op.
    /// assert!(!tree.delete(&42));
    /// ```
    pub fn delete(&mut self, value: &T) -> bool
    where
        T: Ord,
    {
        let slot = node::locate(&mut self.root, value);
        let Some(target) = slot.take() else {
            trace!("value not present, skipping delete");
            return false;
        };
        *slot = target.unlink();
        if let Some(replacement) = slot.as_deref() {
            replacement.check_children();
        }
        true
    }

    /// Checks the BST order invariant over the whole tree: everything in a node's left subtree is
    /// less than it and everything in its right subtree is greater. Trees built through this API
    /// always pass.
    pub fn verify(&self) -> Result<(), OrderViolation>
    where
        T: Ord,
    {
        // Each node carries the exclusive bounds its ancestors impose on it.
        let mut pending: Vec<(&Node<T>, Option<&T>, Option<&T>, usize)> = self
            .root
            .as_deref()
            .map(|root| (root, None, None, 1))
            .into_iter()
            .collect();

        while let Some((node, lower, upper, depth)) = pending.pop() {
            if lower.is_some_and(|lower| node.info <= *lower) {
                return Err(OrderViolation::BelowLowerBound { depth });
            }
            if upper.is_some_and(|upper| node.info >= *upper) {
                return Err(OrderViolation::AboveUpperBound { depth });
            }
            pending.extend(
                node.right()
                    .map(|right| (right, Some(&node.info), upper, depth + 1)),
            );
            pending.extend(
                node.left()
                    .map(|left| (left, lower, Some(&node.info), depth + 1)),
            );
        }
        Ok(())
    }

    fn walk(&self) -> Preorder<'_, T> {
        Preorder::new(self.root.as_deref())
    }

    /// Drops every node one at a time, returning how many there were. Letting `Box` drop the root
    /// would recurse once per level.
    fn release(&mut self) -> usize {
        let mut released = 0;
        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
            released += 1;
        }
        released
    }
}

/// Deep-copies the subtree rooted at `source`, node for node, so the copy has exactly the same
/// shape.
fn copy_subtree<T>(source: Option<&Node<T>>) -> Link<T>
where
    T: Clone,
{
    let mut root = None;
    {
        let mut pending: Vec<(&Node<T>, &mut Link<T>)> = Vec::new();
        if let Some(source) = source {
            pending.push((source, &mut root));
        }

        while let Some((source, slot)) = pending.pop() {
            let copy = slot.insert(Node::new_boxed(source.info.clone()));
            let Node { left, right, .. } = &mut **copy;
            pending.extend(source.left().map(|source| (source, left)));
            pending.extend(source.right().map(|source| (source, right)));
        }
    }
    root
}

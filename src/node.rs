use std::cmp::Ordering;

use tracing::trace;

/// A child slot (or the tree's root slot). `None` is the empty pointer at the bottom of a
/// subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) info: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn new_boxed(info: T) -> Box<Self> {
        Box::new(Node {
            info,
            left: None,
            right: None,
        })
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// In debug builds, asserts that this node sorts between its immediate children. Mutations
    /// call this on the node they touched instead of re-verifying the whole tree.
    pub(crate) fn check_children(&self)
    where
        T: Ord,
    {
        if cfg!(debug_assertions) {
            if let Some(left) = self.left() {
                assert!(self.info > left.info, "left child is not less than its parent");
            }
            if let Some(right) = self.right() {
                assert!(self.info < right.info, "right child is not greater than its parent");
            }
        }
    }

    /// Removes this node from its subtree and returns whatever should take its place in the
    /// parent's link.
    ///
    /// With two children we promote this node's predecessor. That is, the largest node in this
    /// node's left subtree. Its value moves up into `self` and its own left child (it can't have a
    /// right child) is spliced into the slot it leaves behind.
    pub(crate) fn unlink(mut self: Box<Self>) -> Link<T>
    where
        T: Ord,
    {
        match (self.left.take(), self.right.take()) {
            (None, None) => {
                trace!("deleting leaf node");
                None
            }
            (Some(child), None) | (None, Some(child)) => {
                trace!("deleting node with one child");
                Some(child)
            }
            (Some(left), Some(right)) => {
                trace!("deleting node with two children, promoting predecessor");
                self.left = Some(left);
                self.right = Some(right);

                let slot = rightmost(&mut self.left);
                if let Some(predecessor) = slot.take() {
                    let Node { info, left, .. } = *predecessor;
                    *slot = left;
                    self.info = info;
                }
                self.check_children();
                Some(self)
            }
        }
    }
}

/// Walks down from `link` and hangs `value` off the first empty child slot on its path. Returns
/// `false` without touching anything if an equal value is found on the way.
pub(crate) fn attach<T>(mut link: &mut Link<T>, value: T) -> bool
where
    T: Ord,
{
    while let Some(node) = link {
        let ordering = value.cmp(&node.info);
        let child_is_none = match ordering {
            Ordering::Less => node.left.is_none(),
            Ordering::Equal => {
                trace!("value already present, skipping insert");
                return false;
            }
            Ordering::Greater => node.right.is_none(),
        };
        if child_is_none {
            let child = match ordering {
                Ordering::Less => &mut node.left,
                _ => &mut node.right,
            };
            *child = Some(Node::new_boxed(value));
            node.check_children();
            return true;
        }
        link = match ordering {
            Ordering::Less => &mut node.left,
            _ => &mut node.right,
        };
    }
    *link = Some(Node::new_boxed(value));
    true
}

/// Walks down from `link` to the slot that holds `value`, or to the empty slot where `value`
/// would be attached if it isn't in the subtree.
pub(crate) fn locate<'a, T>(mut link: &'a mut Link<T>, value: &T) -> &'a mut Link<T>
where
    T: Ord,
{
    loop {
        let ordering = link.as_deref().map(|node| value.cmp(&node.info));
        link = match (ordering, link) {
            (Some(Ordering::Less), Some(node)) => &mut node.left,
            (Some(Ordering::Greater), Some(node)) => &mut node.right,
            (_, link) => return link,
        };
    }
}

/// Walks right from `link` until reaching a node with no right child and returns the slot
/// holding that node. Returns `link` itself when it is empty.
fn rightmost<T>(mut link: &mut Link<T>) -> &mut Link<T> {
    loop {
        let descend = link.as_ref().is_some_and(|node| node.right.is_some());
        link = match (descend, link) {
            (true, Some(node)) => &mut node.right,
            (_, link) => return link,
        };
    }
}

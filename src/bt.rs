// SPDX-License-Identifier: MPL-2.0

//! Types for defining binary trees.
//!
//! ## Properties:
//! - Binary tree: nodes have either 0, 1, or 2 child nodes.
//! - Owned: every node exclusively owns its subtrees, so a tree is a strict
//!   hierarchy with no sharing and no cycles.
//! - Encodable: a tree can be converted to and from its textual level-order
//!   encoding; see [`crate::levelorder`] and [`crate::codec`].
//!
//! ## Traversal
//! [`BinaryTree::level_order`] lists the tree's slots breadth-first, root
//! first, with an explicit absent marker for every empty child slot of a
//! present node. This is the traversal the textual codec renders.
//! [`BinaryTree::normalized_level_order`] additionally lists the child
//! slots below absent slots, reproducing the normalized form of the
//! encoding.
//!
//! ## Example
//! This binary tree can be created with the following code:
//!
//! ```txt
//!        1
//!      /   \
//!     2     3
//!    / \
//!   4   5
//! ```
//!
//! ```
//! use treecodec::bt::{BinaryTree, Node};
//!
//! let mut root = Node::new(1);
//! let mut left = Node::new(2);
//! left.left = Some(Box::new(Node::new(4)));
//! left.right = Some(Box::new(Node::new(5)));
//! root.left = Some(Box::new(left));
//! root.right = Some(Box::new(Node::new(3)));
//! let tree = BinaryTree::from_root(root);
//! assert_eq!(tree.values().count(), 5);
//! ```

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// An owned, possibly empty subtree.
pub type SubTree<V> = Option<Box<Node<V>>>;

/// Represents a node of a binary tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node<V> {
    /// The value stored in this node.
    pub value: V,
    /// Left subtree.
    pub left: SubTree<V>,
    /// Right subtree.
    pub right: SubTree<V>,
}

impl<V> Node<V> {
    /// Creates a leaf node holding `value`.
    pub fn new(value: V) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Returns true if both child slots are empty.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Represents a binary tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryTree<V> {
    /// The root of the tree, absent for the empty tree.
    pub root: SubTree<V>,
}

impl<V> BinaryTree<V> {
    /// Creates a tree from its root node.
    pub fn from_root(root: Node<V>) -> Self {
        Self {
            root: Some(Box::new(root)),
        }
    }

    /// Returns true if the tree holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Lists the tree's slots in level order, root first.
    ///
    /// The two child slots of every present node are listed, absent ones as
    /// `None`; absent slots contribute nothing below themselves. Trailing
    /// absent slots are trimmed, so the last entry always holds a value.
    /// This is the compact listing the textual codec renders, and the empty
    /// tree produces an empty listing.
    pub fn level_order(&self) -> Vec<Option<&V>> {
        let mut out = Vec::new();
        let mut queue: VecDeque<Option<&Node<V>>> = VecDeque::new();
        queue.push_back(self.root.as_deref());

        while let Some(slot) = queue.pop_front() {
            match slot {
                Some(node) => {
                    out.push(Some(&node.value));
                    queue.push_back(node.left.as_deref());
                    queue.push_back(node.right.as_deref());
                }
                None => out.push(None),
            }
        }

        while let Some(None) = out.last() {
            out.pop();
        }

        out
    }

    /// Lists the tree's slots in level order with every level complete
    /// relative to its parent level.
    ///
    /// Unlike [`Self::level_order`], an absent slot contributes two absent
    /// child slots to the next level, so each level is listed at its full
    /// width as long as it holds at least one value. The listing equals the
    /// tree's normalized level-order sequence with trailing absent slots
    /// trimmed.
    pub fn normalized_level_order(&self) -> Vec<Option<&V>> {
        let mut out = Vec::new();
        let mut level: Vec<Option<&Node<V>>> = vec![self.root.as_deref()];

        while level.iter().any(Option::is_some) {
            let mut next = Vec::with_capacity(level.len() * 2);
            for slot in level {
                match slot {
                    Some(node) => {
                        out.push(Some(&node.value));
                        next.push(node.left.as_deref());
                        next.push(node.right.as_deref());
                    }
                    None => {
                        out.push(None);
                        next.push(None);
                        next.push(None);
                    }
                }
            }
            level = next;
        }

        while let Some(None) = out.last() {
            out.pop();
        }

        out
    }

    /// Visits the tree's values breadth-first, skipping absent slots.
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        let mut queue: VecDeque<&Node<V>> = VecDeque::new();
        queue.extend(self.root.as_deref());

        std::iter::from_fn(move || {
            let node = queue.pop_front()?;
            queue.extend(node.left.as_deref());
            queue.extend(node.right.as_deref());
            Some(&node.value)
        })
    }
}

impl<V> Default for BinaryTree<V> {
    fn default() -> Self {
        Self {
            root: Option::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BinaryTree, Node, SubTree};

    fn node(value: u32, left: SubTree<u32>, right: SubTree<u32>) -> SubTree<u32> {
        Some(Box::new(Node { value, left, right }))
    }

    fn leaf(value: u32) -> SubTree<u32> {
        node(value, None, None)
    }

    #[test]
    fn empty_tree() {
        let tree = BinaryTree::<u32>::default();
        assert!(tree.is_empty());
        assert!(tree.level_order().is_empty());
        assert!(tree.normalized_level_order().is_empty());
        assert_eq!(tree.values().count(), 0);
    }

    #[test]
    fn leaf_nodes() {
        let mut node = Node::new(7);
        assert!(node.is_leaf());
        node.right = Some(Box::new(Node::new(8)));
        assert!(!node.is_leaf());
    }

    #[test]
    fn level_order_trims_trailing_slots() {
        let tree = BinaryTree {
            root: node(1, leaf(2), None),
        };
        assert_eq!(tree.level_order(), [Some(&1), Some(&2)]);
    }

    #[test]
    fn level_order_skips_slots_below_absent_slots() {
        let tree = BinaryTree {
            root: node(1, None, node(3, leaf(4), None)),
        };
        assert_eq!(tree.level_order(), [Some(&1), None, Some(&3), Some(&4)]);
    }

    #[test]
    fn normalized_level_order_keeps_interior_slots() {
        // The absent slot ahead of 3 contributes two child slots of its own
        // at the next level, keeping 4 aligned under 3.
        let tree = BinaryTree {
            root: node(1, None, node(3, leaf(4), None)),
        };
        assert_eq!(
            tree.normalized_level_order(),
            [Some(&1), None, Some(&3), None, None, Some(&4)]
        );
    }

    #[test]
    fn breadth_first_values() {
        let tree = BinaryTree {
            root: node(1, node(2, leaf(4), leaf(5)), leaf(3)),
        };
        let values: Vec<u32> = tree.values().copied().collect();
        assert_eq!(values, [1, 2, 3, 4, 5]);
    }
}

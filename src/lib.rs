// SPDX-License-Identifier: MPL-2.0

#![warn(missing_docs)]

//! Treecodec
//!
//! Level-order text codec for binary trees. A tree is written as one
//! comma-separated line listing its slots breadth-first, root first, with
//! the literal marker `null` for an absent child:
//!
//! ```
//! use treecodec::bt::BinaryTree;
//!
//! let tree: BinaryTree<i64> = "3,9,20,null,null,15,7".parse()?;
//! assert_eq!(tree.root.as_ref().unwrap().value, 3);
//! assert_eq!(tree.to_string(), "3,9,20,null,null,15,7");
//! # Ok::<(), treecodec::levelorder::LevelOrderError>(())
//! ```
//!
//! Encodings may omit the placeholders below an absent subtree entirely;
//! decoding restores them before building the tree, so 13 lands below 14
//! here rather than below the absent slot:
//!
//! ```
//! use treecodec::bt::BinaryTree;
//!
//! let tree: BinaryTree<i64> = "8,3,10,1,6,null,14,null,null,4,7,13".parse()?;
//! let right = tree.root.as_ref().unwrap().right.as_ref().unwrap();
//! let inner = right.right.as_ref().unwrap();
//! assert_eq!(inner.value, 14);
//! assert_eq!(inner.left.as_ref().unwrap().value, 13);
//! # Ok::<(), treecodec::levelorder::LevelOrderError>(())
//! ```

pub mod bt;
pub mod codec;
pub mod levelorder;

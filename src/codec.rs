// SPDX-License-Identifier: MPL-2.0

//! Support for encoding and decoding binary trees to and from their textual
//! level-order encoding.
//!
//! The encoding is a single comma-separated line listing the tree's slots in
//! level order, root first, with the literal marker `null` for an absent
//! slot:
//!
//! ```txt
//! 3,5,1,6,7,4,2,null,null,null,null,null,null,9,8
//!
//!             3
//!        5           1
//!     6     7     4     2
//!                      9  8
//! ```
//!
//! [`tokenize`] converts the line into a sequence of optional values.
//! [`BinaryTree`]'s [`FromStr`] and [`Display`] implementations run the full
//! pipeline in each direction; decoding also accepts encodings that omit the
//! `null` placeholders below absent subtrees (see [`crate::levelorder`]).

use std::{
    fmt::{self, Display, Formatter},
    num::ParseIntError,
    str::FromStr,
};

use crate::{
    bt::BinaryTree,
    levelorder::{self, LevelOrderError},
};

/// The textual marker for an absent slot.
pub const NULL_TOKEN: &str = "null";

/// Errors triggered when tokenizing an encoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CodecError {
    /// A token is neither a base-10 integer nor the `null` marker.
    #[error("invalid token {token:?}")]
    InvalidToken {
        /// The offending token, verbatim.
        token: String,
        /// The integer parse failure for the token.
        source: ParseIntError,
    },
}

/// Splits an encoding into its sequence of optional values.
///
/// Tokens are separated by commas; the exact token `null` marks an absent
/// slot and anything else must parse as a base-10 integer. Tokens are not
/// trimmed, so incidental whitespace is a parse failure.
pub fn tokenize(input: &str) -> Result<Vec<Option<i64>>, CodecError> {
    input
        .split(',')
        .map(|token| {
            if token == NULL_TOKEN {
                return Ok(None);
            }
            token
                .parse()
                .map(Some)
                .map_err(|source| CodecError::InvalidToken {
                    token: token.to_string(),
                    source,
                })
        })
        .collect()
}

impl FromStr for BinaryTree<i64> {
    type Err = LevelOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        levelorder::decode(s)
    }
}

impl<V: Display> Display for BinaryTree<V> {
    /// Renders the tree's compact level-order encoding: placeholders below
    /// absent subtrees and trailing `null` markers are omitted, so parsing
    /// the rendering yields the tree back. The empty tree renders as the
    /// empty string.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.level_order().iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            match slot {
                Some(value) => value.fmt(f)?,
                None => f.write_str(NULL_TOKEN)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::{tokenize, CodecError};
    use crate::bt::{BinaryTree, Node};

    #[test]
    fn tokenize_values_and_nulls() {
        assert_eq!(tokenize("1,2,3").unwrap(), [Some(1), Some(2), Some(3)]);
        assert_eq!(
            tokenize("1,null,2,null,3,null,4,null,5").unwrap(),
            [
                Some(1),
                None,
                Some(2),
                None,
                Some(3),
                None,
                Some(4),
                None,
                Some(5)
            ],
        );
    }

    #[test]
    fn tokenize_negative_values() {
        assert_eq!(tokenize("-7,null,0").unwrap(), [Some(-7), None, Some(0)]);
    }

    #[test]
    fn tokenize_rejects_padded_null() {
        let err = tokenize("1, null,null").unwrap_err();
        assert_matches!(err, CodecError::InvalidToken { token, .. } => {
            assert_eq!(token, " null");
        });
    }

    #[test]
    fn tokenize_rejects_empty_input() {
        // Splitting the empty string yields one empty token.
        assert_matches!(tokenize(""), Err(CodecError::InvalidToken { .. }));
    }

    #[test]
    fn display_round_trip() {
        let tree: BinaryTree<i64> = "1,null,2".parse().unwrap();
        assert_eq!(tree.to_string(), "1,null,2");
    }

    #[test]
    fn display_hand_built_tree() {
        let mut root = Node::new(1);
        root.left = Some(Box::new(Node::new(2)));
        let tree = BinaryTree::from_root(root);
        assert_eq!(tree.to_string(), "1,2");
        assert_eq!(BinaryTree::<i64>::default().to_string(), "");
    }
}

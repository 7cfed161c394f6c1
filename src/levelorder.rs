// SPDX-License-Identifier: MPL-2.0

//! Decoding level-order sequences into binary trees.
//!
//! A level-order encoding lists a tree's slots breadth-first with explicit
//! absent markers, but a "short" encoding may omit the markers below an
//! absent subtree entirely:
//!
//! ```txt
//! 8,3,10,1,6,null,14,null,null,4,7,13
//! ```
//!
//! Here 13 belongs to the fourth level, but the two slots below the absent
//! entry of the third level were never written, so by position alone 13
//! would land under the wrong parent. [`normalize`] reinserts the omitted
//! markers:
//!
//! ```txt
//! 8,3,10,1,6,null,14,null,null,4,7,null,null,13
//! ```
//!
//! and [`reconstruct`] folds the corrected sequence into a tree by pairing
//! each level's entries under the entries of the level above. [`decode`]
//! runs tokenizing, normalization and reconstruction in sequence.

use crate::{
    bt::{BinaryTree, Node, SubTree},
    codec::{self, CodecError},
};

/// Errors triggered when decoding a level-order sequence.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LevelOrderError {
    /// The root slot of the sequence is absent.
    #[error("wrong root value")]
    MalformedTree,
    /// The encoding could not be tokenized.
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Decodes a textual level-order encoding into a binary tree.
///
/// # Errors
/// - [`LevelOrderError::Codec`] when a token is neither a base-10 integer
///   nor the `null` marker.
/// - [`LevelOrderError::MalformedTree`] when the first token is the `null`
///   marker.
///
/// No partial tree is ever returned on error.
pub fn decode(input: &str) -> Result<BinaryTree<i64>, LevelOrderError> {
    let mut seq = codec::tokenize(input)?;

    // Root presence is normalize's precondition, not merely reconstruct's:
    // an absent root followed by data would make normalize grow the
    // sequence without bound.
    if !matches!(seq.first(), Some(Some(_))) {
        return Err(LevelOrderError::MalformedTree);
    }

    normalize(&mut seq);
    reconstruct(seq)
}

/// Completes a level-order sequence in place.
///
/// For every absent entry whose two child slots were omitted even though
/// the sequence extends past their position, two absent entries are
/// inserted there, shifting the remainder right. Each insertion shifts
/// every later index, so the scan restarts just past the entry that
/// triggered it. Omitted slots that would sit past the end of the sequence
/// are left implicit, so a sequence that needs no insertions is returned
/// unchanged.
///
/// The input must be a compact encoding: an absent entry is taken to have
/// no explicitly written child slots. The caller must also ensure the
/// sequence is non-empty with a present first entry; [`decode`] checks
/// this before calling.
pub fn normalize<V>(seq: &mut Vec<Option<V>>) {
    let mut pos = 0;
    let mut level = 0;

    'scan: loop {
        // First slot and width of `level` in a fully populated encoding.
        let mut level_start = (1 << level) - 1;
        let mut level_width = 1 << level;

        let mut i = pos;
        while i < seq.len() {
            if seq[i].is_none() {
                let child_pos = level_start + level_width + (i - level_start) * 2;
                if seq.len() <= child_pos {
                    // Everything from here on fits before the omitted
                    // slots, so they can stay implicit.
                    return;
                }
                seq.insert(child_pos, None);
                seq.insert(child_pos, None);
                pos = i + 1;
                continue 'scan;
            }
            if i - level_start == level_width {
                level_start = i;
                level_width *= 2;
                level += 1;
            }
            i += 1;
        }
        return;
    }
}

/// Folds a normalized level-order sequence into a binary tree.
///
/// The sequence is partitioned into levels, level `k` consuming up to `2^k`
/// entries and consuming fewer only at the final level. Nodes are then
/// built bottom-up: the present entry at index `j` of a level takes
/// ownership of the subtrees built at indices `2j` and `2j + 1` of the
/// level below (absent when out of range), and absent entries produce no
/// node. Every present entry maps to exactly one node.
///
/// # Errors
/// [`LevelOrderError::MalformedTree`] when the sequence is empty or its
/// root slot is absent.
pub fn reconstruct<V>(seq: Vec<Option<V>>) -> Result<BinaryTree<V>, LevelOrderError> {
    if !matches!(seq.first(), Some(Some(_))) {
        return Err(LevelOrderError::MalformedTree);
    }

    let mut levels = Vec::new();
    let mut entries = seq.into_iter();
    let mut width = 1;
    loop {
        let level: Vec<Option<V>> = entries.by_ref().take(width).collect();
        if level.is_empty() {
            break;
        }
        levels.push(level);
        width *= 2;
    }

    let mut below: Vec<SubTree<V>> = Vec::new();
    for level in levels.into_iter().rev() {
        let mut built = Vec::with_capacity(level.len());
        for (index, entry) in level.into_iter().enumerate() {
            let subtree = match entry {
                Some(value) => {
                    let left = below.get_mut(index * 2).and_then(Option::take);
                    let right = below.get_mut(index * 2 + 1).and_then(Option::take);
                    Some(Box::new(Node { value, left, right }))
                }
                None => {
                    // Only reachable on input that skipped normalization.
                    debug_assert!(
                        below.get(index * 2).map_or(true, Option::is_none)
                            && below.get(index * 2 + 1).map_or(true, Option::is_none),
                        "absent slot with live children at index {index}",
                    );
                    None
                }
            };
            built.push(subtree);
        }
        below = built;
    }

    let root = below.into_iter().next().flatten();
    Ok(BinaryTree { root })
}

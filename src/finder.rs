//! Minimum-leaf scan and path reconstruction
//!
//! Two passes over the implicit tree: a linear scan that classifies every
//! position and tracks the lowest-valued leaf, then an upward walk from the
//! winning index emitting one direction per edge.

use tracing::debug;

use crate::tree::{self, Direction, LeafPath, LevelOrderTree};
use crate::TreeError;

/// Winning leaf of a minimum scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinLeaf {
    /// Position of the leaf in the level-order sequence
    pub index: usize,

    /// Value stored at that position
    pub value: i64,
}

/// Find the lowest-valued leaf of a level-order sequence
///
/// Internal positions are skipped entirely, even when their values are
/// smaller than every leaf. Comparison is strict less-than: on ties the
/// lowest-indexed leaf wins, and later leaves of equal value never override
/// an earlier find. Returns `None` only for the empty sequence.
pub fn min_leaf(values: &[i64]) -> Option<MinLeaf> {
    let tree = LevelOrderTree::new(values);
    let mut best: Option<MinLeaf> = None;

    for (index, value) in tree.leaves() {
        let better = match best {
            Some(current) => value < current.value,
            None => true,
        };
        if better {
            best = Some(MinLeaf { index, value });
        }
    }

    best
}

/// Root-to-leaf directions for an explicit leaf position
///
/// Rejects positions outside the sequence and positions that still have a
/// child within bounds.
pub fn path_to_leaf(values: &[i64], index: usize) -> Result<LeafPath, TreeError> {
    let len = values.len();
    if index >= len {
        return Err(TreeError::IndexOutOfBounds { index, len });
    }
    if !tree::is_leaf(index, len) {
        return Err(TreeError::NotALeaf { index, len });
    }

    Ok(build_path(index))
}

/// Path from the root to the lowest-valued leaf
///
/// Empty and single-element sequences yield the empty path (no edge to
/// descend). Otherwise the result reads root-to-leaf and its length equals
/// the depth of the winning leaf.
pub fn lowest_value_leaf_path(values: &[i64]) -> LeafPath {
    let found = match min_leaf(values) {
        Some(found) => found,
        None => return LeafPath::new(),
    };
    debug!(index = found.index, value = found.value, "minimum leaf located");

    build_path(found.index)
}

/// Upward walk from `index` to the root
///
/// Each step classifies the current position against its parent:
/// left child when i == 2p + 1, right child otherwise. Directions are
/// collected leaf-to-root and reversed once.
fn build_path(mut index: usize) -> LeafPath {
    let mut path = LeafPath::new();

    while index > 0 {
        let parent = tree::parent(index);
        if index == tree::left_child(parent) {
            path.push(Direction::Left);
        } else {
            path.push(Direction::Right);
        }
        index = parent;
    }

    path.reverse();
    path
}

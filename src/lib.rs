//! # Minimum-Leaf Path Finding
//!
//! This library locates the lowest-valued leaf of a binary tree stored as a
//! flat level-order array and reports the root-to-leaf path as Left/Right
//! directions.
//!
//! ## Core Algorithm
//!
//! 1. **Leaf scan**: classify every position by index arithmetic alone and
//!    track the minimum leaf value (strict `<`, so the lowest index wins ties)
//! 2. **Upward reconstruction**: walk parent links `(i - 1) / 2` from the
//!    winning leaf, emitting one direction per edge, then reverse once
//!
//! No tree is ever materialized: positions and the relations `2i + 1`,
//! `2i + 2`, `(i - 1) / 2` stand in for child and parent links.
//!
//! ## Usage Example
//!
//! ```
//! use leafpath::lowest_value_leaf_path;
//!
//! let values = [0, 4, 2, 5, 0, 9, 7, 9, -4, 2, -5, 3, 9, 1, -11];
//! let path = lowest_value_leaf_path(&values);
//! assert_eq!(path.to_string(), "RRR");
//! ```

#![warn(missing_docs, missing_debug_implementations)]

// Core modules
pub mod finder; // Minimum-leaf scan and path reconstruction
pub mod tree; // Implicit level-order tree arithmetic

// Re-exports for convenience
pub use finder::{lowest_value_leaf_path, min_leaf, path_to_leaf, MinLeaf};
pub use tree::{Direction, LeafPath, LevelOrderTree};

use thiserror::Error;

/// Errors raised by path construction and parsing
///
/// The main scan entry point is infallible; these cover the explicit-index
/// and text boundaries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// Requested position lies outside the value sequence
    #[error("index {index} is out of bounds for a tree of {len} values")]
    IndexOutOfBounds {
        /// Requested position
        index: usize,
        /// Number of values in the sequence
        len: usize,
    },

    /// Requested position has at least one child within bounds
    #[error("index {index} is not a leaf in a tree of {len} values")]
    NotALeaf {
        /// Requested position
        index: usize,
        /// Number of values in the sequence
        len: usize,
    },

    /// A rendered path contained a character other than `L` or `R`
    #[error("invalid direction character {found:?}, expected 'L' or 'R'")]
    InvalidDirection {
        /// Offending character
        found: char,
    },
}

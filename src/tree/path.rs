//! Root-to-leaf path representation
//!
//! Paths are built leaf-to-root during the upward walk and reversed once,
//! so the final sequence always reads root-to-leaf. Rendering concatenates
//! one symbol per edge with no separators; the empty path renders as "".

use std::fmt;
use std::str::FromStr;

use crate::TreeError;

/// Which child an edge descends into (1 bit of information)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Step into the left child (position 2i + 1)
    Left,

    /// Step into the right child (position 2i + 2)
    Right,
}

impl Direction {
    /// Symbol character: `L` or `R`
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }

    /// Parse a symbol character
    pub fn from_symbol(ch: char) -> Result<Self, TreeError> {
        match ch {
            'L' => Ok(Direction::Left),
            'R' => Ok(Direction::Right),
            found => Err(TreeError::InvalidDirection { found }),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Direction sequence from the root to a target leaf
///
/// Empty for the root itself. Length equals the target's depth.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct LeafPath {
    steps: Vec<Direction>,
}

impl LeafPath {
    /// Create an empty path
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a direction at the leaf end
    pub fn push(&mut self, direction: Direction) {
        self.steps.push(direction);
    }

    /// Flip the sequence in place
    ///
    /// Upward walks collect directions leaf-to-root; one reversal at the
    /// end restores root-to-leaf order.
    pub fn reverse(&mut self) {
        self.steps.reverse();
    }

    /// Number of edges on the path
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True for the zero-edge path (root to itself)
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Iterate directions root-to-leaf
    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        self.steps.iter().copied()
    }

    /// Directions as a slice, root-to-leaf
    pub fn as_slice(&self) -> &[Direction] {
        &self.steps
    }
}

impl From<Vec<Direction>> for LeafPath {
    fn from(steps: Vec<Direction>) -> Self {
        Self { steps }
    }
}

impl fmt::Display for LeafPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            write!(f, "{}", step.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for LeafPath {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut steps = Vec::with_capacity(s.len());
        for ch in s.chars() {
            steps.push(Direction::from_symbol(ch)?);
        }
        Ok(Self { steps })
    }
}

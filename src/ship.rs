//! Ship orientation, rosters and placement records.

use crate::common::{Coord, EngineError};

/// Orientation of a ship on the board. Horizontal extends along columns,
/// vertical along rows; the anchor is always the top-left occupied cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The cell `i` steps along the ship from `(row, col)`.
    pub fn step(self, row: usize, col: usize, i: usize) -> Coord {
        match self {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        }
    }
}

/// An ordered list of ship lengths. A ship's identity is its index in the
/// roster, so two ships of equal length stay distinct.
///
/// Lengths are validated once at construction; the pure queries downstream
/// never re-check them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    lengths: Vec<usize>,
}

impl Roster {
    /// Build a roster, rejecting zero-length ships.
    pub fn new(lengths: Vec<usize>) -> Result<Self, EngineError> {
        if lengths.iter().any(|&l| l == 0) {
            return Err(EngineError::ZeroLengthShip);
        }
        Ok(Roster { lengths })
    }

    pub(crate) fn from_checked(lengths: Vec<usize>) -> Self {
        Roster { lengths }
    }

    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    /// Iterate (ship_id, length) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.lengths.iter().copied().enumerate()
    }
}

/// One ship committed to the board by the placement search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub length: usize,
    pub ship_id: usize,
    pub orientation: Orientation,
}

impl Placement {
    /// Cells occupied by this placement, anchor first.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.length).map(|i| self.orientation.step(self.row, self.col, i))
    }
}

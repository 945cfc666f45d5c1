//! Board model: cell vocabulary, the rectangular grid and placement
//! validity queries.

use crate::common::{Coord, EngineError};
use crate::ship::{Orientation, Roster};

/// State of a single board cell.
///
/// `Ship(id)` only ever appears on the owning board; opponent boards reach
/// the engine already masked, with unsunk segments shown as `Empty` or
/// `Hit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    Empty,
    Miss,
    Hit,
    /// Resolved segment of a sunk ship, tagged with the ship's identity.
    Sunk(usize),
    /// Impassable terrain; never holds a ship.
    Land,
    /// Unsunk own-ship segment.
    Ship(usize),
}

/// A rectangular grid of cells. Dimensions are fixed at construction but
/// arbitrary; nothing in the engine assumes a square or a particular size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an all-empty board.
    pub fn new(rows: usize, cols: usize) -> Self {
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    /// Build a board from row-major cell data, rejecting ragged input.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, EngineError> {
        let n_cols = rows.first().map_or(0, |r| r.len());
        if rows.iter().any(|r| r.len() != n_cols) {
            return Err(EngineError::RaggedBoard);
        }
        let n_rows = rows.len();
        let cells = rows.into_iter().flatten().collect();
        Ok(Board {
            rows: n_rows,
            cols: n_cols,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell at (row, col), or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Overwrite a cell. Returns `false` (no change) when out of bounds.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        if row < self.rows && col < self.cols {
            self.cells[row * self.cols + col] = cell;
            true
        } else {
            false
        }
    }

    /// Iterate all coordinates in row-major scan order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.rows).flat_map(move |r| (0..self.cols).map(move |c| (r, c)))
    }

    /// All empty coordinates in scan order.
    pub fn empty_coords(&self) -> Vec<Coord> {
        self.coords()
            .filter(|&(r, c)| self.get(r, c) == Some(Cell::Empty))
            .collect()
    }

    /// Whether any unresolved hit cell is on the board.
    pub fn contains_hit(&self) -> bool {
        self.cells.iter().any(|&c| c == Cell::Hit)
    }

    /// Whether the board contains land cells.
    pub fn has_land(&self) -> bool {
        self.cells.iter().any(|&c| c == Cell::Land)
    }

    /// Count of cells shot at: (hits, misses). Sunk segments count as hits.
    pub fn shot_census(&self) -> (usize, usize) {
        let mut hits = 0;
        let mut misses = 0;
        for &c in &self.cells {
            match c {
                Cell::Hit | Cell::Sunk(_) => hits += 1,
                Cell::Miss => misses += 1,
                _ => {}
            }
        }
        (hits, misses)
    }

    /// Recompute the afloat sub-roster: ships whose identity appears in a
    /// `Sunk` cell are dropped. The engine never mutates a roster itself;
    /// callers feed the afloat roster back in each turn.
    pub fn afloat(&self, full: &Roster) -> Roster {
        let mut sunk = vec![false; full.len()];
        for &c in &self.cells {
            if let Cell::Sunk(id) = c {
                if id < sunk.len() {
                    sunk[id] = true;
                }
            }
        }
        let lengths = full
            .iter()
            .filter(|&(id, _)| !sunk[id])
            .map(|(_, len)| len)
            .collect();
        Roster::from_checked(lengths)
    }

    fn span_fits(
        &self,
        row: usize,
        col: usize,
        length: usize,
        orientation: Orientation,
        accept: impl Fn(Cell) -> bool,
    ) -> bool {
        let (end_r, end_c) = orientation.step(row, col, length - 1);
        if end_r >= self.rows || end_c >= self.cols {
            return false;
        }
        (0..length).all(|i| {
            let (r, c) = orientation.step(row, col, i);
            accept(self.cells[r * self.cols + c])
        })
    }

    /// Whether a ship of `length` anchored at (row, col) fits entirely on
    /// empty cells. Out-of-bounds spans return `false`, never an error.
    pub fn can_place(&self, row: usize, col: usize, length: usize, orientation: Orientation) -> bool {
        length > 0 && self.span_fits(row, col, length, orientation, |c| c == Cell::Empty)
    }

    /// Placement validity that also accepts hit cells, for hypotheses that
    /// must stay consistent with already-observed hits.
    pub fn can_place_over_hits(
        &self,
        row: usize,
        col: usize,
        length: usize,
        orientation: Orientation,
    ) -> bool {
        length > 0
            && self.span_fits(row, col, length, orientation, |c| {
                c == Cell::Empty || c == Cell::Hit
            })
    }

    /// Write `ship_id` across the span if it fits on empty cells.
    /// Returns `false` with no mutation otherwise.
    pub fn deploy(
        &mut self,
        row: usize,
        col: usize,
        length: usize,
        orientation: Orientation,
        ship_id: usize,
    ) -> bool {
        if !self.can_place(row, col, length, orientation) {
            return false;
        }
        for i in 0..length {
            let (r, c) = orientation.step(row, col, i);
            self.cells[r * self.cols + c] = Cell::Ship(ship_id);
        }
        true
    }

    /// Clear a previously deployed span back to empty. The caller supplies
    /// the known anchor, length and orientation; removal is unconditional.
    pub fn remove(&mut self, row: usize, col: usize, length: usize, orientation: Orientation) {
        for i in 0..length {
            let (r, c) = orientation.step(row, col, i);
            if r < self.rows && c < self.cols {
                self.cells[r * self.cols + c] = Cell::Empty;
            }
        }
    }
}

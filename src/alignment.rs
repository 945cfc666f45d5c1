//! Alignment engine: enumerating every way a remaining ship could cover a
//! cell, and the subset-dominance reduction over whole-board enumerations.

use std::collections::{BTreeMap, BTreeSet};

use crate::board::{Board, Cell};
use crate::common::Coord;
use crate::ship::{Orientation, Roster};

/// One hypothetical ship placement: anchor, length, orientation and the
/// ship's roster identity. Two ships of equal length produce distinct
/// alignments because their ids differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alignment {
    pub row: usize,
    pub col: usize,
    pub length: usize,
    pub orientation: Orientation,
    pub ship_id: usize,
}

/// Map from coordinate to the set of alignments covering it.
pub type AlignmentSets = BTreeMap<Coord, BTreeSet<Alignment>>;

/// All distinct alignments whose span includes (row, col) and which fit
/// entirely on empty cells. Slides each roster ship across every offset
/// that keeps the given cell inside the span, testing both orientations.
pub fn alignments_at(row: usize, col: usize, board: &Board, roster: &Roster) -> BTreeSet<Alignment> {
    let mut found = BTreeSet::new();
    for (ship_id, length) in roster.iter() {
        for i in 0..length {
            if row >= i && board.can_place(row - i, col, length, Orientation::Vertical) {
                found.insert(Alignment {
                    row: row - i,
                    col,
                    length,
                    orientation: Orientation::Vertical,
                    ship_id,
                });
            }
            if col >= i && board.can_place(row, col - i, length, Orientation::Horizontal) {
                found.insert(Alignment {
                    row,
                    col: col - i,
                    length,
                    orientation: Orientation::Horizontal,
                    ship_id,
                });
            }
        }
    }
    found
}

/// Incremental subset-dominance filter. A new coordinate whose alignment
/// set is a subset of a surviving set is discarded (firing there gains
/// nothing the surviving coordinate does not); surviving sets that are
/// subsets of the newcomer are evicted.
///
/// This is an order-dependent O(n^2) filter, not a global minimum cover:
/// among equal sets the coordinate seen first in scan order survives. That
/// tie-break is deliberate and relied on by callers.
pub(crate) fn reduce_into(coord: Coord, sets: &mut AlignmentSets, aligns: BTreeSet<Alignment>) {
    if sets.is_empty() {
        sets.insert(coord, aligns);
        return;
    }
    for kept in sets.values() {
        if aligns.is_subset(kept) {
            return;
        }
    }
    sets.retain(|_, kept| !kept.is_subset(&aligns));
    sets.insert(coord, aligns);
}

/// Full coordinate -> alignment-set map over every empty cell, optionally
/// reduced by subset dominance.
pub fn alignment_sets(board: &Board, roster: &Roster, reduce: bool) -> AlignmentSets {
    let mut sets = AlignmentSets::new();
    for (r, c) in board.coords() {
        if board.get(r, c) == Some(Cell::Empty) {
            let aligns = alignments_at(r, c, board, roster);
            if reduce {
                reduce_into((r, c), &mut sets, aligns);
            } else {
                sets.insert((r, c), aligns);
            }
        }
    }
    sets
}

/// Per-cell alignment cardinality grid. Cells that are not empty, or whose
/// set was folded away by reduction, report zero.
pub fn alignment_counts(board: &Board, roster: &Roster, reduce: bool) -> Vec<Vec<usize>> {
    let mut counts = vec![vec![0usize; board.cols()]; board.rows()];
    for (&(r, c), aligns) in &alignment_sets(board, roster, reduce) {
        counts[r][c] = aligns.len();
    }
    counts
}

//! Targeting scorer: combines alignment enumeration with pluggable
//! heuristics to score free cells and hit-adjacent candidates.

use std::collections::{BTreeMap, BTreeSet};

use crate::alignment::{alignments_at, reduce_into, Alignment, AlignmentSets};
use crate::board::{Board, Cell};
use crate::common::Coord;
use crate::hits::{Direction, HitRun};
use crate::ship::{Orientation, Roster};

/// Per-cell multiplicative modifier grid, initialised to 1.0.
pub type CellModifiers = Vec<Vec<f64>>;

/// Per-alignment multiplicative modifiers, initialised to 1.0.
pub type AlignmentModifiers = BTreeMap<Alignment, f64>;

/// A heuristic scales any subset of the cell and alignment modifiers in
/// place. It sees the full (unreduced) coordinate -> alignment-set map and
/// the board, plus its tunable weight. It must have no other effects.
pub type HeuristicFn =
    fn(&mut CellModifiers, &mut AlignmentModifiers, &AlignmentSets, &Board, f64);

/// Score every empty cell for free search. Heuristics run over the full
/// alignment map; scores are then emitted only for coordinates that
/// survive subset reduction (a dominated coordinate scores 0), each being
/// the sum of its alignments' modifiers times its own cell modifier.
pub fn score_free_cells(
    board: &Board,
    roster: &Roster,
    heuristics: &[(HeuristicFn, f64)],
) -> Vec<Vec<f64>> {
    let mut cell_mods: CellModifiers = vec![vec![1.0; board.cols()]; board.rows()];
    let mut align_mods = AlignmentModifiers::new();
    let mut sets = AlignmentSets::new();
    let mut reduced = AlignmentSets::new();

    for (r, c) in board.coords() {
        if board.get(r, c) == Some(Cell::Empty) {
            let aligns = alignments_at(r, c, board, roster);
            for &a in &aligns {
                align_mods.insert(a, 1.0);
            }
            reduce_into((r, c), &mut reduced, aligns.clone());
            sets.insert((r, c), aligns);
        }
    }

    for &(heuristic, weight) in heuristics {
        heuristic(&mut cell_mods, &mut align_mods, &sets, board, weight);
    }

    let mut scores = vec![vec![0.0f64; board.cols()]; board.rows()];
    for (&(r, c), aligns) in &reduced {
        let total: f64 = aligns
            .iter()
            .map(|a| align_mods.get(a).copied().unwrap_or(1.0))
            .sum();
        scores[r][c] = total * cell_mods[r][c];
    }
    scores
}

/// Alignments consistent with a candidate cell *and* the hit run next to
/// it: the ship must span both the run's terminal cell and the candidate.
/// The anchor band is derived directly from the run length and direction
/// rather than via the general slide, and placements may pass over hit
/// cells.
pub fn hit_alignments(
    board: &Board,
    roster: &Roster,
    coordinate: Coord,
    run: &HitRun,
) -> BTreeSet<Alignment> {
    let (y, x) = coordinate;
    let seq = run.seq_length as isize;
    let mut found = BTreeSet::new();

    for (ship_id, length) in roster.iter() {
        let len = length as isize;
        // Anchor band including both the hit run and the candidate cell.
        let (start, end, orientation) = match run.direction {
            Direction::Top => (y as isize - (len - seq) + 1, y as isize, Orientation::Vertical),
            Direction::Bottom => (y as isize - len + 1, y as isize - seq, Orientation::Vertical),
            Direction::Left => (x as isize - (len - seq) + 1, x as isize, Orientation::Horizontal),
            Direction::Right => (x as isize - len + 1, x as isize - seq, Orientation::Horizontal),
        };
        for idx in start.max(0)..=end {
            let (row, col) = match orientation {
                Orientation::Vertical => (idx as usize, x),
                Orientation::Horizontal => (y, idx as usize),
            };
            if board.can_place_over_hits(row, col, length, orientation) {
                found.insert(Alignment {
                    row,
                    col,
                    length,
                    orientation,
                    ship_id,
                });
            }
        }
    }
    found
}

/// Unweighted cardinality of the hit band: how many distinct ships could
/// explain the run while also covering the candidate cell.
pub fn hit_alignment_count(board: &Board, roster: &Roster, coordinate: Coord, run: &HitRun) -> usize {
    hit_alignments(board, roster, coordinate, run).len()
}

/// Score a single hit-adjacent candidate. Heuristics are applied exactly
/// as in free scoring but scoped to this coordinate's induced band.
pub fn score_hit_option(
    board: &Board,
    roster: &Roster,
    coordinate: Coord,
    run: &HitRun,
    heuristics: &[(HeuristicFn, f64)],
) -> f64 {
    let aligns = hit_alignments(board, roster, coordinate, run);

    let mut cell_mods: CellModifiers = vec![vec![1.0; board.cols()]; board.rows()];
    let mut align_mods = AlignmentModifiers::new();
    for &a in &aligns {
        align_mods.insert(a, 1.0);
    }
    let mut sets = AlignmentSets::new();
    sets.insert(coordinate, aligns.clone());

    for &(heuristic, weight) in heuristics {
        heuristic(&mut cell_mods, &mut align_mods, &sets, board, weight);
    }

    let total: f64 = aligns
        .iter()
        .map(|a| align_mods.get(a).copied().unwrap_or(1.0))
        .sum();
    total * cell_mods[coordinate.0][coordinate.1]
}

//! Scoring heuristics and their registry.
//!
//! A heuristic follows the [`HeuristicFn`](crate::score::HeuristicFn)
//! contract: it scales cell and alignment modifiers in place and returns
//! nothing. Each registry entry carries the valid search range for its
//! weight. Ranges exclude zero: a zero weight would permanently zero out
//! every cell it touches and exclude it from consideration for the rest of
//! the game.

use std::collections::BTreeSet;

use crate::alignment::{Alignment, AlignmentSets};
use crate::board::{Board, Cell};
use crate::common::Coord;
use crate::score::{AlignmentModifiers, CellModifiers, HeuristicFn};

/// A registered heuristic: identifier, function and valid weight range.
#[derive(Clone, Copy)]
pub struct HeuristicSpec {
    pub name: &'static str,
    pub func: HeuristicFn,
    pub weight_range: (f64, f64),
}

/// Static heuristic registry. Callers select by identifier; no runtime
/// name resolution happens anywhere.
pub const REGISTRY: &[HeuristicSpec] = &[HeuristicSpec {
    name: "ship_adjacency",
    func: ship_adjacency,
    weight_range: (0.05, 5.0),
}];

/// Look up a registered heuristic by identifier.
pub fn lookup(name: &str) -> Option<&'static HeuristicSpec> {
    REGISTRY.iter().find(|spec| spec.name == name)
}

/// Ship-packing plausibility prior: every alignment touching a cell next
/// to a confirmed hit or sunk segment has its modifier multiplied by the
/// weight. Below 1.0 this discounts packed layouts, above 1.0 it favours
/// them.
pub fn ship_adjacency(
    _cell_mods: &mut CellModifiers,
    align_mods: &mut AlignmentModifiers,
    sets: &AlignmentSets,
    board: &Board,
    weight: f64,
) {
    let mut affected: BTreeSet<Alignment> = BTreeSet::new();
    for cell in cells_adjacent_to_ships(board) {
        if let Some(aligns) = sets.get(&cell) {
            affected.extend(aligns.iter().copied());
        }
    }
    for align in affected {
        if let Some(modifier) = align_mods.get_mut(&align) {
            *modifier *= weight;
        }
    }
}

/// Empty cells orthogonally adjacent to a hit or sunk ship segment.
fn cells_adjacent_to_ships(board: &Board) -> BTreeSet<Coord> {
    let mut neighbours = BTreeSet::new();
    for (y, x) in board.coords() {
        match board.get(y, x) {
            Some(Cell::Hit) | Some(Cell::Sunk(_)) => {}
            _ => continue,
        }
        if y > 0 && board.get(y - 1, x) == Some(Cell::Empty) {
            neighbours.insert((y - 1, x));
        }
        if board.get(y + 1, x) == Some(Cell::Empty) {
            neighbours.insert((y + 1, x));
        }
        if x > 0 && board.get(y, x - 1) == Some(Cell::Empty) {
            neighbours.insert((y, x - 1));
        }
        if board.get(y, x + 1) == Some(Cell::Empty) {
            neighbours.insert((y, x + 1));
        }
    }
    neighbours
}

//! Defensive ship placement: a randomized backtracking search for layouts
//! where no two ships touch orthogonally, plus the unconstrained fallback.

use std::collections::BTreeSet;

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, Cell};
use crate::common::Coord;
use crate::ship::{Orientation, Placement, Roster};

/// Place the whole roster so that no two ships are orthogonally adjacent
/// (diagonal contact is allowed). Coordinates and orientations are tried
/// in random order, so repeated runs produce different valid layouts; the
/// first feasible arrangement found wins.
///
/// On success the ships are left deployed on `board` and the placements
/// are returned in roster order. Returns `None`, with the board restored
/// to its input state, when no fully spaced layout exists. The search is
/// exhaustive over its randomized tree; limiting its runtime is the
/// caller's concern.
pub fn place_spaced<R: Rng + ?Sized>(
    board: &mut Board,
    roster: &Roster,
    rng: &mut R,
) -> Option<Vec<Placement>> {
    let available: BTreeSet<Coord> = board.empty_coords().into_iter().collect();
    let mut remaining: Vec<usize> = roster.lengths().to_vec();
    let mut placements = Vec::new();

    if place_next(&available, board, &mut remaining, &mut placements, rng) {
        placements.sort_by_key(|p| p.ship_id);
        Some(placements)
    } else {
        debug!(
            "no spaced layout for {} ships on {}x{} board",
            roster.len(),
            board.rows(),
            board.cols()
        );
        None
    }
}

/// Recursive step: pop one ship, try it at every available coordinate and
/// orientation, narrow the available set around a tentative placement and
/// recurse. A dead branch removes the tentative ship again before
/// returning, and the popped length is re-pushed so sibling frames see a
/// correct roster.
fn place_next<R: Rng + ?Sized>(
    available: &BTreeSet<Coord>,
    board: &mut Board,
    remaining: &mut Vec<usize>,
    placements: &mut Vec<Placement>,
    rng: &mut R,
) -> bool {
    let length = match remaining.pop() {
        Some(length) => length,
        None => return true,
    };
    let ship_id = remaining.len();

    let mut candidates: Vec<Coord> = available.iter().copied().collect();
    candidates.shuffle(rng);

    for (row, col) in candidates {
        let mut orientations = [Orientation::Vertical, Orientation::Horizontal];
        orientations.shuffle(rng);

        for orientation in orientations {
            if !deploy_on_available(board, row, col, length, orientation, ship_id, available) {
                continue;
            }
            placements.push(Placement {
                row,
                col,
                length,
                ship_id,
                orientation,
            });

            let mut narrowed = available.clone();
            exclude_ship_and_neighbours(row, col, length, orientation, board, &mut narrowed);

            if place_next(&narrowed, board, remaining, placements, rng) {
                return true;
            }
            placements.pop();
            board.remove(row, col, length, orientation);
        }
    }

    remaining.push(length);
    false
}

/// Deploy against the available-coordinate set rather than the live board,
/// avoiding a rescan of cells already consumed by spacing exclusions.
fn deploy_on_available(
    board: &mut Board,
    row: usize,
    col: usize,
    length: usize,
    orientation: Orientation,
    ship_id: usize,
    available: &BTreeSet<Coord>,
) -> bool {
    let (end_r, end_c) = orientation.step(row, col, length - 1);
    if end_r >= board.rows() || end_c >= board.cols() {
        return false;
    }
    if !(0..length).all(|i| available.contains(&orientation.step(row, col, i))) {
        return false;
    }
    for i in 0..length {
        let (r, c) = orientation.step(row, col, i);
        board.set(r, c, Cell::Ship(ship_id));
    }
    true
}

/// Remove every cell of the newly placed ship and all its 4-connected
/// neighbours from the available set. This is what enforces spacing;
/// diagonal neighbours stay available on purpose.
fn exclude_ship_and_neighbours(
    row: usize,
    col: usize,
    length: usize,
    orientation: Orientation,
    board: &Board,
    available: &mut BTreeSet<Coord>,
) {
    for i in 0..length {
        let (r, c) = orientation.step(row, col, i);
        available.remove(&(r, c));
        if r > 0 {
            available.remove(&(r - 1, c));
        }
        if r + 1 < board.rows() {
            available.remove(&(r + 1, c));
        }
        if c > 0 {
            available.remove(&(r, c - 1));
        }
        if c + 1 < board.cols() {
            available.remove(&(r, c + 1));
        }
    }
}

/// Unconstrained fallback: rejection-sample coordinate and orientation per
/// ship until each fits, ignoring adjacency. Always terminates provided
/// the roster fits the board at all, which is a caller precondition the
/// core does not verify.
pub fn place_randomly<R: Rng + ?Sized>(
    board: &mut Board,
    roster: &Roster,
    rng: &mut R,
) -> Vec<Placement> {
    let mut placements = Vec::new();
    for (ship_id, length) in roster.iter() {
        loop {
            let row = rng.random_range(0..board.rows());
            let col = rng.random_range(0..board.cols());
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            if board.deploy(row, col, length, orientation, ship_id) {
                placements.push(Placement {
                    row,
                    col,
                    length,
                    ship_id,
                    orientation,
                });
                break;
            }
        }
    }
    placements
}

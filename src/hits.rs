//! Hit-sequence detection: finding empty cells adjacent to maximal
//! contiguous runs of hits, with the run length and relative direction.

use std::collections::BTreeMap;

use crate::board::{Board, Cell};
use crate::common::Coord;

/// Where a candidate cell sits relative to its hit run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Top,
    Bottom,
    Left,
    Right,
}

/// A maximal contiguous hit run as seen from one adjacent empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitRun {
    /// Number of contiguous hit cells in the run, origin inclusive.
    pub seq_length: usize,
    pub direction: Direction,
}

/// Map every empty cell bordering a hit run to that run. A cell adjacent
/// to two different runs keeps the longer one (ties keep the first found),
/// so it is always evaluated against the more informative streak.
///
/// A board with no hit cells yields an empty map; callers treat that as
/// "no follow-up possible" and fall back to free search.
pub fn adjacent_hit_runs(board: &Board) -> BTreeMap<Coord, HitRun> {
    let mut runs = BTreeMap::new();
    // Separate visited masks per axis so a cross-shaped cluster is walked
    // once vertically and once horizontally without double-counting.
    let mut vert_visited = vec![vec![false; board.cols()]; board.rows()];
    let mut horz_visited = vec![vec![false; board.cols()]; board.rows()];

    for (y, x) in board.coords() {
        if board.get(y, x) != Some(Cell::Hit) {
            continue;
        }

        if !vert_visited[y][x] {
            vert_visited[y][x] = true;
            let mut length = 1;
            let mut top = None;
            let mut bottom = None;

            let mut i = 1;
            while i <= y {
                match board.get(y - i, x) {
                    Some(Cell::Hit) => {
                        vert_visited[y - i][x] = true;
                        length += 1;
                    }
                    Some(Cell::Empty) => {
                        top = Some((y - i, x));
                        break;
                    }
                    _ => break,
                }
                i += 1;
            }
            let mut i = 1;
            while y + i < board.rows() {
                match board.get(y + i, x) {
                    Some(Cell::Hit) => {
                        vert_visited[y + i][x] = true;
                        length += 1;
                    }
                    Some(Cell::Empty) => {
                        bottom = Some((y + i, x));
                        break;
                    }
                    _ => break,
                }
                i += 1;
            }

            if let Some(coord) = top {
                record(&mut runs, coord, length, Direction::Top);
            }
            if let Some(coord) = bottom {
                record(&mut runs, coord, length, Direction::Bottom);
            }
        }

        if !horz_visited[y][x] {
            horz_visited[y][x] = true;
            let mut length = 1;
            let mut left = None;
            let mut right = None;

            let mut j = 1;
            while j <= x {
                match board.get(y, x - j) {
                    Some(Cell::Hit) => {
                        horz_visited[y][x - j] = true;
                        length += 1;
                    }
                    Some(Cell::Empty) => {
                        left = Some((y, x - j));
                        break;
                    }
                    _ => break,
                }
                j += 1;
            }
            let mut j = 1;
            while x + j < board.cols() {
                match board.get(y, x + j) {
                    Some(Cell::Hit) => {
                        horz_visited[y][x + j] = true;
                        length += 1;
                    }
                    Some(Cell::Empty) => {
                        right = Some((y, x + j));
                        break;
                    }
                    _ => break,
                }
                j += 1;
            }

            if let Some(coord) = left {
                record(&mut runs, coord, length, Direction::Left);
            }
            if let Some(coord) = right {
                record(&mut runs, coord, length, Direction::Right);
            }
        }
    }

    runs
}

fn record(runs: &mut BTreeMap<Coord, HitRun>, coord: Coord, seq_length: usize, direction: Direction) {
    let candidate = HitRun {
        seq_length,
        direction,
    };
    match runs.get(&coord) {
        Some(existing) if existing.seq_length >= seq_length => {}
        _ => {
            runs.insert(coord, candidate);
        }
    }
}

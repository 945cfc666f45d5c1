//! Move selection: the two-regime targeting policy behind a pluggable
//! strategy interface.

use log::{debug, trace};
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

use crate::board::Board;
use crate::common::{Coord, EngineError};
use crate::heuristics;
use crate::hits::adjacent_hit_runs;
use crate::placement::{place_randomly, place_spaced};
use crate::score::{score_free_cells, score_hit_option, HeuristicFn};
use crate::ship::{Placement, Roster};

/// Interface a game loop consumes: propose one shot per turn, and propose
/// a full defensive layout once per game. Other strategies can be
/// substituted behind this seam.
pub trait Strategy: Send {
    /// Choose the next firing coordinate for the given (masked) opponent
    /// board and afloat roster. Stateless across turns: the decision is a
    /// function of the arguments alone, plus the caller's RNG for
    /// tie-breaking.
    fn propose_shot(
        &self,
        rng: &mut SmallRng,
        board: &Board,
        roster: &Roster,
    ) -> Result<Coord, EngineError>;

    /// Deploy the roster onto the own board and report the placements.
    fn propose_layout(
        &self,
        rng: &mut SmallRng,
        board: &mut Board,
        roster: &Roster,
    ) -> Vec<Placement>;
}

/// Alignment-driven bot. Hunts by scored alignment counts when nothing is
/// hit, and finishes the longest known hit streak otherwise. Heuristics
/// are optional; without any, scores equal plain alignment counts.
pub struct AlignmentBot {
    heuristics: Vec<(HeuristicFn, f64)>,
}

impl AlignmentBot {
    pub fn new() -> Self {
        AlignmentBot {
            heuristics: Vec::new(),
        }
    }

    pub fn with_heuristics(heuristics: Vec<(HeuristicFn, f64)>) -> Self {
        AlignmentBot { heuristics }
    }

    /// Free search: pick the maximum-score empty cell, uniform random
    /// among ties.
    fn hunt(
        &self,
        rng: &mut SmallRng,
        board: &Board,
        roster: &Roster,
    ) -> Result<Coord, EngineError> {
        let empties = board.empty_coords();
        if empties.is_empty() {
            return Err(EngineError::NoTargets);
        }
        let scores = score_free_cells(board, roster, &self.heuristics);
        let best = empties
            .iter()
            .map(|&(r, c)| scores[r][c])
            .fold(f64::NEG_INFINITY, f64::max);
        let choices: Vec<Coord> = empties
            .into_iter()
            .filter(|&(r, c)| scores[r][c] == best)
            .collect();
        trace!("hunting: best score {best} over {} cells", choices.len());
        choices.choose(rng).copied().ok_or(EngineError::NoTargets)
    }

    /// Follow-up: among cells bordering the longest hit streak, pick the
    /// best hit-band score, uniform random among ties. Concentrating on
    /// one streak finishes a ship before starting on another.
    fn finish(
        &self,
        rng: &mut SmallRng,
        board: &Board,
        roster: &Roster,
    ) -> Result<Coord, EngineError> {
        let runs = adjacent_hit_runs(board);
        let longest = runs
            .values()
            .map(|run| run.seq_length)
            .max()
            .ok_or(EngineError::NoHitCandidates)?;

        let mut scored: Vec<(Coord, f64)> = runs
            .iter()
            .filter(|(_, run)| run.seq_length == longest)
            .map(|(&coord, run)| {
                (
                    coord,
                    score_hit_option(board, roster, coord, run, &self.heuristics),
                )
            })
            .collect();
        let best = scored
            .iter()
            .map(|&(_, s)| s)
            .fold(f64::NEG_INFINITY, f64::max);
        scored.retain(|&(_, s)| s == best);
        trace!(
            "finishing: streak {longest}, best score {best} over {} cells",
            scored.len()
        );
        let choices: Vec<Coord> = scored.into_iter().map(|(coord, _)| coord).collect();
        choices
            .choose(rng)
            .copied()
            .ok_or(EngineError::NoHitCandidates)
    }
}

impl Default for AlignmentBot {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for AlignmentBot {
    fn propose_shot(
        &self,
        rng: &mut SmallRng,
        board: &Board,
        roster: &Roster,
    ) -> Result<Coord, EngineError> {
        if board.contains_hit() {
            match self.finish(rng, board, roster) {
                Ok(coord) => return Ok(coord),
                // A hit cluster with every neighbour resolved offers no
                // follow-up; fall back to free search.
                Err(EngineError::NoHitCandidates) => {
                    debug!("hit cluster fully blocked, reverting to free search");
                }
                Err(e) => return Err(e),
            }
        }
        self.hunt(rng, board, roster)
    }

    fn propose_layout(
        &self,
        rng: &mut SmallRng,
        board: &mut Board,
        roster: &Roster,
    ) -> Vec<Placement> {
        match place_spaced(board, roster, rng) {
            Some(placements) => placements,
            None => {
                debug!("spaced placement infeasible, placing unconstrained");
                place_randomly(board, roster, rng)
            }
        }
    }
}

/// Static strategy factory: maps a strategy name to a constructor. No
/// runtime code loading.
pub fn strategy(name: &str) -> Option<Box<dyn Strategy>> {
    match name {
        "alignment" => Some(Box::new(AlignmentBot::new())),
        "adjacency" => {
            let spec = heuristics::lookup("ship_adjacency")?;
            Some(Box::new(AlignmentBot::with_heuristics(vec![(
                spec.func, 0.5,
            )])))
        }
        _ => None,
    }
}

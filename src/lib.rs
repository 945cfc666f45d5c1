//! Decision engine for an automated Battleship-playing agent.
//!
//! Given partial knowledge of an opponent's board (hits, misses, land) the
//! engine enumerates every way a remaining ship could cover each cell,
//! folds away redundant candidates, scores the rest with pluggable
//! heuristics, and picks a shot under two regimes: free search, or
//! following up the longest live hit streak. For defense it runs a
//! randomized backtracking search for layouts where no two ships touch
//! orthogonally. Networking, persistence and UI are external collaborators;
//! boards arrive here already masked and in zero-based coordinates.

mod alignment;
mod board;
mod common;
mod config;
pub mod heuristics;
mod hits;
mod logging;
mod placement;
mod score;
mod ship;
mod strategy;

pub use alignment::*;
pub use board::*;
pub use common::*;
pub use config::*;
pub use heuristics::{ship_adjacency, HeuristicSpec};
pub use hits::*;
pub use logging::init_logging;
pub use placement::*;
pub use score::*;
pub use ship::*;
pub use strategy::*;

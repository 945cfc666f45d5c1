//! Common types: coordinates and the engine error enum.

/// Zero-based (row, col) pair. The engine never deals in the external
/// "row letter / 1-based column" notation; callers translate at the edge.
pub type Coord = (usize, usize);

/// Errors raised at the engine's input boundary or on caller
/// precondition violations.
#[derive(Debug, PartialEq, Eq)]
pub enum EngineError {
    /// Board rows do not all have the same length.
    RaggedBoard,
    /// A roster contained a ship of length zero.
    ZeroLengthShip,
    /// A shot was requested but the board has no empty cell left.
    NoTargets,
    /// Finishing-state scoring was invoked without any hit-adjacent
    /// candidate; guessing here would mask a policy bug upstream.
    NoHitCandidates,
}

impl core::fmt::Display for EngineError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EngineError::RaggedBoard => write!(f, "Board rows have unequal lengths"),
            EngineError::ZeroLengthShip => write!(f, "Ship roster contains a zero-length ship"),
            EngineError::NoTargets => write!(f, "No empty cells left to fire at"),
            EngineError::NoHitCandidates => {
                write!(f, "Hit follow-up requested with no hit-adjacent candidates")
            }
        }
    }
}

impl std::error::Error for EngineError {}

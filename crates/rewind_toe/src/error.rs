//! Errors returned when an intent is rejected.

use super::position::Position;

/// Error that can occur when applying a move or a jump.
///
/// A rejected intent never changes the game, so callers are free to
/// ignore these.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The cell at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The game shown at the current move is already decided.
    #[display("Game is already over")]
    GameOver,

    /// The requested move is not in the history.
    #[display("Move #{requested} does not exist (history has {len} entries)")]
    MoveOutOfRange {
        /// Requested move number.
        requested: usize,
        /// Number of history entries.
        len: usize,
    },

    /// A cell index outside 0-8.
    #[display("Cell index {} is outside the board (0-8)", _0)]
    InvalidPosition(#[error(not(source))] usize),

    /// A restored game whose history breaks the game invariants.
    #[display("Game history is inconsistent: {}", _0)]
    InconsistentHistory(#[error(not(source))] String),
}

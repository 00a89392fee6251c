//! First-class invariants for a game and its history.
//!
//! Invariants are logical properties that must hold after every move.
//! They are asserted in debug builds and can be tested independently.

pub mod alternating_turn;
pub mod history_consistent;
pub mod monotonic_board;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use monotonic_board::MonotonicBoardInvariant;

use super::GameState;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }
        collect(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        collect(violations)
    }
}

/// All game invariants as a composable set.
pub type GameInvariants = (
    HistoryConsistentInvariant,
    AlternatingTurnInvariant,
    MonotonicBoardInvariant,
);

/// Checks every game invariant.
pub fn check(game: &GameState) -> Result<(), Vec<InvariantViolation>> {
    GameInvariants::check_all(game)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, HistoryEntry, Player, Position};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(check(&GameState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_branching() {
        let mut game = GameState::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
        ])
        .unwrap();
        game.jump_to(1).unwrap();
        game.play(Position::BottomRight).unwrap();
        assert!(check(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut game = GameState::replay(&[Position::Center]).unwrap();
        // O's mark appears where X played.
        let board = Board::new().with_mark(Position::Center, Player::O);
        game.history[1] = HistoryEntry::raw(board, Some(Position::Center), Some("(1, 1)".into()));

        let violations = check(&game).unwrap_err();
        assert_eq!(
            violations,
            vec![InvariantViolation::new(AlternatingTurnInvariant::description())]
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (HistoryConsistentInvariant, MonotonicBoardInvariant);
        assert!(TwoInvariants::check_all(&GameState::new()).is_ok());
    }
}

//! Outcome of evaluating a board.

use super::position::Position;
use super::types::Player;
use serde::{Deserialize, Serialize};

/// Result of evaluating a board. Always derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Nobody has won and empty cells remain.
    InProgress,
    /// A player completed a line.
    Win {
        /// The winning player.
        player: Player,
        /// The three cells of the winning line.
        line: [Position; 3],
    },
    /// Board is full with no winner.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { player, .. } => Some(*player),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<[Position; 3]> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns true while moves can still be played.
    pub fn is_in_progress(&self) -> bool {
        matches!(self, Outcome::InProgress)
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }

    /// Returns true if `pos` belongs to the winning line.
    pub fn highlights(&self, pos: Position) -> bool {
        self.line().is_some_and(|line| line.contains(&pos))
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win { player, .. } => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

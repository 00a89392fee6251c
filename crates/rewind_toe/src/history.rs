//! Board snapshots recorded after each move.

use super::position::{Position, format_location};
use super::types::{Board, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A move: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.location())
    }
}

/// One snapshot in the game history.
///
/// The first entry of every history is the empty board with no origin;
/// every later entry records the cell that produced it and that cell's
/// location label.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Board after this entry's move.
    board: Board,
    /// Cell played to reach this board.
    origin: Option<Position>,
    /// `(row, col)` label of `origin`, computed when the move was played.
    location: Option<String>,
}

impl HistoryEntry {
    /// Entry for the start of a game.
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            origin: None,
            location: None,
        }
    }

    /// Entry produced by playing `origin`.
    pub fn after_move(board: Board, origin: Position) -> Self {
        Self {
            board,
            origin: Some(origin),
            location: Some(format_location(origin.to_index())),
        }
    }

    /// Label for this entry in the move list.
    ///
    /// A later entry without a stored label falls back to its origin, and
    /// to "unknown cell" when it has neither, so a corrupted entry still
    /// shows up as a move.
    pub fn describe(&self, move_number: usize) -> String {
        match (move_number, &self.location, self.origin) {
            (0, _, _) => "Go to game start".to_string(),
            (n, Some(location), _) => format!("Go to move #{} {}", n, location),
            (n, None, Some(origin)) => {
                warn!(move_number = n, "History entry is missing its location label");
                format!("Go to move #{} {}", n, origin.location())
            }
            (n, None, None) => {
                warn!(move_number = n, "History entry has no origin");
                format!("Go to move #{} (unknown cell)", n)
            }
        }
    }
}

#[cfg(test)]
impl HistoryEntry {
    /// Builds an entry with arbitrary fields, for corrupting histories in tests.
    pub(crate) fn raw(board: Board, origin: Option<Position>, location: Option<String>) -> Self {
        Self {
            board,
            origin,
            location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_entry_describes_game_start() {
        let entry = HistoryEntry::start();
        assert_eq!(entry.origin(), &None);
        assert_eq!(entry.describe(0), "Go to game start");
    }

    #[test]
    fn test_after_move_stores_location() {
        let board = Board::new().with_mark(Position::MiddleRight, Player::X);
        let entry = HistoryEntry::after_move(board, Position::MiddleRight);
        assert_eq!(entry.location().as_deref(), Some("(1, 2)"));
        assert_eq!(entry.describe(1), "Go to move #1 (1, 2)");
    }

    #[test]
    fn test_later_entry_without_label_is_not_game_start() {
        let board = Board::new().with_mark(Position::Center, Player::X);
        let unlabelled = HistoryEntry::raw(board, Some(Position::Center), None);
        assert_eq!(unlabelled.describe(1), "Go to move #1 (1, 1)");

        let orphan = HistoryEntry::raw(board, None, None);
        assert_eq!(orphan.describe(1), "Go to move #1 (unknown cell)");
    }
}

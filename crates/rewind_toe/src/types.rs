//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the player whose turn it is when `move_number` moves have been played.
    ///
    /// X moves on even counts, O on odd ones.
    pub fn for_move(move_number: usize) -> Self {
        if move_number % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// The mark shown for this cell, or `None` when empty.
    pub fn mark(self) -> Option<&'static str> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(Player::X) => Some("X"),
            Cell::Occupied(Player::O) => Some("O"),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are snapshots: placing a mark produces a new board and leaves
/// the source board untouched, so history entries never alias each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from its nine cells in row-major order.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns a copy of this board with `player`'s mark at `pos`.
    pub fn with_mark(&self, pos: Position, player: Player) -> Self {
        let mut next = *self;
        next.cells[pos.to_index()] = Cell::Occupied(player);
        next
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_move_alternates() {
        assert_eq!(Player::for_move(0), Player::X);
        assert_eq!(Player::for_move(1), Player::O);
        assert_eq!(Player::for_move(8), Player::X);
    }

    #[test]
    fn test_with_mark_leaves_source_board() {
        let board = Board::new();
        let next = board.with_mark(Position::Center, Player::X);
        assert!(board.is_empty(Position::Center));
        assert_eq!(next.get(Position::Center), Cell::Occupied(Player::X));
        assert_eq!(next.occupied(), 1);
    }
}

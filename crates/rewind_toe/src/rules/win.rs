//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Outcome, Player, Position};
use super::draw::is_full;
use tracing::instrument;

/// Every winning line, in evaluation order: rows top to bottom, columns
/// left to right, then the two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Evaluates a board.
///
/// The first completed line in [`LINES`] order wins, so a board with two
/// completed lines always reports the same one. Without a winner the
/// board is a draw once every cell is occupied.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    for line in LINES {
        let [a, b, c] = line;
        if let Cell::Occupied(player) = board.get(a)
            && board.get(b) == Cell::Occupied(player)
            && board.get(c) == Cell::Occupied(player)
        {
            return Outcome::Win { player, line };
        }
    }

    if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

/// Returns the winner if there is one.
pub fn winner(board: &Board) -> Option<Player> {
    evaluate(board).winner()
}

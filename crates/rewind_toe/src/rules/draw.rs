//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Cell};

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner is a draw.
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::super::{Player, Position};
    use super::super::win::winner;
    use super::*;

    fn is_draw(board: &Board) -> bool {
        is_full(board) && winner(board).is_none()
    }

    fn board_of(marks: [Player; 9]) -> Board {
        Board::from_cells(marks.map(Cell::Occupied))
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::new().with_mark(Position::Center, Player::X);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        use Player::{O, X};
        // X O X / O X X / O X O
        let board = board_of([X, O, X, O, X, X, O, X, O]);
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        use Player::{O, X};
        // X X X / O O X / X O O
        let board = board_of([X, X, X, O, O, X, X, O, O]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}

//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: players alternate turns.
///
/// The mark placed by history entry `n` belongs to the player whose turn
/// it was after `n - 1` moves, so the first move is always X.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        game.history()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(n, entry)| match entry.origin() {
                Some(origin) => entry.board().get(*origin).player() == Some(Player::for_move(n - 1)),
                None => false,
            })
    }

    fn description() -> &'static str {
        "Players alternate turns starting with X"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, HistoryEntry, Position};

    #[test]
    fn test_alternation_holds() {
        let game = GameState::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::BottomRight,
        ])
        .unwrap();
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_o_moving_first_violates() {
        let mut game = GameState::replay(&[Position::TopLeft]).unwrap();
        let board = Board::new().with_mark(Position::TopLeft, Player::O);
        game.history[1] = HistoryEntry::raw(board, Some(Position::TopLeft), Some("(0, 0)".into()));
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}

//! Monotonic board invariant: each snapshot adds exactly one mark.

use super::super::{Cell, GameState, Position};
use super::Invariant;

/// Invariant: history entry `n` is entry `n - 1` plus one mark at its origin.
///
/// Marks never move or disappear between consecutive snapshots.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().windows(2).all(|pair| {
            let (before, after) = (pair[0].board(), pair[1].board());
            let Some(origin) = *pair[1].origin() else {
                return false;
            };
            Position::ALL.iter().all(|pos| {
                if *pos == origin {
                    before.get(*pos) == Cell::Empty && after.get(*pos) != Cell::Empty
                } else {
                    before.get(*pos) == after.get(*pos)
                }
            })
        })
    }

    fn description() -> &'static str {
        "Each move adds exactly one mark and never changes existing ones"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, HistoryEntry, Player};

    #[test]
    fn test_replayed_game_holds() {
        let game = GameState::replay(&[
            Position::Center,
            Position::TopLeft,
            Position::BottomLeft,
        ])
        .unwrap();
        assert!(MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_erased_mark_violates() {
        let mut game = GameState::replay(&[Position::Center, Position::TopLeft]).unwrap();
        // Entry 2 forgets X's center mark.
        let board = Board::new().with_mark(Position::TopLeft, Player::O);
        game.history[2] = HistoryEntry::raw(board, Some(Position::TopLeft), Some("(0, 0)".into()));
        assert!(!MonotonicBoardInvariant::holds(&game));
    }
}

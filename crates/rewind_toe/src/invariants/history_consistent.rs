//! History consistency invariant: entries line up with the moves that made them.

use super::super::{GameState, format_location};
use super::Invariant;

/// Invariant: entry `i` records move `i`.
///
/// The history starts with the bare empty board, entry `i` holds exactly
/// `i` marks together with its origin and that origin's location label,
/// and the current move points inside the history.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();

        let Some(start) = history.first() else {
            return false;
        };
        if start.board().occupied() != 0 || start.origin().is_some() || start.location().is_some()
        {
            return false;
        }

        let entries_consistent = history.iter().enumerate().skip(1).all(|(n, entry)| {
            entry.board().occupied() == n
                && match entry.origin() {
                    Some(origin) => {
                        entry.location().as_deref() == Some(format_location(origin.to_index()).as_str())
                    }
                    None => false,
                }
        });

        entries_consistent && game.current_move() < history.len()
    }

    fn description() -> &'static str {
        "History entry n holds n marks and records its origin and location"
    }
}

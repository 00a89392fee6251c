//! Game state with move history and time travel.
//!
//! [`GameState`] owns every snapshot of the board since the game started,
//! a pointer to the snapshot being shown, and the move-list order. Moves
//! are played from the shown snapshot; playing from an earlier snapshot
//! discards the snapshots that followed it.

use super::error::GameError;
use super::history::{HistoryEntry, Move};
use super::order::MoveOrder;
use super::outcome::Outcome;
use super::position::Position;
use super::rules;
use super::types::{Board, Player};
use super::view::{GameView, MoveListEntry};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A tic-tac-toe game with its full history.
///
/// Deserializing goes through the game invariants, so a restored game is
/// always one that `play` and `jump_to` could have produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameRecord")]
pub struct GameState {
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) current_move: usize,
    pub(crate) order: MoveOrder,
}

impl GameState {
    /// Creates a new game at the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::with_order(MoveOrder::default())
    }

    /// Creates a new game whose move list starts in `order`.
    #[instrument]
    pub fn with_order(order: MoveOrder) -> Self {
        Self {
            history: vec![HistoryEntry::start()],
            current_move: 0,
            order,
        }
    }

    /// Plays `positions` in order from a fresh game.
    ///
    /// Stops at the first rejected move and returns its error.
    #[instrument]
    pub fn replay(positions: &[Position]) -> Result<Self, GameError> {
        let mut game = Self::new();
        for pos in positions {
            game.play(*pos)?;
        }
        Ok(game)
    }

    /// Every snapshot from game start to the latest move.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Number of history entries (moves played plus the start).
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always false: a game holds at least its starting board.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Index of the snapshot being shown.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Move list order.
    pub fn order(&self) -> MoveOrder {
        self.order
    }

    /// Board at the current move.
    pub fn current_board(&self) -> &Board {
        self.history[self.current_move].board()
    }

    /// Player who plays next from the current move.
    pub fn to_move(&self) -> Player {
        Player::for_move(self.current_move)
    }

    /// Evaluation of the current board.
    pub fn outcome(&self) -> Outcome {
        rules::evaluate(self.current_board())
    }

    /// Places the active player's mark at `pos`.
    ///
    /// Any history after the current move is discarded before the new
    /// snapshot is appended, and the current move advances to it.
    ///
    /// # Errors
    ///
    /// [`GameError::GameOver`] if the current board is decided and
    /// [`GameError::SquareOccupied`] if `pos` is taken. The game is
    /// unchanged in both cases.
    #[instrument(skip(self), fields(current_move = self.current_move, player = %self.to_move()))]
    pub fn play(&mut self, pos: Position) -> Result<Move, GameError> {
        let board = *self.current_board();

        if !rules::evaluate(&board).is_in_progress() {
            debug!("Move rejected, game is over");
            return Err(GameError::GameOver);
        }
        if !board.is_empty(pos) {
            debug!("Move rejected, square occupied");
            return Err(GameError::SquareOccupied(pos));
        }

        let player = self.to_move();
        let next = board.with_mark(pos, player);

        let discarded = self.history.len() - (self.current_move + 1);
        if discarded > 0 {
            debug!(discarded, "Overwriting later history");
        }
        self.history.truncate(self.current_move + 1);
        self.history.push(HistoryEntry::after_move(next, pos));
        self.current_move = self.history.len() - 1;

        debug_assert!(
            crate::invariants::check(self).is_ok(),
            "game invariants violated after move: {:?}",
            crate::invariants::check(self)
        );

        debug!(current_move = self.current_move, "Move applied");
        Ok(Move::new(player, pos))
    }

    /// Places the active player's mark at a raw cell index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside 0..=8. Frontends only ever produce
    /// indices from the board they drew, so anything else is a bug there.
    pub fn play_index(&mut self, index: usize) -> Result<Move, GameError> {
        match Position::from_index(index) {
            Some(pos) => self.play(pos),
            None => panic!("cell index {index} is outside the board (0-8)"),
        }
    }

    /// Shows the snapshot after move `move_number`. History is unchanged.
    ///
    /// # Errors
    ///
    /// [`GameError::MoveOutOfRange`] if no such snapshot exists.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, move_number: usize) -> Result<(), GameError> {
        if move_number >= self.history.len() {
            debug!("Jump rejected, move out of range");
            return Err(GameError::MoveOutOfRange {
                requested: move_number,
                len: self.history.len(),
            });
        }
        self.current_move = move_number;
        debug!("Jumped");
        Ok(())
    }

    /// Flips the move list between ascending and descending.
    #[instrument(skip(self), fields(order = ?self.order))]
    pub fn toggle_order(&mut self) {
        self.order = self.order.toggle();
    }

    /// Builds the view a frontend renders.
    pub fn view(&self) -> GameView {
        let board = *self.current_board();
        let moves: Vec<MoveListEntry> = self
            .history
            .iter()
            .enumerate()
            .map(|(n, entry)| MoveListEntry::new(n, entry.describe(n), n == self.current_move))
            .collect();

        GameView::new(
            board,
            rules::evaluate(&board),
            self.current_move,
            self.order,
            self.order.arrange(&moves),
        )
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Unchecked wire form of [`GameState`].
#[derive(Deserialize)]
struct GameRecord {
    history: Vec<HistoryEntry>,
    current_move: usize,
    order: MoveOrder,
}

impl TryFrom<GameRecord> for GameState {
    type Error = GameError;

    fn try_from(record: GameRecord) -> Result<Self, Self::Error> {
        let game = Self {
            history: record.history,
            current_move: record.current_move,
            order: record.order,
        };
        crate::invariants::check(&game).map_err(|violations| {
            let described: Vec<String> = violations.iter().map(|v| v.description.clone()).collect();
            GameError::InconsistentHistory(described.join("; "))
        })?;
        Ok(game)
    }
}

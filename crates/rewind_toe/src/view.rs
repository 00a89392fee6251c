//! Read-only view derived from a game for rendering.

use super::order::MoveOrder;
use super::outcome::Outcome;
use super::position::Position;
use super::types::{Board, Cell};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One cell as presented to a frontend.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct CellView {
    /// Cell position.
    position: Position,
    /// Cell contents.
    cell: Cell,
    /// Whether the cell is part of the winning line.
    highlighted: bool,
}

/// One clickable entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MoveListEntry {
    /// History index this entry jumps to.
    move_number: usize,
    /// Button label, e.g. `Go to move #3 (0, 2)`.
    label: String,
    /// Whether this is the move currently shown.
    is_current: bool,
}

impl MoveListEntry {
    pub(crate) fn new(move_number: usize, label: String, is_current: bool) -> Self {
        Self {
            move_number,
            label,
            is_current,
        }
    }
}

/// Everything a frontend needs to draw the game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameView {
    /// Board at the current move.
    board: Board,
    /// Cells with highlight flags, row-major.
    cells: Vec<CellView>,
    /// Evaluation of `board`.
    outcome: Outcome,
    /// `Winner: X`, `Draw` or `Next player: O`.
    status: String,
    /// Index of the history entry being shown.
    current_move: usize,
    /// `You are at move #n`.
    heading: String,
    /// Order applied to `moves`.
    order: MoveOrder,
    /// Label of the order toggle, naming the current order.
    toggle_label: String,
    /// Move list in presentation order.
    moves: Vec<MoveListEntry>,
}

impl GameView {
    pub(crate) fn new(
        board: Board,
        outcome: Outcome,
        current_move: usize,
        order: MoveOrder,
        moves: Vec<MoveListEntry>,
    ) -> Self {
        let cells = Position::ALL
            .iter()
            .map(|pos| CellView {
                position: *pos,
                cell: board.get(*pos),
                highlighted: outcome.highlights(*pos),
            })
            .collect();

        Self {
            board,
            cells,
            outcome,
            status: status_text(&outcome, current_move),
            current_move,
            heading: format!("You are at move #{}", current_move),
            order,
            toggle_label: format!("Toggle {}", order.label()),
            moves,
        }
    }

    /// Returns the cell view at `pos`.
    pub fn cell(&self, pos: Position) -> &CellView {
        &self.cells[pos.to_index()]
    }
}

/// Status line for an outcome reached after `current_move` moves.
pub fn status_text(outcome: &Outcome, current_move: usize) -> String {
    match outcome {
        Outcome::Win { player, .. } => format!("Winner: {}", player),
        Outcome::Draw => "Draw".to_string(),
        Outcome::InProgress => {
            format!("Next player: {}", super::Player::for_move(current_move))
        }
    }
}

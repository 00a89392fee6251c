//! Rewind Toe - tic-tac-toe with move history and time travel
//!
//! This library provides the game-state engine behind the `rewind_toe`
//! terminal frontend. It has no UI dependency: a frontend dispatches
//! intents and re-renders from a pull-based view.
//!
//! # Architecture
//!
//! - **Rules**: pure board evaluation (win line, draw)
//! - **Positions**: typed cell indices and their `(row, col)` labels
//! - **Game**: history of board snapshots, current move, move-list order
//! - **View**: everything a frontend draws, derived on demand
//! - **Invariants**: checkable properties of every reachable game
//!
//! # Example
//!
//! ```
//! use rewind_toe::{GameState, Outcome, Player, Position};
//!
//! let mut game = GameState::new();
//! for pos in [Position::TopLeft, Position::Center, Position::TopCenter,
//!             Position::MiddleLeft, Position::TopRight] {
//!     game.play(pos).unwrap();
//! }
//! assert_eq!(game.outcome().winner(), Some(Player::X));
//! assert_eq!(game.view().status(), "Winner: X");
//!
//! // Time travel and branch.
//! game.jump_to(2).unwrap();
//! game.play(Position::BottomRight).unwrap();
//! assert_eq!(game.len(), 4);
//! assert_eq!(game.outcome(), Outcome::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod history;
pub mod invariants;
mod order;
mod outcome;
mod position;
pub mod rules;
mod types;
mod view;

pub use error::GameError;
pub use game::GameState;
pub use history::{HistoryEntry, Move};
pub use order::MoveOrder;
pub use outcome::Outcome;
pub use position::{Position, format_location};
pub use rules::evaluate;
pub use types::{Board, Cell, Player};
pub use view::{CellView, GameView, MoveListEntry, status_text};

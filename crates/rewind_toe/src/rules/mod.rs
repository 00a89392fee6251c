//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are kept apart from
//! history bookkeeping so they can be called on any snapshot.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, evaluate, winner};

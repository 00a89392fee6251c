//! Rewind Toe frontends
//!
//! Terminal presentation for the `rewind_toe` game engine.
//!
//! # Architecture
//!
//! - **TUI**: full-screen ratatui frontend with a board and a move list
//! - **Replay**: headless frontend that plays a fixed sequence and prints the view
//! - **Config**: TOML settings plus CLI overrides
//! - **Logging**: tracing to a file so output never corrupts the screen

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
pub mod logging;
pub mod replay;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, Settings};
pub use replay::ReplayRequest;
pub use tui::App;

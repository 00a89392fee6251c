//! Headless frontend: play a fixed sequence and print the resulting view.

use anyhow::{Context, Result};
use rewind_toe::{GameState, GameView, MoveOrder, Position};
use std::io::Write;
use tracing::{info, instrument};

/// What to replay and how to print it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayRequest {
    /// Cells to play in order.
    pub cells: Vec<usize>,
    /// Move to jump to afterwards.
    pub jump: Option<usize>,
    /// Move list order.
    pub order: MoveOrder,
    /// Emit JSON instead of text.
    pub json: bool,
}

/// Plays `request.cells` on a fresh game and applies the jump.
///
/// Unlike the interactive frontend, a rejected move or jump is an error
/// here: the caller asked for an exact sequence.
#[instrument]
pub fn replay(request: &ReplayRequest) -> Result<GameState> {
    let mut game = GameState::with_order(request.order);

    for (n, cell) in request.cells.iter().enumerate() {
        let pos = Position::try_from(*cell)?;
        game.play(pos)
            .with_context(|| format!("Move #{} at cell {} was rejected", n + 1, cell))?;
    }
    if let Some(target) = request.jump {
        game.jump_to(target)
            .with_context(|| format!("Cannot jump to move #{}", target))?;
    }

    info!(moves = game.len() - 1, current_move = game.current_move(), "Replay finished");
    Ok(game)
}

/// Plays the request and writes the view to `out`.
pub fn run(request: &ReplayRequest, show_cell_numbers: bool, out: &mut impl Write) -> Result<()> {
    let view = replay(request)?.view();
    if request.json {
        serde_json::to_writer_pretty(&mut *out, &view).context("Failed to encode view")?;
        writeln!(out)?;
    } else {
        write!(out, "{}", render_text(&view, show_cell_numbers))?;
    }
    Ok(())
}

/// Renders a view as plain text.
///
/// Winning cells are bracketed and the current move is marked with `>`.
pub fn render_text(view: &GameView, show_cell_numbers: bool) -> String {
    let mut text = String::new();

    for (row, cells) in view.cells().chunks(3).enumerate() {
        let line: Vec<String> = cells
            .iter()
            .map(|c| {
                let mark = match c.cell().mark() {
                    Some(mark) => mark.to_string(),
                    None if show_cell_numbers => (c.position().to_index() + 1).to_string(),
                    None => " ".to_string(),
                };
                if *c.highlighted() {
                    format!("[{}]", mark)
                } else {
                    format!(" {} ", mark)
                }
            })
            .collect();
        text.push_str(&line.join("|"));
        text.push('\n');
        if row < 2 {
            text.push_str("---+---+---\n");
        }
    }

    text.push('\n');
    text.push_str(view.status());
    text.push('\n');
    text.push_str(view.heading());
    text.push('\n');
    text.push_str(view.toggle_label());
    text.push('\n');
    for entry in view.moves() {
        let marker = if *entry.is_current() { '>' } else { ' ' };
        text.push_str(&format!("{} {}\n", marker, entry.label()));
    }
    text
}

//! Terminal UI for Rewind Toe

mod app;
mod input;
mod ui;

pub use app::{Action, App, Focus};
pub use input::{Direction, move_cursor};
pub use ui::draw;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};

/// Runs the TUI until the user quits.
#[instrument(skip(app))]
pub fn run_tui(mut app: App) -> Result<()> {
    info!("Starting Rewind Toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    info!(moves = app.game().len() - 1, "Session ended");

    res
}

/// Redraws after every key until [`Action::Quit`].
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code) == Action::Quit
        {
            info!("User quit");
            return Ok(());
        }
    }
}

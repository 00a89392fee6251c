//! Rewind Toe - Unified CLI

use anyhow::{Context, Result};
use clap::Parser;
use rewind_toe::MoveOrder;
use rewind_toe_tui::{App, Cli, Command, ReplayRequest, Settings, logging, replay, tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;
    if let Some(log_file) = cli.log_file {
        settings = settings.with_log_file(log_file);
    }
    logging::init(settings.log_file(), settings.log_filter())?;
    info!(?settings, "Settings resolved");

    match cli.command.unwrap_or(Command::Play { descending: false }) {
        Command::Play { descending } => {
            let order = if descending {
                MoveOrder::Descending
            } else {
                *settings.initial_order()
            };
            tui::run_tui(App::new(order, *settings.show_cell_numbers()))
        }
        Command::Replay {
            cells,
            jump,
            descending,
            json,
        } => {
            let request = ReplayRequest {
                cells: cells.into_iter().map(usize::from).collect(),
                jump,
                order: if descending {
                    MoveOrder::Descending
                } else {
                    *settings.initial_order()
                },
                json,
            };
            let mut stdout = std::io::stdout().lock();
            replay::run(&request, *settings.show_cell_numbers(), &mut stdout)
        }
    }
}

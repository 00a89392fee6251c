//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use rewind_toe::{Cell, GameView, Player, Position};

use super::app::{App, Focus};

const HELP: &str = "1-9/Enter: play  arrows/hjkl: move  Tab: board/history  o: order  q: quit";

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.view();
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(13),   // Board + history
            Constraint::Length(3), // Message
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Rewind Toe - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    draw_game(frame, columns[0], app, &view);
    draw_history(frame, columns[1], app, &view);

    let message = Paragraph::new(app.message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(message, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_game(frame: &mut Frame, area: Rect, app: &App, view: &GameView) {
    let block = Block::default().title("Board").borders(Borders::ALL).border_style(
        if app.focus() == Focus::Board {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        },
    );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(5)])
        .split(inner);

    let status = Paragraph::new(view.status().as_str())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(status, rows[0]);

    draw_board(frame, rows[1], app, view);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, view: &GameView) {
    // Center the board
    let board_area = center_rect(area, 23, 5);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(board_area);

    draw_row(frame, rows[0], app, view, &[Position::TopLeft, Position::TopCenter, Position::TopRight]);
    draw_separator(frame, rows[1]);
    draw_row(frame, rows[2], app, view, &[Position::MiddleLeft, Position::Center, Position::MiddleRight]);
    draw_separator(frame, rows[3]);
    draw_row(frame, rows[4], app, view, &[Position::BottomLeft, Position::BottomCenter, Position::BottomRight]);
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, view: &GameView, positions: &[Position; 3]) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
        ])
        .split(area);

    draw_cell(frame, cols[0], app, view, positions[0]);
    draw_separator_vertical(frame, cols[1]);
    draw_cell(frame, cols[2], app, view, positions[1]);
    draw_separator_vertical(frame, cols[3]);
    draw_cell(frame, cols[4], app, view, positions[2]);
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, view: &GameView, pos: Position) {
    let cell = view.cell(pos);

    let (symbol, mut style) = match cell.cell() {
        Cell::Empty if app.show_cell_numbers() => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Empty => (" ".to_string(), Style::default()),
        Cell::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if *cell.highlighted() {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if app.focus() == Focus::Board && pos == app.cursor() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let paragraph = Paragraph::new(Line::from(Span::styled(format!(" {} ", symbol), style)))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("───────┼───────┼───────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App, view: &GameView) {
    let block = Block::default()
        .title(format!("{} [o: {}]", view.heading(), view.toggle_label()))
        .borders(Borders::ALL)
        .border_style(if app.focus() == Focus::History {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        });

    let items: Vec<ListItem> = view
        .moves()
        .iter()
        .map(|entry| {
            let style = if *entry.is_current() {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(entry.label().clone(), style)))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if app.focus() == Focus::History {
        state.select(Some(app.selected()));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend};
    use rewind_toe::MoveOrder;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_renders_status_and_move_list() {
        let mut app = App::new(MoveOrder::Ascending, true);
        app.handle_key(KeyCode::Char('5'));
        let screen = render(&app);
        assert!(screen.contains("Next player: O"));
        assert!(screen.contains("You are at move #1"));
        assert!(screen.contains("Go to game start"));
        assert!(screen.contains("Go to move #1 (1, 1)"));
        assert!(screen.contains("X played (1, 1)"));
    }

    #[test]
    fn test_renders_winner() {
        let mut app = App::new(MoveOrder::Ascending, false);
        for key in ['1', '4', '2', '5', '3'] {
            app.handle_key(KeyCode::Char(key));
        }
        let screen = render(&app);
        assert!(screen.contains("Winner: X"));
        assert!(screen.contains("Go to move #5 (0, 2)"));
    }
}

//! Application state and key handling.

use super::input::{Direction, move_cursor};
use crossterm::event::KeyCode;
use rewind_toe::{GameState, GameView, MoveOrder, Position};
use tracing::{debug, instrument};

/// Panel receiving navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    Board,
    /// Arrow keys move the move-list selection.
    History,
}

/// What the event loop does after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
///
/// Owns the game and the purely visual state around it: the board cursor,
/// which panel has focus, and the selected move-list row.
#[derive(Debug, Clone)]
pub struct App {
    game: GameState,
    cursor: Position,
    focus: Focus,
    selected: usize,
    message: String,
    show_cell_numbers: bool,
}

impl App {
    /// Creates a new application around a fresh game.
    pub fn new(order: MoveOrder, show_cell_numbers: bool) -> Self {
        Self {
            game: GameState::with_order(order),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            message: "Player X's turn.".to_string(),
            show_cell_numbers,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// View of the game to render.
    pub fn view(&self) -> GameView {
        self.game.view()
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Panel with focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected row of the move list, in display order.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Gets the current status message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether empty cells show their number.
    pub fn show_cell_numbers(&self) -> bool {
        self.show_cell_numbers
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) -> Action {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Action::Quit,
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Board => Focus::History,
                    Focus::History => Focus::Board,
                };
            }
            KeyCode::Char('o') => self.toggle_order(),
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(pos) = c.to_digit(10).and_then(|d| Position::from_index(d as usize - 1)) {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => self.play(self.cursor),
                Focus::History => self.jump_to_selected(),
            },
            other => {
                if let Some(direction) = Direction::from_key(other) {
                    self.navigate(direction);
                }
            }
        }
        Action::Continue
    }

    fn navigate(&mut self, direction: Direction) {
        match self.focus {
            Focus::Board => self.cursor = move_cursor(self.cursor, direction),
            Focus::History => {
                let last = self.game.len() - 1;
                self.selected = match direction {
                    Direction::Up | Direction::Left => self.selected.saturating_sub(1),
                    Direction::Down | Direction::Right => (self.selected + 1).min(last),
                };
            }
        }
    }

    fn play(&mut self, pos: Position) {
        match self.game.play(pos) {
            Ok(mv) => {
                debug!(%mv, "Move applied to UI state");
                self.message = format!("{} played {}", mv.player, pos.location());
                self.select_current();
            }
            Err(e) => {
                debug!(error = %e, "Move rejected");
                self.message = e.to_string();
            }
        }
    }

    fn jump_to_selected(&mut self) {
        let Some(target) = self
            .game
            .view()
            .moves()
            .get(self.selected)
            .map(|entry| *entry.move_number())
        else {
            return;
        };
        match self.game.jump_to(target) {
            Ok(()) => self.message = format!("Jumped to move #{}", target),
            Err(e) => self.message = e.to_string(),
        }
    }

    fn toggle_order(&mut self) {
        self.game.toggle_order();
        // Keep the same move selected after the list flips.
        self.selected = self.game.len() - 1 - self.selected;
        self.message = format!("Move list {}", self.game.order().label());
    }

    fn select_current(&mut self) {
        if let Some(row) = self.game.view().moves().iter().position(|m| *m.is_current()) {
            self.selected = row;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_toe::{Cell, Player};

    fn app() -> App {
        App::new(MoveOrder::Ascending, true)
    }

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            assert_eq!(app.handle_key(*key), Action::Continue);
        }
    }

    #[test]
    fn test_digit_plays_cell() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('1')]);
        assert_eq!(
            app.game().current_board().get(Position::TopLeft),
            Cell::Occupied(Player::X)
        );
        assert_eq!(app.message(), "X played (0, 0)");
        assert_eq!(app.selected(), 1);
    }

    #[test]
    fn test_enter_plays_at_cursor() {
        let mut app = app();
        press(&mut app, &[KeyCode::Up, KeyCode::Right, KeyCode::Enter]);
        assert_eq!(app.cursor(), Position::TopRight);
        assert_eq!(app.game().history()[1].origin(), &Some(Position::TopRight));
    }

    #[test]
    fn test_occupied_cell_shows_error() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('5'), KeyCode::Char('5')]);
        assert_eq!(app.game().len(), 2);
        assert_eq!(app.message(), "Square Center is already occupied");
    }

    #[test]
    fn test_history_focus_jumps() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('5'), KeyCode::Char('9')]);
        press(&mut app, &[KeyCode::Tab, KeyCode::Up, KeyCode::Up, KeyCode::Enter]);
        assert_eq!(app.focus(), Focus::History);
        assert_eq!(app.game().current_move(), 1);
        assert_eq!(app.game().len(), 4);
        assert_eq!(app.message(), "Jumped to move #1");
    }

    #[test]
    fn test_toggle_keeps_selected_move() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('5')]);
        assert_eq!(app.selected(), 2);
        press(&mut app, &[KeyCode::Char('o')]);
        assert_eq!(app.game().order(), MoveOrder::Descending);
        assert_eq!(app.selected(), 0);
        let view = app.view();
        assert_eq!(*view.moves()[app.selected()].move_number(), 2);
    }

    #[test]
    fn test_play_after_jump_branches() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('5'), KeyCode::Char('9')]);
        press(&mut app, &[KeyCode::Tab, KeyCode::Up, KeyCode::Enter, KeyCode::Tab]);
        press(&mut app, &[KeyCode::Char('3')]);
        assert_eq!(app.game().len(), 4);
        assert_eq!(app.game().history()[3].origin(), &Some(Position::TopRight));
        assert_eq!(app.selected(), 3);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert_eq!(app.handle_key(KeyCode::Char('q')), Action::Quit);
        assert_eq!(app.handle_key(KeyCode::Esc), Action::Quit);
    }
}

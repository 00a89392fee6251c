//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use rewind_toe::Position;

/// Direction of a navigation key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Up arrow or `k`.
    Up,
    /// Down arrow or `j`.
    Down,
    /// Left arrow or `h`.
    Left,
    /// Right arrow or `l`.
    Right,
}

impl Direction {
    /// Maps arrow keys and `h j k l` to a direction.
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::Up | KeyCode::Char('k') => Some(Self::Up),
            KeyCode::Down | KeyCode::Char('j') => Some(Self::Down),
            KeyCode::Left | KeyCode::Char('h') => Some(Self::Left),
            KeyCode::Right | KeyCode::Char('l') => Some(Self::Right),
            _ => None,
        }
    }
}

/// Moves the board cursor one cell, stopping at the edges.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => ((row + 1).min(2), col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, (col + 1).min(2)),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, Direction::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, Direction::Down), Position::BottomCenter);
        assert_eq!(move_cursor(Position::Center, Direction::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::Center, Direction::Right), Position::MiddleRight);
    }

    #[test]
    fn test_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, Direction::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, Direction::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, Direction::Right), Position::BottomRight);
    }

    #[test]
    fn test_vim_keys() {
        assert_eq!(Direction::from_key(KeyCode::Char('k')), Some(Direction::Up));
        assert_eq!(Direction::from_key(KeyCode::Char('x')), None);
    }
}

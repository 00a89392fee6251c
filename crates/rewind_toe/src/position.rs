//! Cell positions and their human-readable locations.

use super::error::GameError;
use serde::{Deserialize, Serialize};

/// A position on the tic-tac-toe board (0-8, row-major).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row of this position (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this position (0-2).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Location label in `(row, col)` form.
    pub fn location(self) -> String {
        format!("({}, {})", self.row(), self.col())
    }
}

impl TryFrom<usize> for Position {
    type Error = GameError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_index(index).ok_or(GameError::InvalidPosition(index))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Formats a linear cell index as `(row, col)`.
///
/// # Panics
///
/// Panics if `index` is outside 0..=8; such an index can only come from a
/// broken caller.
pub fn format_location(index: usize) -> String {
    match Position::from_index(index) {
        Some(pos) => pos.location(),
        None => panic!("cell index {index} is outside the board (0-8)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_format_location() {
        assert_eq!(format_location(0), "(0, 0)");
        assert_eq!(format_location(4), "(1, 1)");
        assert_eq!(format_location(5), "(1, 2)");
        assert_eq!(format_location(8), "(2, 2)");
    }

    #[test]
    #[should_panic(expected = "outside the board")]
    fn test_format_location_out_of_range() {
        format_location(9);
    }

    #[test]
    fn test_index_round_trip_matches_iteration_order() {
        for (index, pos) in Position::iter().enumerate() {
            assert_eq!(pos.to_index(), index);
            assert_eq!(Position::from_index(index), Some(pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_try_from_rejects_out_of_range() {
        assert_eq!(Position::try_from(4), Ok(Position::Center));
        assert_eq!(Position::try_from(12), Err(GameError::InvalidPosition(12)));
    }
}

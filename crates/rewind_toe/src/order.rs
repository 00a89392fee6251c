//! Presentation order of the move list.

use serde::{Deserialize, Serialize};

/// Order in which the move list is presented.
///
/// Defaults to [`MoveOrder::Ascending`], game start first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveOrder {
    /// Game start first, latest move last.
    #[default]
    Ascending,
    /// Latest move first, game start last.
    Descending,
}

impl MoveOrder {
    /// Returns the display label for this order.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }

    /// Toggles between `Ascending` and `Descending`.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Returns `items` in this order without touching the input.
    pub fn arrange<T: Clone>(self, items: &[T]) -> Vec<T> {
        match self {
            Self::Ascending => items.to_vec(),
            Self::Descending => items.iter().rev().cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_involution() {
        assert_eq!(MoveOrder::Ascending.toggle(), MoveOrder::Descending);
        assert_eq!(MoveOrder::Ascending.toggle().toggle(), MoveOrder::Ascending);
    }

    #[test]
    fn test_arrange_does_not_mutate() {
        let items = vec![0, 1, 2];
        assert_eq!(MoveOrder::Descending.arrange(&items), vec![2, 1, 0]);
        assert_eq!(MoveOrder::Ascending.arrange(&items), vec![0, 1, 2]);
        assert_eq!(items, vec![0, 1, 2]);
    }
}

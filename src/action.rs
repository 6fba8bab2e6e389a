//! First-class action types for tic-tac-toe.
//!
//! Actions are domain events, not side effects. They represent
//! the intent to mark a square and can be validated independently
//! of execution.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move in tic-tac-toe: marking the square at (row, column).
///
/// Both coordinates are meant to lie in [0, 2]. Out-of-range actions are
/// representable so that callers can hand them to [`Board::apply`] and get a
/// typed rejection back instead of a panic.
///
/// Actions are first-class domain events that can be:
/// - Validated before application
/// - Serialized for replay
/// - Logged for debugging
///
/// [`Board::apply`]: crate::Board::apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    /// Row of the addressed square (0 is the top row).
    pub row: usize,
    /// Column of the addressed square (0 is the left column).
    pub col: usize,
}

impl Action {
    /// All 9 actions in lexicographic (row, column) order.
    ///
    /// This constant fixes the enumeration order of the action generator,
    /// which makes first-found tie-breaking deterministic.
    pub const ALL: [Action; 9] = [
        Action { row: 0, col: 0 },
        Action { row: 0, col: 1 },
        Action { row: 0, col: 2 },
        Action { row: 1, col: 0 },
        Action { row: 1, col: 1 },
        Action { row: 1, col: 2 },
        Action { row: 2, col: 0 },
        Action { row: 2, col: 1 },
        Action { row: 2, col: 2 },
    ];

    /// Creates a new action.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row of this action.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the column of this action.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Converts the action to a row-major board index (0-8), or `None`
    /// when a coordinate falls outside the grid.
    pub fn index(self) -> Option<usize> {
        if self.row < 3 && self.col < 3 {
            Some(self.row * 3 + self.col)
        } else {
            None
        }
    }

    /// Creates the action addressing a row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        if index < 9 {
            Some(Self {
                row: index / 3,
                col: index % 3,
            })
        } else {
            None
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

//! Core domain types for tic-tac-toe.

use crate::action::Action;
use crate::error::Error;
use crate::invariants::{self, Invariant};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Character form used by the board's text format.
    pub fn to_char(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }

    /// Parses a square from its character form.
    pub fn from_char(c: char) -> Option<Square> {
        match c {
            '.' => Some(Square::Empty),
            'X' | 'x' => Some(Square::Occupied(Player::X)),
            'O' | 'o' => Some(Square::Occupied(Player::O)),
            _ => None,
        }
    }
}

/// Game-theoretic value of a terminal board, always from X's perspective.
///
/// The derived ordering runs `OWins < Draw < XWins`, so X maximizes and
/// O minimizes over the same type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Score {
    /// O has three in a row (value -1).
    OWins,
    /// Full board, no winner (value 0).
    Draw,
    /// X has three in a row (value 1).
    XWins,
}

impl Score {
    /// Numeric value of the outcome: +1 for X, -1 for O, 0 for a draw.
    pub fn value(self) -> i8 {
        match self {
            Score::OWins => -1,
            Score::Draw => 0,
            Score::XWins => 1,
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// A board is an immutable value: [`Board::apply`] allocates a successor and
/// never touches the original, so search branches share nothing. Whose turn
/// it is falls out of the mark counts rather than a stored field, which keeps
/// externally supplied boards from carrying an inconsistent turn marker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from rows of squares.
    ///
    /// # Errors
    ///
    /// Rejects configurations that cannot arise from alternating play:
    /// [`Error::ImbalancedMarks`] when the mark counts are off,
    /// [`Error::ConflictingWinners`] when both players hold a completed line.
    pub fn from_rows(rows: [[Square; 3]; 3]) -> Result<Self, Error> {
        let mut squares = [Square::Empty; 9];
        for (r, row) in rows.iter().enumerate() {
            for (c, &square) in row.iter().enumerate() {
                squares[r * 3 + c] = square;
            }
        }
        let board = Self { squares };
        invariants::verify(&board)?;
        Ok(board)
    }

    /// Gets the square addressed by the action, or `None` if the action's
    /// coordinates lie outside the grid.
    pub fn get(&self, action: Action) -> Option<Square> {
        self.squares.get(action.index()?).copied()
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Sets a square without validation. Test fixtures only.
    #[cfg(test)]
    pub(crate) fn set(&mut self, action: Action, square: Square) {
        self.squares[action.index().expect("fixture action in range")] = square;
    }

    /// Returns the player who moves next.
    ///
    /// X opens, so an even number of occupied squares means X is to move and
    /// an odd number means O. Total on every board, including the empty one.
    pub fn turn(&self) -> Player {
        let occupied = self
            .squares
            .iter()
            .filter(|s| !matches!(s, Square::Empty))
            .count();
        if occupied % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Returns every action addressing an empty square.
    ///
    /// Enumeration order is fixed lexicographic (row, column), so callers that
    /// break ties by first-found get a deterministic result. Empty exactly
    /// when the board is full; a decided but unfilled board still lists its
    /// open squares.
    pub fn actions(&self) -> Vec<Action> {
        Action::ALL
            .iter()
            .copied()
            .filter(|&a| self.get(a) == Some(Square::Empty))
            .collect()
    }

    /// Applies an action for the player to move, returning the successor.
    ///
    /// The mark placed belongs to whoever's turn it was on `self`. The input
    /// board is never modified, even on failure.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] when a coordinate falls outside the grid,
    /// [`Error::SquareOccupied`] when the addressed square is taken.
    #[instrument(skip(self), fields(action = %action))]
    pub fn apply(&self, action: Action) -> Result<Board, Error> {
        let index = action.index().ok_or(Error::OutOfRange(action))?;
        match self.squares[index] {
            Square::Occupied(_) => Err(Error::SquareOccupied(action)),
            Square::Empty => {
                let mut next = self.clone();
                next.squares[index] = Square::Occupied(self.turn());
                debug_assert!(invariants::BalancedMarks::holds(&next));
                Ok(next)
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..3 {
                write!(f, "{}", self.squares[row * 3 + col].to_char())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Parses the 9-character text form, ignoring whitespace.
    ///
    /// `.` marks an empty square; `X`/`O` (either case) mark the players.
    /// The parsed board is validated like [`Board::from_rows`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if cells.len() != 9 {
            return Err(Error::CellCount(cells.len()));
        }

        let mut squares = [Square::Empty; 9];
        for (i, &c) in cells.iter().enumerate() {
            squares[i] = Square::from_char(c).ok_or(Error::UnknownCell(c))?;
        }

        let board = Self { squares };
        invariants::verify(&board)?;
        Ok(board)
    }
}

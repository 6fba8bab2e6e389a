//! First-class invariants for board well-formedness.
//!
//! Invariants are logical properties every board reachable by alternating
//! play satisfies. Boards built by [`Board::apply`] maintain them by
//! construction; boards supplied from outside the crate are checked against
//! them before use.
//!
//! [`Board::apply`]: crate::Board::apply

use crate::error::Error;
use crate::rules;
use crate::types::{Board, Player, Square};
use tracing::warn;

/// A logical property that must hold for a well-formed board.
pub trait Invariant {
    /// Checks if the invariant holds for the given board.
    fn holds(board: &Board) -> bool;

    /// The typed error reported when the invariant is violated.
    fn violation(board: &Board) -> Error;

    /// Checks the invariant, reporting the violation as an error.
    fn check(board: &Board) -> Result<(), Error> {
        if Self::holds(board) {
            Ok(())
        } else {
            Err(Self::violation(board))
        }
    }
}

/// Invariant: X leads O by at most one mark and never trails.
///
/// X opens and the players alternate, so every reachable board has either
/// equal counts or exactly one more X.
pub struct BalancedMarks;

impl BalancedMarks {
    fn counts(board: &Board) -> (usize, usize) {
        let mut x_count = 0;
        let mut o_count = 0;
        for square in board.squares() {
            match square {
                Square::Occupied(Player::X) => x_count += 1,
                Square::Occupied(Player::O) => o_count += 1,
                Square::Empty => {}
            }
        }
        (x_count, o_count)
    }
}

impl Invariant for BalancedMarks {
    fn holds(board: &Board) -> bool {
        let (x_count, o_count) = Self::counts(board);
        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Mark balance violated");
        }
        valid
    }

    fn violation(board: &Board) -> Error {
        let (x_count, o_count) = Self::counts(board);
        Error::ImbalancedMarks { x_count, o_count }
    }
}

/// Invariant: at most one player holds a completed line.
pub struct SingleWinner;

impl Invariant for SingleWinner {
    fn holds(board: &Board) -> bool {
        rules::winner(board).is_ok()
    }

    fn violation(_board: &Board) -> Error {
        Error::ConflictingWinners
    }
}

/// Checks every board invariant, reporting the first violation.
///
/// # Errors
///
/// [`Error::ImbalancedMarks`] or [`Error::ConflictingWinners`] for boards no
/// sequence of alternating legal moves can produce.
pub fn verify(board: &Board) -> Result<(), Error> {
    BalancedMarks::check(board)?;
    SingleWinner::check(board)?;
    Ok(())
}

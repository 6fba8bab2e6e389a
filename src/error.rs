//! Typed failures reported to the caller.
//!
//! Every failure is surfaced as a variant here; nothing is silently
//! recovered. Given a well-formed, non-terminal board the search itself
//! never fails.

use crate::action::Action;

/// Error that can occur when validating a board or applying an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Error {
    /// The square at the action's coordinates is already occupied.
    #[display("Invalid action {}: square is already occupied", _0)]
    SquareOccupied(Action),

    /// The action's coordinates lie outside the 3x3 grid.
    #[display("Invalid action {}: coordinates out of range", _0)]
    OutOfRange(Action),

    /// Utility was requested for a board where the game has not ended.
    #[display("Utility is undefined: the game is still in progress")]
    NotTerminal,

    /// Both players hold a completed line, which alternating play cannot
    /// produce.
    #[display("Malformed board: both players have three in a row")]
    ConflictingWinners,

    /// The mark counts cannot arise from alternating play starting with X.
    #[display(
        "Malformed board: {} X marks and {} O marks cannot arise from alternating play",
        x_count,
        o_count
    )]
    ImbalancedMarks {
        /// Number of X marks on the board.
        x_count: usize,
        /// Number of O marks on the board.
        o_count: usize,
    },

    /// The board's text form did not contain exactly 9 cells.
    #[display("Expected 9 cells in the board text, got {}", _0)]
    CellCount(usize),

    /// The board's text form contained an unrecognized cell character.
    #[display("Unrecognized cell character '{}'", _0)]
    UnknownCell(char),
}

impl std::error::Error for Error {}

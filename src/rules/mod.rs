//! Outcome detection: winner, terminality, and utility of a board.

mod draw;
mod win;

pub use draw::is_full;
pub use win::winner;

use crate::error::Error;
use crate::types::{Board, Player, Score};

/// Checks whether the game has ended.
///
/// A board is terminal when a player has completed a line or every square
/// is occupied.
///
/// # Errors
///
/// Propagates [`Error::ConflictingWinners`] from [`winner`] on malformed
/// boards.
pub fn is_terminal(board: &Board) -> Result<bool, Error> {
    Ok(winner(board)?.is_some() || is_full(board))
}

/// Returns the game-theoretic value of a terminal board.
///
/// Winner X maps to [`Score::XWins`], winner O to [`Score::OWins`], and a
/// full board without a winner to [`Score::Draw`].
///
/// # Errors
///
/// [`Error::NotTerminal`] when the game has not ended; the search never asks
/// for the utility of a live board, so this signals a caller bug.
pub fn utility(board: &Board) -> Result<Score, Error> {
    match winner(board)? {
        Some(Player::X) => Ok(Score::XWins),
        Some(Player::O) => Ok(Score::OWins),
        None if is_full(board) => Ok(Score::Draw),
        None => Err(Error::NotTerminal),
    }
}

//! Win detection logic for tic-tac-toe.

use crate::action::Action;
use crate::error::Error;
use crate::types::{Board, Player, Square};
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if that player has three in a row, column, or
/// diagonal, `None` if no line is complete.
///
/// # Errors
///
/// Alternating play can never complete a line for both players, so finding
/// one for each means the board came from a malformed external source;
/// returns [`Error::ConflictingWinners`] rather than silently picking one.
#[instrument]
pub fn winner(board: &Board) -> Result<Option<Player>, Error> {
    const LINES: [[Action; 3]; 8] = [
        // Rows
        [
            Action { row: 0, col: 0 },
            Action { row: 0, col: 1 },
            Action { row: 0, col: 2 },
        ],
        [
            Action { row: 1, col: 0 },
            Action { row: 1, col: 1 },
            Action { row: 1, col: 2 },
        ],
        [
            Action { row: 2, col: 0 },
            Action { row: 2, col: 1 },
            Action { row: 2, col: 2 },
        ],
        // Columns
        [
            Action { row: 0, col: 0 },
            Action { row: 1, col: 0 },
            Action { row: 2, col: 0 },
        ],
        [
            Action { row: 0, col: 1 },
            Action { row: 1, col: 1 },
            Action { row: 2, col: 1 },
        ],
        [
            Action { row: 0, col: 2 },
            Action { row: 1, col: 2 },
            Action { row: 2, col: 2 },
        ],
        // Diagonals
        [
            Action { row: 0, col: 0 },
            Action { row: 1, col: 1 },
            Action { row: 2, col: 2 },
        ],
        [
            Action { row: 0, col: 2 },
            Action { row: 1, col: 1 },
            Action { row: 2, col: 0 },
        ],
    ];

    let mut found: Option<Player> = None;

    for [a, b, c] in LINES {
        let sq = board.get(a);
        if let Some(Square::Occupied(player)) = sq
            && sq == board.get(b)
            && sq == board.get(c)
        {
            match found {
                None => found = Some(player),
                Some(prev) if prev != player => return Err(Error::ConflictingWinners),
                Some(_) => {}
            }
        }
    }

    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winner(&board), Ok(None));
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(Action::new(0, 0), Square::Occupied(Player::X));
        board.set(Action::new(0, 1), Square::Occupied(Player::X));
        board.set(Action::new(0, 2), Square::Occupied(Player::X));
        assert_eq!(winner(&board), Ok(Some(Player::X)));
    }

    #[test]
    fn test_winner_middle_column() {
        let mut board = Board::new();
        board.set(Action::new(0, 1), Square::Occupied(Player::O));
        board.set(Action::new(1, 1), Square::Occupied(Player::O));
        board.set(Action::new(2, 1), Square::Occupied(Player::O));
        assert_eq!(winner(&board), Ok(Some(Player::O)));
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        board.set(Action::new(0, 0), Square::Occupied(Player::O));
        board.set(Action::new(1, 1), Square::Occupied(Player::O));
        board.set(Action::new(2, 2), Square::Occupied(Player::O));
        assert_eq!(winner(&board), Ok(Some(Player::O)));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        board.set(Action::new(0, 2), Square::Occupied(Player::X));
        board.set(Action::new(1, 1), Square::Occupied(Player::X));
        board.set(Action::new(2, 0), Square::Occupied(Player::X));
        assert_eq!(winner(&board), Ok(Some(Player::X)));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.set(Action::new(0, 0), Square::Occupied(Player::X));
        board.set(Action::new(0, 1), Square::Occupied(Player::X));
        assert_eq!(winner(&board), Ok(None));
    }

    #[test]
    fn test_two_lines_for_one_player_is_fine() {
        // X holds the top row and the left column at once.
        let mut board = Board::new();
        for action in [
            Action::new(0, 0),
            Action::new(0, 1),
            Action::new(0, 2),
            Action::new(1, 0),
            Action::new(2, 0),
        ] {
            board.set(action, Square::Occupied(Player::X));
        }
        assert_eq!(winner(&board), Ok(Some(Player::X)));
    }

    #[test]
    fn test_conflicting_winners_rejected() {
        let mut board = Board::new();
        for col in 0..3 {
            board.set(Action::new(0, col), Square::Occupied(Player::X));
            board.set(Action::new(1, col), Square::Occupied(Player::O));
        }
        assert_eq!(winner(&board), Err(Error::ConflictingWinners));
    }
}

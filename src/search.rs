//! Exhaustive minimax search for optimal play.
//!
//! The game tree is small enough (at most 9! leaf evaluations) to search
//! completely with plain recursion, so no transposition table or pruning
//! machinery is involved. The inner recursion may stop scanning a node once
//! a branch reaches the best score its player can attain; the top-level
//! decision point always scores every candidate.

use crate::action::Action;
use crate::error::Error;
use crate::invariants;
use crate::rules;
use crate::types::{Board, Player, Score};
use tracing::{debug, instrument};

/// Returns the optimal action for the player whose turn it is.
///
/// Assumes both sides play perfectly from here on: X picks the action
/// maximizing the terminal value, O the one minimizing it. Ties resolve to
/// the first optimum in the generator's (row, column) order. Terminal boards
/// have no move to make, so they yield `Ok(None)`.
///
/// # Errors
///
/// [`Error::ImbalancedMarks`] or [`Error::ConflictingWinners`] when the
/// board could not have been produced by alternating play. Well-formed
/// boards never fail.
#[instrument(skip(board))]
pub fn best_action(board: &Board) -> Result<Option<Action>, Error> {
    invariants::verify(board)?;
    if rules::is_terminal(board)? {
        return Ok(None);
    }

    let mover = board.turn();
    let mut best: Option<(Action, Score)> = None;

    // Score every candidate before committing; only the recursion below is
    // allowed to cut off early.
    for action in board.actions() {
        let score = match mover {
            Player::X => min_value(&board.apply(action)?)?,
            Player::O => max_value(&board.apply(action)?)?,
        };
        let improves = match best {
            None => true,
            Some((_, best_score)) => match mover {
                Player::X => score > best_score,
                Player::O => score < best_score,
            },
        };
        if improves {
            best = Some((action, score));
        }
    }

    if let Some((action, score)) = best {
        debug!(player = ?mover, %action, ?score, "Optimal action selected");
    }
    Ok(best.map(|(action, _)| action))
}

/// Value of a board when the player to move maximizes (X's turn).
fn max_value(board: &Board) -> Result<Score, Error> {
    if rules::is_terminal(board)? {
        return rules::utility(board);
    }

    let mut value = Score::OWins;
    for action in board.actions() {
        value = value.max(min_value(&board.apply(action)?)?);
        if value == Score::XWins {
            // The maximum attainable score; later branches cannot improve it.
            break;
        }
    }
    Ok(value)
}

/// Value of a board when the player to move minimizes (O's turn).
fn min_value(board: &Board) -> Result<Score, Error> {
    if rules::is_terminal(board)? {
        return rules::utility(board);
    }

    let mut value = Score::XWins;
    for action in board.actions() {
        value = value.min(max_value(&board.apply(action)?)?);
        if value == Score::OWins {
            break;
        }
    }
    Ok(value)
}

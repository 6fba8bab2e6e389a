//! Strictly Minimax - pure tic-tac-toe game logic with optimal play.
//!
//! This library computes optimal tic-tac-toe play via exhaustive game-tree
//! search. It is a pure computational core: no I/O, no shared state, no
//! player loop. A front end drives it by alternating [`Board::apply`] with
//! [`best_action`].
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Player`], [`Square`], [`Score`] - immutable
//!   board values; whose turn it is derives from the mark counts
//! - **Actions**: [`Action`] - first-class (row, column) move events
//! - **Rules**: [`winner`], [`is_terminal`], [`utility`] - outcome detection
//! - **Invariants**: [`verify`] - well-formedness checks for boards supplied
//!   from outside the crate
//! - **Search**: [`best_action`] - exhaustive minimax over the full game tree
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{best_action, is_terminal, Board};
//!
//! # fn example() -> Result<(), strictly_minimax::Error> {
//! let mut board = Board::new();
//! while !is_terminal(&board)? {
//!     let action = best_action(&board)?.expect("non-terminal board has a move");
//!     board = board.apply(action)?;
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod error;
mod invariants;
mod rules;
mod search;
mod types;

// Crate-level exports - Actions
pub use action::Action;

// Crate-level exports - Errors
pub use error::Error;

// Crate-level exports - Invariants
pub use invariants::{verify, BalancedMarks, Invariant, SingleWinner};

// Crate-level exports - Rules
pub use rules::{is_full, is_terminal, utility, winner};

// Crate-level exports - Search
pub use search::best_action;

// Crate-level exports - Core types
pub use types::{Board, Player, Score, Square};

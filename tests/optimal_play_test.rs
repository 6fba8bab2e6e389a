//! Tests for optimal play end to end.

use strictly_minimax::{best_action, is_terminal, utility, Action, Board, Player, Score};

/// First-available strategy: take the lowest open square.
fn first_available(board: &Board) -> Action {
    board.actions()[0]
}

/// Plays a full game, letting `plays_optimal` decide which side consults the
/// search; the other side takes the first available square.
fn play_against_naive(plays_optimal: Player) -> Board {
    let mut board = Board::new();
    while !is_terminal(&board).unwrap() {
        let action = if board.turn() == plays_optimal {
            best_action(&board)
                .unwrap()
                .expect("non-terminal board has a move")
        } else {
            first_available(&board)
        };
        board = board.apply(action).unwrap();
    }
    board
}

#[test]
fn test_optimal_self_play_is_a_draw() {
    let mut board = Board::new();
    let mut moves = 0;

    while !is_terminal(&board).unwrap() {
        let action = best_action(&board)
            .unwrap()
            .expect("non-terminal board has a move");
        board = board.apply(action).unwrap();
        moves += 1;
        assert!(moves <= 9, "game must end within nine moves");
    }

    assert_eq!(moves, 9);
    assert_eq!(utility(&board), Ok(Score::Draw));
}

#[test]
fn test_optimal_x_never_loses_to_first_available() {
    let board = play_against_naive(Player::X);
    assert_ne!(utility(&board).unwrap(), Score::OWins);
}

#[test]
fn test_optimal_o_never_loses_to_first_available() {
    let board = play_against_naive(Player::O);
    assert_ne!(utility(&board).unwrap(), Score::XWins);
}

#[test]
fn test_winning_move_taken_whenever_available() {
    // Four openings that each leave the mover an immediate win; the search
    // must complete the line rather than settle for anything slower.
    let cases = [
        ("XX.OO....", Action::new(0, 2)), // X completes the top row
        (".O..XO..X", Action::new(0, 0)), // X completes the main diagonal
        ("XX.OO.X..", Action::new(1, 2)), // O completes the middle row
        ("OX.XO.X..", Action::new(2, 2)), // O completes the diagonal from the other end
    ];

    for (text, expected) in cases {
        let board: Board = text.parse().unwrap();
        assert_eq!(
            best_action(&board).unwrap(),
            Some(expected),
            "board {text} has a winning move at {expected}"
        );
    }
}

#[test]
fn test_block_is_forced_when_behind() {
    // O must block the top row or lose on the spot.
    let board: Board = "XX..O....".parse().unwrap();
    assert_eq!(best_action(&board).unwrap(), Some(Action::new(0, 2)));

    // X must block the middle column or lose on the spot.
    let board: Board = "XOXXO.O..".parse().unwrap();
    assert_eq!(best_action(&board).unwrap(), Some(Action::new(2, 1)));
}

#[test]
fn test_terminal_boards_yield_no_action() {
    let won: Board = "XXXOO....".parse().unwrap();
    assert_eq!(best_action(&won).unwrap(), None);

    let drawn: Board = "XOXOXXOXO".parse().unwrap();
    assert_eq!(best_action(&drawn).unwrap(), None);
}

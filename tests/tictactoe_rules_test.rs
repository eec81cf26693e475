//! Exhaustive checks of win and draw detection over every board.

use tictactoe_bot::{Board, Mark, Position, Square};
use tictactoe_core::rules::{has_won, is_draw};

const TRIPLES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Every assignment of {empty, X, O} to the 9 squares.
fn all_boards() -> impl Iterator<Item = Board> {
    (0..3usize.pow(9)).map(|mut code| {
        let mut board = Board::new();
        for pos in Position::ALL {
            let square = match code % 3 {
                0 => Square::Empty,
                1 => Square::Occupied(Mark::X),
                _ => Square::Occupied(Mark::O),
            };
            board.set(pos, square);
            code /= 3;
        }
        board
    })
}

fn holds_triple(board: &Board, mark: Mark) -> bool {
    TRIPLES.iter().any(|triple| {
        triple
            .iter()
            .all(|&i| board.squares()[i] == Square::Occupied(mark))
    })
}

#[test]
fn test_has_won_matches_the_eight_lines() {
    for board in all_boards() {
        for mark in [Mark::X, Mark::O] {
            assert_eq!(
                has_won(&board, mark),
                holds_triple(&board, mark),
                "board:\n{}",
                board
            );
        }
    }
}

#[test]
fn test_is_draw_iff_full_and_no_winner() {
    let mut draws = 0;
    for board in all_boards() {
        let full = board.squares().iter().all(|s| *s != Square::Empty);
        let expected = full && !holds_triple(&board, Mark::X) && !holds_triple(&board, Mark::O);
        assert_eq!(is_draw(&board), expected, "board:\n{}", board);
        if expected {
            draws += 1;
        }
    }
    assert!(draws > 0);
}

#[test]
fn test_two_of_three_with_gap_never_wins_that_line() {
    for triple in TRIPLES {
        for gap in triple {
            let mut board = Board::new();
            for &i in triple.iter().filter(|&&i| i != gap) {
                board.set(Position::ALL[i], Square::Occupied(Mark::X));
            }
            assert!(!has_won(&board, Mark::X));
        }
    }
}

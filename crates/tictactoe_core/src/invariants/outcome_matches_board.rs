//! Outcome invariant: the reported outcome agrees with the final board.

use super::{Invariant, Turn};
use crate::Outcome;
use crate::rules::{check_winner, has_won, is_draw, is_full};

/// Invariant: the outcome is the one the rules derive from the board.
pub struct OutcomeMatchesBoardInvariant;

impl Invariant<Turn> for OutcomeMatchesBoardInvariant {
    fn holds(turn: &Turn) -> bool {
        let board = &turn.after;
        let player_won = has_won(board, turn.marks.player());
        let opponent_won = has_won(board, turn.marks.opponent());

        match turn.outcome {
            Outcome::IllegalMove => !board.is_free(turn.played),
            Outcome::PlayerWin => player_won && !opponent_won,
            Outcome::OpponentWin => opponent_won && !player_won,
            Outcome::Draw => is_draw(board),
            Outcome::Ongoing => check_winner(board).is_none() && !is_full(board),
        }
    }

    fn description() -> &'static str {
        "Reported outcome matches the board"
    }
}

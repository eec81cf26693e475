//! Contract-based validation for the move transaction.
//!
//! Contracts formalize the Hoare-style reasoning `{P} move {Q}`: the
//! precondition is checked on every call, the postcondition in debug
//! builds only.

use super::invariants::{InvariantSet, Turn, TurnInvariants};
use super::{Board, EngineError, Position};
use tracing::{instrument, warn};

/// Precondition: the requested square must be empty.
pub struct SquareIsFree;

impl SquareIsFree {
    /// Fails with [`EngineError::SquareOccupied`] if the square is taken.
    #[instrument(skip(board))]
    pub fn check(board: &Board, position: Position) -> Result<(), EngineError> {
        if board.is_free(position) {
            Ok(())
        } else {
            Err(EngineError::SquareOccupied(position))
        }
    }
}

/// Contract for one human move and the computer's reply.
///
/// Preconditions:
/// - Square must be empty
///
/// Postconditions:
/// - Board remains monotonic
/// - One player mark and at most one opponent mark were added
/// - Outcome agrees with the board
pub struct MoveContract;

impl MoveContract {
    /// Checks preconditions before the move is applied.
    pub fn pre(board: &Board, position: Position) -> Result<(), EngineError> {
        SquareIsFree::check(board, position)
    }

    /// Checks postconditions on a completed turn.
    #[instrument(skip(turn), fields(outcome = %turn.outcome))]
    pub fn post(turn: &Turn) -> Result<(), EngineError> {
        TurnInvariants::check_all(turn).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            EngineError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

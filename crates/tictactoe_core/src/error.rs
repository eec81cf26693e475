//! Errors raised by the move engine.

use super::{CoordinateError, Position};
use derive_more::{Display, Error, From};

/// Error that can occur while running a move transaction.
///
/// [`attempt_move`](crate::attempt_move) never returns `SquareOccupied`;
/// it reports that case as [`Outcome::IllegalMove`](crate::Outcome::IllegalMove).
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum EngineError {
    /// Row or column off the board.
    #[display("{}", _0)]
    #[from]
    Coordinate(CoordinateError),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The session is over and needs a reset.
    #[display("Game is already over")]
    GameOver,

    /// The move selector returned a square it was not offered.
    #[display("Move selector chose {}, which is not free", _0)]
    InvalidSelection(#[error(not(source))] Position),

    /// The move selector had nothing to offer.
    #[display("Move selector returned no move")]
    NoSelection,

    /// A postcondition failed after the move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}

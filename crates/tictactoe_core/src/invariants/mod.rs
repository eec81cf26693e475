//! First-class invariants for the move transaction.
//!
//! Each invariant is a property of a [`Turn`]: the board before and after
//! one call to the engine, plus what the engine reported. They are checked
//! as postconditions in debug builds and can be tested independently.

use crate::{Board, Marks, Outcome, Position};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// One completed move transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    /// Board before the call.
    pub before: Board,
    /// Board after the call.
    pub after: Board,
    /// Square the human asked for.
    pub played: Position,
    /// Marks in play.
    pub marks: Marks,
    /// What the engine reported.
    pub outcome: Outcome,
}

pub mod monotonic_board;
pub mod outcome_matches_board;
pub mod placement_count;

pub use monotonic_board::MonotonicBoardInvariant;
pub use outcome_matches_board::OutcomeMatchesBoardInvariant;
pub use placement_count::PlacementCountInvariant;

/// All move invariants as a composable set.
pub type TurnInvariants = (
    MonotonicBoardInvariant,
    PlacementCountInvariant,
    OutcomeMatchesBoardInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Square};

    fn turn(before: Board, after: Board, outcome: Outcome) -> Turn {
        Turn {
            before,
            after,
            played: Position::TopLeft,
            marks: Marks::default(),
            outcome,
        }
    }

    #[test]
    fn test_set_holds_for_ongoing_turn() {
        let before = Board::new();
        let mut after = Board::new();
        after.place(Position::TopLeft, Mark::X);
        after.place(Position::Center, Mark::O);
        assert!(TurnInvariants::check_all(&turn(before, after, Outcome::Ongoing)).is_ok());
    }

    #[test]
    fn test_set_detects_violations() {
        let mut before = Board::new();
        before.place(Position::Center, Mark::O);
        let mut after = Board::new();
        after.set(Position::Center, Square::Occupied(Mark::X));

        let violations = TurnInvariants::check_all(&turn(before, after, Outcome::Ongoing))
            .expect_err("corrupted turn must fail");
        assert!(!violations.is_empty());
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (MonotonicBoardInvariant, PlacementCountInvariant);
        let board = Board::new();
        assert!(TwoInvariants::check_all(&turn(board.clone(), board, Outcome::IllegalMove)).is_ok());
    }
}

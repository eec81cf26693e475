//! Monotonic board invariant: squares never change once set.

use super::{Invariant, Turn};
use crate::{Position, Square};

/// Invariant: an occupied square keeps its mark.
///
/// Every square occupied before the turn holds the same mark after it.
pub struct MonotonicBoardInvariant;

impl Invariant<Turn> for MonotonicBoardInvariant {
    fn holds(turn: &Turn) -> bool {
        Position::ALL.iter().all(|pos| {
            let before = turn.before.get(*pos);
            before == Square::Empty || turn.after.get(*pos) == before
        })
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}

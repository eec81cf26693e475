//! Placement count invariant: each outcome adds the right marks.

use super::{Invariant, Turn};
use crate::Outcome;

/// Invariant: the number of new marks matches the outcome.
///
/// - `IllegalMove` adds nothing.
/// - `PlayerWin` adds one player mark and no opponent mark.
/// - `Ongoing` and `OpponentWin` add one of each.
/// - `Draw` adds one player mark and at most one opponent mark.
pub struct PlacementCountInvariant;

impl Invariant<Turn> for PlacementCountInvariant {
    fn holds(turn: &Turn) -> bool {
        let player = turn.marks.player();
        let opponent = turn.marks.opponent();
        let added_player = turn.after.count(player) as isize - turn.before.count(player) as isize;
        let added_opponent =
            turn.after.count(opponent) as isize - turn.before.count(opponent) as isize;

        match turn.outcome {
            Outcome::IllegalMove => turn.before == turn.after,
            Outcome::PlayerWin => added_player == 1 && added_opponent == 0,
            Outcome::Ongoing | Outcome::OpponentWin => added_player == 1 && added_opponent == 1,
            Outcome::Draw => added_player == 1 && (added_opponent == 0 || added_opponent == 1),
        }
    }

    fn description() -> &'static str {
        "Each turn places one player mark and at most one opponent mark"
    }
}

//! Per-move outcomes and the session phase they drive.

use serde::{Deserialize, Serialize};

/// Result of one move attempt by the human.
///
/// Derived from the board after each attempt, never stored.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Both sides moved and nobody has a line yet.
    Ongoing,
    /// The human completed a line.
    PlayerWin,
    /// The computer completed a line.
    OpponentWin,
    /// The board filled up without a line.
    Draw,
    /// The requested square was taken; nothing changed.
    IllegalMove,
}

impl Outcome {
    /// Returns true if the game is over after this outcome.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Outcome::PlayerWin | Outcome::OpponentWin | Outcome::Draw
        )
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "ongoing"),
            Outcome::PlayerWin => write!(f, "player_win"),
            Outcome::OpponentWin => write!(f, "opponent_win"),
            Outcome::Draw => write!(f, "draw"),
            Outcome::IllegalMove => write!(f, "illegal_move"),
        }
    }
}

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Waiting for the human's next move.
    #[default]
    AwaitingMove,
    /// Game over; only a reset leaves this phase.
    Terminal,
}

impl Phase {
    /// Phase reached from `AwaitingMove` after `outcome`.
    pub fn after(outcome: Outcome) -> Self {
        if outcome.is_terminal() {
            Phase::Terminal
        } else {
            Phase::AwaitingMove
        }
    }
}

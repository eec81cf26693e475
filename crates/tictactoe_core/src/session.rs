//! One player's game: a board and the phase it is in.

use super::engine::attempt_move;
use super::{Board, EngineError, Marks, MoveSelector, Outcome, Phase, Position};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// A single game of tic-tac-toe against the computer.
///
/// Starts in [`Phase::AwaitingMove`] with an empty board. A winning or
/// drawn move moves it to [`Phase::Terminal`], which only [`Session::reset`]
/// leaves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    board: Board,
    phase: Phase,
}

impl Session {
    /// Creates a session awaiting the first move.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        self.phase == Phase::Terminal
    }

    /// Plays the human's move and the computer's reply.
    ///
    /// # Errors
    ///
    /// [`EngineError::GameOver`] if the session is terminal; otherwise
    /// whatever [`attempt_move`] returns. On error the board and phase are
    /// unchanged.
    #[instrument(skip(self, selector), fields(phase = ?self.phase))]
    pub fn attempt_move<S>(
        &mut self,
        position: Position,
        marks: Marks,
        selector: &mut S,
    ) -> Result<Outcome, EngineError>
    where
        S: MoveSelector + ?Sized,
    {
        if self.is_over() {
            warn!("Move received after game over");
            return Err(EngineError::GameOver);
        }

        let outcome = attempt_move(&mut self.board, position, marks, selector)?;
        self.phase = Phase::after(outcome);
        Ok(outcome)
    }

    /// Starts over with an empty board.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> &Board {
        info!("Resetting session");
        *self = Self::new();
        &self.board
    }
}

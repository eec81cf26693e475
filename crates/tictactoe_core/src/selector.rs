//! Opponent move selection.
//!
//! The engine asks a [`MoveSelector`] for the computer's square and checks
//! the answer against the free squares it offered.

use super::{Board, Position};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::collections::VecDeque;
use tracing::{debug, instrument};

/// Picks the computer's move.
pub trait MoveSelector {
    /// Chooses one square from `available`, the free squares of `board`.
    ///
    /// `available` is never empty. Returning a square outside it, or
    /// `None`, aborts the move.
    fn select(&mut self, board: &Board, available: &[Position]) -> Option<Position>;
}

impl<S: MoveSelector + ?Sized> MoveSelector for Box<S> {
    fn select(&mut self, board: &Board, available: &[Position]) -> Option<Position> {
        (**self).select(board, available)
    }
}

impl<S: MoveSelector + ?Sized> MoveSelector for &mut S {
    fn select(&mut self, board: &Board, available: &[Position]) -> Option<Position> {
        (**self).select(board, available)
    }
}

/// Uniform random choice among the free squares.
///
/// Unseeded by default, so games are not reproducible.
#[derive(Debug, Clone)]
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Creates a selector seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a selector with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSelector for RandomSelector {
    #[instrument(skip_all, fields(available = available.len()))]
    fn select(&mut self, _board: &Board, available: &[Position]) -> Option<Position> {
        let choice = available.choose(&mut self.rng).copied();
        debug!(?choice, "Random selector chose");
        choice
    }
}

/// Simple AI that picks the first free square in row-major order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstFreeSelector;

impl MoveSelector for FirstFreeSelector {
    fn select(&mut self, _board: &Board, available: &[Position]) -> Option<Position> {
        available.first().copied()
    }
}

/// Replays a fixed list of squares, one per call.
///
/// Returns `None` once the script runs out.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSelector {
    script: VecDeque<Position>,
}

impl ScriptedSelector {
    /// Creates a selector that answers with `script` in order.
    pub fn new(script: impl IntoIterator<Item = Position>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// Squares not yet handed out.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl MoveSelector for ScriptedSelector {
    fn select(&mut self, _board: &Board, _available: &[Position]) -> Option<Position> {
        self.script.pop_front()
    }
}

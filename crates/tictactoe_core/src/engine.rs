//! The per-move transaction: the human moves, the computer answers.

use super::contracts::MoveContract;
#[cfg(debug_assertions)]
use super::invariants::Turn;
use super::rules::{has_won, is_full};
use super::{Board, EngineError, Marks, MoveSelector, Outcome, Position};
use tracing::{debug, info, instrument, warn};

/// Plays the human's move at `position` and, if the game goes on, the
/// computer's reply.
///
/// Order of checks:
/// 1. Occupied square: [`Outcome::IllegalMove`], board untouched.
/// 2. Human completes a line: [`Outcome::PlayerWin`], no reply.
/// 3. Board full after the human's move: [`Outcome::Draw`], no reply.
/// 4. `selector` picks a free square for the computer.
/// 5. Computer completes a line: [`Outcome::OpponentWin`].
/// 6. Board full: [`Outcome::Draw`]; otherwise [`Outcome::Ongoing`].
///
/// # Errors
///
/// Returns [`EngineError::InvalidSelection`] or [`EngineError::NoSelection`]
/// if the selector misbehaves, and (debug builds only)
/// [`EngineError::InvariantViolation`] if a postcondition fails. On any
/// error the board is restored to its state before the call.
#[instrument(skip(board, selector), fields(player = %marks.player()))]
pub fn attempt_move<S>(
    board: &mut Board,
    position: Position,
    marks: Marks,
    selector: &mut S,
) -> Result<Outcome, EngineError>
where
    S: MoveSelector + ?Sized,
{
    if let Err(e) = MoveContract::pre(board, position) {
        warn!(error = %e, "Illegal move");
        return Ok(Outcome::IllegalMove);
    }

    let before = board.clone();
    let result = match play_turn(board, position, marks, selector) {
        Ok(outcome) => check_postconditions(&before, board, position, marks, outcome),
        Err(e) => Err(e),
    };

    match result {
        Ok(outcome) => {
            info!(%outcome, "Move resolved");
            Ok(outcome)
        }
        Err(e) => {
            *board = before;
            Err(e)
        }
    }
}

#[cfg(debug_assertions)]
fn check_postconditions(
    before: &Board,
    after: &Board,
    played: Position,
    marks: Marks,
    outcome: Outcome,
) -> Result<Outcome, EngineError> {
    MoveContract::post(&Turn {
        before: before.clone(),
        after: after.clone(),
        played,
        marks,
        outcome,
    })?;
    Ok(outcome)
}

#[cfg(not(debug_assertions))]
fn check_postconditions(
    _before: &Board,
    _after: &Board,
    _played: Position,
    _marks: Marks,
    outcome: Outcome,
) -> Result<Outcome, EngineError> {
    Ok(outcome)
}

/// Like [`attempt_move`], taking raw coordinates.
///
/// # Errors
///
/// Returns [`EngineError::Coordinate`] if `row` or `col` is off the board.
pub fn attempt_move_at<S>(
    board: &mut Board,
    row: usize,
    col: usize,
    marks: Marks,
    selector: &mut S,
) -> Result<Outcome, EngineError>
where
    S: MoveSelector + ?Sized,
{
    let position = Position::from_coords(row, col)?;
    attempt_move(board, position, marks, selector)
}

fn play_turn<S>(
    board: &mut Board,
    position: Position,
    marks: Marks,
    selector: &mut S,
) -> Result<Outcome, EngineError>
where
    S: MoveSelector + ?Sized,
{
    board.place(position, marks.player());

    if has_won(board, marks.player()) {
        return Ok(Outcome::PlayerWin);
    }

    // Full after the human's move: the computer never gets a turn.
    let available = board.free_positions();
    if available.is_empty() {
        return Ok(Outcome::Draw);
    }

    let reply = selector
        .select(board, &available)
        .ok_or(EngineError::NoSelection)?;
    if !available.contains(&reply) {
        warn!(%reply, "Selector chose a square it was not offered");
        return Err(EngineError::InvalidSelection(reply));
    }
    debug!(%reply, "Opponent replies");
    board.place(reply, marks.opponent());

    if has_won(board, marks.opponent()) {
        return Ok(Outcome::OpponentWin);
    }

    if is_full(board) {
        return Ok(Outcome::Draw);
    }

    Ok(Outcome::Ongoing)
}

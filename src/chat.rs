//! Chat front end: turns lines of player input into game actions and
//! replies.

use crate::replies::{self, Reply};
use crate::session_store::{SessionError, SessionManager};
use derive_more::{Display, Error};
use std::str::FromStr;
use tictactoe_core::{EngineError, MoveSelector, Outcome};
use tracing::{debug, error, instrument, warn};

/// A parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `/start`: begin or restart a game.
    Start,
    /// `/stop`: end the game and leave.
    Stop,
    /// A cell press at (row, col). Range is checked by the game.
    Press {
        /// Row of the pressed cell.
        row: usize,
        /// Column of the pressed cell.
        col: usize,
    },
}

/// Input that is neither a command nor a cell.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized input: {}", input)]
pub struct ParseCommandError {
    /// The offending input, trimmed.
    pub input: String,
}

impl FromStr for Command {
    type Err = ParseCommandError;

    /// Accepts `/start`, `/stop`, two adjacent digits (`02`) or two
    /// digits separated by spaces or a comma (`0 2`, `0,2`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let err = || ParseCommandError {
            input: input.to_string(),
        };

        match input {
            "/start" => return Ok(Command::Start),
            "/stop" => return Ok(Command::Stop),
            _ => {}
        }

        let digits: Vec<usize> = if input.contains([' ', ',']) {
            input
                .split([' ', ','])
                .filter(|part| !part.is_empty())
                .map(|part| part.parse().map_err(|_| err()))
                .collect::<Result<_, _>>()?
        } else {
            input
                .chars()
                .map(|c| c.to_digit(10).map(|d| d as usize).ok_or_else(err))
                .collect::<Result<_, _>>()?
        };

        match digits.as_slice() {
            [row, col] => Ok(Command::Press {
                row: *row,
                col: *col,
            }),
            _ => Err(err()),
        }
    }
}

/// Routes chat input to the session store.
#[derive(Debug, Clone)]
pub struct Chat<S> {
    sessions: SessionManager<S>,
}

impl<S: MoveSelector> Chat<S> {
    /// Creates a chat front end over `sessions`.
    pub fn new(sessions: SessionManager<S>) -> Self {
        Self { sessions }
    }

    /// The underlying session store.
    pub fn sessions(&self) -> &SessionManager<S> {
        &self.sessions
    }

    /// Handles one line of input from `chat_id`.
    #[instrument(skip(self))]
    pub fn handle(&self, chat_id: &str, line: &str) -> Vec<Reply> {
        match line.parse::<Command>() {
            Ok(command) => self.dispatch(chat_id, command),
            Err(e) => {
                debug!(error = %e, "Ignoring input");
                vec![Reply::text(replies::unrecognized_message(&e.input))]
            }
        }
    }

    /// Runs a parsed command for `chat_id`.
    #[instrument(skip(self))]
    pub fn dispatch(&self, chat_id: &str, command: Command) -> Vec<Reply> {
        let player = self.sessions.marks().player();
        match command {
            Command::Start => match self.sessions.start(chat_id) {
                Ok(board) => vec![
                    Reply::Board(board),
                    Reply::text(replies::turn_prompt(player)),
                ],
                Err(e) => self.failure(e),
            },
            Command::Stop => {
                // Stopping without a game is fine; there is nothing to clean up.
                if let Err(e) = self.sessions.stop(chat_id)
                    && !matches!(e, SessionError::UnknownSession(_))
                {
                    return self.failure(e);
                }
                vec![Reply::text(replies::goodbye_message()), Reply::Quit]
            }
            Command::Press { row, col } => match self.sessions.play(chat_id, row, col) {
                Ok((outcome, board)) => {
                    let message = Reply::text(replies::outcome_message(outcome, player));
                    match outcome {
                        Outcome::IllegalMove => vec![message],
                        _ => vec![Reply::Board(board), message],
                    }
                }
                Err(e) => self.failure(e),
            },
        }
    }

    fn failure(&self, e: SessionError) -> Vec<Reply> {
        let text = match &e {
            SessionError::UnknownSession(_) => replies::no_game_message(),
            SessionError::Engine(EngineError::GameOver) => replies::game_over_message(),
            SessionError::Coordinate(c) => c.to_string(),
            _ => {
                error!(error = %e, "Move failed");
                return vec![Reply::Text(format!("Something went wrong: {e}"))];
            }
        };
        warn!(error = %e, "Rejected input");
        vec![Reply::Text(text)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!("/start".parse(), Ok(Command::Start));
        assert_eq!(" /stop \n".parse(), Ok(Command::Stop));
        assert_eq!("02".parse(), Ok(Command::Press { row: 0, col: 2 }));
        assert_eq!("1 1".parse(), Ok(Command::Press { row: 1, col: 1 }));
        assert_eq!("2,0".parse(), Ok(Command::Press { row: 2, col: 0 }));
    }

    #[test]
    fn test_parse_keeps_out_of_range_for_the_game() {
        assert_eq!("33".parse(), Ok(Command::Press { row: 3, col: 3 }));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("hello".parse::<Command>().is_err());
        assert!("012".parse::<Command>().is_err());
        assert!("".parse::<Command>().is_err());
        assert!("/help".parse::<Command>().is_err());
    }
}

//! User-facing text for every game event.
//!
//! Each outcome maps to one fixed message so a front end can show
//! feedback and decide whether to keep prompting.

use tictactoe_core::{Board, Mark, Outcome};

const RESTART_HINT: &str = "To play again please press '/start'\nTo finish game please press '/stop'";

/// Something to show the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A chat message.
    Text(String),
    /// The board to render.
    Board(Board),
    /// The player asked to leave; the front end should shut down.
    Quit,
}

impl Reply {
    /// Text reply.
    pub fn text(text: impl Into<String>) -> Self {
        Reply::Text(text.into())
    }
}

/// Prompt for the player's next move.
pub fn turn_prompt(mark: Mark) -> String {
    format!(
        "{mark} (your) turn! Please, put {mark} to the free place.\nTo finish game please press '/stop'"
    )
}

/// Message for a move outcome.
pub fn outcome_message(outcome: Outcome, player: Mark) -> String {
    match outcome {
        Outcome::Ongoing => turn_prompt(player),
        Outcome::IllegalMove => {
            "This cell is already occupied! Please, choose another one.".to_string()
        }
        Outcome::PlayerWin => format!("You won! {RESTART_HINT}"),
        Outcome::OpponentWin => format!("AI won! {RESTART_HINT}"),
        Outcome::Draw => format!("Draw! {RESTART_HINT}"),
    }
}

/// Message for a press after the game ended.
pub fn game_over_message() -> String {
    format!("The game is over. {RESTART_HINT}")
}

/// Message for a press with no game running.
pub fn no_game_message() -> String {
    "No game in progress. Please press '/start' to play.".to_string()
}

/// Message for input that is neither a command nor a cell.
pub fn unrecognized_message(input: &str) -> String {
    format!(
        "Unrecognized input '{input}'. Press a cell as 'rc' or 'r c' (0-2 each), '/start' or '/stop'."
    )
}

/// Farewell on `/stop`.
pub fn goodbye_message() -> String {
    "Bot is stopping... Goodbye!".to_string()
}

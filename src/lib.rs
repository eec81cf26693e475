//! Tic-tac-toe chat bot: a human against a random computer opponent.
//!
//! # Architecture
//!
//! - **Core** ([`tictactoe_core`]): board, rules, move engine, opponent
//! - **Sessions**: one game per chat, behind a single lock
//! - **Chat**: parses player input and produces [`Reply`]s
//! - **Config**: TOML settings for the player mark and RNG seed
//!
//! # Example
//!
//! ```
//! use tictactoe_bot::{Chat, Reply, SessionManager};
//!
//! let chat = Chat::new(SessionManager::random());
//! let replies = chat.handle("chat-1", "/start");
//! assert!(matches!(replies[0], Reply::Board(_)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod chat;
mod config;
mod replies;
mod session_store;

pub use chat::{Chat, Command, ParseCommandError};
pub use config::{BotConfig, ConfigError};
pub use replies::{
    Reply, game_over_message, goodbye_message, no_game_message, outcome_message, turn_prompt,
    unrecognized_message,
};
pub use session_store::{SessionError, SessionId, SessionManager};

pub use tictactoe_core::{
    Board, EngineError, FirstFreeSelector, Mark, Marks, MoveSelector, Outcome, Phase, Position,
    RandomSelector, ScriptedSelector, Session, Square,
};

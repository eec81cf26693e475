//! Command-line interface for tictactoe_bot.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tictactoe_core::Mark;

/// Tic-tac-toe against a random opponent, played as a chat in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe_bot")]
#[command(about = "Play tic-tac-toe against a random computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game on stdin/stdout
    Play {
        /// Path to the bot config file (defaults apply if it doesn't exist)
        #[arg(short, long, default_value = "tictactoe_bot.toml")]
        config: PathBuf,

        /// Mark to play (overrides the config file)
        #[arg(short, long, value_enum)]
        mark: Option<MarkArg>,

        /// Seed for the computer's moves (overrides the config file)
        #[arg(long)]
        seed: Option<u64>,

        /// Chat identifier for this game
        #[arg(long, default_value = "local")]
        chat_id: String,
    },

    /// Print the effective configuration as TOML
    Config {
        /// Path to the bot config file
        #[arg(short, long, default_value = "tictactoe_bot.toml")]
        config: PathBuf,
    },
}

/// Mark choice on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkArg {
    /// Crosses
    X,
    /// Noughts
    O,
}

impl From<MarkArg> for Mark {
    fn from(arg: MarkArg) -> Self {
        match arg {
            MarkArg::X => Mark::X,
            MarkArg::O => Mark::O,
        }
    }
}

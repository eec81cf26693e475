//! tictactoe_bot - play tic-tac-toe in the terminal.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::io::{BufRead, Write};
use std::path::Path;
use tictactoe_bot::{BotConfig, Chat, RandomSelector, Reply, SessionManager};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();
    initialize_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            mark,
            seed,
            chat_id,
        } => {
            let mut config = BotConfig::load_or_default(&config)?;
            if let Some(mark) = mark {
                config = config.with_player_mark(mark.into());
            }
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            run_play(config, &chat_id)
        }
        Command::Config { config } => show_config(&config),
    }
}

/// Runs one chat on stdin/stdout until `/stop` or end of input.
#[instrument(skip(config), fields(player_mark = %config.player_mark()))]
fn run_play(config: BotConfig, chat_id: &str) -> Result<()> {
    let selector = match config.seed() {
        Some(seed) => RandomSelector::seeded(*seed),
        None => RandomSelector::new(),
    };
    let chat = Chat::new(SessionManager::new(config.marks(), selector));
    info!("Starting game");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    if render(&mut stdout, chat.handle(chat_id, "/start"))? {
        return Ok(());
    }

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if render(&mut stdout, chat.handle(chat_id, &line))? {
            break;
        }
    }

    info!("Game session closed");
    Ok(())
}

/// Writes replies; returns true when the player asked to quit.
fn render(out: &mut impl Write, replies: Vec<Reply>) -> Result<bool> {
    let mut quit = false;
    for reply in replies {
        match reply {
            Reply::Board(board) => writeln!(out, "\n{}\n", board)?,
            Reply::Text(text) => writeln!(out, "{}", text)?,
            Reply::Quit => quit = true,
        }
    }
    out.flush()?;
    Ok(quit)
}

fn show_config(path: &Path) -> Result<()> {
    let config = BotConfig::load_or_default(path)?;
    print!("{}", config.to_toml()?);
    Ok(())
}

fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,tictactoe_bot=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

//! Terminal front end for the clocked chess engine.
//!
//! Reads commands from stdin while a one-second interval drives the clock.
//! Both run in the same task, so a tick never interleaves with a move.

mod command;
mod config;
mod render;

use anyhow::Context;
use chess_engine::{Game, TickOutcome};
use clap::Parser;
use command::{Command, HELP};
use config::Overrides;
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "chess-play")]
#[command(about = "Two-player chess with a game clock, played from the terminal")]
struct Cli {
    /// Configuration file (defaults to ./chess.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Seconds on each side's clock
    #[arg(long)]
    clock: Option<u32>,
    /// Let sliding pieces jump and probe check responses on the pre-move board
    #[arg(long)]
    legacy_rules: bool,
    /// Start the game and clock immediately
    #[arg(long)]
    autostart: bool,
}

/// Whether the input loop should keep going.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let overrides = Overrides {
        clock_seconds: cli.clock,
        legacy_rules: cli.legacy_rules,
    };
    let config = overrides.apply(
        config::load(cli.config.as_deref()).context("could not load configuration")?,
    );
    info!(?config, "starting");

    let mut game = Game::with_config(config);
    if cli.autostart {
        game.start();
    }
    println!("{}", HELP);
    show(&game);

    run(&mut game).await
}

async fn run(game: &mut Game) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = interval(Duration::from_secs(1));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick of an interval fires immediately.
    ticker.tick().await;

    loop {
        let clock_running = game.is_started() && !game.is_over();
        tokio::select! {
            _ = ticker.tick(), if clock_running => {
                if let TickOutcome::Flagged { winner } = game.tick() {
                    println!("time is up, {} wins", winner);
                    show(game);
                }
            }
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read stdin")? else {
                    debug!("stdin closed");
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                let was_running = clock_running;
                if handle(game, &line) == Flow::Quit {
                    break;
                }
                if !was_running && game.is_started() {
                    ticker.reset();
                }
            }
        }
    }
    Ok(())
}

/// Applies one input line to the game and prints the result.
fn handle(game: &mut Game, line: &str) -> Flow {
    let command = match Command::parse(line) {
        Ok(command) => command,
        Err(e) => {
            println!("{}", e);
            return Flow::Continue;
        }
    };
    debug!(?command, "command");

    match command {
        Command::Start => {
            if !game.start() {
                println!("the game is already running or over; 'reset' first");
            }
        }
        Command::Select(square) => {
            let outcome = game.handle_square_select(square);
            if !outcome.selection_changed {
                println!("nothing to select on {}", square);
                return Flow::Continue;
            }
            if game.selected().is_none() && outcome.committed.is_none() {
                println!("selection cleared");
            }
        }
        Command::Move(mv) => {
            if let Some(current) = game.selected() {
                game.handle_square_select(current);
            }
            if !game.handle_square_select(mv.from).selection_changed {
                println!("cannot move from {}", mv.from);
                return Flow::Continue;
            }
            if game.handle_square_select(mv.to).committed.is_none() {
                println!("illegal move {}", mv);
                return Flow::Continue;
            }
        }
        Command::Undo => {
            if !game.undo() {
                println!("nothing to undo");
                return Flow::Continue;
            }
        }
        Command::Redo => {
            if !game.redo() {
                println!("nothing to redo");
                return Flow::Continue;
            }
        }
        Command::Reset => game.reset(),
        Command::Suggest => match game.suggest_move() {
            Some(mv) => println!("suggestion: {}", mv),
            None => {
                println!("no move to suggest");
                return Flow::Continue;
            }
        },
        Command::Board => {}
        Command::Help => {
            println!("{}", HELP);
            return Flow::Continue;
        }
        Command::Quit => return Flow::Quit,
    }

    show(game);
    Flow::Continue
}

fn show(game: &Game) {
    print!("{}", render::board(game));
    println!("{}", render::status_line(game));
}

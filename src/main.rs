use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use cardswap::board::{ExchangeBoard, ExchangeMode};
use cardswap::card::{CardId, SequentialIdSource};
use cardswap::catalog::CatalogLoader;
use cardswap::config::Config;
use cardswap::logging::init_tracing;
use cardswap::session::{BoardSession, SharedBoard};

/// Drive an exchange board from stdin and print its state as JSON.
#[derive(Debug, Parser)]
#[command(name = "cardswap", version)]
struct Cli {
    /// Config file (defaults to the user config dir).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Simulated catalog latency in milliseconds.
    #[arg(long)]
    latency_ms: Option<u64>,
    /// Number of cards, 12..=22.
    #[arg(long)]
    size: Option<usize>,
    /// Shuffle seed for the catalog.
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,
    /// Use card-1, card-2, ... instead of UUIDs.
    #[arg(long)]
    sequential_ids: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Swap,
    Reorder,
}

impl From<ModeArg> for ExchangeMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Swap => ExchangeMode::Swap,
            ModeArg::Reorder => ExchangeMode::Reorder,
        }
    }
}

/// One stdin line. Cards are addressed by 0-based position.
#[derive(Debug, PartialEq)]
enum Command {
    Swap(usize, usize),
    Drag(usize),
    Drop(usize, usize),
    DropOn(usize),
    Target(usize, bool),
    Cancel,
    Show,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let index = |i: usize| words.get(i).and_then(|w| w.parse::<usize>().ok());
    let command = match words.first().copied()? {
        "swap" => Command::Swap(index(1)?, index(2)?),
        "drag" => Command::Drag(index(1)?),
        "drop" => Command::Drop(index(1)?, index(2)?),
        "drop-on" => Command::DropOn(index(1)?),
        "target" => {
            let on = match words.get(2).copied()? {
                "on" => true,
                "off" => false,
                _ => return None,
            };
            Command::Target(index(1)?, on)
        }
        "cancel" => Command::Cancel,
        "show" => Command::Show,
        "quit" | "exit" => Command::Quit,
        _ => return None,
    };
    Some(command)
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading config")?;

    if let Some(latency_ms) = cli.latency_ms {
        config.catalog.latency_ms = latency_ms;
    }
    if let Some(size) = cli.size {
        config.catalog.size = size;
    }
    if cli.seed.is_some() {
        config.catalog.seed = cli.seed;
    }
    if let Some(mode) = cli.mode {
        config.board.mode = mode.into();
    }
    config.validate().context("validating command line overrides")?;
    Ok(config)
}

fn print_state(board: &SharedBoard) -> Result<()> {
    let json = serde_json::to_string(board.lock().state())?;
    println!("{}", json);
    Ok(())
}

/// Applies one command. Returns false when the session should end.
fn apply(board: &SharedBoard, command: Command) -> Result<bool> {
    let id_at = |i: usize| -> Option<CardId> { board.lock().items().get(i).map(|c| c.id.clone()) };

    // Positions past the end decline the same way unknown ids do. A drop
    // that cannot land still ends the drag.
    let changed = match command {
        Command::Quit => return Ok(false),
        Command::Show => true,
        Command::Cancel => board.lock().cancel_drag(),
        Command::Swap(a, b) => match (id_at(a), id_at(b)) {
            (Some(a), Some(b)) => board.lock().exchange(&a, &b),
            _ => false,
        },
        Command::Drag(a) => match id_at(a) {
            Some(a) => board.lock().begin_drag(&a),
            None => false,
        },
        Command::Drop(a, b) => match (id_at(a), id_at(b)) {
            (Some(a), Some(b)) => board.lock().drop_card(&a, &b),
            _ => {
                board.lock().cancel_drag();
                false
            }
        },
        Command::DropOn(b) => match id_at(b) {
            Some(b) => board.lock().drop_card_on(&b),
            None => {
                board.lock().cancel_drag();
                false
            }
        },
        Command::Target(a, on) => match id_at(a) {
            Some(a) => board.lock().set_targeted(&a, on),
            None => false,
        },
    };

    if changed {
        print_state(board)?;
    } else {
        tracing::info!("Command declined, board unchanged");
    }
    Ok(true)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = load_config(&cli)?;
    tracing::debug!(?config, "Configuration loaded");

    let mut loader = CatalogLoader::from_config(&config.catalog);
    if cli.sequential_ids {
        loader = loader.with_id_source(SequentialIdSource::default());
    }
    let session = BoardSession::new(ExchangeBoard::from_config(&config.board), loader);
    let board = session.board();

    // One handler for the whole run, so Ctrl-C also ends the command loop.
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    session.mount();
    tokio::select! {
        _ = session.wait_loaded() => {}
        _ = &mut ctrl_c => {
            tracing::info!("Interrupted while loading");
            session.teardown();
            std::process::exit(INTERRUPTED_EXIT_CODE);
        }
    }
    print_state(&board)?;

    let stdin = BufReader::new(tokio::io::stdin());
    let outcome = run_commands(&board, stdin, ctrl_c.as_mut()).await;
    session.teardown();
    if let Ok(LoopExit::Interrupted) = outcome {
        // The stdin reader thread cannot be cancelled and would hold up
        // runtime shutdown until the next line arrives.
        std::process::exit(INTERRUPTED_EXIT_CODE);
    }
    outcome.map(|_| ())
}

const INTERRUPTED_EXIT_CODE: i32 = 130;

#[derive(Debug, PartialEq)]
enum LoopExit {
    Finished,
    Interrupted,
}

/// Reads commands until `quit`, end of input or Ctrl-C.
async fn run_commands<R, F>(
    board: &SharedBoard,
    input: R,
    mut ctrl_c: Pin<&mut F>,
) -> Result<LoopExit>
where
    R: AsyncBufRead + Unpin,
    F: Future<Output = std::io::Result<()>>,
{
    let mut lines = input.lines();
    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = &mut ctrl_c => {
                tracing::info!("Interrupted");
                return Ok(LoopExit::Interrupted);
            }
        };
        let Some(line) = line else {
            return Ok(LoopExit::Finished);
        };
        if line.trim().is_empty() {
            continue;
        }
        let Some(command) = parse_command(&line) else {
            tracing::warn!(line = %line, "Unknown command");
            continue;
        };
        if !apply(board, command)? {
            return Ok(LoopExit::Finished);
        }
    }
}

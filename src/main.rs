//! goban-rules: a Go rules engine for regular and irregular boards.
//!
//! ## Usage
//!
//! - `goban-rules` - Play a random demo game on a 9x9 board
//! - `goban-rules console` - Drive a game with text commands on stdin
//! - `goban-rules demo` - Play a random game and print the result

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use goban_rules::config::BoardConfig;
use goban_rules::console::Console;
use goban_rules::constants::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use goban_rules::game::Game;
use goban_rules::playout::{default_max_moves, random_game};
use goban_rules::position::{InfluenceModel, Rules};
use goban_rules::topology::Topology;

/// goban-rules: Go rules engine with irregular board support
#[derive(Parser)]
#[command(name = "goban-rules")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read commands from stdin and answer on stdout
    Console {
        /// JSON board config with a playable mask
        #[arg(long)]
        config: Option<PathBuf>,
        /// Size of a square board (ignored with --config)
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,
        /// Use the full-board linear influence model
        #[arg(long)]
        legacy_linear: bool,
        /// Forbid replaying on your own previous point
        #[arg(long)]
        forbid_own_last_move: bool,
    },
    /// Play a random game and print the final position
    Demo {
        /// JSON board config with a playable mask
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long, default_value_t = 9)]
        size: usize,
        #[arg(long)]
        seed: Option<u64>,
        /// Stop after this many placements and passes
        #[arg(long)]
        max_moves: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Console {
            config,
            size,
            legacy_linear,
            forbid_own_last_move,
        }) => {
            let topology = load_topology(config, size)?;
            let rules = Rules {
                influence: if legacy_linear {
                    InfluenceModel::linear()
                } else {
                    InfluenceModel::default()
                },
                forbid_own_last_move,
            };
            let mut console = Console::new(topology, rules);
            console
                .run(io::stdin().lock(), io::stdout().lock())
                .context("console I/O failed")?;
        }
        Some(Commands::Demo {
            config,
            size,
            seed,
            max_moves,
        }) => run_demo(load_topology(config, size)?, seed, max_moves),
        None => run_demo(Topology::square(9), None, None),
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_topology(config: Option<PathBuf>, size: usize) -> Result<Topology> {
    if let Some(path) = config {
        let config = BoardConfig::load(&path)
            .with_context(|| format!("cannot use board config {}", path.display()))?;
        return Ok(config.topology()?);
    }
    if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        bail!("board size must be between {MIN_BOARD_SIZE} and {MAX_BOARD_SIZE}, got {size}");
    }
    Ok(Topology::square(size))
}

fn run_demo(topology: Topology, seed: Option<u64>, max_moves: Option<usize>) {
    let mut game = Game::new(topology);
    let mut rng = match seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    let max_moves = max_moves.unwrap_or_else(|| default_max_moves(&game));

    info!(max_moves, "running random game");
    let summary = random_game(&mut game, &mut rng, max_moves);

    let state = game.state();
    println!("goban-rules: random game\n");
    println!("{}", state.stones());
    println!(
        "placements: {}  passes: {}  rejected: {}",
        summary.placements, summary.passes, summary.rejections
    );
    let caps = state.captured();
    println!("captured black: {}  captured white: {}", caps.black, caps.white);
    println!("game over: {}", state.is_game_over());

    println!("\ninfluence:");
    let field = state.calculate_influence();
    for row in 0..field.rows() {
        if let Some(cells) = field.row(row) {
            let line: Vec<String> = cells.iter().map(|v| format!("{v:>5}")).collect();
            println!("{}", line.join(""));
        }
    }
}

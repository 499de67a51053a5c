//! go-rules: play Go on the terminal.
//!
//! ## Usage
//!
//! - `go-rules` - Start the text console on stdin/stdout
//! - `go-rules console --size 13 --komi 7.5` - Console with options
//! - `go-rules demo` - Play a scripted game showing capture, ko, and scoring
//!
//! Set `RUST_LOG=debug` to see rejected moves, captures, and ko points.

use std::io;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use go_rules::board::{Point, str_coord};
use go_rules::console::Console;
use go_rules::constants::{KOMI, MAX_SIZE, N};
use go_rules::error::MoveError;
use go_rules::game::{self, GameState};

/// go-rules: a Go rules engine with a text console
#[derive(Parser)]
#[command(name = "go-rules")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read commands from stdin and play a game
    Console {
        /// Board size
        #[arg(long, default_value_t = N as u8, value_parser = clap::value_parser!(u8).range(1..=MAX_SIZE as i64))]
        size: u8,
        /// Points added to White's score
        #[arg(long, default_value_t = KOMI)]
        komi: f64,
    },
    /// Run a scripted game on a 9x9 board
    Demo,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Console { size, komi }) => run_console(usize::from(size), komi),
        None => run_console(N, KOMI),
        Some(Commands::Demo) => run_demo(),
    }
}

fn run_console(size: usize, komi: f64) -> Result<()> {
    if !komi.is_finite() {
        bail!("komi must be a finite number, got {komi}");
    }
    let mut console = Console::new(GameState::with_komi(size, komi));
    console
        .run(io::stdin().lock(), io::stdout().lock())
        .context("console I/O failed")
}

fn play(state: &GameState, row: usize, col: usize) -> Result<GameState> {
    let pt = Point::new(row, col);
    game::place_stone(state, row, col)
        .with_context(|| format!("demo move {} rejected", str_coord(pt, state.size())))
}

fn run_demo() -> Result<()> {
    println!("go-rules: scripted 9x9 game\n");

    // Build a ko shape in the middle of the board.
    let mut state = GameState::new(9);
    for &(row, col) in &[
        (2, 3),
        (2, 4),
        (3, 2),
        (4, 4),
        (4, 3),
        (3, 5),
        (6, 6),
        (3, 3),
    ] {
        state = play(&state, row, col)?;
    }
    println!("{}\n", game::render(&state));

    println!("Black captures at {}:", str_coord(Point::new(3, 4), 9));
    state = play(&state, 3, 4)?;
    println!("{}\n", game::render(&state));

    match game::place_stone(&state, 3, 3) {
        Err(e @ MoveError::KoViolation) => {
            println!("White retakes at {}: {e}\n", str_coord(Point::new(3, 3), 9));
        }
        Err(e) => bail!("expected a ko violation, got {e}"),
        Ok(_) => bail!("expected a ko violation, retake was accepted"),
    }

    println!("White plays elsewhere, Black fills the ko, both pass:");
    state = play(&state, 6, 2)?;
    state = play(&state, 3, 3)?;
    state = game::pass(&state)?;
    state = game::pass(&state)?;
    println!("{}\n", game::render(&state));

    if let Some(result) = game::score(&state) {
        println!(
            "Black: {} territory + {} captures = {}",
            result.black_territory, result.black_captures, result.black_score
        );
        println!(
            "White: {} territory + {} captures + {} komi = {}",
            result.white_territory, result.white_captures, result.komi, result.white_score
        );
    }
    Ok(())
}

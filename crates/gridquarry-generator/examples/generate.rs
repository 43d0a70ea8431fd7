//! Example demonstrating basic puzzle generation.
//!
//! This example shows how to:
//! - Create a `PuzzleSession`, optionally from a fixed seed
//! - Generate a puzzle by difficulty or by an explicit clue target
//! - Display the puzzle, its solution, the seed, and timing data
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate
//! ```
//!
//! Pick a difficulty (easy, medium, or hard):
//!
//! ```sh
//! cargo run --example generate -- --difficulty hard
//! ```
//!
//! Target an exact clue count instead, with a digging pass budget:
//!
//! ```sh
//! cargo run --example generate -- --spaces 28 --max-tries 50000
//! ```
//!
//! Reproduce a previous run from its printed seed:
//!
//! ```sh
//! cargo run --example generate -- --seed <64 hex digits>
//! ```

use std::process;

use clap::Parser;
use gridquarry_generator::{Difficulty, PuzzleSeed, PuzzleSession, Report};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty preset to generate for.
    #[arg(long, value_name = "DIFFICULTY", default_value = "easy", conflicts_with = "spaces")]
    difficulty: Difficulty,

    /// Exact number of filled cells to leave in the puzzle.
    #[arg(long, value_name = "COUNT")]
    spaces: Option<usize>,

    /// Maximum digging passes when --spaces is given.
    #[arg(long, value_name = "COUNT", default_value_t = 100_000)]
    max_tries: usize,

    /// Seed to reproduce a previous run (64 hex digits).
    #[arg(long, value_name = "SEED")]
    seed: Option<PuzzleSeed>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut session = match args.seed {
        Some(seed) => PuzzleSession::with_seed(seed),
        None => PuzzleSession::new(),
    };

    let report = match args.spaces {
        Some(spaces) => session.generate(spaces, args.max_tries),
        None => session.generate_for_difficulty(args.difficulty),
    };

    print_session(&session, report);
    if !report.success {
        eprintln!("target clue count not reached; showing the full solution");
        process::exit(1);
    }
}

fn print_session(session: &PuzzleSession, report: Report) {
    println!("Seed:");
    println!("  {}", session.seed());
    println!();

    println!("Puzzle ({} clues):", session.puzzle().filled_count());
    println!("{}", session.puzzle());
    println!();
    println!("Solution:");
    println!("{}", session.solution());
    println!();

    println!("Report:");
    println!("  attempts: {}", report.attempts);
    println!("  elapsed: {:?}", report.elapsed);
}

//! CLI entry point for the puzzle solvers.
//!
//! Usage:
//!   puzzle-solver clock <HOURS> <START> <END>
//!   puzzle-solver strings <START> <END>
//!   puzzle-solver chess <FILE>
//!   puzzle-solver hoppers <FILE>
//!
//! Every subcommand prints the solve transcript: search statistics,
//! then either the step-by-step path or "No solution". Pass --json for
//! a machine-readable report instead. An unsolvable puzzle is a normal
//! outcome and exits zero; bad input exits non-zero.

mod board;
mod chess;
mod clock;
mod hoppers;
mod search;
mod strings;

use std::fmt::Display;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};
use serde::Serialize;

use search::{Configuration, Solver};

#[derive(Parser)]
#[command(name = "puzzle-solver")]
#[command(about = "Breadth-first shortest-path solver for single-player puzzles")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve the modular clock puzzle
    Clock {
        /// Number of hours on the clock face
        hours: u32,

        /// Starting hour
        start: u32,

        /// Target hour
        end: u32,

        /// Emit a JSON report instead of the transcript
        #[arg(long)]
        json: bool,
    },
    /// Solve the string rotation puzzle
    Strings {
        /// Starting string (uppercase A-Z)
        start: String,

        /// Target string, same length as the start
        end: String,

        /// Emit a JSON report instead of the transcript
        #[arg(long)]
        json: bool,
    },
    /// Solve a chess capture puzzle from a board file
    Chess {
        /// Path to the board file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Emit a JSON report instead of the transcript
        #[arg(long)]
        json: bool,
    },
    /// Solve a Hoppers puzzle from a board file
    Hoppers {
        /// Path to the board file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Emit a JSON report instead of the transcript
        #[arg(long)]
        json: bool,
    },
}

/// Output format for a solve report
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SolveReport {
    solved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    moves: Option<usize>,
    total_configs: usize,
    unique_configs: usize,
    time_elapsed_ms: u64,
    path: Vec<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Clock {
            hours,
            start,
            end,
            json,
        } => {
            let config = match clock::ClockConfig::new(hours, start, end) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            };
            if !json {
                println!("Hours: {hours}, Start: {start}, End: {end}");
            }
            run(config, json);
        }

        Commands::Strings { start, end, json } => {
            let config = match strings::StringsConfig::new(&start, &end) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            };
            if !json {
                println!("Start: {start}, End: {end}");
            }
            run(config, json);
        }

        Commands::Chess { file, json } => {
            let config = match chess::ChessConfig::parse(&read_board(&file)) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Error parsing board: {e}");
                    std::process::exit(1);
                }
            };
            if !json {
                println!("File: {}", file.display());
                println!("{config}");
            }
            run(config, json);
        }

        Commands::Hoppers { file, json } => {
            let config = match hoppers::HoppersConfig::parse(&read_board(&file)) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Error parsing board: {e}");
                    std::process::exit(1);
                }
            };
            if !json {
                println!("File: {}", file.display());
                println!("{config}");
            }
            run(config, json);
        }
    }
}

fn read_board(path: &PathBuf) -> String {
    match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading file {:?}: {}", path, e);
            std::process::exit(1);
        }
    }
}

/// Solve the puzzle and print the outcome in the requested format.
fn run<C: Configuration + Display>(start: C, json: bool) {
    let started = Instant::now();
    let solution = Solver::new(start).solve();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if json {
        let report = SolveReport {
            solved: solution.is_solved(),
            moves: solution.moves(),
            total_configs: solution.total_generated,
            unique_configs: solution.unique_visited,
            time_elapsed_ms: elapsed_ms,
            path: solution.path.iter().map(ToString::to_string).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report).unwrap());
    } else {
        println!("Total configs: {}", solution.total_generated);
        println!("Unique configs: {}", solution.unique_visited);
        if solution.path.is_empty() {
            println!("No solution");
        }
        for (step, config) in solution.path.iter().enumerate() {
            println!("Step {step}: {config}");
        }
    }
}

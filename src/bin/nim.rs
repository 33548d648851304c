//! nim CLI - take-away games against a full-depth search engine
//!
//! This CLI provides a unified interface for:
//! - Playing classic or misère matches (human or engine seats)
//! - Solving a position for the best move
//! - Analyzing and exporting the full game tree of a position

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "nim")]
#[command(version, about = "Two-player take-away game with a minimax engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a match between two seats (human or engine)
    Play(nim::cli::commands::play::PlayArgs),

    /// Compute the best move for a position
    Solve(nim::cli::commands::solve::SolveArgs),

    /// Enumerate and export the full game tree of a position
    Analyze(nim::cli::commands::analyze::AnalyzeArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => nim::cli::commands::play::execute(args),
        Commands::Solve(args) => nim::cli::commands::solve::execute(args),
        Commands::Analyze(args) => nim::cli::commands::analyze::execute(args),
    }
}

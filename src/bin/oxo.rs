//! oxo CLI - Unbeatable Tic-Tac-Toe
//!
//! This CLI provides a unified interface for:
//! - Playing against the exhaustive-search engine
//! - Analyzing positions and per-move scores
//! - Exporting the solved policy table

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "oxo")]
#[command(version, about = "Unbeatable Tic-Tac-Toe via exhaustive game-tree search", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game against the engine
    Play(oxo::cli::commands::play::PlayArgs),

    /// Analyze a position and its move scores
    Analyze(oxo::cli::commands::analyze::AnalyzeArgs),

    /// Export the solved policy table
    Export(oxo::cli::commands::export::ExportArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => oxo::cli::commands::play::execute(args),
        Commands::Analyze(args) => oxo::cli::commands::analyze::execute(args),
        Commands::Export(args) => oxo::cli::commands::export::execute(args),
    }
}

//! Export command - Solve every reachable position and write the policy table

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use crate::{
    cli::output,
    export,
    tictactoe::{Board, reachable_boards},
};

#[derive(Parser, Debug)]
#[command(about = "Export the solved policy for every reachable position")]
pub struct ExportArgs {
    /// Output file path
    #[arg(long, short = 'o')]
    pub output: PathBuf,

    /// Export format
    #[arg(long, short = 'f', default_value = "json")]
    pub format: ExportFormat,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ExportFormat {
    /// JSON with a metadata wrapper
    Json,
    /// CSV, one row per position
    Csv,
}

pub fn execute(args: ExportArgs) -> Result<()> {
    println!("Enumerating reachable positions...");
    let boards: Vec<Board> = reachable_boards()
        .into_iter()
        .filter(|board| !board.is_terminal())
        .collect();
    println!("Solving {} positions...", boards.len());

    let bar = output::create_solve_progress(boards.len() as u64);
    let mut rows = Vec::with_capacity(boards.len());
    for board in &boards {
        rows.push(export::solve_row(board)?);
        bar.inc(1);
    }
    bar.finish_and_clear();

    match args.format {
        ExportFormat::Json => export::write_json(&args.output, &rows)?,
        ExportFormat::Csv => export::write_csv(&args.output, &rows)?,
    }

    println!("Policy for {} positions written to {}", rows.len(), args.output.display());
    Ok(())
}

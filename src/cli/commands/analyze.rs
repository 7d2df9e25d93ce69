//! Analyze command - Status, per-move scores, and chosen move for a position

use anyhow::{Result, anyhow};
use clap::Parser;

use crate::{
    cli::output,
    search::{self, Engine},
    tictactoe::{Board, GameStatus, LineAnalyzer},
};

#[derive(Parser, Debug)]
#[command(about = "Analyze a position")]
pub struct AnalyzeArgs {
    /// Board as 9 glyphs, row-major ('-' for empty, e.g. "XX--O----")
    pub state: String,

    /// Print minimax scores next to the alpha-beta scores
    #[arg(long)]
    pub compare: bool,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let board = Board::from_string(&args.state)?;

    output::print_section("Position");
    println!("{board}");

    match board.status() {
        GameStatus::Won(winner) => {
            output::print_kv("status", &format!("{winner} has won"));
            return Ok(());
        }
        GameStatus::Draw => {
            output::print_kv("status", "draw");
            return Ok(());
        }
        GameStatus::InProgress => {}
    }

    let player = board.player_to_move();
    output::print_kv("status", "in progress");
    output::print_kv("to move", &player.to_string());

    let wins = LineAnalyzer::winning_moves(&board.cells, player);
    if !wins.is_empty() {
        let cells: Vec<String> = wins.iter().map(|&p| format!("({}, {})", p / 3, p % 3)).collect();
        output::print_kv("wins now at", &cells.join(", "));
    }

    output::print_subsection("Move scores");
    for (pos, score) in search::evaluate_moves(&board, player, Engine::AlphaBeta) {
        if args.compare {
            let mut next = board;
            next.cells[pos] = player.to_cell();
            let full = search::minimax(&next, player.opponent(), 0);
            println!("  ({}, {})  alpha-beta {score:>3}  minimax {full:>3}", pos / 3, pos % 3);
        } else {
            println!("  ({}, {})  {score:>3}", pos / 3, pos % 3);
        }
    }

    let chosen = search::best_move(&board, player)?;
    let position = board
        .find_changed_position(&chosen)
        .ok_or_else(|| anyhow!("selection returned an unchanged board"))?;
    output::print_kv("best move", &format!("({}, {})", position / 3, position % 3));

    Ok(())
}

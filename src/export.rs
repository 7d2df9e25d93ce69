//! Solved-policy export
//!
//! Solves reachable positions with alpha-beta and writes the resulting
//! policy table to JSON or CSV for offline analysis.

use std::{fs::File, io::BufWriter, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    search::{Engine, best_move},
    tictactoe::{Board, Player},
};

/// One solved position in the exported policy table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyRow {
    /// Board as 9 glyphs, row-major
    pub state: String,
    /// Side to move
    pub to_move: Player,
    /// Game-theoretic value of the chosen reply (X-positive)
    pub value: i32,
    /// Position the engine would play
    pub best_position: usize,
}

/// Wrapper for the JSON export
#[derive(Debug, Serialize, Deserialize)]
pub struct PolicyExport {
    pub description: String,
    pub total_states: usize,
    pub rows: Vec<PolicyRow>,
}

/// Solve one in-progress position into a policy row
pub fn solve_row(board: &Board) -> Result<PolicyRow> {
    let to_move = board.player_to_move();
    let chosen = best_move(board, to_move)?;
    let best_position = board
        .find_changed_position(&chosen)
        .expect("best_move differs from its input in exactly one cell");
    let value = Engine::AlphaBeta.score(&chosen, to_move.opponent());

    Ok(PolicyRow {
        state: board.encode(),
        to_move,
        value,
        best_position,
    })
}

/// Write the policy table as pretty-printed JSON
pub fn write_json(path: &Path, rows: &[PolicyRow]) -> Result<()> {
    let export = PolicyExport {
        description: "Solved Tic-Tac-Toe policy (alpha-beta, X maximizing)".to_string(),
        total_states: rows.len(),
        rows: rows.to_vec(),
    };

    let file = File::create(path).map_err(|source| crate::Error::Io {
        operation: format!("create {}", path.display()),
        source,
    })?;
    serde_json::to_writer_pretty(BufWriter::new(file), &export)?;
    Ok(())
}

/// Write the policy table as CSV, one row per position
pub fn write_csv(path: &Path, rows: &[PolicyRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_row_takes_the_win() {
        let board = Board::from_string("XX--O----").unwrap();
        let row = solve_row(&board).unwrap();

        assert_eq!(row.state, "XX--O----");
        assert_eq!(row.to_move, Player::O);
        assert_eq!(row.best_position, 2);
    }

    #[test]
    fn test_solve_row_on_empty_board() {
        let row = solve_row(&Board::new()).unwrap();
        assert_eq!(row.to_move, Player::X);
        assert_eq!(row.value, 0, "optimal play from the empty board draws");
        assert_eq!(row.best_position, 0, "ties break toward row-major order");
    }

    #[test]
    fn test_solve_row_rejects_full_board() {
        let board = Board::from_string("XOXXOXOXO").unwrap();
        assert!(solve_row(&board).is_err());
    }
}

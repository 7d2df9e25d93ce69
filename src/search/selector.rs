//! Root move selection

use super::Engine;
use crate::tictactoe::{Board, Player};

/// Pick the best successor for `player`, scoring with alpha-beta.
///
/// # Examples
///
/// ```
/// use oxo::search::best_move;
/// use oxo::tictactoe::{Board, Cell, Player};
///
/// // X completes the top row rather than anything slower
/// let board = Board::from_string("XX--O-O--").unwrap();
/// let next = best_move(&board, Player::X).unwrap();
/// assert_eq!(next.get(2), Cell::X);
/// ```
pub fn best_move(board: &Board, player: Player) -> Result<Board, crate::Error> {
    best_move_with(board, player, Engine::AlphaBeta)
}

/// Pick the best successor for `player` using the given engine.
///
/// Each successor is scored from the opponent's turn at depth 0, in
/// row-major enumeration order. A later successor replaces the incumbent
/// only when its score is strictly better for `player` (higher for X, lower
/// for O), so among equally good moves the first-found one wins. This
/// tie-break is deliberate and observable.
///
/// # Errors
///
/// Returns [`crate::Error::NoLegalMoves`] when the board has no empty cell.
/// Callers are expected to check [`Board::status`] first; hitting this error
/// is a caller bug, not a normal game condition.
pub fn best_move_with(board: &Board, player: Player, engine: Engine) -> Result<Board, crate::Error> {
    let opponent = player.opponent();
    let mut successors = board.successors(player).into_iter();

    let first = successors.next().ok_or_else(|| crate::Error::NoLegalMoves {
        board: board.encode(),
    })?;
    let mut best_score = engine.score(&first, opponent);
    let mut best = first;

    for next in successors {
        let score = engine.score(&next, opponent);
        let better = match player {
            Player::X => score > best_score,
            Player::O => score < best_score,
        };
        if better {
            best_score = score;
            best = next;
        }
    }

    Ok(best)
}

/// Score every legal move for `player`, in row-major enumeration order.
///
/// Returns `(position, score)` pairs; empty when the board is full.
pub fn evaluate_moves(board: &Board, player: Player, engine: Engine) -> Vec<(usize, i32)> {
    let opponent = player.opponent();
    board
        .empty_positions()
        .into_iter()
        .map(|pos| {
            let mut next = *board;
            next.cells[pos] = player.to_cell();
            (pos, engine.score(&next, opponent))
        })
        .collect()
}

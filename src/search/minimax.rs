//! Exhaustive minimax scoring

use super::terminal_score;
use crate::tictactoe::{Board, GameStatus, Player};

/// Score `board` with `to_move` to play, visiting every node of the
/// remaining subtree.
///
/// Terminal positions return the depth-adjusted score directly. Otherwise
/// every successor is scored with the opposing side to move at `depth + 1`,
/// and the result is the maximum of the child scores when X is to move, the
/// minimum when O is. Exponential in the worst case, but the tree is at most
/// nine plies deep.
///
/// Pure function of its arguments: no shared state, no side effects.
pub fn minimax(board: &Board, to_move: Player, depth: i32) -> i32 {
    let successors = board.successors(to_move);
    let status = board.status();

    if successors.is_empty() || status != GameStatus::InProgress {
        return terminal_score(status, depth);
    }

    let opponent = to_move.opponent();
    let scores = successors
        .iter()
        .map(|next| minimax(next, opponent, depth + 1));

    match to_move {
        Player::X => scores.max(),
        Player::O => scores.min(),
    }
    .expect("non-terminal board has at least one successor")
}

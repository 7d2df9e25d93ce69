//! Alpha-beta pruned minimax scoring

use super::{SCORE_MAX, SCORE_MIN, terminal_score};
use crate::tictactoe::{Board, GameStatus, Player};

/// Score `board` with `to_move` to play, pruning subtrees that cannot
/// affect the result.
///
/// `alpha` is the best value the maximizing side is already guaranteed,
/// `beta` the best value for the minimizing side. When X is to move, the
/// running value `v` is raised over the child scores and the remaining
/// successors are abandoned as soon as `v >= beta`; the rule for O is
/// symmetric with `v <= alpha` as the cutoff. Root calls pass
/// [`SCORE_MIN`]/[`SCORE_MAX`], which no terminal score can reach.
///
/// Returns exactly the value [`super::minimax`] would return for the same
/// input; pruning changes the work, never the result.
pub fn alpha_beta(
    board: &Board,
    to_move: Player,
    mut alpha: i32,
    mut beta: i32,
    depth: i32,
) -> i32 {
    let successors = board.successors(to_move);
    let status = board.status();

    if successors.is_empty() || status != GameStatus::InProgress {
        return terminal_score(status, depth);
    }

    let opponent = to_move.opponent();
    match to_move {
        Player::X => {
            let mut v = SCORE_MIN;
            for next in &successors {
                v = v.max(alpha_beta(next, opponent, alpha, beta, depth + 1));
                if v >= beta {
                    return v; // remaining successors cannot lower the caller's bound
                }
                alpha = alpha.max(v);
            }
            v
        }
        Player::O => {
            let mut v = SCORE_MAX;
            for next in &successors {
                v = v.min(alpha_beta(next, opponent, alpha, beta, depth + 1));
                if v <= alpha {
                    return v;
                }
                beta = beta.min(v);
            }
            v
        }
    }
}

//! Board state validation logic

use super::board::{Board, Player};

impl Board {
    /// Check if the board state could arise from legal X-first play
    pub fn is_valid(&self) -> bool {
        let x_count = self
            .cells
            .iter()
            .filter(|&&c| c == Player::X.to_cell())
            .count();
        let o_count = self
            .cells
            .iter()
            .filter(|&&c| c == Player::O.to_cell())
            .count();

        // X moves first, so X equals O or leads by exactly one
        if !(x_count == o_count || x_count == o_count + 1) {
            return false;
        }

        let x_wins = self.has_won(Player::X);
        let o_wins = self.has_won(Player::O);

        if x_wins && o_wins {
            return false; // Both can't win
        }

        // A winner must have moved last
        if x_wins && x_count != o_count + 1 {
            return false;
        }
        if o_wins && x_count != o_count {
            return false;
        }

        true
    }
}

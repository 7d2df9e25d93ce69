//! High-level game management

use serde::{Deserialize, Serialize};

use super::board::{Board, GameStatus, Player};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// A complete game with history
///
/// The move list is the source of truth; board states are replayed from it.
/// X always moves first and turns alternate strictly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub moves: Vec<Move>,
    pub outcome: Option<GameOutcome>,
}

impl Game {
    /// Create a new game from the empty position
    pub fn new() -> Self {
        Game {
            moves: Vec::new(),
            outcome: None,
        }
    }

    /// The side to move next (X on even plies, O on odd plies)
    pub fn player_to_move(&self) -> Player {
        if self.moves.len() % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Play a move for the side to move
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] once the outcome is decided, and
    /// [`crate::Error::InvalidMove`] for an occupied or out-of-range position;
    /// neither consumes the turn.
    pub fn play(&mut self, position: usize) -> Result<(), crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let current = self.current_board()?;
        let player = self.player_to_move();
        let next = current.make_move(position, player)?;

        self.moves.push(Move { position, player });

        match next.status() {
            GameStatus::Won(winner) => self.outcome = Some(GameOutcome::Win(winner)),
            GameStatus::Draw => self.outcome = Some(GameOutcome::Draw),
            GameStatus::InProgress => {}
        }

        Ok(())
    }

    /// Replay moves up to a given index (exclusive)
    ///
    /// # Errors
    ///
    /// Returns error if any move in the history is invalid for the current
    /// state. This indicates corrupted game data.
    fn replay_moves_until(&self, end_index: usize) -> Result<Board, crate::Error> {
        let mut board = Board::new();
        for m in self.moves.iter().take(end_index) {
            board = board.make_move(m.position, m.player)?;
        }
        Ok(board)
    }

    /// Get current board state
    ///
    /// # Errors
    ///
    /// Returns error if any move in the history is invalid for the current
    /// state. This indicates corrupted game data.
    pub fn current_board(&self) -> Result<Board, crate::Error> {
        self.replay_moves_until(self.moves.len())
    }

    /// Get the sequence of board states, from the empty board onward
    ///
    /// # Errors
    ///
    /// Returns error if any move in the history is invalid for the current
    /// state. This indicates corrupted game data.
    pub fn state_sequence(&self) -> Result<Vec<Board>, crate::Error> {
        let mut states = Vec::with_capacity(self.moves.len() + 1);
        states.push(Board::new());

        for i in 1..=self.moves.len() {
            states.push(self.replay_moves_until(i)?);
        }

        Ok(states)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

//! Unbeatable Tic-Tac-Toe engine
//!
//! This crate provides:
//! - Complete Tic-Tac-Toe board model with validation
//! - Exhaustive minimax and alpha-beta search over the full game tree
//! - Root move selection that never loses
//! - Position analysis and solved-policy export tooling

pub mod cli;
pub mod error;
pub mod export;
pub mod search;
pub mod tictactoe;

pub use error::{Error, Result};
pub use search::{Engine, alpha_beta, best_move, best_move_with, evaluate_moves, minimax};
pub use tictactoe::{Board, Cell, Game, GameOutcome, GameStatus, Move, Player};

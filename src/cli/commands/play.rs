//! Play command - Interactive game against the engine

use std::io::{self, BufRead, Write};

use anyhow::{Result, anyhow};
use clap::{Parser, ValueEnum};

use crate::{
    search::{self, Engine},
    tictactoe::{Board, Game, GameOutcome, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Play a game against the engine")]
pub struct PlayArgs {
    /// Search algorithm the engine uses
    #[arg(long, value_enum, default_value = "alpha-beta")]
    pub engine: EngineChoice,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum EngineChoice {
    /// Alpha-beta pruned search
    AlphaBeta,
    /// Exhaustive minimax search
    Minimax,
}

impl From<EngineChoice> for Engine {
    fn from(choice: EngineChoice) -> Self {
        match choice {
            EngineChoice::AlphaBeta => Engine::AlphaBeta,
            EngineChoice::Minimax => Engine::Minimax,
        }
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let stdin = io::stdin();
    run(&mut stdin.lock(), args.engine.into()).map(|_| ())
}

/// Drive one game; returns the outcome, or `None` if input ran out first
fn run(input: &mut impl BufRead, engine: Engine) -> Result<Option<GameOutcome>> {
    println!("You are X and move first. Enter moves as: <row> <col> (each 0-2).");

    let mut game = Game::new();
    let mut board = Board::new();
    println!("{board}");

    while game.outcome.is_none() {
        match game.player_to_move() {
            Player::X => {
                let Some(position) = read_move(input)? else {
                    println!("Input closed; quitting.");
                    return Ok(None);
                };
                if let Err(err) = game.play(position) {
                    // Occupied cell: re-prompt without consuming the turn
                    println!("{err}");
                    continue;
                }
            }
            Player::O => {
                let reply = search::best_move_with(&board, Player::O, engine)?;
                let position = board
                    .find_changed_position(&reply)
                    .ok_or_else(|| anyhow!("engine returned an unchanged board"))?;
                println!("Engine plays ({}, {})", position / 3, position % 3);
                game.play(position)?;
            }
        }

        board = game.current_board()?;
        println!("{board}");
    }

    match game.outcome {
        Some(GameOutcome::Win(Player::X)) => println!("You win!"),
        Some(GameOutcome::Win(Player::O)) => println!("Engine wins."),
        Some(GameOutcome::Draw) => println!("Draw."),
        None => {}
    }

    Ok(game.outcome)
}

/// Read a "<row> <col>" pair from `input`, re-prompting until it parses.
///
/// Returns the row-major position, or `None` once the input is exhausted.
fn read_move(input: &mut impl BufRead) -> Result<Option<usize>> {
    loop {
        print!("Your move: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        if let Some(position) = parse_move(&line) {
            return Ok(Some(position));
        }
        println!("Enter two numbers between 0 and 2, e.g. '0 2'.");
    }
}

/// Parse "<row> <col>" into a row-major position
fn parse_move(line: &str) -> Option<usize> {
    let mut parts = line.split_whitespace();
    let row: usize = parts.next()?.parse().ok()?;
    let col: usize = parts.next()?.parse().ok()?;
    if parts.next().is_some() || row > 2 || col > 2 {
        return None;
    }
    Some(row * 3 + col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move() {
        assert_eq!(parse_move("0 0"), Some(0));
        assert_eq!(parse_move("0 2\n"), Some(2));
        assert_eq!(parse_move("  2 1  "), Some(7));

        assert_eq!(parse_move("3 0"), None);
        assert_eq!(parse_move("0"), None);
        assert_eq!(parse_move("0 1 2"), None);
        assert_eq!(parse_move("a b"), None);
        assert_eq!(parse_move(""), None);
    }

    #[test]
    fn test_scripted_game_reaches_a_draw() {
        // Corner opening; every engine reply along this line is forced or
        // tie-broken deterministically, and the game fills up drawn
        let mut script = io::Cursor::new("0 0\n0 1\n2 0\n1 2\n2 2\n");
        let outcome = run(&mut script, Engine::AlphaBeta).unwrap();
        assert_eq!(outcome, Some(GameOutcome::Draw));
    }

    #[test]
    fn test_bad_input_is_reprompted_until_eof() {
        let mut script = io::Cursor::new("9 9\nnonsense\n");
        let outcome = run(&mut script, Engine::AlphaBeta).unwrap();
        assert_eq!(outcome, None);
    }
}

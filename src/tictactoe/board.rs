//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '-' | '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game
///
/// X is the human side and always moves first. O is the engine. The search
/// treats X as the maximizing player and O as the minimizing player; this is
/// a fixed convention, not a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// Result of classifying a board: still playable, won, or drawn.
///
/// Always derived from a [`Board`] via [`Board::status`], never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

/// The 3x3 board, stored row-major: position `p` is `(row, col) = (p / 3, p % 3)`.
///
/// This type implements `Copy` for efficiency since it's only 9 bytes.
/// Applying a move never mutates a board; it produces a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [Cell; 9],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Helper: Parse 9 cells from a slice of characters.
    ///
    /// # Errors
    ///
    /// Returns error if fewer than 9 characters or any character is invalid.
    fn parse_cells(chars: &[char], context: &str) -> Result<[Cell; 9], crate::Error> {
        if chars.len() < 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: context.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().take(9).enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: context.to_string(),
            })?;
        }

        Ok(cells)
    }

    /// Helper: Count X and O pieces on the board.
    fn piece_counts(&self) -> (usize, usize) {
        let mut x = 0;
        let mut o = 0;
        for cell in &self.cells {
            match cell {
                Cell::X => x += 1,
                Cell::O => o += 1,
                Cell::Empty => {}
            }
        }
        (x, o)
    }

    /// Create a board from a string of 9 cell glyphs, row-major.
    ///
    /// Whitespace is filtered out; `-` and `.` both read as empty. The piece
    /// counts must be consistent with X moving first.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Fewer than 9 non-whitespace characters are present
    /// - Any character is not a valid cell representation
    /// - The piece counts are invalid (X must equal O or lead by exactly 1)
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        let cells = Self::parse_cells(&chars, s)?;
        let board = Board { cells };

        let (x_count, o_count) = board.piece_counts();
        if !(x_count == o_count || x_count == o_count + 1) {
            return Err(crate::Error::InvalidPieceCounts { x_count, o_count });
        }

        Ok(board)
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        let (x, o) = self.piece_counts();
        x + o
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Get all empty positions, in row-major order
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// The side whose turn it is, derived from the piece counts.
    ///
    /// X moves first, so X is to move exactly when the counts are equal.
    pub fn player_to_move(&self) -> Player {
        let (x, o) = self.piece_counts();
        if x == o { Player::X } else { Player::O }
    }

    /// Place `player`'s piece at `pos` and return the new board.
    ///
    /// The input board is left unmodified; callers that want to track game
    /// progress must retain the returned value.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidMove`] when `pos` is out of range or the
    /// cell is already occupied. Recoverable: re-prompt and retry.
    ///
    /// # Examples
    ///
    /// ```
    /// use oxo::tictactoe::{Board, Cell, Player};
    ///
    /// let board = Board::new();
    /// let next = board.make_move(4, Player::X).unwrap();
    /// assert_eq!(next.get(4), Cell::X);
    /// assert_eq!(board.get(4), Cell::Empty);
    /// assert!(next.make_move(4, Player::O).is_err());
    /// ```
    #[must_use = "make_move returns a new board; the original is unchanged"]
    pub fn make_move(&self, pos: usize, player: Player) -> Result<Board, crate::Error> {
        if pos >= 9 {
            return Err(crate::Error::InvalidMove { position: pos });
        }

        if !self.is_empty(pos) {
            return Err(crate::Error::InvalidMove { position: pos });
        }

        let mut next = *self;
        next.cells[pos] = player.to_cell();
        Ok(next)
    }

    /// Enumerate every board reachable by placing one `player` piece on an
    /// empty cell, in row-major position order.
    ///
    /// Empty iff the board has no empty cell. The enumeration order is the
    /// deterministic tie-break for move selection.
    pub fn successors(&self, player: Player) -> Vec<Board> {
        self.empty_positions()
            .into_iter()
            .map(|pos| {
                let mut next = *self;
                next.cells[pos] = player.to_cell();
                next
            })
            .collect()
    }

    /// Get legal moves in this position (empty cells when game not terminal)
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.empty_positions()
    }

    /// Check if a player has won
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// Classify the board: won line for either side, draw, or still playable.
    ///
    /// Exactly one variant is returned. A reachable board can never hold
    /// winning lines for both sides; X is checked first.
    pub fn status(&self) -> GameStatus {
        if self.has_won(Player::X) {
            return GameStatus::Won(Player::X);
        }
        if self.has_won(Player::O) {
            return GameStatus::Won(Player::O);
        }
        if self.cells.contains(&Cell::Empty) {
            GameStatus::InProgress
        } else {
            GameStatus::Draw
        }
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        match self.status() {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.status() != GameStatus::InProgress
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        self.status() == GameStatus::Draw
    }

    /// Find the position where two boards differ (for inferring moves)
    ///
    /// Returns the first position where the cells differ, or None if identical.
    pub fn find_changed_position(&self, other: &Board) -> Option<usize> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .position(|(a, b)| a != b)
    }

    /// Get the board as a 9-glyph string, row-major
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = Board::new();
        for i in 0..9 {
            assert_eq!(board.cells[i], Cell::Empty);
        }
        assert_eq!(board.player_to_move(), Player::X);
    }

    #[test]
    fn test_make_move() {
        let board = Board::new();

        let next = board.make_move(4, Player::X).unwrap();
        assert_eq!(next.cells[4], Cell::X);
        assert_eq!(next.player_to_move(), Player::O);

        // Move on occupied cell
        let result = next.make_move(4, Player::O);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("occupied"));
    }

    #[test]
    fn test_make_move_out_of_range() {
        let board = Board::new();
        assert!(matches!(
            board.make_move(9, Player::X),
            Err(crate::Error::InvalidMove { position: 9 })
        ));
    }

    #[test]
    fn test_make_move_leaves_original_unchanged() {
        let board = Board::from_string("X--------").unwrap();
        let before = board;

        let _ = board.make_move(0, Player::O);
        let _ = board.make_move(8, Player::O).unwrap();

        assert_eq!(board, before);
        for i in 0..9 {
            assert_eq!(board.cells[i], before.cells[i]);
        }
    }

    #[test]
    fn test_successors_from_empty_board() {
        let board = Board::new();
        let successors = board.successors(Player::X);

        assert_eq!(successors.len(), 9);
        for (i, next) in successors.iter().enumerate() {
            // Row-major: the i-th successor places on position i
            assert_eq!(next.cells[i], Cell::X);
            assert_eq!(next.occupied_count(), 1);
        }
    }

    #[test]
    fn test_successors_of_full_board_is_empty() {
        let board = Board::from_string("XOXXOXOXO").unwrap();
        assert!(board.successors(Player::X).is_empty());
    }

    #[test]
    fn test_status_win_and_draw() {
        let x_row = Board::from_string("XXXOO----").unwrap();
        assert_eq!(x_row.status(), GameStatus::Won(Player::X));
        assert_eq!(x_row.winner(), Some(Player::X));

        let o_col = Board::from_string("OX-OX-O-X").unwrap();
        assert_eq!(o_col.status(), GameStatus::Won(Player::O));

        // Full board, no line for either side
        let drawn = Board::from_string("XOXXOXOXO").unwrap();
        assert_eq!(drawn.status(), GameStatus::Draw);
        assert!(drawn.is_draw());

        let open = Board::from_string("X--------").unwrap();
        assert_eq!(open.status(), GameStatus::InProgress);
        assert!(!open.is_terminal());
    }

    #[test]
    fn test_player_to_move_alternates() {
        let mut board = Board::new();
        assert_eq!(board.player_to_move(), Player::X);

        board = board.make_move(0, Player::X).unwrap();
        assert_eq!(board.player_to_move(), Player::O);

        board = board.make_move(4, Player::O).unwrap();
        assert_eq!(board.player_to_move(), Player::X);
    }

    #[test]
    fn test_from_string() {
        let board = Board::from_string("XOX------").unwrap();
        assert_eq!(board.cells[0], Cell::X);
        assert_eq!(board.cells[1], Cell::O);
        assert_eq!(board.cells[2], Cell::X);
        assert_eq!(board.player_to_move(), Player::O);

        // Dots and whitespace are tolerated
        let spaced = Board::from_string("XOX ...\n---").unwrap();
        assert_eq!(spaced.cells[0], Cell::X);
        assert_eq!(spaced.occupied_count(), 3);

        assert!(Board::from_string("XO").is_err());
        assert!(Board::from_string("XOZ------").is_err());
    }

    #[test]
    fn test_from_string_rejects_bad_counts() {
        // Two extra X pieces cannot arise from alternating play
        let err = Board::from_string("XX-------").unwrap_err();
        assert!(matches!(err, crate::Error::InvalidPieceCounts { .. }));

        // O ahead of X is likewise impossible
        assert!(Board::from_string("O--------").is_err());
    }

    #[test]
    fn test_encode_roundtrip() {
        let board = Board::from_string("XO-------").unwrap();
        assert_eq!(board.encode(), "XO-------");
        assert_eq!(Board::from_string(&board.encode()).unwrap(), board);

        assert_eq!(Board::new().encode(), "---------");
    }

    #[test]
    fn test_display() {
        let board = Board::from_string("XOX-O-X--").unwrap();
        let display = format!("{board}");
        assert_eq!(display, "XOX\n-O-\nX--");
    }

    #[test]
    fn test_find_changed_position() {
        let board = Board::new();
        let next = board.make_move(5, Player::X).unwrap();
        assert_eq!(board.find_changed_position(&next), Some(5));
        assert_eq!(board.find_changed_position(&board), None);
    }
}

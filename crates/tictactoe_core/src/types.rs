//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mark placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Crosses.
    X,
    /// Noughts.
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// The human's mark and the computer's mark for one game.
///
/// The two are always distinct: the opponent mark is derived from the
/// player mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Marks {
    player: Mark,
    opponent: Mark,
}

impl Marks {
    /// Seats the human on `player`, the computer on the other mark.
    pub fn new(player: Mark) -> Self {
        Self {
            player,
            opponent: player.opponent(),
        }
    }

    /// The human's mark.
    pub fn player(&self) -> Mark {
        self.player
    }

    /// The computer's mark.
    pub fn opponent(&self) -> Mark {
        self.opponent
    }
}

impl Default for Marks {
    fn default() -> Self {
        Self::new(Mark::X)
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square holding a mark.
    Occupied(Mark),
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Square::Empty => write!(f, "."),
            Square::Occupied(mark) => write!(f, "{}", mark),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from three rows of squares, top row first.
    pub fn from_rows(rows: [[Square; 3]; 3]) -> Self {
        let mut board = Self::new();
        for (row, squares) in rows.iter().enumerate() {
            for (col, square) in squares.iter().enumerate() {
                board.squares[row * 3 + col] = *square;
            }
        }
        board
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Overwrites the square at the given position.
    ///
    /// No occupancy check; game play goes through [`Board::place`].
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_free(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Puts `mark` on a free square.
    ///
    /// Callers check [`Board::is_free`] first; placing on an occupied
    /// square is a logic error.
    pub fn place(&mut self, pos: Position, mark: Mark) {
        debug_assert!(self.is_free(pos), "place on occupied square {pos}");
        self.set(pos, Square::Occupied(mark));
    }

    /// Empty positions in row-major order.
    pub fn free_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_free(*pos))
            .collect()
    }

    /// Number of squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                write!(f, "{}", self.squares[row * 3 + col])?;
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

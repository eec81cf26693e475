//! Board coordinates.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// A position on the tic-tac-toe board.
///
/// Constructing a `Position` from raw integers is the range check: every
/// value of this type names a real cell.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (row 0, col 0)
    TopLeft,
    /// Top-center (row 0, col 1)
    TopCenter,
    /// Top-right (row 0, col 2)
    TopRight,
    /// Middle-left (row 1, col 0)
    MiddleLeft,
    /// Center (row 1, col 1)
    Center,
    /// Middle-right (row 1, col 2)
    MiddleRight,
    /// Bottom-left (row 2, col 0)
    BottomLeft,
    /// Bottom-center (row 2, col 1)
    BottomCenter,
    /// Bottom-right (row 2, col 2)
    BottomRight,
}

/// Row or column outside `0..=2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Coordinates ({}, {}) are off the board (row and col must be 0-2)", row, col)]
pub struct CoordinateError {
    /// Requested row.
    pub row: usize,
    /// Requested column.
    pub col: usize,
}

impl Position {
    /// All 9 positions, row-major.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// Creates a position from (row, col), rejecting anything off the board.
    #[instrument]
    pub fn from_coords(row: usize, col: usize) -> Result<Self, CoordinateError> {
        if row > 2 || col > 2 {
            warn!(row, col, "Rejected off-board coordinates");
            return Err(CoordinateError { row, col });
        }
        Ok(Self::ALL[row * 3 + col])
    }

    /// Row of this position (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this position (0-2).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_coords_round_trip_every_cell() {
        for pos in Position::iter() {
            assert_eq!(Position::from_coords(pos.row(), pos.col()), Ok(pos));
        }
    }

    #[test]
    fn test_from_coords_rejects_off_board() {
        assert_eq!(
            Position::from_coords(3, 0),
            Err(CoordinateError { row: 3, col: 0 })
        );
        assert!(Position::from_coords(0, 3).is_err());
    }

    #[test]
    fn test_all_matches_enum_order() {
        let iterated: Vec<_> = Position::iter().collect();
        assert_eq!(iterated, Position::ALL.to_vec());
    }
}

//! Win detection logic for tic-tac-toe.

use crate::coord::Coord;
use crate::grid::Grid;
use crate::types::Square;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Every line, in scan order: rows, then columns, then diagonals.
const LINES: [[Coord; 3]; 8] = [
    // Rows
    [Coord::at(0, 0), Coord::at(0, 1), Coord::at(0, 2)],
    [Coord::at(1, 0), Coord::at(1, 1), Coord::at(1, 2)],
    [Coord::at(2, 0), Coord::at(2, 1), Coord::at(2, 2)],
    // Columns
    [Coord::at(0, 0), Coord::at(1, 0), Coord::at(2, 0)],
    [Coord::at(0, 1), Coord::at(1, 1), Coord::at(2, 1)],
    [Coord::at(0, 2), Coord::at(1, 2), Coord::at(2, 2)],
    // Diagonals
    [Coord::at(0, 0), Coord::at(1, 1), Coord::at(2, 2)],
    [Coord::at(0, 2), Coord::at(1, 1), Coord::at(2, 0)],
];

/// Which lines count towards a win.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum WinLines {
    /// Rows, columns and both diagonals.
    #[default]
    Full,
    /// The three rows only, for parity with engines that never checked
    /// columns or diagonals.
    RowsOnly,
}

impl WinLines {
    /// Lines scanned in this mode, in scan order.
    pub fn lines(self) -> &'static [[Coord; 3]] {
        match self {
            WinLines::Full => &LINES,
            WinLines::RowsOnly => &LINES[..3],
        }
    }
}

/// Returns the symbol holding a complete line, or `Square::Empty`.
///
/// Lines are scanned in `mode.lines()` order and the first line whose three
/// cells are occupied by the same symbol decides the result.
#[instrument(skip(grid))]
pub fn check_winner(grid: &Grid, mode: WinLines) -> Square {
    for [a, b, c] in mode.lines() {
        let first = grid.cell(*a);
        if !first.is_empty() && first.matches(grid.cell(*b)) && first.matches(grid.cell(*c)) {
            return first.occupancy();
        }
    }

    Square::Empty
}

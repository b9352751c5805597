//! The 3x3 board: cell storage, lookup and last-play tracking.

use crate::cell::Cell;
use crate::coord::{Coord, SIZE};
use crate::error::RulesError;
use crate::rules::{self, WinLines};
use crate::types::{Square, Symbol};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// 3x3 tic-tac-toe board.
///
/// Owns exactly one cell per coordinate, stored in row-major order, and
/// remembers where the most recent symbol went. The last play is kept as a
/// coordinate and resolved against `cells` on demand.
///
/// Deserialization rejects cells that are not in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    pub(crate) cells: [Cell; 9],
    pub(crate) last_played: Option<Coord>,
}

impl Grid {
    /// Creates an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            cells: Coord::ALL.map(|coord| Cell::at(coord, Square::Empty)),
            last_played: None,
        }
    }

    /// Builds a board from three rows of text symbols, e.g. `["XO ", " X ", "O  "]`.
    ///
    /// The resulting board has no last play.
    ///
    /// # Errors
    ///
    /// Returns `RulesError::InvalidSymbol` for an unknown character, or
    /// `RulesError::CellNotFound` for a row longer than three characters.
    /// Short rows leave their trailing cells empty.
    #[instrument]
    pub fn from_rows(rows: [&str; SIZE]) -> Result<Self, RulesError> {
        let mut grid = Self::new();
        for (x, row) in rows.iter().enumerate() {
            for (y, ch) in row.chars().enumerate() {
                let cell = Cell::parse(ch, x, y)?;
                grid.cells[cell.coord().index()] = cell;
            }
        }
        Ok(grid)
    }

    /// Returns the cell at a validated coordinate.
    pub fn cell(&self, coord: Coord) -> &Cell {
        &self.cells[coord.index()]
    }

    /// Returns the cell at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns `RulesError::CellNotFound` if the coordinate is off the board.
    #[instrument(skip(self))]
    pub fn lookup(&self, x: usize, y: usize) -> Result<&Cell, RulesError> {
        let coord = Coord::new(x, y).ok_or(RulesError::CellNotFound { x, y })?;
        Ok(self.cell(coord))
    }

    /// Places `symbol` at `(x, y)` and records it as the last play.
    ///
    /// Occupancy is checked by the cell itself; nothing is recorded when it
    /// refuses.
    ///
    /// # Errors
    ///
    /// Returns `RulesError::CellNotFound` for an off-board coordinate and
    /// `RulesError::CellOccupied` for a cell that already holds a symbol.
    #[instrument(skip(self), fields(symbol = %symbol))]
    pub fn place(&mut self, symbol: Symbol, x: usize, y: usize) -> Result<(), RulesError> {
        let coord = Coord::new(x, y).ok_or(RulesError::CellNotFound { x, y })?;
        self.cells[coord.index()].place(symbol)?;
        self.last_played = Some(coord);
        debug!(%coord, "Symbol placed");
        Ok(())
    }

    /// Returns the most recently played cell, if any move has been made.
    pub fn last_played(&self) -> Option<&Cell> {
        self.last_played.map(|coord| self.cell(coord))
    }

    /// Returns the occupancy of the first completed line, or `Square::Empty`.
    #[instrument(skip(self))]
    pub fn winning_symbol(&self, mode: WinLines) -> Square {
        rules::check_winner(self, mode)
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Iterates over the cells of row `x`.
    pub fn row(&self, x: usize) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(move |cell| cell.coord().x() == x)
    }
}

/// Unchecked wire form of a `Grid`.
#[derive(Deserialize)]
struct RawGrid {
    cells: [Cell; 9],
    last_played: Option<Coord>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = RulesError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        for (cell, expected) in raw.cells.iter().zip(Coord::ALL) {
            if cell.coord() != expected {
                return Err(RulesError::CellNotFound {
                    x: expected.x(),
                    y: expected.y(),
                });
            }
        }
        Ok(Self {
            cells: raw.cells,
            last_played: raw.last_played,
        })
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for x in 0..SIZE {
            if x > 0 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
            let row: Vec<String> = self.row(x).map(|cell| cell.occupancy().to_string()).collect();
            write!(f, "{}", row.join("|"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_has_one_empty_cell_per_coordinate() {
        let grid = Grid::new();
        for x in 0..SIZE {
            for y in 0..SIZE {
                let cell = grid.lookup(x, y).unwrap();
                assert_eq!(cell.coord(), Coord::new(x, y).unwrap());
                assert!(cell.is_empty());
            }
        }
        assert!(grid.last_played().is_none());
    }

    #[test]
    fn test_lookup_out_of_range() {
        let grid = Grid::new();
        assert_eq!(
            grid.lookup(0, 3).err(),
            Some(RulesError::CellNotFound { x: 0, y: 3 })
        );
    }

    #[test]
    fn test_place_records_last_played() {
        let mut grid = Grid::new();
        grid.place(Symbol::X, 1, 2).unwrap();
        let last = grid.last_played().unwrap();
        assert_eq!(last.coord(), Coord::new(1, 2).unwrap());
        assert!(last.matches(Symbol::X));
    }

    #[test]
    fn test_failed_place_keeps_last_played() {
        let mut grid = Grid::new();
        grid.place(Symbol::X, 0, 0).unwrap();
        grid.place(Symbol::O, 2, 2).unwrap();

        assert!(grid.place(Symbol::X, 0, 0).is_err());
        assert!(grid.place(Symbol::X, 5, 0).is_err());
        assert_eq!(
            grid.last_played().map(Cell::coord),
            Coord::new(2, 2)
        );
    }

    #[test]
    fn test_from_rows() {
        let grid = Grid::from_rows(["XO ", " X", ""]).unwrap();
        assert_eq!(grid.lookup(0, 0).unwrap().occupancy(), Square::Occupied(Symbol::X));
        assert_eq!(grid.lookup(0, 1).unwrap().occupancy(), Square::Occupied(Symbol::O));
        assert_eq!(grid.lookup(1, 1).unwrap().occupancy(), Square::Occupied(Symbol::X));
        assert!(grid.lookup(2, 2).unwrap().is_empty());
        assert!(grid.last_played().is_none());
    }

    #[test]
    fn test_from_rows_rejects_bad_input() {
        assert_eq!(
            Grid::from_rows(["X-O", "", ""]),
            Err(RulesError::InvalidSymbol('-'))
        );
        assert_eq!(
            Grid::from_rows(["", "XOXO", ""]),
            Err(RulesError::CellNotFound { x: 1, y: 3 })
        );
    }

    #[test]
    fn test_deserialize_keeps_state() {
        let mut grid = Grid::new();
        grid.place(Symbol::X, 1, 2).unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(serde_json::from_str::<Grid>(&json).unwrap(), grid);
    }

    #[test]
    fn test_deserialize_rejects_out_of_range_last_played() {
        let mut json = serde_json::to_value(Grid::new()).unwrap();
        json["last_played"] = serde_json::json!({ "x": 4, "y": 0 });
        assert!(serde_json::from_value::<Grid>(json).is_err());
    }

    #[test]
    fn test_deserialize_rejects_misordered_cells() {
        let mut json = serde_json::to_value(Grid::new()).unwrap();
        let cells = json["cells"].as_array_mut().unwrap();
        cells.swap(0, 4);
        let err = serde_json::from_value::<Grid>(json).unwrap_err();
        assert!(err.to_string().contains("No cell at (0, 0)"));
    }

    #[test]
    fn test_deserialize_rejects_duplicate_cells() {
        let mut json = serde_json::to_value(Grid::new()).unwrap();
        json["cells"][8] = json["cells"][0].clone();
        assert!(serde_json::from_value::<Grid>(json).is_err());
    }

    #[test]
    fn test_display() {
        let grid = Grid::from_rows(["XO ", " X ", "  O"]).unwrap();
        assert_eq!(grid.to_string(), "X|O| \n-+-+-\n |X| \n-+-+-\n | |O");
    }
}

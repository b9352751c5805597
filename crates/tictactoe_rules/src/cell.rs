//! A single board position and its occupancy.

use crate::coord::Coord;
use crate::error::RulesError;
use crate::types::{Square, Symbol};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One position on the board.
///
/// Occupancy only ever moves from `Empty` to `Occupied`; `place` refuses
/// any other transition, so a cell is the authority on whether it can be
/// played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    coord: Coord,
    occupancy: Square,
}

impl Cell {
    /// Creates a cell at `(x, y)` with the given occupancy.
    ///
    /// # Errors
    ///
    /// Returns `RulesError::CellNotFound` if the coordinate is off the board.
    #[instrument]
    pub fn create(occupancy: Square, x: usize, y: usize) -> Result<Self, RulesError> {
        let coord = Coord::new(x, y).ok_or(RulesError::CellNotFound { x, y })?;
        Ok(Self::at(coord, occupancy))
    }

    /// Creates a cell from its text symbol (`' '`, `'X'` or `'O'`).
    ///
    /// # Errors
    ///
    /// Returns `RulesError::InvalidSymbol` for any other character, or
    /// `RulesError::CellNotFound` if the coordinate is off the board.
    #[instrument]
    pub fn parse(symbol: char, x: usize, y: usize) -> Result<Self, RulesError> {
        let occupancy = Square::try_from(symbol)?;
        Self::create(occupancy, x, y)
    }

    pub(crate) fn at(coord: Coord, occupancy: Square) -> Self {
        Self { coord, occupancy }
    }

    /// Returns the current occupancy.
    pub fn occupancy(&self) -> Square {
        self.occupancy
    }

    /// Returns the cell's coordinate.
    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// Returns true if no symbol has been placed here.
    pub fn is_empty(&self) -> bool {
        self.occupancy.is_empty()
    }

    /// Compares occupancy by value against a square, a symbol or another cell.
    pub fn matches(&self, other: impl Into<Square>) -> bool {
        self.occupancy == other.into()
    }

    /// Places `symbol` in an empty cell.
    ///
    /// # Errors
    ///
    /// Returns `RulesError::CellOccupied` if the cell already holds a symbol;
    /// the cell is left unchanged.
    #[instrument(skip(self), fields(coord = %self.coord))]
    pub fn place(&mut self, symbol: Symbol) -> Result<(), RulesError> {
        if let Square::Occupied(occupant) = self.occupancy {
            return Err(RulesError::CellOccupied {
                x: self.coord.x(),
                y: self.coord.y(),
                occupant,
            });
        }
        self.occupancy = Square::Occupied(symbol);
        Ok(())
    }
}

impl From<&Cell> for Square {
    fn from(cell: &Cell) -> Self {
        cell.occupancy
    }
}

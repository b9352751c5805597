//! Board coordinates.

use crate::error::RulesError;
use serde::{Deserialize, Serialize};

/// Side length of the board.
pub const SIZE: usize = 3;

/// A validated `(x, y)` position on the board.
///
/// `x` selects the row and `y` the column, both in `0..3`. A `Coord` can
/// only be obtained for in-range values, so indexing the grid with one never
/// fails. Deserialization goes through the same range check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawCoord")]
pub struct Coord {
    x: usize,
    y: usize,
}

impl Coord {
    /// All 9 coordinates in row-major order.
    pub const ALL: [Coord; 9] = [
        Coord::at(0, 0),
        Coord::at(0, 1),
        Coord::at(0, 2),
        Coord::at(1, 0),
        Coord::at(1, 1),
        Coord::at(1, 2),
        Coord::at(2, 0),
        Coord::at(2, 1),
        Coord::at(2, 2),
    ];

    /// Creates a coordinate, or `None` if either component is out of range.
    pub fn new(x: usize, y: usize) -> Option<Self> {
        (x < SIZE && y < SIZE).then_some(Self { x, y })
    }

    pub(crate) const fn at(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Creates a coordinate from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.x * SIZE + self.y
    }

    /// Row.
    pub fn x(self) -> usize {
        self.x
    }

    /// Column.
    pub fn y(self) -> usize {
        self.y
    }
}

/// Unchecked wire form of a `Coord`.
#[derive(Deserialize)]
struct RawCoord {
    x: usize,
    y: usize,
}

impl TryFrom<RawCoord> for Coord {
    type Error = RulesError;

    fn try_from(raw: RawCoord) -> Result<Self, Self::Error> {
        Coord::new(raw.x, raw.y).ok_or(RulesError::CellNotFound { x: raw.x, y: raw.y })
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

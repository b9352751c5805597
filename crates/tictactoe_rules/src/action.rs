//! First-class move values.
//!
//! A move records intent (which symbol, which cell) independently of the
//! game it is applied to, so it can be stored in history and replayed.

use crate::coord::Coord;
use crate::types::Symbol;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A symbol placed at `(x, y)`.
///
/// Coordinates are raw and unchecked; `Game::play_move` validates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The symbol being placed.
    pub symbol: Symbol,
    /// Target row.
    pub x: usize,
    /// Target column.
    pub y: usize,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(symbol: Symbol, x: usize, y: usize) -> Self {
        Self { symbol, x, y }
    }

    /// Returns the target coordinate, or `None` if it is off the board.
    pub fn coord(&self) -> Option<Coord> {
        Coord::new(self.x, self.y)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> ({}, {})", self.symbol, self.x, self.y)
    }
}

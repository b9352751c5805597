//! Error types for the rules engine.

use crate::types::Symbol;
use derive_more::{Display, Error};
use tracing::instrument;

/// A rejected operation on a cell, grid or game.
///
/// Every variant is caller-correctable: the operation that produced it left
/// the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum RulesError {
    /// A text symbol was not one of `' '`, `'X'` or `'O'`.
    #[display("Invalid symbol: {_0:?}")]
    InvalidSymbol(char),

    /// The opening move was made by a symbol other than `X`.
    #[display("Invalid first player: {_0} cannot open the game")]
    InvalidFirstPlayer(Symbol),

    /// The same symbol tried to move twice in a row.
    #[display("Invalid turn order: {_0} just played")]
    InvalidTurnOrder(Symbol),

    /// The target cell already holds a symbol.
    #[display("Cell ({x}, {y}) is already occupied by {occupant}")]
    CellOccupied {
        /// Row of the cell.
        x: usize,
        /// Column of the cell.
        y: usize,
        /// Symbol already in the cell.
        occupant: Symbol,
    },

    /// The coordinate lies outside the 3x3 board.
    #[display("No cell at ({x}, {y})")]
    CellNotFound {
        /// Requested row.
        x: usize,
        /// Requested column.
        y: usize,
    },
}

impl std::error::Error for RulesError {}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error at the caller's location.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

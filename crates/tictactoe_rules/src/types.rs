//! Core domain types for tic-tac-toe.

use crate::error::RulesError;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A game piece placed by one of the two players.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Symbol {
    /// Symbol X (always opens the game).
    X,
    /// Symbol O (moves second).
    O,
}

impl Symbol {
    /// The symbol that must make the opening move.
    pub const FIRST: Symbol = Symbol::X;

    /// Returns the other symbol.
    pub fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }

    /// Text form of the symbol.
    pub fn to_char(self) -> char {
        match self {
            Symbol::X => 'X',
            Symbol::O => 'O',
        }
    }
}

impl TryFrom<char> for Symbol {
    type Error = RulesError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            'X' => Ok(Symbol::X),
            'O' => Ok(Symbol::O),
            other => Err(RulesError::InvalidSymbol(other)),
        }
    }
}

/// Occupancy of one cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
pub enum Square {
    /// No symbol placed yet.
    #[default]
    #[display(" ")]
    Empty,
    /// Cell holds a symbol.
    #[display("{_0}")]
    Occupied(Symbol),
}

impl Square {
    /// Returns true if no symbol is present.
    pub fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }

    /// Returns the symbol in the square, if any.
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Square::Empty => None,
            Square::Occupied(symbol) => Some(symbol),
        }
    }

    /// Text form: `' '`, `'X'` or `'O'`.
    pub fn to_char(self) -> char {
        self.symbol().map_or(' ', Symbol::to_char)
    }
}

impl From<Symbol> for Square {
    fn from(symbol: Symbol) -> Self {
        Square::Occupied(symbol)
    }
}

impl TryFrom<char> for Square {
    type Error = RulesError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            ' ' => Ok(Square::Empty),
            other => Symbol::try_from(other).map(Square::Occupied),
        }
    }
}

//! Tic-tac-toe rules engine.
//!
//! Enforces move legality on a fixed 3x3 board (X opens, symbols alternate,
//! a cell is played at most once) and reports the symbol holding a completed
//! line.
//!
//! # Architecture
//!
//! - **Cell**: one position; refuses to be played twice
//! - **Grid**: the nine cells, coordinate lookup, last-play tracking
//! - **Rules**: line table and win scan (`WinLines::Full` or `WinLines::RowsOnly`)
//! - **Game**: turn order, move history, winner query
//! - **Invariants**: properties re-checked after every move in debug builds
//!
//! # Example
//!
//! ```
//! use tictactoe_rules::{Game, RulesError, Square, Symbol};
//!
//! let mut game = Game::new();
//! game.play(Symbol::X, 0, 0)?;
//! game.play(Symbol::O, 1, 0)?;
//! game.play(Symbol::X, 0, 1)?;
//! game.play(Symbol::O, 1, 1)?;
//! game.play(Symbol::X, 0, 2)?;
//! assert_eq!(game.winner(), Square::Occupied(Symbol::X));
//! # Ok::<(), RulesError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod cell;
mod config;
mod coord;
mod error;
mod game;
mod grid;
mod invariants;
pub mod rules;
mod types;

pub use action::Move;
pub use cell::Cell;
pub use config::RulesConfig;
pub use coord::{Coord, SIZE};
pub use error::{ConfigError, RulesError};
pub use game::{Game, Turn};
pub use grid::Grid;
pub use invariants::{
    assert_invariants, AlternatingTurnInvariant, GameInvariants, Invariant, InvariantSet,
    InvariantViolation, LastPlayedInvariant, MonotonicGridInvariant,
};
pub use rules::{check_winner, WinLines};
pub use types::{Square, Symbol};

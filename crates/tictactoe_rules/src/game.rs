//! Game controller: turn order and winner queries.

use crate::action::Move;
use crate::config::RulesConfig;
use crate::error::RulesError;
use crate::grid::Grid;
use crate::types::{Square, Symbol};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Whose move it is.
///
/// There is no terminal state: a game keeps accepting moves after a win or
/// a full board, and callers decide when a match is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    /// Nothing played yet; only `Symbol::FIRST` may move.
    NoMovesYet,
    /// The given symbol moves next.
    Awaiting(Symbol),
}

/// A single tic-tac-toe match.
///
/// Owns its grid exclusively. A failed `play` leaves the game exactly as it
/// was.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Game {
    pub(crate) grid: Grid,
    config: RulesConfig,
    pub(crate) history: Vec<Move>,
}

impl Game {
    /// Creates a game with the default rules.
    #[instrument]
    pub fn new() -> Self {
        Self::with_config(RulesConfig::default())
    }

    /// Creates a game with the given rules.
    #[instrument]
    pub fn with_config(config: RulesConfig) -> Self {
        Self {
            grid: Grid::new(),
            config,
            history: Vec::new(),
        }
    }

    /// Plays `symbol` at `(x, y)`.
    ///
    /// Turn order is checked before the coordinate.
    ///
    /// # Errors
    ///
    /// - `RulesError::InvalidFirstPlayer` if the opening move is not `X`.
    /// - `RulesError::InvalidTurnOrder` if `symbol` also made the previous move.
    /// - `RulesError::CellNotFound` / `RulesError::CellOccupied` from the grid.
    #[instrument(skip(self), fields(symbol = %symbol))]
    pub fn play(&mut self, symbol: Symbol, x: usize, y: usize) -> Result<(), RulesError> {
        self.ensure_move_order(symbol)?;
        self.grid.place(symbol, x, y)?;
        self.history.push(Move::new(symbol, x, y));
        debug!(moves = self.history.len(), "Move accepted");

        #[cfg(debug_assertions)]
        crate::invariants::assert_invariants(self);

        Ok(())
    }

    /// Plays a `Move` value.
    pub fn play_move(&mut self, action: Move) -> Result<(), RulesError> {
        self.play(action.symbol, action.x, action.y)
    }

    fn ensure_move_order(&self, symbol: Symbol) -> Result<(), RulesError> {
        match self.grid.last_played() {
            None if symbol != Symbol::FIRST => Err(RulesError::InvalidFirstPlayer(symbol)),
            Some(last) if last.matches(symbol) => Err(RulesError::InvalidTurnOrder(symbol)),
            _ => Ok(()),
        }
    }

    /// Returns the symbol holding a completed line, or `Square::Empty`.
    #[instrument(skip(self))]
    pub fn winner(&self) -> Square {
        self.grid.winning_symbol(*self.config.win_lines())
    }

    /// Returns whose move it is.
    pub fn turn(&self) -> Turn {
        self.history
            .last()
            .map_or(Turn::NoMovesYet, |last| Turn::Awaiting(last.symbol.opponent()))
    }

    /// Returns the board.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the rules in effect.
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Plays `moves` in order on a fresh game.
    ///
    /// # Errors
    ///
    /// Stops at, and returns, the first rejected move.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(config: RulesConfig, moves: &[Move]) -> Result<Self, RulesError> {
        let mut game = Self::with_config(config);
        for action in moves {
            game.play_move(*action)?;
        }
        Ok(game)
    }
}

//! Alternating turn invariant: X, O, X, O, ...

use super::Invariant;
use crate::game::Game;
use crate::types::Symbol;

/// Invariant: the first move is `Symbol::FIRST` and no symbol moves twice
/// in a row.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        match history.first() {
            None => true,
            Some(first) if first.symbol != Symbol::FIRST => false,
            Some(_) => history.windows(2).all(|pair| pair[0].symbol != pair[1].symbol),
        }
    }

    fn description() -> &'static str {
        "Symbols alternate turns starting with X"
    }
}

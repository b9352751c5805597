//! Monotonic grid invariant: cells never change once played.

use super::Invariant;
use crate::game::Game;
use crate::grid::Grid;

/// Invariant: replaying the move history on an empty grid reproduces the
/// current cells exactly.
///
/// Any cell overwritten, cleared or filled outside `Game::play` breaks it.
pub struct MonotonicGridInvariant;

impl Invariant<Game> for MonotonicGridInvariant {
    fn holds(game: &Game) -> bool {
        let mut rebuilt = Grid::new();
        for action in game.history() {
            if rebuilt.place(action.symbol, action.x, action.y).is_err() {
                return false;
            }
        }

        rebuilt.cells() == game.grid().cells()
    }

    fn description() -> &'static str {
        "Grid cells are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;
    use crate::coord::Coord;
    use crate::types::{Square, Symbol};
    use crate::Move;

    #[test]
    fn test_fresh_game_holds() {
        assert!(MonotonicGridInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_played_game_holds() {
        let mut game = Game::new();
        game.play(Symbol::X, 1, 1).unwrap();
        game.play(Symbol::O, 0, 0).unwrap();
        assert!(MonotonicGridInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_cell_violates() {
        let mut game = Game::new();
        game.play(Symbol::X, 1, 1).unwrap();

        let center = Coord::at(1, 1);
        game.grid.cells[center.index()] = Cell::at(center, Square::Occupied(Symbol::O));
        assert!(!MonotonicGridInvariant::holds(&game));
    }

    #[test]
    fn test_history_replaying_onto_same_cell_violates() {
        let mut game = Game::new();
        game.play(Symbol::X, 1, 1).unwrap();
        game.history.push(Move::new(Symbol::O, 1, 1));
        assert!(!MonotonicGridInvariant::holds(&game));
    }
}

//! Last-played invariant: the grid's last play matches the history.

use super::Invariant;
use crate::cell::Cell;
use crate::game::Game;

/// Invariant: the grid's last-played cell is the target of the last move
/// in history, and holds that move's symbol. Both are absent before the
/// first move.
pub struct LastPlayedInvariant;

impl Invariant<Game> for LastPlayedInvariant {
    fn holds(game: &Game) -> bool {
        let last_cell = game.grid().last_played();
        let last_move = game.history().last();

        match (last_cell, last_move) {
            (None, None) => true,
            (Some(cell), Some(action)) => {
                Some(cell.coord()) == action.coord() && cell.matches(action.symbol)
            }
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Last played cell matches the last move"
    }
}

/// Coordinates of the last played cell, for diagnostics.
pub(crate) fn describe(game: &Game) -> String {
    game.grid()
        .last_played()
        .map(Cell::coord)
        .map_or_else(|| "none".to_string(), |coord| coord.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::Coord;
    use crate::types::Symbol;

    #[test]
    fn test_fresh_game_holds() {
        assert!(LastPlayedInvariant::holds(&Game::new()));
        assert_eq!(describe(&Game::new()), "none");
    }

    #[test]
    fn test_after_move_holds() {
        let mut game = Game::new();
        game.play(Symbol::X, 2, 0).unwrap();
        assert!(LastPlayedInvariant::holds(&game));
        assert_eq!(describe(&game), "(2, 0)");
    }

    #[test]
    fn test_stale_last_played_violates() {
        let mut game = Game::new();
        game.play(Symbol::X, 2, 0).unwrap();
        game.play(Symbol::O, 0, 1).unwrap();
        game.grid.last_played = Some(Coord::at(2, 0));
        assert!(!LastPlayedInvariant::holds(&game));
    }

    #[test]
    fn test_missing_history_violates() {
        let mut game = Game::new();
        game.play(Symbol::X, 2, 0).unwrap();
        game.history.clear();
        assert!(!LastPlayedInvariant::holds(&game));
    }
}

//! Tests for the grid and cell public surface.

use tictactoe_rules::{check_winner, Cell, Coord, Grid, RulesError, Square, Symbol, WinLines};

#[test]
fn test_cell_parse_rejects_invalid_symbol() {
    assert_eq!(Cell::parse('#', 0, 0), Err(RulesError::InvalidSymbol('#')));
    assert_eq!(Cell::parse(' ', 0, 0).unwrap().occupancy(), Square::Empty);
}

#[test]
fn test_cell_matches_other_cell_by_value() {
    let grid = Grid::from_rows(["X X", "   ", "   "]).unwrap();
    let left = grid.lookup(0, 0).unwrap();
    let right = grid.lookup(0, 2).unwrap();
    let middle = grid.lookup(0, 1).unwrap();

    assert!(left.matches(right));
    assert!(!left.matches(middle));
}

#[test]
fn test_grid_place_and_lookup() {
    let mut grid = Grid::new();
    grid.place(Symbol::O, 2, 1).unwrap();

    assert_eq!(
        grid.lookup(2, 1).unwrap().occupancy(),
        Square::Occupied(Symbol::O)
    );
    assert_eq!(grid.last_played().map(Cell::coord), Coord::new(2, 1));
    assert_eq!(
        grid.place(Symbol::X, 2, 1),
        Err(RulesError::CellOccupied {
            x: 2,
            y: 1,
            occupant: Symbol::O,
        })
    );
}

#[test]
fn test_grid_place_does_not_check_turn_order() {
    let mut grid = Grid::new();
    grid.place(Symbol::O, 0, 0).unwrap();
    grid.place(Symbol::O, 0, 1).unwrap();
    grid.place(Symbol::O, 0, 2).unwrap();
    assert_eq!(grid.winning_symbol(WinLines::RowsOnly), Square::Occupied(Symbol::O));
}

#[test]
fn test_cells_unique_per_coordinate() {
    let grid = Grid::new();
    let mut coords: Vec<Coord> = grid.cells().iter().map(Cell::coord).collect();
    coords.sort();
    coords.dedup();
    assert_eq!(coords, Coord::ALL.to_vec());
}

#[test]
fn test_anti_diagonal_full_mode_only() {
    let grid = Grid::from_rows(["  O", " O ", "O  "]).unwrap();
    assert_eq!(check_winner(&grid, WinLines::Full), Square::Occupied(Symbol::O));
    assert_eq!(check_winner(&grid, WinLines::RowsOnly), Square::Empty);
}

//! Game rules for tic-tac-toe.
//!
//! Pure functions over a `Grid`. Kept apart from board storage so the win
//! scan can be swapped between the full line set and the legacy rows-only
//! set.

pub mod win;

pub use win::{check_winner, WinLines};

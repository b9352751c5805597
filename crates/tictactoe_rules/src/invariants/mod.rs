//! First-class invariants for a game.
//!
//! Invariants are logical properties that must hold after every accepted
//! move. They are checked in debug builds and can be tested independently.

use crate::game::Game;
use tracing::{instrument, warn};

pub mod alternating_turn;
pub mod last_played;
pub mod monotonic_grid;

pub use alternating_turn::AlternatingTurnInvariant;
pub use last_played::LastPlayedInvariant;
pub use monotonic_grid::MonotonicGridInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Several invariants checked together.
///
/// Implemented for tuples of invariants; every member is checked and all
/// failures are reported.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let violations: Vec<_> = [$(($inv::holds(state), $inv::description())),+]
                    .into_iter()
                    .filter(|(holds, _)| !holds)
                    .map(|(_, description)| InvariantViolation::new(description))
                    .collect();

                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);

/// Every game invariant.
pub type GameInvariants = (
    MonotonicGridInvariant,
    AlternatingTurnInvariant,
    LastPlayedInvariant,
);

/// Logs and debug-asserts any violated game invariant.
#[instrument(skip(game))]
pub fn assert_invariants(game: &Game) {
    if let Err(violations) = GameInvariants::check_all(game) {
        let last_played = last_played::describe(game);
        for violation in &violations {
            warn!(%violation, %last_played, moves = game.history().len(), "Game invariant violated");
        }
        debug_assert!(false, "Game invariants violated: {violations:?}");
    }
}

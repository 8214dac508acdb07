//! Alternating turn invariant: recorded moves alternate X, O, X, ...

use super::Invariant;
use crate::history::GameHistory;
use crate::types::Player;

/// Invariant: the moves along the timeline alternate players, X first.
///
/// Turn 0 records no move. The move recorded at index i was made by the
/// player to move at index i - 1, so it belongs to X exactly when i is
/// odd.
pub struct AlternatingTurnInvariant;

impl Invariant<GameHistory> for AlternatingTurnInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.turns().iter().enumerate().all(|(step, turn)| {
            let expected = match step {
                0 => None,
                odd if odd % 2 == 1 => Some(Player::X),
                _ => Some(Player::O),
            };
            turn.mover() == expected
        })
    }

    fn description() -> &'static str {
        "Recorded moves alternate players, X first"
    }
}

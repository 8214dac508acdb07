//! Contract-based validation for timeline moves.
//!
//! Contracts formalize the Hoare-style reasoning {P} action {Q}: named
//! preconditions gate every mutation, and the postcondition (the full
//! invariant set) is re-checked after each move in debug builds.

use crate::action::MoveError;
use crate::history::GameHistory;
use crate::invariants::{InvariantSet, TimelineInvariants};
use crate::position::Position;
use crate::rules;
use tracing::instrument;

/// A contract defines preconditions and postconditions for a state
/// transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: no winning line exists on the current board.
pub struct NoWinnerYet;

impl NoWinnerYet {
    /// Fails with [`MoveError::AlreadyWon`] once a winner exists.
    #[instrument(skip(history))]
    pub fn check(history: &GameHistory) -> Result<(), MoveError> {
        match rules::check_winner(history.current_turn().board()) {
            Some(win) => Err(MoveError::AlreadyWon(win.player())),
            None => Ok(()),
        }
    }
}

/// Precondition: the target square is empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with [`MoveError::SquareOccupied`] on a taken square.
    #[instrument(skip(history))]
    pub fn check(position: Position, history: &GameHistory) -> Result<(), MoveError> {
        if history.current_turn().board().is_empty(position) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(position))
        }
    }
}

/// Composite precondition: the full legality check for a move.
pub struct LegalMove;

impl LegalMove {
    /// Validates a move in a fixed order: the game must not be won, the
    /// index must name a square, and that square must be empty.
    ///
    /// Returns the validated [`Position`] so the caller never re-parses
    /// the index.
    #[instrument(skip(history))]
    pub fn check(history: &GameHistory, pos: usize) -> Result<Position, MoveError> {
        NoWinnerYet::check(history)?;
        let position = Position::from_index(pos).ok_or(MoveError::InvalidPosition(pos))?;
        SquareIsEmpty::check(position, history)?;
        Ok(position)
    }
}

/// Contract for move application.
///
/// Preconditions: [`LegalMove`]. Postcondition: every timeline invariant
/// still holds.
pub struct MoveContract;

impl Contract<GameHistory, usize> for MoveContract {
    fn pre(history: &GameHistory, pos: &usize) -> Result<(), MoveError> {
        LegalMove::check(history, *pos).map(|_| ())
    }

    fn post(_before: &GameHistory, after: &GameHistory) -> Result<(), MoveError> {
        TimelineInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

//! First-class move events and the crate's error surface.
//!
//! Moves are domain events, not side effects. They can be validated
//! before application, serialized for replay, and logged for debugging.

use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A move: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    player: Player,
    position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Error from a timeline operation.
///
/// Every variant is locally recoverable: the failed operation leaves the
/// timeline unchanged, and the caller may simply ignore the action.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index does not name a square on the 3x3 board.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    InvalidPosition(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// A winning line already exists on the current board.
    #[display("Game is already won by {}", _0)]
    AlreadyWon(Player),

    /// The jump target is outside the recorded history.
    #[display("Step {} is outside the recorded history ({} turns)", step, len)]
    OutOfRange {
        /// Requested step.
        step: usize,
        /// Number of recorded turns.
        len: usize,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

//! Tic-tac-toe game core with a time-traveling move history.
//!
//! The crate is a pure state machine: a presentation layer feeds it board
//! indices and step numbers, and re-derives everything it draws from the
//! timeline on each refresh. There is no I/O, no framework coupling, and
//! no cached derived state.
//!
//! # Architecture
//!
//! - **Timeline**: [`GameHistory`] owns the recorded [`Turn`]s and the
//!   cursor selecting the current one; time travel is non-destructive
//!   until the next move truncates the abandoned future.
//! - **Rules**: [`check_winner`] and [`is_draw`] are pure functions over a
//!   [`Board`].
//! - **Contracts**: preconditions gate every mutation; the invariant set
//!   is re-checked after each move in debug builds.
//! - **View**: [`GameView`] derives the square glyphs, winning highlight,
//!   status line, and ordered move list for the renderer.
//!
//! # Example
//!
//! ```
//! use tictactoe_timeline::{GameHistory, GameStatus, MoveError, Player};
//!
//! # fn main() -> Result<(), MoveError> {
//! let mut game = GameHistory::new();
//! game.apply_move(4)?; // X takes the center
//! game.apply_move(0)?; // O answers in the corner
//! assert_eq!(game.status(), GameStatus::InProgress);
//! assert_eq!(game.status_message(), "Next player: X");
//!
//! // Time travel: revisit the empty board without losing the record.
//! game.jump_to(0)?;
//! assert_eq!(game.turns().len(), 3);
//! assert_eq!(game.to_move(), Player::X);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod history;
mod invariants;
mod position;
mod rules;
mod types;
mod view;

pub use action::{Move, MoveError};
pub use contracts::{Contract, LegalMove, MoveContract, NoWinnerYet, SquareIsEmpty};
pub use history::{GameHistory, Turn};
pub use invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, SingleCellDeltaInvariant, TimelineInvariants,
};
pub use position::Position;
pub use rules::{WinningLine, check_winner, is_draw};
pub use types::{Board, GameStatus, Player, Square};
pub use view::{GameView, MoveEntry, SquareView, square_view};

/// Alias matching the mark terminology used by the display layer.
pub type Mark = Player;

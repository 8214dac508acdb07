//! Draw detection logic.

use super::win::check_winner;
use crate::types::Board;
use tracing::instrument;

/// Checks whether the board is a completed draw: full, with no winner.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && check_winner(board).is_none()
}

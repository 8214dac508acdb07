//! The game timeline: recorded turns, cursor time-travel, move application.
//!
//! `GameHistory` owns the ordered sequence of board snapshots and the
//! cursor selecting which one is current. Winner, status, and the move
//! list are derived from `(turns, cursor)` on every read; they are never
//! stored, so they can never go stale.

use crate::action::{Move, MoveError};
use crate::contracts::LegalMove;
#[cfg(debug_assertions)]
use crate::contracts::{Contract, MoveContract};
use crate::position::Position;
use crate::rules::{self, WinningLine};
use crate::types::{Board, GameStatus, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One recorded board snapshot plus the move that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    board: Board,
    played: Option<Move>,
}

impl Turn {
    /// The all-empty turn every timeline starts with.
    fn initial() -> Self {
        Self {
            board: Board::new(),
            played: None,
        }
    }

    fn recorded(board: Board, mov: Move) -> Self {
        Self {
            board,
            played: Some(mov),
        }
    }

    /// Returns the board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move that produced this turn, `None` for the initial turn.
    pub fn played(&self) -> Option<Move> {
        self.played
    }

    /// Returns the player who produced this turn, if any.
    pub fn mover(&self) -> Option<Player> {
        self.played.map(|m| m.player())
    }

    /// Returns the position played to produce this turn, if any.
    pub fn position(&self) -> Option<Position> {
        self.played.map(|m| m.position())
    }
}

#[cfg(test)]
impl Turn {
    /// Builds an arbitrary turn, bypassing move validation.
    pub(crate) fn from_parts(board: Board, played: Option<Move>) -> Self {
        Self { board, played }
    }
}

/// The move-history timeline and its cursor.
///
/// Turn 0 is always the empty board. Moving the cursor back is
/// non-destructive; the recorded future is discarded only when a new move
/// is applied from an earlier turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameHistory {
    turns: Vec<Turn>,
    cursor: usize,
    ascending: bool,
}

impl GameHistory {
    /// Creates a timeline holding the single initial empty turn.
    #[instrument]
    pub fn new() -> Self {
        Self {
            turns: vec![Turn::initial()],
            cursor: 0,
            ascending: true,
        }
    }

    /// Rebuilds a timeline by applying the given positions in order.
    #[instrument]
    pub fn replay(positions: &[Position]) -> Result<Self, MoveError> {
        let mut history = Self::new();
        for pos in positions {
            history.apply_move(pos.to_index())?;
        }
        Ok(history)
    }

    /// Returns the recorded turns, oldest first.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Returns the cursor: the index of the turn shown as current.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns whether the move list is presented oldest-first.
    pub fn ascending(&self) -> bool {
        self.ascending
    }

    /// Returns the turn the cursor points at.
    pub fn current_turn(&self) -> &Turn {
        &self.turns[self.cursor]
    }

    /// Returns the player who moves from the current turn.
    pub fn to_move(&self) -> Player {
        if self.cursor % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Applies a move at the given board index (0-8) for the player to move.
    ///
    /// A successful move discards any turns after the cursor (the future
    /// abandoned by time travel), appends the new turn, and advances the
    /// cursor to it.
    ///
    /// # Errors
    ///
    /// - [`MoveError::AlreadyWon`] if the current board has a winning line.
    /// - [`MoveError::InvalidPosition`] if `pos` is not in 0-8.
    /// - [`MoveError::SquareOccupied`] if the target square is taken.
    ///
    /// On any error the timeline is left unchanged.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, pos: usize) -> Result<(), MoveError> {
        let position = LegalMove::check(self, pos)?;
        #[cfg(debug_assertions)]
        let before = self.clone();

        let mov = Move::new(self.to_move(), position);
        let mut board = self.current_turn().board().clone();
        board.set(position, Square::Occupied(mov.player()));
        self.turns.truncate(self.cursor + 1);
        self.turns.push(Turn::recorded(board, mov));
        self.cursor = self.turns.len() - 1;

        #[cfg(debug_assertions)]
        MoveContract::post(&before, self)?;

        Ok(())
    }

    /// Moves the cursor to another recorded turn.
    ///
    /// Time travel is non-destructive: the turns after `step` stay
    /// recorded until the next successful [`GameHistory::apply_move`].
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfRange`] if `step` has no recorded turn.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), MoveError> {
        if step >= self.turns.len() {
            return Err(MoveError::OutOfRange {
                step,
                len: self.turns.len(),
            });
        }
        self.cursor = step;
        Ok(())
    }

    /// Flips the presentation order of the move list.
    ///
    /// Purely a display flag; `turns` and `cursor` are untouched.
    pub fn toggle_order(&mut self) {
        self.ascending = !self.ascending;
    }

    /// Returns the status of the current turn, derived from its board.
    pub fn status(&self) -> GameStatus {
        let board = self.current_turn().board();
        match rules::check_winner(board) {
            Some(win) => GameStatus::Won(win.player()),
            None if rules::is_draw(board) => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }

    /// Returns the winning line on the current board, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        rules::check_winner(self.current_turn().board())
    }

    /// Returns the status line for display.
    pub fn status_message(&self) -> String {
        match self.winning_line() {
            Some(win) => format!("Winner {}", win.player()),
            None => format!("Next player: {}", self.to_move()),
        }
    }

    /// Describes the turn at `step` for the move list.
    ///
    /// `None` if no such turn is recorded.
    pub fn describe_move(&self, step: usize) -> Option<String> {
        let turn = self.turns.get(step)?;
        Some(match turn.played() {
            Some(mov) => format!(
                "Go to move #{} - {} ({}, {})",
                step,
                mov.player(),
                mov.position().col() + 1,
                mov.position().row() + 1,
            ),
            None => "Go to game start".to_string(),
        })
    }

    /// Returns one description per recorded turn, in presentation order.
    ///
    /// Builds a fresh sequence on every call; toggling the order never
    /// mutates a previously returned list.
    pub fn move_descriptions(&self) -> Vec<String> {
        let forward = (0..self.turns.len()).filter_map(|step| self.describe_move(step));
        if self.ascending {
            forward.collect()
        } else {
            forward.rev().collect()
        }
    }
}

#[cfg(test)]
impl GameHistory {
    /// Builds an arbitrary timeline, bypassing move validation.
    pub(crate) fn from_parts(turns: Vec<Turn>, cursor: usize, ascending: bool) -> Self {
        Self {
            turns,
            cursor,
            ascending,
        }
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

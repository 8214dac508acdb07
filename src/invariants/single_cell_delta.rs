//! Single-cell delta invariant: each turn changes exactly the cell it
//! records.

use super::Invariant;
use crate::history::GameHistory;
use crate::types::Square;

/// Invariant: consecutive boards differ in exactly one cell.
///
/// The changed cell is the one the turn records, it was empty before the
/// move, and it holds the mover's mark afterwards. Once set, squares are
/// never overwritten.
pub struct SingleCellDeltaInvariant;

impl Invariant<GameHistory> for SingleCellDeltaInvariant {
    fn holds(history: &GameHistory) -> bool {
        for pair in history.turns().windows(2) {
            let (before, after) = (&pair[0], &pair[1]);
            let Some(mov) = after.played() else {
                return false;
            };
            if !before.board().is_empty(mov.position()) {
                return false;
            }
            if after.board().get(mov.position()) != Square::Occupied(mov.player()) {
                return false;
            }
            let diffs = before
                .board()
                .squares()
                .iter()
                .zip(after.board().squares().iter())
                .filter(|(b, a)| b != a)
                .count();
            if diffs != 1 {
                return false;
            }
        }
        true
    }

    fn description() -> &'static str {
        "Consecutive turns differ in exactly the recorded cell, previously empty"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Move;
    use crate::history::Turn;
    use crate::position::Position;
    use crate::types::{Board, Player};

    #[test]
    fn holds_for_new_timeline() {
        assert!(SingleCellDeltaInvariant::holds(&GameHistory::new()));
    }

    #[test]
    fn holds_along_a_legal_game() {
        let game = GameHistory::replay(&[
            Position::Center,
            Position::TopLeft,
            Position::BottomRight,
            Position::TopRight,
        ])
        .expect("legal sequence");
        assert!(SingleCellDeltaInvariant::holds(&game));
    }

    #[test]
    fn violated_when_a_turn_changes_two_cells() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::Center, Square::Occupied(Player::X));
        let turns = vec![
            Turn::from_parts(Board::new(), None),
            Turn::from_parts(board, Some(Move::new(Player::X, Position::TopLeft))),
        ];
        let game = GameHistory::from_parts(turns, 1, true);

        assert!(!SingleCellDeltaInvariant::holds(&game));
    }

    #[test]
    fn violated_when_a_mark_is_overwritten() {
        let mut first = Board::new();
        first.set(Position::Center, Square::Occupied(Player::X));
        let mut second = first.clone();
        second.set(Position::Center, Square::Occupied(Player::O));
        let turns = vec![
            Turn::from_parts(Board::new(), None),
            Turn::from_parts(first, Some(Move::new(Player::X, Position::Center))),
            Turn::from_parts(second, Some(Move::new(Player::O, Position::Center))),
        ];
        let game = GameHistory::from_parts(turns, 2, true);

        assert!(!SingleCellDeltaInvariant::holds(&game));
    }

    #[test]
    fn violated_when_a_turn_records_no_move() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        let turns = vec![
            Turn::from_parts(Board::new(), None),
            Turn::from_parts(board, None),
        ];
        let game = GameHistory::from_parts(turns, 1, true);

        assert!(!SingleCellDeltaInvariant::holds(&game));
    }
}

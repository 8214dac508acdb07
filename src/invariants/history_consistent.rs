//! History consistency invariant: every board matches its depth in the
//! timeline.

use super::Invariant;
use crate::history::GameHistory;
use crate::types::Square;

/// Invariant: turn i holds exactly i occupied squares, and the cursor is
/// in range.
///
/// Turn 0 is the empty board; each later turn adds one mark. Together
/// with the single-cell delta this pins every board to a replay of its
/// prefix.
pub struct HistoryConsistentInvariant;

impl Invariant<GameHistory> for HistoryConsistentInvariant {
    fn holds(history: &GameHistory) -> bool {
        if history.cursor() >= history.turns().len() {
            return false;
        }
        history.turns().iter().enumerate().all(|(step, turn)| {
            let occupied = turn
                .board()
                .squares()
                .iter()
                .filter(|s| **s != Square::Empty)
                .count();
            occupied == step
        })
    }

    fn description() -> &'static str {
        "Each turn's occupied-square count equals its index, cursor in range"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::Turn;
    use crate::position::Position;
    use crate::types::{Board, Player};

    #[test]
    fn holds_for_new_timeline() {
        assert!(HistoryConsistentInvariant::holds(&GameHistory::new()));
    }

    #[test]
    fn holds_along_a_legal_game() {
        let game = GameHistory::replay(&[
            Position::Center,
            Position::TopLeft,
            Position::BottomRight,
        ])
        .expect("legal sequence");
        assert!(HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn violated_when_the_initial_board_is_marked() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        let game = GameHistory::from_parts(vec![Turn::from_parts(board, None)], 0, true);

        assert!(!HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn violated_when_the_cursor_points_past_the_end() {
        let game =
            GameHistory::from_parts(vec![Turn::from_parts(Board::new(), None)], 3, true);

        assert!(!HistoryConsistentInvariant::holds(&game));
    }
}

//! Win detection logic.

use crate::position::Position;
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight lines that decide a game.
const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line of three matching marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningLine {
    player: Player,
    line: [Position; 3],
}

impl WinningLine {
    /// Returns the player owning the line.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the three positions forming the line.
    pub fn line(&self) -> [Position; 3] {
        self.line
    }

    /// Checks whether the given position is part of the line.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }
}

/// Checks if there is a winner on the board.
///
/// Lines are evaluated in a fixed order (rows, columns, diagonals) and the
/// first uniformly-marked line is returned, so the result is deterministic
/// even for boards no legal game produces.
#[instrument]
pub fn check_winner(board: &Board) -> Option<WinningLine> {
    for line in LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return match sq {
                Square::Occupied(player) => Some(WinningLine { player, line }),
                Square::Empty => None,
            };
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_winner_on_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn winner_on_top_row_reports_the_line() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        board.set(Position::TopRight, Square::Occupied(Player::X));

        let win = check_winner(&board).expect("top row is complete");
        assert_eq!(win.player(), Player::X);
        assert_eq!(
            win.line(),
            [Position::TopLeft, Position::TopCenter, Position::TopRight]
        );
        assert!(win.contains(Position::TopCenter));
        assert!(!win.contains(Position::Center));
    }

    #[test]
    fn winner_on_left_column() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::O));
        board.set(Position::MiddleLeft, Square::Occupied(Player::O));
        board.set(Position::BottomLeft, Square::Occupied(Player::O));

        let win = check_winner(&board).expect("left column is complete");
        assert_eq!(win.player(), Player::O);
        assert_eq!(
            win.line(),
            [
                Position::TopLeft,
                Position::MiddleLeft,
                Position::BottomLeft
            ]
        );
    }

    #[test]
    fn winner_on_diagonal() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::O));
        board.set(Position::Center, Square::Occupied(Player::O));
        board.set(Position::BottomRight, Square::Occupied(Player::O));

        let win = check_winner(&board).expect("diagonal is complete");
        assert_eq!(win.player(), Player::O);
        assert_eq!(
            win.line(),
            [Position::TopLeft, Position::Center, Position::BottomRight]
        );
    }

    #[test]
    fn no_winner_on_incomplete_line() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn first_matching_line_wins_the_tie_break() {
        // X holds both the top row and the main diagonal; the row is
        // listed first, so it is the one reported.
        let mut board = Board::new();
        for pos in [
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::Center,
            Position::BottomRight,
        ] {
            board.set(pos, Square::Occupied(Player::X));
        }

        let win = check_winner(&board).expect("board has winning lines");
        assert_eq!(
            win.line(),
            [Position::TopLeft, Position::TopCenter, Position::TopRight]
        );
    }
}

//! Pure presentation derivation.
//!
//! Everything the rendering layer consumes - square glyphs, the winning
//! highlight, the status line, the ordered move list - is recomputed from
//! the timeline on every call. Nothing here is cached and nothing touches
//! a UI framework; the caller owns drawing and event wiring.

use crate::history::GameHistory;
use crate::position::Position;
use crate::types::{Player, Square};
use tracing::instrument;

/// Display state for one square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareView {
    /// The mark to draw, if any.
    pub glyph: Option<char>,
    /// Whether the square belongs to the winning line.
    pub winning: bool,
}

/// Derives the display state for a square.
///
/// The conditionally-styled square element of the UI collapses to this
/// single branch on `winning`.
pub fn square_view(square: Square, winning: bool) -> SquareView {
    let glyph = match square {
        Square::Empty => None,
        Square::Occupied(Player::X) => Some('X'),
        Square::Occupied(Player::O) => Some('O'),
    };
    SquareView { glyph, winning }
}

/// One entry of the rendered move list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveEntry {
    /// The step to pass to [`GameHistory::jump_to`] when activated.
    pub step: usize,
    /// Text of the entry.
    pub label: String,
    /// Whether this entry is the cursor's turn.
    pub selected: bool,
}

/// Everything the rendering layer needs for one redraw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameView {
    /// The nine squares of the current board, row-major.
    pub squares: [SquareView; 9],
    /// Status line.
    pub status: String,
    /// Move list in presentation order.
    pub moves: Vec<MoveEntry>,
}

impl GameView {
    /// Derives the full view of the timeline's current turn.
    #[instrument(skip(history))]
    pub fn derive(history: &GameHistory) -> Self {
        let board = history.current_turn().board();
        let winning = history.winning_line();
        let squares = std::array::from_fn(|i| {
            let pos = Position::ALL[i];
            let highlight = winning.as_ref().is_some_and(|line| line.contains(pos));
            square_view(board.get(pos), highlight)
        });

        let mut moves: Vec<MoveEntry> = (0..history.turns().len())
            .filter_map(|step| {
                history.describe_move(step).map(|label| MoveEntry {
                    step,
                    label,
                    selected: step == history.cursor(),
                })
            })
            .collect();
        if !history.ascending() {
            moves.reverse();
        }

        Self {
            squares,
            status: history.status_message(),
            moves,
        }
    }
}

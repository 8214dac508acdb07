//! Game rules: win and draw detection.

mod draw;
mod win;

pub use draw::is_draw;
pub use win::{WinningLine, check_winner};

//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board) snapshot. Nothing here
//! mutates its input or depends on history.

mod draw;
mod outcome;
mod win;

pub use draw::is_full;
pub use outcome::{Outcome, evaluate};
pub use win::{LINES, check_winner};

//! Rewind Tic-Tac-Toe - pure game rules with a time-travelling history.
//!
//! The crate has two moving parts:
//!
//! - **Rules**: [`evaluate`] maps a [`Board`] snapshot to an [`Outcome`].
//! - **Store**: [`GameStore`] keeps every snapshot of the game so far, a cursor
//!   selecting the current one, and a display-order flag for move lists.
//!
//! A view layer forwards user intents to the store and re-derives everything it
//! shows from the store afterwards (see [`ViewSnapshot`]).
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameStore, Outcome, Player};
//!
//! let mut store = GameStore::new();
//! for cell in [0, 4, 1, 5, 2] {
//!     store.place_mark(cell);
//! }
//! assert!(matches!(store.outcome(), Outcome::Won { mark: Player::X, .. }));
//! assert_eq!(store.history().len(), 6);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod invariants;
mod position;
mod presentation;
mod rules;
mod store;
mod types;

pub use action::{IgnoreReason, Intent, IntentParseError, Transition};
pub use contracts::{Contract, LegalPlacement, PlaceMarkContract};
pub use invariants::{
    AlternatingMarks, CursorInRange, DecidedOnlyAtTail, HistoryInvariants, InitialRecordEmpty,
    Invariant, InvariantSet, InvariantViolation, MemoizedOutcome, SingleCellDelta,
};
pub use position::Position;
pub use presentation::{
    CellHighlight, MoveListEntry, Status, ViewSnapshot, cell_highlights, move_list, order_label,
    render_text,
};
pub use rules::{LINES, Outcome, check_winner, evaluate, is_full};
pub use store::{GameStore, MoveRecord};
pub use types::{Board, Player, Square};

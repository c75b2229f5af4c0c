//! Shape invariants: the history starts empty and the cursor points into it.

use super::Invariant;
use crate::{GameStore, MoveRecord};

/// Invariant: the first record is the empty board with no placed mark.
pub struct InitialRecordEmpty;

impl Invariant<GameStore> for InitialRecordEmpty {
    fn holds(store: &GameStore) -> bool {
        store.history.first() == Some(&MoveRecord::initial())
    }

    fn description() -> &'static str {
        "History starts with a single empty-board record"
    }
}

/// Invariant: `0 <= cursor < history.len()`.
pub struct CursorInRange;

impl Invariant<GameStore> for CursorInRange {
    fn holds(store: &GameStore) -> bool {
        store.cursor < store.history.len()
    }

    fn description() -> &'static str {
        "Cursor selects an existing record"
    }
}

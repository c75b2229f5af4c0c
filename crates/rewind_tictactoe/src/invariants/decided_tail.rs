//! Terminal invariant: nothing is played after a decided snapshot.

use super::Invariant;
use crate::GameStore;

/// Invariant: only the last record may be won or drawn.
pub struct DecidedOnlyAtTail;

impl Invariant<GameStore> for DecidedOnlyAtTail {
    fn holds(store: &GameStore) -> bool {
        match store.history.split_last() {
            Some((_, earlier)) => earlier.iter().all(|record| !record.outcome.is_decided()),
            None => true,
        }
    }

    fn description() -> &'static str {
        "Only the final record may be decided"
    }
}

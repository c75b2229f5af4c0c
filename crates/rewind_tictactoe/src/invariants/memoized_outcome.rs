//! Memoization invariant: stored outcomes match a fresh evaluation.

use super::Invariant;
use crate::{GameStore, evaluate};

/// Invariant: every record's outcome equals `evaluate(record.squares)`.
pub struct MemoizedOutcome;

impl Invariant<GameStore> for MemoizedOutcome {
    fn holds(store: &GameStore) -> bool {
        store
            .history
            .iter()
            .all(|record| record.outcome == evaluate(&record.squares))
    }

    fn description() -> &'static str {
        "Memoized outcomes match their snapshots"
    }
}

//! First-class invariants for the move history.
//!
//! Invariants are logical properties that must hold for every reachable
//! [`GameStore`](crate::GameStore). They are checked after each placement in
//! debug builds and can be tested independently.

mod alternating_marks;
mod decided_tail;
mod initial_record;
mod memoized_outcome;
mod single_cell_delta;

pub use alternating_marks::AlternatingMarks;
pub use decided_tail::DecidedOnlyAtTail;
pub use initial_record::{CursorInRange, InitialRecordEmpty};
pub use memoized_outcome::MemoizedOutcome;
pub use single_cell_delta::SingleCellDelta;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of up to six invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);
impl_invariant_set!(I1, I2, I3, I4, I5);
impl_invariant_set!(I1, I2, I3, I4, I5, I6);

/// Every history invariant as a composable set.
pub type HistoryInvariants = (
    InitialRecordEmpty,
    CursorInRange,
    SingleCellDelta,
    AlternatingMarks,
    MemoizedOutcome,
    DecidedOnlyAtTail,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameStore, MoveRecord};

    #[test]
    fn test_invariant_set_holds_for_new_store() {
        assert!(HistoryInvariants::check_all(&GameStore::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_time_travel() {
        let mut store = GameStore::new();
        for cell in [0, 4, 8, 2] {
            store.place_mark(cell);
        }
        store.jump_to(2);
        store.place_mark(6);
        store.jump_to(0);
        assert!(HistoryInvariants::check_all(&store).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_each_violation() {
        let mut store = GameStore::new();
        store.history.clear();
        store.history.push(MoveRecord::placed(
            crate::Board::new().with_mark(crate::Position::Center, crate::Player::O),
            crate::Position::Center,
        ));
        store.cursor = 5;

        let violations = HistoryInvariants::check_all(&store).unwrap_err();
        let descriptions: Vec<_> = violations.iter().map(|v| v.description.as_str()).collect();
        assert!(descriptions.contains(&InitialRecordEmpty::description()));
        assert!(descriptions.contains(&CursorInRange::description()));
    }

    #[test]
    fn test_two_invariants_as_set() {
        type Pair = (InitialRecordEmpty, CursorInRange);
        assert!(Pair::check_all(&GameStore::new()).is_ok());
    }
}

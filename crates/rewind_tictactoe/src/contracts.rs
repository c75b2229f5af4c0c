//! Contract-based validation for store transitions.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P(state, action)} action {Q(before, after)}`. A failed precondition is
//! not an error here, it is the reason an intent gets absorbed.

use crate::action::IgnoreReason;
use crate::invariants::{HistoryInvariants, InvariantSet, InvariantViolation};
use crate::{GameStore, Position};
use tracing::instrument;

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), IgnoreReason>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Precondition: the index names a square on the board.
pub struct CellInRange;

impl CellInRange {
    /// Resolves the index to a position.
    pub fn check(index: usize) -> Result<Position, IgnoreReason> {
        Position::from_index(index).ok_or(IgnoreReason::CellOutOfRange(index))
    }
}

/// Precondition: the snapshot at the cursor is still ongoing.
pub struct GameUndecided;

impl GameUndecided {
    /// Fails once the current snapshot is won or drawn.
    pub fn check(store: &GameStore) -> Result<(), IgnoreReason> {
        if store.outcome().is_decided() {
            Err(IgnoreReason::GameDecided)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the square is empty in the current snapshot.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails if the square already holds a mark.
    pub fn check(store: &GameStore, position: Position) -> Result<(), IgnoreReason> {
        if store.board().is_empty(position) {
            Ok(())
        } else {
            Err(IgnoreReason::SquareOccupied(position))
        }
    }
}

/// Composite precondition for a placement.
pub struct LegalPlacement;

impl LegalPlacement {
    /// Validates all preconditions and returns the target position.
    #[instrument(skip(store))]
    pub fn check(store: &GameStore, index: usize) -> Result<Position, IgnoreReason> {
        let position = CellInRange::check(index)?;
        GameUndecided::check(store)?;
        SquareIsEmpty::check(store, position)?;
        Ok(position)
    }
}

/// Contract for `place_mark`.
///
/// Preconditions:
/// - index is on the board
/// - current snapshot is undecided
/// - square is empty
///
/// Postconditions:
/// - every [`HistoryInvariants`] member holds
/// - exactly one record was appended after the old cursor
pub struct PlaceMarkContract;

impl Contract<GameStore, usize> for PlaceMarkContract {
    fn pre(store: &GameStore, index: &usize) -> Result<(), IgnoreReason> {
        LegalPlacement::check(store, *index).map(|_| ())
    }

    fn post(before: &GameStore, after: &GameStore) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = HistoryInvariants::check_all(after).err().unwrap_or_default();

        if after.history.len() != before.cursor + 2 || after.cursor != before.cursor + 1 {
            violations.push(InvariantViolation::new(
                "Placement appends exactly one record after the old cursor",
            ));
        }
        if after.history.get(..=before.cursor) != before.history.get(..=before.cursor) {
            violations.push(InvariantViolation::new(
                "Placement keeps records up to the old cursor",
            ));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MoveRecord, Player, Square};

    #[test]
    fn test_precondition_empty_square() {
        let store = GameStore::new();
        assert!(PlaceMarkContract::pre(&store, &4).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let mut store = GameStore::new();
        store.place_mark(4);
        assert_eq!(
            PlaceMarkContract::pre(&store, &4),
            Err(IgnoreReason::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_range_checked_first() {
        let mut store = GameStore::new();
        for cell in [0, 3, 1, 4, 2] {
            store.place_mark(cell);
        }
        assert_eq!(
            LegalPlacement::check(&store, 12),
            Err(IgnoreReason::CellOutOfRange(12))
        );
        assert_eq!(
            LegalPlacement::check(&store, 0),
            Err(IgnoreReason::GameDecided)
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = GameStore::new();
        let mut after = before.clone();
        after.place_mark(4);
        assert!(PlaceMarkContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = GameStore::new();
        let mut after = before.clone();
        after.place_mark(4);

        // Overwrite X's mark with O behind the store's back.
        let corrupted = after.history[1].squares.with_mark(Position::Center, Player::O);
        after.history[1].squares = corrupted;
        assert_eq!(after.board().get(Position::Center), Square::Occupied(Player::O));

        assert!(PlaceMarkContract::post(&before, &after).is_err());
    }

    #[test]
    fn test_postcondition_detects_missing_append() {
        let before = GameStore::new();
        let mut after = before.clone();
        after.history.push(MoveRecord::initial());
        after.history.pop();
        assert!(PlaceMarkContract::post(&before, &after).is_err());
    }
}

//! Alternating turn invariant: X, O, X, O, ...

use super::Invariant;
use crate::{GameStore, Player, Square};

/// Invariant: the mark placed in record `i` belongs to turn `i - 1`.
///
/// Record 1 holds an X, record 2 an O, and so on.
pub struct AlternatingMarks;

impl Invariant<GameStore> for AlternatingMarks {
    fn holds(store: &GameStore) -> bool {
        store.history.iter().enumerate().skip(1).all(|(step, record)| {
            let expected = Square::Occupied(Player::for_step(step - 1));
            record
                .position
                .is_some_and(|pos| record.squares.get(pos) == expected)
        })
    }

    fn description() -> &'static str {
        "Players alternate marks (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MoveRecord, Position};

    #[test]
    fn test_alternating_sequence_holds() {
        let mut store = GameStore::new();
        for cell in [0, 4, 8] {
            store.place_mark(cell);
        }
        assert!(AlternatingMarks::holds(&store));
    }

    #[test]
    fn test_same_mark_twice_violates() {
        let mut store = GameStore::new();
        store.place_mark(0);
        let board = store.board().with_mark(Position::Center, Player::X);
        store.history.push(MoveRecord::placed(board, Position::Center));
        assert!(!AlternatingMarks::holds(&store));
    }

    #[test]
    fn test_missing_position_violates() {
        let mut store = GameStore::new();
        store.history.push(MoveRecord::initial());
        assert!(!AlternatingMarks::holds(&store));
    }
}

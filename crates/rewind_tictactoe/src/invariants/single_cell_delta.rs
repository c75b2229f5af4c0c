//! Monotonic history invariant: each record fills exactly one more square.

use super::Invariant;
use crate::{GameStore, Position, Square};

/// Invariant: consecutive snapshots differ in exactly one square.
///
/// That square was empty before, is occupied after, and is the record's
/// `position`. Earlier squares are never overwritten.
pub struct SingleCellDelta;

impl Invariant<GameStore> for SingleCellDelta {
    fn holds(store: &GameStore) -> bool {
        store.history.windows(2).all(|pair| {
            let (prev, next) = (&pair[0], &pair[1]);
            let changed: Vec<Position> = Position::ALL
                .into_iter()
                .filter(|pos| prev.squares.get(*pos) != next.squares.get(*pos))
                .collect();

            match changed.as_slice() {
                [pos] => {
                    prev.squares.get(*pos) == Square::Empty
                        && next.squares.get(*pos) != Square::Empty
                        && next.position == Some(*pos)
                }
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each record fills exactly one previously empty square"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MoveRecord, Player};

    #[test]
    fn test_played_game_holds() {
        let mut store = GameStore::new();
        for cell in [4, 0, 8, 2, 6] {
            store.place_mark(cell);
        }
        assert!(SingleCellDelta::holds(&store));
    }

    #[test]
    fn test_two_cells_at_once_violates() {
        let mut store = GameStore::new();
        let board = store
            .board()
            .with_mark(Position::TopLeft, Player::X)
            .with_mark(Position::TopRight, Player::O);
        store.history.push(MoveRecord::placed(board, Position::TopLeft));
        assert!(!SingleCellDelta::holds(&store));
    }

    #[test]
    fn test_overwrite_violates() {
        let mut store = GameStore::new();
        store.place_mark(4);
        let overwritten = store.board().with_mark(Position::Center, Player::O);
        store.history.push(MoveRecord::placed(overwritten, Position::Center));
        assert!(!SingleCellDelta::holds(&store));
    }

    #[test]
    fn test_wrong_position_label_violates() {
        let mut store = GameStore::new();
        let board = store.board().with_mark(Position::Center, Player::X);
        store.history.push(MoveRecord::placed(board, Position::TopLeft));
        assert!(!SingleCellDelta::holds(&store));
    }
}

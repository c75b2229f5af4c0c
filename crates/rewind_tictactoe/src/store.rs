//! Move history store with time-travel.
//!
//! The store holds every board snapshot of the current line of play, a cursor
//! choosing which one is shown, and a display-order flag for move lists.
//! Snapshots are never edited; placing a mark after jumping back discards the
//! abandoned future and appends a fresh record.

use crate::action::{IgnoreReason, Intent, Transition};
use crate::contracts::LegalPlacement;
use crate::{Board, Outcome, Player, Position, evaluate};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

#[cfg(debug_assertions)]
use crate::contracts::{Contract, PlaceMarkContract};

/// One entry of the history: a snapshot and how it came to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub(crate) squares: Board,
    pub(crate) position: Option<Position>,
    pub(crate) outcome: Outcome,
}

impl MoveRecord {
    /// The empty-board record every history starts with.
    pub fn initial() -> Self {
        Self {
            squares: Board::new(),
            position: None,
            outcome: Outcome::Ongoing,
        }
    }

    /// Records `squares` as produced by a mark at `position`, memoizing its outcome.
    pub fn placed(squares: Board, position: Position) -> Self {
        Self {
            squares,
            position: Some(position),
            outcome: evaluate(&squares),
        }
    }

    /// The board snapshot.
    pub fn squares(&self) -> &Board {
        &self.squares
    }

    /// Where the mark was placed; `None` for the initial record.
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// `(row, col)` of the placed mark; `None` for the initial record.
    pub fn location(&self) -> Option<(usize, usize)> {
        self.position.map(|pos| (pos.row(), pos.col()))
    }

    /// Memoized outcome of this snapshot.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}

/// The single owned state of a game session.
///
/// Invariants (checked after each placement in debug builds, see
/// [`HistoryInvariants`](crate::HistoryInvariants)):
/// - `history` is never empty and starts with [`MoveRecord::initial`]
/// - `cursor < history.len()`
/// - consecutive records differ in exactly one newly filled square
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStore {
    pub(crate) history: Vec<MoveRecord>,
    pub(crate) cursor: usize,
    pub(crate) order_reversed: bool,
}

impl GameStore {
    /// Creates a fresh game, move list shown oldest-first.
    #[instrument]
    pub fn new() -> Self {
        Self::with_order(false)
    }

    /// Creates a fresh game with the given move list order.
    #[instrument]
    pub fn with_order(order_reversed: bool) -> Self {
        Self {
            history: vec![MoveRecord::initial()],
            cursor: 0,
            order_reversed,
        }
    }

    /// Places the next mark at `index` (0-8).
    ///
    /// Ignored when the index is off the board, the current snapshot is already
    /// decided, or the square is taken. Otherwise the history beyond the cursor
    /// is discarded and the new snapshot appended and selected.
    #[instrument(skip(self), fields(cursor = self.cursor, len = self.history.len()))]
    pub fn place_mark(&mut self, index: usize) -> Transition {
        let position = match LegalPlacement::check(self, index) {
            Ok(position) => position,
            Err(reason) => {
                debug!(%reason, "Placement ignored");
                return Transition::Ignored(reason);
            }
        };

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mark = self.next_mark();
        self.history.truncate(self.cursor + 1);
        let squares = self.current().squares.with_mark(position, mark);
        self.history.push(MoveRecord::placed(squares, position));
        self.cursor = self.history.len() - 1;

        #[cfg(debug_assertions)]
        if let Err(violations) = PlaceMarkContract::post(&before, self) {
            tracing::warn!(?violations, "History invariants violated after placement");
        }

        debug!(
            %mark,
            %position,
            step = self.cursor,
            outcome = ?self.outcome(),
            "Mark placed"
        );
        Transition::Applied
    }

    /// Moves the cursor to `step`, leaving the history untouched.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, step: usize) -> Transition {
        let len = self.history.len();
        if step >= len {
            let reason = IgnoreReason::StepOutOfRange { step, len };
            debug!(%reason, "Jump ignored");
            return Transition::Ignored(reason);
        }
        self.cursor = step;
        debug!(step, next = %self.next_mark(), "Cursor moved");
        Transition::Applied
    }

    /// Replaces the history with a single empty board.
    ///
    /// The move list order is a view preference and survives the reset.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Transition {
        self.history = vec![MoveRecord::initial()];
        self.cursor = 0;
        info!("Game reset");
        Transition::Applied
    }

    /// Flips the move list display order.
    #[instrument(skip(self))]
    pub fn toggle_order(&mut self) -> Transition {
        self.order_reversed = !self.order_reversed;
        debug!(order_reversed = self.order_reversed, "Move order toggled");
        Transition::Applied
    }

    /// Routes an intent to the matching operation.
    pub fn apply(&mut self, intent: Intent) -> Transition {
        match intent {
            Intent::PlaceMark(index) => self.place_mark(index),
            Intent::JumpTo(step) => self.jump_to(step),
            Intent::Reset => self.reset(),
            Intent::ToggleOrder => self.toggle_order(),
        }
    }

    /// All records, oldest first.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Index of the current record.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether move lists are shown newest-first.
    pub fn order_reversed(&self) -> bool {
        self.order_reversed
    }

    /// The record at the cursor.
    pub fn current(&self) -> &MoveRecord {
        &self.history[self.cursor]
    }

    /// The board at the cursor.
    pub fn board(&self) -> &Board {
        &self.current().squares
    }

    /// Outcome of the board at the cursor.
    pub fn outcome(&self) -> Outcome {
        self.current().outcome
    }

    /// The mark that would be placed next from the cursor.
    pub fn next_mark(&self) -> Player {
        Player::for_step(self.cursor)
    }
}

impl Default for GameStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn play(cells: &[usize]) -> GameStore {
        let mut store = GameStore::new();
        for &cell in cells {
            assert!(store.place_mark(cell).is_applied(), "cell {} rejected", cell);
        }
        store
    }

    #[test]
    fn test_new_store_has_one_empty_record() {
        let store = GameStore::new();
        assert_eq!(store.history().len(), 1);
        assert_eq!(store.cursor(), 0);
        assert_eq!(store.current().position(), None);
        assert_eq!(store.board(), &Board::new());
        assert_eq!(store.next_mark(), Player::X);
    }

    #[test]
    fn test_place_mark_appends_and_selects() {
        let store = play(&[4]);
        assert_eq!(store.history().len(), 2);
        assert_eq!(store.cursor(), 1);
        assert_eq!(store.board().get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(store.current().location(), Some((1, 1)));
        assert_eq!(store.next_mark(), Player::O);
    }

    #[test]
    fn test_occupied_square_is_ignored() {
        let mut store = play(&[4]);
        let before = store.clone();
        assert_eq!(
            store.place_mark(4),
            Transition::Ignored(IgnoreReason::SquareOccupied(Position::Center))
        );
        assert_eq!(store, before);
    }

    #[test]
    fn test_out_of_range_cell_is_ignored() {
        let mut store = GameStore::new();
        assert_eq!(
            store.place_mark(9),
            Transition::Ignored(IgnoreReason::CellOutOfRange(9))
        );
        assert_eq!(store, GameStore::new());
    }

    #[test]
    fn test_out_of_range_jump_is_ignored() {
        let mut store = play(&[0, 1]);
        let before = store.clone();
        assert_eq!(
            store.jump_to(3),
            Transition::Ignored(IgnoreReason::StepOutOfRange { step: 3, len: 3 })
        );
        assert_eq!(store, before);
    }

    #[test]
    fn test_jump_keeps_history_and_derives_parity() {
        let mut store = play(&[0, 1, 2]);
        assert!(store.jump_to(1).is_applied());
        assert_eq!(store.history().len(), 4);
        assert_eq!(store.cursor(), 1);
        assert_eq!(store.next_mark(), Player::O);
        assert_eq!(store.board().occupied_count(), 1);
    }

    #[test]
    fn test_place_after_jump_truncates_future() {
        let mut store = play(&[0, 1, 2, 3]);
        store.jump_to(1);
        assert!(store.place_mark(8).is_applied());
        assert_eq!(store.history().len(), 3);
        assert_eq!(store.cursor(), 2);
        assert_eq!(store.board().get(Position::BottomRight), Square::Occupied(Player::O));
        assert!(store.board().is_empty(Position::TopCenter));
    }

    #[test]
    fn test_decided_game_rejects_then_reopens_after_jump() {
        let mut store = play(&[0, 4, 1, 5, 2]);
        assert_eq!(
            store.place_mark(8),
            Transition::Ignored(IgnoreReason::GameDecided)
        );

        store.jump_to(4);
        assert!(store.place_mark(8).is_applied());
        assert_eq!(store.history().len(), 6);
        assert_eq!(store.outcome(), Outcome::Ongoing);
    }

    #[test]
    fn test_reset_keeps_order_flag() {
        let mut store = play(&[0, 4]);
        store.toggle_order();
        store.reset();
        assert_eq!(store.history(), &[MoveRecord::initial()]);
        assert_eq!(store.cursor(), 0);
        assert!(store.order_reversed());
    }

    #[test]
    fn test_toggle_order_does_not_touch_history() {
        let mut store = play(&[0, 4]);
        let history = store.history().to_vec();
        store.toggle_order();
        store.toggle_order();
        assert!(!store.order_reversed());
        assert_eq!(store.history(), history.as_slice());
        assert_eq!(store.cursor(), 2);
    }

    #[test]
    fn test_apply_routes_intents() {
        let mut store = GameStore::new();
        store.apply(Intent::PlaceMark(0));
        store.apply(Intent::PlaceMark(4));
        store.apply(Intent::JumpTo(1));
        store.apply(Intent::ToggleOrder);
        assert_eq!(store.cursor(), 1);
        assert!(store.order_reversed());
        store.apply(Intent::Reset);
        assert_eq!(store.history().len(), 1);
    }
}

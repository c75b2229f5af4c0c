//! Presentation model derived from a [`GameStore`].
//!
//! Views never keep their own copy of game state; they call these functions
//! after every intent and draw whatever comes back.

use crate::{GameStore, Outcome, Player, Square};
use serde::Serialize;
use tracing::instrument;

/// Status line shown above the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum Status {
    /// The current snapshot is won.
    #[display("Winner: {_0}")]
    Winner(Player),
    /// The current snapshot is drawn.
    #[display("Draw")]
    Draw,
    /// The game goes on with this mark to play.
    #[display("Next player: {_0}")]
    NextPlayer(Player),
}

impl Status {
    /// Derives the status at the store's cursor.
    pub fn of(store: &GameStore) -> Self {
        match store.outcome() {
            Outcome::Won { mark, .. } => Status::Winner(mark),
            Outcome::Draw => Status::Draw,
            Outcome::Ongoing => Status::NextPlayer(store.next_mark()),
        }
    }
}

/// How a board cell should be emphasised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CellHighlight {
    /// Plain cell.
    Normal,
    /// Part of the winning line.
    Winning,
    /// Any cell of a drawn board.
    Draw,
}

/// Highlights for all 9 cells of an outcome.
pub fn cell_highlights(outcome: &Outcome) -> [CellHighlight; 9] {
    match outcome {
        Outcome::Ongoing => [CellHighlight::Normal; 9],
        Outcome::Draw => [CellHighlight::Draw; 9],
        Outcome::Won { line, .. } => {
            let mut cells = [CellHighlight::Normal; 9];
            for pos in line {
                cells[pos.to_index()] = CellHighlight::Winning;
            }
            cells
        }
    }
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, derive_new::new)]
pub struct MoveListEntry {
    /// History step this entry jumps to.
    pub step: usize,
    /// Mark named by the label: the one whose turn follows this step.
    /// `None` for game start.
    pub mark: Option<Player>,
    /// `(row, col)` of that mark; `None` for game start.
    pub location: Option<(usize, usize)>,
    /// Whether the cursor is on this step.
    pub is_current: bool,
}

impl MoveListEntry {
    /// Button text, e.g. `Go to move #3 for O at (0,2)`.
    pub fn label(&self) -> String {
        match (self.mark, self.location) {
            (Some(mark), Some((row, col))) => {
                format!("Go to move #{} for {} at ({},{})", self.step, mark, row, col)
            }
            _ => "Go to game start".to_string(),
        }
    }
}

impl std::fmt::Display for MoveListEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Builds the move list in display order.
///
/// Oldest-first normally, newest-first when the store's order is reversed.
#[instrument(skip(store), fields(len = store.history().len()))]
pub fn move_list(store: &GameStore) -> Vec<MoveListEntry> {
    let mut entries: Vec<MoveListEntry> = store
        .history()
        .iter()
        .enumerate()
        .map(|(step, record)| {
            let mark = record.position().map(|_| Player::for_step(step));
            MoveListEntry::new(step, mark, record.location(), step == store.cursor())
        })
        .collect();

    if store.order_reversed() {
        entries.reverse();
    }
    entries
}

/// Label of the order toggle button.
pub fn order_label(order_reversed: bool) -> &'static str {
    if order_reversed { "Descending" } else { "Ascending" }
}

/// Everything a view needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewSnapshot {
    /// Marks in row-major order; `None` for empty cells.
    pub cells: [Option<Player>; 9],
    /// Per-cell emphasis.
    pub highlights: [CellHighlight; 9],
    /// Status line text.
    pub status: String,
    /// Winning line indices, if any.
    pub winning_line: Option<[usize; 3]>,
    /// Move list in display order.
    pub moves: Vec<MoveListEntry>,
    /// History step shown.
    pub cursor: usize,
    /// Number of history records.
    pub history_len: usize,
    /// Whether the move list is newest-first.
    pub order_reversed: bool,
    /// Order toggle label.
    pub order_label: &'static str,
}

impl ViewSnapshot {
    /// Captures the store's current state for rendering.
    #[instrument(skip(store))]
    pub fn capture(store: &GameStore) -> Self {
        let outcome = store.outcome();
        Self {
            cells: store.board().squares().map(Square::player),
            highlights: cell_highlights(&outcome),
            status: Status::of(store).to_string(),
            winning_line: outcome.line_indices(),
            moves: move_list(store),
            cursor: store.cursor(),
            history_len: store.history().len(),
            order_reversed: store.order_reversed(),
            order_label: order_label(store.order_reversed()),
        }
    }

    /// Serializes the snapshot as pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Plain-text rendering: board, status, order label and move list.
///
/// The current move is prefixed with `>`.
pub fn render_text(store: &GameStore) -> String {
    let mut out = String::new();
    out.push_str(&store.board().display());
    out.push_str("\n\n");
    out.push_str(&Status::of(store).to_string());
    out.push('\n');
    out.push_str(&format!("Order: {}\n", order_label(store.order_reversed())));
    for entry in move_list(store) {
        let marker = if entry.is_current { '>' } else { ' ' };
        out.push_str(&format!("{} {}\n", marker, entry.label()));
    }
    out
}

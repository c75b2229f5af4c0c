//! First-class intents for driving a [`GameStore`](crate::GameStore).
//!
//! Intents are what a view forwards on user input. Applying one never fails:
//! an intent the store cannot honour is absorbed and reported as
//! [`Transition::Ignored`].

use crate::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A user intent forwarded by the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Intent {
    /// Place the next mark at a board index (0-8).
    #[display("place {_0}")]
    PlaceMark(usize),
    /// Move the cursor to a history step.
    #[display("jump {_0}")]
    JumpTo(usize),
    /// Start over with an empty board.
    #[display("reset")]
    Reset,
    /// Flip the move list display order.
    #[display("toggle order")]
    ToggleOrder,
}

/// Parses `N`, a position label, `jump:N`, `reset` or `toggle`.
///
/// Numbers are not range-checked here; the store absorbs out-of-range ones.
impl FromStr for Intent {
    type Err = IntentParseError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let lowered = s.to_ascii_lowercase();
        match lowered.as_str() {
            "reset" => return Ok(Intent::Reset),
            "toggle" | "order" => return Ok(Intent::ToggleOrder),
            _ => {}
        }

        if let Some(step) = lowered.strip_prefix("jump:") {
            return step
                .trim()
                .parse::<usize>()
                .map(Intent::JumpTo)
                .map_err(|e| IntentParseError::new(format!("bad jump step '{}': {}", step, e)));
        }

        if let Ok(index) = s.parse::<usize>() {
            return Ok(Intent::PlaceMark(index));
        }

        Position::from_label(s)
            .map(|pos| Intent::PlaceMark(pos.to_index()))
            .ok_or_else(|| IntentParseError::new(format!("unrecognised intent '{}'", s)))
    }
}

/// Why the store declined an intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum IgnoreReason {
    /// The cell index is not on the board.
    #[display("Cell {_0} is off the board")]
    CellOutOfRange(usize),
    /// The square already holds a mark.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(Position),
    /// The snapshot at the cursor is already won or drawn.
    #[display("Game is already decided")]
    GameDecided,
    /// The history step does not exist.
    #[display("Step {step} is outside history of length {len}")]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time.
        len: usize,
    },
}

/// What applying an intent did to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The store changed (or was already in the requested state).
    Applied,
    /// The store is exactly as it was.
    Ignored(IgnoreReason),
}

impl Transition {
    /// True if the intent was honoured.
    pub fn is_applied(&self) -> bool {
        matches!(self, Transition::Applied)
    }
}

/// Error parsing an [`Intent`] from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Intent parse error: {} at {}:{}", message, file, line)]
pub struct IntentParseError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl IntentParseError {
    /// Creates a new parse error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

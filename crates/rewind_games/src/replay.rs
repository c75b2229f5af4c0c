//! Non-interactive replay: feed intents to a fresh store and print the view.

use crate::cli::OutputFormat;
use anyhow::{Context, Result};
use rewind_tictactoe::{GameStore, Intent, ViewSnapshot, render_text};
use tracing::{debug, info, instrument};

/// Applies `intents` in order to a new store.
///
/// Intents the store declines are skipped, exactly as an interactive view
/// would skip them.
#[instrument(skip(intents), fields(count = intents.len()))]
pub fn replay(intents: &[Intent], descending: bool) -> GameStore {
    let mut store = GameStore::with_order(descending);
    for intent in intents {
        let transition = store.apply(*intent);
        debug!(%intent, ?transition, "Replayed intent");
    }
    info!(
        history_len = store.history().len(),
        cursor = store.cursor(),
        "Replay finished"
    );
    store
}

/// Renders the store in the requested format.
pub fn render(store: &GameStore, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(store)),
        OutputFormat::Json => ViewSnapshot::capture(store)
            .to_json()
            .context("Failed to serialize view snapshot"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_skips_ignored_intents() {
        let intents = [
            Intent::PlaceMark(0),
            Intent::PlaceMark(0),
            Intent::PlaceMark(12),
            Intent::PlaceMark(4),
            Intent::JumpTo(7),
        ];
        let store = replay(&intents, false);
        assert_eq!(store.history().len(), 3);
        assert_eq!(store.cursor(), 2);
    }

    #[test]
    fn test_render_text_win() {
        let intents: Vec<Intent> = [0, 4, 1, 5, 2].map(Intent::PlaceMark).to_vec();
        let store = replay(&intents, true);
        let text = render(&store, OutputFormat::Text).unwrap();
        assert!(text.starts_with("X|X|X"));
        assert!(text.contains("Winner: X"));
        assert!(text.contains("Order: Descending"));
        let first_move = text.find("Go to move #5 for O at (0,2)").unwrap();
        let start = text.find("Go to game start").unwrap();
        assert!(first_move < start);
    }

    #[test]
    fn test_render_json() {
        let store = replay(&[Intent::PlaceMark(4)], false);
        let json = render(&store, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["status"], "Next player: O");
        assert_eq!(value["cells"][4], "X");
        assert_eq!(value["cursor"], 1);
    }
}

//! Application state and key handling.

use super::input::{digit_cell, move_cursor};
use crossterm::event::KeyCode;
use rewind_tictactoe::{GameStore, Intent, Position, Transition};
use tracing::{debug, info};

/// Main application state: the game store plus view-only selection state.
#[derive(Debug)]
pub struct App {
    store: GameStore,
    board_cursor: Position,
    should_quit: bool,
}

impl App {
    /// Creates a new application around a fresh game.
    pub fn new(descending: bool) -> Self {
        Self {
            store: GameStore::with_order(descending),
            board_cursor: Position::Center,
            should_quit: false,
        }
    }

    /// The game store.
    pub fn store(&self) -> &GameStore {
        &self.store
    }

    /// Square highlighted by the arrow keys.
    pub fn board_cursor(&self) -> Position {
        self.board_cursor
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        let intent = match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("Quit requested");
                self.should_quit = true;
                return;
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                self.board_cursor = move_cursor(self.board_cursor, key);
                return;
            }
            KeyCode::Enter | KeyCode::Char(' ') => Intent::PlaceMark(self.board_cursor.to_index()),
            KeyCode::Char(c) if c.is_ascii_digit() => match digit_cell(c) {
                Some(cell) => Intent::PlaceMark(cell),
                None => return,
            },
            KeyCode::Char('[') | KeyCode::PageUp => match self.store.cursor().checked_sub(1) {
                Some(step) => Intent::JumpTo(step),
                None => return,
            },
            KeyCode::Char(']') | KeyCode::PageDown => Intent::JumpTo(self.store.cursor() + 1),
            KeyCode::Home => Intent::JumpTo(0),
            KeyCode::End => Intent::JumpTo(self.store.history().len() - 1),
            KeyCode::Char('r') => Intent::Reset,
            KeyCode::Char('o') => Intent::ToggleOrder,
            _ => return,
        };

        if let Transition::Ignored(reason) = self.store.apply(intent) {
            debug!(%intent, %reason, "Intent absorbed");
        }
    }
}

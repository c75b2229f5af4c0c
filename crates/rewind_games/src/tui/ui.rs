//! Stateless UI rendering; everything is re-derived from the store each frame.

use super::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use rewind_tictactoe::{
    CellHighlight, Player, Position, Square, Status, cell_highlights, move_list, order_label,
};

const HELP: &str =
    "Arrows+Enter or 1-9: place | [ ]: step history | Home/End | O: order | R: reset | Q: quit";

/// Draws the main UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Board and moves
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    draw_game(frame, body[0], app);
    draw_moves(frame, body[1], app);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[2]);
}

fn draw_game(frame: &mut Frame, area: Rect, app: &App) {
    let store = app.store();
    let highlights = cell_highlights(&store.outcome());
    let board = store.board();

    let mut lines = Vec::with_capacity(8);
    for row in 0..3 {
        let mut spans = Vec::with_capacity(5);
        for col in 0..3 {
            if let Some(pos) = Position::from_row_col(row, col) {
                spans.push(cell_span(
                    board.get(pos),
                    highlights[pos.to_index()],
                    pos == app.board_cursor(),
                ));
            }
            if col < 2 {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
        }
        lines.push(Line::from(spans));
        if row < 2 {
            lines.push(Line::styled("───┼───┼───", Style::default().fg(Color::DarkGray)));
        }
    }

    let status = Status::of(store);
    let status_style = match status {
        Status::Winner(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Status::Draw => Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        Status::NextPlayer(_) => Style::default().fg(Color::Yellow),
    };
    lines.push(Line::default());
    lines.push(Line::styled(status.to_string(), status_style));

    let game = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Board"));
    frame.render_widget(game, area);
}

fn cell_span(square: Square, highlight: CellHighlight, selected: bool) -> Span<'static> {
    let (symbol, mut style) = match square {
        Square::Empty => ("   ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (
            " X ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            " O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    style = match highlight {
        CellHighlight::Normal => style,
        CellHighlight::Winning => style.bg(Color::Green),
        CellHighlight::Draw => style.bg(Color::Magenta),
    };

    if selected {
        style = style.bg(Color::White).fg(Color::Black);
    }

    Span::styled(symbol, style)
}

fn draw_moves(frame: &mut Frame, area: Rect, app: &App) {
    let store = app.store();
    let items: Vec<ListItem> = move_list(store)
        .into_iter()
        .map(|entry| {
            let style = if entry.is_current {
                Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default()
            };
            ListItem::new(Line::styled(format!("{}. {}", entry.step, entry.label()), style))
        })
        .collect();

    let title = format!("Moves ({})", order_label(store.order_reversed()));
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_fresh_screen() {
        let text = screen_text(&App::new(false));
        assert!(text.contains("Next player: X"));
        assert!(text.contains("Go to game start"));
        assert!(text.contains("Moves (Ascending)"));
    }

    #[test]
    fn test_screen_after_win() {
        let mut app = App::new(true);
        for c in "15263".chars() {
            app.handle_key(KeyCode::Char(c));
        }
        let text = screen_text(&app);
        assert!(text.contains("Winner: X"));
        assert!(text.contains("Go to move #5 for O at (0,2)"));
        assert!(text.contains("Moves (Descending)"));
    }
}

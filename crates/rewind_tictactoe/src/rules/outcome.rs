//! Outcome evaluation: the one function the rest of the game asks.

use super::{check_winner, is_full};
use crate::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of evaluating a board snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No complete line and at least one empty square.
    Ongoing,
    /// A line is complete.
    Won {
        /// The mark occupying the line.
        mark: Player,
        /// The first complete line in scan order.
        line: [Position; 3],
    },
    /// Every square is occupied and no line is complete.
    Draw,
}

impl Outcome {
    /// True for `Won` and `Draw`.
    pub fn is_decided(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// Returns the winning line as board indices.
    pub fn line_indices(&self) -> Option<[usize; 3]> {
        match self {
            Outcome::Won { line, .. } => Some(line.map(Position::to_index)),
            _ => None,
        }
    }
}

/// Evaluates a board snapshot.
///
/// Scans [`LINES`](super::LINES) in order and reports the first complete one;
/// otherwise a full board is a draw and anything else is still ongoing.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((mark, line)) = check_winner(board) {
        return Outcome::Won { mark, line };
    }
    if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn board(cells: &str) -> Board {
        let mut squares = [Square::Empty; 9];
        for (square, c) in squares.iter_mut().zip(cells.chars().filter(|c| !c.is_whitespace())) {
            *square = match c {
                'X' => Square::Occupied(Player::X),
                'O' => Square::Occupied(Player::O),
                _ => Square::Empty,
            };
        }
        Board::from_squares(squares)
    }

    #[test]
    fn test_empty_board_is_ongoing() {
        assert_eq!(evaluate(&Board::new()), Outcome::Ongoing);
    }

    #[test]
    fn test_row_win() {
        let outcome = evaluate(&board("OO. XXX ..."));
        assert_eq!(outcome.winner(), Some(Player::X));
        assert_eq!(outcome.line_indices(), Some([3, 4, 5]));
    }

    #[test]
    fn test_draw() {
        assert_eq!(evaluate(&board("XOX XOO OXX")), Outcome::Draw);
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        let outcome = evaluate(&board("XOX OXO OXX"));
        assert_eq!(outcome.line_indices(), Some([0, 4, 8]));
    }

    #[test]
    fn test_tie_break_prefers_earlier_line() {
        // Row 0 (X) and row 2 (O) are both complete.
        let outcome = evaluate(&board("XXX ... OOO"));
        assert_eq!(outcome.winner(), Some(Player::X));
        assert_eq!(outcome.line_indices(), Some([0, 1, 2]));
    }

    #[test]
    fn test_evaluate_does_not_mutate() {
        let before = board("XO. ... ...");
        let copy = before;
        let _ = evaluate(&before);
        assert_eq!(before, copy);
    }

    #[test]
    fn test_is_decided() {
        assert!(!Outcome::Ongoing.is_decided());
        assert!(Outcome::Draw.is_decided());
    }
}

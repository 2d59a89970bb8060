//! Board evaluation: ongoing, won or drawn.

use super::win::check_winner;
use crate::{Board, Player};
use serde::{Deserialize, Serialize};

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// No completed line and at least one empty square.
    #[default]
    Ongoing,
    /// The player completed a line.
    Win(Player),
    /// Every square is filled and no line is complete.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(*player),
            Outcome::Ongoing | Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "ongoing"),
            Outcome::Win(player) => write!(f, "win {}", player),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

/// Evaluates a board.
///
/// A completed line wins (first line in [`LINES`](super::LINES) order if
/// several are complete); otherwise a full board is a draw and anything
/// else is still ongoing. Total over every board value.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Win(winner)
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(s: &str) -> Outcome {
        evaluate(&s.parse().unwrap())
    }

    #[test]
    fn test_empty_board_is_ongoing() {
        assert_eq!(evaluate(&Board::new()), Outcome::Ongoing);
    }

    #[test]
    fn test_partial_board_without_line_is_ongoing() {
        assert_eq!(eval("XO./.X./..O"), Outcome::Ongoing);
    }

    #[test]
    fn test_line_wins() {
        assert_eq!(eval("XXX/OO./..."), Outcome::Win(Player::X));
        assert_eq!(eval("X.O/XO./O.X"), Outcome::Win(Player::O));
    }

    #[test]
    fn test_full_board_with_line_is_a_win_not_a_draw() {
        assert_eq!(eval("XOX/OXO/OXX"), Outcome::Win(Player::X));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        assert_eq!(eval("XOX/XOO/OXX"), Outcome::Draw);
    }

    #[test]
    fn test_outcome_helpers() {
        assert_eq!(Outcome::Win(Player::O).winner(), Some(Player::O));
        assert_eq!(Outcome::Draw.winner(), None);
        assert!(Outcome::Draw.is_draw());
        assert!(Outcome::Draw.is_over());
        assert!(!Outcome::Ongoing.is_over());
    }

    #[test]
    fn test_display() {
        assert_eq!(Outcome::Ongoing.to_string(), "ongoing");
        assert_eq!(Outcome::Win(Player::X).to_string(), "win X");
        assert_eq!(Outcome::Draw.to_string(), "draw");
    }
}

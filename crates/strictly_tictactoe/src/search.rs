//! Exhaustive minimax move search.
//!
//! The searcher walks the complete game tree below a position. Terminal
//! positions score `10 - depth` when the searching side has won,
//! `depth - 10` when its opponent has won and `0` for a draw, where depth
//! counts plies from the root. Faster wins therefore outrank slower ones
//! and slower losses outrank faster ones.
//!
//! The board is used as a scratch buffer: each candidate square is filled,
//! scored and emptied again before the next one is tried, so the caller's
//! board is unchanged when a search returns.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{best_move, Board, Player, Position};
//!
//! let mut board: Board = "XX./OO./...".parse().unwrap();
//! assert_eq!(best_move(&mut board, Player::X), Some(Position::TopRight));
//! ```

use super::rules::{Outcome, evaluate};
use super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Base score of a win; a win `d` plies below the root scores `WIN_SCORE - d`.
pub const WIN_SCORE: i32 = 10;

/// Best move found for the searching side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Square to play.
    pub position: Position,
    /// Minimax score of playing there, from the searching side's view.
    pub score: i32,
}

/// Counters for the most recent search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited below the root.
    pub nodes: u64,
}

/// Minimax searcher.
///
/// Holds only statistics; any number of searches may be run in sequence.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    stats: SearchStats,
}

impl Searcher {
    /// Creates a new searcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics of the last search.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Finds the best move for `side`.
    ///
    /// Empty squares are tried in index order and the best one is only
    /// replaced on a strictly higher score, so ties go to the lowest index.
    /// Returns `None` when the board has no empty square or is already won.
    #[instrument(skip(self, board), fields(board = %board))]
    pub fn search(&mut self, board: &mut Board, side: Player) -> Option<SearchResult> {
        let mut best: Option<SearchResult> = None;
        for (position, score) in self.score_moves(board, side) {
            if best.is_none_or(|b| score > b.score) {
                best = Some(SearchResult { position, score });
            }
        }

        match best {
            Some(result) => debug!(
                position = %result.position,
                score = result.score,
                nodes = self.stats.nodes,
                "Search complete"
            ),
            None => debug!("No move available"),
        }
        best
    }

    /// Scores every legal move for `side`, in index order.
    ///
    /// Empty when the board is full or already decided.
    #[instrument(skip(self, board), fields(board = %board))]
    pub fn score_moves(&mut self, board: &mut Board, side: Player) -> Vec<(Position, i32)> {
        self.stats = SearchStats::default();
        if evaluate(board).is_over() {
            return Vec::new();
        }

        let mut scores = Vec::with_capacity(9);
        for pos in Position::ALL {
            if !board.is_empty(pos) {
                continue;
            }
            board.set(pos, Square::Occupied(side));
            let score = self.minimax(board, 1, false, side);
            board.set(pos, Square::Empty);
            scores.push((pos, score));
        }
        scores
    }

    fn minimax(&mut self, board: &mut Board, depth: i32, maximizing: bool, side: Player) -> i32 {
        self.stats.nodes += 1;

        match evaluate(board) {
            Outcome::Win(winner) if winner == side => return WIN_SCORE - depth,
            Outcome::Win(_) => return depth - WIN_SCORE,
            Outcome::Draw => return 0,
            Outcome::Ongoing => {}
        }

        let mover = if maximizing { side } else { side.opponent() };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for pos in Position::ALL {
            if !board.is_empty(pos) {
                continue;
            }
            board.set(pos, Square::Occupied(mover));
            let score = self.minimax(board, depth + 1, !maximizing, side);
            board.set(pos, Square::Empty);

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }
}

/// Returns the optimal square for `side`, or `None` if no move is available.
///
/// `board` is restored to its original contents before this returns.
pub fn best_move(board: &mut Board, side: Player) -> Option<Position> {
    Searcher::new().search(board, side).map(|r| r.position)
}

//! Pure tic-tac-toe game logic with an exhaustive minimax opponent.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Square`], [`Player`] and [`Position`]
//! - **Rules**: [`evaluate`] decides whether a board is won, drawn or ongoing
//! - **Search**: [`best_move`] returns the optimal square for a side
//! - **Game**: [`Game`] tracks turns and history on top of the rules
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{best_move, evaluate, Game, Outcome, Player};
//!
//! let mut game = Game::new();
//! while !game.is_over() {
//!     let mut scratch = game.board().clone();
//!     let pos = best_move(&mut scratch, game.to_move()).expect("game is ongoing");
//!     game.place(pos).expect("search only returns empty squares");
//! }
//! assert_eq!(evaluate(game.board()), Outcome::Draw);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod position;
pub mod rules;
mod search;
mod types;

pub use action::{Move, MoveError};
pub use game::Game;
pub use position::Position;
pub use rules::{Outcome, check_winner, evaluate, is_draw};
pub use search::{SearchResult, SearchStats, Searcher, WIN_SCORE, best_move};
pub use types::{Board, BoardParseError, Player, Square};

/// Alias for clarity where a player is meant as the mark on a square.
pub type Mark = Player;

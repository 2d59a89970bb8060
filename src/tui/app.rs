//! Application state and logic.
//!
//! The app mirrors the orchestrator's game from the events it receives and
//! tracks which phase the session is in:
//!
//! ```text
//! AwaitingSelection --select_side--> HumanTurn | ComputerTurn
//! HumanTurn <--MoveMade--> ComputerTurn
//! HumanTurn | ComputerTurn --GameOver--> Finished
//! any --new_game--> AwaitingSelection
//! ```

use super::input::move_cursor;
use crate::orchestrator::GameEvent;
use crossterm::event::KeyCode;
use strictly_tictactoe::{Game, Mark, Outcome, Position, Searcher};
use tracing::{debug, instrument, warn};

/// Where the session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the human to choose X or O.
    AwaitingSelection,
    /// The human is to move.
    HumanTurn,
    /// The computer is thinking.
    ComputerTurn,
    /// The game is decided.
    Finished(Outcome),
}

/// Main application state.
pub struct App {
    phase: Phase,
    game: Game,
    first_player: Mark,
    human_side: Option<Mark>,
    cursor: Position,
    status_message: String,
}

impl App {
    /// Creates an app waiting for side selection.
    pub fn new(first_player: Mark) -> Self {
        Self {
            phase: Phase::AwaitingSelection,
            game: Game::with_first_player(first_player),
            first_player,
            human_side: None,
            cursor: Position::Center,
            status_message: selection_prompt(),
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The mirrored game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The human's mark once chosen.
    pub fn human_side(&self) -> Option<Mark> {
        self.human_side
    }

    /// Mark that opens each game.
    pub fn first_player(&self) -> Mark {
        self.first_player
    }

    /// Square under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    fn turn_phase(&self, mark: Mark) -> Phase {
        if Some(mark) == self.human_side {
            Phase::HumanTurn
        } else {
            Phase::ComputerTurn
        }
    }

    /// Chooses the human's side and starts the game.
    ///
    /// Returns `false` outside [`Phase::AwaitingSelection`].
    #[instrument(skip(self))]
    pub fn select_side(&mut self, side: Mark) -> bool {
        if self.phase != Phase::AwaitingSelection {
            return false;
        }
        self.human_side = Some(side);
        self.game = Game::with_first_player(self.first_player);
        self.phase = self.turn_phase(self.first_player);
        self.status_message = format!("Next player: {}", self.first_player);
        debug!(phase = ?self.phase, "Side selected");
        true
    }

    /// Handles a game event from the orchestrator.
    pub fn handle_event(&mut self, event: GameEvent) {
        debug!(?event, "Handling game event");

        match event {
            GameEvent::Thinking { mark, .. } => {
                self.phase = self.turn_phase(mark);
                self.status_message = "Computer is thinking...".to_string();
            }
            GameEvent::AwaitingMove { mark, .. } => {
                self.phase = self.turn_phase(mark);
                self.status_message = format!("Next player: {}", mark);
            }
            GameEvent::MoveMade { player, mv, .. } => match self.game.place(mv.position) {
                Ok(outcome) => {
                    self.status_message = format!("{} played {}", player, mv.position);
                    if !outcome.is_over() {
                        self.phase = self.turn_phase(self.game.to_move());
                    }
                }
                Err(e) => {
                    warn!(error = %e, "Mirror rejected move");
                    self.status_message = format!("Move error: {}", e);
                }
            },
            GameEvent::InvalidMove { error, .. } => {
                self.status_message = format!("{}. Try another square.", error);
            }
            GameEvent::GameOver { outcome, .. } => {
                self.phase = Phase::Finished(outcome);
                self.status_message = match outcome {
                    Outcome::Win(mark) => format!("Winner: {}", mark),
                    Outcome::Draw => "It's a draw!".to_string(),
                    Outcome::Ongoing => "Game stopped.".to_string(),
                };
            }
        }
    }

    /// Validates a square picked by the human.
    ///
    /// Returns the position to forward to the human player, or `None` when
    /// it is not the human's turn or the square is taken.
    #[instrument(skip(self))]
    pub fn human_move(&mut self, pos: Position) -> Option<Position> {
        self.cursor = pos;
        if self.phase != Phase::HumanTurn {
            debug!(phase = ?self.phase, "Ignoring input outside human turn");
            return None;
        }
        if !self.game.board().is_empty(pos) {
            self.status_message = format!("{} is taken. Try another square.", pos);
            return None;
        }
        Some(pos)
    }

    /// Plays the square under the cursor.
    pub fn confirm_cursor(&mut self) -> Option<Position> {
        self.human_move(self.cursor)
    }

    /// Moves the keyboard cursor.
    pub fn move_cursor(&mut self, key: KeyCode) {
        self.cursor = move_cursor(self.cursor, key);
    }

    /// Shows the square the search would play for the human.
    #[instrument(skip(self))]
    pub fn hint(&mut self) -> Option<Position> {
        let side = self.human_side?;
        if self.phase != Phase::HumanTurn {
            return None;
        }
        let mut board = self.game.board().clone();
        let result = Searcher::new().search(&mut board, side)?;
        self.cursor = result.position;
        self.status_message = format!("Hint: {}", result.position);
        Some(result.position)
    }

    /// Clears the board and returns to side selection.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        debug!("Starting new game");
        self.phase = Phase::AwaitingSelection;
        self.game = Game::with_first_player(self.first_player);
        self.human_side = None;
        self.cursor = Position::Center;
        self.status_message = selection_prompt();
    }
}

fn selection_prompt() -> String {
    "Choose your player: press X or O".to_string()
}

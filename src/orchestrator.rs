//! Game orchestration between players.

use crate::players::Player;
use anyhow::Result;
use strictly_tictactoe::{Game, Mark, Move, MoveError, Outcome};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Messages sent from orchestrator to UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A computer player is searching for its move.
    Thinking {
        /// Name of the player.
        player: String,
        /// Mark it plays.
        mark: Mark,
    },
    /// A human player is expected to move.
    AwaitingMove {
        /// Name of the player.
        player: String,
        /// Mark it plays.
        mark: Mark,
    },
    /// Move was made.
    MoveMade {
        /// Name of the player.
        player: String,
        /// The move applied to the board.
        mv: Move,
        /// Board outcome after the move.
        outcome: Outcome,
    },
    /// A human picked a square that cannot be played; they are asked again.
    InvalidMove {
        /// Name of the player.
        player: String,
        /// Why the move was rejected.
        error: MoveError,
    },
    /// Game ended.
    GameOver {
        /// Final outcome.
        outcome: Outcome,
        /// Name of the winning player, if any.
        winner: Option<String>,
    },
}

/// Orchestrates gameplay between two players.
pub struct Orchestrator {
    game: Game,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates a new orchestrator for a game opened by `first_player`.
    pub fn new(
        first_player: Mark,
        player_x: Box<dyn Player>,
        player_o: Box<dyn Player>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            game: Game::with_first_player(first_player),
            player_x,
            player_o,
            event_tx,
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    fn player_mut(&mut self, mark: Mark) -> &mut Box<dyn Player> {
        match mark {
            Mark::X => &mut self.player_x,
            Mark::O => &mut self.player_o,
        }
    }

    /// Runs the game loop until the game is decided.
    ///
    /// Illegal squares from a human are reported and asked for again.
    /// An illegal square from a computer player aborts the game.
    #[instrument(skip(self), fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub async fn run(&mut self) -> Result<Outcome> {
        info!(first_player = %self.game.first_player(), "Starting game orchestration");

        while !self.game.is_over() {
            let mark = self.game.to_move();
            let player = self.player_mut(mark);
            let player_name = player.name().to_string();
            let is_computer = player.is_computer();

            if is_computer {
                self.event_tx.send(GameEvent::Thinking {
                    player: player_name.clone(),
                    mark,
                })?;
            } else {
                self.event_tx.send(GameEvent::AwaitingMove {
                    player: player_name.clone(),
                    mark,
                })?;
            }

            debug!(player = %player_name, %mark, "Waiting for move");
            let game = self.game.clone();
            let position = self.player_mut(mark).choose_move(&game).await?;

            match self.game.place(position) {
                Ok(outcome) => {
                    self.event_tx.send(GameEvent::MoveMade {
                        player: player_name,
                        mv: Move::new(mark, position),
                        outcome,
                    })?;
                }
                Err(error) if !is_computer => {
                    warn!(player = %player_name, %error, "Rejected move");
                    self.event_tx.send(GameEvent::InvalidMove {
                        player: player_name,
                        error,
                    })?;
                }
                Err(error) => return Err(error.into()),
            }
        }

        let outcome = self.game.outcome();
        let winner = outcome
            .winner()
            .map(|mark| self.player_mut(mark).name().to_string());
        info!(%outcome, ?winner, "Game over");
        self.event_tx.send(GameEvent::GameOver { outcome, winner })?;
        Ok(outcome)
    }
}

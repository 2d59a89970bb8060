//! Human player fed by the terminal UI.

use super::Player;
use anyhow::Result;
use strictly_tictactoe::{Game, Position};
use tokio::sync::mpsc;
use tracing::debug;

/// Human player whose squares arrive over a channel.
pub struct HumanPlayer {
    name: String,
    input_rx: mpsc::UnboundedReceiver<Position>,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input_rx: mpsc::UnboundedReceiver<Position>) -> Self {
        Self {
            name: name.into(),
            input_rx,
        }
    }
}

#[async_trait::async_trait]
impl Player for HumanPlayer {
    async fn choose_move(&mut self, _game: &Game) -> Result<Position> {
        match self.input_rx.recv().await {
            Some(position) => {
                debug!(player = %self.name, %position, "Human chose position");
                Ok(position)
            }
            None => anyhow::bail!("Input channel closed"),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_forwards_input() {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut human = HumanPlayer::new("You", rx);
        tx.send(Position::Center).unwrap();
        assert_eq!(human.choose_move(&Game::new()).await.unwrap(), Position::Center);
        assert!(!human.is_computer());
    }

    #[tokio::test]
    async fn test_closed_channel_is_an_error() {
        let (tx, rx) = mpsc::unbounded_channel::<Position>();
        drop(tx);
        let mut human = HumanPlayer::new("You", rx);
        assert!(human.choose_move(&Game::new()).await.is_err());
    }
}

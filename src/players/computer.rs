//! Computer player backed by the minimax search.

use super::Player;
use anyhow::Result;
use std::time::Duration;
use strictly_tictactoe::{Game, Position, Searcher};
use tracing::{debug, instrument};

/// Plays the optimal move after an optional pause.
///
/// The pause happens before the search and never changes its result.
pub struct ComputerPlayer {
    name: String,
    thinking_delay: Duration,
    searcher: Searcher,
}

impl ComputerPlayer {
    /// Creates a computer player that answers after `thinking_delay`.
    pub fn new(name: impl Into<String>, thinking_delay: Duration) -> Self {
        Self {
            name: name.into(),
            thinking_delay,
            searcher: Searcher::new(),
        }
    }
}

#[async_trait::async_trait]
impl Player for ComputerPlayer {
    #[instrument(skip(self, game), fields(ai = %self.name, side = %game.to_move()))]
    async fn choose_move(&mut self, game: &Game) -> Result<Position> {
        if !self.thinking_delay.is_zero() {
            debug!(delay_ms = self.thinking_delay.as_millis() as u64, "Thinking");
            tokio::time::sleep(self.thinking_delay).await;
        }

        let mut board = game.board().clone();
        let Some(result) = self.searcher.search(&mut board, game.to_move()) else {
            anyhow::bail!("No valid moves available");
        };

        debug!(
            position = %result.position,
            score = result.score,
            nodes = self.searcher.stats().nodes,
            "AI chose position"
        );
        Ok(result.position)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_computer(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_tictactoe::{Mark, Move};

    #[tokio::test]
    async fn test_takes_the_win() {
        let mut game = Game::new();
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
        ] {
            game.place(pos).unwrap();
        }
        let mut ai = ComputerPlayer::new("Computer", Duration::ZERO);
        assert_eq!(ai.choose_move(&game).await.unwrap(), Position::TopRight);
    }

    #[tokio::test]
    async fn test_delay_does_not_change_the_move() {
        let mut game = Game::new();
        game.place(Position::Center).unwrap();

        let mut quick = ComputerPlayer::new("Quick", Duration::ZERO);
        let mut slow = ComputerPlayer::new("Slow", Duration::from_millis(20));
        assert_eq!(
            quick.choose_move(&game).await.unwrap(),
            slow.choose_move(&game).await.unwrap()
        );
    }

    #[tokio::test]
    async fn test_finished_game_is_an_error() {
        let moves = [
            Move::new(Mark::X, Position::TopLeft),
            Move::new(Mark::O, Position::Center),
            Move::new(Mark::X, Position::TopCenter),
            Move::new(Mark::O, Position::BottomLeft),
            Move::new(Mark::X, Position::TopRight),
        ];
        let game = Game::replay(Mark::X, &moves).unwrap();
        let mut ai = ComputerPlayer::new("Computer", Duration::ZERO);
        assert!(ai.choose_move(&game).await.is_err());
    }
}

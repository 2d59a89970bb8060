//! Game state model for tic-tac-toe.
//!
//! A [`Game`] owns the board, tracks whose turn it is and keeps the move
//! history. It is created empty, mutated one square at a time through
//! [`Game::place`], and reset to empty for a new game.

use super::action::{Move, MoveError};
use super::rules::{Outcome, evaluate};
use super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    first_player: Player,
    history: Vec<Move>,
    outcome: Outcome,
}

impl Game {
    /// Creates a new game with X to move.
    pub fn new() -> Self {
        Self::with_first_player(Player::X)
    }

    /// Creates a new game where `first_player` makes the opening move.
    pub fn with_first_player(first_player: Player) -> Self {
        Self {
            board: Board::new(),
            to_move: first_player,
            first_player,
            history: Vec::new(),
            outcome: Outcome::Ongoing,
        }
    }

    /// Rebuilds a game from a move list, checking turn order and legality.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(first_player: Player, moves: &[Move]) -> Result<Self, MoveError> {
        let mut game = Self::with_first_player(first_player);
        for mv in moves {
            if mv.player != game.to_move {
                return Err(MoveError::WrongPlayer(mv.player));
            }
            game.place(mv.position)?;
        }
        Ok(game)
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    ///
    /// Once the game is over this is the player who made the last move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the player who opens each game.
    pub fn first_player(&self) -> Player {
        self.first_player
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    /// Places the current player's mark at `pos`.
    ///
    /// The turn passes to the opponent only while the game remains ongoing.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] once the game is decided and
    /// [`MoveError::SquareOccupied`] if `pos` already holds a mark.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn place(&mut self, pos: Position) -> Result<Outcome, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.to_move;
        self.board.set(pos, Square::Occupied(player));
        self.history.push(Move::new(player, pos));
        self.outcome = evaluate(&self.board);

        if self.outcome.is_over() {
            info!(outcome = %self.outcome, moves = self.history.len(), "Game finished");
        } else {
            self.to_move = player.opponent();
        }
        debug!(position = %pos, outcome = %self.outcome, "Move applied");
        Ok(self.outcome)
    }

    /// Clears the board for a new game with the same opening player.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!(first_player = %self.first_player, "Resetting game");
        self.board.clear();
        self.to_move = self.first_player;
        self.history.clear();
        self.outcome = Outcome::Ongoing;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.outcome(), Outcome::Ongoing);
        assert!(game.history().is_empty());
        assert_eq!(game.board(), &Board::new());
    }

    #[test]
    fn test_place_alternates_turns() {
        let mut game = Game::new();
        game.place(Position::Center).unwrap();
        assert_eq!(game.to_move(), Player::O);
        game.place(Position::TopLeft).unwrap();
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.board().get(Position::TopLeft), Square::Occupied(Player::O));
    }

    #[test]
    fn test_o_can_open() {
        let mut game = Game::with_first_player(Player::O);
        game.place(Position::Center).unwrap();
        assert_eq!(game.board().get(Position::Center), Square::Occupied(Player::O));
        assert_eq!(game.to_move(), Player::X);
    }

    #[test]
    fn test_occupied_square_rejected() {
        let mut game = Game::new();
        game.place(Position::Center).unwrap();
        assert_eq!(
            game.place(Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.to_move(), Player::O);
    }

    #[test]
    fn test_win_ends_game() {
        let mut game = Game::new();
        for pos in [
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomLeft,
        ] {
            assert_eq!(game.place(pos), Ok(Outcome::Ongoing));
        }
        assert_eq!(game.place(Position::TopRight), Ok(Outcome::Win(Player::X)));
        assert!(game.is_over());
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.place(Position::BottomRight), Err(MoveError::GameOver));
    }

    #[test]
    fn test_replay_checks_turn_order() {
        let moves = [
            Move::new(Player::X, Position::Center),
            Move::new(Player::X, Position::TopLeft),
        ];
        assert_eq!(
            Game::replay(Player::X, &moves),
            Err(MoveError::WrongPlayer(Player::X))
        );
    }

    #[test]
    fn test_replay_to_draw() {
        let moves = [
            Move::new(Player::X, Position::TopLeft),
            Move::new(Player::O, Position::Center),
            Move::new(Player::X, Position::TopRight),
            Move::new(Player::O, Position::TopCenter),
            Move::new(Player::X, Position::BottomCenter),
            Move::new(Player::O, Position::MiddleLeft),
            Move::new(Player::X, Position::MiddleRight),
            Move::new(Player::O, Position::BottomRight),
            Move::new(Player::X, Position::BottomLeft),
        ];
        let game = Game::replay(Player::X, &moves).unwrap();
        assert_eq!(game.outcome(), Outcome::Draw);
        assert_eq!(game.history(), &moves);
    }

    #[test]
    fn test_reset() {
        let mut game = Game::with_first_player(Player::O);
        game.place(Position::Center).unwrap();
        game.place(Position::TopLeft).unwrap();
        game.reset();
        assert_eq!(game, Game::with_first_player(Player::O));
    }
}

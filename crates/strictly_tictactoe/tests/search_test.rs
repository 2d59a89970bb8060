//! Whole-game properties of the evaluator and the minimax search.

use strictly_tictactoe::{
    Board, Game, Outcome, Player, Position, Searcher, Square, best_move, evaluate,
};

fn board(s: &str) -> Board {
    s.parse().expect("valid board")
}

#[test]
fn test_empty_board_opens_in_the_first_square() {
    let mut b = Board::new();
    let result = Searcher::new().search(&mut b, Player::X).expect("a move");
    assert_eq!(result.position, Position::TopLeft);
    assert_eq!(result.score, 0, "perfect play from the empty board is a draw");
    assert_eq!(b, Board::new());
}

#[test]
fn test_empty_board_search_is_reproducible() {
    let mut b = Board::new();
    let first = best_move(&mut b, Player::O);
    let second = best_move(&mut b, Player::O);
    assert_eq!(first, Some(Position::TopLeft));
    assert_eq!(first, second);
}

#[test]
fn test_completes_winning_row() {
    // X X _ / O O _ / _ _ _
    let mut b = board("XX./OO./...");
    assert_eq!(best_move(&mut b, Player::X), Some(Position::TopRight));
}

#[test]
fn test_forced_block_then_draw() {
    // O X O / X X O / X _ _ : X threatens the middle column.
    let mut b = board("OXO/XXO/X..");
    let block = best_move(&mut b, Player::O).expect("a move");
    assert_eq!(block, Position::BottomCenter);

    b.set(block, Square::Occupied(Player::O));
    assert_eq!(evaluate(&b), Outcome::Ongoing);
    let reply = best_move(&mut b, Player::X).expect("one square left");
    assert_eq!(reply, Position::BottomRight);

    b.set(reply, Square::Occupied(Player::X));
    assert_eq!(evaluate(&b), Outcome::Draw);
}

#[test]
fn test_blocks_instead_of_playing_elsewhere() {
    // X threatens the left column; O has nothing of its own.
    let mut b = board("X../X../.O.");
    assert_eq!(best_move(&mut b, Player::O), Some(Position::BottomLeft));
}

#[test]
fn test_diagonal_already_complete_is_reported_as_win() {
    // X O X / O X O / X _ _ has X on 2-4-6.
    let b = board("XOX/OXO/X..");
    assert_eq!(evaluate(&b), Outcome::Win(Player::X));
    let mut scratch = b.clone();
    assert_eq!(best_move(&mut scratch, Player::O), None);
}

#[test]
fn test_search_leaves_board_untouched() {
    for s in [".../.../...", "X../.O./..X", "XO./.X./..O", "XOX/XOO/OXX"] {
        let original = board(s);
        for side in [Player::X, Player::O] {
            let mut b = original.clone();
            best_move(&mut b, side);
            assert_eq!(b, original, "board {original} side {side}");
        }
    }
}

/// Plays `engine` with the search against every possible reply sequence.
fn assert_never_loses(game: &Game, engine: Player) {
    if game.is_over() {
        assert_ne!(
            game.outcome(),
            Outcome::Win(engine.opponent()),
            "{engine} lost after {:?}",
            game.history()
        );
        return;
    }

    if game.to_move() == engine {
        let mut scratch = game.board().clone();
        let pos = best_move(&mut scratch, engine).expect("ongoing game has a move");
        let mut next = game.clone();
        next.place(pos).expect("search returns empty squares");
        assert_never_loses(&next, engine);
    } else {
        for pos in Position::valid_moves(game.board()) {
            let mut next = game.clone();
            next.place(pos).expect("valid move");
            assert_never_loses(&next, engine);
        }
    }
}

#[test]
fn test_x_never_loses_when_moving_first() {
    assert_never_loses(&Game::new(), Player::X);
}

#[test]
fn test_o_never_loses_when_moving_second() {
    assert_never_loses(&Game::new(), Player::O);
}

#[test]
fn test_o_never_loses_when_moving_first() {
    assert_never_loses(&Game::with_first_player(Player::O), Player::O);
}

#[test]
fn test_self_play_is_a_draw() {
    for first in [Player::X, Player::O] {
        let mut game = Game::with_first_player(first);
        while !game.is_over() {
            let mut scratch = game.board().clone();
            let pos = best_move(&mut scratch, game.to_move()).expect("a move");
            game.place(pos).expect("legal move");
        }
        assert_eq!(game.outcome(), Outcome::Draw);
    }
}

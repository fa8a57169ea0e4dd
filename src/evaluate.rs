//! Terminal detection and static scoring of positions.
//!
//! Scores are always from the perspective of the player to move. With the
//! full tree searched, only the three exact ratings ever appear.

use crate::constants::{
    LOSING_POSITION, NEUTRAL_POSITION, NUM_CELLS, Rating, WINNING_LINES, WINNING_POSITION,
};
use crate::position::{Cell, Player, Position};

/// Final result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(Player),
    Draw,
}

/// Check whether `player` holds all three cells of some winning line.
pub fn check_for_win(pos: &Position, player: Player) -> bool {
    let mark = Cell::Marked(player);
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&i| pos.board[i] == mark))
}

/// The player with a completed line, if any.
///
/// Reachable positions never have two winners.
pub fn winner(pos: &Position) -> Option<Player> {
    [Player::Human, Player::Computer]
        .into_iter()
        .find(|&p| check_for_win(pos, p))
}

/// The game ends when either player has three in a row or the board is full.
pub fn game_is_over(pos: &Position) -> bool {
    pos.turns_taken == NUM_CELLS || winner(pos).is_some()
}

/// Result of the game, or `None` while it is still being played.
pub fn outcome(pos: &Position) -> Option<Outcome> {
    match winner(pos) {
        Some(p) => Some(Outcome::Win(p)),
        None if pos.turns_taken == NUM_CELLS => Some(Outcome::Draw),
        None => None,
    }
}

/// Score a position without searching, for the player to move.
///
/// A line completed by the mover rates [`WINNING_POSITION`], a line completed
/// by the opponent rates [`LOSING_POSITION`], anything else is neutral.
pub fn evaluate_static_position(pos: &Position) -> Rating {
    if check_for_win(pos, pos.whose_turn) {
        WINNING_POSITION
    } else if check_for_win(pos, pos.whose_turn.opponent()) {
        LOSING_POSITION
    } else {
        NEUTRAL_POSITION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::{make_move, new_game, parse_move};

    fn play(first: Player, squares: &[usize]) -> Position {
        let mut pos = new_game(first);
        for sq in squares {
            make_move(&mut pos, parse_move(&sq.to_string()).unwrap());
        }
        pos
    }

    #[test]
    fn test_empty_board() {
        let pos = new_game(Player::Computer);
        assert!(!game_is_over(&pos));
        assert_eq!(winner(&pos), None);
        assert_eq!(outcome(&pos), None);
        assert_eq!(evaluate_static_position(&pos), NEUTRAL_POSITION);
    }

    #[test]
    fn test_column_win_is_loss_for_mover() {
        // Computer takes the left column; human to move
        let pos = play(Player::Computer, &[1, 2, 4, 5, 7]);
        assert!(check_for_win(&pos, Player::Computer));
        assert!(game_is_over(&pos));
        assert_eq!(outcome(&pos), Some(Outcome::Win(Player::Computer)));
        assert_eq!(pos.whose_turn, Player::Human);
        assert_eq!(evaluate_static_position(&pos), LOSING_POSITION);
    }

    #[test]
    fn test_self_win_detection() {
        // Human completes the anti-diagonal, then the turn is handed back
        let mut pos = play(Player::Human, &[3, 1, 5, 2, 7]);
        pos.whose_turn = Player::Human;
        assert_eq!(evaluate_static_position(&pos), WINNING_POSITION);
    }

    #[test]
    fn test_full_board_draw() {
        // X O X / X O O / O X X
        let pos = play(Player::Computer, &[1, 2, 3, 5, 4, 6, 8, 7, 9]);
        assert_eq!(pos.turns_taken, NUM_CELLS);
        assert_eq!(winner(&pos), None);
        assert!(game_is_over(&pos));
        assert_eq!(outcome(&pos), Some(Outcome::Draw));
        assert_eq!(evaluate_static_position(&pos), NEUTRAL_POSITION);
    }

    #[test]
    fn test_win_on_last_move_is_not_a_draw() {
        // X fills the board and completes the diagonal with the ninth move
        let pos = play(Player::Computer, &[1, 2, 3, 4, 5, 6, 8, 7, 9]);
        assert_eq!(pos.turns_taken, NUM_CELLS);
        assert_eq!(outcome(&pos), Some(Outcome::Win(Player::Computer)));
    }
}

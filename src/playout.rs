//! Random play, used as a benchmark opponent for the search.
//!
//! The random player picks uniformly among the legal moves. Pass a seeded
//! [`fastrand::Rng`] for reproducible games.

use crate::evaluate::{Outcome, game_is_over, outcome};
use crate::position::{Move, Player, Position, generate_move_list, make_move, new_game};
use crate::search::{Negamax, SearchError};

/// Choose a uniformly random legal move, or `None` if the board is full.
pub fn random_move(pos: &Position, rng: &mut fastrand::Rng) -> Option<Move> {
    let moves = generate_move_list(pos);
    if moves.is_empty() {
        return None;
    }
    Some(moves[rng.usize(..moves.len())])
}

/// Play random moves for both sides until the game ends.
pub fn random_playout(pos: &mut Position, rng: &mut fastrand::Rng) -> Outcome {
    while !game_is_over(pos) {
        match random_move(pos, rng) {
            Some(mv) => make_move(pos, mv),
            None => break,
        }
    }
    outcome(pos).unwrap_or(Outcome::Draw)
}

/// Play one game of the search (as [`Player::Computer`]) against random moves
/// (as [`Player::Human`]).
///
/// Returns the finished position.
pub fn play_against_random(
    search: &mut Negamax,
    first_player: Player,
    rng: &mut fastrand::Rng,
) -> Result<Position, SearchError> {
    let mut pos = new_game(first_player);
    while !game_is_over(&pos) {
        let mv = match pos.whose_turn {
            Player::Computer => search.choose_move(&pos)?,
            Player::Human => random_move(&pos, rng).ok_or(SearchError::NoLegalMoves)?,
        };
        make_move(&mut pos, mv);
    }
    Ok(pos)
}

/// Tally of finished games, from the computer's point of view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Record {
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
}

impl Record {
    pub fn add(&mut self, result: Outcome) {
        match result {
            Outcome::Win(Player::Computer) => self.wins += 1,
            Outcome::Win(Player::Human) => self.losses += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    pub fn games(&self) -> u32 {
        self.wins + self.draws + self.losses
    }
}

//! Depth-limited minimax search in negamax form.
//!
//! The search is written against the [`Game`] trait and knows nothing about
//! tic-tac-toe. Two functions recurse into each other:
//! - [`Negamax::evaluate_position`] scores a position, statically at the
//!   leaves and by searching everywhere else
//! - [`Negamax::find_best_move`] tries every move and keeps the one whose
//!   resulting position is worst for the opponent
//!
//! The caller's position is walked with apply/retract pairs instead of being
//! copied per node, so memory use grows with depth only.

use std::fmt;

use log::debug;
use thiserror::Error;

use crate::constants::{LOSING_POSITION, MAX_DEPTH, Rating};
use crate::evaluate::{evaluate_static_position, game_is_over};
use crate::position::{Move, Position, generate_move_list, make_move, retract_move};

/// A two-player, zero-sum game the search can play.
pub trait Game {
    type Move: Copy + fmt::Display;

    /// All legal moves in a fixed order.
    fn generate_moves(&self) -> Vec<Self::Move>;

    /// Play `mv` for the side to move.
    fn make_move(&mut self, mv: Self::Move);

    /// Undo the last `make_move(mv)`.
    fn retract_move(&mut self, mv: Self::Move);

    fn is_game_over(&self) -> bool;

    /// Score for the side to move, without searching.
    fn evaluate_static(&self) -> Rating;
}

impl Game for Position {
    type Move = Move;

    fn generate_moves(&self) -> Vec<Move> {
        generate_move_list(self)
    }

    fn make_move(&mut self, mv: Move) {
        make_move(self, mv);
    }

    fn retract_move(&mut self, mv: Move) {
        retract_move(self, mv);
    }

    fn is_game_over(&self) -> bool {
        game_is_over(self)
    }

    fn evaluate_static(&self) -> Rating {
        evaluate_static_position(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("no legal moves available")]
    NoLegalMoves,
}

/// Negamax search state: the depth limit and a node counter.
#[derive(Debug, Clone)]
pub struct Negamax {
    max_depth: u32,
    nodes: u64,
}

impl Default for Negamax {
    fn default() -> Self {
        Self::new(MAX_DEPTH)
    }
}

impl Negamax {
    pub fn new(max_depth: u32) -> Self {
        Self {
            max_depth,
            nodes: 0,
        }
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Positions evaluated since the last [`Negamax::choose_move`].
    pub fn nodes_searched(&self) -> u64 {
        self.nodes
    }

    /// Pick the best move for the side to move in `state`.
    ///
    /// Searches a private copy, so `state` is never touched.
    pub fn choose_move<G: Game + Clone>(&mut self, state: &G) -> Result<G::Move, SearchError> {
        self.nodes = 0;
        let mut work = state.clone();
        let (mv, rating) = self.find_best_move(&mut work, 0)?;
        debug!(
            "best move {mv} rated {rating} ({} positions searched)",
            self.nodes
        );
        Ok(mv)
    }

    /// Find the move that minimizes the opponent's best rating.
    ///
    /// Moves are tried in generation order; ties go to the earlier move, and
    /// the scan stops once a move leaves the opponent in a lost position.
    /// Returns the move together with its rating for the side to move.
    ///
    /// # Errors
    /// [`SearchError::NoLegalMoves`] if `state` has no moves.
    pub fn find_best_move<G: Game>(
        &mut self,
        state: &mut G,
        depth: u32,
    ) -> Result<(G::Move, Rating), SearchError> {
        let mut best: Option<(G::Move, Rating)> = None;

        for mv in state.generate_moves() {
            state.make_move(mv);
            let rating = self.evaluate_position(state, depth + 1);
            state.retract_move(mv);
            let rating = rating?;

            if best.is_none_or(|(_, min_rating)| rating < min_rating) {
                best = Some((mv, rating));
            }
            if rating == LOSING_POSITION {
                break;
            }
        }

        best.map(|(mv, min_rating)| (mv, -min_rating))
            .ok_or(SearchError::NoLegalMoves)
    }

    /// Rate `state` for the side to move.
    ///
    /// Finished games and positions at the depth limit get their static
    /// score; everything else is searched.
    pub fn evaluate_position<G: Game>(
        &mut self,
        state: &mut G,
        depth: u32,
    ) -> Result<Rating, SearchError> {
        self.nodes += 1;
        if state.is_game_over() || depth >= self.max_depth {
            return Ok(state.evaluate_static());
        }
        let (_, rating) = self.find_best_move(state, depth)?;
        Ok(rating)
    }
}

/// Choose the computer's move with a full-depth search.
pub fn choose_computer_move(pos: &Position) -> Result<Move, SearchError> {
    Negamax::default().choose_move(pos)
}

//! Tic-tac-toe against a negamax search.
//!
//! This crate plays tic-tac-toe through a text interface and picks the
//! computer's moves with a depth-limited minimax search in negamax form.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, ratings, and search defaults
//! - [`position`] - Board state, move generation, apply/retract
//! - [`evaluate`] - Game-over detection and static scoring
//! - [`search`] - Generic negamax search over the [`search::Game`] trait
//! - [`playout`] - Random opponent for benchmarking
//! - [`game`] - Interactive text session
//!
//! ## Example
//!
//! ```
//! use tictactoe_rust::position::{Position, make_move, parse_move};
//! use tictactoe_rust::search::choose_computer_move;
//!
//! // Computer opens, human takes the center (or the corner if it is gone)
//! let mut pos = Position::new();
//! let opening = choose_computer_move(&pos).unwrap();
//! make_move(&mut pos, opening);
//! let center = parse_move("5").unwrap();
//! let answer = if opening == center { parse_move("1").unwrap() } else { center };
//! make_move(&mut pos, answer);
//!
//! let reply = choose_computer_move(&pos).unwrap();
//! println!("Computer plays square {reply}");
//! ```

pub mod constants;
pub mod evaluate;
pub mod game;
pub mod playout;
pub mod position;
pub mod search;

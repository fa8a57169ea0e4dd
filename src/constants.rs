//! Constants for board geometry, position ratings, and search parameters.
//!
//! Everything here is a compile-time default. The search engine and the game
//! session receive these values through [`crate::search::Negamax`] and
//! [`crate::game::GameConfig`], so callers can override them per game.

use crate::position::Player;

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN).
pub const N: usize = 3;

/// Number of cells on the board.
pub const NUM_CELLS: usize = N * N;

/// The eight lines of three cells that win the game, as row-major cell indices.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

// =============================================================================
// Ratings
// =============================================================================

/// A rating is centered at 0. Positive values favor the player to move,
/// negative values favor the opponent.
pub type Rating = i32;

/// Rating of a forced win for the player to move.
pub const WINNING_POSITION: Rating = 1000;

/// Rating of a draw, or of a position with no better information.
pub const NEUTRAL_POSITION: Rating = 0;

/// Rating of a forced loss for the player to move.
pub const LOSING_POSITION: Rating = -WINNING_POSITION;

// =============================================================================
// Search Parameters
// =============================================================================

/// Maximum recursion depth of the search.
///
/// Tic-tac-toe never gets past depth 9, so this only matters when the engine
/// is reused for deeper games.
pub const MAX_DEPTH: u32 = 10_000;

/// Player who moves first in a new game.
pub const FIRST_PLAYER: Player = Player::Computer;

// =============================================================================
// Display
// =============================================================================

/// Mark of the player who moves first.
pub const FIRST_MARK: char = 'X';

/// Mark of the player who moves second.
pub const SECOND_MARK: char = 'O';

/// Character shown for an empty cell.
pub const EMPTY_MARK: char = ' ';

//! Tic-tac-toe position representation and move execution.
//!
//! This module provides the core game state:
//! - Board state as nine cells in row-major order
//! - Legal move generation in ascending cell order
//! - Move application and retraction for backtracking search
//! - Conversion between moves and the 1-9 square numbers shown to players
//!
//! Apply and retract mutate the position in place, so a search can walk the
//! whole game tree through a single working copy.

use std::fmt;

use thiserror::Error;

use crate::constants::{EMPTY_MARK, FIRST_MARK, FIRST_PLAYER, N, NUM_CELLS, SECOND_MARK};
use crate::evaluate::game_is_over;

/// The two sides of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    /// The other player.
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Human => write!(f, "human"),
            Player::Computer => write!(f, "computer"),
        }
    }
}

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Marked(Player),
}

/// A move: the index of the cell to mark, 0-8 in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(usize);

impl Move {
    /// Create a move for the given cell index, or `None` if it is off the board.
    pub fn new(index: usize) -> Option<Move> {
        (index < NUM_CELLS).then_some(Move(index))
    }

    /// The cell index this move marks.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0 + 1)
    }
}

/// Reasons a move typed by a player is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("'{0}' is not a square number")]
    NotANumber(String),
    #[error("square {0} is off the board (expected 1 to {max})", max = NUM_CELLS)]
    OutOfRange(usize),
    #[error("square {0} is already taken")]
    Occupied(Move),
    #[error("the game is already over")]
    GameOver,
}

/// A tic-tac-toe position.
///
/// `turns_taken` always equals the number of marked cells, and `whose_turn`
/// is `first_player` after an even number of turns and the opponent otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    /// Cells in row-major order
    pub board: [Cell; NUM_CELLS],
    /// Player to move
    pub whose_turn: Player,
    /// Number of moves made so far
    pub turns_taken: usize,
    /// Player who made the first move; they play `X`
    pub first_player: Player,
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl Position {
    /// Create an empty board with [`FIRST_PLAYER`] to move.
    pub fn new() -> Self {
        new_game(FIRST_PLAYER)
    }

    /// Contents of the cell marked by `mv`.
    #[inline]
    pub fn cell(&self, mv: Move) -> Cell {
        self.board[mv.index()]
    }
}

/// Create an empty board with `first_player` to move.
pub fn new_game(first_player: Player) -> Position {
    Position {
        board: [Cell::Empty; NUM_CELLS],
        whose_turn: first_player,
        turns_taken: 0,
        first_player,
    }
}

/// The player whose turn it is.
#[inline]
pub fn whose_turn(pos: &Position) -> Player {
    pos.whose_turn
}

/// The other player.
#[inline]
pub fn opponent(player: Player) -> Player {
    player.opponent()
}

/// Mark drawn for `player`: `X` for whoever moved first, `O` for the other.
pub fn player_mark(pos: &Position, player: Player) -> char {
    if player == pos.first_player {
        FIRST_MARK
    } else {
        SECOND_MARK
    }
}

/// List every legal move: the empty cells, in ascending cell order.
///
/// The list is empty only when the board is full.
pub fn generate_move_list(pos: &Position) -> Vec<Move> {
    pos.board
        .iter()
        .enumerate()
        .filter(|(_, cell)| **cell == Cell::Empty)
        .map(|(i, _)| Move(i))
        .collect()
}

/// Check whether `mv` may be played: the game is still going and the cell is empty.
pub fn move_is_legal(pos: &Position, mv: Move) -> bool {
    validate_move(pos, mv).is_ok()
}

/// Like [`move_is_legal`], but reports why a move is rejected.
pub fn validate_move(pos: &Position, mv: Move) -> Result<(), MoveError> {
    if game_is_over(pos) {
        return Err(MoveError::GameOver);
    }
    if pos.cell(mv) != Cell::Empty {
        return Err(MoveError::Occupied(mv));
    }
    Ok(())
}

/// Mark the cell for the player to move and pass the turn.
///
/// The move must come from [`generate_move_list`] for this position.
pub fn make_move(pos: &mut Position, mv: Move) {
    debug_assert_eq!(pos.cell(mv), Cell::Empty, "cell {mv} is already marked");
    pos.board[mv.index()] = Cell::Marked(pos.whose_turn);
    pos.whose_turn = pos.whose_turn.opponent();
    pos.turns_taken += 1;
}

/// Undo the most recent [`make_move`] of `mv`.
///
/// Calls must mirror `make_move` calls in reverse order.
pub fn retract_move(pos: &mut Position, mv: Move) {
    debug_assert_eq!(
        pos.cell(mv),
        Cell::Marked(pos.whose_turn.opponent()),
        "cell {mv} was not marked by the last mover"
    );
    pos.board[mv.index()] = Cell::Empty;
    pos.whose_turn = pos.whose_turn.opponent();
    pos.turns_taken -= 1;
}

/// Parse a square number typed by a player (1-9, row by row) into a move.
pub fn parse_move(s: &str) -> Result<Move, MoveError> {
    let s = s.trim();
    let square: usize = s
        .parse()
        .map_err(|_| MoveError::NotANumber(s.to_string()))?;
    square
        .checked_sub(1)
        .and_then(Move::new)
        .ok_or(MoveError::OutOfRange(square))
}

/// Convert a move to the square number shown to players.
pub fn str_move(mv: Move) -> String {
    mv.to_string()
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..N {
            if row > 0 {
                writeln!(f, "---+---+---")?;
            }
            let marks: Vec<String> = (0..N)
                .map(|col| {
                    let ch = match self.board[row * N + col] {
                        Cell::Empty => EMPTY_MARK,
                        Cell::Marked(player) => player_mark(self, player),
                    };
                    format!(" {ch} ")
                })
                .collect();
            writeln!(f, "{}", marks.join("|"))?;
        }
        Ok(())
    }
}

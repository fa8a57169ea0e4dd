//! Text interface for playing against the computer.
//!
//! A [`GameSession`] reads the human's moves line by line and writes the board,
//! the computer's moves and the final result. It works on any reader/writer
//! pair, so the binary hands it stdin/stdout and tests hand it buffers.
//!
//! ## Example
//!
//! ```
//! use std::io::Cursor;
//! use tictactoe_rust::game::{GameConfig, GameSession};
//! use tictactoe_rust::position::Player;
//!
//! let config = GameConfig { first_player: Player::Computer, ..GameConfig::default() };
//! // Offer squares 1-9 in turn; taken squares are refused and re-prompted
//! let input = Cursor::new("1\n2\n3\n4\n5\n6\n7\n8\n9\n".repeat(9));
//! let mut session = GameSession::new(input, Vec::new(), config);
//! let result = session.run().unwrap();
//! println!("{result:?}");
//! ```

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use log::{info, trace, warn};

use crate::constants::{FIRST_PLAYER, MAX_DEPTH, N, NUM_CELLS};
use crate::evaluate::{Outcome, game_is_over, outcome};
use crate::position::{
    Move, Player, Position, make_move, new_game, parse_move, player_mark, validate_move,
};
use crate::search::{Negamax, SearchError};

/// Settings for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Who moves first and plays `X`
    pub first_player: Player,
    /// Depth limit handed to the search
    pub max_depth: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_player: FIRST_PLAYER,
            max_depth: MAX_DEPTH,
        }
    }
}

/// An interactive game between a human and the search.
pub struct GameSession<R, W> {
    input: R,
    output: W,
    pos: Position,
    search: Negamax,
}

impl<R: BufRead, W: Write> GameSession<R, W> {
    pub fn new(input: R, output: W, config: GameConfig) -> Self {
        Self {
            input,
            output,
            pos: new_game(config.first_player),
            search: Negamax::new(config.max_depth),
        }
    }

    /// Current game position.
    pub fn position(&self) -> &Position {
        &self.pos
    }

    /// Consume the session and return its writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Play a full game and return its result.
    ///
    /// # Errors
    /// Fails if the input ends before the game does or the output cannot be
    /// written.
    pub fn run(&mut self) -> Result<Outcome> {
        info!("new game, {} moves first", self.pos.first_player);
        self.give_instructions()?;

        while !game_is_over(&self.pos) {
            self.display_game()?;
            let mv = match self.pos.whose_turn {
                Player::Human => self.get_user_move()?,
                Player::Computer => {
                    let mv = self.search.choose_move(&self.pos)?;
                    self.display_move(mv)?;
                    mv
                }
            };
            trace!("{} plays {mv}", self.pos.whose_turn);
            make_move(&mut self.pos, mv);
        }

        let result = outcome(&self.pos).context("game ended without a result")?;
        info!("game over after {} moves: {result:?}", self.pos.turns_taken);
        self.display_game()?;
        self.announce_result(result)?;
        Ok(result)
    }

    fn give_instructions(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "Welcome to tic-tac-toe. The object of the game is to line up\n\
             three marks in a row, vertically, horizontally or diagonally.\n\
             Make a move by entering the number of a square:\n"
        )?;
        for row in 0..N {
            if row > 0 {
                writeln!(self.output, "---+---+---")?;
            }
            let squares: Vec<String> = (1..=N)
                .map(|col| format!(" {} ", row * N + col))
                .collect();
            writeln!(self.output, "{}", squares.join("|"))?;
        }
        let opening = match self.pos.first_player {
            Player::Computer => "I'll go first.",
            Player::Human => "You go first.",
        };
        writeln!(self.output, "\n{opening}")?;
        Ok(())
    }

    fn display_game(&mut self) -> Result<()> {
        writeln!(self.output, "\n{}", self.pos)?;
        Ok(())
    }

    fn display_move(&mut self, mv: Move) -> Result<()> {
        let mark = player_mark(&self.pos, Player::Computer);
        writeln!(self.output, "I'll put an {mark} in square {mv}.")?;
        Ok(())
    }

    /// Prompt until the human enters a legal move.
    fn get_user_move(&mut self) -> Result<Move> {
        let mut line = String::new();
        loop {
            write!(self.output, "Your move (1-{NUM_CELLS}): ")?;
            self.output.flush()?;

            line.clear();
            let read = self
                .input
                .read_line(&mut line)
                .context("failed to read move")?;
            if read == 0 {
                bail!("input ended before the game was over");
            }

            match parse_move(&line).and_then(|mv| validate_move(&self.pos, mv).map(|_| mv)) {
                Ok(mv) => return Ok(mv),
                Err(e) => {
                    warn!("rejected move {:?}: {e}", line.trim());
                    writeln!(self.output, "That move is illegal: {e}. Try again.")?;
                }
            }
        }
    }

    fn announce_result(&mut self, result: Outcome) -> Result<()> {
        let message = match result {
            Outcome::Win(Player::Computer) => "I win.",
            Outcome::Win(Player::Human) => "You win.",
            Outcome::Draw => "It's a draw.",
        };
        writeln!(self.output, "{message}")?;
        Ok(())
    }
}

/// Let the search play both sides from the empty board.
///
/// Returns the finished position.
pub fn self_play(config: GameConfig) -> Result<Position, SearchError> {
    let mut search = Negamax::new(config.max_depth);
    let mut pos = new_game(config.first_player);
    while !game_is_over(&pos) {
        let mv = search.choose_move(&pos)?;
        trace!("{} plays {mv}", pos.whose_turn);
        make_move(&mut pos, mv);
    }
    Ok(pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(input: &str, first_player: Player) -> GameSession<Cursor<String>, Vec<u8>> {
        let config = GameConfig {
            first_player,
            ..GameConfig::default()
        };
        GameSession::new(Cursor::new(input.to_string()), Vec::new(), config)
    }

    fn output(session: GameSession<Cursor<String>, Vec<u8>>) -> String {
        String::from_utf8(session.into_output()).unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.first_player, FIRST_PLAYER);
        assert_eq!(config.max_depth, MAX_DEPTH);
    }

    #[test]
    fn test_get_user_move_reprompts() {
        let mut s = session("abc\n0\n5\n", Player::Human);
        let mv = s.get_user_move().unwrap();
        assert_eq!(mv.index(), 4);
        let out = output(s);
        assert!(out.contains("'abc' is not a square number"));
        assert!(out.contains("square 0 is off the board"));
        assert_eq!(out.matches("Your move").count(), 3);
    }

    #[test]
    fn test_get_user_move_rejects_occupied() {
        let mut s = session("5\n1\n", Player::Human);
        make_move(&mut s.pos, parse_move("5").unwrap());
        let mv = s.get_user_move().unwrap();
        assert_eq!(mv.index(), 0);
        assert!(output(s).contains("square 5 is already taken"));
    }

    #[test]
    fn test_input_closed() {
        let mut s = session("", Player::Human);
        let err = s.run().unwrap_err();
        assert!(err.to_string().contains("input ended"));
    }

    #[test]
    fn test_computer_never_loses_to_fixed_replies() {
        // Offer every square in order each turn; illegal ones are re-prompted
        let script = "1\n2\n3\n4\n5\n6\n7\n8\n9\n".repeat(NUM_CELLS);
        let mut s = session(&script, Player::Human);
        let result = s.run().unwrap();
        assert_ne!(result, Outcome::Win(Player::Human));
        assert!(game_is_over(s.position()));
        let out = output(s);
        assert!(out.starts_with("Welcome to tic-tac-toe."));
        assert!(out.contains("You go first."));
        assert!(out.contains("I'll put an O in square"));
    }

    #[test]
    fn test_self_play_is_a_draw() {
        for first_player in [Player::Computer, Player::Human] {
            let config = GameConfig {
                first_player,
                ..GameConfig::default()
            };
            let pos = self_play(config).unwrap();
            assert_eq!(outcome(&pos), Some(Outcome::Draw));
        }
    }
}

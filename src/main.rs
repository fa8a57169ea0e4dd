//! Tic-tac-toe against the computer.
//!
//! ## Usage
//!
//! - `tictactoe-rust` - Play a game on the terminal
//! - `tictactoe-rust play --first human` - Play, moving first
//! - `tictactoe-rust selfplay` - Watch the computer play itself
//! - `tictactoe-rust bench --games 100` - Play the computer against random moves
//!
//! Set `RUST_LOG=debug` to see search statistics.

use std::io;

use anyhow::{Context, Result, ensure};
use clap::{Parser, Subcommand, ValueEnum};

use tictactoe_rust::constants::{FIRST_PLAYER, MAX_DEPTH};
use tictactoe_rust::evaluate::outcome;
use tictactoe_rust::game::{GameConfig, GameSession, self_play};
use tictactoe_rust::playout::{Record, play_against_random};
use tictactoe_rust::position::Player;
use tictactoe_rust::search::Negamax;

/// Tic-tac-toe against a negamax search
#[derive(Parser)]
#[command(name = "tictactoe-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game against the computer on the terminal
    Play(SearchArgs),
    /// Let the computer play both sides
    Selfplay(SearchArgs),
    /// Play the computer against a random opponent and report the record
    Bench {
        /// Number of games to play
        #[arg(long, default_value_t = 100)]
        games: u32,
        /// Seed for the random opponent
        #[arg(long)]
        seed: Option<u64>,
        #[command(flatten)]
        search: SearchArgs,
    },
}

#[derive(clap::Args, Clone, Copy)]
struct SearchArgs {
    /// Who moves first
    #[arg(long, value_enum, default_value_t = Side::from(FIRST_PLAYER))]
    first: Side,
    /// Maximum search depth
    #[arg(long, default_value_t = MAX_DEPTH)]
    max_depth: u32,
}

impl Default for SearchArgs {
    fn default() -> Self {
        Self {
            first: Side::from(FIRST_PLAYER),
            max_depth: MAX_DEPTH,
        }
    }
}

impl From<SearchArgs> for GameConfig {
    fn from(args: SearchArgs) -> Self {
        GameConfig {
            first_player: args.first.into(),
            max_depth: args.max_depth,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Human,
    Computer,
}

impl From<Player> for Side {
    fn from(player: Player) -> Self {
        match player {
            Player::Human => Side::Human,
            Player::Computer => Side::Computer,
        }
    }
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::Human => Player::Human,
            Side::Computer => Player::Computer,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Play(SearchArgs::default())) {
        Commands::Play(args) => run_play(args.into()),
        Commands::Selfplay(args) => run_selfplay(args.into()),
        Commands::Bench { games, seed, search } => run_bench(games, seed, search.into()),
    }
}

fn run_play(config: GameConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut session = GameSession::new(stdin.lock(), io::stdout(), config);
    session.run()?;
    Ok(())
}

fn run_selfplay(config: GameConfig) -> Result<()> {
    let pos = self_play(config)?;
    let result = outcome(&pos).context("self-play ended without a result")?;
    println!("{pos}");
    println!("Result: {result:?}");
    Ok(())
}

fn run_bench(games: u32, seed: Option<u64>, config: GameConfig) -> Result<()> {
    ensure!(games > 0, "--games must be at least 1");
    let mut rng = match seed {
        Some(s) => fastrand::Rng::with_seed(s),
        None => fastrand::Rng::new(),
    };
    let mut search = Negamax::new(config.max_depth);
    let mut record = Record::default();

    for i in 0..games {
        // Alternate who starts, beginning with the configured player
        let first = if i % 2 == 0 {
            config.first_player
        } else {
            config.first_player.opponent()
        };
        let pos = play_against_random(&mut search, first, &mut rng)?;
        let result = outcome(&pos).context("benchmark game ended without a result")?;
        record.add(result);
    }

    println!(
        "{} games: {} wins, {} draws, {} losses",
        record.games(),
        record.wins,
        record.draws,
        record.losses
    );
    Ok(())
}

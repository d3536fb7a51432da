//! Konane-Rust: play and time jump-capture games between engine players.
//!
//! ## Usage
//!
//! - `konane-rust` - Show a demo game
//! - `konane-rust play` - Play a series and print both records
//! - `konane-rust bench` - Report the average wall time per game
//!
//! Log verbosity follows `RUST_LOG` (default `warn`).

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use konane_rust::board::Side;
use konane_rust::constants::{DEFAULT_DEPTH, DEFAULT_GAMES, DEFAULT_SIZE, MIN_SIZE};
use konane_rust::game::{Entrant, Game, average_game_time};
use konane_rust::player::{
    AlphaBetaPlayer, HumanPlayer, MinimaxPlayer, Player, RandomPlayer, SimplePlayer,
};

/// Konane-Rust: a jump-capture board game engine
#[derive(Parser)]
#[command(name = "konane-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a series of games and print each player's record
    Play(MatchArgs),
    /// Play a series of games and report the average time per game
    Bench(MatchArgs),
}

#[derive(Args)]
struct MatchArgs {
    /// Board size (NxN)
    #[arg(long, default_value_t = DEFAULT_SIZE, value_parser = parse_size)]
    size: usize,
    /// Who plays Black (moves first)
    #[arg(long, value_enum, default_value_t = PlayerKind::Minimax)]
    black: PlayerKind,
    /// Who plays White
    #[arg(long, value_enum, default_value_t = PlayerKind::AlphaBeta)]
    white: PlayerKind,
    /// Search depth for minimax and alpha-beta players
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: u32,
    /// Number of games in the series
    #[arg(long, default_value_t = DEFAULT_GAMES)]
    games: usize,
    /// Print the board after every move
    #[arg(long)]
    show: bool,
    /// Seed for random players
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Copy, Clone, ValueEnum)]
enum PlayerKind {
    Human,
    Simple,
    Random,
    Minimax,
    AlphaBeta,
}

fn parse_size(s: &str) -> Result<usize, String> {
    let size: usize = s.parse().map_err(|_| format!("invalid size: {s}"))?;
    if size < MIN_SIZE {
        return Err(format!("board size must be at least {MIN_SIZE}"));
    }
    Ok(size)
}

fn make_player(kind: PlayerKind, side: Side, depth: u32, seed: Option<u64>) -> Box<dyn Player> {
    match kind {
        PlayerKind::Human => Box::new(HumanPlayer::stdio(side)),
        PlayerKind::Simple => Box::new(SimplePlayer::new(side)),
        PlayerKind::Random => match seed {
            // Offset White's stream so both sides do not mirror each other
            Some(seed) => Box::new(RandomPlayer::with_seed(side, seed.wrapping_add(side as u64))),
            None => Box::new(RandomPlayer::new(side)),
        },
        PlayerKind::Minimax => Box::new(MinimaxPlayer::new(side, depth)),
        PlayerKind::AlphaBeta => Box::new(AlphaBetaPlayer::new(side, depth)),
    }
}

fn entrants(args: &MatchArgs) -> (Entrant, Entrant) {
    (
        Entrant::new(make_player(args.black, Side::Black, args.depth, args.seed)),
        Entrant::new(make_player(args.white, Side::White, args.depth, args.seed)),
    )
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play(args)) => {
            let (mut black, mut white) = entrants(&args);
            let game = Game::new(args.size).with_show(args.show);
            info!(size = args.size, games = args.games, "starting series");
            for (i, result) in game
                .play_n_games(args.games, &mut black, &mut white)?
                .iter()
                .enumerate()
            {
                let winner = if result.winner == Side::Black {
                    black.name()
                } else {
                    white.name()
                };
                println!("Game {i}: {winner} ({}) wins after {} moves", result.winner, result.plies);
            }
            println!("{black}");
            println!("{white}");
        }
        Some(Commands::Bench(args)) => {
            let (mut black, mut white) = entrants(&args);
            let game = Game::new(args.size).with_show(args.show);
            let per_game = average_game_time(&game, args.games, &mut black, &mut white)?;
            println!(
                "{} vs {} at depth {}: {:.3}s per game",
                black.name(),
                white.name(),
                args.depth,
                per_game.as_secs_f64()
            );
        }
        None => run_demo()?,
    }
    Ok(())
}

fn run_demo() -> Result<()> {
    println!("Konane-Rust: jump-capture board game engine\n");

    println!("=== Minimax (B) vs Alpha-Beta (W), 6x6, depth 2 ===");
    let game = Game::new(6).with_show(true);
    let mut black = MinimaxPlayer::new(Side::Black, 2);
    let mut white = AlphaBetaPlayer::new(Side::White, 2);
    let result = game.play_one_game(&mut black, &mut white)?;
    println!("{}", result.board);
    println!("Winner: {} after {} moves", result.winner, result.plies);
    println!(
        "Last search: minimax {} nodes, alpha-beta {} nodes ({} cutoffs)",
        black.stats().nodes,
        white.stats().nodes,
        white.stats().cutoffs
    );
    Ok(())
}

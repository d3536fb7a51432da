//! Game driver: alternates two players until one concedes or breaks a rule.
//!
//! Black always moves first. A player that returns no move loses, and so does
//! a player whose move [`apply_move`] rejects.

use std::fmt;
use std::time::{Duration, Instant};

use anyhow::{Result, bail};
use tracing::{info, instrument, warn};

use crate::board::{Board, Side};
use crate::player::Player;
use crate::rules::{InvalidMove, apply_move};

/// Win/loss tally belonging to one entrant.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Record {
    wins: u32,
    losses: u32,
}

impl Record {
    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub fn losses(&self) -> u32 {
        self.losses
    }

    pub fn won(&mut self) {
        self.wins += 1;
    }

    pub fn lost(&mut self) {
        self.losses += 1;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A player taking part in a series, with its own record.
pub struct Entrant {
    player: Box<dyn Player>,
    record: Record,
}

impl Entrant {
    pub fn new(player: Box<dyn Player>) -> Self {
        Self {
            player,
            record: Record::default(),
        }
    }

    pub fn name(&self) -> &str {
        self.player.name()
    }

    pub fn record(&self) -> Record {
        self.record
    }

    pub fn reset(&mut self) {
        self.record.reset();
    }
}

impl fmt::Display for Entrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Wins:{} Losses:{}",
            self.name(),
            self.record.wins,
            self.record.losses
        )
    }
}

/// Why a game ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Ending {
    /// The loser had no move to offer.
    Conceded,
    /// The loser offered a move the rules reject.
    Forfeit(InvalidMove),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameResult {
    pub winner: Side,
    pub ending: Ending,
    /// Moves successfully played.
    pub plies: usize,
    /// Final position.
    pub board: Board,
}

/// Game settings shared by every game of a series.
#[derive(Copy, Clone, Debug)]
pub struct Game {
    size: usize,
    show: bool,
}

impl Game {
    pub fn new(size: usize) -> Self {
        Self { size, show: false }
    }

    /// Print the board and every move to stdout as the game goes.
    pub fn with_show(mut self, show: bool) -> Self {
        self.show = show;
        self
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Play one game from the starting position.
    #[instrument(skip_all, fields(black = black.name(), white = white.name()))]
    pub fn play_one_game(
        &self,
        black: &mut dyn Player,
        white: &mut dyn Player,
    ) -> Result<GameResult> {
        if black.side() != Side::Black || white.side() != Side::White {
            bail!(
                "players are seated on the wrong sides ({} / {})",
                black.side(),
                white.side()
            );
        }

        let mut board = Board::new(self.size);
        let mut side = Side::Black;
        let mut plies = 0;
        loop {
            let player: &mut dyn Player = match side {
                Side::Black => &mut *black,
                Side::White => &mut *white,
            };
            if self.show {
                println!("{board}");
                println!("player {side}'s turn");
            }

            let Some(mv) = player.get_move(&board)? else {
                info!(loser = player.name(), %side, plies, "game over: conceded");
                return Ok(GameResult {
                    winner: side.opponent(),
                    ending: Ending::Conceded,
                    plies,
                    board,
                });
            };

            board = match apply_move(&board, side, mv) {
                Ok(next) => next,
                Err(err) => {
                    warn!(loser = player.name(), %err, "game over: invalid move");
                    return Ok(GameResult {
                        winner: side.opponent(),
                        ending: Ending::Forfeit(err),
                        plies,
                        board,
                    });
                }
            };
            if self.show {
                println!("{mv}");
            }
            plies += 1;
            side = side.opponent();
        }
    }

    /// Play `n` games with the same seating, updating both records.
    #[instrument(skip_all, fields(games = n))]
    pub fn play_n_games(
        &self,
        n: usize,
        black: &mut Entrant,
        white: &mut Entrant,
    ) -> Result<Vec<GameResult>> {
        let mut results = Vec::with_capacity(n);
        for game in 0..n {
            let result = self.play_one_game(black.player.as_mut(), white.player.as_mut())?;
            let (winner, loser) = match result.winner {
                Side::Black => (&mut *black, &mut *white),
                Side::White => (&mut *white, &mut *black),
            };
            winner.record.won();
            loser.record.lost();
            info!(game, winner = winner.name(), plies = result.plies, "game finished");
            results.push(result);
        }
        Ok(results)
    }
}

/// Average wall time per game over `n` games.
pub fn average_game_time(
    game: &Game,
    n: usize,
    black: &mut Entrant,
    white: &mut Entrant,
) -> Result<Duration> {
    if n == 0 {
        bail!("need at least one game to time");
    }
    let start = Instant::now();
    game.play_n_games(n, black, white)?;
    let per_game = start.elapsed() / n as u32;
    info!(?per_game, games = n, "timing complete");
    Ok(per_game)
}

//! Players: anything that can pick a move for one side.
//!
//! Players never carry rules of their own; they call [`generate_moves`] and
//! the search engines. Returning `Ok(None)` concedes the game.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use anyhow::{Context, Result};
use tracing::{debug, instrument};

use crate::board::{Board, Move, Side};
use crate::eval::Evaluator;
use crate::rules::generate_moves;
use crate::search::{AlphaBeta, Minimax, SearchStats};

/// Trait for players that can make moves.
pub trait Player {
    /// Pick a move for [`Player::side`] on `board`, or `None` to concede.
    fn get_move(&mut self, board: &Board) -> Result<Option<Move>>;

    /// Display name used in results.
    fn name(&self) -> &str;

    fn side(&self) -> Side;
}

/// Always plays the first legal move.
pub struct SimplePlayer {
    side: Side,
}

impl SimplePlayer {
    pub fn new(side: Side) -> Self {
        Self { side }
    }
}

impl Player for SimplePlayer {
    fn get_move(&mut self, board: &Board) -> Result<Option<Move>> {
        Ok(generate_moves(board, self.side).first().copied())
    }

    fn name(&self) -> &str {
        "Simple"
    }

    fn side(&self) -> Side {
        self.side
    }
}

/// Plays a uniformly random legal move.
pub struct RandomPlayer {
    side: Side,
    rng: fastrand::Rng,
}

impl RandomPlayer {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            rng: fastrand::Rng::new(),
        }
    }

    /// Reproducible variant for tests and benchmarks.
    pub fn with_seed(side: Side, seed: u64) -> Self {
        Self {
            side,
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Player for RandomPlayer {
    fn get_move(&mut self, board: &Board) -> Result<Option<Move>> {
        let moves = generate_moves(board, self.side);
        if moves.is_empty() {
            return Ok(None);
        }
        Ok(Some(moves[self.rng.usize(..moves.len())]))
    }

    fn name(&self) -> &str {
        "Random"
    }

    fn side(&self) -> Side {
        self.side
    }
}

/// Console player: lists the legal moves and reads the chosen index.
///
/// Generic over its input and output so it can be driven from memory.
pub struct HumanPlayer<R, W> {
    side: Side,
    input: R,
    output: W,
}

impl HumanPlayer<StdinLock<'static>, Stdout> {
    /// A human at the terminal.
    pub fn stdio(side: Side) -> Self {
        Self::new(side, io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(side: Side, input: R, output: W) -> Self {
        Self {
            side,
            input,
            output,
        }
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn get_move(&mut self, board: &Board) -> Result<Option<Move>> {
        let moves = generate_moves(board, self.side);
        let listed = moves
            .iter()
            .enumerate()
            .map(|(i, mv)| format!("{i}:{mv}"))
            .collect::<Vec<_>>()
            .join(" ");
        loop {
            writeln!(self.output, "Possible moves: {listed}")?;
            if moves.is_empty() {
                writeln!(self.output, "You must concede")?;
                return Ok(None);
            }
            write!(
                self.output,
                "Enter index of chosen move (0-{}) or -1 to concede: ",
                moves.len() - 1
            )?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("failed to read move choice")?;
            if read == 0 {
                // End of input: nobody left to choose
                return Ok(None);
            }
            match line.trim().parse::<i64>() {
                Ok(-1) => return Ok(None),
                Ok(index) if (0..moves.len() as i64).contains(&index) => {
                    let mv = moves[index as usize];
                    writeln!(self.output, "returning {mv}")?;
                    return Ok(Some(mv));
                }
                _ => writeln!(self.output, "Invalid choice, try again.")?,
            }
        }
    }

    fn name(&self) -> &str {
        "Human"
    }

    fn side(&self) -> Side {
        self.side
    }
}

/// Fixed-depth minimax player (mobility weight 3).
pub struct MinimaxPlayer {
    search: Minimax,
}

impl MinimaxPlayer {
    pub fn new(side: Side, depth: u32) -> Self {
        Self {
            search: Minimax::new(side, depth, Evaluator::minimax()),
        }
    }

    pub fn depth(&self) -> u32 {
        self.search.depth()
    }

    /// Counters from the last move search.
    pub fn stats(&self) -> SearchStats {
        self.search.stats()
    }
}

impl Player for MinimaxPlayer {
    #[instrument(level = "debug", skip_all, fields(player = "minimax"))]
    fn get_move(&mut self, board: &Board) -> Result<Option<Move>> {
        let result = self.search.search(board);
        debug!(value = result.value, action = ?result.action, "search chose");
        Ok(result.action)
    }

    fn name(&self) -> &str {
        "Minimax"
    }

    fn side(&self) -> Side {
        self.search.side()
    }
}

/// Fixed-depth alpha-beta player (mobility weight 4).
pub struct AlphaBetaPlayer {
    search: AlphaBeta,
}

impl AlphaBetaPlayer {
    pub fn new(side: Side, depth: u32) -> Self {
        Self {
            search: AlphaBeta::new(side, depth, Evaluator::alpha_beta()),
        }
    }

    pub fn depth(&self) -> u32 {
        self.search.depth()
    }

    /// Counters from the last move search.
    pub fn stats(&self) -> SearchStats {
        self.search.stats()
    }
}

impl Player for AlphaBetaPlayer {
    #[instrument(level = "debug", skip_all, fields(player = "alpha-beta"))]
    fn get_move(&mut self, board: &Board) -> Result<Option<Move>> {
        let result = self.search.search(board);
        debug!(value = result.value, action = ?result.action, "search chose");
        Ok(result.action)
    }

    fn name(&self) -> &str {
        "AlphaBeta"
    }

    fn side(&self) -> Side {
        self.search.side()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn human(input: &str) -> HumanPlayer<Cursor<Vec<u8>>, Vec<u8>> {
        HumanPlayer::new(Side::Black, Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_simple_player_takes_first_move() {
        let mut player = SimplePlayer::new(Side::Black);
        assert_eq!(player.get_move(&Board::new(4)).unwrap(), Some(Move::vacate(0, 0)));
    }

    #[test]
    fn test_players_concede_without_moves() {
        let board = Board::from_rows(&["BB..", "BB..", "....", "...W"]).unwrap();
        assert_eq!(SimplePlayer::new(Side::Black).get_move(&board).unwrap(), None);
        assert_eq!(RandomPlayer::with_seed(Side::Black, 7).get_move(&board).unwrap(), None);
        assert_eq!(MinimaxPlayer::new(Side::Black, 2).get_move(&board).unwrap(), None);
        assert_eq!(AlphaBetaPlayer::new(Side::Black, 2).get_move(&board).unwrap(), None);
        assert_eq!(human("0\n").get_move(&board).unwrap(), None);
    }

    #[test]
    fn test_random_player_picks_legal_move() {
        let board = Board::new(6);
        let legal = generate_moves(&board, Side::Black);
        let mut player = RandomPlayer::with_seed(Side::Black, 42);
        for _ in 0..20 {
            let mv = player.get_move(&board).unwrap().unwrap();
            assert!(legal.contains(&mv));
        }
    }

    #[test]
    fn test_random_player_seed_is_reproducible() {
        let board = Board::new(8);
        let mut a = RandomPlayer::with_seed(Side::Black, 3);
        let mut b = RandomPlayer::with_seed(Side::Black, 3);
        for _ in 0..10 {
            assert_eq!(a.get_move(&board).unwrap(), b.get_move(&board).unwrap());
        }
    }

    #[test]
    fn test_human_player_retries_then_picks() {
        let mut player = human("abc\n9\n2\n");
        let mv = player.get_move(&Board::new(4)).unwrap();
        assert_eq!(mv, Some(Move::vacate(2, 2)));
        let out = String::from_utf8(player.output.clone()).unwrap();
        assert_eq!(out.matches("Invalid choice, try again.").count(), 2);
        assert!(out.contains("returning (2, 2, 2, 2)"));
    }

    #[test]
    fn test_human_player_concedes() {
        assert_eq!(human("-1\n").get_move(&Board::new(4)).unwrap(), None);
        assert_eq!(human("").get_move(&Board::new(4)).unwrap(), None);
    }

    #[test]
    fn test_depth_zero_search_players_concede() {
        let board = Board::new(4);
        assert_eq!(MinimaxPlayer::new(Side::Black, 0).get_move(&board).unwrap(), None);
        assert_eq!(AlphaBetaPlayer::new(Side::Black, 0).get_move(&board).unwrap(), None);
    }

    #[test]
    fn test_search_players_move_legally() {
        let board = Board::new(6);
        let legal = generate_moves(&board, Side::Black);
        let mut minimax = MinimaxPlayer::new(Side::Black, 2);
        let mv = minimax.get_move(&board).unwrap().unwrap();
        assert!(legal.contains(&mv));
        assert!(minimax.stats().nodes > 1);

        let mut alpha_beta = AlphaBetaPlayer::new(Side::Black, 2);
        let mv = alpha_beta.get_move(&board).unwrap().unwrap();
        assert!(legal.contains(&mv));
    }
}

//! Static position evaluation.
//!
//! The score is a mobility count: how many moves a side has and from how many
//! distinct pieces, set against the same figures for the opponent. Positive
//! scores favour the evaluating side.

use std::collections::HashSet;

use crate::board::{Board, Move, Side};
use crate::constants::{ALPHA_BETA_MOBILITY_WEIGHT, MINIMAX_MOBILITY_WEIGHT};
use crate::rules::generate_moves;

/// Signed evaluation score.
pub type Score = i64;

/// Mobility evaluator.
///
/// `score = weight * own_moves + own_origins - (opp_moves + opp_origins)`
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Evaluator {
    /// Multiplier on the evaluating side's move count.
    pub mobility_weight: Score,
}

impl Evaluator {
    pub fn new(mobility_weight: Score) -> Self {
        Self { mobility_weight }
    }

    /// Weighting used by the minimax player.
    pub fn minimax() -> Self {
        Self::new(MINIMAX_MOBILITY_WEIGHT)
    }

    /// Weighting used by the alpha-beta player.
    pub fn alpha_beta() -> Self {
        Self::new(ALPHA_BETA_MOBILITY_WEIGHT)
    }

    pub fn evaluate(&self, board: &Board, side: Side) -> Score {
        let own = generate_moves(board, side);
        let opp = generate_moves(board, side.opponent());
        let own_origins = distinct_origins(&own) as Score;
        let opp_origins = distinct_origins(&opp) as Score;
        self.mobility_weight * own.len() as Score + own_origins - (opp.len() as Score + opp_origins)
    }
}

/// Number of different cells the moves start from.
pub fn distinct_origins(moves: &[Move]) -> usize {
    moves.iter().map(Move::origin).collect::<HashSet<_>>().len()
}

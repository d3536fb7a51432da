//! Fixed-depth adversarial search.
//!
//! Both searchers alternate max nodes (the searching side to move) and min
//! nodes (its opponent to move) down to a fixed depth, then score the leaf
//! with an [`Evaluator`] from the searching side's point of view.
//!
//! Move order is generation order. A node remembers a move only when its
//! value strictly improves, so among equally valued moves the first one
//! scanned wins. A node with no legal moves above the depth limit keeps its
//! sentinel value (`NEG_INF` at max nodes, `POS_INF` at min nodes) and no
//! move, which is how "no continuation" propagates upward.
//!
//! [`AlphaBeta`] returns the same root value as [`Minimax`] for the same
//! depth and evaluator; its move can differ only between equally valued
//! moves, since cutoffs skip part of the scan.

use tracing::{debug, instrument, warn};

use crate::board::{Board, Move, Side};
use crate::eval::{Evaluator, Score};
use crate::rules::{apply_move, generate_moves};

/// Stands in for minus infinity.
pub const NEG_INF: Score = Score::MIN;

/// Stands in for plus infinity.
pub const POS_INF: Score = Score::MAX;

/// Value of a node and the move that achieves it (`None` = concede).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub value: Score,
    pub action: Option<Move>,
}

impl SearchResult {
    fn leaf(value: Score) -> Self {
        Self {
            value,
            action: None,
        }
    }
}

/// Counters from the most recent search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes entered, leaves included.
    pub nodes: u64,
    /// Move scans abandoned early (always 0 for minimax).
    pub cutoffs: u64,
}

/// Successor boards of `board` for `side`, in generation order.
fn successors(board: &Board, side: Side) -> impl Iterator<Item = (Move, Board)> + '_ {
    generate_moves(board, side)
        .into_iter()
        .filter_map(move |mv| match apply_move(board, side, mv) {
            Ok(next) => Some((mv, next)),
            Err(err) => {
                warn!(%err, "generated move rejected");
                None
            }
        })
}

/// Plain minimax.
#[derive(Clone, Debug)]
pub struct Minimax {
    side: Side,
    depth: u32,
    evaluator: Evaluator,
    stats: SearchStats,
}

impl Minimax {
    pub fn new(side: Side, depth: u32, evaluator: Evaluator) -> Self {
        Self {
            side,
            depth,
            evaluator,
            stats: SearchStats::default(),
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Search `board` with the searching side to move.
    ///
    /// With depth 0 the root itself is the leaf, so the result carries no move.
    #[instrument(level = "debug", skip_all, fields(side = %self.side, depth = self.depth))]
    pub fn search(&mut self, board: &Board) -> SearchResult {
        self.stats = SearchStats::default();
        let result = self.max_value(board, 0);
        debug!(value = result.value, nodes = self.stats.nodes, "minimax done");
        result
    }

    fn max_value(&mut self, board: &Board, current_depth: u32) -> SearchResult {
        self.stats.nodes += 1;
        if current_depth == self.depth {
            return SearchResult::leaf(self.evaluator.evaluate(board, self.side));
        }
        let mut best = SearchResult::leaf(NEG_INF);
        for (mv, next) in successors(board, self.side) {
            let child = self.min_value(&next, current_depth + 1);
            if child.value > best.value {
                best = SearchResult {
                    value: child.value,
                    action: Some(mv),
                };
            }
        }
        best
    }

    fn min_value(&mut self, board: &Board, current_depth: u32) -> SearchResult {
        self.stats.nodes += 1;
        if current_depth == self.depth {
            return SearchResult::leaf(self.evaluator.evaluate(board, self.side));
        }
        let mut best = SearchResult::leaf(POS_INF);
        for (mv, next) in successors(board, self.side.opponent()) {
            let child = self.max_value(&next, current_depth + 1);
            if child.value < best.value {
                best = SearchResult {
                    value: child.value,
                    action: Some(mv),
                };
            }
        }
        best
    }
}

/// Minimax with alpha-beta pruning.
#[derive(Clone, Debug)]
pub struct AlphaBeta {
    side: Side,
    depth: u32,
    evaluator: Evaluator,
    stats: SearchStats,
}

impl AlphaBeta {
    pub fn new(side: Side, depth: u32, evaluator: Evaluator) -> Self {
        Self {
            side,
            depth,
            evaluator,
            stats: SearchStats::default(),
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Search `board` with the searching side to move, starting from the
    /// window `(NEG_INF, POS_INF)`.
    #[instrument(level = "debug", skip_all, fields(side = %self.side, depth = self.depth))]
    pub fn search(&mut self, board: &Board) -> SearchResult {
        self.stats = SearchStats::default();
        let result = self.max_value(board, 0, NEG_INF, POS_INF);
        debug!(
            value = result.value,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            "alpha-beta done"
        );
        result
    }

    fn max_value(
        &mut self,
        board: &Board,
        current_depth: u32,
        mut alpha: Score,
        beta: Score,
    ) -> SearchResult {
        self.stats.nodes += 1;
        if current_depth == self.depth {
            return SearchResult::leaf(self.evaluator.evaluate(board, self.side));
        }
        let mut best = SearchResult::leaf(NEG_INF);
        for (mv, next) in successors(board, self.side) {
            let child = self.min_value(&next, current_depth + 1, alpha, beta);
            if child.value > best.value {
                best = SearchResult {
                    value: child.value,
                    action: Some(mv),
                };
            }
            if best.value >= beta {
                self.stats.cutoffs += 1;
                return best;
            }
            alpha = alpha.max(best.value);
        }
        best
    }

    fn min_value(
        &mut self,
        board: &Board,
        current_depth: u32,
        alpha: Score,
        mut beta: Score,
    ) -> SearchResult {
        self.stats.nodes += 1;
        if current_depth == self.depth {
            return SearchResult::leaf(self.evaluator.evaluate(board, self.side));
        }
        let mut best = SearchResult::leaf(POS_INF);
        for (mv, next) in successors(board, self.side.opponent()) {
            let child = self.max_value(&next, current_depth + 1, alpha, beta);
            if child.value < best.value {
                best = SearchResult {
                    value: child.value,
                    action: Some(mv),
                };
            }
            if best.value <= alpha {
                self.stats.cutoffs += 1;
                return best;
            }
            beta = beta.min(best.value);
        }
        best
    }
}

//! Depth-limited minimax with alpha-beta pruning, written in negamax form.
//!
//! Every node scores the position from the side to move and negates child
//! scores, which keeps a single code path for both players. Results leaving
//! the root are always from the maximizing side's point of view.

use rand::seq::IndexedRandom;
use rand::Rng;

use super::heuristic::Heuristic;
use crate::error::SearchError;
use crate::game::{Board, Player};

/// Score of a proven win for the maximizing side. Larger than any heuristic
/// value so a forced result always outranks positional play.
pub const WIN_SCORE: i64 = 100_000_000;

/// Window bound. `-INFINITY` is still representable.
const INFINITY: i64 = i64::MAX;

/// Column picked by a search and its score for the maximizing side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub column: Option<usize>,
    pub score: i64,
}

/// Counters collected over one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub leaves: u64,
    pub cutoffs: u64,
}

/// A single search from the perspective of `maximizer`.
pub struct Minimax<'a, H: Heuristic + ?Sized> {
    heuristic: &'a H,
    maximizer: Player,
    pruning: bool,
    stats: SearchStats,
}

impl<'a, H: Heuristic + ?Sized> Minimax<'a, H> {
    pub fn new(heuristic: &'a H, maximizer: Player) -> Self {
        Minimax {
            heuristic,
            maximizer,
            pruning: true,
            stats: SearchStats::default(),
        }
    }

    /// Turn alpha-beta cutoffs on or off. With pruning off every child is
    /// searched with a full window; scan order and tie-breaks are unchanged.
    pub fn pruning(mut self, enabled: bool) -> Self {
        self.pruning = enabled;
        self
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Search `depth` plies with the maximizing side to move.
    ///
    /// `column` is `None` only for a terminal board. At depth 0 the column is
    /// a uniformly random legal one.
    pub fn run<R: Rng + ?Sized>(
        &mut self,
        board: &Board,
        depth: usize,
        rng: &mut R,
    ) -> Result<SearchResult, SearchError> {
        self.stats = SearchStats::default();

        let mut result = self.negamax(board, depth, -INFINITY, INFINITY, self.maximizer, rng)?;
        if result.column.is_none() && !board.is_terminal() {
            result.column = board.legal_columns().choose(rng).copied();
        }

        tracing::debug!(
            depth,
            maximizer = self.maximizer.name(),
            column = ?result.column,
            score = result.score,
            nodes = self.stats.nodes,
            leaves = self.stats.leaves,
            cutoffs = self.stats.cutoffs,
            pruning = self.pruning,
            "search finished"
        );

        Ok(result)
    }

    /// Score of a finished game for the maximizing side, or `None` while the
    /// game is still open.
    fn terminal_score(&self, board: &Board) -> Option<i64> {
        if board.has_four_in_a_row(self.maximizer) {
            Some(WIN_SCORE)
        } else if board.has_four_in_a_row(self.maximizer.other()) {
            Some(-WIN_SCORE)
        } else if board.legal_columns().is_empty() {
            Some(0)
        } else {
            None
        }
    }

    fn negamax<R: Rng + ?Sized>(
        &mut self,
        board: &Board,
        depth: usize,
        mut alpha: i64,
        beta: i64,
        to_move: Player,
        rng: &mut R,
    ) -> Result<SearchResult, SearchError> {
        self.stats.nodes += 1;
        let color = if to_move == self.maximizer { 1 } else { -1 };

        let leaf = match self.terminal_score(board) {
            Some(score) => Some(score),
            None if depth == 0 => Some(self.heuristic.evaluate(board, self.maximizer)),
            None => None,
        };
        if let Some(score) = leaf {
            self.stats.leaves += 1;
            return Ok(SearchResult {
                column: None,
                score: color * score,
            });
        }

        let mut moves: Vec<(usize, usize)> = board
            .legal_columns()
            .into_iter()
            .filter_map(|col| board.drop_row(col).map(|row| (col, row)))
            .collect();
        if moves.is_empty() {
            return Err(SearchError::NoLegalColumns);
        }

        // The random seed column is scanned first, the rest in ascending
        // order. Only a strictly better score displaces it.
        let seed = rng.random_range(0..moves.len());
        moves[..=seed].rotate_right(1);
        let mut best_column = moves[0].0;
        let mut best = -INFINITY;

        for &(col, row) in &moves {
            let mut child = board.clone();
            child.place(row, col, to_move);

            let (child_alpha, child_beta) = if self.pruning {
                (-beta, -alpha)
            } else {
                (-INFINITY, INFINITY)
            };
            let score = -self
                .negamax(&child, depth - 1, child_alpha, child_beta, to_move.other(), rng)?
                .score;

            if score > best {
                best = score;
                best_column = col;
            }

            if self.pruning {
                alpha = alpha.max(best);
                if alpha >= beta {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
        }

        Ok(SearchResult {
            column: Some(best_column),
            score: best,
        })
    }
}

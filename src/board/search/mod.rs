//! Search module implementing fixed-depth minimax.
//!
//! Features:
//! - Minimax with alpha-beta pruning (white-relative, explicit maximizing flag)
//! - Quiescence search over captures (negamax, mover-relative)
//! - Move ordering (MVV-LVA, promotions, checks, early centre control)
//!
//! The board is shared through the whole tree by push/undo; every push is
//! made through [`Board::push_scoped`] so pruning exits cannot leak a move.

mod constants;
mod minimax;
pub mod move_order;
mod params;
mod quiescence;

use log::debug;
use shakmaty::Move;

pub use constants::{
    BOOK_MOVE_SCORE, DEFAULT_DEPTH, DEFAULT_QSEARCH_DEPTH, INFINITY, MAX_DEPTH,
};
pub use move_order::{mvv_lva_score, ScoredMove};
pub use params::SearchConfig;

use super::types::move_to_uci;
use super::Board;

/// Where the chosen move came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveSource {
    /// Picked from the opening book without searching
    Book,
    /// Found by minimax search
    Search,
    /// The side to move has no legal moves
    NoLegalMoves,
}

/// Result of a search
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found, `None` when there is no legal move
    pub best_move: Option<Move>,
    /// White-relative centipawn score of `best_move`
    pub score: i32,
    pub source: MoveSource,
    pub stats: SearchStats,
}

impl SearchResult {
    /// Result for a position without legal moves.
    #[must_use]
    pub fn no_move() -> Self {
        SearchResult {
            best_move: None,
            score: 0,
            source: MoveSource::NoLegalMoves,
            stats: SearchStats::default(),
        }
    }

    /// Result for a move taken straight from the opening book.
    #[must_use]
    pub fn book(m: Move) -> Self {
        SearchResult {
            best_move: Some(m),
            score: BOOK_MOVE_SCORE,
            source: MoveSource::Book,
            stats: SearchStats::default(),
        }
    }
}

/// Statistics tracked during search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Minimax nodes visited
    pub nodes: u64,
    /// Quiescence nodes visited
    pub qnodes: u64,
}

impl SearchStats {
    #[must_use]
    pub fn total_nodes(&self) -> u64 {
        self.nodes + self.qnodes
    }
}

/// Search context for a single search.
///
/// Holds the limits and counters; the board is passed to each call so a
/// pushed child can be borrowed independently of the searcher.
pub struct Searcher<'a> {
    config: &'a SearchConfig,
    stats: SearchStats,
}

impl<'a> Searcher<'a> {
    #[must_use]
    pub fn new(config: &'a SearchConfig) -> Self {
        Searcher {
            config,
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

/// Search the position to `config.depth` plies and pick the best move.
///
/// White picks the highest score, black the lowest; ties keep the move
/// that was ordered first. A depth of 0 is treated as 1.
///
/// # Panics
/// Panics if the board is not restored to its starting state, which would
/// mean the push/undo discipline was broken.
pub fn search_position(board: &mut Board, config: &SearchConfig) -> SearchResult {
    let depth = config.depth.max(1);
    let start_ply = board.ply();

    let moves = board.order_moves();
    if moves.is_empty() {
        debug!("no legal moves in {board}");
        return SearchResult::no_move();
    }

    let root_maximizing = board.white_to_move();
    let mut searcher = Searcher::new(config);
    let mut best: Option<(Move, i32)> = None;

    for m in moves {
        let score = {
            let mut child = board.push_scoped(&m);
            searcher.minimax(&mut child, depth - 1, -INFINITY, INFINITY, !root_maximizing)
        };

        let improves = match best {
            None => true,
            Some((_, best_score)) if root_maximizing => score > best_score,
            Some((_, best_score)) => score < best_score,
        };
        if improves {
            best = Some((m, score));
        }
    }

    assert_eq!(
        board.ply(),
        start_ply,
        "search left moves on the board stack"
    );

    let stats = searcher.stats();
    match best {
        Some((m, score)) => {
            debug!(
                "depth {depth}: best {} score {score} nodes {} qnodes {}",
                move_to_uci(&m),
                stats.nodes,
                stats.qnodes
            );
            SearchResult {
                best_move: Some(m),
                score,
                source: MoveSource::Search,
                stats,
            }
        }
        None => SearchResult::no_move(),
    }
}

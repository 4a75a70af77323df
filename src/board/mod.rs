//! Chess position wrapper, evaluation and search.
//!
//! Rules (move generation, legality, attacks, notation) come from
//! `shakmaty`; this module adds push/undo stack discipline, the heuristic
//! evaluator, move ordering and the minimax search on top.
//!
//! # Example
//! ```
//! use chess_analysis::board::{search_position, Board, SearchConfig};
//!
//! let mut board = Board::new();
//! let result = search_position(&mut board, &SearchConfig::depth(1));
//! assert!(result.best_move.is_some());
//! ```

mod error;
mod eval;
pub mod eval_terms;
pub mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use error::{FenError, MoveParseError};
pub use eval::EvalBreakdown;
pub use state::{Board, MoveGuard};
pub use types::{destination, move_to_uci, piece_value, role_index, Bitboard, Color, Piece, ROLES};

pub use shakmaty::{Move, MoveList, Role, Square};

// Public API - search functions and configuration
pub use search::{
    search_position, MoveSource, SearchConfig, SearchResult, SearchStats, Searcher,
    BOOK_MOVE_SCORE, DEFAULT_DEPTH,
};

pub use eval_terms::tables::{DRAW_SCORE, MATE_SCORE};

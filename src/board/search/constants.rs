//! Search constants and parameters.
//!
//! Contains the fixed weights used by the minimax search and move ordering.

// ============================================================================
// SEARCH LIMITS
// ============================================================================

/// Default search depth in plies
pub const DEFAULT_DEPTH: u32 = 4;

/// Default quiescence extension depth at the leaves
pub const DEFAULT_QSEARCH_DEPTH: u32 = 4;

/// Deepest search accepted from a caller
pub const MAX_DEPTH: u32 = 8;

/// Window bound wider than any reachable score
pub const INFINITY: i32 = 1_000_000;

/// Score reported for a move taken from the opening book
pub const BOOK_MOVE_SCORE: i32 = 100;

// ============================================================================
// MOVE ORDERING PRIORITIES
// ============================================================================
// Higher scores = tried earlier.

/// Victim weight in the MVV-LVA capture score
pub const MVV_LVA_VICTIM_WEIGHT: i32 = 10;

/// Bonus for a move that gives check
pub const CHECK_BONUS: i32 = 300;

/// Bonus for landing in the central 4x4 early in the game
pub const CENTER_BONUS: i32 = 50;

/// Last full move at which the centre bonus applies
pub const CENTER_BONUS_MAX_FULLMOVE: u32 = 20;

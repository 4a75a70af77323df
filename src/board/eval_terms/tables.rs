//! Evaluation weights and placement tables.
//!
//! Placement tables are indexed from white's point of view (a1 = 0,
//! h8 = 63); black pieces look them up through [`pst_index`].

use once_cell::sync::Lazy;

use crate::board::types::Color;

// ============================================================================
// TERMINAL SCORES
// ============================================================================

/// Score of a position where white has delivered mate.
pub const MATE_SCORE: i32 = 20000;

/// Score of a drawn position.
pub const DRAW_SCORE: i32 = 0;

// ============================================================================
// MATERIAL + PLACEMENT
// ============================================================================

/// Bonus per rank a pawn has advanced from its own back rank
pub const PAWN_ADVANCE_BONUS: i32 = 10;

/// Penalty applied to each pawn sharing its file with a friendly pawn
pub const DOUBLED_PAWN_PENALTY: i32 = 20;

/// Penalty per half-unit of Manhattan distance between a knight and the centre
pub const KNIGHT_CENTER_HALF_STEP: i32 = 5;

/// Bonus per square attacked by a bishop
pub const BISHOP_MOBILITY_WEIGHT: i32 = 5;

/// Bonus per square attacked by a queen
pub const QUEEN_MOBILITY_WEIGHT: i32 = 2;

/// Bonus for a rook on a file without pawns of either colour
pub const ROOK_OPEN_FILE_BONUS: i32 = 30;

// ============================================================================
// KING SAFETY
// ============================================================================

/// Bonus per friendly pawn in front of the king
pub const KING_SHIELD_BONUS: i32 = 30;

/// Penalty per enemy attack on the 5x5 zone around the king
pub const KING_ZONE_ATTACK_PENALTY: i32 = 20;

/// Chebyshev radius of the king danger zone
pub const KING_ZONE_RADIUS: i32 = 2;

// ============================================================================
// MOBILITY
// ============================================================================

/// Centipawns per legal move of the side to move, before phase scaling
pub const MOBILITY_WEIGHT: i32 = 5;

/// Occupied-square count at which mobility gets full weight
pub const MOBILITY_PHASE_DIVISOR: i32 = 32;

// ============================================================================
// PIECE-SQUARE TABLES
// ============================================================================

/// Static placement bonus for a piece on a square, white's view.
pub type PieceSquareTable = [i32; 64];

/// Map a square index onto the white-oriented table for `color`.
#[inline]
#[must_use]
pub const fn pst_index(sq_idx: usize, color: Color) -> usize {
    match color {
        Color::White => sq_idx,
        Color::Black => sq_idx ^ 56,
    }
}

/// Pawns earn a bonus for every rank advanced towards promotion.
pub static PAWN_PST: Lazy<PieceSquareTable> = Lazy::new(|| {
    let mut table = [0; 64];
    for (idx, cell) in table.iter_mut().enumerate() {
        let rank = (idx / 8) as i32;
        *cell = PAWN_ADVANCE_BONUS * rank;
    }
    table
});

/// Knights lose points with their Manhattan distance from the board centre
/// (3.5, 3.5). Twice the distance is always an integer, hence half steps.
pub static KNIGHT_PST: Lazy<PieceSquareTable> = Lazy::new(|| {
    let mut table = [0; 64];
    for (idx, cell) in table.iter_mut().enumerate() {
        let file = (idx % 8) as i32;
        let rank = (idx / 8) as i32;
        let half_steps = (2 * file - 7).abs() + (2 * rank - 7).abs();
        *cell = -KNIGHT_CENTER_HALF_STEP * half_steps;
    }
    table
});

/// Roles whose placement is purely dynamic use an all-zero table.
pub static EMPTY_PST: PieceSquareTable = [0; 64];

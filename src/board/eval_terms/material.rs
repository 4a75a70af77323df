//! Material and piece placement.
//!
//! Each role maps to a static piece-square table plus a dynamic weighting
//! function, so the per-square loop never branches on the piece kind.

use once_cell::sync::Lazy;
use shakmaty::{File, Rank, Role, Square};

use crate::board::state::Board;
use crate::board::types::{piece_value, role_index, Color, Piece};

use super::tables::{
    pst_index, PieceSquareTable, BISHOP_MOBILITY_WEIGHT, DOUBLED_PAWN_PENALTY, EMPTY_PST,
    KNIGHT_PST, PAWN_PST, QUEEN_MOBILITY_WEIGHT, ROOK_OPEN_FILE_BONUS,
};

type PlacementFn = fn(&Board, Square, Color) -> i32;

struct PlacementRule {
    table: &'static PieceSquareTable,
    dynamic: PlacementFn,
}

/// Placement rules indexed by [`role_index`].
static PLACEMENT: Lazy<[PlacementRule; 6]> = Lazy::new(|| {
    [
        PlacementRule {
            table: &PAWN_PST,
            dynamic: doubled_pawn,
        },
        PlacementRule {
            table: &KNIGHT_PST,
            dynamic: no_bonus,
        },
        PlacementRule {
            table: &EMPTY_PST,
            dynamic: bishop_mobility,
        },
        PlacementRule {
            table: &EMPTY_PST,
            dynamic: rook_open_file,
        },
        PlacementRule {
            table: &EMPTY_PST,
            dynamic: queen_mobility,
        },
        PlacementRule {
            table: &EMPTY_PST,
            dynamic: no_bonus,
        },
    ]
});

fn no_bonus(_board: &Board, _sq: Square, _color: Color) -> i32 {
    0
}

fn doubled_pawn(board: &Board, sq: Square, color: Color) -> i32 {
    if board.pawns_on_file(sq.file(), Some(color)) > 1 {
        -DOUBLED_PAWN_PENALTY
    } else {
        0
    }
}

fn bishop_mobility(board: &Board, sq: Square, _color: Color) -> i32 {
    BISHOP_MOBILITY_WEIGHT * board.attacks_from(sq).count() as i32
}

fn queen_mobility(board: &Board, sq: Square, _color: Color) -> i32 {
    QUEEN_MOBILITY_WEIGHT * board.attacks_from(sq).count() as i32
}

fn rook_open_file(board: &Board, sq: Square, _color: Color) -> i32 {
    if board.pawns_on_file(sq.file(), None) == 0 {
        ROOK_OPEN_FILE_BONUS
    } else {
        0
    }
}

impl Board {
    /// Count pawns on a file, of one colour or of both when `color` is `None`.
    #[must_use]
    pub fn pawns_on_file(&self, file: File, color: Option<Color>) -> usize {
        (0..8)
            .filter_map(|rank| self.piece_at(Square::from_coords(file, Rank::new(rank))))
            .filter(|piece| piece.role == Role::Pawn)
            .filter(|piece| color.map_or(true, |c| piece.color == c))
            .count()
    }

    /// Value of a single piece on a square: material plus placement.
    #[must_use]
    pub fn placement_value(&self, piece: Piece, sq: Square) -> i32 {
        let rule = &PLACEMENT[role_index(piece.role)];
        piece_value(piece.role)
            + rule.table[pst_index(sq as usize, piece.color)]
            + (rule.dynamic)(self, sq, piece.color)
    }

    /// Material and placement for both sides.
    /// Returns score from white's perspective.
    #[must_use]
    pub fn eval_material(&self) -> i32 {
        let mut score = 0;
        for sq in self.occupied() {
            if let Some(piece) = self.piece_at(sq) {
                let value = self.placement_value(piece, sq);
                match piece.color {
                    Color::White => score += value,
                    Color::Black => score -= value,
                }
            }
        }
        score
    }
}

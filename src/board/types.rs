//! Core value types shared by evaluation and search.
//!
//! Pieces, squares and moves come from the rules collaborator (`shakmaty`);
//! this module adds the engine's view of them: material values, canonical
//! UCI rendering and the destination square a move actually lands on.

use shakmaty::{File, Move, Role, Square};

pub use shakmaty::{Bitboard, Color, Piece};

/// Every role, in ascending material order.
pub const ROLES: [Role; 6] = [
    Role::Pawn,
    Role::Knight,
    Role::Bishop,
    Role::Rook,
    Role::Queen,
    Role::King,
];

/// Get material value for a piece (in centipawns)
#[must_use]
pub const fn piece_value(role: Role) -> i32 {
    match role {
        Role::Pawn => 100,
        Role::Knight => 320,
        Role::Bishop => 330,
        Role::Rook => 500,
        Role::Queen => 900,
        Role::King => 20000,
    }
}

/// Index of a role into per-role tables (pawn = 0 .. king = 5).
#[inline]
#[must_use]
pub const fn role_index(role: Role) -> usize {
    match role {
        Role::Pawn => 0,
        Role::Knight => 1,
        Role::Bishop => 2,
        Role::Rook => 3,
        Role::Queen => 4,
        Role::King => 5,
    }
}

/// Square a move lands on. Castling is reported as the king's
/// destination (g1/c1/g8/c8), not the rook square.
#[must_use]
pub fn destination(m: &Move) -> Square {
    match *m {
        Move::Castle { king, rook } => {
            let file = if rook.file() > king.file() {
                File::G
            } else {
                File::C
            };
            Square::from_coords(file, king.rank())
        }
        _ => m.to(),
    }
}

/// Canonical UCI encoding of a move (`e2e4`, `e7e8q`, `e1g1`).
///
/// Moves are compared by this string, so it must be stable.
#[must_use]
pub fn move_to_uci(m: &Move) -> String {
    let mut uci = String::with_capacity(5);
    if let Some(from) = m.from() {
        uci.push_str(&from.to_string());
    }
    uci.push_str(&destination(m).to_string());
    if let Some(promotion) = m.promotion() {
        uci.push(promotion.char());
    }
    uci
}

//! Mobility of the side to move.
//!
//! Only the mover is scored; the term is scaled by how full the board is.

use crate::board::state::Board;
use crate::board::types::Color;

use super::tables::{MOBILITY_PHASE_DIVISOR, MOBILITY_WEIGHT};

impl Board {
    /// Legal-move bonus of the side to move.
    /// Returns score from white's perspective.
    #[must_use]
    pub fn eval_mobility(&self) -> i32 {
        let moves = self.legal_moves().len() as i32;
        let occupied = self.occupied().count() as i32;
        let bonus = moves * MOBILITY_WEIGHT * occupied / MOBILITY_PHASE_DIVISOR;
        match self.turn() {
            Color::White => bonus,
            Color::Black => -bonus,
        }
    }
}

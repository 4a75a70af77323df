//! Threatened pieces evaluation.
//!
//! A piece attacked by the opponent costs its owner the full value when
//! nothing defends it, and half the exchange loss when the cheapest
//! attacker is worth less than the piece. Kings are victims like any
//! other piece, so a side in check pays for its king at full value.

use shakmaty::Square;

use crate::board::state::Board;
use crate::board::types::{piece_value, Color};

impl Board {
    /// Cheapest piece of `color` attacking `sq`, by material value.
    #[must_use]
    pub fn cheapest_attacker_value(&self, sq: Square, color: Color) -> Option<i32> {
        self.attackers(sq, color)
            .into_iter()
            .filter_map(|from| self.piece_at(from))
            .map(|piece| piece_value(piece.role))
            .min()
    }

    /// Loss the owner of the piece on `sq` should expect from attacks on it.
    #[must_use]
    pub fn threat_loss(&self, sq: Square) -> i32 {
        let Some(piece) = self.piece_at(sq) else {
            return 0;
        };
        let Some(cheapest) = self.cheapest_attacker_value(sq, !piece.color) else {
            return 0;
        };

        let value = piece_value(piece.role);
        if self.attackers(sq, piece.color).is_empty() {
            value
        } else if cheapest < value {
            (value - cheapest) / 2
        } else {
            0
        }
    }

    /// Evaluate hanging and under-defended pieces.
    /// Returns score from white's perspective.
    #[must_use]
    pub fn eval_threats(&self) -> i32 {
        let mut score = 0;
        for sq in self.occupied() {
            let loss = self.threat_loss(sq);
            if loss == 0 {
                continue;
            }
            match self.piece_at(sq).map(|piece| piece.color) {
                Some(Color::White) => score -= loss,
                Some(Color::Black) => score += loss,
                None => {}
            }
        }
        score
    }
}

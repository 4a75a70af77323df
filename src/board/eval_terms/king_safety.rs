//! King safety evaluation.
//!
//! Pawn shield in front of the king, and enemy pressure on the 5x5 zone
//! around it.

use shakmaty::{File, Rank, Role, Square};

use crate::board::state::Board;
use crate::board::types::{Color, Piece};

use super::tables::{KING_SHIELD_BONUS, KING_ZONE_ATTACK_PENALTY, KING_ZONE_RADIUS};

impl Board {
    /// Shield bonus for one side's king.
    ///
    /// The three files are clamped at the board edge, so a king on the a- or
    /// h-file looks at its own file twice.
    #[must_use]
    pub fn king_shield(&self, color: Color) -> i32 {
        let Some(king_sq) = self.king_square(color) else {
            return 0;
        };
        let king_file = king_sq.file() as i32;
        let king_rank = king_sq.rank() as i32;

        let shield_rank = match color {
            Color::White => king_rank + 1,
            Color::Black => king_rank - 1,
        };
        if !(0..8).contains(&shield_rank) {
            return 0;
        }

        let own_pawn = Piece {
            color,
            role: Role::Pawn,
        };
        [(king_file - 1).max(0), king_file, (king_file + 1).min(7)]
            .into_iter()
            .map(|file| {
                Square::from_coords(File::new(file as u32), Rank::new(shield_rank as u32))
            })
            .filter(|&sq| self.piece_at(sq) == Some(own_pawn))
            .count() as i32
            * KING_SHIELD_BONUS
    }

    /// Enemy attacks on the zone around one side's king.
    ///
    /// Every attacker of every zone square counts, so one piece covering
    /// several zone squares is counted once per square.
    #[must_use]
    pub fn king_zone_attacks(&self, color: Color) -> i32 {
        let Some(king_sq) = self.king_square(color) else {
            return 0;
        };
        let king_file = king_sq.file() as i32;
        let king_rank = king_sq.rank() as i32;
        let enemy = !color;

        let mut attacks = 0;
        for rank in (king_rank - KING_ZONE_RADIUS).max(0)..=(king_rank + KING_ZONE_RADIUS).min(7) {
            for file in
                (king_file - KING_ZONE_RADIUS).max(0)..=(king_file + KING_ZONE_RADIUS).min(7)
            {
                let sq = Square::from_coords(File::new(file as u32), Rank::new(rank as u32));
                attacks += self.attackers(sq, enemy).count() as i32;
            }
        }
        attacks
    }

    /// Evaluate king safety for both sides.
    /// Returns score from white's perspective.
    #[must_use]
    pub fn eval_king_safety(&self) -> i32 {
        let mut score = 0;
        for color in [Color::White, Color::Black] {
            let sign = match color {
                Color::White => 1,
                Color::Black => -1,
            };
            let safety =
                self.king_shield(color) - KING_ZONE_ATTACK_PENALTY * self.king_zone_attacks(color);
            score += sign * safety;
        }
        score
    }
}

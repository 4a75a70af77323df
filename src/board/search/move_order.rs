//! Move ordering utilities for search.
//!
//! Captures by MVV-LVA, then promotions, checks and early central moves.
//! Ordering only permutes the legal move list.

use std::cmp::Reverse;

use shakmaty::Move;

use super::constants::{
    CENTER_BONUS, CENTER_BONUS_MAX_FULLMOVE, CHECK_BONUS, MVV_LVA_VICTIM_WEIGHT,
};
use crate::board::types::{destination, piece_value};
use crate::board::Board;

/// A move paired with its ordering priority.
#[derive(Debug, Clone)]
pub struct ScoredMove {
    pub mv: Move,
    pub score: i32,
}

/// MVV-LVA score of a capture, 0 for quiet moves.
#[must_use]
pub fn mvv_lva_score(m: &Move) -> i32 {
    match m.capture() {
        Some(victim) => MVV_LVA_VICTIM_WEIGHT * piece_value(victim) - piece_value(m.role()),
        None => 0,
    }
}

/// Stable descending sort, so equal scores keep generation order.
fn sort_by_score_desc(scored: &mut [ScoredMove]) {
    scored.sort_by_key(|s| Reverse(s.score));
}

impl Board {
    /// Ordering priority of a legal move in this position.
    #[must_use]
    pub fn move_order_score(&self, m: &Move) -> i32 {
        let mut score = mvv_lva_score(m);

        if let Some(promotion) = m.promotion() {
            score += piece_value(promotion);
        }

        if self.gives_check(m) {
            score += CHECK_BONUS;
        }

        if self.fullmove_number() <= CENTER_BONUS_MAX_FULLMOVE {
            let to = destination(m);
            let file = to.file() as u32;
            let rank = to.rank() as u32;
            if (2..=5).contains(&file) && (2..=5).contains(&rank) {
                score += CENTER_BONUS;
            }
        }

        score
    }

    /// Legal moves with their ordering scores, best first.
    #[must_use]
    pub fn scored_moves(&self) -> Vec<ScoredMove> {
        let mut scored: Vec<ScoredMove> = self
            .legal_moves()
            .into_iter()
            .map(|mv| {
                let score = self.move_order_score(&mv);
                ScoredMove { mv, score }
            })
            .collect();
        sort_by_score_desc(&mut scored);
        scored
    }

    /// Legal moves, best first.
    #[must_use]
    pub fn order_moves(&self) -> Vec<Move> {
        self.scored_moves().into_iter().map(|s| s.mv).collect()
    }

    /// Capturing moves only, in the same order as [`Board::order_moves`].
    #[must_use]
    pub fn order_captures(&self) -> Vec<Move> {
        let mut scored: Vec<ScoredMove> = self
            .legal_moves()
            .into_iter()
            .filter(|mv| self.is_capture(mv))
            .map(|mv| {
                let score = self.move_order_score(&mv);
                ScoredMove { mv, score }
            })
            .collect();
        sort_by_score_desc(&mut scored);
        scored.into_iter().map(|s| s.mv).collect()
    }
}

//! Static position evaluation.
//!
//! Scores are centipawns from white's perspective. Checkmate and draws are
//! reported as exact sentinels and bypass every heuristic term.

use super::eval_terms::tables::{DRAW_SCORE, MATE_SCORE};
use super::{Board, Color};

/// Per-term evaluation, all from white's perspective.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvalBreakdown {
    /// Set for checkmate, stalemate and insufficient material; the other
    /// terms are left at zero in that case.
    pub terminal: Option<i32>,
    pub material: i32,
    pub king_safety: i32,
    pub threats: i32,
    pub mobility: i32,
}

impl EvalBreakdown {
    #[must_use]
    pub fn total(&self) -> i32 {
        match self.terminal {
            Some(score) => score,
            None => self.material + self.king_safety + self.threats + self.mobility,
        }
    }
}

impl Board {
    /// Exact score of a finished position, if it is one.
    #[must_use]
    pub fn terminal_score(&self) -> Option<i32> {
        if self.is_checkmate() {
            return Some(match self.turn() {
                Color::White => -MATE_SCORE,
                Color::Black => MATE_SCORE,
            });
        }
        if self.is_stalemate() || self.is_insufficient_material() {
            return Some(DRAW_SCORE);
        }
        None
    }

    /// Evaluate every term separately.
    #[must_use]
    pub fn eval_breakdown(&self) -> EvalBreakdown {
        if let Some(score) = self.terminal_score() {
            return EvalBreakdown {
                terminal: Some(score),
                ..EvalBreakdown::default()
            };
        }
        EvalBreakdown {
            terminal: None,
            material: self.eval_material(),
            king_safety: self.eval_king_safety(),
            threats: self.eval_threats(),
            mobility: self.eval_mobility(),
        }
    }

    /// Evaluate the position. Returns score from white's perspective.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        self.eval_breakdown().total()
    }

    /// Evaluate from the perspective of the side to move.
    #[must_use]
    pub fn evaluate_relative(&self) -> i32 {
        let score = self.evaluate();
        match self.turn() {
            Color::White => score,
            Color::Black => -score,
        }
    }
}

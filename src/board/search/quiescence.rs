use super::Searcher;
use crate::board::Board;

impl Searcher<'_> {
    /// Capture-only quiescence search (negamax).
    ///
    /// Scores are relative to the side to move at each node; the caller
    /// negates the child's score and swaps the window. Fails hard: the
    /// result is clamped to `[alpha, beta]`.
    pub fn quiescence(&mut self, board: &mut Board, mut alpha: i32, beta: i32, depth: u32) -> i32 {
        self.stats.qnodes += 1;

        let stand_pat = board.evaluate_relative();

        // Depth limit
        if depth == 0 {
            return stand_pat;
        }

        // Stand pat
        if stand_pat >= beta {
            return beta;
        }
        alpha = alpha.max(stand_pat);

        for m in board.order_captures() {
            let score = {
                let mut child = board.push_scoped(&m);
                -self.quiescence(&mut child, -beta, -alpha, depth - 1)
            };

            if score >= beta {
                return beta;
            }
            alpha = alpha.max(score);
        }

        alpha
    }
}

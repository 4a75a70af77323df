use super::constants::INFINITY;
use super::Searcher;
use crate::board::eval_terms::tables::{DRAW_SCORE, MATE_SCORE};
use crate::board::{Board, Color};

impl Searcher<'_> {
    /// Minimax with alpha-beta pruning.
    ///
    /// Scores are white-relative: the maximizing side is white. At depth 0
    /// the quiescence search takes over; its mover-relative result is
    /// converted back at this boundary.
    pub fn minimax(
        &mut self,
        board: &mut Board,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.stats.nodes += 1;

        if depth == 0 {
            let qdepth = self.config.quiescence_depth;
            return match board.turn() {
                Color::White => self.quiescence(board, alpha, beta, qdepth),
                Color::Black => -self.quiescence(board, -beta, -alpha, qdepth),
            };
        }

        if board.is_game_over() {
            if board.is_checkmate() {
                return match board.turn() {
                    Color::White => -MATE_SCORE,
                    Color::Black => MATE_SCORE,
                };
            }
            return DRAW_SCORE;
        }

        let moves = board.order_moves();

        if maximizing {
            let mut best = -INFINITY;
            for m in &moves {
                let score = {
                    let mut child = board.push_scoped(m);
                    self.minimax(&mut child, depth - 1, alpha, beta, false)
                };
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = INFINITY;
            for m in &moves {
                let score = {
                    let mut child = board.push_scoped(m);
                    self.minimax(&mut child, depth - 1, alpha, beta, true)
                };
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}

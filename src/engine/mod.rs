//! Engine entrypoint.
//!
//! Composes the opening book and the search: a position comes in as FEN,
//! the best move and its raw white-relative score go out. Perspective
//! flipping and unit conversion are left to the caller.

mod error;

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub use error::EngineError;

use crate::board::{move_to_uci, search_position, Board, MoveSource, SearchConfig, SearchResult};
use crate::book::{OpeningBook, STANDARD_BOOK};

/// Outcome of analysing one position.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Analysis {
    /// Best move in UCI notation, `None` when no legal move exists
    pub best_move: Option<String>,
    /// Best move in SAN, `None` when no legal move exists
    pub san: Option<String>,
    /// White-relative centipawns
    pub score: i32,
    pub source: MoveSource,
    /// Minimax plus quiescence nodes visited
    pub nodes: u64,
}

impl Analysis {
    fn from_result(board: &Board, result: &SearchResult) -> Self {
        Analysis {
            best_move: result.best_move.as_ref().map(move_to_uci),
            san: result.best_move.as_ref().map(|m| board.to_san(m)),
            score: result.score,
            source: result.source,
            nodes: result.stats.total_nodes(),
        }
    }
}

/// Book-then-search move picker.
///
/// Generic over the random source used for book picks so tests can seed it.
pub struct Engine<R: Rng = StdRng> {
    config: SearchConfig,
    book: OpeningBook,
    rng: R,
}

impl Engine<StdRng> {
    /// Engine with the standard book and an entropy-seeded generator.
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Engine::with_rng(config, StdRng::from_entropy())
    }

    /// Engine whose book picks are reproducible.
    #[must_use]
    pub fn seeded(config: SearchConfig, seed: u64) -> Self {
        Engine::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl Default for Engine<StdRng> {
    fn default() -> Self {
        Engine::new(SearchConfig::default())
    }
}

impl<R: Rng> Engine<R> {
    #[must_use]
    pub fn with_rng(config: SearchConfig, rng: R) -> Self {
        Engine {
            config,
            book: STANDARD_BOOK.clone(),
            rng,
        }
    }

    /// Replace the opening book.
    #[must_use]
    pub fn with_book(mut self, book: OpeningBook) -> Self {
        self.book = book;
        self
    }

    /// Best move for a board, consulting the book first.
    ///
    /// The board is returned in the state it was given.
    fn best_move(&mut self, board: &mut Board, config: &SearchConfig) -> SearchResult {
        if let Some(m) = self.book.pick(board, &mut self.rng) {
            return SearchResult::book(m);
        }
        search_position(board, config)
    }

    /// Analyse a FEN position, optionally overriding the search depth.
    ///
    /// # Errors
    /// [`EngineError::InvalidPosition`] for a malformed FEN and
    /// [`EngineError::InvalidDepth`] for a depth outside `1..=max_depth`.
    /// A position without legal moves is not an error; it yields an
    /// analysis with no move and score 0.
    pub fn analyze(&mut self, fen: &str, depth: Option<u32>) -> Result<Analysis, EngineError> {
        let mut config = self.config.clone();
        if let Some(depth) = depth {
            if !config.accepts_depth(depth) {
                return Err(EngineError::InvalidDepth {
                    depth,
                    max_depth: config.max_depth,
                });
            }
            config.depth = depth;
        }

        let mut board = Board::from_fen(fen)?;
        let result = self.best_move(&mut board, &config);
        let analysis = Analysis::from_result(&board, &result);

        info!(
            "analysed {fen} at depth {}: {} ({:?}) score {}",
            config.depth,
            analysis.best_move.as_deref().unwrap_or("(none)"),
            analysis.source,
            analysis.score
        );
        Ok(analysis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::FenError;
    use crate::book::{AFTER_E4_FEN, START_FEN};

    #[test]
    fn start_position_uses_book() {
        let mut engine = Engine::seeded(SearchConfig::default(), 1);
        let analysis = engine.analyze(START_FEN, None).expect("valid");
        assert_eq!(analysis.source, MoveSource::Book);
        assert_eq!(analysis.score, 100);
        let mv = analysis.best_move.expect("book move");
        assert!(mv == "e2e4" || mv == "d2d4", "{mv}");
        assert_eq!(analysis.nodes, 0);
    }

    #[test]
    fn after_e4_uses_book() {
        let mut engine = Engine::seeded(SearchConfig::default(), 9);
        let analysis = engine.analyze(AFTER_E4_FEN, None).expect("valid");
        let mv = analysis.best_move.expect("book move");
        assert!(["e7e5", "e7e6", "c7c5"].contains(&mv.as_str()), "{mv}");
    }

    #[test]
    fn malformed_fen_is_rejected() {
        let mut engine = Engine::seeded(SearchConfig::default(), 1);
        let err = engine.analyze("definitely not a fen", None).unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidPosition(FenError::Syntax { .. })
        ));
        assert!(matches!(
            engine.analyze("   ", None),
            Err(EngineError::InvalidPosition(FenError::Empty))
        ));
    }

    #[test]
    fn depth_override_is_validated() {
        let mut engine = Engine::seeded(SearchConfig::default(), 1);
        assert_eq!(
            engine.analyze(START_FEN, Some(0)),
            Err(EngineError::InvalidDepth {
                depth: 0,
                max_depth: 8
            })
        );
        assert!(engine.analyze(START_FEN, Some(9)).is_err());
    }

    #[test]
    fn configured_max_depth_bounds_overrides() {
        let config = SearchConfig::depth(1).with_max_depth(3);
        let mut engine = Engine::seeded(config, 1).with_book(OpeningBook::empty());
        assert_eq!(
            engine.analyze(START_FEN, Some(4)),
            Err(EngineError::InvalidDepth {
                depth: 4,
                max_depth: 3
            })
        );
        let analysis = engine.analyze(START_FEN, Some(2)).expect("depth within bound");
        assert_eq!(analysis.source, MoveSource::Search);
    }

    #[test]
    fn checkmated_side_gets_no_move() {
        // Fool's mate, white to move and mated
        let fen = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3";
        let mut engine = Engine::seeded(SearchConfig::default(), 1);
        let analysis = engine.analyze(fen, None).expect("valid");
        assert_eq!(analysis.best_move, None);
        assert_eq!(analysis.san, None);
        assert_eq!(analysis.score, 0);
        assert_eq!(analysis.source, MoveSource::NoLegalMoves);
    }

    #[test]
    fn empty_book_searches_start_position() {
        let mut engine =
            Engine::seeded(SearchConfig::depth(1), 1).with_book(OpeningBook::empty());
        let analysis = engine.analyze(START_FEN, None).expect("valid");
        assert_eq!(analysis.source, MoveSource::Search);
        assert!(analysis.nodes > 0);
        assert!(analysis.san.is_some());
    }
}

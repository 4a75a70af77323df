//! End-to-end tests through the engine entrypoint.

use chess_analysis::board::MoveSource;
use chess_analysis::book::{OpeningBook, AFTER_D4_FEN, AFTER_E4_FEN, START_FEN};
use chess_analysis::{Board, Engine, EngineError, SearchConfig};

fn engine(seed: u64) -> Engine {
    Engine::seeded(SearchConfig::default(), seed)
}

#[test]
fn start_position_replies_from_book() {
    for seed in 0..16 {
        let analysis = engine(seed).analyze(START_FEN, None).expect("valid fen");
        let mv = analysis.best_move.expect("book move");
        assert!(mv == "e2e4" || mv == "d2d4", "seed {seed}: {mv}");
        assert_eq!(analysis.score, 100);
        assert_eq!(analysis.source, MoveSource::Book);
    }
}

#[test]
fn book_replies_for_black() {
    for seed in 0..8 {
        let after_e4 = engine(seed).analyze(AFTER_E4_FEN, None).expect("valid fen");
        let mv = after_e4.best_move.expect("book move");
        assert!(["e7e5", "e7e6", "c7c5"].contains(&mv.as_str()), "{mv}");

        let after_d4 = engine(seed).analyze(AFTER_D4_FEN, None).expect("valid fen");
        let mv = after_d4.best_move.expect("book move");
        assert!(["d7d5", "g8f6", "e7e6"].contains(&mv.as_str()), "{mv}");
    }
}

#[test]
fn board_fen_after_e4_matches_book_key() {
    let mut board = Board::new();
    let e4 = board.find_move("e2e4").expect("legal");
    board.push(&e4);
    assert_eq!(board.to_fen(), AFTER_E4_FEN);
}

#[test]
fn seeded_engines_agree() {
    let first = engine(42).analyze(START_FEN, None).expect("valid fen");
    let second = engine(42).analyze(START_FEN, None).expect("valid fen");
    assert_eq!(first, second);
}

#[test]
fn out_of_book_position_is_searched() {
    let fen = "6k1/5ppp/8/8/8/8/8/4Q2K w - - 0 1";
    let analysis = engine(1).analyze(fen, Some(1)).expect("valid fen");
    assert_eq!(analysis.source, MoveSource::Search);
    assert_eq!(analysis.best_move.as_deref(), Some("e1e8"));
    assert_eq!(analysis.san.as_deref(), Some("Qe8#"));
    assert_eq!(analysis.score, 20000);
    assert!(analysis.nodes > 0);
}

#[test]
fn empty_book_searches_start_position() {
    let mut engine = engine(1).with_book(OpeningBook::empty());
    let analysis = engine.analyze(START_FEN, Some(1)).expect("valid fen");
    assert_eq!(analysis.source, MoveSource::Search);
    assert!(analysis.best_move.is_some());
}

#[test]
fn stalemate_returns_no_move() {
    let analysis = engine(1)
        .analyze("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1", None)
        .expect("valid fen");
    assert_eq!(analysis.best_move, None);
    assert_eq!(analysis.score, 0);
    assert_eq!(analysis.source, MoveSource::NoLegalMoves);
}

#[test]
fn invalid_input_is_an_error() {
    assert!(matches!(
        engine(1).analyze("rnbqkbnr/pppppppp/8/8 w", None),
        Err(EngineError::InvalidPosition(_))
    ));
    assert!(matches!(
        engine(1).analyze(START_FEN, Some(0)),
        Err(EngineError::InvalidDepth { depth: 0, .. })
    ));
}

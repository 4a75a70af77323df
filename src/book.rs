//! Opening book keyed by exact FEN.
//!
//! Lookups are byte-for-byte on the board's canonical FEN: no
//! normalisation, no transposition detection. Anything not stored falls
//! through to search.

use std::collections::HashMap;

use log::warn;
use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, Move};

/// Starting position
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// After 1.e4
pub const AFTER_E4_FEN: &str = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1";

/// After 1.d4
pub const AFTER_D4_FEN: &str = "rnbqkbnr/pppppppp/8/8/3P4/8/PPP1PPPP/RNBQKBNR b KQkq - 0 1";

/// The built-in book, shared by every engine that does not supply its own.
pub static STANDARD_BOOK: Lazy<OpeningBook> = Lazy::new(OpeningBook::standard);

#[derive(Debug, Clone, Default)]
pub struct OpeningBook {
    entries: HashMap<String, Vec<String>>,
}

impl OpeningBook {
    /// Empty book; every position falls through to search.
    #[must_use]
    pub fn empty() -> Self {
        OpeningBook::default()
    }

    /// Common replies for the first move of either side.
    #[must_use]
    pub fn standard() -> Self {
        OpeningBook::from_entries([
            (START_FEN, vec!["e2e4", "d2d4"]),
            (AFTER_E4_FEN, vec!["e7e5", "e7e6", "c7c5"]),
            (AFTER_D4_FEN, vec!["d7d5", "g8f6", "e7e6"]),
        ])
    }

    /// Build a book from `(fen, uci replies)` pairs.
    pub fn from_entries<I, K, V, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(fen, replies)| (fen.into(), replies.into_iter().map(Into::into).collect()))
            .collect();
        OpeningBook { entries }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored replies for an exact FEN.
    #[must_use]
    pub fn candidates(&self, fen: &str) -> Option<&[String]> {
        self.entries.get(fen).map(Vec::as_slice)
    }

    /// Pick a reply for the board's position uniformly at random.
    ///
    /// Replies that are not legal in the position are skipped. Returns
    /// `None` when the position is not in the book or no reply is legal.
    pub fn pick<R: Rng + ?Sized>(&self, board: &Board, rng: &mut R) -> Option<Move> {
        let fen = board.to_fen();
        let candidates = self.candidates(&fen)?;

        let legal: Vec<Move> = candidates
            .iter()
            .filter_map(|uci| match board.find_move(uci) {
                Ok(m) => Some(m),
                Err(err) => {
                    warn!("skipping book reply for {fen}: {err}");
                    None
                }
            })
            .collect();

        legal.choose(rng).cloned()
    }
}

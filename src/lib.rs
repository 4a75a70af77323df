pub mod board;
pub mod book;
pub mod engine;

pub use board::{Board, Color, Move, SearchConfig, SearchResult};
pub use book::OpeningBook;
pub use engine::{Analysis, Engine, EngineError};

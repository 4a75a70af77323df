//! Errors surfaced to callers of the engine entrypoint.

use std::fmt;

use crate::board::FenError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The position string could not be turned into a board
    InvalidPosition(FenError),
    /// Requested depth is 0 or above the configured maximum
    InvalidDepth { depth: u32, max_depth: u32 },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidPosition(err) => write!(f, "Invalid position: {err}"),
            EngineError::InvalidDepth { depth, max_depth } => {
                write!(f, "Search depth {depth} out of range (1-{max_depth})")
            }
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::InvalidPosition(err) => Some(err),
            EngineError::InvalidDepth { .. } => None,
        }
    }
}

impl From<FenError> for EngineError {
    fn from(err: FenError) -> Self {
        EngineError::InvalidPosition(err)
    }
}

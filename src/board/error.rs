//! Error types for board construction and move lookup.

use std::fmt;

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string is empty or only whitespace
    Empty,
    /// FEN string is not syntactically valid
    Syntax { fen: String, reason: String },
    /// FEN parsed but describes an impossible position (e.g. missing king)
    IllegalPosition { fen: String, reason: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::Empty => write!(f, "Empty FEN string"),
            FenError::Syntax { fen, reason } => {
                write!(f, "Malformed FEN '{fen}': {reason}")
            }
            FenError::IllegalPosition { fen, reason } => {
                write!(f, "Illegal position in FEN '{fen}': {reason}")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for UCI move lookup failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    InvalidLength { len: usize },
    /// Move is well formed but not legal in the current position
    IllegalMove { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4-5 characters, found {len}")
            }
            MoveParseError::IllegalMove { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fen_error_messages_name_the_input() {
        let err = FenError::Syntax {
            fen: "not a fen".to_string(),
            reason: "invalid board part".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Malformed FEN 'not a fen': invalid board part"
        );
    }

    #[test]
    fn move_parse_error_messages() {
        assert_eq!(
            MoveParseError::InvalidLength { len: 2 }.to_string(),
            "Move must be 4-5 characters, found 2"
        );
        assert_eq!(
            MoveParseError::IllegalMove {
                notation: "e2e5".to_string()
            }
            .to_string(),
            "Illegal move 'e2e5'"
        );
    }
}

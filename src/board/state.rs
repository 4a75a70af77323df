use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use shakmaty::fen::Fen;
use shakmaty::san::SanPlus;
use shakmaty::{CastlingMode, Chess, EnPassantMode, Move, MoveList, Position, Square};

use super::error::{FenError, MoveParseError};
use super::types::{move_to_uci, Bitboard, Color, Piece};

/// Positions older than this many halfmoves without a capture or pawn move
/// are drawn automatically (seventy-five-move rule).
const SEVENTY_FIVE_MOVE_HALFMOVES: u32 = 150;

/// Mutable chess position with a push/undo stack.
///
/// All rules knowledge is delegated to `shakmaty`; the board only adds the
/// stack discipline the search relies on. Every [`Board::push`] must be
/// matched by exactly one [`Board::undo`]; [`Board::push_scoped`] ties the
/// undo to a guard so early exits cannot leak a pushed move.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) position: Chess,
    history: Vec<Chess>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Board {
            position: Chess::default(),
            history: Vec::new(),
        }
    }

    /// Build a board from a FEN string.
    ///
    /// # Errors
    /// Returns [`FenError`] when the string is malformed or describes an
    /// illegal position. No fallback position is ever substituted.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let trimmed = fen.trim();
        if trimmed.is_empty() {
            return Err(FenError::Empty);
        }

        let parsed: Fen = trimmed.parse().map_err(|err| FenError::Syntax {
            fen: trimmed.to_string(),
            reason: format!("{err}"),
        })?;

        let position: Chess =
            parsed
                .into_position(CastlingMode::Standard)
                .map_err(|err| FenError::IllegalPosition {
                    fen: trimmed.to_string(),
                    reason: format!("{err}"),
                })?;

        Ok(Board {
            position,
            history: Vec::new(),
        })
    }

    /// Canonical FEN of the current position.
    ///
    /// The en passant square is only written when a legal en passant
    /// capture exists, so positions compare byte-for-byte with book keys.
    #[must_use]
    pub fn to_fen(&self) -> String {
        Fen::from_position(self.position.clone(), EnPassantMode::Legal).to_string()
    }

    #[must_use]
    pub fn turn(&self) -> Color {
        self.position.turn()
    }

    #[must_use]
    pub fn white_to_move(&self) -> bool {
        self.position.turn() == Color::White
    }

    /// Number of outstanding pushes.
    #[must_use]
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    /// Play a legal move, remembering the previous position.
    pub fn push(&mut self, m: &Move) {
        let mut next = self.position.clone();
        next.play_unchecked(m);
        let previous = std::mem::replace(&mut self.position, next);
        self.history.push(previous);
    }

    /// Take back the most recent push.
    ///
    /// # Panics
    /// Panics when there is no push to undo; that is a broken stack
    /// discipline, not a recoverable condition.
    pub fn undo(&mut self) {
        match self.history.pop() {
            Some(previous) => self.position = previous,
            None => panic!("undo called without a matching push"),
        }
    }

    /// Push a move and return a guard that undoes it when dropped.
    pub fn push_scoped(&mut self, m: &Move) -> MoveGuard<'_> {
        self.push(m);
        MoveGuard { board: self }
    }

    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        self.position.legal_moves()
    }

    #[must_use]
    pub fn is_check(&self) -> bool {
        self.position.is_check()
    }

    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.position.is_checkmate()
    }

    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        self.position.is_stalemate()
    }

    #[must_use]
    pub fn is_insufficient_material(&self) -> bool {
        self.position.is_insufficient_material()
    }

    #[must_use]
    pub fn is_seventy_five_moves(&self) -> bool {
        self.position.halfmoves() >= SEVENTY_FIVE_MOVE_HALFMOVES
    }

    /// Checkmate, stalemate, insufficient material or the 75-move rule.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.position.legal_moves().is_empty()
            || self.is_insufficient_material()
            || self.is_seventy_five_moves()
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.position.fullmoves().get()
    }

    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.position.board().piece_at(sq)
    }

    #[must_use]
    pub fn occupied(&self) -> Bitboard {
        self.position.board().occupied()
    }

    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.position.board().king_of(color)
    }

    /// Pieces of `color` attacking `sq` with the current occupancy.
    #[must_use]
    pub fn attackers(&self, sq: Square, color: Color) -> Bitboard {
        let board = self.position.board();
        board.attacks_to(sq, color, board.occupied())
    }

    /// Squares attacked by the piece standing on `sq` (empty if none).
    #[must_use]
    pub fn attacks_from(&self, sq: Square) -> Bitboard {
        self.position.board().attacks_from(sq)
    }

    #[must_use]
    pub fn is_capture(&self, m: &Move) -> bool {
        m.is_capture()
    }

    /// Whether playing `m` leaves the opponent in check.
    #[must_use]
    pub fn gives_check(&self, m: &Move) -> bool {
        let mut next = self.position.clone();
        next.play_unchecked(m);
        next.is_check()
    }

    /// Standard algebraic notation, with check/mate suffix.
    #[must_use]
    pub fn to_san(&self, m: &Move) -> String {
        SanPlus::from_move(self.position.clone(), m).to_string()
    }

    /// Find the legal move with the given UCI encoding.
    ///
    /// # Errors
    /// Returns [`MoveParseError`] for a badly sized string or a move that
    /// is not legal here.
    pub fn find_move(&self, uci: &str) -> Result<Move, MoveParseError> {
        let uci = uci.trim();
        if !(4..=5).contains(&uci.len()) {
            return Err(MoveParseError::InvalidLength { len: uci.len() });
        }
        self.legal_moves()
            .into_iter()
            .find(|m| move_to_uci(m) == uci)
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: uci.to_string(),
            })
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_fen(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fen())
    }
}

/// A pushed move that is undone when the guard goes out of scope.
///
/// Dereferences to the board in its post-move state.
pub struct MoveGuard<'a> {
    board: &'a mut Board,
}

impl Deref for MoveGuard<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for MoveGuard<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        self.board.undo();
    }
}

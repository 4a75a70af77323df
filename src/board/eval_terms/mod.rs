//! Evaluation terms.
//!
//! Contains evaluation functions for:
//! - Material and placement (piece-square tables plus per-role bonuses)
//! - King safety (pawn shield, attacks on the king zone)
//! - Threats (hanging and under-defended pieces)
//! - Mobility (side to move only)

mod king_safety;
mod material;
mod mobility;
pub mod tables;
mod threats;

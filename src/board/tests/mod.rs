//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `eval.rs` - Evaluation terms and terminal scores
//! - `move_order.rs` - Move ordering priorities
//! - `push_undo.rs` - Push/undo stack discipline
//! - `search.rs` - Minimax, quiescence and root search
//! - `proptest.rs` - Property-based tests


use crate::board::Board;

pub(super) fn make_board(fen: &str) -> Board {
    fen.parse().expect("valid fen")
}

/// Swap colours and flip the board vertically.
///
/// The mirrored position is the same game with white and black exchanged,
/// so every white-relative score must change sign.
pub(super) fn mirror_fen(fen: &str) -> String {
    let parts: Vec<&str> = fen.split_whitespace().collect();

    let placement = parts[0]
        .split('/')
        .rev()
        .map(swap_case)
        .collect::<Vec<_>>()
        .join("/");

    let turn = if parts[1] == "w" { "b" } else { "w" };

    let castling = if parts[2] == "-" {
        "-".to_string()
    } else {
        let swapped = swap_case(parts[2]);
        "KQkq".chars().filter(|c| swapped.contains(*c)).collect()
    };

    let en_passant = match parts[3] {
        "-" => "-".to_string(),
        sq => {
            let file = &sq[..1];
            let rank = if &sq[1..] == "3" { "6" } else { "3" };
            format!("{file}{rank}")
        }
    };

    let mut mirrored = vec![placement, turn.to_string(), castling, en_passant];
    mirrored.extend(parts[4..].iter().map(|s| (*s).to_string()));
    mirrored.join(" ")
}

fn swap_case(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                c.to_ascii_lowercase()
            } else {
                c.to_ascii_uppercase()
            }
        })
        .collect()
}

#[test]
fn mirror_of_start_position_is_start_with_black_to_move() {
    let mirrored = mirror_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    assert_eq!(
        mirrored,
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1"
    );
}

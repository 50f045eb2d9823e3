//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move generation counts against reference values
//! - `draw.rs` - Fifty-move rule, repetition and stalemate
//! - `edge_cases.rs` - Castling, en passant, promotion and pins
//! - `eval.rs` - Position value heuristic
//! - `search.rs` - Difficulty tiers
//! - `proptest.rs` - Property-based tests over random games

mod draw;
mod edge_cases;
mod proptest;

use crate::board::{Move, Position};

/// Apply a coordinate-notation move that must be legal.
pub(super) fn play(position: &Position, text: &str) -> Position {
    let mv = position
        .parse_move(text)
        .unwrap_or_else(|e| panic!("{text} in {position}: {e}"));
    position.apply(&mv)
}

/// Apply a whole sequence of coordinate-notation moves.
pub(super) fn play_all(position: &Position, moves: &[&str]) -> Position {
    moves.iter().fold(position.clone(), |p, text| play(&p, text))
}

pub(super) fn find(position: &Position, text: &str) -> Option<Move> {
    position.legal_moves().into_iter().find(|mv| mv.to_string() == text)
}

//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//! ```

pub use super::{
    best_move, ChessError, Color, Difficulty, Move, MoveError, PdnError, Piece, Position,
    PositionBuilder, SearchConfig, Square, Status, StatusCache,
};

//! Chess rules: position representation, move generation and legality,
//! game-state detection, position value and move search.
//!
//! Positions have value semantics. Applying a move returns a new position,
//! so legality checks and search branches each work on their own copy.
//!
//! # Example
//! ```
//! use chess_rules::board::{Position, Square};
//!
//! let position = Position::new();
//! let moves = position.legal_moves();
//! println!("Starting position has {} legal moves", moves.len());
//!
//! let e2 = Square(1, 4);
//! assert_eq!(position.legal_moves_for(e2).len(), 2);
//! ```

mod apply;
mod attack_tables;
mod builder;
mod error;
mod eval;
mod legal;
mod movegen;
mod pdn;
pub mod prelude;
pub mod search;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

pub use builder::PositionBuilder;
pub use error::{ChessError, MoveError, PdnError, SquareError};
pub use eval::{EvalWeights, MATERIAL_SCALE, MATE_VALUE, STALEMATE_VALUE};
pub use pdn::START_PDN;
pub use state::{Position, PositionKey};
pub use status::{
    repetition_count, StalemateReason, Status, StatusCache, FIFTY_MOVE_LIMIT, REPETITION_LIMIT,
    STATUS_CACHE_CAPACITY,
};
pub use types::{CastleSide, CastlingRights, Color, Move, Piece, Square};

pub use search::{best_move, Difficulty, SearchConfig, SearchJob, SearchResult};

pub(crate) use types::PROMOTION_PIECES;

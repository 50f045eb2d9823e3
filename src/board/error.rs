//! Error types for position parsing and move application.

use thiserror::Error;

use super::Color;

/// Reasons a PDN string is rejected as malformed input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PdnError {
    /// PDN string does not have exactly six space-separated fields
    #[error("PDN must have 6 fields, found {found}")]
    WrongFieldCount { found: usize },
    /// Board layout does not have eight ranks
    #[error("board layout must have 8 ranks, found {found}")]
    WrongRankCount { found: usize },
    /// A rank does not describe exactly eight files
    #[error("rank {rank} describes {files} files, expected 8")]
    WrongRankWidth { rank: usize, files: usize },
    /// Invalid piece character in board layout
    #[error("invalid piece character '{char}' in PDN")]
    InvalidPiece { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    #[error("invalid side to move '{found}', expected 'w' or 'b'")]
    InvalidSideToMove { found: String },
    /// Castling field has an unknown letter, a duplicate, or non-canonical order
    #[error("invalid castling rights '{found}'")]
    InvalidCastling { found: String },
    /// En-passant field is not a square on rank 3 or 6, or no pawn could
    /// have just skipped over it
    #[error("invalid en passant square '{found}'")]
    InvalidEnPassant { found: String },
    /// Halfmove clock or fullmove number is not a valid count
    #[error("invalid {field} '{found}'")]
    InvalidCounter { field: &'static str, found: String },
    /// A side does not have exactly one king
    #[error("{color} must have exactly one king, found {found}")]
    KingCount { color: Color, found: usize },
}

/// Error type for move parsing and application failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    /// Move text is not coordinate notation (e.g. "e2e4", "e7e8q")
    #[error("invalid move notation '{notation}'")]
    InvalidNotation { notation: String },
    /// Move is not legal in the current position
    #[error("illegal move '{notation}'")]
    IllegalMove { notation: String },
}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    #[error("rank {rank} out of bounds (must be 0-7)")]
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    #[error("file {file} out of bounds (must be 0-7)")]
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    #[error("invalid square notation '{notation}'")]
    InvalidNotation { notation: String },
}

/// Failures surfaced to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    #[error("malformed input: {0}")]
    MalformedInput(#[from] PdnError),
    #[error(transparent)]
    IllegalMove(#[from] MoveError),
}

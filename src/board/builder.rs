//! Piece-by-piece position setup.
//!
//! Handy for tests and puzzles where spelling out a PDN string is noisy.
//!
//! # Example
//! ```
//! use chess_rules::board::{PositionBuilder, Color, Piece, Square};
//!
//! let position = PositionBuilder::new()
//!     .piece(Square(0, 4), Color::White, Piece::King)
//!     .piece(Square(7, 4), Color::Black, Piece::King)
//!     .piece(Square(1, 0), Color::White, Piece::Pawn)
//!     .build()
//!     .unwrap();
//! assert_eq!(position.to_pdn(), "4k3/8/8/8/8/8/P7/4K3 w - - 0 1");
//! ```

use super::error::PdnError;
use super::{CastleSide, CastlingRights, Color, Piece, Position, Square};

/// Accumulates a position without validating it until [`build`](Self::build).
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    draft: Position,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// An empty board, White to move, no rights.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            draft: Position::empty(),
        }
    }

    #[must_use]
    pub fn starting_position() -> Self {
        PositionBuilder {
            draft: Position::new(),
        }
    }

    /// Put a piece on `square`, replacing any occupant.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.draft.place(square, color, piece);
        self
    }

    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.draft.remove(square);
        self
    }

    #[must_use]
    pub fn side_to_move(mut self, color: Color) -> Self {
        self.draft.side_to_move = color;
        self
    }

    /// Replace every castling right at once.
    #[must_use]
    pub fn castling(mut self, rights: CastlingRights) -> Self {
        self.draft.castling_rights = rights;
        self
    }

    /// Grant one castling right.
    #[must_use]
    pub fn castle(mut self, color: Color, side: CastleSide) -> Self {
        self.draft.castling_rights.set(color, side);
        self
    }

    #[must_use]
    pub fn en_passant(mut self, target: Square) -> Self {
        self.draft.en_passant_target = Some(target);
        self
    }

    /// Halfmoves since the last capture or pawn move.
    #[must_use]
    pub fn halfmove_clock(mut self, clock: u32) -> Self {
        self.draft.halfmove_clock = clock;
        self
    }

    #[must_use]
    pub fn fullmove_number(mut self, number: u32) -> Self {
        self.draft.fullmove_number = number;
        self
    }

    /// Validate and return the position.
    ///
    /// The draft goes through PDN import, so a missing king or an
    /// impossible en-passant target fails here the same way it would there.
    pub fn build(self) -> Result<Position, PdnError> {
        Position::from_pdn(&self.draft.to_pdn())
    }
}

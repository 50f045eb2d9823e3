//! Move type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::{CastleSide, CastlingRights};
use super::piece::Piece;
use super::square::Square;

/// A fully described transition between two positions.
///
/// Moves are plain data produced by the move generators: everything
/// `Position::apply` needs (capture square, paired rook relocation,
/// en-passant target created, rights revoked) is decided at generation time.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
    piece: Piece,
    promotion: Option<Piece>,
    captured: Option<Piece>,
    captured_square: Square,
    castle: Option<CastleSide>,
    en_passant_target: Option<Square>,
    revokes: CastlingRights,
}

impl Move {
    /// A non-capturing move of `piece`.
    #[must_use]
    pub(crate) fn quiet(from: Square, to: Square, piece: Piece) -> Self {
        Move {
            from,
            to,
            piece,
            promotion: None,
            captured: None,
            captured_square: to,
            castle: None,
            en_passant_target: None,
            revokes: CastlingRights::guarded_by(from) | CastlingRights::guarded_by(to),
        }
    }

    /// A move of `piece` taking `captured` on the destination square.
    #[must_use]
    pub(crate) fn capture(from: Square, to: Square, piece: Piece, captured: Piece) -> Self {
        Move {
            captured: Some(captured),
            ..Move::quiet(from, to, piece)
        }
    }

    /// Two-square pawn advance leaving `skipped` as the en-passant target.
    #[must_use]
    pub(crate) fn double_pawn_push(from: Square, to: Square, skipped: Square) -> Self {
        Move {
            en_passant_target: Some(skipped),
            ..Move::quiet(from, to, Piece::Pawn)
        }
    }

    /// En passant: the captured pawn sits on `victim`, not on `to`.
    #[must_use]
    pub(crate) fn en_passant(from: Square, to: Square, victim: Square) -> Self {
        Move {
            captured: Some(Piece::Pawn),
            captured_square: victim,
            ..Move::quiet(from, to, Piece::Pawn)
        }
    }

    /// King move of a castle; the rook relocation is implied by `side`.
    #[must_use]
    pub(crate) fn castle(from: Square, to: Square, side: CastleSide) -> Self {
        Move {
            castle: Some(side),
            ..Move::quiet(from, to, Piece::King)
        }
    }

    /// Replace the moving pawn with `promotion` on arrival.
    #[must_use]
    pub(crate) fn promoting(self, promotion: Piece) -> Self {
        Move {
            promotion: Some(promotion),
            ..self
        }
    }

    #[inline]
    #[must_use]
    pub const fn from(&self) -> Square {
        self.from
    }

    #[inline]
    #[must_use]
    pub const fn to(&self) -> Square {
        self.to
    }

    /// The kind of the piece being moved (a promoting move reports `Pawn`)
    #[inline]
    #[must_use]
    pub const fn piece(&self) -> Piece {
        self.piece
    }

    #[inline]
    #[must_use]
    pub const fn promotion(&self) -> Option<Piece> {
        self.promotion
    }

    /// Kind of the captured piece, if any
    #[inline]
    #[must_use]
    pub const fn captured(&self) -> Option<Piece> {
        self.captured
    }

    /// Square the captured piece is removed from (differs from `to` only
    /// for en passant)
    #[inline]
    #[must_use]
    pub const fn captured_square(&self) -> Square {
        self.captured_square
    }

    #[inline]
    #[must_use]
    pub const fn castle_side(&self) -> Option<CastleSide> {
        self.castle
    }

    /// En-passant target this move creates (double pawn pushes only)
    #[inline]
    #[must_use]
    pub const fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Castling rights this move clears
    #[inline]
    #[must_use]
    pub const fn revokes(&self) -> CastlingRights {
        self.revokes
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    #[must_use]
    pub fn is_en_passant(&self) -> bool {
        self.captured.is_some() && self.captured_square != self.to
    }

    #[inline]
    #[must_use]
    pub const fn is_castle(&self) -> bool {
        self.castle.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }

    /// Pawn moves and captures reset the fifty-move clock
    #[inline]
    #[must_use]
    pub fn is_irreversible(&self) -> bool {
        self.piece == Piece::Pawn || self.is_capture()
    }
}

/// Coordinate notation: `e2e4`, `e7e8q`, `e1g1` for castling.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(piece) = self.promotion {
            write!(f, "{}", piece.to_char())?;
        }
        Ok(())
    }
}

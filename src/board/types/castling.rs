//! Castling rights type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use super::square::Square;

pub(crate) const CASTLE_WHITE_K: u8 = 1 << 0;
pub(crate) const CASTLE_WHITE_Q: u8 = 1 << 1;
pub(crate) const CASTLE_BLACK_K: u8 = 1 << 2;
pub(crate) const CASTLE_BLACK_Q: u8 = 1 << 3;

/// All castling rights combined
pub(crate) const ALL_CASTLING_RIGHTS: u8 =
    CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// Which wing a castling move goes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// File the rook starts on
    #[must_use]
    pub(crate) const fn rook_from_file(self) -> usize {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    /// File the rook lands on
    #[must_use]
    pub(crate) const fn rook_to_file(self) -> usize {
        match self {
            CastleSide::KingSide => 5,
            CastleSide::QueenSide => 3,
        }
    }

    /// File the king lands on
    #[must_use]
    pub(crate) const fn king_to_file(self) -> usize {
        match self {
            CastleSide::KingSide => 6,
            CastleSide::QueenSide => 2,
        }
    }
}

/// Castling rights represented as a bitmask.
///
/// Within one game lineage rights are only ever removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All four castling rights
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.0 & Self::bit_for(color, side) != 0
    }

    /// Set a specific castling right
    #[inline]
    pub fn set(&mut self, color: Color, side: CastleSide) {
        self.0 |= Self::bit_for(color, side);
    }

    /// Remove a specific castling right
    #[inline]
    pub fn remove(&mut self, color: Color, side: CastleSide) {
        self.0 &= !Self::bit_for(color, side);
    }

    /// Remove every right present in `other`
    #[inline]
    pub fn revoke(&mut self, other: CastlingRights) {
        self.0 &= !other.0;
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of rights held
    #[inline]
    #[must_use]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// True when every right in `self` is also held by `other`
    #[inline]
    #[must_use]
    pub const fn is_subset_of(self, other: CastlingRights) -> bool {
        self.0 & !other.0 == 0
    }

    /// The rights that depend on a piece standing on `sq`: the king's home
    /// square guards both of that color's rights, each corner guards one.
    /// Any move leaving or landing on such a square clears them.
    #[must_use]
    pub(crate) fn guarded_by(sq: Square) -> CastlingRights {
        match (sq.rank(), sq.file()) {
            (0, 4) => CastlingRights(CASTLE_WHITE_K | CASTLE_WHITE_Q),
            (0, 7) => CastlingRights(CASTLE_WHITE_K),
            (0, 0) => CastlingRights(CASTLE_WHITE_Q),
            (7, 4) => CastlingRights(CASTLE_BLACK_K | CASTLE_BLACK_Q),
            (7, 7) => CastlingRights(CASTLE_BLACK_K),
            (7, 0) => CastlingRights(CASTLE_BLACK_Q),
            _ => CastlingRights::none(),
        }
    }

    #[inline]
    const fn bit_for(color: Color, side: CastleSide) -> u8 {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => CASTLE_WHITE_K,
            (Color::White, CastleSide::QueenSide) => CASTLE_WHITE_Q,
            (Color::Black, CastleSide::KingSide) => CASTLE_BLACK_K,
            (Color::Black, CastleSide::QueenSide) => CASTLE_BLACK_Q,
        }
    }
}

impl std::ops::BitOr for CastlingRights {
    type Output = CastlingRights;

    fn bitor(self, rhs: Self) -> Self::Output {
        CastlingRights(self.0 | rhs.0)
    }
}

/// Canonical PDN form: `KQkq` order, `-` when empty.
impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        for (bit, c) in [
            (CASTLE_WHITE_K, 'K'),
            (CASTLE_WHITE_Q, 'Q'),
            (CASTLE_BLACK_K, 'k'),
            (CASTLE_BLACK_Q, 'q'),
        ] {
            if self.0 & bit != 0 {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_canonical() {
        assert_eq!(CastlingRights::all().to_string(), "KQkq");
        assert_eq!(CastlingRights::none().to_string(), "-");

        let mut rights = CastlingRights::none();
        rights.set(Color::Black, CastleSide::QueenSide);
        rights.set(Color::White, CastleSide::KingSide);
        assert_eq!(rights.to_string(), "Kq");
    }

    #[test]
    fn guarded_squares() {
        let e1 = CastlingRights::guarded_by(Square(0, 4));
        assert!(e1.has(Color::White, CastleSide::KingSide));
        assert!(e1.has(Color::White, CastleSide::QueenSide));
        assert!(!e1.has(Color::Black, CastleSide::KingSide));

        let h8 = CastlingRights::guarded_by(Square(7, 7));
        assert_eq!(h8.count(), 1);
        assert!(h8.has(Color::Black, CastleSide::KingSide));

        assert!(CastlingRights::guarded_by(Square(3, 3)).is_empty());
    }

    #[test]
    fn revoke_only_clears() {
        let mut rights = CastlingRights::all();
        rights.revoke(CastlingRights::guarded_by(Square(0, 0)));
        assert_eq!(rights.to_string(), "Kkq");
        assert!(rights.is_subset_of(CastlingRights::all()));
    }
}

//! Static position value, signed from white's point of view.
//!
//! The simple heuristic is material only. The advanced heuristic adds small
//! bonuses read off each side's pseudo-legal moves; material always
//! dominates them.

use std::collections::HashSet;

use super::status::Status;
use super::{CastleSide, Color, Piece, Position};

/// Centipawns per unit of piece worth
pub const MATERIAL_SCALE: i32 = 100;

/// Value of a checkmate. Stands in for an unbounded score.
pub const MATE_VALUE: i32 = 1_000_000;

/// Magnitude of a stalemate when one side is ahead in material
pub const STALEMATE_VALUE: i32 = 500_000;

/// Bonus magnitudes for the advanced heuristic, in centipawns.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvalWeights {
    /// Per castling right still held while more than `early_game_pieces` remain
    pub castling_right: i32,
    pub early_game_pieces: usize,
    /// Per pseudo-legal move
    pub mobility: i32,
    /// Per opposing piece that can be captured
    pub capturable: i32,
    /// Per pawn able to promote
    pub promotion: i32,
    /// Per castling move currently available
    pub castling_move: i32,
    /// Flat bonus when the king has at least `king_escape_squares` moves
    pub king_escape: i32,
    pub king_escape_squares: usize,
}

impl Default for EvalWeights {
    fn default() -> Self {
        EvalWeights {
            castling_right: 8,
            early_game_pieces: 20,
            mobility: 2,
            capturable: 6,
            promotion: 40,
            castling_move: 12,
            king_escape: 10,
            king_escape_squares: 3,
        }
    }
}

impl Position {
    /// Value of the position with no lineage, positive favoring white.
    ///
    /// `advanced` selects the bonus terms with default weights.
    #[must_use]
    pub fn value(&self, advanced: bool) -> i32 {
        let weights = advanced.then(EvalWeights::default);
        self.evaluate(self.status(&[]), weights.as_ref())
    }

    /// Value of the position given an already computed status.
    ///
    /// Checkmate scores `MATE_VALUE` for the winner. Any stalemate scores
    /// `STALEMATE_VALUE` against the side ahead in material, and zero when
    /// material is level.
    #[must_use]
    pub fn evaluate(&self, status: Status, weights: Option<&EvalWeights>) -> i32 {
        match status {
            Status::Checkmate => -self.side_to_move.sign() * MATE_VALUE,
            Status::Stalemate(_) => -self.material().signum() * STALEMATE_VALUE,
            Status::Normal | Status::Check => {
                let material = self.material() * MATERIAL_SCALE;
                match weights {
                    Some(weights) => material + self.bonus(weights),
                    None => material,
                }
            }
        }
    }

    /// Material balance in piece-worth units, kings excluded
    #[must_use]
    pub fn material(&self) -> i32 {
        Color::BOTH
            .iter()
            .map(|&color| {
                color.sign()
                    * self
                        .pieces(color)
                        .map(|(_, piece)| piece.worth())
                        .sum::<i32>()
            })
            .sum()
    }

    fn bonus(&self, weights: &EvalWeights) -> i32 {
        Color::BOTH
            .iter()
            .map(|&color| color.sign() * self.side_bonus(color, weights))
            .sum()
    }

    fn side_bonus(&self, color: Color, weights: &EvalWeights) -> i32 {
        let mut bonus = 0;

        if self.piece_count() > weights.early_game_pieces {
            let held = CastleSide::BOTH
                .iter()
                .filter(|&&side| self.castling_rights.has(color, side))
                .count();
            bonus += weights.castling_right * held as i32;
        }

        let moves = self.pseudo_legal_moves(color);
        // Promotions come four to a pawn, so targets and promoters are sets
        let mut targets = HashSet::new();
        let mut promoters = HashSet::new();
        let mut castles = 0;
        let mut king_steps = 0;
        for mv in &moves {
            if mv.captured().is_some_and(|p| p != Piece::King) {
                targets.insert(mv.captured_square());
            }
            if mv.promotion().is_some() {
                promoters.insert(mv.from());
            }
            if mv.is_castle() {
                castles += 1;
            } else if mv.piece() == Piece::King {
                king_steps += 1;
            }
        }

        bonus += weights.mobility * moves.len() as i32;
        bonus += weights.capturable * targets.len() as i32;
        bonus += weights.promotion * promoters.len() as i32;
        bonus += weights.castling_move * castles;
        if king_steps >= weights.king_escape_squares {
            bonus += weights.king_escape;
        }
        bonus
    }
}

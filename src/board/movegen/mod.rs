//! Pseudo-legal move generation, one generator per piece kind.
//!
//! Generators respect piece movement patterns and board occupancy but do not
//! check whether the mover's own king is left attacked; that is the job of
//! the legality filter in `legal.rs`. Castling is the exception: its
//! generator already refuses to castle out of, through, or into check.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Color, Move, Piece, Position, Square};

impl Position {
    /// Every pseudo-legal move for `color`, castling included.
    ///
    /// En-passant captures are only produced for the side to move, since the
    /// target expires after one move.
    #[must_use]
    pub fn pseudo_legal_moves(&self, color: Color) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        for (from, piece) in self.pieces(color) {
            self.generate_piece_moves(from, color, piece, &mut moves);
        }
        self.generate_castling_moves(color, &mut moves);
        moves
    }

    /// Pseudo-legal moves of the piece on `from`, castling excluded.
    /// Empty if the square is empty.
    #[must_use]
    pub fn pseudo_legal_moves_from(&self, from: Square) -> Vec<Move> {
        let mut moves = Vec::new();
        if let Some((color, piece)) = self.piece_at(from) {
            self.generate_piece_moves(from, color, piece, &mut moves);
        }
        moves
    }

    pub(crate) fn generate_piece_moves(
        &self,
        from: Square,
        color: Color,
        piece: Piece,
        moves: &mut Vec<Move>,
    ) {
        match piece {
            Piece::Pawn => self.generate_pawn_moves(from, color, moves),
            Piece::Knight => self.generate_knight_moves(from, color, moves),
            Piece::Bishop | Piece::Rook | Piece::Queen => {
                self.generate_slider_moves(from, color, piece, moves);
            }
            Piece::King => self.generate_king_steps(from, color, moves),
        }
    }

    /// Quiet move or capture onto `to`, whichever the occupancy calls for.
    /// Returns `None` when `to` holds a piece of the mover's own color.
    fn step_or_capture(&self, from: Square, to: Square, color: Color, piece: Piece) -> Option<Move> {
        match self.piece_at(to) {
            None => Some(Move::quiet(from, to, piece)),
            Some((c, victim)) if c != color => Some(Move::capture(from, to, piece, victim)),
            Some(_) => None,
        }
    }
}

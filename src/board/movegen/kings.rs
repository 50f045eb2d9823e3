use super::super::attack_tables::{DIAGONAL, KING_TARGETS, KNIGHT_TARGETS, ORTHOGONAL, RAYS};
use super::super::{CastleSide, Color, Move, Piece, Position, Square};

impl Position {
    /// Ordinary one-step king moves. Whether the destination is attacked is
    /// left to the legality filter.
    pub(crate) fn generate_king_steps(&self, from: Square, color: Color, moves: &mut Vec<Move>) {
        for &to in &KING_TARGETS[from.as_index()] {
            if let Some(mv) = self.step_or_capture(from, to, color, Piece::King) {
                moves.push(mv);
            }
        }
    }

    /// At most two castling moves for `color`.
    ///
    /// Each needs the right still held, king and rook on their home squares,
    /// every square between them empty, the king not in check, and the
    /// squares the king crosses and lands on unattacked. The rook's path may
    /// be attacked.
    pub(crate) fn generate_castling_moves(&self, color: Color, moves: &mut Vec<Move>) {
        let back_rank = color.back_rank();
        let king_sq = Square(back_rank, 4);
        if self.piece_at(king_sq) != Some((color, Piece::King)) {
            return;
        }
        let opponent = color.opponent();
        let mut in_check = None;

        for side in CastleSide::BOTH {
            if !self.has_castling_right(color, side) {
                continue;
            }
            let rook_file = side.rook_from_file();
            if self.piece_at(Square(back_rank, rook_file)) != Some((color, Piece::Rook)) {
                continue;
            }
            let (low, high) = if rook_file < 4 { (rook_file + 1, 4) } else { (5, rook_file) };
            if !(low..high).all(|file| self.is_empty(Square(back_rank, file))) {
                continue;
            }
            if *in_check.get_or_insert_with(|| self.is_square_attacked(king_sq, opponent)) {
                return;
            }
            let king_to = Square(back_rank, side.king_to_file());
            let crossed = Square(back_rank, (4 + side.king_to_file()) / 2);
            if self.is_square_attacked(crossed, opponent) || self.is_square_attacked(king_to, opponent)
            {
                continue;
            }
            moves.push(Move::castle(king_sq, king_to, side));
        }
    }

    /// Whether any piece of `attacker` attacks `square`.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, attacker: Color) -> bool {
        // A pawn attacks diagonally forward, so look one step backwards from the target
        let pawn_dir = attacker.pawn_direction();
        for df in [-1, 1] {
            if let Some(sq) = square.offset(-pawn_dir, df) {
                if self.piece_at(sq) == Some((attacker, Piece::Pawn)) {
                    return true;
                }
            }
        }

        let idx = square.as_index();
        if KNIGHT_TARGETS[idx]
            .iter()
            .any(|&sq| self.piece_at(sq) == Some((attacker, Piece::Knight)))
        {
            return true;
        }
        if KING_TARGETS[idx]
            .iter()
            .any(|&sq| self.piece_at(sq) == Some((attacker, Piece::King)))
        {
            return true;
        }

        let rays = &RAYS[idx];
        let slides = |dirs: std::ops::Range<usize>, kind: Piece| {
            rays[dirs].iter().any(|ray| {
                ray.iter()
                    .find_map(|&sq| self.piece_at(sq))
                    .is_some_and(|(c, p)| c == attacker && (p == kind || p == Piece::Queen))
            })
        };
        slides(ORTHOGONAL, Piece::Rook) || slides(DIAGONAL, Piece::Bishop)
    }

    /// Whether `color`'s king is attacked. A position without that king is
    /// never in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.find_king(color)
            .is_some_and(|king_sq| self.is_square_attacked(king_sq, color.opponent()))
    }
}

use super::super::{Color, Move, Piece, Position, Square, PROMOTION_PIECES};

impl Position {
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color, moves: &mut Vec<Move>) {
        let dir = color.pawn_direction();
        let promotion_rank = color.pawn_promotion_rank();

        // A pawn on its far rank cannot exist in legal play; nothing to generate
        let Some(forward_sq) = from.offset(dir, 0) else {
            return;
        };

        if self.is_empty(forward_sq) {
            let push = Move::quiet(from, forward_sq, Piece::Pawn);
            if forward_sq.rank() == promotion_rank {
                push_promotions(push, moves);
            } else {
                moves.push(push);
                if from.rank() == color.pawn_start_rank() {
                    if let Some(double_sq) = forward_sq.offset(dir, 0) {
                        if self.is_empty(double_sq) {
                            moves.push(Move::double_pawn_push(from, double_sq, forward_sq));
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            let Some(target_sq) = from.offset(dir, df) else {
                continue;
            };
            match self.piece_at(target_sq) {
                Some((target_color, victim)) if target_color != color => {
                    let capture = Move::capture(from, target_sq, Piece::Pawn, victim);
                    if target_sq.rank() == promotion_rank {
                        push_promotions(capture, moves);
                    } else {
                        moves.push(capture);
                    }
                }
                Some(_) => {}
                None if color == self.side_to_move => {
                    if let Some(victim) = self.en_passant_capture_target(target_sq, color) {
                        moves.push(Move::en_passant(from, target_sq, victim));
                    }
                }
                None => {}
            }
        }
    }
}

/// Each promotion kind is a distinct move.
fn push_promotions(base: Move, moves: &mut Vec<Move>) {
    for promo in PROMOTION_PIECES {
        moves.push(base.promoting(promo));
    }
}

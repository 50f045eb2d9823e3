use super::super::attack_tables::{DIAGONAL, ORTHOGONAL, RAYS};
use super::super::{Color, Move, Piece, Position, Square};

impl Position {
    /// Walk each ray until the edge, an own piece (excluded) or an enemy
    /// piece (included as a capture).
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        color: Color,
        piece: Piece,
        moves: &mut Vec<Move>,
    ) {
        let directions = match piece {
            Piece::Rook => ORTHOGONAL,
            Piece::Bishop => DIAGONAL,
            _ => ORTHOGONAL.start..DIAGONAL.end,
        };

        let rays = &RAYS[from.as_index()];
        for ray in &rays[directions] {
            for &to in ray {
                match self.piece_at(to) {
                    None => moves.push(Move::quiet(from, to, piece)),
                    Some((c, victim)) => {
                        if c != color {
                            moves.push(Move::capture(from, to, piece, victim));
                        }
                        break;
                    }
                }
            }
        }
    }
}

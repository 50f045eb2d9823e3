use super::super::attack_tables::KNIGHT_TARGETS;
use super::super::{Color, Move, Piece, Position, Square};

impl Position {
    pub(crate) fn generate_knight_moves(&self, from: Square, color: Color, moves: &mut Vec<Move>) {
        for &to in &KNIGHT_TARGETS[from.as_index()] {
            if let Some(mv) = self.step_or_capture(from, to, color, Piece::Knight) {
                moves.push(mv);
            }
        }
    }
}

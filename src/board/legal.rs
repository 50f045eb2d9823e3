//! The legality filter: a move is legal iff, after applying it to a scratch
//! copy, the mover's king is not attacked.

use super::{Color, Move, Position, Square};

impl Position {
    /// Legal moves for the side to move.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        self.legal_moves_of(self.side_to_move)
    }

    /// Legal moves for `color`, whether or not it is that side's turn.
    #[must_use]
    pub fn legal_moves_of(&self, color: Color) -> Vec<Move> {
        self.pseudo_legal_moves(color)
            .into_iter()
            .filter(|mv| self.is_legal(mv, color))
            .collect()
    }

    /// Legal moves of the piece standing on `square`, castling included for a
    /// king. Empty when the square is empty or holds a piece of the side not
    /// to move.
    #[must_use]
    pub fn legal_moves_for(&self, square: Square) -> Vec<Move> {
        let color = self.side_to_move;
        if !self.is_occupied_by(square, color) {
            return Vec::new();
        }
        let mut candidates = self.pseudo_legal_moves_from(square);
        if self.find_king(color) == Some(square) {
            self.generate_castling_moves(color, &mut candidates);
        }
        candidates.retain(|mv| self.is_legal(mv, color));
        candidates
    }

    /// Whether the side to move has at least one legal move.
    #[must_use]
    pub fn has_legal_moves(&self) -> bool {
        let color = self.side_to_move;
        self.pseudo_legal_moves(color)
            .iter()
            .any(|mv| self.is_legal(mv, color))
    }

    fn is_legal(&self, mv: &Move, color: Color) -> bool {
        !self.apply(mv).is_in_check(color)
    }

    /// Count legal move sequences of length `depth`.
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        moves
            .iter()
            .map(|mv| self.apply(mv).perft(depth - 1))
            .sum()
    }
}

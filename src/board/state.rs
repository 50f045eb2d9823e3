use std::fmt;

use super::{CastleSide, CastlingRights, Color, Piece, Square};

/// Layout, side to move, castling rights and en-passant target: the
/// repetition-relevant part of a position in canonical PDN form (the first
/// four fields). Move counters are excluded.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PositionKey(String);

impl PositionKey {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PositionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A complete chess position.
///
/// `Position` has value semantics: cloning yields a fully independent copy,
/// which is how the legality filter and the search explore moves without
/// touching the caller's position.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub(crate) squares: [[Option<(Color, Piece)>; 8]; 8], // [rank][file]
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

impl Position {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut position = Position::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (i, piece) in back_rank.iter().enumerate() {
            position.place(Square(0, i), Color::White, *piece);
            position.place(Square(7, i), Color::Black, *piece);
            position.place(Square(1, i), Color::White, Piece::Pawn);
            position.place(Square(6, i), Color::Black, Piece::Pawn);
        }

        position.castling_rights = CastlingRights::all();
        position
    }

    pub(crate) fn empty() -> Self {
        Position {
            squares: [[None; 8]; 8],
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// The piece on `sq`, if any
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.rank()][sq.file()]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    #[inline]
    #[must_use]
    pub fn is_occupied_by(&self, sq: Square, color: Color) -> bool {
        matches!(self.piece_at(sq), Some((c, _)) if c == color)
    }

    /// If a pawn of `color` moving diagonally onto `sq` would capture en
    /// passant, returns the square of the pawn it takes.
    #[must_use]
    pub fn en_passant_capture_target(&self, sq: Square, color: Color) -> Option<Square> {
        if self.en_passant_target != Some(sq) {
            return None;
        }
        // The victim stands one step past the target, in its own direction of travel
        let victim = sq.offset(-color.pawn_direction(), 0)?;
        if self.piece_at(victim) == Some((color.opponent(), Piece::Pawn)) {
            Some(victim)
        } else {
            None
        }
    }

    /// Put a piece on `sq`, replacing whatever was there
    pub fn place(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.rank()][sq.file()] = Some((color, piece));
    }

    /// Clear `sq`, returning what stood there
    pub fn remove(&mut self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.rank()][sq.file()].take()
    }

    /// Relocate the piece on `from` to `to` with no rule bookkeeping.
    /// Returns whatever previously stood on `to`.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Option<(Color, Piece)> {
        let moving = self.remove(from);
        let displaced = self.remove(to);
        if let Some((color, piece)) = moving {
            self.place(to, color, piece);
        }
        displaced
    }

    /// All pieces of `color` with their squares, a1 first
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some((c, piece)) if c == color => Some((sq, piece)),
            _ => None,
        })
    }

    /// Number of pieces of both colors on the board, kings included
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.squares.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| self.piece_at(sq) == Some((color, Piece::King)))
    }

    #[must_use]
    pub fn has_castling_right(&self, color: Color, side: CastleSide) -> bool {
        self.castling_rights.has(color, side)
    }

    /// Canonical repetition key (layout, side, rights, en passant)
    #[must_use]
    pub fn key(&self) -> PositionKey {
        PositionKey(format!(
            "{} {} {} {}",
            self.layout_string(),
            self.side_to_move.to_pdn_char(),
            self.castling_rights,
            self.en_passant_target
                .map_or_else(|| "-".to_string(), |sq| sq.to_string())
        ))
    }

    /// Board layout in PDN form, rank 8 first
    pub(crate) fn layout_string(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some((color, piece)) = self.squares[rank][file] {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_pdn_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }
        rows.join("/")
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_layout() {
        let position = Position::new();
        assert_eq!(position.piece_at(Square(0, 4)), Some((Color::White, Piece::King)));
        assert_eq!(position.piece_at(Square(7, 3)), Some((Color::Black, Piece::Queen)));
        assert_eq!(position.piece_count(), 32);
        assert_eq!(position.pieces(Color::White).count(), 16);
        assert_eq!(position.find_king(Color::Black), Some(Square(7, 4)));
    }

    #[test]
    fn move_piece_reports_displaced() {
        let mut position = Position::new();
        let displaced = position.move_piece(Square(0, 3), Square(6, 3));
        assert_eq!(displaced, Some((Color::Black, Piece::Pawn)));
        assert!(position.is_empty(Square(0, 3)));
        assert!(position.is_occupied_by(Square(6, 3), Color::White));
        // No bookkeeping happens at this layer
        assert_eq!(position.side_to_move(), Color::White);
    }

    #[test]
    fn en_passant_capture_target_requires_victim() {
        let mut position = Position::empty();
        position.place(Square(4, 3), Color::Black, Piece::Pawn);
        position.place(Square(4, 4), Color::White, Piece::Pawn);
        position.en_passant_target = Some(Square(5, 3));

        assert_eq!(
            position.en_passant_capture_target(Square(5, 3), Color::White),
            Some(Square(4, 3))
        );
        assert_eq!(position.en_passant_capture_target(Square(5, 4), Color::White), None);
        assert_eq!(position.en_passant_capture_target(Square(5, 3), Color::Black), None);

        position.remove(Square(4, 3));
        assert_eq!(position.en_passant_capture_target(Square(5, 3), Color::White), None);
    }

    #[test]
    fn key_excludes_counters() {
        let mut a = Position::new();
        let b = Position::new();
        a.halfmove_clock = 12;
        a.fullmove_number = 40;
        assert_eq!(a.key(), b.key());
        assert_eq!(
            a.key().as_str(),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -"
        );
    }

    #[test]
    fn keys_group_positions_by_hash() {
        use std::collections::HashSet;

        let start = Position::new();
        let mut later = start.clone();
        later.fullmove_number = 9;
        let mut black_to_move = start.clone();
        black_to_move.side_to_move = Color::Black;

        let keys: HashSet<PositionKey> =
            [start.key(), later.key(), black_to_move.key()].into_iter().collect();
        assert_eq!(keys.len(), 2);
    }
}

use super::{Color, Move, Piece, Position, Square};

impl Position {
    /// The position after `mv`, leaving `self` untouched.
    ///
    /// `mv` is expected to come from this position's move generators; use
    /// `play` to validate caller-supplied moves first.
    #[must_use]
    pub fn apply(&self, mv: &Move) -> Position {
        let mut next = self.clone();
        next.apply_in_place(mv);
        next
    }

    /// Perform all bookkeeping for `mv` in one step: capture, promotion,
    /// paired rook relocation, rights revocation, en-passant target,
    /// counters and turn switch.
    pub(crate) fn apply_in_place(&mut self, mv: &Move) {
        let Some((color, piece)) = self.piece_at(mv.from()) else {
            invariant_violation(format_args!("no piece on {} for move {mv}", mv.from()));
            return;
        };
        debug_assert_eq!(piece, mv.piece(), "move {mv} describes the wrong piece");

        if mv.is_en_passant() {
            let victim = self.remove(mv.captured_square());
            if victim != Some((color.opponent(), Piece::Pawn)) {
                invariant_violation(format_args!(
                    "en passant {mv} found {victim:?} on {}",
                    mv.captured_square()
                ));
            }
        }

        self.move_piece(mv.from(), mv.to());

        if let Some(promotion) = mv.promotion() {
            self.place(mv.to(), color, promotion);
        }

        if let Some(side) = mv.castle_side() {
            let rank = color.back_rank();
            self.move_piece(
                Square(rank, side.rook_from_file()),
                Square(rank, side.rook_to_file()),
            );
        }

        self.castling_rights.revoke(mv.revokes());
        self.en_passant_target = mv.en_passant_target();

        if mv.is_irreversible() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if color == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = color.opponent();
    }
}

/// Internal consistency failure: a bug in generation or application, never
/// bad input. Fatal in debug builds, logged in release.
#[track_caller]
pub(crate) fn invariant_violation(details: std::fmt::Arguments<'_>) {
    if cfg!(debug_assertions) {
        panic!("invariant violation: {details}");
    }
    log::error!("invariant violation: {details}");
}

//! Edge case tests for special chess positions and moves.

use super::{find, play, play_all};
use crate::board::{CastleSide, Color, Piece, Position, Square, Status};

#[test]
fn test_promotion_completeness() {
    let position = Position::from_pdn("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
    let promotions = position.legal_moves_for(Square(6, 0));
    assert_eq!(promotions.len(), 4);

    for piece in [Piece::Queen, Piece::Rook, Piece::Bishop, Piece::Knight] {
        let mv = promotions
            .iter()
            .find(|m| m.promotion() == Some(piece))
            .unwrap_or_else(|| panic!("{piece} promotion should be available"));
        let after = position.apply(mv);
        assert_eq!(after.piece_at(Square(7, 0)), Some((Color::White, piece)));
        assert!(after.is_empty(Square(6, 0)));
    }
}

#[test]
fn test_capture_promotion() {
    let position = Position::from_pdn("1r5k/P7/8/8/8/8/8/K7 w - - 0 1").unwrap();
    let moves = position.legal_moves_for(Square(6, 0));
    // Four straight promotions plus four capturing on b8
    assert_eq!(moves.len(), 8);
    assert_eq!(moves.iter().filter(|m| m.is_capture()).count(), 4);

    let after = play(&position, "a7b8n");
    assert_eq!(after.piece_at(Square(7, 1)), Some((Color::White, Piece::Knight)));
    assert_eq!(after.halfmove_clock(), 0);
}

#[test]
fn test_blocked_promotion() {
    let position = Position::from_pdn("n6k/P7/8/8/8/8/8/K7 w - - 0 1").unwrap();
    assert!(position.legal_moves_for(Square(6, 0)).is_empty());
}

#[test]
fn test_en_passant_window() {
    let position = Position::from_pdn("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1").unwrap();
    let position = play(&position, "d7d5");
    assert_eq!(position.en_passant_target(), Some(Square(5, 3)));

    // Capturable on the very next move
    let capture = find(&position, "e5d6").expect("en passant available");
    assert!(capture.is_en_passant());
    let after = position.apply(&capture);
    assert!(after.is_empty(Square(4, 3)));
    assert_eq!(after.piece_at(Square(5, 3)), Some((Color::White, Piece::Pawn)));

    // Skipped once, gone for good
    let skipped = play_all(&position, &["e1e2", "e8e7"]);
    assert_eq!(skipped.en_passant_target(), None);
    assert!(find(&skipped, "e5d6").is_none());
}

#[test]
fn test_en_passant_not_for_side_not_to_move() {
    let position =
        Position::from_pdn("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3")
            .unwrap();
    assert!(position
        .pseudo_legal_moves(Color::White)
        .iter()
        .any(|m| m.is_en_passant()));
    assert!(!position
        .pseudo_legal_moves(Color::Black)
        .iter()
        .any(|m| m.is_en_passant()));
}

#[test]
fn test_en_passant_exposing_king_is_illegal() {
    // Removing both pawns from the fifth rank would expose the white king
    let position = Position::from_pdn("8/8/8/K2pP2r/8/8/8/7k w - d6 0 1").unwrap();
    assert!(find(&position, "e5d6").is_none());
    assert!(find(&position, "e5e6").is_some());
}

#[test]
fn test_castling_both_sides() {
    let position = Position::from_pdn("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let king_moves = position.legal_moves_for(Square(0, 4));
    let castles: Vec<_> = king_moves.iter().filter(|m| m.is_castle()).collect();
    assert_eq!(castles.len(), 2);

    let after = play(&position, "e1g1");
    assert_eq!(after.piece_at(Square(0, 6)), Some((Color::White, Piece::King)));
    assert_eq!(after.piece_at(Square(0, 5)), Some((Color::White, Piece::Rook)));
    assert!(after.is_empty(Square(0, 7)));
    assert!(!after.has_castling_right(Color::White, CastleSide::KingSide));
    assert!(!after.has_castling_right(Color::White, CastleSide::QueenSide));
    assert!(after.has_castling_right(Color::Black, CastleSide::KingSide));

    let after = play(&position, "e1c1");
    assert_eq!(after.piece_at(Square(0, 2)), Some((Color::White, Piece::King)));
    assert_eq!(after.piece_at(Square(0, 3)), Some((Color::White, Piece::Rook)));
}

#[test]
fn test_castling_blocked_by_piece() {
    let position = Position::from_pdn("r3k2r/8/8/8/8/8/8/RN2K1NR w KQkq - 0 1").unwrap();
    assert!(find(&position, "e1g1").is_none());
    assert!(find(&position, "e1c1").is_none());
}

#[test]
fn test_castling_out_of_through_or_into_check() {
    // Out of check
    let position = Position::from_pdn("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
    assert!(position.in_check());
    assert!(find(&position, "e1g1").is_none());
    assert!(find(&position, "e1c1").is_none());

    // Through f1
    let position = Position::from_pdn("5rk1/8/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
    assert!(find(&position, "e1g1").is_none());
    assert!(find(&position, "e1c1").is_some());

    // Into g1
    let position = Position::from_pdn("6rk/8/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
    assert!(find(&position, "e1g1").is_none());
}

#[test]
fn test_castling_rook_path_may_be_attacked() {
    // b1 is attacked but only the rook crosses it
    let position = Position::from_pdn("1r4k1/8/8/8/8/8/8/R3K3 w Q - 0 1").unwrap();
    assert!(find(&position, "e1c1").is_some());
}

#[test]
fn test_rook_capture_revokes_right() {
    let position = Position::from_pdn("r3k2r/8/8/8/8/8/6b1/R3K2R b KQkq - 0 1").unwrap();
    let after = play(&position, "g2h1");
    assert!(!after.has_castling_right(Color::White, CastleSide::KingSide));
    assert!(after.has_castling_right(Color::White, CastleSide::QueenSide));
    assert!(after.has_castling_right(Color::Black, CastleSide::KingSide));
}

#[test]
fn test_rights_never_return() {
    let position = Position::from_pdn("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    // Rook leaves and comes back
    let after = play_all(&position, &["h1h2", "a8a7", "h2h1", "a7a8"]);
    assert!(!after.has_castling_right(Color::White, CastleSide::KingSide));
    assert!(!after.has_castling_right(Color::Black, CastleSide::QueenSide));
    assert!(find(&after, "e1g1").is_none());
    assert!(find(&after, "e1c1").is_some());
}

#[test]
fn test_pinned_piece_cannot_leave_line() {
    let position = Position::from_pdn("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1").unwrap();
    assert!(position.legal_moves_for(Square(1, 4)).is_empty());
}

#[test]
fn test_king_cannot_step_into_attack() {
    let position = Position::from_pdn("3r2k1/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    let king_moves = position.legal_moves_for(Square(0, 4));
    assert!(king_moves.iter().all(|m| m.to().file() != 3));
    // The generator itself still proposes them
    assert!(position
        .pseudo_legal_moves_from(Square(0, 4))
        .iter()
        .any(|m| m.to().file() == 3));
}

#[test]
fn test_legal_moves_for_wrong_side_is_empty() {
    let position = Position::new();
    assert!(position.legal_moves_for(Square(6, 4)).is_empty());
    assert!(position.legal_moves_for(Square(3, 3)).is_empty());
}

#[test]
fn test_fools_mate() {
    let position = play_all(&Position::new(), &["f2f3", "e7e5", "g2g4", "d8h4"]);
    assert_eq!(position.side_to_move(), Color::White);
    assert_eq!(position.status(&[]), Status::Checkmate);
    for (square, _) in position.pieces(Color::White) {
        assert!(position.legal_moves_for(square).is_empty());
    }
}

#[test]
fn test_check_symmetry_on_known_check() {
    let position = Position::from_pdn("4k3/8/8/8/8/8/8/4K2r w - - 0 1").unwrap();
    assert!(position.in_check());
    let king = position.find_king(Color::White).unwrap();
    assert!(position
        .pseudo_legal_moves(Color::Black)
        .iter()
        .any(|m| m.captured_square() == king && m.is_capture()));
}

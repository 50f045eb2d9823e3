//! Draw detection tests.

use super::{play, play_all};
use crate::board::{Position, PositionKey, StalemateReason, Status, StatusCache};

/// Play `moves`, recording every position's key the way a game does
fn lineage(start: &Position, moves: &[&str]) -> (Position, Vec<PositionKey>) {
    let mut position = start.clone();
    let mut history = vec![position.key()];
    for text in moves {
        position = play(&position, text);
        history.push(position.key());
    }
    (position, history)
}

#[test]
fn test_pdn_halfmove_parsing() {
    let position = Position::from_pdn("8/8/8/8/8/8/8/K1k5 w - - 57 1").unwrap();
    assert_eq!(position.halfmove_clock(), 57);
}

#[test]
fn test_fifty_move_rule_draw() {
    let position = Position::from_pdn("8/8/8/8/8/8/8/K1k5 w - - 100 1").unwrap();
    assert_eq!(
        position.status(&[]),
        Status::Stalemate(StalemateReason::FiftyMoveRule)
    );
}

#[test]
fn test_fifty_move_rule_from_quiet_play() {
    // 100 halfmoves of knight shuffling with no capture or pawn move
    let start = Position::from_pdn("n6k/8/8/8/8/8/8/N6K w - - 0 1").unwrap();
    let cycle = ["a1b3", "a8b6", "b3a1", "b6a8"];
    let mut position = start;
    for i in 0..100 {
        position = play(&position, cycle[i % 4]);
        if i < 99 {
            assert_ne!(
                position.status(&[]),
                Status::Stalemate(StalemateReason::FiftyMoveRule),
                "halfmove {i}"
            );
        }
    }
    assert_eq!(position.halfmove_clock(), 100);
    assert_eq!(
        position.status(&[]),
        Status::Stalemate(StalemateReason::FiftyMoveRule)
    );
}

#[test]
fn test_halfmove_resets_on_pawn_move() {
    let position = Position::from_pdn("k7/8/8/8/8/8/4P3/K7 w - - 99 1").unwrap();
    let position = play(&position, "e2e4");
    assert_eq!(position.halfmove_clock(), 0);
    assert_eq!(position.status(&[]), Status::Normal);
}

#[test]
fn test_halfmove_resets_on_capture() {
    let position = Position::from_pdn("k7/8/8/3n4/8/4N3/8/K7 w - - 42 30").unwrap();
    let position = play(&position, "e3d5");
    assert_eq!(position.halfmove_clock(), 0);
}

#[test]
fn test_threefold_repetition() {
    let shuffle = ["g1f3", "g8f6", "f3g1", "f6g8"];
    let start = Position::new();

    let (position, history) = lineage(&start, &shuffle);
    assert_eq!(position.key(), start.key());
    assert_eq!(position.status(&history), Status::Normal);

    let moves: Vec<&str> = shuffle.iter().chain(shuffle.iter()).copied().collect();
    let (position, history) = lineage(&start, &moves);
    assert_eq!(
        position.status(&history),
        Status::Stalemate(StalemateReason::Repetition)
    );

    let cache = StatusCache::new();
    assert_eq!(
        cache.status(&position, &history),
        Status::Stalemate(StalemateReason::Repetition)
    );
}

#[test]
fn test_repetition_respects_en_passant_in_key() {
    // After 1. e4 the e3 target makes the position differ from the same
    // layout reached later without it
    let after_push = play(&Position::new(), "e2e4");
    let later = play_all(&after_push, &["g8f6", "g1f3", "f6g8", "f3g1"]);
    assert_eq!(after_push.en_passant_target().map(|s| s.to_string()), Some("e3".into()));
    assert_eq!(later.en_passant_target(), None);
    assert_ne!(after_push.key(), later.key());
}

#[test]
fn test_stalemate_no_moves() {
    let position = Position::from_pdn("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    assert!(position.legal_moves().is_empty());
    assert_eq!(position.status(&[]), Status::Stalemate(StalemateReason::NoMoves));
}

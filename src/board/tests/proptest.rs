//! Property-based tests using proptest.
//!
//! Each property walks a random game from the start position, choosing
//! uniformly among legal moves with a seeded RNG.

use crate::board::{CastleSide, Color, Move, Position, Status};
use proptest::prelude::*;

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Every position of a random walk, the start included
fn random_walk(seed: u64, num_moves: usize) -> Vec<Position> {
    use rand::prelude::*;

    let mut rng = StdRng::seed_from_u64(seed);
    let mut positions = vec![Position::new()];
    for _ in 0..num_moves {
        let Some(position) = positions.last() else {
            break;
        };
        let moves = position.legal_moves();
        let Some(mv) = moves.choose(&mut rng) else {
            break;
        };
        let next = position.apply(mv);
        positions.push(next);
    }
    positions
}

fn captures_square(moves: &[Move], square: crate::board::Square) -> bool {
    moves
        .iter()
        .any(|mv| mv.is_capture() && mv.captured_square() == square)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: PDN round-trip preserves every field
    #[test]
    fn prop_pdn_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        for position in random_walk(seed, num_moves) {
            let pdn = position.to_pdn();
            let restored = Position::from_pdn(&pdn);
            prop_assert_eq!(restored.as_ref(), Ok(&position), "pdn {}", pdn);
        }
    }

    /// Property: in check iff some opponent pseudo-legal move captures the king
    #[test]
    fn prop_check_symmetry(seed in seed_strategy(), num_moves in move_count_strategy()) {
        for position in random_walk(seed, num_moves) {
            for color in Color::BOTH {
                let king = position.find_king(color).expect("both kings present");
                let attacked = captures_square(&position.pseudo_legal_moves(color.opponent()), king);
                prop_assert_eq!(position.is_in_check(color), attacked, "{}", position);
            }
        }
    }

    /// Property: legal moves never leave the mover's king attacked
    #[test]
    fn prop_legal_moves_are_legal(seed in seed_strategy(), num_moves in 0..15usize) {
        for position in random_walk(seed, num_moves) {
            let mover = position.side_to_move();
            for mv in position.legal_moves() {
                prop_assert!(!position.apply(&mv).is_in_check(mover),
                    "Legal move left king in check: {} in {}", mv, position);
            }
        }
    }

    /// Property: a checkmated side has no legal move from any of its squares
    #[test]
    fn prop_checkmate_is_terminal(seed in seed_strategy(), num_moves in move_count_strategy()) {
        for position in random_walk(seed, num_moves) {
            if position.status(&[]) == Status::Checkmate {
                for (square, _) in position.pieces(position.side_to_move()) {
                    prop_assert!(position.legal_moves_for(square).is_empty());
                }
            }
        }
    }

    /// Property: castling rights are only ever cleared along a lineage
    #[test]
    fn prop_castling_rights_monotonic(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let positions = random_walk(seed, num_moves);
        for pair in positions.windows(2) {
            let (before, after) = (&pair[0], &pair[1]);
            prop_assert!(after.castling_rights().is_subset_of(before.castling_rights()));
            for color in Color::BOTH {
                for side in CastleSide::BOTH {
                    if after.has_castling_right(color, side) {
                        prop_assert!(before.has_castling_right(color, side));
                    }
                }
            }
        }
    }

    /// Property: the en-passant target lives for exactly one move
    #[test]
    fn prop_en_passant_target_expires(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let positions = random_walk(seed, num_moves);
        for pair in positions.windows(2) {
            if let (Some(a), Some(b)) = (pair[0].en_passant_target(), pair[1].en_passant_target()) {
                prop_assert_ne!(a, b);
            }
        }
    }

    /// Property: the per-square query agrees with the full legal move list
    #[test]
    fn prop_legal_moves_for_partitions(seed in seed_strategy(), num_moves in 0..20usize) {
        for position in random_walk(seed, num_moves) {
            let mut by_square: Vec<Move> = position
                .pieces(position.side_to_move())
                .flat_map(|(sq, _)| position.legal_moves_for(sq))
                .collect();
            let mut all = position.legal_moves();
            let key = |mv: &Move| mv.to_string();
            by_square.sort_by_key(key);
            all.sort_by_key(key);
            prop_assert_eq!(by_square, all);
        }
    }
}

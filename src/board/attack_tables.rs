//! Per-square target tables for the leaping pieces and ray tables for the
//! sliders, built once on first use.

use once_cell::sync::Lazy;

use super::Square;

pub(crate) const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

pub(crate) const KING_DELTAS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Ray directions: the first four are orthogonal, the last four diagonal.
pub(crate) const DIRECTIONS: [(isize, isize); 8] = KING_DELTAS;
pub(crate) const ORTHOGONAL: std::ops::Range<usize> = 0..4;
pub(crate) const DIAGONAL: std::ops::Range<usize> = 4..8;

fn leaper_table(deltas: &[(isize, isize); 8]) -> Vec<Vec<Square>> {
    Square::all()
        .map(|sq| {
            deltas
                .iter()
                .filter_map(|&(dr, df)| sq.offset(dr, df))
                .collect()
        })
        .collect()
}

pub(crate) static KNIGHT_TARGETS: Lazy<Vec<Vec<Square>>> =
    Lazy::new(|| leaper_table(&KNIGHT_DELTAS));

pub(crate) static KING_TARGETS: Lazy<Vec<Vec<Square>>> = Lazy::new(|| leaper_table(&KING_DELTAS));

/// `RAYS[square][direction]` lists the squares walked from `square`, nearest
/// first, up to the board edge.
pub(crate) static RAYS: Lazy<Vec<[Vec<Square>; 8]>> = Lazy::new(|| {
    Square::all()
        .map(|sq| {
            std::array::from_fn(|dir| {
                let (dr, df) = DIRECTIONS[dir];
                std::iter::successors(sq.offset(dr, df), |s| s.offset(dr, df)).collect()
            })
        })
        .collect()
});

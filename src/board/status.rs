//! Game-state detection: check, checkmate and the three stalemate paths.
//!
//! Status is a function of a position plus the repetition history of the
//! lineage that reached it. The expensive part (whether the side to move has
//! any legal move) is memoized per canonical position key in `StatusCache`.

use std::collections::HashMap;
use std::fmt;

use parking_lot::Mutex;

use super::{Position, PositionKey};

/// Default bound on the number of memoized positions
pub const STATUS_CACHE_CAPACITY: usize = 100_000;

/// Halfmoves without capture or pawn move that end the game
pub const FIFTY_MOVE_LIMIT: u32 = 100;

/// Occurrences of one position that end the game
pub const REPETITION_LIMIT: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StalemateReason {
    /// Side to move is not in check and has no legal move
    NoMoves,
    /// 100 halfmoves without a capture or pawn move
    FiftyMoveRule,
    /// Same position occurred three times in the lineage
    Repetition,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    Normal,
    Check,
    Checkmate,
    Stalemate(StalemateReason),
}

impl Status {
    /// True for checkmate and every stalemate path
    #[must_use]
    pub const fn is_game_over(self) -> bool {
        matches!(self, Status::Checkmate | Status::Stalemate(_))
    }

    #[must_use]
    pub const fn is_check(self) -> bool {
        matches!(self, Status::Check | Status::Checkmate)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Normal => write!(f, "normal"),
            Status::Check => write!(f, "check"),
            Status::Checkmate => write!(f, "checkmate"),
            Status::Stalemate(StalemateReason::NoMoves) => write!(f, "stalemate"),
            Status::Stalemate(StalemateReason::FiftyMoveRule) => {
                write!(f, "stalemate (fifty-move rule)")
            }
            Status::Stalemate(StalemateReason::Repetition) => {
                write!(f, "stalemate (threefold repetition)")
            }
        }
    }
}

impl Position {
    /// Whether the side to move is in check.
    #[must_use]
    pub fn in_check(&self) -> bool {
        self.is_in_check(self.side_to_move)
    }

    /// Status of this position given its lineage.
    ///
    /// `history` lists the keys of every position in the lineage, the current
    /// one included; pass an empty slice for a position with no lineage.
    #[must_use]
    pub fn status(&self, history: &[PositionKey]) -> Status {
        let key = self.key();
        classify(
            self,
            &key,
            self.in_check(),
            self.has_legal_moves(),
            history,
        )
    }
}

/// Number of times `key` occurs in `history`
#[must_use]
pub fn repetition_count(key: &PositionKey, history: &[PositionKey]) -> usize {
    history.iter().filter(|k| *k == key).count()
}

fn classify(
    position: &Position,
    key: &PositionKey,
    in_check: bool,
    has_moves: bool,
    history: &[PositionKey],
) -> Status {
    if !has_moves {
        return if in_check {
            Status::Checkmate
        } else {
            Status::Stalemate(StalemateReason::NoMoves)
        };
    }
    if position.halfmove_clock >= FIFTY_MOVE_LIMIT {
        return Status::Stalemate(StalemateReason::FiftyMoveRule);
    }
    if repetition_count(key, history) >= REPETITION_LIMIT {
        return Status::Stalemate(StalemateReason::Repetition);
    }
    if in_check {
        Status::Check
    } else {
        Status::Normal
    }
}

#[derive(Clone, Copy, Debug)]
struct CacheEntry {
    in_check: bool,
    has_moves: Option<bool>,
}

/// Memoized per-position facts, keyed by the canonical position key.
///
/// Check status is stored as soon as an entry is created; whether the side to
/// move has any legal move is filled in on the first status query. When the
/// number of entries exceeds the capacity the whole table is dropped.
pub struct StatusCache {
    entries: Mutex<HashMap<PositionKey, CacheEntry>>,
    capacity: usize,
}

impl Default for StatusCache {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusCache {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(STATUS_CACHE_CAPACITY)
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        StatusCache {
            entries: Mutex::new(HashMap::new()),
            capacity: capacity.max(1),
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    /// Whether the side to move is in check, memoized.
    #[must_use]
    pub fn in_check(&self, position: &Position) -> bool {
        let key = position.key();
        if let Some(entry) = self.entries.lock().get(&key) {
            return entry.in_check;
        }
        let in_check = position.in_check();
        self.insert(
            key,
            CacheEntry {
                in_check,
                has_moves: None,
            },
        );
        in_check
    }

    /// Cached equivalent of [`Position::status`].
    #[must_use]
    pub fn status(&self, position: &Position, history: &[PositionKey]) -> Status {
        let key = position.key();
        let cached = self.entries.lock().get(&key).copied();

        let (in_check, has_moves) = match cached {
            Some(CacheEntry {
                in_check,
                has_moves: Some(has_moves),
            }) => (in_check, has_moves),
            Some(CacheEntry { in_check, .. }) => {
                let has_moves = position.has_legal_moves();
                self.insert(
                    key.clone(),
                    CacheEntry {
                        in_check,
                        has_moves: Some(has_moves),
                    },
                );
                (in_check, has_moves)
            }
            None => {
                let in_check = position.in_check();
                let has_moves = position.has_legal_moves();
                self.insert(
                    key.clone(),
                    CacheEntry {
                        in_check,
                        has_moves: Some(has_moves),
                    },
                );
                (in_check, has_moves)
            }
        };

        classify(position, &key, in_check, has_moves, history)
    }

    fn insert(&self, key: PositionKey, entry: CacheEntry) {
        let mut entries = self.entries.lock();
        if entries.len() >= self.capacity && !entries.contains_key(&key) {
            log::debug!(
                "status cache reached {} entries, clearing",
                entries.len()
            );
            entries.clear();
        }
        entries.insert(key, entry);
    }
}

impl fmt::Debug for StatusCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatusCache")
            .field("len", &self.len())
            .field("capacity", &self.capacity)
            .finish()
    }
}

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::EvalWeights;

/// Widest candidate list considered at the root by best-first search
pub const DEFAULT_ROOT_WIDTH: usize = 16;

/// Narrowest candidate list best-first search shrinks to
pub const DEFAULT_MIN_WIDTH: usize = 2;

/// Playing strength tiers, 1 (weakest) to 5.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Difficulty {
    /// Uniformly random legal move
    Random,
    /// One-ply maximization of the simple heuristic
    Greedy,
    /// Fixed-depth minimax on the simple heuristic
    Minimax,
    /// Fixed-depth minimax on the advanced heuristic
    AdvancedMinimax,
    /// Breadth-limited best-first search on the advanced heuristic
    BestFirst,
}

impl Difficulty {
    pub const ALL: [Difficulty; 5] = [
        Difficulty::Random,
        Difficulty::Greedy,
        Difficulty::Minimax,
        Difficulty::AdvancedMinimax,
        Difficulty::BestFirst,
    ];

    /// Numeric tier, 1 to 5
    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            Difficulty::Random => 1,
            Difficulty::Greedy => 2,
            Difficulty::Minimax => 3,
            Difficulty::AdvancedMinimax => 4,
            Difficulty::BestFirst => 5,
        }
    }

    /// Plies searched when no depth is given
    #[must_use]
    pub const fn default_depth(self) -> u32 {
        match self {
            Difficulty::Random | Difficulty::Greedy => 1,
            Difficulty::Minimax | Difficulty::AdvancedMinimax => 2,
            Difficulty::BestFirst => 3,
        }
    }

    /// Whether this tier scores leaves with the advanced heuristic
    #[must_use]
    pub const fn uses_advanced(self) -> bool {
        matches!(self, Difficulty::AdvancedMinimax | Difficulty::BestFirst)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("difficulty must be between 1 and 5, got '{found}'")]
pub struct DifficultyError {
    found: String,
}

impl TryFrom<u8> for Difficulty {
    type Error = DifficultyError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Difficulty::ALL
            .iter()
            .copied()
            .find(|d| d.level() == level)
            .ok_or(DifficultyError {
                found: level.to_string(),
            })
    }
}

impl FromStr for Difficulty {
    type Err = DifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let level: u8 = s.trim().parse().map_err(|_| DifficultyError {
            found: s.to_string(),
        })?;
        Difficulty::try_from(level)
    }
}

/// Everything a single `best_move` call needs to know.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchConfig {
    pub difficulty: Difficulty,
    /// Plies to search; `None` uses the tier default
    pub depth: Option<u32>,
    /// Candidates deepened at the root by best-first search
    pub root_width: usize,
    /// Floor for the candidate count as best-first search narrows
    pub min_width: usize,
    /// Wall-clock budget after which the search returns its best so far
    pub deadline: Option<Duration>,
    /// Seed for tie-breaking; `None` draws from the OS
    pub seed: Option<u64>,
    pub weights: EvalWeights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig::new(Difficulty::Minimax)
    }
}

impl SearchConfig {
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        SearchConfig {
            difficulty,
            depth: None,
            root_width: DEFAULT_ROOT_WIDTH,
            min_width: DEFAULT_MIN_WIDTH,
            deadline: None,
            seed: None,
            weights: EvalWeights::default(),
        }
    }

    #[must_use]
    pub fn with_depth(mut self, depth: Option<u32>) -> Self {
        self.depth = depth;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Depth actually searched, never below one ply
    #[must_use]
    pub fn effective_depth(&self) -> u32 {
        self.depth
            .unwrap_or_else(|| self.difficulty.default_depth())
            .max(1)
    }
}

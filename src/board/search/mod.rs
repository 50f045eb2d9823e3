//! Move selection for the automated opponent.
//!
//! Five tiers share one search context:
//! - Random choice among legal moves
//! - Greedy one-ply maximization
//! - Fixed-depth minimax, simple or advanced heuristic
//! - Breadth-limited best-first search
//!
//! Every branch works on its own copy of the position. Repetition history is
//! copied from the caller and extended along the current line only.

mod best_first;
mod job;
mod minimax;
mod params;

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::status::{Status, StatusCache};
use super::{EvalWeights, Move, Position, PositionKey, MATE_VALUE};

pub use job::{spawn_search, SearchJob};
pub use params::{
    Difficulty, DifficultyError, SearchConfig, DEFAULT_MIN_WIDTH, DEFAULT_ROOT_WIDTH,
};

/// Nodes between deadline checks
const DEADLINE_POLL_NODES: u64 = 64;

/// Outcome of a search
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// Chosen move, `None` only when there was no legal move
    pub best_move: Option<Move>,
    /// Value of the chosen move from the mover's point of view
    pub value: i32,
    /// Positions visited
    pub nodes: u64,
    /// Whether a stop request or deadline cut the search short
    pub stopped: bool,
}

impl SearchResult {
    const fn empty() -> Self {
        SearchResult {
            best_move: None,
            value: 0,
            nodes: 0,
            stopped: false,
        }
    }
}

/// Pick a move for the side to move.
///
/// `history` holds the lineage's position keys, the current position last.
/// Returns `None` when there is no legal move; game over is the caller's
/// concern.
#[must_use]
pub fn best_move(
    position: &Position,
    history: &[PositionKey],
    config: &SearchConfig,
    cache: &StatusCache,
) -> Option<Move> {
    let stop = AtomicBool::new(false);
    search(position, history, config, cache, &stop).best_move
}

/// Run a search that also honors an external stop flag.
pub fn search(
    position: &Position,
    history: &[PositionKey],
    config: &SearchConfig,
    cache: &StatusCache,
    stop: &AtomicBool,
) -> SearchResult {
    let moves = position.legal_moves();
    if moves.is_empty() {
        log::warn!("search invoked with no legal moves: {}", position.to_pdn());
        return SearchResult::empty();
    }

    let start = Instant::now();
    let mut ctx = SearchContext::new(position, history, config, cache, stop, start);
    let depth = config.effective_depth();

    let chosen = match config.difficulty {
        Difficulty::Random => moves.choose(&mut ctx.rng).map(|&mv| (mv, 0)),
        Difficulty::Greedy => ctx.minimax_root(position, &moves, 1),
        Difficulty::Minimax | Difficulty::AdvancedMinimax => {
            ctx.minimax_root(position, &moves, depth)
        }
        Difficulty::BestFirst => ctx.best_first_root(position, &moves, depth),
    };

    if ctx.stopped {
        log::warn!(
            "search stopped early after {} nodes ({:?})",
            ctx.nodes,
            start.elapsed()
        );
    }

    let result = SearchResult {
        best_move: chosen.map(|(mv, _)| mv),
        value: chosen.map_or(0, |(_, value)| value),
        nodes: ctx.nodes,
        stopped: ctx.stopped,
    };
    log::debug!(
        "difficulty {} depth {} nodes {} time {:?} best {} value {}",
        config.difficulty,
        depth,
        result.nodes,
        start.elapsed(),
        result
            .best_move
            .map_or_else(|| "none".to_string(), |mv| mv.to_string()),
        result.value
    );
    result
}

/// State shared by every node of one search
pub(crate) struct SearchContext<'a> {
    cache: &'a StatusCache,
    weights: Option<&'a EvalWeights>,
    min_width: usize,
    root_width: usize,
    stop: &'a AtomicBool,
    deadline: Option<Instant>,
    /// Keys along the current line since the last irreversible move
    history: Vec<PositionKey>,
    rng: StdRng,
    nodes: u64,
    stopped: bool,
}

impl<'a> SearchContext<'a> {
    fn new(
        position: &Position,
        history: &[PositionKey],
        config: &'a SearchConfig,
        cache: &'a StatusCache,
        stop: &'a AtomicBool,
        start: Instant,
    ) -> Self {
        // Earlier positions cannot recur once a capture or pawn move intervenes
        let window = (position.halfmove_clock() as usize + 1).min(history.len());
        let history = history[history.len() - window..].to_vec();

        SearchContext {
            cache,
            weights: config
                .difficulty
                .uses_advanced()
                .then_some(&config.weights),
            min_width: config.min_width.max(1),
            root_width: config.root_width.max(1),
            stop,
            deadline: config.deadline.map(|budget| start + budget),
            history,
            rng: config
                .seed
                .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64),
            nodes: 0,
            stopped: false,
        }
    }

    fn should_stop(&mut self) -> bool {
        if self.stopped {
            return true;
        }
        if self.stop.load(Ordering::Relaxed) {
            self.stopped = true;
        } else if let Some(deadline) = self.deadline {
            if self.nodes % DEADLINE_POLL_NODES == 0 && Instant::now() >= deadline {
                self.stopped = true;
            }
        }
        self.stopped
    }

    /// Step into `child`, extending the line's history. Pair with `leave`.
    fn enter(&mut self, child: &Position) -> Status {
        self.nodes += 1;
        self.history.push(child.key());
        self.cache.status(child, &self.history)
    }

    fn leave(&mut self) {
        self.history.pop();
    }

    /// Static value from white's point of view. Mates found nearer the root
    /// score further from zero.
    fn leaf(&self, position: &Position, status: Status, ply: u32) -> i32 {
        let value = position.evaluate(status, self.weights);
        if status == Status::Checkmate {
            value - value.signum() * ply as i32
        } else {
            value
        }
    }

    /// Highest-valued entry; equal values replace the incumbent with
    /// probability 2/n so play is not deterministic.
    fn choose(&mut self, scored: &[(Move, i32)]) -> Option<(Move, i32)> {
        let swap_chance = (2.0 / scored.len() as f64).min(1.0);
        let mut best: Option<(Move, i32)> = None;
        for &(mv, value) in scored {
            best = match best {
                Some((_, best_value)) if value > best_value => Some((mv, value)),
                Some((_, best_value)) if value == best_value && self.rng.gen_bool(swap_chance) => {
                    Some((mv, value))
                }
                None => Some((mv, value)),
                keep => keep,
            };
        }
        best
    }
}

/// Value magnitude at or above which a score means forced mate
#[must_use]
pub fn is_mate_value(value: i32) -> bool {
    value.abs() > MATE_VALUE - 1_000
}

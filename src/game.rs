//! One game lineage: the current position, the keys of every position that
//! led to it, and the moves played.

use std::io;
use std::sync::Arc;

use crate::board::search::{self, spawn_search, SearchJob, SearchResult};
use crate::board::{
    repetition_count, ChessError, Difficulty, Move, MoveError, Position, PositionKey,
    SearchConfig, Square, Status, StatusCache,
};

/// A game in progress.
///
/// Owns its position and repetition history. The status cache may be shared
/// with other games or with background searches.
#[derive(Debug, Clone)]
pub struct Game {
    position: Position,
    /// Keys of every position in the lineage, the current one last
    history: Vec<PositionKey>,
    /// Positions before each played move, for undo
    previous: Vec<Position>,
    moves: Vec<Move>,
    cache: Arc<StatusCache>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A new game from the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Self::from_position(Position::new())
    }

    /// Start a game from a PDN string.
    pub fn from_pdn(pdn: &str) -> Result<Self, ChessError> {
        let position = Position::from_pdn(pdn)?;
        log::debug!("loaded position {pdn}");
        Ok(Self::from_position(position))
    }

    #[must_use]
    pub fn from_position(position: Position) -> Self {
        Self::with_cache(position, Arc::new(StatusCache::new()))
    }

    /// Start a game that shares an existing status cache.
    #[must_use]
    pub fn with_cache(position: Position, cache: Arc<StatusCache>) -> Self {
        Game {
            history: vec![position.key()],
            position,
            previous: Vec::new(),
            moves: Vec::new(),
            cache,
        }
    }

    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[must_use]
    pub fn history(&self) -> &[PositionKey] {
        &self.history
    }

    /// Moves played since the game was loaded
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    #[must_use]
    pub fn cache(&self) -> &Arc<StatusCache> {
        &self.cache
    }

    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        self.position.legal_moves()
    }

    #[must_use]
    pub fn legal_moves_for(&self, square: Square) -> Vec<Move> {
        self.position.legal_moves_for(square)
    }

    /// Play `mv` if it is currently legal.
    pub fn play(&mut self, mv: &Move) -> Result<(), ChessError> {
        if !self.legal_moves_for(mv.from()).contains(mv) {
            return Err(MoveError::IllegalMove {
                notation: mv.to_string(),
            }
            .into());
        }
        self.push(*mv);
        Ok(())
    }

    /// Play a move given in coordinate notation (`e2e4`, `e7e8q`).
    pub fn play_notation(&mut self, text: &str) -> Result<Move, ChessError> {
        let mv = self.position.parse_move(text)?;
        self.push(mv);
        Ok(mv)
    }

    fn push(&mut self, mv: Move) {
        let next = self.position.apply(&mv);
        let previous = std::mem::replace(&mut self.position, next);
        self.previous.push(previous);
        self.history.push(self.position.key());
        self.moves.push(mv);
    }

    /// Take back the last move, returning it.
    pub fn undo(&mut self) -> Option<Move> {
        let previous = self.previous.pop()?;
        self.position = previous;
        self.history.pop();
        self.moves.pop()
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.cache.status(&self.position, &self.history)
    }

    #[must_use]
    pub fn in_check(&self) -> bool {
        self.cache.in_check(&self.position)
    }

    /// Times the current position has occurred in this lineage
    #[must_use]
    pub fn repetition_count(&self) -> usize {
        repetition_count(&self.position.key(), &self.history)
    }

    /// Static value of the current position with its lineage taken into
    /// account, positive favoring white.
    #[must_use]
    pub fn value(&self, advanced: bool) -> i32 {
        let weights = advanced.then(crate::board::EvalWeights::default);
        self.position.evaluate(self.status(), weights.as_ref())
    }

    /// Choose a move for the side to move.
    #[must_use]
    pub fn best_move(&self, difficulty: Difficulty, depth: Option<u32>) -> Option<Move> {
        search::best_move(
            &self.position,
            &self.history,
            &SearchConfig::new(difficulty).with_depth(depth),
            &self.cache,
        )
    }

    /// Run a fully configured search on the calling thread.
    #[must_use]
    pub fn search(&self, config: &SearchConfig) -> SearchResult {
        let stop = std::sync::atomic::AtomicBool::new(false);
        search::search(&self.position, &self.history, config, &self.cache, &stop)
    }

    /// Run a search on a worker thread.
    pub fn spawn_search(&self, config: SearchConfig) -> io::Result<SearchJob> {
        spawn_search(
            self.position.clone(),
            self.history.clone(),
            config,
            Arc::clone(&self.cache),
        )
    }

    #[must_use]
    pub fn to_pdn(&self) -> String {
        self.position.to_pdn()
    }
}

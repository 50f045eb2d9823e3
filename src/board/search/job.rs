//! Running a search on a worker thread.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use super::{search, SearchConfig, SearchResult};
use crate::board::status::StatusCache;
use crate::board::{Move, Position, PositionKey};

/// Search thread stack size (8 MB)
const SEARCH_STACK_SIZE: usize = 8 * 1024 * 1024;

/// Active background search
pub struct SearchJob {
    /// Stop flag for the search
    pub stop: Arc<AtomicBool>,
    handle: JoinHandle<SearchResult>,
}

impl SearchJob {
    /// Signal stop without waiting
    pub fn signal_stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the search to finish on its own
    pub fn wait(self) -> Option<Move> {
        self.join().best_move
    }

    /// Stop the search and wait for the thread to finish
    pub fn stop_and_wait(self) -> Option<Move> {
        self.signal_stop();
        self.wait()
    }

    /// Wait and return the full result
    pub fn join(self) -> SearchResult {
        match self.handle.join() {
            Ok(result) => result,
            Err(_) => {
                log::error!("search thread panicked");
                SearchResult::empty()
            }
        }
    }
}

/// Start a search on its own thread. The position and history are moved
/// into the worker; the cache is shared.
pub fn spawn_search(
    position: Position,
    history: Vec<PositionKey>,
    config: SearchConfig,
    cache: Arc<StatusCache>,
) -> io::Result<SearchJob> {
    let stop = Arc::new(AtomicBool::new(false));
    let stop_flag = Arc::clone(&stop);

    let handle = thread::Builder::new()
        .name("search".to_string())
        .stack_size(SEARCH_STACK_SIZE)
        .spawn(move || search(&position, &history, &config, &cache, &stop_flag))?;

    Ok(SearchJob { stop, handle })
}

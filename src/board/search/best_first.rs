//! Breadth-limited best-first search.
//!
//! Every move is scored one ply deep and sorted best first; only the leading
//! candidates are searched further. The candidate count halves with each
//! ply until it reaches the configured floor.

use super::SearchContext;
use crate::board::status::Status;
use crate::board::{Move, Position};

struct Candidate {
    mv: Move,
    child: Position,
    /// One-ply value from the mover's point of view
    value: i32,
}

impl SearchContext<'_> {
    pub(super) fn best_first_root(
        &mut self,
        position: &Position,
        moves: &[Move],
        depth: u32,
    ) -> Option<(Move, i32)> {
        let candidates = self.expand(position, moves, 0);
        if depth <= 1 {
            let scored: Vec<(Move, i32)> = candidates.iter().map(|c| (c.mv, c.value)).collect();
            return self.choose(&scored);
        }

        let mover = position.side_to_move().sign();
        let next_width = self.narrow(self.root_width);
        let mut scored = Vec::with_capacity(self.root_width);

        for (i, candidate) in candidates.iter().take(self.root_width).enumerate() {
            if i > 0 && self.should_stop() {
                break;
            }
            let status = self.enter(&candidate.child);
            let value = mover * self.best_first(&candidate.child, status, depth - 1, next_width, 1);
            self.leave();
            log::trace!(
                "root {} shallow {} deep {}",
                candidate.mv,
                candidate.value,
                value
            );
            scored.push((candidate.mv, value));
        }

        self.choose(&scored)
    }

    /// Value of `position` from white's point of view.
    fn best_first(
        &mut self,
        position: &Position,
        status: Status,
        depth: u32,
        width: usize,
        ply: u32,
    ) -> i32 {
        if depth == 0 || status.is_game_over() || self.should_stop() {
            return self.leaf(position, status, ply);
        }

        let mover = position.side_to_move().sign();
        let candidates = self.expand(position, &position.legal_moves(), ply);
        let Some(first) = candidates.first() else {
            return self.leaf(position, status, ply);
        };
        if depth == 1 {
            return mover * first.value;
        }

        let next_width = self.narrow(width);
        let mut best: Option<i32> = None;
        for candidate in candidates.iter().take(width) {
            let child_status = self.enter(&candidate.child);
            let value =
                mover * self.best_first(&candidate.child, child_status, depth - 1, next_width, ply + 1);
            self.leave();
            best = Some(best.map_or(value, |b| b.max(value)));
            if self.stopped {
                break;
            }
        }

        best.map_or_else(|| mover * first.value, |best| mover * best)
    }

    /// Apply and score every move one ply deep, best first. The sort is
    /// stable so equal values keep generation order.
    fn expand(&mut self, position: &Position, moves: &[Move], ply: u32) -> Vec<Candidate> {
        let mover = position.side_to_move().sign();
        let mut candidates: Vec<Candidate> = moves
            .iter()
            .map(|mv| {
                let child = position.apply(mv);
                let status = self.enter(&child);
                let value = mover * self.leaf(&child, status, ply + 1);
                self.leave();
                Candidate {
                    mv: *mv,
                    child,
                    value,
                }
            })
            .collect();
        candidates.sort_by(|a, b| b.value.cmp(&a.value));
        candidates
    }

    fn narrow(&self, width: usize) -> usize {
        (width / 2).max(self.min_width)
    }
}

//! Plain fixed-depth minimax. No pruning: every line is searched to the
//! full depth unless it ends the game first.

use super::SearchContext;
use crate::board::status::Status;
use crate::board::{Move, Position};

impl SearchContext<'_> {
    /// Score each root move `depth` plies deep and choose among them.
    pub(super) fn minimax_root(
        &mut self,
        position: &Position,
        moves: &[Move],
        depth: u32,
    ) -> Option<(Move, i32)> {
        let mover = position.side_to_move().sign();
        let mut scored = Vec::with_capacity(moves.len());

        for (i, mv) in moves.iter().enumerate() {
            if i > 0 && self.should_stop() {
                break;
            }
            let child = position.apply(mv);
            let status = self.enter(&child);
            let value = mover * self.minimax(&child, status, depth - 1, 1);
            self.leave();
            log::trace!("root {mv} value {value}");
            scored.push((*mv, value));
        }

        self.choose(&scored)
    }

    /// Value of `position` from white's point of view, searched `depth`
    /// more plies.
    fn minimax(&mut self, position: &Position, status: Status, depth: u32, ply: u32) -> i32 {
        if depth == 0 || status.is_game_over() || self.should_stop() {
            return self.leaf(position, status, ply);
        }

        let mover = position.side_to_move().sign();
        let mut best: Option<i32> = None;
        for mv in position.legal_moves() {
            let child = position.apply(&mv);
            let child_status = self.enter(&child);
            let value = mover * self.minimax(&child, child_status, depth - 1, ply + 1);
            self.leave();
            best = Some(best.map_or(value, |b| b.max(value)));
        }

        match best {
            Some(best) => mover * best,
            None => self.leaf(position, status, ply),
        }
    }
}

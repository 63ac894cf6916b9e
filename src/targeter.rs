//! Stateful hunt/target firing policy.

use crate::board::{Board, CellState, Point};
use crate::common::EngineError;
use crate::fleet::Fleet;
use crate::heatmap::{heatmap, hottest};
use std::collections::VecDeque;

/// Which policy branch the targeter is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargeterMode {
    /// No partially resolved ship; fire at the heatmap argmax.
    Hunting,
    /// Following up around known hits via the FIFO queue.
    Targeting,
}

/// Picks the next cell to fire at: a follow-up queue around confirmed hits,
/// falling back to the probability heatmap when the queue drains.
///
/// One instance per match; the queue is private mutable state and is
/// discarded with the match. Not internally synchronized — one logical
/// caller at a time.
pub struct HuntTargeter {
    mode: TargeterMode,
    queue: VecDeque<Point>,
}

impl Default for HuntTargeter {
    fn default() -> Self {
        Self::new()
    }
}

impl HuntTargeter {
    pub fn new() -> Self {
        HuntTargeter {
            mode: TargeterMode::Hunting,
            queue: VecDeque::new(),
        }
    }

    pub fn mode(&self) -> TargeterMode {
        self.mode
    }

    /// Next cell to fire at.
    ///
    /// In `Targeting`, pops the queue in FIFO order, skipping entries whose
    /// cell is no longer `Empty`; when the queue drains, drops back to
    /// `Hunting` and returns the heatmap argmax (ties broken in scan
    /// order). Erroring with `ExhaustedBoard` when no `Empty` cell remains
    /// is a caller precondition violation, not a recoverable condition.
    pub fn recommend(&mut self, board: &Board, fleet: &Fleet) -> Result<Point, EngineError> {
        if self.mode == TargeterMode::Targeting {
            while let Some(p) = self.queue.pop_front() {
                if board.cell(p) == CellState::Empty {
                    log::debug!("targeter: follow-up at ({}, {})", p.row, p.col);
                    return Ok(p);
                }
            }
            self.mode = TargeterMode::Hunting;
        }
        let map = heatmap(board, fleet);
        let p = hottest(board, &map).ok_or(EngineError::ExhaustedBoard)?;
        log::debug!(
            "targeter: hunting at ({}, {}) weight {}",
            p.row,
            p.col,
            map[p.row][p.col]
        );
        Ok(p)
    }

    /// Record a confirmed hit: enqueue the still-`Empty` 4-neighbors of the
    /// hit cell and switch to `Targeting`.
    pub fn on_hit(&mut self, board: &Board, p: Point) {
        for n in p.von_neumann() {
            if board.cell(n) == CellState::Empty {
                self.queue.push_back(n);
            }
        }
        self.mode = TargeterMode::Targeting;
    }

    /// Record a sunk ship: drop all queued follow-ups and return to
    /// `Hunting`. The exclusion pass and fleet decrement for the resolved
    /// ship are the caller's job before the next `recommend`.
    pub fn on_sunk(&mut self) {
        self.queue.clear();
        self.mode = TargeterMode::Hunting;
    }
}

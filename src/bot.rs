//! Per-match bot driver: owns the opponent-view board, the remaining fleet
//! and the hunt/target policy, and applies shot results between turns.

use crate::adjacency::exclude_around;
use crate::board::{Board, CellState, Point};
use crate::common::{EngineError, ShotResult};
use crate::fleet::Fleet;
use crate::heatmap::{heatmap, Heatmap};
use crate::targeter::{HuntTargeter, TargeterMode};

/// Match-scoped targeting state. Created when a match starts, discarded
/// with it; never shared across matches.
pub struct Bot {
    board: Board,
    fleet: Fleet,
    targeter: HuntTargeter,
    shots: u32,
    hits: u32,
}

impl Default for Bot {
    fn default() -> Self {
        Self::new()
    }
}

impl Bot {
    /// Fresh match: empty opponent view, full enemy fleet.
    pub fn new() -> Self {
        Bot {
            board: Board::new(),
            fleet: Fleet::full(),
            targeter: HuntTargeter::new(),
            shots: 0,
            hits: 0,
        }
    }

    /// Opponent-view board (our shots and derived exclusions).
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Enemy ships not yet sunk.
    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Current policy branch, for the display layer.
    pub fn mode(&self) -> TargeterMode {
        self.targeter.mode()
    }

    /// Current heatmap, for the human-assist overlay.
    pub fn heatmap(&self) -> Heatmap {
        heatmap(&self.board, &self.fleet)
    }

    /// Next cell to fire at.
    pub fn recommend(&mut self) -> Result<Point, EngineError> {
        self.targeter.recommend(&self.board, &self.fleet)
    }

    /// Apply the session's reported result for a shot at `p`.
    ///
    /// On `sunk`, recovers the whole ship from the reported cell, excludes
    /// its Moore neighborhood and decrements the fleet count for its
    /// length, so the next recommendation works off the updated board.
    pub fn apply_shot(&mut self, p: Point, result: ShotResult) {
        debug_assert_eq!(self.board.cell(p), CellState::Empty);
        self.shots += 1;
        match result {
            ShotResult::Miss => {
                self.board.set(p, CellState::Miss);
            }
            ShotResult::Hit => {
                self.hits += 1;
                self.board.set(p, CellState::Hit);
                self.targeter.on_hit(&self.board, p);
            }
            ShotResult::Sunk => {
                self.hits += 1;
                self.board.set(p, CellState::Hit);
                let ship = self.board.locate_ship(p);
                log::debug!("bot: sunk ship of length {}", ship.len());
                exclude_around(&mut self.board, &ship);
                self.fleet.decrement(ship.len());
                self.targeter.on_sunk();
            }
        }
    }

    /// Whether every enemy ship has been sunk.
    pub fn fleet_sunk(&self) -> bool {
        self.fleet.is_empty()
    }

    pub fn shots(&self) -> u32 {
        self.shots
    }

    /// Hit percentage over all shots so far.
    pub fn accuracy(&self) -> f32 {
        if self.shots == 0 {
            return 0.0;
        }
        100.0 * self.hits as f32 / self.shots as f32
    }
}

//! Narrow interface to the remote game session, plus an in-process
//! opponent used by the simulator and integration tests.

use crate::board::{Board, CellState, Point};
use crate::common::ShotResult;
use crate::coords::{board_coords, parse_coord};
use crate::enumerate::random_fleet;
use rand::Rng;
use std::collections::HashSet;

/// The session collaborator as the engine sees it: a board snapshot in
/// external notation and shot results tagged `hit`/`miss`/`sunk`. Network
/// transport, retries and authentication live behind this trait and are
/// not this crate's concern.
#[async_trait::async_trait]
pub trait GameSession: Send {
    /// Our own board, as the occupied-cell coordinate list the server holds.
    async fn board(&mut self) -> anyhow::Result<Vec<String>>;

    /// Fire at a coordinate in external notation.
    async fn fire(&mut self, coord: &str) -> anyhow::Result<ShotResult>;
}

/// In-process opponent holding a hidden random fleet and answering shots
/// truthfully. Stands in for the remote server during simulation.
pub struct LocalSession {
    hidden: Board,
    ships: Vec<Vec<Point>>,
    hit: HashSet<Point>,
    own: Board,
}

impl LocalSession {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let hidden = random_fleet(rng);
        // ships never touch, so 4-connected components are exactly the ships
        let mut ships: Vec<Vec<Point>> = Vec::new();
        for p in Board::points() {
            if hidden.cell(p) != CellState::Ship {
                continue;
            }
            if ships.iter().any(|ship| ship.contains(&p)) {
                continue;
            }
            ships.push(hidden.connected_region(p, CellState::Ship));
        }
        log::info!("local session: hidden fleet of {} ships", ships.len());
        LocalSession {
            hidden,
            ships,
            hit: HashSet::new(),
            own: random_fleet(rng),
        }
    }
}

#[async_trait::async_trait]
impl GameSession for LocalSession {
    async fn board(&mut self) -> anyhow::Result<Vec<String>> {
        Ok(board_coords(&self.own))
    }

    async fn fire(&mut self, coord: &str) -> anyhow::Result<ShotResult> {
        let p = parse_coord(coord)?;
        if self.hidden.cell(p) != CellState::Ship {
            return Ok(ShotResult::Miss);
        }
        self.hit.insert(p);
        let ship = self
            .ships
            .iter()
            .find(|ship| ship.contains(&p))
            .ok_or_else(|| anyhow::anyhow!("hidden board inconsistent at {coord}"))?;
        if ship.iter().all(|cell| self.hit.contains(cell)) {
            Ok(ShotResult::Sunk)
        } else {
            Ok(ShotResult::Hit)
        }
    }
}

//! Exhaustive fleet-completion search and shape placement.

use crate::adjacency::exclude_around;
use crate::board::{Board, CellState, Point};
use crate::common::EngineError;
use crate::config::{BOARD_SIZE, TOTAL_SHIP_CELLS};
use crate::fleet::Fleet;
use crate::shapes::{fits, shapes, Shape};
use rand::Rng;

/// Place `shape` anchored at `anchor` on a copy of `board`: its cells become
/// `Ship` and its surroundings are excluded. Fails with `IllegalPlacement`
/// when any shape cell would leave the grid or land on a non-`Empty` cell.
pub fn try_place(board: &Board, shape: Shape, anchor: Point) -> Result<Board, EngineError> {
    if !fits(shape, board, anchor) {
        return Err(EngineError::IllegalPlacement);
    }
    let mut placed = *board;
    let mut cells = Vec::with_capacity(shape.len());
    for &offset in shape.iter() {
        // fits guarantees the translation stays in range
        if let Some(p) = anchor.offset(offset) {
            placed.set(p, CellState::Ship);
            cells.push(p);
        }
    }
    exclude_around(&mut placed, &cells);
    Ok(placed)
}

/// Exhaustively backtrack every complete, mutually consistent full-fleet
/// extension of a partial board.
///
/// Visits the largest remaining length first (fixed order, affects running
/// time only), scans anchors row-major, and recurses on an independent
/// board/fleet copy per branch so siblings never observe each other's
/// tentative placements. Exponential in the worst case; meant for
/// validation and analysis off the interactive path, with any time bound
/// imposed by the caller.
pub fn enumerate(board: &Board, fleet: &Fleet) -> Vec<Board> {
    let Some(length) = fleet.largest_remaining() else {
        return vec![*board];
    };
    log::debug!("enumerate: placing length {length}");

    let mut boards = Vec::new();
    for anchor in Board::points() {
        if board.cell(anchor) != CellState::Empty {
            continue;
        }
        for &shape in shapes(length) {
            if let Ok(placed) = try_place(board, shape, anchor) {
                let mut rest = *fleet;
                rest.decrement(length);
                boards.extend(enumerate(&placed, &rest));
            }
        }
    }
    boards
}

/// Random full-fleet board for the local practice opponent: rejection
/// sampling of anchor and shape per ship, largest lengths first, restarting
/// from scratch when a ship cannot be placed.
pub fn random_fleet<R: Rng>(rng: &mut R) -> Board {
    'restart: loop {
        let mut board = Board::new();
        let mut fleet = Fleet::full();
        while let Some(length) = fleet.largest_remaining() {
            let variants = shapes(length);
            let mut placed = false;
            for _ in 0..200 {
                let anchor = Point {
                    row: rng.random_range(0..BOARD_SIZE),
                    col: rng.random_range(0..BOARD_SIZE),
                };
                let shape = variants[rng.random_range(0..variants.len())];
                if let Ok(next) = try_place(&board, shape, anchor) {
                    board = next;
                    fleet.decrement(length);
                    placed = true;
                    break;
                }
            }
            if !placed {
                log::debug!("random_fleet: stuck placing length {length}, restarting");
                continue 'restart;
            }
        }
        // exclusion halos are working state; the hidden board keeps ships only
        let mut clean = Board::new();
        for p in Board::points() {
            if board.cell(p) == CellState::Ship {
                clean.set(p, CellState::Ship);
            }
        }
        debug_assert_eq!(clean.count(CellState::Ship), TOTAL_SHIP_CELLS);
        return clean;
    }
}

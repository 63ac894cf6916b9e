//! Per-cell likelihood heatmap over the remaining fleet.

use crate::board::{Board, CellState, Point};
use crate::config::{BOARD_SIZE, MAX_SHIP_LENGTH};
use crate::fleet::Fleet;
use crate::shapes::{fits, shapes};

/// Per-cell count of placement-consistent shape overlaps.
pub type Heatmap = [[u32; BOARD_SIZE]; BOARD_SIZE];

/// Count, for every cell, how many valid shape placements of the remaining
/// ship lengths would cover it.
///
/// This independently sums single-ship-type overlaps rather than computing
/// a normalized joint probability, so a length's count beyond the first
/// does not change the map; it is monotonic with true likelihood and cheap
/// enough to recompute every turn. The exact joint distribution would need
/// the exhaustive enumerator and is not used per-turn.
/// The result is independent of the order lengths are iterated in.
pub fn heatmap(board: &Board, fleet: &Fleet) -> Heatmap {
    let mut map = [[0u32; BOARD_SIZE]; BOARD_SIZE];
    for length in (1..=MAX_SHIP_LENGTH).rev() {
        if fleet.remaining(length) == 0 {
            continue;
        }
        for anchor in Board::points() {
            if board.cell(anchor) != CellState::Empty {
                continue;
            }
            for &shape in shapes(length) {
                if !fits(shape, board, anchor) {
                    continue;
                }
                for &offset in shape.iter() {
                    // in range, fits already checked every cell
                    if let Some(p) = anchor.offset(offset) {
                        map[p.row][p.col] += 1;
                    }
                }
            }
        }
    }
    map
}

/// Argmax of the heatmap over `Empty` cells, ties broken by lowest row then
/// lowest column. `None` when no `Empty` cell remains.
pub fn hottest(board: &Board, map: &Heatmap) -> Option<Point> {
    let mut best: Option<(Point, u32)> = None;
    for p in Board::points() {
        if board.cell(p) != CellState::Empty {
            continue;
        }
        let value = map[p.row][p.col];
        match best {
            Some((_, best_value)) if best_value >= value => {}
            _ => best = Some((p, value)),
        }
    }
    best.map(|(p, _)| p)
}

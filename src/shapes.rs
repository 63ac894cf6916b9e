//! Static shape catalog and placement fit checking.
//!
//! Ships in this game variant are polyominoes, not just straight lines:
//! length 4 admits lines, both L chiralities, T pieces and the 2×2 square.
//! Each shape is an offset pattern anchored at `(0, 0)` (always the first
//! entry); the catalog lists every rotation and reflection exactly once up
//! to translation. Built once as process-wide constants, never mutated.

use crate::board::{Board, CellState, Offset, Point};

/// One orientation of one ship length, as offsets from its anchor cell.
pub type Shape = &'static [Offset];

const LENGTH_ONE: [Shape; 1] = [&[(0, 0)]];

const LENGTH_TWO: [Shape; 2] = [&[(0, 0), (1, 0)], &[(0, 0), (0, 1)]];

const LENGTH_THREE: [Shape; 6] = [
    // lines
    &[(0, 0), (1, 0), (2, 0)],
    &[(0, 0), (0, 1), (0, 2)],
    // corner pieces
    &[(0, 0), (0, 1), (1, 1)],
    &[(0, 0), (0, 1), (1, 0)],
    &[(0, 0), (1, 0), (1, 1)],
    &[(0, 0), (0, 1), (-1, 1)],
];

const LENGTH_FOUR: [Shape; 15] = [
    // lines
    &[(0, 0), (1, 0), (2, 0), (3, 0)],
    &[(0, 0), (0, 1), (0, 2), (0, 3)],
    // l-shape mirrored
    &[(0, 0), (1, 0), (2, 0), (2, 1)],
    &[(0, 0), (0, 1), (0, 2), (-1, 2)],
    &[(0, 0), (0, 1), (1, 1), (2, 1)],
    &[(0, 0), (1, 0), (0, 1), (0, 2)],
    // l-shape
    &[(0, 0), (1, 0), (2, 0), (0, 1)],
    &[(0, 0), (1, 0), (1, 1), (1, 2)],
    &[(0, 0), (1, 0), (2, 0), (2, -1)],
    &[(0, 0), (0, 1), (0, 2), (1, 2)],
    // t-shape
    &[(0, 0), (1, 0), (2, 0), (1, 1)],
    &[(0, 0), (0, 1), (0, 2), (-1, 1)],
    &[(0, 0), (1, 0), (2, 0), (1, -1)],
    &[(0, 0), (0, 1), (0, 2), (1, 1)],
    // square
    &[(0, 0), (0, 1), (1, 0), (1, 1)],
];

/// All shape variants for a ship length. Empty for lengths outside 1..=4.
pub fn shapes(length: usize) -> &'static [Shape] {
    match length {
        1 => &LENGTH_ONE,
        2 => &LENGTH_TWO,
        3 => &LENGTH_THREE,
        4 => &LENGTH_FOUR,
        _ => &[],
    }
}

/// Whether `shape` anchored at `anchor` lands entirely on `Empty` cells
/// inside the grid. Pure; the board is not modified.
pub fn fits(shape: Shape, board: &Board, anchor: Point) -> bool {
    shape.iter().all(|&offset| {
        anchor
            .offset(offset)
            .is_some_and(|p| board.cell(p) == CellState::Empty)
    })
}

/// Whether a completed ship's cell set is one of the catalog shapes for its
/// length, in any position. Used to validate manual placements.
pub fn matches_catalog(cells: &[Point]) -> bool {
    let target = normalize(cells.iter().map(|p| (p.row as i8, p.col as i8)));
    shapes(cells.len())
        .iter()
        .any(|shape| normalize(shape.iter().copied()) == target)
}

/// Translate a cell set so its minimum row and column are zero, sorted.
fn normalize(cells: impl Iterator<Item = (i8, i8)>) -> Vec<(i8, i8)> {
    let cells: Vec<(i8, i8)> = cells.collect();
    let min_row = cells.iter().map(|&(r, _)| r).min().unwrap_or(0);
    let min_col = cells.iter().map(|&(_, c)| c).min().unwrap_or(0);
    let mut normalized: Vec<(i8, i8)> = cells
        .iter()
        .map(|&(r, c)| (r - min_row, c - min_col))
        .collect();
    normalized.sort_unstable();
    normalized
}

//! Adjacency marking around partially and fully known ships.
//!
//! Ships never touch, even diagonally. While a ship is being placed
//! cell-by-cell only its orthogonal neighbors are legal next cells
//! (candidate pass); once its full extent is known every surrounding cell
//! is provably water (exclusion pass).

use crate::board::{Board, CellState, Point};

/// Reset all transient candidate marks back to `Empty`.
///
/// Only valid on a board where `Hit` is used as the candidate mark, i.e.
/// during manual placement. Must run before re-marking so stale candidates
/// from an earlier, now-invalid orientation never survive.
pub fn clear_candidates(board: &mut Board) {
    for p in Board::points() {
        if board.cell(p) == CellState::Hit {
            board.set(p, CellState::Empty);
        }
    }
}

/// Candidate pass: clear previous candidates, then mark the `Empty`
/// 4-neighbors of every confirmed cell of the in-progress ship as `Hit`,
/// meaning "a legal next click".
pub fn mark_candidates(board: &mut Board, ship: &[Point]) {
    clear_candidates(board);
    for &cell in ship {
        for n in cell.von_neumann() {
            if board.cell(n) == CellState::Empty {
                board.set(n, CellState::Hit);
            }
        }
    }
}

/// Exclusion pass: mark the `Empty` Moore neighbors of every cell of a
/// finished ship as `Miss`, permanently removing them from placement and
/// probability consideration. Idempotent; never touches non-`Empty` cells.
pub fn exclude_around(board: &mut Board, ship: &[Point]) {
    for &cell in ship {
        for n in cell.moore() {
            if board.cell(n) == CellState::Empty {
                board.set(n, CellState::Miss);
            }
        }
    }
}

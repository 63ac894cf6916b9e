//! Board state: a fixed 10×10 grid of cell states, plus point arithmetic
//! and the flood fill that recovers a sunk ship from one reported hit.

use crate::common::EngineError;
use crate::config::BOARD_SIZE;
use core::fmt;
use std::collections::VecDeque;

/// State of a single board cell.
///
/// Transitions are monotonic during combat. The one exception is the
/// transient candidate marking used while a ship is placed manually:
/// candidates reuse `Hit` and are fully cleared and recomputed after every
/// editing step, so they never coexist with combat hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    /// Unknown or unoccupied.
    #[default]
    Empty,
    /// Confirmed own ship segment.
    Ship,
    /// Confirmed shot on a ship segment (or a placement candidate, see above).
    Hit,
    /// Confirmed water, either shot at or excluded by adjacency rules.
    Miss,
}

/// Relative cell offset within a shape; may be negative.
pub type Offset = (i8, i8);

/// The 4 orthogonal neighbor offsets.
pub const VON_NEUMANN: [Offset; 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// The 8 surrounding neighbor offsets.
pub const MOORE: [Offset; 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A grid coordinate, both axes in `[0, BOARD_SIZE)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    /// Checked constructor; rejects coordinates outside the grid.
    pub fn new(row: usize, col: usize) -> Result<Self, EngineError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(EngineError::InvalidCoordinate);
        }
        Ok(Point { row, col })
    }

    /// Translate by a shape offset, `None` when the result leaves the grid.
    pub fn offset(self, (dr, dc): Offset) -> Option<Point> {
        let row = self.row as isize + dr as isize;
        let col = self.col as isize + dc as isize;
        if (0..BOARD_SIZE as isize).contains(&row) && (0..BOARD_SIZE as isize).contains(&col) {
            Some(Point {
                row: row as usize,
                col: col as usize,
            })
        } else {
            None
        }
    }

    /// In-range orthogonal neighbors.
    pub fn von_neumann(self) -> impl Iterator<Item = Point> {
        VON_NEUMANN.iter().filter_map(move |&d| self.offset(d))
    }

    /// In-range Moore neighbors.
    pub fn moore(self) -> impl Iterator<Item = Point> {
        MOORE.iter().filter_map(move |&d| self.offset(d))
    }
}

/// Fixed 10×10 grid of cell states, 0-indexed on both axes. The row axis is
/// the letter component of external notation, the column axis the 1-based
/// number component.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[CellState; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// All-`Empty` board.
    pub fn new() -> Self {
        Board {
            cells: [[CellState::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn cell(&self, p: Point) -> CellState {
        self.cells[p.row][p.col]
    }

    pub fn set(&mut self, p: Point, state: CellState) {
        self.cells[p.row][p.col] = state;
    }

    /// All grid points in row-major scan order.
    pub fn points() -> impl Iterator<Item = Point> {
        (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| Point { row, col }))
    }

    /// Number of cells in the given state.
    pub fn count(&self, state: CellState) -> usize {
        Self::points().filter(|&p| self.cell(p) == state).count()
    }

    /// Whether any `Empty` cell remains.
    pub fn has_empty(&self) -> bool {
        Self::points().any(|p| self.cell(p) == CellState::Empty)
    }

    /// Maximal 4-connected region of cells in `state` containing `start`.
    /// Empty when `start` is not in `state`.
    pub fn connected_region(&self, start: Point, state: CellState) -> Vec<Point> {
        if self.cell(start) != state {
            return Vec::new();
        }
        let mut visited = [[false; BOARD_SIZE]; BOARD_SIZE];
        let mut region = Vec::new();
        let mut queue = VecDeque::new();
        visited[start.row][start.col] = true;
        queue.push_back(start);
        while let Some(p) = queue.pop_front() {
            region.push(p);
            for n in p.von_neumann() {
                if !visited[n.row][n.col] && self.cell(n) == state {
                    visited[n.row][n.col] = true;
                    queue.push_back(n);
                }
            }
        }
        region
    }

    /// Recover the full cell set of the ship containing the reported hit at
    /// `start`. Traversal crosses 4-connected `Hit` cells only, so it never
    /// bleeds into a diagonally adjacent ship. Precondition:
    /// `self.cell(start) == Hit`.
    pub fn locate_ship(&self, start: Point) -> Vec<Point> {
        debug_assert_eq!(self.cell(start), CellState::Hit);
        self.connected_region(start, CellState::Hit)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for row in &self.cells {
            write!(f, "  ")?;
            for cell in row {
                let ch = match cell {
                    CellState::Empty => '.',
                    CellState::Ship => 'S',
                    CellState::Hit => 'x',
                    CellState::Miss => '~',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}

//! Manual fleet placement, one cell at a time.
//!
//! The first cell of a ship may be any `Empty` cell; every later cell must
//! be one of the candidate marks the annotator maintains around the
//! in-progress ship. A completed ship is validated against the shape
//! catalog, confirmed as `Ship` cells and surrounded by exclusion marks.

use crate::adjacency::{clear_candidates, exclude_around, mark_candidates};
use crate::board::{Board, CellState, Point};
use crate::common::EngineError;
use crate::config::{FLEET_COMPOSITION, MAX_SHIP_LENGTH};
use crate::coords::board_coords;
use crate::shapes::matches_catalog;

/// Interactive fleet editor state. Ships are placed largest first.
pub struct FleetEditor {
    board: Board,
    pending: Vec<usize>,
    current: Vec<Point>,
}

impl Default for FleetEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl FleetEditor {
    pub fn new() -> Self {
        let mut pending = Vec::new();
        for length in (1..=MAX_SHIP_LENGTH).rev() {
            for _ in 0..FLEET_COMPOSITION[length - 1] {
                pending.push(length);
            }
        }
        FleetEditor {
            board: Board::new(),
            pending,
            current: Vec::new(),
        }
    }

    /// Board as the display layer should render it, candidate marks included.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Length of the ship currently being placed, `None` when done.
    pub fn current_length(&self) -> Option<usize> {
        self.pending.first().copied()
    }

    /// Cells confirmed so far for the in-progress ship.
    pub fn current_ship(&self) -> &[Point] {
        &self.current
    }

    pub fn is_complete(&self) -> bool {
        self.pending.is_empty()
    }

    /// Confirm `p` as the next cell of the in-progress ship.
    ///
    /// Rejects with `IllegalPlacement` when the fleet is already complete,
    /// when the cell is not a legal next click, or when the click would
    /// complete a ship whose outline is not in the shape catalog.
    pub fn select(&mut self, p: Point) -> Result<(), EngineError> {
        let Some(length) = self.current_length() else {
            return Err(EngineError::IllegalPlacement);
        };
        let expected = if self.current.is_empty() {
            CellState::Empty
        } else {
            CellState::Hit
        };
        if self.board.cell(p) != expected {
            return Err(EngineError::IllegalPlacement);
        }

        self.board.set(p, CellState::Ship);
        self.current.push(p);
        if self.current.len() < length {
            mark_candidates(&mut self.board, &self.current);
            return Ok(());
        }

        if !matches_catalog(&self.current) {
            // revert the completing click, keep earlier cells
            self.current.pop();
            self.board.set(p, expected);
            return Err(EngineError::IllegalPlacement);
        }
        self.finish_ship();
        Ok(())
    }

    fn finish_ship(&mut self) {
        clear_candidates(&mut self.board);
        exclude_around(&mut self.board, &self.current);
        log::debug!(
            "editor: placed ship of length {}, {} remaining",
            self.current.len(),
            self.pending.len() - 1
        );
        self.current.clear();
        self.pending.remove(0);
    }

    /// Coordinates of the completed fleet in external notation, for the
    /// game payload. Errors while placement is still in progress.
    pub fn coords(&self) -> Result<Vec<String>, EngineError> {
        if !self.is_complete() {
            return Err(EngineError::IllegalPlacement);
        }
        Ok(board_coords(&self.board))
    }
}

//! External coordinate notation: letter row + 1-based column, `"A1"`..`"J10"`.

use crate::board::{Board, CellState, Point};
use crate::common::EngineError;
use crate::config::BOARD_SIZE;

/// Parse external notation into a 0-indexed point.
pub fn parse_coord(coord: &str) -> Result<Point, EngineError> {
    let mut chars = coord.chars();
    let letter = chars.next().ok_or(EngineError::InvalidCoordinate)?;
    if !letter.is_ascii_uppercase() {
        return Err(EngineError::InvalidCoordinate);
    }
    let row = (letter as u8 - b'A') as usize;
    let number: usize = chars
        .as_str()
        .parse()
        .map_err(|_| EngineError::InvalidCoordinate)?;
    if number == 0 {
        return Err(EngineError::InvalidCoordinate);
    }
    Point::new(row, number - 1)
}

/// Format a point in external notation.
pub fn format_coord(p: Point) -> String {
    debug_assert!(p.row < BOARD_SIZE && p.col < BOARD_SIZE);
    format!("{}{}", (b'A' + p.row as u8) as char, p.col + 1)
}

/// Decode a board snapshot, given as the occupied-cell coordinate list the
/// session reports, into a board of `Ship` cells.
pub fn parse_board<S: AsRef<str>>(coords: &[S]) -> Result<Board, EngineError> {
    let mut board = Board::new();
    for coord in coords {
        let p = parse_coord(coord.as_ref())?;
        board.set(p, CellState::Ship);
    }
    Ok(board)
}

/// Encode every `Ship` cell of a board in external notation, row-major.
pub fn board_coords(board: &Board) -> Vec<String> {
    Board::points()
        .filter(|&p| board.cell(p) == CellState::Ship)
        .map(format_coord)
        .collect()
}

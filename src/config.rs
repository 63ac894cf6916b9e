//! Fixed game constants: the 10×10 grid and the standard fleet composition.

pub const BOARD_SIZE: usize = 10;

pub const MAX_SHIP_LENGTH: usize = 4;

/// Number of ships per length, indexed by `length - 1`:
/// four single-cell ships, three 2-cell, two 3-cell, one 4-cell.
pub const FLEET_COMPOSITION: [u8; MAX_SHIP_LENGTH] = [4, 3, 2, 1];

pub const TOTAL_SHIP_CELLS: usize = {
    let mut total = 0;
    let mut len = 1;
    while len <= MAX_SHIP_LENGTH {
        total += len * FLEET_COMPOSITION[len - 1] as usize;
        len += 1;
    }
    total
};

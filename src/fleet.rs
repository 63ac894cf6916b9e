//! Remaining-fleet bookkeeping: unsunk ship counts per length.

use crate::config::{FLEET_COMPOSITION, MAX_SHIP_LENGTH};

/// Multiset of ship lengths still unresolved, indexed by `length - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fleet {
    remaining: [u8; MAX_SHIP_LENGTH],
}

impl Default for Fleet {
    fn default() -> Self {
        Self::full()
    }
}

impl Fleet {
    /// The standard full composition: `{4:1, 3:2, 2:3, 1:4}`.
    pub fn full() -> Self {
        Fleet {
            remaining: FLEET_COMPOSITION,
        }
    }

    /// No ships remaining.
    pub fn empty() -> Self {
        Fleet {
            remaining: [0; MAX_SHIP_LENGTH],
        }
    }

    /// A fleet with a single entry, used by analysis tooling and tests.
    pub fn single(length: usize, count: u8) -> Self {
        let mut fleet = Self::empty();
        fleet.remaining[length - 1] = count;
        fleet
    }

    /// Arbitrary composition, counts indexed by `length - 1`.
    pub fn from_counts(remaining: [u8; MAX_SHIP_LENGTH]) -> Self {
        Fleet { remaining }
    }

    /// Unsunk ships of the given length.
    pub fn remaining(&self, length: usize) -> u8 {
        self.remaining[length - 1]
    }

    /// Remove one sunk ship of the given length.
    pub fn decrement(&mut self, length: usize) {
        debug_assert!(self.remaining[length - 1] > 0);
        self.remaining[length - 1] = self.remaining[length - 1].saturating_sub(1);
    }

    /// Largest length with a nonzero count, `None` when the fleet is empty.
    pub fn largest_remaining(&self) -> Option<usize> {
        (1..=MAX_SHIP_LENGTH).rev().find(|&len| self.remaining(len) > 0)
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.iter().all(|&count| count == 0)
    }

    /// Total cells occupied by the remaining ships.
    pub fn total_cells(&self) -> usize {
        (1..=MAX_SHIP_LENGTH)
            .map(|len| len * self.remaining(len) as usize)
            .sum()
    }
}

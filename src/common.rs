//! Common types: engine errors and shot results.

use core::fmt;

/// Result of a shot reported by the game session, wire form `hit`/`miss`/`sunk`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShotResult {
    /// Shot landed on a ship segment, ship not yet fully resolved.
    Hit,
    /// Shot landed on empty water.
    Miss,
    /// Shot landed on the last unhit segment of a ship.
    Sunk,
}

/// Errors returned by engine operations. All of them signal a caller bug,
/// never a transient condition; none are retried internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Coordinate outside the 10×10 range or unparsable notation.
    InvalidCoordinate,
    /// A shape was placed somewhere `fits` would reject.
    IllegalPlacement,
    /// `recommend` was invoked with no `Empty` cell left.
    ExhaustedBoard,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidCoordinate => write!(f, "coordinate is outside the board"),
            EngineError::IllegalPlacement => write!(f, "shape placement violates board constraints"),
            EngineError::ExhaustedBoard => write!(f, "no empty cell left to target"),
        }
    }
}

impl std::error::Error for EngineError {}

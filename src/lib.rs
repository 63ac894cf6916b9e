mod adjacency;
mod board;
mod bot;
mod common;
mod config;
mod coords;
mod editor;
mod enumerate;
mod fleet;
mod heatmap;
mod logging;
mod session;
mod shapes;
mod targeter;

pub use adjacency::{clear_candidates, exclude_around, mark_candidates};
pub use board::{Board, CellState, Offset, Point, MOORE, VON_NEUMANN};
pub use bot::Bot;
pub use common::{EngineError, ShotResult};
pub use config::{BOARD_SIZE, FLEET_COMPOSITION, MAX_SHIP_LENGTH, TOTAL_SHIP_CELLS};
pub use coords::{board_coords, format_coord, parse_board, parse_coord};
pub use editor::FleetEditor;
pub use enumerate::{enumerate, random_fleet, try_place};
pub use fleet::Fleet;
pub use heatmap::{heatmap, hottest, Heatmap};
pub use logging::init_logging;
pub use session::{GameSession, LocalSession};
pub use shapes::{fits, matches_catalog, shapes, Shape};
pub use targeter::{HuntTargeter, TargeterMode};

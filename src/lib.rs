//! Single-player snake on a 32x24 toroidal grid.
//!
//! - `grid`: cells, directions and wraparound arithmetic
//! - `apple`, `snake`: the two entities
//! - `input`: key events to queued turns
//! - `render`: drawing surface and palette
//! - `clock`: fixed-rate pacing
//! - `game`: the tick and the main loop
//! - `settings`, `logging`: startup plumbing

pub mod apple;
pub mod clock;
pub mod game;
pub mod grid;
pub mod input;
pub mod logging;
pub mod render;
pub mod settings;
pub mod snake;

pub use apple::Apple;
pub use game::{Game, GameContext, TickReport};
pub use grid::{Board, Cell, Direction};
pub use snake::{MoveOutcome, Snake};

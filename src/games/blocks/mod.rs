//! Falling-block puzzle.
//!
//! ## Rules
//! - A 20×10 well; one falling tetromino at a time, drawn uniformly
//! - Left/right/down moves and rotation are refused when they would collide
//! - A piece that cannot move down settles into the well
//! - Full rows vanish; `k` rows at level `L` score `k × 100 × L`
//! - Every ten cleared lines raise the level and shorten the drop interval
//! - A new piece that collides on spawn ends the game

mod catalog;
mod clock;
mod game;
mod well;

pub use catalog::{FallingPiece, Shape, Tetromino};
pub use clock::DropClock;
pub use game::{Blocks, BlocksView};
pub use well::{Row, Well, WELL_HEIGHT, WELL_WIDTH};

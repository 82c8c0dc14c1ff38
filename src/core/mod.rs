//! Core types shared by every engine: board grid, player sides, RNG,
//! configuration and errors.
//!
//! Nothing in here knows about a specific game's rules.

pub mod board;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use board::{Board, Square, BOARD_SIZE};
pub use config::{BlocksConfig, HubConfig};
pub use error::HubError;
pub use player::{Outcome, Side};
pub use rng::GameRng;

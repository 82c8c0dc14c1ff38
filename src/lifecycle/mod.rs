//! Game lifecycle contract.
//!
//! Games implement [`Game`] to be mounted by the hub:
//! - Lifecycle: `init`, `new_game`, `cleanup`, optional per-frame `update`
//! - Input: one [`Input`] at a time, applied to completion
//! - Output: [`Snapshot`] for rendering, [`GameEvent`]s for side effects
//!
//! The hub calls into `Game` but never interprets game-specific state.

mod event;
mod game;
mod input;
mod kind;
mod snapshot;

pub use event::{EventLog, GameEvent};
pub use game::Game;
pub use input::{BlocksCommand, Input};
pub use kind::GameKind;
pub use snapshot::Snapshot;

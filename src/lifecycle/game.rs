//! The façade every game exposes to the hub.
//!
//! ## Lifecycle
//!
//! ```text
//! create ──► init ──► (handle_input | update)* ──► cleanup
//!              ▲                │
//!              └── new_game ◄───┘   (any number of times)
//! ```
//!
//! ## Implementation Notes
//!
//! - `init`: take the host resources the game needs (input subscriptions,
//!   frame tasks). Called once after construction.
//! - `new_game`: reset board, turn and score state in place.
//! - `cleanup`: release every host resource. Must be idempotent.
//! - `update`: only Blocks does anything here; the default is a no-op.
//! - `handle_input`: returns `true` when the input changed state. Illegal
//!   input is ignored, never an error.

use std::time::Duration;

use crate::host::Host;

use super::event::GameEvent;
use super::input::Input;
use super::kind::GameKind;
use super::snapshot::Snapshot;

/// A mountable game.
///
/// Object safe: the hub stores `Box<dyn Game>` and never looks at the
/// concrete type.
pub trait Game {
    /// Which game this is.
    fn kind(&self) -> GameKind;

    /// Acquire host resources and start running.
    fn init(&mut self, host: &mut Host);

    /// Reset to a fresh game without recreating the façade.
    fn new_game(&mut self, host: &mut Host);

    /// Release host resources. Safe to call repeatedly.
    fn cleanup(&mut self, host: &mut Host);

    /// Advance simulation time to `now` (a monotonic frame timestamp).
    fn update(&mut self, _host: &mut Host, _now: Duration) {}

    /// Apply one user input. Returns `true` if the game state changed.
    fn handle_input(&mut self, input: Input) -> bool;

    /// Whether the game reached its terminal state.
    fn is_over(&self) -> bool;

    /// Everything a stateless renderer needs to draw the game.
    fn snapshot(&self) -> Snapshot;

    /// One-line status text ("Player X's turn", "Black wins!", ...).
    fn status(&self) -> String;

    /// Take the side effects recorded since the last call.
    fn drain_events(&mut self) -> Vec<GameEvent>;
}

//! Host-side resources a game may hold while it is mounted.
//!
//! - `FrameScheduler`: cancellable repeating frame tasks (the Blocks clock)
//! - `InputRouter`: input subscriptions owned by the active game
//!
//! Both are passed to the game as `&mut Host` on every lifecycle call, so
//! a game never registers anything process-wide.

mod input;
mod scheduler;

pub use input::{InputChannel, InputRouter, Subscription};
pub use scheduler::{FrameScheduler, FrameTask, TaskId};

/// Everything the host lends to a mounted game.
#[derive(Debug, Default)]
pub struct Host {
    pub scheduler: FrameScheduler,
    pub input: InputRouter,
}

impl Host {
    /// Create a host with no tasks or subscriptions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether nothing is scheduled or subscribed.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.scheduler.active_count() == 0 && self.input.subscription_count() == 0
    }
}

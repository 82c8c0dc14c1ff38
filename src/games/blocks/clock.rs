//! Gravity timing.

use std::time::Duration;

/// Accumulates frame time and says when the piece should drop a row.
///
/// The first timestamp seen only sets the baseline, so a host whose frame
/// clock started long before the game does not trigger an instant drop.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DropClock {
    last_frame: Option<Duration>,
    accumulated: Duration,
}

impl DropClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the baseline and any accumulated time.
    pub fn reset(&mut self) {
        self.last_frame = None;
        self.accumulated = Duration::ZERO;
    }

    /// Feed the frame timestamp `now`. Returns `true` when more than
    /// `interval` has built up since the last drop, and starts over.
    ///
    /// Timestamps that go backwards count as zero elapsed time.
    pub fn advance(&mut self, now: Duration, interval: Duration) -> bool {
        let Some(last) = self.last_frame.replace(now) else {
            return false;
        };
        self.accumulated += now.saturating_sub(last);
        if self.accumulated > interval {
            self.accumulated = Duration::ZERO;
            true
        } else {
            false
        }
    }

    /// Time built up toward the next drop.
    #[must_use]
    pub fn accumulated(&self) -> Duration {
        self.accumulated
    }
}

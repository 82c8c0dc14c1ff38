//! Hub and engine configuration.
//!
//! Only the falling-block game has tunable parameters; the board games
//! follow fixed rules. Defaults reproduce the classic hub behaviour.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Falling-block game parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlocksConfig {
    /// Seed for the piece sequence.
    /// Same seed produces the same pieces.
    pub seed: u64,

    /// Drop interval at level 1.
    pub base_drop_interval: Duration,

    /// Interval reduction per level above 1.
    pub level_step: Duration,

    /// Lower clamp for the drop interval at high levels.
    pub min_drop_interval: Duration,

    /// Cleared lines needed to advance one level.
    pub lines_per_level: u32,

    /// Points per cleared line, multiplied by the level.
    pub points_per_line: u64,
}

impl Default for BlocksConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            base_drop_interval: Duration::from_millis(1000),
            level_step: Duration::from_millis(100),
            min_drop_interval: Duration::from_millis(50),
            lines_per_level: 10,
            points_per_line: 100,
        }
    }
}

impl BlocksConfig {
    /// Create a new config with custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with a custom minimum drop interval.
    #[must_use]
    pub fn with_min_drop_interval(mut self, interval: Duration) -> Self {
        self.min_drop_interval = interval;
        self
    }

    /// Create a new config with custom level-1 interval and per-level step.
    #[must_use]
    pub fn with_drop_timing(mut self, base: Duration, step: Duration) -> Self {
        self.base_drop_interval = base;
        self.level_step = step;
        self
    }

    /// Create a new config with a custom line count per level.
    ///
    /// # Panics
    /// Panics if `lines` is zero.
    #[must_use]
    pub fn with_lines_per_level(mut self, lines: u32) -> Self {
        assert!(lines > 0, "lines_per_level must be positive");
        self.lines_per_level = lines;
        self
    }

    /// Gravity interval at `level`: `base - (level - 1) * step`, clamped below
    /// by `min_drop_interval`.
    #[must_use]
    pub fn drop_interval(&self, level: u32) -> Duration {
        let reduction = self.level_step.saturating_mul(level.saturating_sub(1));
        self.base_drop_interval
            .saturating_sub(reduction)
            .max(self.min_drop_interval)
    }

    /// Level reached after clearing `lines` in total.
    #[must_use]
    pub fn level_for(&self, lines: u32) -> u32 {
        lines / self.lines_per_level + 1
    }
}

/// Top-level hub configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HubConfig {
    /// Parameters for every Blocks instance the hub creates.
    pub blocks: BlocksConfig,
}

impl HubConfig {
    /// Replace the Blocks parameters.
    #[must_use]
    pub fn with_blocks(mut self, blocks: BlocksConfig) -> Self {
        self.blocks = blocks;
        self
    }
}

//! The hub controller.

use std::time::Duration;

use crate::core::{GameRng, HubConfig, HubError};
use crate::games;
use crate::host::Host;
use crate::lifecycle::{Game, GameEvent, GameKind, Input, Snapshot};

/// Mounts one game at a time and forwards input and frames to it.
///
/// Owns the [`Host`] resources the active game borrows. Each Blocks
/// instance gets its own RNG branch forked from the hub seed, so
/// reselecting Blocks deals a new but reproducible piece sequence.
pub struct Hub {
    /// Hub configuration.
    config: HubConfig,

    /// Frame tasks and input subscriptions lent to the active game.
    host: Host,

    /// Source of per-game seeds.
    rng: GameRng,

    /// The mounted game, if any.
    active: Option<Box<dyn Game>>,
}

impl Default for Hub {
    fn default() -> Self {
        Self::new(HubConfig::default())
    }
}

impl Hub {
    /// Create a hub with nothing selected.
    #[must_use]
    pub fn new(config: HubConfig) -> Self {
        let rng = GameRng::new(config.blocks.seed);
        Self {
            config,
            host: Host::new(),
            rng,
            active: None,
        }
    }

    /// Tear down the current game, if any, and mount `kind`.
    pub fn select(&mut self, kind: GameKind) {
        self.deselect();

        let config = match kind {
            GameKind::Blocks => {
                let seed = self.rng.fork().seed();
                self.config
                    .clone()
                    .with_blocks(self.config.blocks.clone().with_seed(seed))
            }
            _ => self.config.clone(),
        };
        let mut game = games::create(kind, &config);
        game.init(&mut self.host);
        log::info!("hub: selected {kind}");
        self.active = Some(game);
    }

    /// [`Hub::select`] by picker key ("tictactoe", "chess", ...).
    pub fn select_by_name(&mut self, name: &str) -> Result<GameKind, HubError> {
        let kind: GameKind = name.parse()?;
        self.select(kind);
        Ok(kind)
    }

    /// Clean up and drop the active game. Returns which one it was.
    pub fn deselect(&mut self) -> Option<GameKind> {
        let mut game = self.active.take()?;
        game.cleanup(&mut self.host);
        let kind = game.kind();
        log::info!("hub: deselected {kind}");
        Some(kind)
    }

    /// Restart the active game in place.
    pub fn new_game(&mut self) -> Result<(), HubError> {
        let game = self.active.as_mut().ok_or(HubError::NoActiveGame)?;
        game.new_game(&mut self.host);
        log::info!("hub: new {} game", game.kind());
        Ok(())
    }

    /// Route one input to the active game.
    ///
    /// Input on a channel the game is not subscribed to is dropped. Returns
    /// whether the game accepted it.
    pub fn dispatch(&mut self, input: Input) -> Result<bool, HubError> {
        let game = self.active.as_mut().ok_or(HubError::NoActiveGame)?;
        if !self.host.input.is_subscribed(input.channel()) {
            log::trace!("hub: no subscriber for {:?}", input.channel());
            return Ok(false);
        }
        Ok(game.handle_input(input))
    }

    /// Deliver one rendering frame at timestamp `now`.
    ///
    /// The game's `update` runs only while a frame task is live. Returns
    /// whether it ran.
    pub fn frame(&mut self, now: Duration) -> bool {
        let Some(game) = self.active.as_mut() else {
            return false;
        };
        if !self.host.scheduler.begin_frame() {
            return false;
        }
        game.update(&mut self.host, now);
        true
    }

    /// Render state of the active game.
    pub fn snapshot(&self) -> Result<Snapshot, HubError> {
        self.active
            .as_ref()
            .map(|game| game.snapshot())
            .ok_or(HubError::NoActiveGame)
    }

    /// Status line of the active game.
    pub fn status(&self) -> Result<String, HubError> {
        self.active
            .as_ref()
            .map(|game| game.status())
            .ok_or(HubError::NoActiveGame)
    }

    /// Side effects of the active game since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.active
            .as_mut()
            .map(|game| game.drain_events())
            .unwrap_or_default()
    }

    /// Which game is mounted.
    #[must_use]
    pub fn active_kind(&self) -> Option<GameKind> {
        self.active.as_ref().map(|game| game.kind())
    }

    /// Host resources, for inspection.
    #[must_use]
    pub fn host(&self) -> &Host {
        &self.host
    }

    #[must_use]
    pub fn config(&self) -> &HubConfig {
        &self.config
    }
}

impl Drop for Hub {
    fn drop(&mut self) {
        self.deselect();
    }
}

impl std::fmt::Debug for Hub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hub")
            .field("config", &self.config)
            .field("host", &self.host)
            .field("active", &self.active_kind())
            .finish()
    }
}

//! Falling-block engine and façade.
//!
//! ```text
//! spawned ──► falling ──(move | rotate)*──► settled ──► spawned ...
//!    │
//!    └── spawn collides ──► game over
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{BlocksConfig, GameRng};
use crate::host::{FrameTask, Host, InputChannel, Subscription};
use crate::lifecycle::{BlocksCommand, EventLog, Game, GameEvent, GameKind, Input, Snapshot};

use super::catalog::{FallingPiece, Tetromino};
use super::clock::DropClock;
use super::well::{Well, WELL_WIDTH};

/// Render state for the falling-block game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlocksView {
    /// Settled cells, row 0 at the top.
    pub board: Vec<Vec<Option<Tetromino>>>,
    pub piece: Option<FallingPiece>,
    /// Absolute cells of the falling piece.
    pub piece_cells: Vec<(i32, i32)>,
    /// Row the falling piece would land on after a hard drop.
    pub ghost_row: Option<i32>,
    pub score: u64,
    pub level: u32,
    pub lines: u32,
    pub game_over: bool,
}

/// A falling-block puzzle on a 20×10 well.
///
/// Pieces are drawn uniformly from the seeded RNG. Gravity runs off the
/// frame task the game holds while it is mounted; the task is cancelled as
/// soon as the game ends and on cleanup.
#[derive(Debug)]
pub struct Blocks {
    config: BlocksConfig,
    rng: GameRng,
    well: Well,
    piece: Option<FallingPiece>,
    score: u64,
    level: u32,
    lines: u32,
    game_over: bool,
    clock: DropClock,
    events: EventLog,
    frames: Option<FrameTask>,
    keyboard: Option<Subscription>,
}

impl Blocks {
    /// Empty well with the first piece already spawned.
    #[must_use]
    pub fn new(config: BlocksConfig) -> Self {
        let mut blocks = Self::unspawned(config, Well::new());
        blocks.spawn();
        blocks
    }

    /// Start from a prepared well and falling piece.
    ///
    /// A piece that already collides ends the game, as a blocked spawn would.
    #[must_use]
    pub fn with_position(config: BlocksConfig, well: Well, piece: FallingPiece) -> Self {
        let mut blocks = Self::unspawned(config, well);
        blocks.enter(piece);
        blocks
    }

    fn unspawned(config: BlocksConfig, well: Well) -> Self {
        let rng = GameRng::new(config.seed);
        Self {
            config,
            rng,
            well,
            piece: None,
            score: 0,
            level: 1,
            lines: 0,
            game_over: false,
            clock: DropClock::new(),
            events: EventLog::default(),
            frames: None,
            keyboard: None,
        }
    }

    /// Clear the well and scores and spawn a fresh piece.
    ///
    /// The piece sequence continues from the same RNG.
    pub fn reset(&mut self) {
        self.well = Well::new();
        self.piece = None;
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.game_over = false;
        self.clock.reset();
        self.events.clear();
        self.spawn();
    }

    fn spawn(&mut self) {
        let kind = Tetromino::ALL[self.rng.gen_index(Tetromino::ALL.len())];
        self.enter(FallingPiece::spawn(kind, WELL_WIDTH));
    }

    fn enter(&mut self, piece: FallingPiece) {
        if self.well.collides(&piece) {
            self.piece = None;
            self.game_over = true;
            self.events.push(GameEvent::GameOver);
            log::debug!("blocks: game over, final score {}", self.score);
        } else {
            self.piece = Some(piece);
            self.events.push(GameEvent::PieceSpawned { kind: piece.kind });
        }
    }

    /// Shift the falling piece by `(dx, dy)`.
    ///
    /// A blocked sideways move is dropped. A blocked downward move settles
    /// the piece where it is, clears lines and spawns the next one.
    pub fn move_piece(&mut self, dx: i32, dy: i32) -> bool {
        let Some(piece) = self.active_piece() else {
            return false;
        };
        let moved = piece.shifted(dx, dy);
        if !self.well.collides(&moved) {
            self.piece = Some(moved);
            return true;
        }
        if dy > 0 {
            self.lock(piece);
            return true;
        }
        log::trace!("blocks: move ({dx}, {dy}) blocked");
        false
    }

    /// Advance to the next rotation state, or do nothing if it collides.
    pub fn rotate(&mut self) -> bool {
        let Some(piece) = self.active_piece() else {
            return false;
        };
        let rotated = piece.rotated();
        if self.well.collides(&rotated) {
            log::trace!("blocks: rotation blocked");
            return false;
        }
        self.piece = Some(rotated);
        true
    }

    /// Drop straight down to the lowest free row and settle.
    pub fn hard_drop(&mut self) -> bool {
        let Some(piece) = self.active_piece() else {
            return false;
        };
        let landed = self.landing(piece);
        self.lock(landed);
        true
    }

    /// Apply one keyboard command.
    pub fn apply(&mut self, command: BlocksCommand) -> bool {
        match command {
            BlocksCommand::MoveLeft => self.move_piece(-1, 0),
            BlocksCommand::MoveRight => self.move_piece(1, 0),
            BlocksCommand::SoftDrop => self.move_piece(0, 1),
            BlocksCommand::Rotate => self.rotate(),
            BlocksCommand::HardDrop => self.hard_drop(),
        }
    }

    /// Feed a frame timestamp to the gravity clock. Returns `true` if the
    /// piece was pulled down a row.
    pub fn tick(&mut self, now: Duration) -> bool {
        if self.game_over {
            return false;
        }
        let interval = self.drop_interval();
        if self.clock.advance(now, interval) {
            self.move_piece(0, 1)
        } else {
            false
        }
    }

    fn active_piece(&self) -> Option<FallingPiece> {
        if self.game_over {
            return None;
        }
        self.piece
    }

    fn landing(&self, mut piece: FallingPiece) -> FallingPiece {
        loop {
            let next = piece.shifted(0, 1);
            if self.well.collides(&next) {
                return piece;
            }
            piece = next;
        }
    }

    fn lock(&mut self, piece: FallingPiece) {
        self.well.settle(&piece);
        self.piece = None;
        self.events.push(GameEvent::PieceSettled);
        self.clear_lines();
        self.spawn();
    }

    fn clear_lines(&mut self) {
        let count = self.well.clear_full_rows();
        if count == 0 {
            return;
        }
        let points = u64::from(count) * self.config.points_per_line * u64::from(self.level);
        self.score += points;
        self.lines += count;
        self.level = self.config.level_for(self.lines);
        self.events.push(GameEvent::LinesCleared { count, points });
        log::debug!(
            "blocks: cleared {count} line(s) for {points}, level {} lines {}",
            self.level,
            self.lines
        );
    }

    /// Current gravity interval for the level.
    #[must_use]
    pub fn drop_interval(&self) -> Duration {
        self.config.drop_interval(self.level)
    }

    /// Top row the falling piece would occupy after a hard drop.
    #[must_use]
    pub fn ghost_row(&self) -> Option<i32> {
        self.active_piece().map(|piece| self.landing(piece).y)
    }

    #[must_use]
    pub fn well(&self) -> &Well {
        &self.well
    }

    #[must_use]
    pub fn piece(&self) -> Option<&FallingPiece> {
        self.piece.as_ref()
    }

    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[must_use]
    pub fn lines(&self) -> u32 {
        self.lines
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Whether gravity is currently scheduled with the host.
    #[must_use]
    pub fn has_frame_task(&self) -> bool {
        self.frames.is_some()
    }

    /// Render state.
    #[must_use]
    pub fn view(&self) -> BlocksView {
        BlocksView {
            board: self.well.rows(),
            piece: self.piece,
            piece_cells: self.piece.map(|p| p.cells().collect()).unwrap_or_default(),
            ghost_row: self.ghost_row(),
            score: self.score,
            level: self.level,
            lines: self.lines,
            game_over: self.game_over,
        }
    }
}

impl Game for Blocks {
    fn kind(&self) -> GameKind {
        GameKind::Blocks
    }

    fn init(&mut self, host: &mut Host) {
        if self.frames.is_none() && !self.game_over {
            self.frames = Some(host.scheduler.request_frames());
        }
        if self.keyboard.is_none() {
            self.keyboard = Some(host.input.subscribe(InputChannel::Keyboard));
        }
    }

    fn new_game(&mut self, host: &mut Host) {
        self.reset();
        if self.frames.is_none() {
            self.frames = Some(host.scheduler.request_frames());
        }
    }

    fn cleanup(&mut self, host: &mut Host) {
        host.scheduler.release(&mut self.frames);
        host.input.release(&mut self.keyboard);
    }

    fn update(&mut self, host: &mut Host, now: Duration) {
        let live = self
            .frames
            .as_ref()
            .is_some_and(|task| host.scheduler.is_active(task));
        if !live {
            return;
        }
        self.tick(now);
        if self.game_over {
            host.scheduler.release(&mut self.frames);
        }
    }

    fn handle_input(&mut self, input: Input) -> bool {
        match input {
            Input::Command(command) => self.apply(command),
            _ => false,
        }
    }

    fn is_over(&self) -> bool {
        self.game_over
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot::Blocks(self.view())
    }

    fn status(&self) -> String {
        if self.game_over {
            format!("Game Over. Final Score: {}", self.score)
        } else {
            format!(
                "Score {} | Level {} | Lines {}",
                self.score, self.level, self.lines
            )
        }
    }

    fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }
}

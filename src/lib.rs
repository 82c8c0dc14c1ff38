//! # game-hub
//!
//! Rule engines for a small game hub: tic-tac-toe, simplified chess,
//! checkers with chained captures and a falling-block puzzle.
//!
//! ## Design Principles
//!
//! 1. **Validate, then mutate**: Every input is checked against the rules
//!    before the board changes. Illegal input is ignored, never an error.
//!
//! 2. **One owner per game**: Each engine owns its board and turn state.
//!    Nothing is shared between games.
//!
//! 3. **Explicit host resources**: Frame tasks and input subscriptions are
//!    handles the game holds and gives back in `cleanup`. Nothing is
//!    registered globally.
//!
//! ## Modules
//!
//! - `core`: Board grid, sides and outcomes, RNG, configuration, errors
//! - `host`: Frame scheduler and input router lent to the mounted game
//! - `lifecycle`: The `Game` façade, inputs, events and snapshots
//! - `games`: The four engines
//! - `hub`: Selects a game and routes input and frames to it
//!
//! ## Example
//!
//! ```
//! use game_hub::{GameKind, Hub, HubConfig, Input};
//!
//! let mut hub = Hub::new(HubConfig::default());
//! hub.select(GameKind::TicTacToe);
//! for cell in [0, 3, 1, 4, 2] {
//!     hub.dispatch(Input::Cell(cell)).unwrap();
//! }
//! assert_eq!(hub.status().unwrap(), "Player X wins!");
//! ```

pub mod core;
pub mod games;
pub mod host;
pub mod hub;
pub mod lifecycle;

// Re-export commonly used types
pub use crate::core::{
    Board, Square, BOARD_SIZE,
    BlocksConfig, HubConfig, HubError,
    Outcome, Side, GameRng,
};

pub use crate::host::{FrameScheduler, FrameTask, Host, InputChannel, InputRouter, Subscription};

pub use crate::lifecycle::{BlocksCommand, EventLog, Game, GameEvent, GameKind, Input, Snapshot};

pub use crate::games::blocks::{Blocks, BlocksView, FallingPiece, Tetromino, Well};
pub use crate::games::checkers::{Checkers, CheckersView};
pub use crate::games::chess::{Chess, ChessView};
pub use crate::games::tictactoe::{TicTacToe, TicTacToeView};

pub use crate::hub::Hub;

//! Render output.
//!
//! A `Snapshot` is a self-contained copy of everything the view layer draws:
//! board contents, whose turn it is, selection and legal targets, and
//! terminal status. It can be shipped to another process with
//! [`Snapshot::encode`]; the byte format is not stable across versions.

use serde::{Deserialize, Serialize};

use crate::core::HubError;
use crate::games::blocks::BlocksView;
use crate::games::checkers::CheckersView;
use crate::games::chess::ChessView;
use crate::games::tictactoe::TicTacToeView;

use super::kind::GameKind;

/// Full render state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Snapshot {
    TicTacToe(TicTacToeView),
    Chess(ChessView),
    Checkers(CheckersView),
    Blocks(BlocksView),
}

impl Snapshot {
    /// The game this snapshot belongs to.
    #[must_use]
    pub fn kind(&self) -> GameKind {
        match self {
            Snapshot::TicTacToe(_) => GameKind::TicTacToe,
            Snapshot::Chess(_) => GameKind::Chess,
            Snapshot::Checkers(_) => GameKind::Checkers,
            Snapshot::Blocks(_) => GameKind::Blocks,
        }
    }

    /// Terminal flag, whatever the game.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        match self {
            Snapshot::TicTacToe(v) => v.game_over,
            Snapshot::Chess(v) => v.game_over,
            Snapshot::Checkers(v) => v.game_over,
            Snapshot::Blocks(v) => v.game_over,
        }
    }

    /// Serialize to bytes.
    pub fn encode(&self) -> Result<Vec<u8>, HubError> {
        Ok(bincode::serialize(self)?)
    }

    /// Deserialize bytes produced by [`Snapshot::encode`].
    pub fn decode(bytes: &[u8]) -> Result<Self, HubError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

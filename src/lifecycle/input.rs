//! Move requests coming from the view layer.

use serde::{Deserialize, Serialize};

use crate::core::Square;
use crate::host::InputChannel;

/// Falling-block controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlocksCommand {
    MoveLeft,
    MoveRight,
    /// One row down; settles the piece if it can't move.
    SoftDrop,
    Rotate,
    /// Drop to the lowest free row and settle.
    HardDrop,
}

impl BlocksCommand {
    /// Map a key code from the host to a command.
    ///
    /// Accepts the DOM `KeyboardEvent.code` names the hub page uses.
    #[must_use]
    pub fn from_key_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" => Some(BlocksCommand::MoveLeft),
            "ArrowRight" => Some(BlocksCommand::MoveRight),
            "ArrowDown" => Some(BlocksCommand::SoftDrop),
            "ArrowUp" => Some(BlocksCommand::Rotate),
            "Space" => Some(BlocksCommand::HardDrop),
            _ => None,
        }
    }
}

/// A single user input addressed to the active game.
///
/// Engines ignore variants that are not theirs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Input {
    /// Tic-tac-toe cell index 0..9.
    Cell(usize),
    /// Chess/checkers board square (select, deselect or move target).
    Square(Square),
    /// Blocks control.
    Command(BlocksCommand),
}

impl Input {
    /// The channel this input arrives on.
    #[must_use]
    pub const fn channel(self) -> InputChannel {
        match self {
            Input::Cell(_) | Input::Square(_) => InputChannel::Pointer,
            Input::Command(_) => InputChannel::Keyboard,
        }
    }
}

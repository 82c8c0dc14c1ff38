//! The selectable games.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::HubError;

/// Which game a façade runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameKind {
    TicTacToe,
    Chess,
    Blocks,
    Checkers,
}

impl GameKind {
    /// Every game, in menu order.
    pub const ALL: [GameKind; 4] = [
        GameKind::TicTacToe,
        GameKind::Chess,
        GameKind::Blocks,
        GameKind::Checkers,
    ];

    /// Human-readable title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            GameKind::TicTacToe => "Tic Tac Toe",
            GameKind::Chess => "Chess",
            GameKind::Blocks => "Blocks",
            GameKind::Checkers => "Checkers",
        }
    }

    /// Short identifier used by the game picker.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            GameKind::TicTacToe => "tictactoe",
            GameKind::Chess => "chess",
            GameKind::Blocks => "blocks",
            GameKind::Checkers => "checkers",
        }
    }
}

impl std::fmt::Display for GameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for GameKind {
    type Err = HubError;

    /// Parse a picker key, ignoring case and surrounding whitespace.
    ///
    /// ```
    /// use std::str::FromStr;
    /// use game_hub::lifecycle::GameKind;
    ///
    /// assert_eq!(GameKind::from_str(" Checkers ").unwrap(), GameKind::Checkers);
    /// assert!(GameKind::from_str("pong").is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        GameKind::ALL
            .into_iter()
            .find(|kind| kind.key() == key)
            .ok_or_else(|| HubError::UnknownGame(s.trim().to_string()))
    }
}

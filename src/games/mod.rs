//! The four rule engines.
//!
//! Each engine owns its board and turn state outright and implements
//! [`Game`] for the hub. Engines never share state with each other.

pub mod blocks;
pub mod checkers;
pub mod chess;
pub mod tictactoe;

use crate::core::HubConfig;
use crate::lifecycle::{Game, GameKind};

/// Build a fresh, not yet initialized façade for `kind`.
#[must_use]
pub fn create(kind: GameKind, config: &HubConfig) -> Box<dyn Game> {
    match kind {
        GameKind::TicTacToe => Box::new(tictactoe::TicTacToe::new()),
        GameKind::Chess => Box::new(chess::Chess::new()),
        GameKind::Checkers => Box::new(checkers::Checkers::new()),
        GameKind::Blocks => Box::new(blocks::Blocks::new(config.blocks.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_every_kind() {
        let config = HubConfig::default();
        for kind in GameKind::ALL {
            let game = create(kind, &config);
            assert_eq!(game.kind(), kind);
            assert_eq!(game.snapshot().kind(), kind);
            assert!(!game.is_over());
        }
    }
}

//! Side effects reported by the engines.
//!
//! Engines push an event for every observable change so the host can
//! animate, play sounds or post a system message without diffing snapshots.
//! Events are buffered inside the game until the host drains them.

use serde::{Deserialize, Serialize};

use crate::core::Square;
use crate::games::blocks::Tetromino;

/// Something that happened in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A tic-tac-toe mark was placed.
    MarkPlaced { index: usize },
    /// A piece was selected; legal targets are in the next snapshot.
    Selected { at: Square },
    /// The selection was cleared without a move.
    Deselected,
    /// A piece moved.
    Moved { from: Square, to: Square },
    /// A piece was removed from the board.
    Captured { at: Square },
    /// A checker became a king.
    Promoted { at: Square },
    /// The same piece must keep capturing; the turn does not pass.
    CaptureContinues { at: Square },
    /// The other player is now to move.
    TurnPassed,
    /// A new falling piece entered the well.
    PieceSpawned { kind: Tetromino },
    /// The falling piece was written into the well.
    PieceSettled,
    /// Full rows were removed.
    LinesCleared { count: u32, points: u64 },
    /// The game reached its terminal state.
    GameOver,
}

/// Buffer of pending events.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    pending: Vec<GameEvent>,
}

impl EventLog {
    /// Record an event.
    pub fn push(&mut self, event: GameEvent) {
        self.pending.push(event);
    }

    /// Take everything recorded since the last drain.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending)
    }

    /// Drop pending events.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Events recorded since the last drain.
    #[must_use]
    pub fn pending(&self) -> &[GameEvent] {
        &self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_empties_log() {
        let mut log = EventLog::default();
        log.push(GameEvent::TurnPassed);
        log.push(GameEvent::GameOver);
        assert_eq!(log.pending().len(), 2);

        let drained = log.drain();
        assert_eq!(drained, vec![GameEvent::TurnPassed, GameEvent::GameOver]);
        assert!(log.pending().is_empty());
    }

    #[test]
    fn test_event_serde() {
        let event = GameEvent::LinesCleared { count: 2, points: 200 };
        let json = serde_json::to_string(&event).unwrap();
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}

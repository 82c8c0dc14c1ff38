//! Player identities and game outcomes.
//!
//! ## Side
//!
//! Every game here is played by exactly two fixed identities (X/O,
//! white/black, red/black). `Side` captures the one operation the turn
//! machinery needs: flipping to the opponent.
//!
//! ## Outcome
//!
//! The result of a finished game: a single winner or a tie.

use serde::{Deserialize, Serialize};

/// One of a game's two player identities.
pub trait Side: Copy + Eq + std::fmt::Debug + std::fmt::Display {
    /// The other player.
    #[must_use]
    fn opponent(self) -> Self;
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome<S> {
    /// Single winner.
    Winner(S),
    /// Nobody won.
    Tie,
}

impl<S: Side> Outcome<S> {
    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: S) -> bool {
        matches!(self, Outcome::Winner(s) if *s == side)
    }

    /// The winning side, if there is one.
    #[must_use]
    pub fn winner(&self) -> Option<S> {
        match self {
            Outcome::Winner(s) => Some(*s),
            Outcome::Tie => None,
        }
    }
}

impl<S: Side> std::fmt::Display for Outcome<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(s) => write!(f, "{s} wins"),
            Outcome::Tie => write!(f, "tie"),
        }
    }
}

/// Capitalize the first character of a side's name for status lines.
pub(crate) fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

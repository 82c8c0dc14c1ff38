//! Errors surfaced to the host.
//!
//! Illegal moves are not errors: engines reject them silently. These cover
//! the hub-facing edges only.

/// Hub-level failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HubError {
    /// A game name that matches no known game.
    UnknownGame(String),
    /// An operation that needs a selected game was called with none active.
    NoActiveGame,
    /// A snapshot could not be encoded or decoded.
    Snapshot(String),
}

impl std::fmt::Display for HubError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HubError::UnknownGame(name) => write!(f, "unknown game: {name:?}"),
            HubError::NoActiveGame => write!(f, "no game is selected"),
            HubError::Snapshot(msg) => write!(f, "snapshot codec failed: {msg}"),
        }
    }
}

impl std::error::Error for HubError {}

impl From<bincode::Error> for HubError {
    fn from(err: bincode::Error) -> Self {
        HubError::Snapshot(err.to_string())
    }
}

//! Checkers.
//!
//! ## Rules
//! - Pieces live on the dark squares; red starts on rows 0-2 and moves first
//! - Men step one diagonal forward, kings in all four diagonals
//! - A jump over an adjacent enemy onto the empty square beyond captures it
//! - After a jump, if the same piece can jump again it must, and the turn
//!   continues until it can't
//! - A man reaching the far row is crowned
//! - A side with no pieces left loses

mod game;
pub mod rules;

pub use game::{Checkers, CheckersView};
pub use rules::{starting_board, Checker, Color};

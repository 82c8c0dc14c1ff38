//! Simplified chess.
//!
//! ## Rules
//! - Standard starting position, white moves first, turns alternate
//! - Each piece moves by its pattern only (see [`rules`])
//! - Capturing a piece removes it; there is no check, mate or draw
//!
//! The engine never ends the game by itself.

mod game;
mod piece;
pub mod rules;

pub use game::{Chess, ChessView};
pub use piece::{starting_board, ChessPiece, Color, PieceType};

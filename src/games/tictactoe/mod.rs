//! Tic-tac-toe.
//!
//! - Nine cells, X moves first, players alternate
//! - Three equal marks in a row, column or diagonal win
//! - A full board with no line is a tie

mod game;

pub use game::{Mark, TicTacToe, TicTacToeView, CELLS, WIN_LINES};

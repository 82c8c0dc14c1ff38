//! Checkers pieces, move generation and capture detection.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Board, Side, Square, BOARD_SIZE};

/// Checkers side. Red starts on rows 0-2 and moves down the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    /// The row where this side's men are crowned.
    #[must_use]
    pub const fn crowning_row(self) -> usize {
        match self {
            Color::Red => BOARD_SIZE - 1,
            Color::Black => 0,
        }
    }
}

impl Side for Color {
    fn opponent(self) -> Self {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Red => f.write_str("red"),
            Color::Black => f.write_str("black"),
        }
    }
}

/// A checker. Colour is fixed; only the king flag changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Checker {
    color: Color,
    king: bool,
}

impl Checker {
    /// A man (uncrowned piece).
    #[must_use]
    pub const fn man(color: Color) -> Self {
        Self { color, king: false }
    }

    /// A crowned piece.
    #[must_use]
    pub const fn king(color: Color) -> Self {
        Self { color, king: true }
    }

    #[must_use]
    pub const fn color(self) -> Color {
        self.color
    }

    #[must_use]
    pub const fn is_king(self) -> bool {
        self.king
    }

    /// Crown the piece. Returns `true` only the first time.
    pub fn promote(&mut self) -> bool {
        let was_king = self.king;
        self.king = true;
        !was_king
    }

    /// Diagonal step directions: all four for kings, the two forward ones
    /// for men.
    #[must_use]
    pub fn directions(self) -> &'static [(i32, i32)] {
        const ALL: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
        const DOWN: [(i32, i32); 2] = [(1, -1), (1, 1)];
        const UP: [(i32, i32); 2] = [(-1, -1), (-1, 1)];
        match (self.king, self.color) {
            (true, _) => &ALL,
            (false, Color::Red) => &DOWN,
            (false, Color::Black) => &UP,
        }
    }
}

/// Move targets for one piece. At most four.
pub type Targets = SmallVec<[Square; 4]>;

/// Twelve men per side on the dark squares of their three home rows.
#[must_use]
pub fn starting_board() -> Board<Checker> {
    let mut board = Board::empty();
    for square in Square::all().filter(|s| s.is_dark()) {
        match square.row {
            0..=2 => {
                board.place(square, Checker::man(Color::Red));
            }
            5..=7 => {
                board.place(square, Checker::man(Color::Black));
            }
            _ => {}
        }
    }
    board
}

/// Landing square of a jump from `from` in direction `(dr, dc)`, if the
/// adjacent square holds an enemy and the one beyond is free.
fn jump_target(board: &Board<Checker>, from: Square, piece: Checker, (dr, dc): (i32, i32)) -> Option<Square> {
    let over = from.offset(dr, dc)?;
    let enemy = board.get(over)?;
    if enemy.color() == piece.color() {
        return None;
    }
    let landing = over.offset(dr, dc)?;
    board.is_empty_at(landing).then_some(landing)
}

/// Destinations for the piece on `from`.
///
/// Plain one-step slides are included only when `captures_only` is false;
/// jump landings are always included.
#[must_use]
pub fn possible_moves(board: &Board<Checker>, from: Square, captures_only: bool) -> Targets {
    let mut targets = Targets::new();
    let Some(&piece) = board.get(from) else {
        return targets;
    };

    for &dir in piece.directions() {
        let Some(next) = from.offset(dir.0, dir.1) else {
            continue;
        };
        if board.is_empty_at(next) {
            if !captures_only {
                targets.push(next);
            }
        } else if let Some(landing) = jump_target(board, from, piece, dir) {
            targets.push(landing);
        }
    }
    targets
}

/// Whether `to` is among [`possible_moves`] for `from`.
#[must_use]
pub fn is_valid_move(board: &Board<Checker>, from: Square, to: Square, captures_only: bool) -> bool {
    possible_moves(board, from, captures_only).contains(&to)
}

/// Whether the piece on `from` has any jump available.
#[must_use]
pub fn has_more_captures(board: &Board<Checker>, from: Square) -> bool {
    let Some(&piece) = board.get(from) else {
        return false;
    };
    piece
        .directions()
        .iter()
        .any(|&dir| jump_target(board, from, piece, dir).is_some())
}

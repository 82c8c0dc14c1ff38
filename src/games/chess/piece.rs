//! Chess pieces and the starting position.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Side, Square, BOARD_SIZE};

/// Chess side. White starts at the bottom (rows 6-7) and moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Row delta of a forward pawn step.
    #[must_use]
    pub const fn forward(self) -> i32 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row the side's pawns start on.
    #[must_use]
    pub const fn pawn_row(self) -> usize {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row the side's major pieces start on.
    #[must_use]
    pub const fn back_row(self) -> usize {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl Side for Color {
    fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => f.write_str("white"),
            Color::Black => f.write_str("black"),
        }
    }
}

/// The six chess ranks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceType {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

/// Back-rank order from column 0 to 7.
const BACK_RANK: [PieceType; BOARD_SIZE] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// A chess piece. Its colour never changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChessPiece {
    kind: PieceType,
    color: Color,
}

impl ChessPiece {
    #[must_use]
    pub const fn new(kind: PieceType, color: Color) -> Self {
        Self { kind, color }
    }

    #[must_use]
    pub const fn kind(self) -> PieceType {
        self.kind
    }

    #[must_use]
    pub const fn color(self) -> Color {
        self.color
    }

    /// Unicode glyph for the piece.
    #[must_use]
    pub const fn symbol(self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceType::King) => '♔',
            (Color::White, PieceType::Queen) => '♕',
            (Color::White, PieceType::Rook) => '♖',
            (Color::White, PieceType::Bishop) => '♗',
            (Color::White, PieceType::Knight) => '♘',
            (Color::White, PieceType::Pawn) => '♙',
            (Color::Black, PieceType::King) => '♚',
            (Color::Black, PieceType::Queen) => '♛',
            (Color::Black, PieceType::Rook) => '♜',
            (Color::Black, PieceType::Bishop) => '♝',
            (Color::Black, PieceType::Knight) => '♞',
            (Color::Black, PieceType::Pawn) => '♟',
        }
    }
}

impl std::fmt::Display for ChessPiece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Standard starting position: black on rows 0-1, white on rows 6-7.
#[must_use]
pub fn starting_board() -> Board<ChessPiece> {
    let mut board = Board::empty();
    for color in [Color::White, Color::Black] {
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            board.place(Square::new(color.back_row(), col), ChessPiece::new(kind, color));
            board.place(
                Square::new(color.pawn_row(), col),
                ChessPiece::new(PieceType::Pawn, color),
            );
        }
    }
    board
}

//! Fixed-size square grids for the two-player board games.
//!
//! ## Square
//!
//! A `(row, col)` coordinate with row 0 at the top of the board as rendered.
//! Offsets are computed in signed space and come back as `None` when they
//! leave the board, so callers never index out of bounds.
//!
//! ## Board
//!
//! `Board<P>` owns its pieces. Moving a piece transfers it to the destination
//! cell; a piece removed by `take` or overwritten by `relocate` is dropped
//! from the model.

use serde::{Deserialize, Serialize};

/// Side length of the chess and checkers boards.
pub const BOARD_SIZE: usize = 8;

/// A board coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub row: usize,
    pub col: usize,
}

impl Square {
    /// Create a square. Does not check bounds.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step by a signed delta, staying on an `BOARD_SIZE`-wide board.
    #[must_use]
    pub fn offset(self, dr: i32, dc: i32) -> Option<Square> {
        let row = self.row as i32 + dr;
        let col = self.col as i32 + dc;
        if (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col) {
            Some(Square::new(row as usize, col as usize))
        } else {
            None
        }
    }

    /// Whether the square lies on the board.
    #[must_use]
    pub const fn on_board(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Signed (row, col) difference `to - self`.
    #[must_use]
    pub fn delta_to(self, to: Square) -> (i32, i32) {
        (
            to.row as i32 - self.row as i32,
            to.col as i32 - self.col as i32,
        )
    }

    /// The square halfway between `self` and `to`, if it exists on the grid.
    #[must_use]
    pub fn midpoint(self, to: Square) -> Option<Square> {
        let (dr, dc) = self.delta_to(to);
        if dr % 2 != 0 || dc % 2 != 0 {
            return None;
        }
        self.offset(dr / 2, dc / 2)
    }

    /// Iterate over every square, row by row.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square::new(row, col)))
    }

    /// Dark squares are the ones with an odd coordinate sum.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// An 8×8 grid of optional pieces.
///
/// Dimensions never change; only cell contents do. At most one piece per cell
/// is guaranteed by the API: every write either targets an empty cell or
/// returns the piece it displaced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board<P> {
    cells: Vec<Option<P>>,
}

impl<P> Default for Board<P> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<P> Board<P> {
    /// Create a board with no pieces.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cells: std::iter::repeat_with(|| None)
                .take(BOARD_SIZE * BOARD_SIZE)
                .collect(),
        }
    }

    fn index(square: Square) -> usize {
        debug_assert!(square.on_board(), "square {square} is off the board");
        square.row * BOARD_SIZE + square.col
    }

    /// Piece at `square`, if any. Off-board squares are empty.
    #[must_use]
    pub fn get(&self, square: Square) -> Option<&P> {
        if !square.on_board() {
            return None;
        }
        self.cells[Self::index(square)].as_ref()
    }

    /// Mutable access to the piece at `square`.
    pub fn get_mut(&mut self, square: Square) -> Option<&mut P> {
        if !square.on_board() {
            return None;
        }
        self.cells[Self::index(square)].as_mut()
    }

    /// Whether `square` is on the board and holds no piece.
    #[must_use]
    pub fn is_empty_at(&self, square: Square) -> bool {
        square.on_board() && self.cells[Self::index(square)].is_none()
    }

    /// Put a piece on a square, returning whatever was there.
    ///
    /// Off-board squares are left alone and the piece is dropped.
    pub fn place(&mut self, square: Square, piece: P) -> Option<P> {
        if !square.on_board() {
            return None;
        }
        self.cells[Self::index(square)].replace(piece)
    }

    /// Remove and return the piece on a square.
    pub fn take(&mut self, square: Square) -> Option<P> {
        if !square.on_board() {
            return None;
        }
        self.cells[Self::index(square)].take()
    }

    /// Move the piece at `from` to `to`.
    ///
    /// Returns the piece previously at `to` (a capture). Does nothing if `from`
    /// is empty or `to` is off the board.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<P> {
        if !to.on_board() {
            return None;
        }
        let piece = self.take(from)?;
        self.place(to, piece)
    }

    /// Iterate over occupied squares and their pieces.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, &P)> {
        self.cells.iter().enumerate().filter_map(|(i, cell)| {
            cell.as_ref()
                .map(|p| (Square::new(i / BOARD_SIZE, i % BOARD_SIZE), p))
        })
    }

    /// Count the pieces matching a predicate.
    pub fn count(&self, mut pred: impl FnMut(&P) -> bool) -> usize {
        self.cells.iter().flatten().filter(|p| pred(p)).count()
    }

    /// Copy the board out as rows for rendering.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<Option<P>>>
    where
        P: Clone,
    {
        self.cells
            .chunks(BOARD_SIZE)
            .map(<[Option<P>]>::to_vec)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_bounds() {
        let sq = Square::new(0, 0);
        assert_eq!(sq.offset(1, 1), Some(Square::new(1, 1)));
        assert_eq!(sq.offset(-1, 0), None);
        assert_eq!(Square::new(7, 7).offset(0, 1), None);
    }

    #[test]
    fn test_midpoint() {
        let from = Square::new(2, 1);
        assert_eq!(from.midpoint(Square::new(4, 3)), Some(Square::new(3, 2)));
        assert_eq!(from.midpoint(Square::new(3, 2)), None);
    }

    #[test]
    fn test_all_squares() {
        assert_eq!(Square::all().count(), 64);
        assert_eq!(Square::all().filter(|s| s.is_dark()).count(), 32);
    }

    #[test]
    fn test_relocate_captures() {
        let mut board: Board<char> = Board::empty();
        board.place(Square::new(0, 0), 'a');
        board.place(Square::new(1, 1), 'b');

        let captured = board.relocate(Square::new(0, 0), Square::new(1, 1));
        assert_eq!(captured, Some('b'));
        assert_eq!(board.get(Square::new(1, 1)), Some(&'a'));
        assert!(board.is_empty_at(Square::new(0, 0)));
        assert_eq!(board.count(|_| true), 1);
    }

    #[test]
    fn test_relocate_from_empty_is_noop() {
        let mut board: Board<char> = Board::empty();
        board.place(Square::new(3, 3), 'x');
        assert_eq!(board.relocate(Square::new(0, 0), Square::new(3, 3)), None);
        assert_eq!(board.get(Square::new(3, 3)), Some(&'x'));
    }

    #[test]
    fn test_rows_shape() {
        let mut board: Board<u8> = Board::empty();
        board.place(Square::new(2, 5), 9);
        let rows = board.rows();
        assert_eq!(rows.len(), 8);
        assert!(rows.iter().all(|r| r.len() == 8));
        assert_eq!(rows[2][5], Some(9));
    }

    #[test]
    fn test_off_board_reads_are_empty() {
        let board: Board<u8> = Board::empty();
        assert_eq!(board.get(Square::new(8, 0)), None);
        assert!(!board.is_empty_at(Square::new(0, 8)));
    }

    #[test]
    fn test_off_board_writes_are_dropped() {
        let mut board: Board<char> = Board::empty();
        board.place(Square::new(1, 1), 'k');

        assert_eq!(board.place(Square::new(0, 9), 'x'), None);
        assert_eq!(board.get(Square::new(1, 1)), Some(&'k'));
        assert_eq!(board.count(|_| true), 1);

        assert_eq!(board.relocate(Square::new(1, 1), Square::new(8, 1)), None);
        assert_eq!(board.get(Square::new(1, 1)), Some(&'k'));
    }
}

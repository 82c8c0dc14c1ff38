//! The 20×10 well of settled cells.
//!
//! Rows are held in a persistent [`im::Vector`] so that removing a full row
//! and pushing an empty one on top is cheap, and cloning the well for a
//! snapshot shares structure with the live well.

use im::Vector;

use super::catalog::{FallingPiece, Tetromino};

/// Columns in the well.
pub const WELL_WIDTH: usize = 10;
/// Rows in the well.
pub const WELL_HEIGHT: usize = 20;

/// One row of settled cells, left to right.
pub type Row = [Option<Tetromino>; WELL_WIDTH];

const EMPTY_ROW: Row = [None; WELL_WIDTH];

/// Settled cells, row 0 at the top.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Well {
    rows: Vector<Row>,
}

impl Default for Well {
    fn default() -> Self {
        Self::new()
    }
}

impl Well {
    /// An empty well.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: std::iter::repeat(EMPTY_ROW).take(WELL_HEIGHT).collect(),
        }
    }

    fn in_bounds(x: i32, y: i32) -> bool {
        (0..WELL_WIDTH as i32).contains(&x) && (0..WELL_HEIGHT as i32).contains(&y)
    }

    /// Settled cell at `(x, y)`. Out of range reads as empty.
    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Option<Tetromino> {
        if !Self::in_bounds(x, y) {
            return None;
        }
        self.rows[y as usize][x as usize]
    }

    /// Overwrite one cell. Out of range writes are dropped.
    pub fn set(&mut self, x: i32, y: i32, cell: Option<Tetromino>) {
        if Self::in_bounds(x, y) {
            self.rows[y as usize][x as usize] = cell;
        }
    }

    /// Whether `piece` would leave the well or overlap a settled cell.
    ///
    /// Cells above the top edge (`y < 0`) are allowed so a piece can rotate
    /// while partly hidden.
    #[must_use]
    pub fn collides(&self, piece: &FallingPiece) -> bool {
        piece.cells().any(|(x, y)| {
            if x < 0 || x >= WELL_WIDTH as i32 || y >= WELL_HEIGHT as i32 {
                return true;
            }
            y >= 0 && self.rows[y as usize][x as usize].is_some()
        })
    }

    /// Write the piece's cells into the well.
    pub fn settle(&mut self, piece: &FallingPiece) {
        for (x, y) in piece.cells() {
            self.set(x, y, Some(piece.kind));
        }
    }

    /// Remove every full row, scanning bottom to top, and return how many
    /// went. The same index is checked again after a removal since the rows
    /// above shift down into it.
    pub fn clear_full_rows(&mut self) -> u32 {
        let mut cleared = 0;
        let mut y = WELL_HEIGHT;
        while y > 0 {
            let row = y - 1;
            if self.rows[row].iter().all(Option::is_some) {
                self.rows.remove(row);
                self.rows.push_front(EMPTY_ROW);
                cleared += 1;
            } else {
                y -= 1;
            }
        }
        cleared
    }

    /// Number of settled cells.
    #[must_use]
    pub fn filled(&self) -> usize {
        self.rows.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// Copy the well out as rows for rendering.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<Option<Tetromino>>> {
        self.rows.iter().map(|row| row.to_vec()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_row(well: &mut Well, y: i32, except: &[i32]) {
        for x in 0..WELL_WIDTH as i32 {
            if !except.contains(&x) {
                well.set(x, y, Some(Tetromino::O));
            }
        }
    }

    #[test]
    fn test_new_well_is_empty() {
        let well = Well::new();
        assert_eq!(well.filled(), 0);
        assert_eq!(well.rows().len(), WELL_HEIGHT);
        assert!(well.rows().iter().all(|r| r.len() == WELL_WIDTH));
    }

    #[test]
    fn test_walls_and_floor_collide() {
        let well = Well::new();
        assert!(well.collides(&FallingPiece::new(Tetromino::I, 0, -1, 0)));
        assert!(well.collides(&FallingPiece::new(Tetromino::I, 0, 7, 0)));
        assert!(well.collides(&FallingPiece::new(Tetromino::O, 0, 0, 19)));
        assert!(!well.collides(&FallingPiece::new(Tetromino::O, 0, 0, 18)));
    }

    #[test]
    fn test_above_top_is_allowed() {
        let well = Well::new();
        assert!(!well.collides(&FallingPiece::new(Tetromino::O, 0, 4, -1)));
    }

    #[test]
    fn test_settled_cells_collide() {
        let mut well = Well::new();
        well.set(5, 10, Some(Tetromino::Z));
        assert!(well.collides(&FallingPiece::new(Tetromino::O, 0, 4, 9)));
        assert!(!well.collides(&FallingPiece::new(Tetromino::O, 0, 6, 9)));
    }

    #[test]
    fn test_settle_writes_kind() {
        let mut well = Well::new();
        well.settle(&FallingPiece::new(Tetromino::T, 0, 0, 18));
        assert_eq!(well.filled(), 4);
        assert_eq!(well.get(1, 18), Some(Tetromino::T));
        assert_eq!(well.get(0, 18), None);
    }

    #[test]
    fn test_clear_single_row() {
        let mut well = Well::new();
        fill_row(&mut well, 19, &[]);
        well.set(3, 18, Some(Tetromino::J));

        assert_eq!(well.clear_full_rows(), 1);
        assert_eq!(well.get(3, 19), Some(Tetromino::J));
        assert_eq!(well.filled(), 1);
    }

    #[test]
    fn test_clear_rescans_shifted_rows() {
        let mut well = Well::new();
        fill_row(&mut well, 19, &[]);
        fill_row(&mut well, 18, &[]);
        fill_row(&mut well, 17, &[0]);
        fill_row(&mut well, 16, &[]);

        assert_eq!(well.clear_full_rows(), 3);
        assert_eq!(well.filled(), WELL_WIDTH - 1);
        assert_eq!(well.get(0, 19), None);
        assert_eq!(well.get(1, 19), Some(Tetromino::O));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut well = Well::new();
        let before = well.clone();
        well.set(0, 0, Some(Tetromino::I));
        assert_eq!(before.filled(), 0);
        assert_ne!(before, well);
    }
}

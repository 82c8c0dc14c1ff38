//! Tetromino catalog: rotation states, palette and the falling piece.

use serde::{Deserialize, Serialize};

/// One rotation state, rows top to bottom, `1` for a filled cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shape(&'static [&'static [u8]]);

impl Shape {
    /// Columns spanned by the bounding box.
    #[must_use]
    pub fn width(self) -> usize {
        self.0.first().map_or(0, |row| row.len())
    }

    /// Rows spanned by the bounding box.
    #[must_use]
    pub fn height(self) -> usize {
        self.0.len()
    }

    /// Filled `(dx, dy)` offsets from the top-left corner.
    pub fn cells(self) -> impl Iterator<Item = (i32, i32)> {
        self.0.iter().enumerate().flat_map(|(dy, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &bit)| bit != 0)
                .map(move |(dx, _)| (dx as i32, dy as i32))
        })
    }
}

const I_STATES: &[Shape] = &[Shape(&[&[1, 1, 1, 1]])];
const O_STATES: &[Shape] = &[Shape(&[&[1, 1], &[1, 1]])];
const T_STATES: &[Shape] = &[
    Shape(&[&[0, 1, 0], &[1, 1, 1]]),
    Shape(&[&[1, 0], &[1, 1], &[1, 0]]),
    Shape(&[&[1, 1, 1], &[0, 1, 0]]),
    Shape(&[&[0, 1], &[1, 1], &[0, 1]]),
];
const S_STATES: &[Shape] = &[
    Shape(&[&[0, 1, 1], &[1, 1, 0]]),
    Shape(&[&[1, 0], &[1, 1], &[0, 1]]),
];
const Z_STATES: &[Shape] = &[
    Shape(&[&[1, 1, 0], &[0, 1, 1]]),
    Shape(&[&[0, 1], &[1, 1], &[1, 0]]),
];
const J_STATES: &[Shape] = &[
    Shape(&[&[1, 0, 0], &[1, 1, 1]]),
    Shape(&[&[1, 1], &[1, 0], &[1, 0]]),
    Shape(&[&[1, 1, 1], &[0, 0, 1]]),
    Shape(&[&[0, 1], &[0, 1], &[1, 1]]),
];
const L_STATES: &[Shape] = &[
    Shape(&[&[0, 0, 1], &[1, 1, 1]]),
    Shape(&[&[1, 0], &[1, 0], &[1, 1]]),
    Shape(&[&[1, 1, 1], &[1, 0, 0]]),
    Shape(&[&[1, 1], &[0, 1], &[0, 1]]),
];

/// The seven piece kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tetromino {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl Tetromino {
    /// Every kind, in catalog order.
    pub const ALL: [Tetromino; 7] = [
        Tetromino::I,
        Tetromino::O,
        Tetromino::T,
        Tetromino::S,
        Tetromino::Z,
        Tetromino::J,
        Tetromino::L,
    ];

    /// Rotation states in clockwise order.
    #[must_use]
    pub const fn rotations(self) -> &'static [Shape] {
        match self {
            Tetromino::I => I_STATES,
            Tetromino::O => O_STATES,
            Tetromino::T => T_STATES,
            Tetromino::S => S_STATES,
            Tetromino::Z => Z_STATES,
            Tetromino::J => J_STATES,
            Tetromino::L => L_STATES,
        }
    }

    /// The shape for `rotation`, wrapping around.
    #[must_use]
    pub fn shape(self, rotation: usize) -> Shape {
        let states = self.rotations();
        states[rotation % states.len()]
    }

    /// Palette colour as a CSS hex string.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Tetromino::I => "#00f5ff",
            Tetromino::O => "#ffff00",
            Tetromino::T => "#800080",
            Tetromino::S => "#00ff00",
            Tetromino::Z => "#ff0000",
            Tetromino::J => "#0000ff",
            Tetromino::L => "#ffa500",
        }
    }
}

/// The live, not yet settled piece. `(x, y)` is the top-left of its shape in
/// well coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallingPiece {
    pub kind: Tetromino,
    pub rotation: usize,
    pub x: i32,
    pub y: i32,
}

impl FallingPiece {
    /// Place a piece explicitly.
    #[must_use]
    pub const fn new(kind: Tetromino, rotation: usize, x: i32, y: i32) -> Self {
        Self { kind, rotation, x, y }
    }

    /// Rotation 0, horizontally centred in a well `well_width` wide, top row.
    #[must_use]
    pub fn spawn(kind: Tetromino, well_width: usize) -> Self {
        let width = kind.shape(0).width();
        let x = (well_width.saturating_sub(width) / 2) as i32;
        Self::new(kind, 0, x, 0)
    }

    #[must_use]
    pub fn shape(&self) -> Shape {
        self.kind.shape(self.rotation)
    }

    /// Absolute `(x, y)` of every filled cell.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> {
        let (x, y) = (self.x, self.y);
        self.shape().cells().map(move |(dx, dy)| (x + dx, y + dy))
    }

    /// Copy shifted by `(dx, dy)`.
    #[must_use]
    pub fn shifted(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Copy advanced to the next rotation state.
    #[must_use]
    pub fn rotated(&self) -> Self {
        Self {
            rotation: (self.rotation + 1) % self.kind.rotations().len(),
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_counts() {
        assert_eq!(Tetromino::O.rotations().len(), 1);
        assert_eq!(Tetromino::I.rotations().len(), 1);
        assert_eq!(Tetromino::S.rotations().len(), 2);
        assert_eq!(Tetromino::Z.rotations().len(), 2);
        for kind in [Tetromino::T, Tetromino::J, Tetromino::L] {
            assert_eq!(kind.rotations().len(), 4);
        }
    }

    #[test]
    fn test_every_state_has_four_cells() {
        for kind in Tetromino::ALL {
            for shape in kind.rotations() {
                assert_eq!(shape.cells().count(), 4, "{kind:?}");
            }
        }
    }

    #[test]
    fn test_spawn_is_centered() {
        assert_eq!(FallingPiece::spawn(Tetromino::I, 10).x, 3);
        assert_eq!(FallingPiece::spawn(Tetromino::O, 10).x, 4);
        assert_eq!(FallingPiece::spawn(Tetromino::T, 10).x, 3);
    }

    #[test]
    fn test_rotation_wraps() {
        let piece = FallingPiece::spawn(Tetromino::S, 10);
        assert_eq!(piece.rotated().rotation, 1);
        assert_eq!(piece.rotated().rotated().rotation, 0);
        assert_eq!(FallingPiece::spawn(Tetromino::O, 10).rotated().rotation, 0);
    }

    #[test]
    fn test_absolute_cells() {
        let piece = FallingPiece::new(Tetromino::T, 0, 2, 5);
        let cells: Vec<_> = piece.cells().collect();
        assert_eq!(cells, vec![(3, 5), (2, 6), (3, 6), (4, 6)]);
    }

    #[test]
    fn test_palette() {
        assert_eq!(Tetromino::I.color(), "#00f5ff");
        assert_eq!(Tetromino::L.color(), "#ffa500");
    }
}

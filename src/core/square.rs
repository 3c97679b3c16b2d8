use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::coord::Coord;

pub const ROWS: i32 = 10;
pub const COLS: i32 = 9;
pub const NUM_SQUARES: usize = (ROWS * COLS) as usize;

/// A board cell packed into a single `u8` (`row * 9 + col`).
///
/// Row 0 is Black's home rank, row 9 is Red's. Ordering is row-major, which is also the
/// order every board scan in the crate uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "SquareRepr", into = "SquareRepr")]
pub struct Square(u8);

impl Square {
    /// `None` for coordinates outside the 10×9 grid.
    #[inline]
    pub fn new(row: i32, col: i32) -> Option<Square> {
        if (0..ROWS).contains(&row) && (0..COLS).contains(&col) {
            Some(Square((row * COLS + col) as u8))
        } else {
            None
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn row(self) -> i32 {
        self.0 as i32 / COLS
    }

    #[inline]
    pub fn col(self) -> i32 {
        self.0 as i32 % COLS
    }

    /// The square `delta` away, if it is still on the board.
    #[inline]
    pub fn offset(self, delta: Coord) -> Option<Square> {
        Square::new(self.row() + delta.row, self.col() + delta.col)
    }

    /// All 90 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..NUM_SQUARES as u8).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row(), self.col())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct SquareRepr {
    row: i32,
    col: i32,
}

impl TryFrom<SquareRepr> for Square {
    type Error = String;

    fn try_from(r: SquareRepr) -> Result<Self, Self::Error> {
        Square::new(r.row, r.col)
            .ok_or_else(|| format!("square ({},{}) is off the board", r.row, r.col))
    }
}

impl From<Square> for SquareRepr {
    fn from(sq: Square) -> Self {
        SquareRepr {
            row: sq.row(),
            col: sq.col(),
        }
    }
}

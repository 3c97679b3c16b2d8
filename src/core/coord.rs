use std::ops::Mul;

/// A signed (row, column) step used to walk the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl Mul<i32> for Coord {
    type Output = Coord;

    #[inline]
    fn mul(self, rhs: i32) -> Coord {
        Coord {
            row: self.row * rhs,
            col: self.col * rhs,
        }
    }
}

/// The 4 orthogonal unit steps.
pub const ORTHO_STEPS: [Coord; 4] = [
    Coord { row: 1, col: 0 },
    Coord { row: -1, col: 0 },
    Coord { row: 0, col: 1 },
    Coord { row: 0, col: -1 },
];

/// The 4 diagonal unit steps.
pub const DIAG_STEPS: [Coord; 4] = [
    Coord { row: 1, col: 1 },
    Coord { row: 1, col: -1 },
    Coord { row: -1, col: 1 },
    Coord { row: -1, col: -1 },
];

/// Sideways steps a pawn gains after crossing the river.
pub const SIDE_STEPS: [Coord; 2] = [Coord { row: 0, col: -1 }, Coord { row: 0, col: 1 }];

/// Horse jumps grouped by the orthogonal leg they pivot around.
///
/// Each entry is `(leg, [destination, destination])`, all relative to the horse.
pub const HORSE_JUMPS: [(Coord, [Coord; 2]); 4] = [
    (
        Coord { row: -1, col: 0 },
        [Coord { row: -2, col: -1 }, Coord { row: -2, col: 1 }],
    ),
    (
        Coord { row: 1, col: 0 },
        [Coord { row: 2, col: -1 }, Coord { row: 2, col: 1 }],
    ),
    (
        Coord { row: 0, col: -1 },
        [Coord { row: -1, col: -2 }, Coord { row: 1, col: -2 }],
    ),
    (
        Coord { row: 0, col: 1 },
        [Coord { row: -1, col: 2 }, Coord { row: 1, col: 2 }],
    ),
];

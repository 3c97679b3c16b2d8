//! Fixed geometric zones: palaces and the river.
//!
//! None of these are stored on the board; they are functions of a side and a square.

use crate::chess::piece::Side;
use crate::core::square::Square;

/// The river runs between rows 4 and 5. Black's half is rows 0..=4, Red's is 5..=9.
pub const RIVER_BLACK_LAST_ROW: i32 = 4;
pub const RIVER_RED_FIRST_ROW: i32 = 5;

const PALACE_COLS: std::ops::RangeInclusive<i32> = 3..=5;

/// True iff `sq` lies in `side`'s 3×3 palace.
#[inline]
pub fn in_palace(side: Side, sq: Square) -> bool {
    let rows = match side {
        Side::Red => 7..=9,
        Side::Black => 0..=2,
    };
    rows.contains(&sq.row()) && PALACE_COLS.contains(&sq.col())
}

/// True iff `sq` is on `side`'s own half of the river.
#[inline]
pub fn on_own_half(side: Side, sq: Square) -> bool {
    match side {
        Side::Red => sq.row() >= RIVER_RED_FIRST_ROW,
        Side::Black => sq.row() <= RIVER_BLACK_LAST_ROW,
    }
}

/// A piece of `side` standing on `sq` has crossed the river.
#[inline]
pub fn has_crossed_river(side: Side, sq: Square) -> bool {
    !on_own_half(side, sq)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palaces_hold_nine_squares_each() {
        for side in Side::BOTH {
            let n = Square::all().filter(|&sq| in_palace(side, sq)).count();
            assert_eq!(n, 9);
        }
        let red_general_home = Square::new(9, 4).unwrap();
        assert!(in_palace(Side::Red, red_general_home));
        assert!(!in_palace(Side::Black, red_general_home));
    }

    #[test]
    fn halves_partition_the_board() {
        for sq in Square::all() {
            assert_ne!(on_own_half(Side::Red, sq), on_own_half(Side::Black, sq));
        }
        assert!(has_crossed_river(Side::Red, Square::new(4, 0).unwrap()));
        assert!(!has_crossed_river(Side::Black, Square::new(4, 0).unwrap()));
    }
}

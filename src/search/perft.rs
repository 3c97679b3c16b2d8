//! Perft: count legal move paths to a fixed depth.
//!
//! This is a regression tool for the move generator, not a search.

use rustc_hash::FxHashMap;

use crate::chess::board::Board;
use crate::chess::piece::Side;
use crate::core::moves::Move;
use crate::rules::legal::legal_moves;

/// Number of legal move sequences of length `depth` starting with `side` to move.
pub fn perft(board: &Board, side: Side, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = legal_moves(board, side);
    if depth == 1 {
        return moves.len() as u64;
    }
    moves
        .into_iter()
        .map(|mv| perft(&board.apply(mv), side.other(), depth - 1))
        .sum()
}

/// [`perft`] split by first move.
pub fn divide(board: &Board, side: Side, depth: u32) -> FxHashMap<Move, u64> {
    let mut out = FxHashMap::default();
    if depth == 0 {
        return out;
    }
    for mv in legal_moves(board, side) {
        let n = perft(&board.apply(mv), side.other(), depth - 1);
        out.insert(mv, n);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_zero_counts_the_root() {
        assert_eq!(perft(&Board::initial(), Side::Red, 0), 1);
        assert!(divide(&Board::initial(), Side::Red, 0).is_empty());
    }

    #[test]
    fn divide_sums_to_perft() {
        let b = Board::initial();
        let split = divide(&b, Side::Red, 2);
        assert_eq!(split.len(), 44);
        assert_eq!(split.values().sum::<u64>(), perft(&b, Side::Red, 2));
    }
}

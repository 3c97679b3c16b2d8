use crate::chess::board::Board;
use crate::chess::piece::Side;
use crate::core::square::Square;

use super::movegen::destinations_into;

/// True iff some piece of `by` has a pseudo-legal move onto `target`.
///
/// Whose turn it is does not matter here.
pub fn is_attacked_by(board: &Board, target: Square, by: Side) -> bool {
    let mut buf = Vec::with_capacity(17);
    for (from, piece) in board.pieces_of(by) {
        buf.clear();
        destinations_into(board, from, piece, &mut buf);
        if buf.contains(&target) {
            return true;
        }
    }
    false
}

/// Is `side`'s General under threat?
///
/// - no General on the board: never threatened;
/// - any opposing pseudo-legal move lands on it: threatened;
/// - the Generals face each other on an open file: threatened, for both sides at once.
pub fn is_threatened(board: &Board, side: Side) -> bool {
    let Some(general) = board.find_general(side) else {
        return false;
    };
    is_attacked_by(board, general, side.other()) || board.generals_facing()
}

//! The legality filter.
//!
//! Every pseudo-legal destination is tried on a copy of the board; the move survives iff,
//! on that copy, the Generals do not face each other and the mover's General is not
//! threatened. This is the only place check and opposition are enforced.

use crate::chess::board::Board;
use crate::chess::piece::Side;
use crate::core::moves::Move;
use crate::core::square::Square;

use super::attacks::is_threatened;
use super::movegen::pseudo_legal_destinations;

/// Would playing `mv` for `side` leave a legal position behind?
#[inline]
fn survives(board: &Board, mv: Move, side: Side) -> bool {
    let next = board.apply(mv);
    !next.generals_facing() && !is_threatened(&next, side)
}

/// All legal moves of the piece on `from`. Empty cells yield an empty list.
pub fn legal_moves_at(board: &Board, from: Square) -> Vec<Move> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };
    pseudo_legal_destinations(board, from)
        .into_iter()
        .map(|to| Move::new(from, to))
        .filter(|&mv| survives(board, mv, piece.side))
        .collect()
}

/// All legal moves for `side`, grouped by origin square in row-major order.
pub fn legal_moves(board: &Board, side: Side) -> Vec<Move> {
    board
        .pieces_of(side)
        .flat_map(|(from, _)| legal_moves_at(board, from))
        .collect()
}

/// Does `side` have at least one legal move? Stops at the first one found.
pub fn has_legal_move(board: &Board, side: Side) -> bool {
    board.pieces_of(side).any(|(from, _)| {
        pseudo_legal_destinations(board, from)
            .into_iter()
            .any(|to| survives(board, Move::new(from, to), side))
    })
}

/// Is `mv` one of the legal moves for the piece on its origin square?
pub fn is_legal(board: &Board, mv: Move) -> bool {
    let Some(piece) = board.piece_at(mv.from) else {
        return false;
    };
    pseudo_legal_destinations(board, mv.from).contains(&mv.to) && survives(board, mv, piece.side)
}

//! Pseudo-legal move generation: one generator per piece kind.
//!
//! Generators look only at the moving piece's own geometry and the occupancy of the cells
//! it walks over. They never ask whether the move would leave the mover's General
//! exposed; that is the legality filter's job.

use crate::chess::board::Board;
use crate::chess::piece::{Piece, PieceKind, Side};
use crate::chess::zones::{has_crossed_river, in_palace, on_own_half};
use crate::core::coord::{Coord, DIAG_STEPS, HORSE_JUMPS, ORTHO_STEPS, SIDE_STEPS};
use crate::core::square::Square;

/// Destinations reachable by whatever stands on `from`. Empty cells yield nothing.
pub fn pseudo_legal_destinations(board: &Board, from: Square) -> Vec<Square> {
    let mut out = Vec::new();
    if let Some(piece) = board.piece_at(from) {
        destinations_into(board, from, piece, &mut out);
    }
    out
}

/// Append the destinations of `piece` standing on `from` to `out`.
pub fn destinations_into(board: &Board, from: Square, piece: Piece, out: &mut Vec<Square>) {
    let side = piece.side;
    match piece.kind {
        PieceKind::Rook => rook(board, from, side, out),
        PieceKind::Cannon => cannon(board, from, side, out),
        PieceKind::Horse => horse(board, from, side, out),
        PieceKind::Elephant => elephant(board, from, side, out),
        PieceKind::Advisor => advisor(board, from, side, out),
        PieceKind::General => general(board, from, side, out),
        PieceKind::Pawn => pawn(board, from, side, out),
    }
}

#[inline]
fn is_own(board: &Board, sq: Square, side: Side) -> bool {
    board.piece_at(sq).is_some_and(|p| p.side == side)
}

#[inline]
fn is_enemy(board: &Board, sq: Square, side: Side) -> bool {
    board.piece_at(sq).is_some_and(|p| p.side != side)
}

fn rook(board: &Board, from: Square, side: Side, out: &mut Vec<Square>) {
    for dir in ORTHO_STEPS {
        let mut cur = from.offset(dir);
        while let Some(sq) = cur {
            if board.is_empty(sq) {
                out.push(sq);
            } else {
                if is_enemy(board, sq, side) {
                    out.push(sq);
                }
                break;
            }
            cur = sq.offset(dir);
        }
    }
}

fn cannon(board: &Board, from: Square, side: Side, out: &mut Vec<Square>) {
    for dir in ORTHO_STEPS {
        let mut screened = false;
        let mut cur = from.offset(dir);
        while let Some(sq) = cur {
            match (screened, board.is_empty(sq)) {
                (false, true) => out.push(sq),
                (false, false) => screened = true,
                (true, true) => {}
                (true, false) => {
                    if is_enemy(board, sq, side) {
                        out.push(sq);
                    }
                    break;
                }
            }
            cur = sq.offset(dir);
        }
    }
}

fn horse(board: &Board, from: Square, side: Side, out: &mut Vec<Square>) {
    for (leg, dsts) in HORSE_JUMPS {
        match from.offset(leg) {
            Some(leg_sq) if board.is_empty(leg_sq) => {}
            _ => continue,
        }
        for d in dsts {
            if let Some(sq) = from.offset(d) {
                if !is_own(board, sq, side) {
                    out.push(sq);
                }
            }
        }
    }
}

fn elephant(board: &Board, from: Square, side: Side, out: &mut Vec<Square>) {
    for dir in DIAG_STEPS {
        let (Some(eye), Some(sq)) = (from.offset(dir), from.offset(dir * 2)) else {
            continue;
        };
        if !board.is_empty(eye) || is_own(board, sq, side) || !on_own_half(side, sq) {
            continue;
        }
        out.push(sq);
    }
}

fn advisor(board: &Board, from: Square, side: Side, out: &mut Vec<Square>) {
    steps_within_palace(board, from, side, &DIAG_STEPS, out);
}

fn general(board: &Board, from: Square, side: Side, out: &mut Vec<Square>) {
    let start = out.len();
    steps_within_palace(board, from, side, &ORTHO_STEPS, out);
    // An adjacent opposing General is already a palace step.
    if let Some(target) = flying_capture(board, from, side) {
        if !out[start..].contains(&target) {
            out.push(target);
        }
    }
}

/// The opposing General, if it can be captured at range along an open column.
///
/// Uses the same [`Board::open_file`] test as [`Board::generals_facing`], so the capture
/// exists exactly when the facing position does.
pub fn flying_capture(board: &Board, from: Square, side: Side) -> Option<Square> {
    board
        .find_general(side.other())
        .filter(|&target| board.open_file(from, target))
}

fn steps_within_palace(
    board: &Board,
    from: Square,
    side: Side,
    steps: &[Coord],
    out: &mut Vec<Square>,
) {
    for &d in steps {
        if let Some(sq) = from.offset(d) {
            if in_palace(side, sq) && !is_own(board, sq, side) {
                out.push(sq);
            }
        }
    }
}

fn pawn(board: &Board, from: Square, side: Side, out: &mut Vec<Square>) {
    let mut push = |d: Coord| {
        if let Some(sq) = from.offset(d) {
            if !is_own(board, sq, side) {
                out.push(sq);
            }
        }
    };
    push(Coord::new(side.forward(), 0));
    if has_crossed_river(side, from) {
        for d in SIDE_STEPS {
            push(d);
        }
    }
}

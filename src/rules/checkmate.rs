use serde::{Deserialize, Serialize};

use crate::chess::board::Board;
use crate::chess::piece::Side;

use super::attacks::is_threatened;
use super::legal::has_legal_move;

/// The two raw facts terminal classification is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideReport {
    pub threatened: bool,
    pub has_legal_moves: bool,
}

pub fn assess(board: &Board, side: Side) -> SideReport {
    SideReport {
        threatened: is_threatened(board, side),
        has_legal_moves: has_legal_move(board, side),
    }
}

/// Terminal classification for the side to move.
///
/// A stalemate is reported as a fact, not as a result: whether it loses or draws is a
/// ruleset decision (see [`crate::game::Ruleset`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "side")]
pub enum Status {
    InProgress,
    Checkmated(Side),
    Stalemated(Side),
}

pub fn classify(board: &Board, to_move: Side) -> Status {
    let report = assess(board, to_move);
    match (report.has_legal_moves, report.threatened) {
        (true, _) => Status::InProgress,
        (false, true) => Status::Checkmated(to_move),
        (false, false) => Status::Stalemated(to_move),
    }
}

/// True if this position is checkmate for `side`.
pub fn is_checkmate(board: &Board, side: Side) -> bool {
    classify(board, side) == Status::Checkmated(side)
}

/// True if `side` has no legal move but is not threatened.
pub fn is_stalemate(board: &Board, side: Side) -> bool {
    classify(board, side) == Status::Stalemated(side)
}

//! Errors for the fallible edges of the crate: placement, setup loading and playing moves.
//!
//! Queries (occupancy, move generation, threat tests) are total and never return these.

use thiserror::Error;

use crate::chess::piece::Side;
use crate::core::moves::Move;
use crate::core::square::Square;

#[derive(Debug, Error)]
pub enum RulesError {
    #[error("({row},{col}) is off the board")]
    OffBoard { row: i32, col: i32 },

    #[error("{square} is already occupied")]
    Occupied { square: Square },

    #[error("{side:?} already has a general")]
    DuplicateGeneral { side: Side },

    #[error("no piece on {square}")]
    EmptySquare { square: Square },

    #[error("piece on {square} does not belong to {expected:?}")]
    WrongSide { square: Square, expected: Side },

    #[error("illegal move {mv}")]
    IllegalMove { mv: Move },

    #[error("invalid setup json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error for {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

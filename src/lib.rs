//! A rules core for Xiangqi on the fixed 10×9 board.
//!
//! The crate answers three kinds of question about a position, and nothing else:
//!
//! - which cells can the piece on a cell legally move to ([`rules::legal`]),
//! - is a side's General currently threatened ([`rules::attacks`]),
//! - is the side to move checkmated or stalemated ([`rules::checkmate`]).
//!
//! Boards are built from the canonical layout or from caller-supplied placements
//! ([`chess::layout`]) and are plain values: [`chess::board::Board::apply`] always returns
//! a new board. How a stalemate is scored is left to a caller-chosen [`game::Ruleset`].

pub mod chess;
pub mod core;
pub mod error;
pub mod game;
pub mod rules;
pub mod search;

pub use chess::board::Board;
pub use chess::layout::{Placement, Setup};
pub use chess::piece::{Piece, PieceKind, Side};
pub use crate::core::moves::Move;
pub use crate::core::square::Square;
pub use error::RulesError;
pub use game::{Game, Outcome, Ruleset, StalemateRule};
pub use rules::checkmate::Status;

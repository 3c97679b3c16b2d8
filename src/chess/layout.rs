//! The canonical starting layout and caller-supplied placements.
//!
//! A [`Setup`] is the serde form of a position: a list of `(kind, side, row, col)`
//! placements plus the side to move and the ruleset to adjudicate with. Endgame and
//! puzzle loaders build boards from it; renderers consume it via [`Board::to_setup`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chess::board::Board;
use crate::chess::piece::{Piece, PieceKind, Side};
use crate::core::square::Square;
use crate::error::RulesError;
use crate::game::Ruleset;

/// Back rank, left to right, identical for both sides.
const BACK_RANK: [PieceKind; 9] = [
    PieceKind::Rook,
    PieceKind::Horse,
    PieceKind::Elephant,
    PieceKind::Advisor,
    PieceKind::General,
    PieceKind::Advisor,
    PieceKind::Elephant,
    PieceKind::Horse,
    PieceKind::Rook,
];

const CANNON_COLS: [i32; 2] = [1, 7];
const PAWN_COLS: [i32; 5] = [0, 2, 4, 6, 8];

/// `(back rank, cannon row, pawn row)` for a side.
fn home_rows(side: Side) -> (i32, i32, i32) {
    match side {
        Side::Black => (0, 2, 3),
        Side::Red => (9, 7, 6),
    }
}

/// The 32 placements of the standard opening position.
pub fn initial_placements() -> Vec<Placement> {
    let mut out = Vec::with_capacity(32);
    for side in Side::BOTH {
        let (back, cannons, pawns) = home_rows(side);
        for (col, kind) in BACK_RANK.iter().copied().enumerate() {
            out.push(Placement::new(kind, side, back, col as i32));
        }
        for col in CANNON_COLS {
            out.push(Placement::new(PieceKind::Cannon, side, cannons, col));
        }
        for col in PAWN_COLS {
            out.push(Placement::new(PieceKind::Pawn, side, pawns, col));
        }
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub kind: PieceKind,
    pub side: Side,
    pub row: i32,
    pub col: i32,
}

impl Placement {
    pub const fn new(kind: PieceKind, side: Side, row: i32, col: i32) -> Self {
        Self {
            kind,
            side,
            row,
            col,
        }
    }

    pub fn square(&self) -> Result<Square, RulesError> {
        Square::new(self.row, self.col).ok_or(RulesError::OffBoard {
            row: self.row,
            col: self.col,
        })
    }

    pub fn piece(&self) -> Piece {
        Piece::new(self.kind, self.side)
    }
}

fn default_to_move() -> Side {
    Side::Red
}

/// A position as data: who moves, under which ruleset, and where everything stands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Setup {
    #[serde(default = "default_to_move")]
    pub to_move: Side,
    #[serde(default)]
    pub ruleset: Ruleset,
    pub pieces: Vec<Placement>,
}

impl Setup {
    pub fn initial() -> Self {
        Self {
            to_move: Side::Red,
            ruleset: Ruleset::default(),
            pieces: initial_placements(),
        }
    }

    pub fn from_json(s: &str) -> Result<Self, RulesError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, RulesError> {
        let text = fs::read_to_string(path).map_err(|source| RulesError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn to_json_pretty(&self) -> Result<String, RulesError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Board {
    /// The standard opening position.
    pub fn initial() -> Self {
        let mut board = Board::empty();
        for p in initial_placements() {
            // The canonical placements are all distinct on-board cells.
            if let Ok(sq) = p.square() {
                board.set(sq, Some(p.piece()));
            }
        }
        board
    }

    /// Build a board from arbitrary placements.
    ///
    /// Fails on off-board coordinates, two pieces on one cell, or two Generals of one
    /// side. Plausibility beyond that (piece counts, reachable layouts) is the caller's
    /// business.
    pub fn from_placements<'a>(
        placements: impl IntoIterator<Item = &'a Placement>,
    ) -> Result<Board, RulesError> {
        let mut board = Board::empty();
        for p in placements {
            board.place(p.square()?, p.piece())?;
        }
        Ok(board)
    }

    pub fn from_setup(setup: &Setup) -> Result<Board, RulesError> {
        Self::from_placements(&setup.pieces)
    }

    /// Serializable snapshot of the occupancy, in row-major order.
    pub fn to_setup(&self, to_move: Side, ruleset: Ruleset) -> Setup {
        let pieces = self
            .occupants()
            .map(|(sq, p)| Placement::new(p.kind, p.side, sq.row(), sq.col()))
            .collect();
        Setup {
            to_move,
            ruleset,
            pieces,
        }
    }
}

use std::fmt;

use crate::chess::piece::{Piece, PieceKind, Side};
use crate::core::moves::Move;
use crate::core::square::{Square, COLS, NUM_SQUARES, ROWS};
use crate::error::RulesError;

/// The 10×9 grid. Each cell holds at most one piece.
///
/// A board is a plain 90-byte value: copying it shares nothing with the original, so a
/// simulated move on a copy can never leak into the board a caller is still examining.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Piece>; NUM_SQUARES],
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [None; NUM_SQUARES],
        }
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()]
    }

    /// Occupant at raw coordinates; off-board coordinates simply have none.
    #[inline]
    pub fn get(&self, row: i32, col: i32) -> Option<Piece> {
        Square::new(row, col).and_then(|sq| self.piece_at(sq))
    }

    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.cells[sq.index()].is_none()
    }

    /// Overwrite a cell without any checks, returning the previous occupant.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(&mut self.cells[sq.index()], piece)
    }

    #[inline]
    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        self.set(sq, None)
    }

    /// Put a new piece on an empty cell.
    ///
    /// Rejects occupied cells and a second General for the same side; nothing else about
    /// the layout is validated.
    pub fn place(&mut self, sq: Square, piece: Piece) -> Result<(), RulesError> {
        if !self.is_empty(sq) {
            return Err(RulesError::Occupied { square: sq });
        }
        if piece.is_general() && self.find_general(piece.side).is_some() {
            return Err(RulesError::DuplicateGeneral { side: piece.side });
        }
        self.set(sq, Some(piece));
        Ok(())
    }

    /// Every occupied cell in row-major order.
    pub fn occupants(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupants().filter(move |(_, p)| p.side == side)
    }

    pub fn count(&self, side: Side) -> usize {
        self.pieces_of(side).count()
    }

    pub fn find_general(&self, side: Side) -> Option<Square> {
        self.occupants()
            .find(|(_, p)| p.kind == PieceKind::General && p.side == side)
            .map(|(sq, _)| sq)
    }

    /// True iff `a` and `b` share a column and every cell strictly between them is empty.
    pub fn open_file(&self, a: Square, b: Square) -> bool {
        if a == b || a.col() != b.col() {
            return false;
        }
        let lo = a.row().min(b.row()) + 1;
        let hi = a.row().max(b.row());
        (lo..hi).all(|row| self.get(row, a.col()).is_none())
    }

    /// Both Generals stand on one column with nothing between them.
    ///
    /// This position is illegal for either side to create; it is also what makes the
    /// flying capture available.
    pub fn generals_facing(&self) -> bool {
        match (self.find_general(Side::Red), self.find_general(Side::Black)) {
            (Some(red), Some(black)) => self.open_file(red, black),
            _ => false,
        }
    }

    /// A new board with `mv` played. `self` is left untouched.
    #[must_use]
    pub fn apply(&self, mv: Move) -> Board {
        let mut next = *self;
        next.make_move(mv);
        next
    }

    /// Play `mv` in place, returning the captured piece.
    ///
    /// No legality is checked. Moving from an empty cell changes nothing.
    pub fn make_move(&mut self, mv: Move) -> Option<Piece> {
        let piece = self.remove(mv.from)?;
        self.set(mv.to, Some(piece))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board\n{self}")
    }
}

/// Row 0 at the top; Red pieces upper case, Black lower case, empty cells `.`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..ROWS {
            write!(f, "{row} ")?;
            for col in 0..COLS {
                let c = self.get(row, col).map_or('.', Piece::letter);
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  012345678")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: i32, col: i32) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn place_rejects_occupied_and_second_general() {
        let mut b = Board::empty();
        let general = Piece::new(PieceKind::General, Side::Red);
        b.place(sq(9, 4), general).unwrap();
        assert!(matches!(
            b.place(sq(9, 4), Piece::new(PieceKind::Rook, Side::Red)),
            Err(RulesError::Occupied { .. })
        ));
        assert!(matches!(
            b.place(sq(8, 4), general),
            Err(RulesError::DuplicateGeneral { side: Side::Red })
        ));
        b.place(sq(0, 4), Piece::new(PieceKind::General, Side::Black))
            .unwrap();
    }

    #[test]
    fn open_file_ignores_endpoints() {
        let mut b = Board::empty();
        b.place(sq(9, 4), Piece::new(PieceKind::General, Side::Red)).unwrap();
        b.place(sq(0, 4), Piece::new(PieceKind::General, Side::Black)).unwrap();
        assert!(b.open_file(sq(9, 4), sq(0, 4)));
        assert!(b.generals_facing());

        b.place(sq(5, 4), Piece::new(PieceKind::Pawn, Side::Red)).unwrap();
        assert!(!b.open_file(sq(9, 4), sq(0, 4)));
        assert!(!b.generals_facing());
        assert!(!b.open_file(sq(9, 4), sq(9, 3)));
    }

    #[test]
    fn make_move_reports_capture() {
        let mut b = Board::empty();
        let rook = Piece::new(PieceKind::Rook, Side::Red);
        let pawn = Piece::new(PieceKind::Pawn, Side::Black);
        b.place(sq(5, 0), rook).unwrap();
        b.place(sq(2, 0), pawn).unwrap();
        let captured = b.make_move(Move::new(sq(5, 0), sq(2, 0)));
        assert_eq!(captured, Some(pawn));
        assert_eq!(b.piece_at(sq(2, 0)), Some(rook));
        assert!(b.is_empty(sq(5, 0)));
        assert_eq!(b.make_move(Move::new(sq(5, 0), sq(4, 0))), None);
        assert!(b.is_empty(sq(4, 0)));
    }

    #[test]
    fn off_board_lookups_are_empty() {
        let b = Board::initial();
        assert_eq!(b.get(-1, 4), None);
        assert_eq!(b.get(10, 4), None);
        assert_eq!(b.get(0, 9), None);
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Red,
    Black,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Red, Side::Black];

    #[inline]
    pub fn other(self) -> Self {
        match self {
            Side::Red => Side::Black,
            Side::Black => Side::Red,
        }
    }

    /// Row delta of one step "forward" for this side.
    ///
    /// Red starts on rows 7..=9 and advances toward row 0; Black the reverse.
    #[inline]
    pub fn forward(self) -> i32 {
        match self {
            Side::Red => -1,
            Side::Black => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    /// The command piece each side must protect.
    General,
    Advisor,
    Elephant,
    Horse,
    Rook,
    Cannon,
    Pawn,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::General,
        PieceKind::Advisor,
        PieceKind::Elephant,
        PieceKind::Horse,
        PieceKind::Rook,
        PieceKind::Cannon,
        PieceKind::Pawn,
    ];

    /// Diagram letter, Red's casing. Only used for debug output.
    pub fn letter(self) -> char {
        use PieceKind::*;
        match self {
            General => 'K',
            Advisor => 'A',
            Elephant => 'B',
            Horse => 'N',
            Rook => 'R',
            Cannon => 'C',
            Pawn => 'P',
        }
    }
}

/// A piece is just its kind and side. Where it stands is owned by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, side: Side) -> Self {
        Self { kind, side }
    }

    #[inline]
    pub fn is_general(self) -> bool {
        self.kind == PieceKind::General
    }

    pub fn letter(self) -> char {
        match self.side {
            Side::Red => self.kind.letter(),
            Side::Black => self.kind.letter().to_ascii_lowercase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sides_are_mirror_images() {
        for side in Side::BOTH {
            assert_eq!(side.other().other(), side);
            assert_eq!(side.forward(), -side.other().forward());
        }
    }

    #[test]
    fn kinds_serialize_lowercase() {
        let p = Piece::new(PieceKind::Cannon, Side::Black);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"kind":"cannon","side":"black"}"#);
    }
}

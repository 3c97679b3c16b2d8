use serde::{Deserialize, Serialize};

use crate::chess::board::Board;
use crate::chess::layout::Setup;
use crate::chess::piece::{Piece, Side};
use crate::core::moves::Move;
use crate::error::RulesError;
use crate::rules::checkmate::{classify, Status};
use crate::rules::legal::{is_legal, legal_moves};

/// What a stalemate means for the side that cannot move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StalemateRule {
    #[default]
    Loss,
    Draw,
}

/// Caller-chosen adjudication rules layered over [`Status`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ruleset {
    pub stalemate: StalemateRule,
    /// Declare a draw once each side is down to its General alone.
    pub bare_generals_draw: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome", content = "winner")]
pub enum Outcome {
    InProgress,
    Win(Side),
    Draw,
}

impl Ruleset {
    pub fn with_stalemate(mut self, rule: StalemateRule) -> Self {
        self.stalemate = rule;
        self
    }

    pub fn with_bare_generals_draw(mut self, enabled: bool) -> Self {
        self.bare_generals_draw = enabled;
        self
    }

    pub fn adjudicate(&self, board: &Board, to_move: Side) -> Outcome {
        match classify(board, to_move) {
            Status::Checkmated(side) => Outcome::Win(side.other()),
            Status::Stalemated(side) => match self.stalemate {
                StalemateRule::Loss => Outcome::Win(side.other()),
                StalemateRule::Draw => Outcome::Draw,
            },
            Status::InProgress if self.bare_generals_draw && only_generals(board) => {
                Outcome::Draw
            }
            Status::InProgress => Outcome::InProgress,
        }
    }
}

fn only_generals(board: &Board) -> bool {
    Side::BOTH.iter().all(|&side| {
        board.count(side) == 1 && board.find_general(side).is_some()
    })
}

/// A board, the side to move, and the ruleset to judge it by.
///
/// `play` is the only mutator; it validates the move first.
#[derive(Debug, Clone)]
pub struct Game {
    pub board: Board,
    pub to_move: Side,
    pub ruleset: Ruleset,
}

impl Game {
    /// The standard opening with Red to move.
    pub fn new() -> Self {
        Self {
            board: Board::initial(),
            to_move: Side::Red,
            ruleset: Ruleset::default(),
        }
    }

    pub fn from_setup(setup: &Setup) -> Result<Self, RulesError> {
        Ok(Self {
            board: Board::from_setup(setup)?,
            to_move: setup.to_move,
            ruleset: setup.ruleset,
        })
    }

    pub fn with_ruleset(mut self, ruleset: Ruleset) -> Self {
        self.ruleset = ruleset;
        self
    }

    pub fn with_to_move(mut self, side: Side) -> Self {
        self.to_move = side;
        self
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(&self.board, self.to_move)
    }

    /// Validate and play `mv` for the side to move, returning the captured piece.
    pub fn play(&mut self, mv: Move) -> Result<Option<Piece>, RulesError> {
        let piece = self
            .board
            .piece_at(mv.from)
            .ok_or(RulesError::EmptySquare { square: mv.from })?;
        if piece.side != self.to_move {
            return Err(RulesError::WrongSide {
                square: mv.from,
                expected: self.to_move,
            });
        }
        if !is_legal(&self.board, mv) {
            return Err(RulesError::IllegalMove { mv });
        }
        let captured = self.board.make_move(mv);
        self.to_move = self.to_move.other();
        Ok(captured)
    }

    pub fn status(&self) -> Status {
        classify(&self.board, self.to_move)
    }

    pub fn outcome(&self) -> Outcome {
        self.ruleset.adjudicate(&self.board, self.to_move)
    }

    pub fn to_setup(&self) -> Setup {
        self.board.to_setup(self.to_move, self.ruleset)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ruleset_defaults_from_empty_json() {
        let r: Ruleset = serde_json::from_str("{}").unwrap();
        assert_eq!(r, Ruleset::default());
        assert_eq!(r.stalemate, StalemateRule::Loss);
        assert!(!r.bare_generals_draw);

        let r: Ruleset = serde_json::from_str(r#"{"stalemate":"draw"}"#).unwrap();
        assert_eq!(r.stalemate, StalemateRule::Draw);
    }

    #[test]
    fn opening_is_in_progress() {
        let game = Game::new();
        assert_eq!(game.status(), Status::InProgress);
        assert_eq!(game.outcome(), Outcome::InProgress);
    }
}

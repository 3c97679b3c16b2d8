//! The Xiangqi data model: sides, piece kinds, the board and its fixed zones.

pub mod board;
pub mod layout;
pub mod piece;
pub mod zones;

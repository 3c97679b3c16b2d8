//! Move generation, threat detection, legality and terminal classification.

pub mod attacks;
pub mod checkmate;
pub mod legal;
pub mod movegen;

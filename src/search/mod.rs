//! Move-path counting utilities.

pub mod perft;

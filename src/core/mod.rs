//! Low-level, allocation-free value types.
//!
//! - [`coord`]: signed row/column steps and the fixed step tables the generators walk.
//! - [`square`]: a board cell packed into one byte, plus the grid dimensions.
//! - [`moves`]: a `(from, to)` pair.

pub mod coord;
pub mod moves;
pub mod square;

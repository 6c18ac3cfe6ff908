//! Defines the core sudoku types.
//!
//! Among these are:
//!
//! - Grid: the 9x9 Sudoku board
//! - Num: the 9 numerals that go in the grid's cells
//! - Loc: the 81 locations of the grid
//! - the Row, Col and Blk types identifying parts of the grid

mod grid;
mod id_types;
mod loc;
mod num;
mod units;

pub use grid::*;
pub use loc::*;
pub use num::*;
pub use units::*;

use thiserror::Error;

/// The ways a checked grid operation can fail.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum GridError {
  /// A mark was attempted with a value outside `1..=9`.
  #[error("numeral {0} is outside 1..=9")]
  InvalidNumeral(i8),

  /// A coordinate fell outside `0..=8` on one or both axes.
  #[error("({x}, {y}) is outside the grid")]
  OutOfBounds { x: i8, y: i8 },
}

//! Defines the Loc type, which identifies the locations (or squares or
//! cells) of a Sudoku grid.

use super::units::*;
use crate::define_id_types;
use paste::paste;
use seq_macro::seq;
use serde::Serialize;
use std::fmt;

define_id_types! {
    /// Identifies one of the 81 locations in a Sudoku grid.
    ///
    /// Sudokus are represented as length-81 arrays in row-major order.
    /// `Loc(0)` is the top left square of the grid, and `Loc(80)` is the
    /// bottom right.
    Loc[81];
}

// Constant Loc values, L11 through L99.
seq!(R in 1..=9 {
    seq!(C in 1..=9 {
        paste! {
            #[allow(clippy::identity_op, clippy::erasing_op, clippy::eq_op)]
            pub const [<L R C>]: Loc = Loc((R - 1) * 9 + (C - 1));
        }
    });
});

impl Loc {
  /// Converts from row/col to Loc.
  pub const fn at(row: Row, col: Col) -> Loc {
    Loc(row.get() * 9 + col.get())
  }

  /// This location's row.
  pub const fn row(self) -> Row {
    // Safe because Locs are in 0..81.
    unsafe { Row::new_unchecked(self.0 / 9) }
  }

  /// This location's column.
  pub const fn col(self) -> Col {
    // Safe because Locs are in 0..81.
    unsafe { Col::new_unchecked(self.0 % 9) }
  }

  /// This location's block.
  pub const fn blk(self) -> Blk {
    // Safe because both bands are in 0..3.
    unsafe { Blk::new_unchecked(self.0 / 27 * 3 + self.0 / 3 % 3) }
  }
}

impl fmt::Display for Loc {
  /// Prints this location as (r, c), where r and c are the ordinal numbers
  /// of the location's row and column.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}, {})", self.row().ordinal(), self.col().ordinal())
  }
}

impl fmt::Debug for Loc {
  /// Prints this location as Lrc, where r and c are the ordinal numbers of
  /// the location's row and column.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "L{}{}", self.row().ordinal(), self.col().ordinal())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn geometry() {
    assert_eq!(L11.get(), 0);
    assert_eq!(L99.get(), 80);
    assert_eq!(L57, Loc::at(Row::new(4).unwrap(), Col::new(6).unwrap()));
    for loc in Loc::all() {
      assert_eq!(loc, Loc::at(loc.row(), loc.col()));
      assert_eq!(loc.blk().get(), loc.row().get() / 3 * 3 + loc.col().get() / 3);
    }
  }

  #[test]
  fn names() {
    assert_eq!(format!("{:?}", L46), "L46");
    assert_eq!(format!("{}", L46), "(4, 6)");
  }
}

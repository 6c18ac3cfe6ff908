//! Defines types for the Sudoku "units": the rows, columns, and 3x3 blocks
//! that may not hold a repeated numeral.

use super::loc::Loc;
use crate::define_id_types;
use serde::Serialize;
use std::fmt;

define_id_types! {
    /// Identifies one of the 9 rows in a Sudoku grid.
    ///
    /// Rows are numbered top to bottom.
    #[derive(Debug)]
    Row[9];

    /// Identifies one of the 9 columns in a Sudoku grid.
    ///
    /// Columns are numbered left to right.
    #[derive(Debug)]
    Col[9];

    /// Identifies one of the 9 3x3 blocks in a Sudoku grid.
    ///
    /// Blocks are numbered in row-major order.
    #[derive(Debug)]
    Blk[9];
}

impl Row {
  /// The locations this row comprises, left to right.
  pub fn locs(self) -> impl Iterator<Item = Loc> {
    Col::all().map(move |col| Loc::at(self, col))
  }
}

impl Col {
  /// The locations this column comprises, top to bottom.
  pub fn locs(self) -> impl Iterator<Item = Loc> {
    Row::all().map(move |row| Loc::at(row, self))
  }
}

impl Blk {
  /// This block's top row.
  const fn top(self) -> Row {
    // Safe because Blks are in 0..9.
    unsafe { Row::new_unchecked(self.0 / 3 * 3) }
  }

  /// This block's leftmost column.
  const fn left(self) -> Col {
    // Safe because Blks are in 0..9.
    unsafe { Col::new_unchecked(self.0 % 3 * 3) }
  }

  /// The locations this block comprises, in row-major order.
  pub fn locs(self) -> impl Iterator<Item = Loc> {
    let (top, left) = (self.top(), self.left());
    (0..3).flat_map(move |r| {
      (0..3).map(move |c| unsafe {
        // Safe because the block's corner plus an offset in 0..3 stays on
        // the grid.
        Loc::at(
          Row::new_unchecked(top.get() + r),
          Col::new_unchecked(left.get() + c),
        )
      })
    })
  }
}

impl fmt::Display for Row {
  /// Prints this row as Rn, where n is the ordinal number of the row.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "R{}", self.ordinal())
  }
}

impl fmt::Display for Col {
  /// Prints this column as Cn, where n is the ordinal number of the column.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "C{}", self.ordinal())
  }
}

impl fmt::Display for Blk {
  /// Prints this block as Bn, where n is the ordinal number of the block.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "B{}", self.ordinal())
  }
}

#[cfg(test)]
mod tests {
  use super::super::loc::*;
  use super::*;

  #[test]
  fn unit_locs() {
    for row in Row::all() {
      assert_eq!(9, row.locs().count());
      assert!(row.locs().all(|loc| loc.row() == row));
    }
    for col in Col::all() {
      assert_eq!(9, col.locs().count());
      assert!(col.locs().all(|loc| loc.col() == col));
    }
    for blk in Blk::all() {
      assert_eq!(9, blk.locs().count());
      assert!(blk.locs().all(|loc| loc.blk() == blk));
    }
    for loc in Loc::all() {
      assert!(loc.row().locs().any(|l| l == loc));
      assert!(loc.col().locs().any(|l| l == loc));
      assert!(loc.blk().locs().any(|l| l == loc));
    }
  }

  #[test]
  fn block_corners() {
    assert_eq!(Blk::new(0).unwrap().locs().next(), Some(L11));
    assert_eq!(Blk::new(4).unwrap().locs().next(), Some(L44));
    assert_eq!(Blk::new(8).unwrap().locs().last(), Some(L99));
  }

  #[test]
  fn names() {
    assert_eq!(format!("{}", Row::new(0).unwrap()), "R1");
    assert_eq!(format!("{}", Col::new(8).unwrap()), "C9");
    assert_eq!(format!("{}", Blk::new(4).unwrap()), "B5");
  }
}

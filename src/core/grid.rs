//! Defines the Grid type, representing a Sudoku grid and the numerals
//! marked into its cells.

use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use serde::{Serialize, Serializer};
use static_assertions::const_assert;

use super::*;

/// A Sudoku grid: a 9x9 array with each cell holding an optional numeral
/// from 1 through 9. A cell holding `None` is blank.
///
/// Cells are addressed two ways: infallibly by [`Loc`], or through the
/// checked `(x, y)` operations, where `x` is the column and `y` the row,
/// both counted from 0 at the top left.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct Grid([Option<Num>; 81]);

// Option<Num> occupies the numeral's niche, one byte per cell.
const_assert!(std::mem::size_of::<Grid>() == 81);

impl Grid {
  /// Makes an empty Grid.
  pub fn new() -> Grid {
    Grid([None; 81])
  }

  /// Returns the value at column x, row y.
  pub fn get(&self, x: i8, y: i8) -> Result<Option<Num>, GridError> {
    Ok(self[Self::loc(x, y)?])
  }

  /// Writes a numeral into the cell at column x, row y, overwriting
  /// whatever was there, blank or not.
  ///
  /// The value must be in `1..=9`; a failed call leaves the grid
  /// untouched.
  pub fn mark(&mut self, x: i8, y: i8, value: i8) -> Result<(), GridError> {
    let num = Num::new(value).ok_or(GridError::InvalidNumeral(value))?;
    self[Self::loc(x, y)?] = Some(num);
    Ok(())
  }

  /// Blanks the cell at column x, row y.
  pub fn clear(&mut self, x: i8, y: i8) -> Result<(), GridError> {
    self[Self::loc(x, y)?] = None;
    Ok(())
  }

  /// Returns the number of cells that have marked numerals.
  pub fn len(&self) -> usize {
    self.0.iter().filter(|optional| optional.is_some()).count()
  }

  /// Tells whether every cell is marked. Completeness says nothing about
  /// validity: a full grid that breaks the rules is still complete.
  pub fn is_complete(&self) -> bool {
    self.len() == Loc::COUNT
  }

  /// Tells whether no row, column, or block holds the same numeral twice.
  ///
  /// Blank cells never count as duplicates, so an empty grid is valid.
  pub fn is_valid(&self) -> bool {
    Row::all().all(|row| self.no_dupes_in(row.locs()))
      && Col::all().all(|col| self.no_dupes_in(col.locs()))
      && Blk::all().all(|blk| self.no_dupes_in(blk.locs()))
  }

  /// Clears all cells that have different marks from `other`.
  pub fn intersect(&mut self, other: &Grid) {
    for loc in Loc::all() {
      if self[loc] != other[loc] {
        self[loc] = None;
      }
    }
  }

  /// Tells whether the given locations hold no repeated numeral.
  fn no_dupes_in(&self, locs: impl Iterator<Item = Loc>) -> bool {
    let mut seen = NumSet::new();
    for loc in locs {
      if let Some(num) = self[loc] {
        if !seen.insert(num) {
          return false;
        }
      }
    }
    true
  }

  /// Translates checked (x, y) coordinates into a Loc.
  fn loc(x: i8, y: i8) -> Result<Loc, GridError> {
    match (Col::new(x), Row::new(y)) {
      (Some(col), Some(row)) => Ok(Loc::at(row, col)),
      _ => Err(GridError::OutOfBounds { x, y }),
    }
  }
}

impl Default for Grid {
  fn default() -> Self {
    Self::new()
  }
}

impl Index<Loc> for Grid {
  type Output = Option<Num>;

  /// Allows `Grid`s to be indexed by `Loc`s.
  fn index(&self, loc: Loc) -> &Option<Num> {
    unsafe {
      // Safe because `loc.index()` is in 0..81.
      self.0.get_unchecked(loc.index())
    }
  }
}

impl IndexMut<Loc> for Grid {
  fn index_mut(&mut self, loc: Loc) -> &mut Option<Num> {
    unsafe {
      // Safe because `loc.index()` is in 0..81.
      self.0.get_unchecked_mut(loc.index())
    }
  }
}

impl fmt::Display for Grid {
  /// Prints this grid as 9 newline-terminated lines, each the 9 digits of
  /// one row with no separator, using `0` for blank cells.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for row in Row::all() {
      for col in Col::all() {
        match self[Loc::at(row, col)] {
          Some(num) => write!(f, "{}", num)?,
          None => f.write_str("0")?,
        }
      }
      f.write_str("\n")?;
    }
    Ok(())
  }
}

impl fmt::Debug for Grid {
  /// Prints this grid as Ascii art.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for row in Row::all() {
      if row.get() > 0 {
        f.write_str("\n")?;
        if row.get() % 3 == 0 {
          f.write_str("- - - + - - - + - - -\n")?;
        }
      }
      for col in Col::all() {
        if col.get() > 0 {
          f.write_str(if col.get() % 3 == 0 { " | " } else { " " })?;
        }
        match self[Loc::at(row, col)] {
          Some(num) => write!(f, "{}", num)?,
          None => f.write_str("0")?,
        }
      }
    }
    Ok(())
  }
}

impl FromStr for Grid {
  type Err = String;

  /// Constructs a Grid from a string, which must contain exactly 81 cell
  /// characters, plus any number of other characters.
  ///
  /// A cell character is `1` through `9`, signifying a numeral marked in
  /// the corresponding location, or `0` or `.`, signifying that the
  /// location is blank.
  ///
  /// This method ignores all other characters, which means that strings in
  /// both of Grid's Display and Debug forms are correctly parsed back into
  /// the original grid.
  fn from_str(s: &str) -> Result<Grid, String> {
    let mut i = 0;
    let mut grid = Grid::new();
    for c in s.chars() {
      if ('0'..='9').contains(&c) || c == '.' {
        if i >= Loc::COUNT {
          return Err(format!("More than 81 locations in {}", s));
        }
        if c != '0' && c != '.' {
          // 0 and . are placeholders meaning a blank cell.
          let num = c.to_digit(10).unwrap() as i8;
          grid.0[i] = Some(unsafe { Num::new_unchecked(num) });
        }
        i += 1
      }
    }
    if i == Loc::COUNT {
      Ok(grid)
    } else {
      Err(format!("Fewer than 81 locations in {}", s))
    }
  }
}

impl Serialize for Grid {
  /// Serializes this grid as its flat 81-character string.
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let flat: String = self.to_string().split('\n').collect();
    serializer.serialize_str(&flat)
  }
}

//! Defines the brute-force Sudoku solve function.

use itertools::Itertools;
use log::debug;

use crate::core::*;

/// Something that can fill in the blank cells of a Sudoku grid.
///
/// Implementations mutate the grid they're given and hand the same grid
/// back; there is no separate failure signal. Callers decide whether a
/// solve worked by checking `is_complete() && is_valid()` on the result.
pub trait Solver {
  /// Attempts to bring the given grid to a complete and valid state.
  fn solve<'a>(&mut self, grid: &'a mut Grid) -> &'a mut Grid;
}

/// A solver that tries every numeral in every blank cell, depth first,
/// abandoning a branch as soon as the grid turns invalid.
///
/// The search always terminates, but when no solution exists the grid
/// comes back in whatever state the failed search left it; only a
/// successful solve promises anything about the result.
pub struct BruteForceSolver;

impl Solver for BruteForceSolver {
  fn solve<'a>(&mut self, grid: &'a mut Grid) -> &'a mut Grid {
    // The work list is fixed up front: the cells blank at entry, in
    // column-major order. It is not recomputed as the search fills cells.
    let blanks = Col::all()
      .cartesian_product(Row::all().collect_vec())
      .map(|(col, row)| Loc::at(row, col))
      .filter(|&loc| grid[loc].is_none())
      .collect_vec();
    search(&blanks, grid);
    debug!("search finished with:\n{:?}", grid);
    grid
  }
}

/// One frame of the depth-first search: marks the first remaining blank
/// cell with each numeral in turn, recursing over the rest of the list
/// after each mark.
///
/// A frame returns as soon as the grid is invalid on entry, or once a
/// recursive call has left the grid complete and valid. When all nine
/// numerals fail, it blanks its own cell and unwinds; that is the only
/// undo step a frame performs.
fn search(blanks: &[Loc], grid: &mut Grid) {
  if blanks.is_empty() || !grid.is_valid() {
    return;
  }
  let cell = blanks[0];
  for num in Num::all() {
    grid[cell] = Some(num);
    search(&blanks[1..], grid);
    if grid.is_complete() && grid.is_valid() {
      return;
    }
  }
  grid[cell] = None;
}

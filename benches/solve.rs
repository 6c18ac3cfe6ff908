use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::str::FromStr;
use sudoku_brute::core::Grid;
use sudoku_brute::solve::{BruteForceSolver, Solver};

const SOLVED: &str =
  "123456789456789123789123456234567891567891234891234567345678912678912345912345678";

fn criterion_benchmark(c: &mut Criterion) {
  let mut puzzle = Grid::from_str(SOLVED).unwrap();
  // Punch out every fourth cell, leaving 21 blanks to refill.
  for i in (0..81).step_by(4) {
    puzzle.clear((i % 9) as i8, (i / 9) as i8).unwrap();
  }
  c.bench_function("refill 21 blanks", |b| {
    b.iter(|| {
      let mut grid = black_box(puzzle);
      BruteForceSolver.solve(&mut grid);
      grid
    })
  });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

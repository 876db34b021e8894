//! Score tables for classified runs.
//!
//! Two tables exist: the positional table scores stones already on the
//! board during leaf evaluation, and the placement table scores a
//! hypothetical stone when ordering candidate moves.

use gomoku_core::Run;

/// Score for five or more in a row, in either table.
pub const FIVE: i64 = 100_000;

/// Positional score of one run through an occupied cell.
///
/// | length | both open | one open | closed |
/// |--------|-----------|----------|--------|
/// | ≥5     | 100000    | 100000   | 100000 |
/// | 4      | 10000     | 2000     | 150    |
/// | 3      | 800       | 150      | 15     |
/// | 2      | 50        | 5        | 5      |
/// | ≤1     | 1         | 1        | 1      |
pub const fn run_score(run: Run) -> i64 {
    match (run.length, run.open_ends) {
        (5.., _) => FIVE,
        (4, 2) => 10_000,
        (4, 1) => 2_000,
        (4, _) => 150,
        (3, 2) => 800,
        (3, 1) => 150,
        (3, _) => 15,
        (2, 2) => 50,
        (2, _) => 5,
        _ => 1,
    }
}

/// Placement score of one run through a freshly placed stone.
///
/// Only a run open on both ends earns the higher value.
///
/// | length | both open | otherwise |
/// |--------|-----------|-----------|
/// | ≥5     | 100000    | 100000    |
/// | 4      | 10000     | 5000      |
/// | 3      | 1000      | 500       |
/// | 2      | 100       | 50        |
/// | ≤1     | 10        | 10        |
pub const fn placement_run_score(run: Run) -> i64 {
    let open = run.open_ends == 2;
    match run.length {
        5.. => FIVE,
        4 if open => 10_000,
        4 => 5_000,
        3 if open => 1_000,
        3 => 500,
        2 if open => 100,
        2 => 50,
        _ => 10,
    }
}

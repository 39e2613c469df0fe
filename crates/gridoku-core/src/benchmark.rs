//! Cross-strategy timing harness.

use crate::{Grid, Strategy};
use log::trace;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Outcome of a single strategy run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    pub elapsed: Duration,
    pub solved: bool,
}

/// Run every strategy against `grid` and time it.
///
/// Each strategy gets its own deep copy of the input, so every run starts
/// from the same state and the timings are comparable.
pub fn benchmark(grid: &Grid) -> BTreeMap<Strategy, BenchmarkResult> {
    let mut results = BTreeMap::new();
    for strategy in Strategy::ALL {
        let mut working = grid.clone();
        let start = Instant::now();
        let solved = strategy.solve(&mut working);
        let elapsed = start.elapsed();
        trace!("{strategy}: solved={solved} in {elapsed:?}");
        results.insert(strategy, BenchmarkResult { elapsed, solved });
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLASSIC: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";

    #[test]
    fn test_all_strategies_report_solved() {
        let grid = Grid::from_string(CLASSIC).unwrap();
        let before = grid.clone();
        let results = benchmark(&grid);
        assert_eq!(results.len(), Strategy::ALL.len());
        for (strategy, result) in &results {
            assert!(result.solved, "{strategy} failed");
        }
        assert_eq!(grid, before);
    }

    #[test]
    fn test_unsolvable_input_reports_unsolved_everywhere() {
        let dead = Grid::from_values(4, &[1, 2, 3, 0, 0, 0, 0, 2, 0, 0, 0, 3, 0, 0, 0, 4]).unwrap();
        for result in benchmark(&dead).values() {
            assert!(!result.solved);
        }
    }
}

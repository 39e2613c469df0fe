//! Difficulty tiers and the feature-based classifier.

use crate::Grid;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty tier of a puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Fraction of the n² cells the generator tries to empty at this tier.
    pub fn removal_fraction(&self) -> f64 {
        match self {
            Difficulty::Easy => 0.40,
            Difficulty::Medium => 0.50,
            Difficulty::Hard => 0.60,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

/// Score a puzzle from three features of its current state: the number of
/// empty cells, the aggregate candidate count across those cells, and the
/// number of given cells.
///
/// The rules run in order and the first match wins; denser, more constrained
/// grids land on the easier tiers. Cell-count thresholds are fractions of n²
/// (0.45 and 0.55 empty, 0.60 filled); candidate totals are measured against
/// the empty-cell count (at most 2 or 3 candidates per empty cell on
/// average). All thresholds are policy, not a correctness contract.
pub fn classify(grid: &Grid) -> Difficulty {
    let cells = (grid.size() * grid.size()) as f64;
    let empty = grid.empty_count();
    let filled = grid.filled_count();
    let total_candidates: usize = grid
        .empty_positions()
        .iter()
        .map(|&pos| grid.candidates(pos).len())
        .sum();

    if (empty as f64) < 0.45 * cells
        || total_candidates <= 2 * empty
        || (filled as f64) > 0.60 * cells
    {
        Difficulty::Easy
    } else if (empty as f64) < 0.55 * cells || total_candidates <= 3 * empty {
        Difficulty::Medium
    } else {
        Difficulty::Hard
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_tiers_are_ordered() {
        assert!(Difficulty::Easy < Difficulty::Medium);
        assert!(Difficulty::Medium < Difficulty::Hard);
        assert!(
            Difficulty::Easy.removal_fraction() < Difficulty::Hard.removal_fraction(),
            "removal targets must grow with the tier"
        );
    }

    #[test]
    fn test_nearly_full_grid_is_easy() {
        let mut grid = Grid::from_string(
            "534678912672195348198342567859761423426853791713924856961537284287419635345286179",
        )
        .unwrap();
        assert_eq!(classify(&grid), Difficulty::Easy);

        grid.clear(Position::new(0, 0));
        grid.clear(Position::new(4, 4));
        assert_eq!(classify(&grid), Difficulty::Easy);
    }

    #[test]
    fn test_blank_grid_is_hard() {
        let grid = Grid::empty(9).unwrap();
        assert_eq!(classify(&grid), Difficulty::Hard);
        let grid = Grid::empty(16).unwrap();
        assert_eq!(classify(&grid), Difficulty::Hard);
    }

    #[test]
    fn test_classifier_does_not_mutate() {
        let grid = Grid::from_string(
            "530070000600195000098000060800060003400803001700020006060000280000419005000080079",
        )
        .unwrap();
        let before = grid.clone();
        classify(&grid);
        assert_eq!(grid, before);
    }
}

//! Ordering and pruning heuristics layered on the plain search.

use crate::{CandidateSet, Grid, Position};

/// Scan for the most constrained empty cell, ties broken by row-major order.
///
/// Returns `None` when the grid is full. A cell with an empty candidate set
/// wins the scan outright: nothing can be less constrained, and the caller
/// treats it as an immediate dead branch.
pub(crate) fn most_constrained_cell(grid: &Grid) -> Option<(Position, CandidateSet)> {
    let mut best: Option<(Position, CandidateSet)> = None;
    for row in 0..grid.size() {
        for col in 0..grid.size() {
            let pos = Position::new(row, col);
            if grid.get(pos) != 0 {
                continue;
            }
            let cands = grid.candidates(pos);
            if cands.is_empty() {
                return Some((pos, cands));
            }
            if best.map_or(true, |(_, b)| cands.len() < b.len()) {
                best = Some((pos, cands));
            }
        }
    }
    best
}

/// Minimum-remaining-values search: always branch on the most constrained
/// cell, candidates in ascending order. A cell with no candidates fails the
/// branch before any descent, which acts as an implicit forward check.
pub(crate) fn solve_mrv(grid: &mut Grid) -> bool {
    let Some((pos, cands)) = most_constrained_cell(grid) else {
        return true;
    };
    for value in cands.iter() {
        grid.set(pos, value);
        if solve_mrv(grid) {
            return true;
        }
        grid.clear(pos);
    }
    false
}

/// Plain ordering plus an explicit forward check: a placement that strips
/// some empty cell of its last candidate is rejected before descending, at
/// the cost of rescanning the whole grid after every placement.
pub(crate) fn solve_forward_checking(grid: &mut Grid) -> bool {
    let Some(pos) = grid.first_empty() else {
        return true;
    };
    for value in 1..=grid.size() as u8 {
        if grid.is_legal_placement(pos, value) {
            grid.set(pos, value);
            if forward_check_feasible(grid) && solve_forward_checking(grid) {
                return true;
            }
            grid.clear(pos);
        }
    }
    false
}

/// True while every empty cell still has at least one candidate.
pub(crate) fn forward_check_feasible(grid: &Grid) -> bool {
    for row in 0..grid.size() {
        for col in 0..grid.size() {
            let pos = Position::new(row, col);
            if grid.get(pos) == 0 && grid.candidates(pos).is_empty() {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLASSIC: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";

    #[test]
    fn test_mrv_picks_the_tightest_cell() {
        // (0, 3) has a single candidate (4); every other empty cell has more.
        let grid = Grid::from_values(
            4,
            &[
                1, 2, 3, 0, //
                0, 0, 0, 0, //
                0, 1, 0, 0, //
                0, 0, 0, 2, //
            ],
        )
        .unwrap();
        let (pos, cands) = most_constrained_cell(&grid).unwrap();
        assert_eq!(pos, Position::new(0, 3));
        assert_eq!(cands.iter().collect::<Vec<_>>(), vec![4]);
    }

    #[test]
    fn test_mrv_reports_a_dead_cell_first() {
        let grid = Grid::from_values(4, &[1, 2, 3, 0, 0, 0, 0, 2, 0, 0, 0, 3, 0, 0, 0, 4]).unwrap();
        let (pos, cands) = most_constrained_cell(&grid).unwrap();
        assert_eq!(pos, Position::new(0, 3));
        assert!(cands.is_empty());

        let mut working = grid.clone();
        assert!(!solve_mrv(&mut working));
        assert_eq!(working, grid);
    }

    #[test]
    fn test_mrv_solves_the_classic_puzzle() {
        let mut grid = Grid::from_string(CLASSIC).unwrap();
        assert!(solve_mrv(&mut grid));
        assert!(grid.is_solved());
    }

    #[test]
    fn test_forward_check_detects_a_starved_cell() {
        let open = Grid::from_string(CLASSIC).unwrap();
        assert!(forward_check_feasible(&open));

        let starved =
            Grid::from_values(4, &[1, 2, 3, 0, 0, 0, 0, 2, 0, 0, 0, 3, 0, 0, 0, 4]).unwrap();
        assert!(!forward_check_feasible(&starved));
    }

    #[test]
    fn test_forward_checking_solves_and_restores() {
        let mut grid = Grid::from_string(CLASSIC).unwrap();
        assert!(solve_forward_checking(&mut grid));
        assert!(grid.is_solved());

        let dead = Grid::from_values(4, &[1, 2, 3, 0, 0, 0, 0, 2, 0, 0, 0, 3, 0, 0, 0, 4]).unwrap();
        let mut working = dead.clone();
        assert!(!solve_forward_checking(&mut working));
        assert_eq!(working, dead);
    }
}

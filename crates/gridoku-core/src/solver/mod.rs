//! Search strategies over the shared constraint model.
//!
//! All five strategies walk the same constraint space and agree on
//! solvability; they differ only in traversal order and pruning. Each mutates
//! the grid in place and restores it when no completion exists. [`Solver`]
//! wraps them behind a copying, validating API for callers that must not have
//! their grid touched.

pub(crate) mod backtrack;
mod coloring;
pub(crate) mod heuristics;

use crate::Grid;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use coloring::ConstraintGraph;

/// Search strategy selector, dispatched as a tagged variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Recursive depth-first backtracking in row-major order, values
    /// ascending.
    Plain,
    /// Minimum-remaining-values cell ordering with an implicit forward check.
    Mrv,
    /// The same search tree as `Plain`, walked with an explicit frame stack.
    /// Native call-stack usage stays bounded, which makes this the
    /// production-safe default for 16x16 grids.
    IterativeStack,
    /// `Plain` plus a whole-grid feasibility rescan after each placement.
    ForwardChecking,
    /// Backtracking over the constraint graph in fixed node order. Matches
    /// `Plain` in result, differs in traversal; useful as a cross-check.
    GraphColoring,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::Plain,
        Strategy::Mrv,
        Strategy::IterativeStack,
        Strategy::ForwardChecking,
        Strategy::GraphColoring,
    ];

    /// Run this strategy against `grid` in place.
    ///
    /// On `true` the grid holds a full legal assignment consistent with the
    /// original fixed cells; on `false` it is left exactly as given. `false`
    /// means the grid admits no completion and is an expected outcome, not an
    /// error.
    pub fn solve(self, grid: &mut Grid) -> bool {
        match self {
            Strategy::Plain => backtrack::solve_recursive(grid),
            Strategy::Mrv => heuristics::solve_mrv(grid),
            Strategy::IterativeStack => backtrack::solve_iterative(grid),
            Strategy::ForwardChecking => heuristics::solve_forward_checking(grid),
            Strategy::GraphColoring => {
                let graph = ConstraintGraph::for_grid(grid);
                coloring::solve_coloring(grid, &graph, 0)
            }
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Plain => "plain",
            Strategy::Mrv => "mrv",
            Strategy::IterativeStack => "iterative-stack",
            Strategy::ForwardChecking => "forward-checking",
            Strategy::GraphColoring => "graph-coloring",
        };
        f.write_str(name)
    }
}

/// Unit struct solver — stateless, all state is per-call.
pub struct Solver;

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a new solver.
    pub fn new() -> Self {
        Self
    }

    /// Solve the puzzle with the chosen strategy, returning the solved grid.
    ///
    /// The caller's grid is never mutated. `None` means no legal completion
    /// exists, including the case where the given digits already conflict.
    pub fn solve(&self, grid: &Grid, strategy: Strategy) -> Option<Grid> {
        if !grid.is_consistent() {
            return None;
        }
        let mut working = grid.clone();
        if strategy.solve(&mut working) {
            Some(working)
        } else {
            None
        }
    }

    /// Count completions of `grid`, stopping as soon as `limit` is reached.
    ///
    /// Runs on a private copy; the caller's grid is never mutated. A fully
    /// filled grid counts one solution when legal and zero when some unit
    /// holds a duplicate.
    pub fn count_solutions(&self, grid: &Grid, limit: usize) -> usize {
        if !grid.is_consistent() {
            return 0;
        }
        let mut working = grid.clone();
        let mut count = 0;
        backtrack::count_solutions_recursive(&mut working, &mut count, limit);
        count
    }

    /// Check that exactly one completion exists.
    pub fn has_unique_solution(&self, grid: &Grid) -> bool {
        self.count_solutions(grid, 2) == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    const CLASSIC: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    const CLASSIC_SOLVED: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    #[test]
    fn test_every_strategy_solves_the_classic_puzzle() {
        let grid = Grid::from_string(CLASSIC).unwrap();
        let expected = Grid::from_string(CLASSIC_SOLVED).unwrap();
        let solver = Solver::new();
        for strategy in Strategy::ALL {
            let solution = solver.solve(&grid, strategy).unwrap();
            assert_eq!(solution, expected, "{strategy} diverged");
        }
    }

    #[test]
    fn test_solver_does_not_mutate_the_input() {
        let grid = Grid::from_string(CLASSIC).unwrap();
        let before = grid.clone();
        let solver = Solver::new();
        solver.solve(&grid, Strategy::Plain).unwrap();
        solver.count_solutions(&grid, 2);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_solve_is_idempotent_on_a_solved_grid() {
        let solved = Grid::from_string(CLASSIC_SOLVED).unwrap();
        let solver = Solver::new();
        for strategy in Strategy::ALL {
            assert_eq!(solver.solve(&solved, strategy), Some(solved.clone()));
        }
    }

    #[test]
    fn test_conflicting_givens_yield_none() {
        let mut grid = Grid::from_string(CLASSIC).unwrap();
        grid.set(Position::new(0, 1), 5); // second 5 in row 0
        let solver = Solver::new();
        for strategy in Strategy::ALL {
            assert_eq!(solver.solve(&grid, strategy), None);
        }
    }

    #[test]
    fn test_count_solutions_on_full_grids() {
        let solver = Solver::new();
        let legal =
            Grid::from_values(4, &[1, 2, 3, 4, 3, 4, 1, 2, 2, 1, 4, 3, 4, 3, 2, 1]).unwrap();
        assert_eq!(solver.count_solutions(&legal, 2), 1);

        let mut illegal = legal.clone();
        illegal.set(Position::new(3, 3), 4); // duplicates 4 in the last row
        assert_eq!(solver.count_solutions(&illegal, 2), 0);
    }

    #[test]
    fn test_count_solutions_respects_the_cap() {
        let solver = Solver::new();
        let blank = Grid::empty(4).unwrap();
        assert_eq!(solver.count_solutions(&blank, 2), 2);
        assert_eq!(solver.count_solutions(&blank, 5), 5);
        assert!(!solver.has_unique_solution(&blank));
    }

    #[test]
    fn test_unique_solution_detection() {
        let solver = Solver::new();
        let grid = Grid::from_string(CLASSIC).unwrap();
        assert!(solver.has_unique_solution(&grid));

        // Clearing a rectangle of crossed values (1 and 3 at rows 3-4,
        // columns 5 and 8) leaves exactly two completions: the original and
        // the one with the pair swapped.
        let mut ambiguous = Grid::from_string(CLASSIC_SOLVED).unwrap();
        for pos in [
            Position::new(3, 5),
            Position::new(3, 8),
            Position::new(4, 5),
            Position::new(4, 8),
        ] {
            ambiguous.clear(pos);
        }
        assert_eq!(solver.count_solutions(&ambiguous, 10), 2);
        assert!(!solver.has_unique_solution(&ambiguous));
    }

    #[test]
    fn test_strategy_display_names() {
        let names: Vec<String> = Strategy::ALL.iter().map(|s| s.to_string()).collect();
        assert_eq!(
            names,
            vec![
                "plain",
                "mrv",
                "iterative-stack",
                "forward-checking",
                "graph-coloring"
            ]
        );
    }
}

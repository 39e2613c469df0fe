//! Basic example of using the puzzle engine.

use gridoku_core::{benchmark, classify, Difficulty, Generator, Grid, Solver, Strategy};

fn main() {
    println!("Generating a Medium 9x9 puzzle...\n");
    let mut generator = Generator::new();
    let puzzle = generator
        .generate(9, Difficulty::Medium)
        .expect("9 is a supported size");

    println!("{}", puzzle.puzzle);
    println!("Empty cells: {}", puzzle.puzzle.empty_count());
    println!("Classified difficulty: {}\n", classify(&puzzle.puzzle));

    let solver = Solver::new();
    println!("Solving with MRV...\n");
    match solver.solve(&puzzle.puzzle, Strategy::Mrv) {
        Some(solution) => println!("{solution}"),
        None => println!("No solution found (this shouldn't happen for a generated puzzle!)"),
    }

    println!("Strategy timings:");
    for (strategy, result) in benchmark(&puzzle.puzzle) {
        println!(
            "  {strategy}: solved={} in {:?}",
            result.solved, result.elapsed
        );
    }

    // Parse a puzzle from a string and check its uniqueness
    let line = "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    let grid = Grid::from_string(line).expect("well-formed puzzle line");
    println!(
        "\nParsed puzzle has {} solution(s) (capped at 2)",
        solver.count_solutions(&grid, 2)
    );
}

//! Core engine for box-partitioned number-placement puzzles.
//!
//! The playing field is an n×n grid (n ∈ {4, 9, 16}) partitioned into n
//! non-overlapping √n×√n boxes; a complete assignment places each value
//! 1..=n exactly once per row, column, and box. The crate offers five
//! interchangeable search strategies over one constraint model, a generator
//! that produces puzzles with a provably unique solution, a feature-based
//! difficulty classifier, and a cross-strategy benchmark runner.
//!
//! Interactive front ends (menus, rendering, move history) live outside this
//! crate and consume it through [`Solver`], [`Generator`], [`classify`] and
//! [`benchmark`].

mod benchmark;
mod difficulty;
mod error;
mod generator;
mod grid;
mod solver;

pub use benchmark::{benchmark, BenchmarkResult};
pub use difficulty::{classify, Difficulty};
pub use error::GridError;
pub use generator::{Generator, GeneratorConfig, Puzzle};
pub use grid::{CandidateSet, Grid, Position, SUPPORTED_SIZES};
pub use solver::{ConstraintGraph, Solver, Strategy};

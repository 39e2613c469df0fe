//! The puzzle reframed as graph coloring: cells are nodes, values are colors.
//!
//! The graph is exposed read-only so an external front end can render it; the
//! engine only searches over it and never draws anything itself.

use crate::{Grid, Position};

/// Undirected constraint graph over cell indices in row-major node order.
///
/// Two nodes are adjacent iff their cells share a row, column, or box. There
/// are no self-loops; every node of an n×n grid with box dimension k has
/// degree 2(n − 1) + (k − 1)².
#[derive(Debug, Clone)]
pub struct ConstraintGraph {
    size: usize,
    neighbors: Vec<Vec<usize>>,
}

impl ConstraintGraph {
    pub(crate) fn new(size: usize, box_size: usize) -> Self {
        let nodes = size * size;
        let mut neighbors = vec![Vec::new(); nodes];
        for (node, list) in neighbors.iter_mut().enumerate() {
            let (row, col) = (node / size, node % size);
            for c in 0..size {
                if c != col {
                    list.push(row * size + c);
                }
            }
            for r in 0..size {
                if r != row {
                    list.push(r * size + col);
                }
            }
            // Box cells not already covered by the row and column passes.
            let box_row = (row / box_size) * box_size;
            let box_col = (col / box_size) * box_size;
            for r in box_row..box_row + box_size {
                for c in box_col..box_col + box_size {
                    if r != row && c != col {
                        list.push(r * size + c);
                    }
                }
            }
        }
        Self { size, neighbors }
    }

    /// Build the graph matching a grid's geometry.
    pub fn for_grid(grid: &Grid) -> Self {
        Self::new(grid.size(), grid.box_size())
    }

    pub fn node_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Neighbors of the cell at `pos`, as row-major cell indices.
    pub fn neighbors(&self, pos: Position) -> &[usize] {
        &self.neighbors[pos.row * self.size + pos.col]
    }

    pub fn degree(&self, pos: Position) -> usize {
        self.neighbors(pos).len()
    }

    fn neighbors_of(&self, node: usize) -> &[usize] {
        &self.neighbors[node]
    }
}

/// Color nodes in index order, skipping cells already holding a given digit.
/// A color is rejected when any already-colored neighbor holds it.
pub(crate) fn solve_coloring(grid: &mut Grid, graph: &ConstraintGraph, node: usize) -> bool {
    if node == graph.node_count() {
        return true;
    }
    let size = grid.size();
    let pos = Position::new(node / size, node % size);
    if grid.get(pos) != 0 {
        return solve_coloring(grid, graph, node + 1);
    }
    for value in 1..=size as u8 {
        let clashes = graph
            .neighbors_of(node)
            .iter()
            .any(|&nb| grid.get(Position::new(nb / size, nb % size)) == value);
        if !clashes {
            grid.set(pos, value);
            if solve_coloring(grid, graph, node + 1) {
                return true;
            }
            grid.clear(pos);
        }
    }
    false
}

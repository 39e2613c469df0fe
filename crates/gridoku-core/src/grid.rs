//! Grid storage and the shared constraint model.
//!
//! Every search strategy and the generator sit on top of three primitives
//! defined here: [`Grid::is_legal_placement`], [`Grid::first_empty`] and
//! [`Grid::candidates`]. None of them has side effects.

use crate::GridError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Grid sizes the engine supports (box dimensions 2, 3 and 4).
pub const SUPPORTED_SIZES: [usize; 3] = [4, 9, 16];

/// A cell coordinate, 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Index of the box containing this position, row-major over boxes.
    pub fn box_index(&self, box_size: usize) -> usize {
        (self.row / box_size) * box_size + self.col / box_size
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Set of values, backed by a bit mask with bit `v - 1` standing for value
/// `v`. Holds up to 16 values, enough for the largest supported grid.
///
/// Iteration is in ascending numeric order, so strategies that enumerate a
/// cell's candidates do so reproducibly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CandidateSet(u32);

impl CandidateSet {
    pub fn empty() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, value: u8) {
        debug_assert!((1..=16).contains(&value));
        self.0 |= 1 << (value - 1);
    }

    pub fn remove(&mut self, value: u8) {
        debug_assert!((1..=16).contains(&value));
        self.0 &= !(1 << (value - 1));
    }

    pub fn contains(&self, value: u8) -> bool {
        value >= 1 && value <= 16 && self.0 & (1 << (value - 1)) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Values in ascending order.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        let mut bits = self.0;
        std::iter::from_fn(move || {
            if bits == 0 {
                None
            } else {
                let value = bits.trailing_zeros() as u8 + 1;
                bits &= bits - 1;
                Some(value)
            }
        })
    }
}

/// Square puzzle grid. Cells are stored row-major; `0` marks an empty cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    box_size: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Create an empty grid. Fails fast on an unsupported size; the engine
    /// never silently falls back to a default.
    pub fn empty(size: usize) -> Result<Self, GridError> {
        let box_size = match size {
            4 => 2,
            9 => 3,
            16 => 4,
            other => return Err(GridError::UnsupportedSize(other)),
        };
        Ok(Self {
            size,
            box_size,
            cells: vec![0; size * size],
        })
    }

    /// Build a grid from a row-major cell sequence, the boundary form used by
    /// callers. Dimension and value-range problems are rejected before any
    /// search can run.
    pub fn from_values(size: usize, values: &[u8]) -> Result<Self, GridError> {
        let mut grid = Self::empty(size)?;
        if values.len() != size * size {
            return Err(GridError::WrongCellCount {
                size,
                expected: size * size,
                actual: values.len(),
            });
        }
        for (idx, &value) in values.iter().enumerate() {
            if value > size as u8 {
                return Err(GridError::ValueOutOfRange {
                    row: idx / size,
                    col: idx % size,
                    value,
                    max: size as u8,
                });
            }
        }
        grid.cells.copy_from_slice(values);
        Ok(grid)
    }

    /// Parse a puzzle line of n² cell characters, inferring the size from its
    /// length. `.` and `0` are empty, `1`..`9` literal, `a`..`g` stand for
    /// 10..16. ASCII whitespace is ignored.
    pub fn from_string(input: &str) -> Result<Self, GridError> {
        let mut values = Vec::new();
        for ch in input.chars().filter(|c| !c.is_ascii_whitespace()) {
            let value = match ch {
                '.' | '0' => 0,
                '1'..='9' => ch as u8 - b'0',
                'a'..='g' => ch as u8 - b'a' + 10,
                'A'..='G' => ch as u8 - b'A' + 10,
                other => return Err(GridError::InvalidCharacter(other)),
            };
            values.push(value);
        }
        let size = SUPPORTED_SIZES
            .iter()
            .copied()
            .find(|s| s * s == values.len())
            .ok_or(GridError::UnsupportedSize(values.len().isqrt()))?;
        Self::from_values(size, &values)
    }

    /// Inverse of [`Grid::from_string`].
    pub fn to_line(&self) -> String {
        self.cells
            .iter()
            .map(|&v| match v {
                0 => '.',
                1..=9 => (b'0' + v) as char,
                _ => (b'a' + v - 10) as char,
            })
            .collect()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn box_size(&self) -> usize {
        self.box_size
    }

    /// Row-major cell values; `0` is empty.
    pub fn values(&self) -> &[u8] {
        &self.cells
    }

    pub fn get(&self, pos: Position) -> u8 {
        self.cells[pos.row * self.size + pos.col]
    }

    pub fn set(&mut self, pos: Position, value: u8) {
        debug_assert!(value as usize <= self.size);
        self.cells[pos.row * self.size + pos.col] = value;
    }

    pub fn clear(&mut self, pos: Position) {
        self.cells[pos.row * self.size + pos.col] = 0;
    }

    // ==================== Constraint model ====================

    /// True iff no cell in `pos`'s row, column, or box already holds `value`.
    ///
    /// The scan includes empty cells and `pos` itself, so the contract is
    /// answered literally for any value, including `0`.
    pub fn is_legal_placement(&self, pos: Position, value: u8) -> bool {
        for col in 0..self.size {
            if self.cells[pos.row * self.size + col] == value {
                return false;
            }
        }
        for row in 0..self.size {
            if self.cells[row * self.size + pos.col] == value {
                return false;
            }
        }
        let box_row = (pos.row / self.box_size) * self.box_size;
        let box_col = (pos.col / self.box_size) * self.box_size;
        for row in box_row..box_row + self.box_size {
            for col in box_col..box_col + self.box_size {
                if self.cells[row * self.size + col] == value {
                    return false;
                }
            }
        }
        true
    }

    /// First empty cell in row-major order. Backtracking strategies rely on
    /// this scan order being deterministic.
    pub fn first_empty(&self) -> Option<Position> {
        self.cells
            .iter()
            .position(|&v| v == 0)
            .map(|idx| Position::new(idx / self.size, idx % self.size))
    }

    /// All values 1..=n that pass [`Grid::is_legal_placement`] at `pos`.
    /// Recomputed on demand; mutations invalidate any previous answer.
    pub fn candidates(&self, pos: Position) -> CandidateSet {
        let mut set = CandidateSet::empty();
        for value in 1..=self.size as u8 {
            if self.is_legal_placement(pos, value) {
                set.insert(value);
            }
        }
        set
    }

    // ==================== Inspection ====================

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    pub fn filled_count(&self) -> usize {
        self.size * self.size - self.empty_count()
    }

    pub fn empty_positions(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &v)| v == 0)
            .map(|(idx, _)| Position::new(idx / self.size, idx % self.size))
            .collect()
    }

    /// True when no cell is empty.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|&v| v != 0)
    }

    /// True when no row, column, or box holds the same nonzero value twice.
    pub fn is_consistent(&self) -> bool {
        let mut rows = vec![CandidateSet::empty(); self.size];
        let mut cols = vec![CandidateSet::empty(); self.size];
        let mut boxes = vec![CandidateSet::empty(); self.size];
        for row in 0..self.size {
            for col in 0..self.size {
                let value = self.cells[row * self.size + col];
                if value == 0 {
                    continue;
                }
                let b = Position::new(row, col).box_index(self.box_size);
                if rows[row].contains(value) || cols[col].contains(value) || boxes[b].contains(value)
                {
                    return false;
                }
                rows[row].insert(value);
                cols[col].insert(value);
                boxes[b].insert(value);
            }
        }
        true
    }

    /// True when the grid is a full legal assignment.
    pub fn is_solved(&self) -> bool {
        self.is_complete() && self.is_consistent()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = if self.size > 9 { 2 } else { 1 };
        for row in 0..self.size {
            if row % self.box_size == 0 && row != 0 {
                writeln!(f, "{}", "-".repeat((width + 1) * self.size + self.box_size))?;
            }
            for col in 0..self.size {
                if col % self.box_size == 0 && col != 0 {
                    write!(f, "| ")?;
                }
                let value = self.get(Position::new(row, col));
                if value == 0 {
                    write!(f, "{:>width$} ", ".", width = width)?;
                } else {
                    write!(f, "{:>width$} ", value, width = width)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

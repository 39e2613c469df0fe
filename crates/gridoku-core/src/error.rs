use thiserror::Error;

/// Errors raised while constructing or validating a grid.
///
/// A solve attempt that finds no completion is *not* an error: the solver
/// reports it as a normal return value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Requested grid size is not one of the supported perfect squares.
    #[error("unsupported grid size {0}, expected one of 4, 9 or 16")]
    UnsupportedSize(usize),

    /// Externally supplied cell data does not match the grid dimensions.
    #[error("expected {expected} cells for a {size}x{size} grid, got {actual}")]
    WrongCellCount {
        size: usize,
        expected: usize,
        actual: usize,
    },

    /// A supplied cell value lies outside 0..=n.
    #[error("value {value} at row {row}, column {col} is outside 0..={max}")]
    ValueOutOfRange {
        row: usize,
        col: usize,
        value: u8,
        max: u8,
    },

    /// A puzzle string contains a character with no cell interpretation.
    #[error("invalid puzzle character {0:?}")]
    InvalidCharacter(char),
}

use thiserror::Error;

/// Error type returned by matrix construction, access and arithmetic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// A requested dimension is negative, or zero where at least 1 is required
    #[error("Invalid matrix dimension")]
    InvalidDimension,
    /// Matrix dimension fields and data length are incompatible
    #[error("Matrix dimension fields and/or array lengths are incompatible")]
    IncompatibleDimension,
    /// Element index lies outside the matrix
    #[error("Index ({row}, {col}) is out of range for a {nrows}x{ncols} matrix")]
    OutOfRange {
        row: usize,
        col: usize,
        nrows: usize,
        ncols: usize,
    },
    /// Operand shapes are not compatible for the requested operation
    #[error("Incompatible shapes {left:?} and {right:?} in {op}")]
    ShapeMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Operation is defined only for square matrices
    #[error("Matrix is not square ({nrows}x{ncols})")]
    NotSquare { nrows: usize, ncols: usize },
    /// Determinant is numerically zero
    #[error("Matrix is singular")]
    Singular,
}

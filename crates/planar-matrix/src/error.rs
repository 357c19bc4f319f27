use thiserror::Error;

/// Broad classification of a failure, shared by every crate of the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A missing, malformed or non-numeric argument.
    Value,
    /// Operands whose shapes do not fit the requested operation.
    Dimension,
    /// A row or column index outside of the matrix.
    Index,
    /// An operation that needs an inverse was given a singular matrix.
    Singular,
}

/// Error type for matrix construction and algebra.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// A matrix was requested with zero rows or zero columns.
    ///
    /// Every matrix has at least one row and one column; this also covers the
    /// minor of a single-row or single-column matrix.
    #[error("Invalid dimensions: a matrix needs at least one row and one column, got {rows}x{cols}")]
    InvalidDimensions {
        /// Requested number of rows
        rows: usize,
        /// Requested number of columns
        cols: usize,
    },

    /// The value list does not hold exactly `rows * cols` entries.
    ///
    /// # Example
    /// ```ignore
    /// // Error: a 2x3 matrix expects 6 values, but got 5
    /// let m = Matrix::from_shape_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0])?;
    /// ```
    #[error("Shape mismatch: expected {expected} values for the matrix, but got {actual}")]
    InvalidShape {
        /// Expected number of values based on the dimensions
        expected: usize,
        /// Actual number of values supplied
        actual: usize,
    },

    /// A supplied value is not a number (NaN).
    #[error("Non-numeric value for row {row} column {col}")]
    NonNumeric {
        /// Row of the offending value
        row: usize,
        /// Column of the offending value
        col: usize,
    },

    /// A row or column index exceeds the matrix bounds.
    #[error("Index {index} out of bounds for dimension of size {size}")]
    IndexOutOfBounds {
        /// The invalid index that was attempted
        index: usize,
        /// The size of the dimension being indexed
        size: usize,
    },

    /// Operand shapes are incompatible for the requested operation.
    ///
    /// # Examples
    /// - Multiplying an `m x n` matrix by a `p x q` matrix where `n != p`
    /// - Composing a transform with anything other than a 3x3 matrix
    #[error("Dimension mismatch: {message}. Expected shape: {expected}, got: {actual}")]
    DimensionMismatch {
        /// Human-readable description of the mismatch
        message: String,
        /// Expected shape description
        expected: String,
        /// Actual shape description
        actual: String,
    },

    /// Determinant or inverse requested on a non-square matrix.
    #[error("Matrix must be square, got {rows}x{cols}")]
    NotSquare {
        /// Number of rows of the operand
        rows: usize,
        /// Number of columns of the operand
        cols: usize,
    },
}

impl MatrixError {
    /// Creates an InvalidShape error with clear context.
    pub fn invalid_shape(expected: usize, actual: usize) -> Self {
        Self::InvalidShape { expected, actual }
    }

    /// Creates an IndexOutOfBounds error with clear context.
    pub fn index_out_of_bounds(index: usize, size: usize) -> Self {
        Self::IndexOutOfBounds { index, size }
    }

    /// Creates a DimensionMismatch error with formatted shapes.
    pub fn dimension_mismatch(
        message: impl Into<String>,
        expected: &[usize],
        actual: &[usize],
    ) -> Self {
        Self::DimensionMismatch {
            message: message.into(),
            expected: format!("{:?}", expected),
            actual: format!("{:?}", actual),
        }
    }

    /// Returns the broad class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidDimensions { .. } | Self::InvalidShape { .. } | Self::NonNumeric { .. } => {
                ErrorKind::Value
            }
            Self::IndexOutOfBounds { .. } => ErrorKind::Index,
            Self::DimensionMismatch { .. } | Self::NotSquare { .. } => ErrorKind::Dimension,
        }
    }
}

use planar_matrix::{ErrorKind, MatrixError};
use thiserror::Error;

/// An error type for transform construction and application.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransformError {
    /// A translation vector has a non-numeric coordinate.
    #[error("Invalid vector: x and y must be numeric, got ({x}, {y})")]
    InvalidVector {
        /// The supplied x coordinate
        x: f64,
        /// The supplied y coordinate
        y: f64,
    },

    /// A scale factor is not a number.
    #[error("Invalid scale: factors must be numeric, got ({x}, {y})")]
    InvalidScale {
        /// Horizontal factor
        x: f64,
        /// Vertical factor
        y: f64,
    },

    /// A 3x3 matrix whose third column is not `[0, 0, 1]`.
    ///
    /// Such a matrix is projective rather than affine and cannot be held by a
    /// transform.
    #[error("Not an affine transform: third column must be [0, 0, 1], got {0:?}")]
    NotAffine([f64; 3]),

    /// The inverse of a singular transform was required.
    #[error("Transform is singular (zero determinant) and has no inverse")]
    Singular,

    /// Error from the underlying matrix algebra.
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

impl TransformError {
    /// Returns the broad class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidVector { .. } | Self::InvalidScale { .. } | Self::NotAffine(_) => {
                ErrorKind::Value
            }
            Self::Singular => ErrorKind::Singular,
            Self::Matrix(e) => e.kind(),
        }
    }
}

use planar_matrix::{ErrorKind, MatrixError};
use thiserror::Error;

/// An error type for the geometry primitives.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A coordinate or extent is not a number.
    #[error("Arguments {0} must be numeric")]
    NonNumeric(&'static str),

    /// Error from the matrix algebra used to map a point.
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

impl GeometryError {
    /// Returns the broad class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NonNumeric(_) => ErrorKind::Value,
            Self::Matrix(e) => e.kind(),
        }
    }
}

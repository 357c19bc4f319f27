use crate::{error::MatrixError, linalg, matrix::Matrix};

/// Outcome of inverting a square matrix.
///
/// A singular matrix has no inverse. This is reported as a regular value rather
/// than an error, and can never be confused with a valid (e.g. zero) matrix.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum Inverse {
    /// The matrix is invertible and this is its inverse.
    Regular(Matrix),
    /// The determinant is zero.
    Singular,
}

impl Inverse {
    /// Returns `true` if the matrix had no inverse.
    pub fn is_singular(&self) -> bool {
        matches!(self, Self::Singular)
    }

    /// Converts into an `Option`, mapping [`Inverse::Singular`] to `None`.
    pub fn into_option(self) -> Option<Matrix> {
        match self {
            Self::Regular(m) => Some(m),
            Self::Singular => None,
        }
    }

    /// Converts into a `Result`, mapping [`Inverse::Singular`] to `err`.
    pub fn ok_or<E>(self, err: E) -> Result<Matrix, E> {
        self.into_option().ok_or(err)
    }
}

impl From<Inverse> for Option<Matrix> {
    fn from(inverse: Inverse) -> Self {
        inverse.into_option()
    }
}

/// The algebra shared by [`Matrix`] and every shape-constrained specialization of it.
///
/// Implementors only expose their underlying matrix; all operations are provided
/// on top of it. A specialization overrides an operation explicitly when it has
/// a faster equivalent (e.g. a closed-form determinant for a fixed size). The
/// provided [`MatrixAlgebra::inverse`] goes through `self.determinant()`, so such
/// an override is honoured there as well.
pub trait MatrixAlgebra {
    /// The underlying matrix.
    fn as_matrix(&self) -> &Matrix;

    /// Computes the product `self * other`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] unless `self.cols() == other.rows()`.
    fn multiply<M>(&self, other: &M) -> Result<Matrix, MatrixError>
    where
        M: MatrixAlgebra + ?Sized,
    {
        linalg::matmul(self.as_matrix(), other.as_matrix())
    }

    /// Computes the product `self * other` as flat row-major values.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] unless `self.cols() == other.rows()`.
    fn multiply_values<M>(&self, other: &M) -> Result<Vec<f64>, MatrixError>
    where
        M: MatrixAlgebra + ?Sized,
    {
        linalg::matmul_values(self.as_matrix(), other.as_matrix())
    }

    /// Computes the determinant.
    ///
    /// The default is the recursive cofactor expansion of
    /// [`linalg::cofactor_determinant`], which is O(n!).
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotSquare`] for a non-square matrix.
    fn determinant(&self) -> Result<f64, MatrixError> {
        linalg::cofactor_determinant(self.as_matrix())
    }

    /// Computes the inverse as the adjugate divided by the determinant.
    ///
    /// Returns [`Inverse::Singular`] when the determinant is exactly zero.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotSquare`] for a non-square matrix and
    /// [`MatrixError::NonNumeric`] if the division produces NaN, which can only
    /// happen for infinite entries.
    fn inverse(&self) -> Result<Inverse, MatrixError> {
        let m = self.as_matrix();
        linalg::ensure_square(m)?;

        let det = self.determinant()?;
        if det == 0.0 {
            log::debug!("{}x{} matrix is singular, no inverse", m.rows(), m.cols());
            return Ok(Inverse::Singular);
        }

        let adj = linalg::adjugate(m)?;
        let [rows, cols] = adj.shape();
        let data = adj.into_vec().into_iter().map(|v| v / det).collect();
        Ok(Inverse::Regular(Matrix::from_shape_vec(rows, cols, data)?))
    }

    /// Exact entrywise comparison, `false` if the shapes differ.
    fn equals<M>(&self, other: &M) -> bool
    where
        M: MatrixAlgebra + ?Sized,
    {
        self.as_matrix() == other.as_matrix()
    }

    /// Whether the matrix is square with ones on the diagonal and zeros elsewhere.
    fn is_identity_matrix(&self) -> bool {
        let m = self.as_matrix();
        m.is_square()
            && m
                .as_slice()
                .iter()
                .enumerate()
                .all(|(i, &v)| v == if i / m.cols() == i % m.cols() { 1.0 } else { 0.0 })
    }
}

impl MatrixAlgebra for Matrix {
    #[inline]
    fn as_matrix(&self) -> &Matrix {
        self
    }
}

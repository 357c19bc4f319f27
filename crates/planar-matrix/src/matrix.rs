use std::num::NonZeroUsize;

use crate::error::MatrixError;

/// A dense `rows x cols` matrix of `f64` values stored in row-major order.
///
/// The shape is fixed at construction and the storage always holds exactly
/// `rows * cols` values, so rows can never be jagged. Entry `(i, j)` lives at
/// offset `i * cols + j`.
///
/// Equality is exact: two matrices are equal when their shapes match and every
/// entry compares equal with `==`. No floating point tolerance is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

// Returns the number of entries of a valid shape.
fn ensure_dimensions(rows: usize, cols: usize) -> Result<usize, MatrixError> {
    match rows.checked_mul(cols) {
        Some(numel) if numel > 0 => Ok(numel),
        _ => Err(MatrixError::InvalidDimensions { rows, cols }),
    }
}

impl Matrix {
    /// Creates a new `Matrix` with the given shape and row-major values.
    ///
    /// # Arguments
    ///
    /// * `rows` - The number of rows, must be positive.
    /// * `cols` - The number of columns, must be positive.
    /// * `data` - A vector with exactly `rows * cols` values, consumed row by row.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidDimensions`] for an empty shape,
    /// [`MatrixError::InvalidShape`] if the number of values does not match the
    /// shape and [`MatrixError::NonNumeric`] if any value is NaN.
    ///
    /// # Example
    ///
    /// ```
    /// use planar_matrix::Matrix;
    ///
    /// let m = Matrix::from_shape_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(m.shape(), [2, 2]);
    /// assert_eq!(m.get(1, 0), Some(3.0));
    /// ```
    pub fn from_shape_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self, MatrixError> {
        let numel = ensure_dimensions(rows, cols)?;
        if numel != data.len() {
            return Err(MatrixError::invalid_shape(numel, data.len()));
        }
        if let Some(offset) = data.iter().position(|v| v.is_nan()) {
            return Err(MatrixError::NonNumeric {
                row: offset / cols,
                col: offset % cols,
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Creates a new `Matrix` with the given shape, copying the values from a slice.
    ///
    /// # Errors
    ///
    /// Same as [`Matrix::from_shape_vec`].
    pub fn from_shape_slice(rows: usize, cols: usize, data: &[f64]) -> Result<Self, MatrixError> {
        Self::from_shape_vec(rows, cols, data.to_vec())
    }

    /// Creates a new `Matrix` by evaluating `f(row, col)` for every entry.
    ///
    /// # Errors
    ///
    /// Same as [`Matrix::from_shape_vec`].
    pub fn from_shape_fn<F>(rows: usize, cols: usize, f: F) -> Result<Self, MatrixError>
    where
        F: Fn(usize, usize) -> f64,
    {
        let numel = ensure_dimensions(rows, cols)?;
        let data = (0..numel).map(|i| f(i / cols, i % cols)).collect();
        Self::from_shape_vec(rows, cols, data)
    }

    /// Creates a zero-filled matrix of the given shape.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidDimensions`] for an empty shape.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        let numel = ensure_dimensions(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            data: vec![0.0; numel],
        })
    }

    /// Creates the `n x n` identity matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidDimensions`] if `n` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use planar_matrix::{Matrix, MatrixAlgebra};
    ///
    /// let id = Matrix::identity(3).unwrap();
    /// assert!(id.is_identity_matrix());
    /// assert_eq!(id.determinant().unwrap(), 1.0);
    /// ```
    pub fn identity(n: usize) -> Result<Self, MatrixError> {
        let n = NonZeroUsize::new(n).ok_or(MatrixError::InvalidDimensions { rows: n, cols: n })?;
        Ok(Self::eye(n))
    }

    /// Creates the `n x n` identity matrix for a size that is known to be positive.
    ///
    /// # Example
    ///
    /// ```
    /// use std::num::NonZeroUsize;
    /// use planar_matrix::{Matrix, MatrixAlgebra};
    ///
    /// let three = NonZeroUsize::MIN.saturating_add(2);
    /// assert!(Matrix::eye(three).is_identity_matrix());
    /// ```
    pub fn eye(n: NonZeroUsize) -> Self {
        let n = n.get();
        let mut data = vec![0.0; n * n];
        data.iter_mut().step_by(n + 1).for_each(|v| *v = 1.0);
        Self {
            rows: n,
            cols: n,
            data,
        }
    }

    // Internal constructor for results of algebra whose shape is already known
    // to match the data; values are not re-validated.
    pub(crate) fn from_raw_parts(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        debug_assert!(rows > 0 && cols > 0);
        debug_assert_eq!(rows * cols, data.len());
        Self { rows, cols, data }
    }

    /// The number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The shape as `[rows, cols]`.
    #[inline]
    pub fn shape(&self) -> [usize; 2] {
        [self.rows, self.cols]
    }

    /// Whether the matrix has as many rows as columns.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Returns the entry at `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// The row-major values as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Consumes the matrix and returns its row-major values.
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Returns a copy of row `index` as a plain vector.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfBounds`] if `index >= rows`.
    pub fn row_values(&self, index: usize) -> Result<Vec<f64>, MatrixError> {
        if index >= self.rows {
            return Err(MatrixError::index_out_of_bounds(index, self.rows));
        }
        let start = index * self.cols;
        Ok(self.data[start..start + self.cols].to_vec())
    }

    /// Returns a copy of row `index` as a `1 x cols` matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfBounds`] if `index >= rows`.
    pub fn row(&self, index: usize) -> Result<Matrix, MatrixError> {
        let values = self.row_values(index)?;
        Ok(Self::from_raw_parts(1, self.cols, values))
    }

    /// Returns a copy of column `index` as a plain vector.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfBounds`] if `index >= cols`.
    pub fn column_values(&self, index: usize) -> Result<Vec<f64>, MatrixError> {
        if index >= self.cols {
            return Err(MatrixError::index_out_of_bounds(index, self.cols));
        }
        Ok(self
            .data
            .iter()
            .skip(index)
            .step_by(self.cols)
            .copied()
            .collect())
    }

    /// Returns a copy of column `index` as a `rows x 1` matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfBounds`] if `index >= cols`.
    pub fn column(&self, index: usize) -> Result<Matrix, MatrixError> {
        let values = self.column_values(index)?;
        Ok(Self::from_raw_parts(self.rows, 1, values))
    }

    /// Returns the transposed `cols x rows` matrix.
    pub fn transpose(&self) -> Matrix {
        let data = (0..self.rows * self.cols)
            .map(|i| {
                let (r, c) = (i / self.rows, i % self.rows);
                self.data[c * self.cols + r]
            })
            .collect();
        Self::from_raw_parts(self.cols, self.rows, data)
    }

    /// Returns the matrix with row `row` and column `col` removed.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfBounds`] for an index outside the
    /// matrix and [`MatrixError::InvalidDimensions`] when the result would be
    /// empty (single-row or single-column input).
    pub fn minor(&self, row: usize, col: usize) -> Result<Matrix, MatrixError> {
        if row >= self.rows {
            return Err(MatrixError::index_out_of_bounds(row, self.rows));
        }
        if col >= self.cols {
            return Err(MatrixError::index_out_of_bounds(col, self.cols));
        }
        ensure_dimensions(self.rows - 1, self.cols - 1)?;
        let data = self
            .data
            .iter()
            .enumerate()
            .filter(|(i, _)| i / self.cols != row && i % self.cols != col)
            .map(|(_, v)| *v)
            .collect();
        Ok(Self::from_raw_parts(self.rows - 1, self.cols - 1, data))
    }
}

impl std::ops::Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl AsRef<Matrix> for Matrix {
    fn as_ref(&self) -> &Matrix {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructor_2d() -> Result<(), MatrixError> {
        let m = Matrix::from_shape_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])?;
        assert_eq!(m.shape(), [2, 3]);
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(m[(1, 2)], 6.0);
        Ok(())
    }

    #[test]
    fn constructor_wrong_length() {
        let err = Matrix::from_shape_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0]).unwrap_err();
        assert_eq!(err, MatrixError::invalid_shape(6, 5));
    }

    #[test]
    fn constructor_nan() {
        let err = Matrix::from_shape_vec(2, 2, vec![1.0, 2.0, f64::NAN, 4.0]).unwrap_err();
        assert_eq!(err, MatrixError::NonNumeric { row: 1, col: 0 });
    }

    #[test]
    fn constructor_empty_shape() {
        assert_eq!(
            Matrix::zeros(0, 3).unwrap_err(),
            MatrixError::InvalidDimensions { rows: 0, cols: 3 }
        );
        assert!(Matrix::identity(0).is_err());
        assert!(Matrix::from_shape_vec(2, 0, vec![]).is_err());
    }

    #[test]
    fn constructor_shape_overflow() {
        assert_eq!(
            Matrix::from_shape_vec(usize::MAX, 2, vec![1.0]).unwrap_err(),
            MatrixError::InvalidDimensions {
                rows: usize::MAX,
                cols: 2
            }
        );
        assert!(Matrix::zeros(2, usize::MAX).is_err());
        assert!(Matrix::from_shape_fn(usize::MAX, usize::MAX, |_, _| 0.0).is_err());
    }

    #[test]
    fn zeros() -> Result<(), MatrixError> {
        let m = Matrix::zeros(2, 2)?;
        assert_eq!(m.as_slice(), &[0.0; 4]);
        Ok(())
    }

    #[test]
    fn identity() -> Result<(), MatrixError> {
        let m = Matrix::identity(3)?;
        assert_eq!(
            m.into_vec(),
            vec![1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]
        );
        Ok(())
    }

    #[test]
    fn eye() -> Result<(), MatrixError> {
        for n in 1..=4 {
            let size = NonZeroUsize::new(n).expect("n is positive");
            assert_eq!(Matrix::eye(size), Matrix::identity(n)?);
        }
        Ok(())
    }

    #[test]
    fn get_2d() -> Result<(), MatrixError> {
        let m = Matrix::from_shape_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0])?;
        assert_eq!(m.get(0, 0), Some(1.0));
        assert_eq!(m.get(0, 1), Some(2.0));
        assert_eq!(m.get(1, 0), Some(3.0));
        assert_eq!(m.get(1, 1), Some(4.0));
        assert!(m.get(2, 0).is_none());
        assert!(m.get(0, 2).is_none());
        Ok(())
    }

    #[test]
    fn row_and_column() -> Result<(), MatrixError> {
        let m = Matrix::from_shape_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])?;

        let row = m.row(1)?;
        assert_eq!(row.shape(), [1, 3]);
        assert_eq!(row.as_slice(), &[4.0, 5.0, 6.0]);
        assert_eq!(m.row_values(0)?, vec![1.0, 2.0, 3.0]);

        let col = m.column(2)?;
        assert_eq!(col.shape(), [2, 1]);
        assert_eq!(col.as_slice(), &[3.0, 6.0]);
        assert_eq!(m.column_values(0)?, vec![1.0, 4.0]);
        Ok(())
    }

    #[test]
    fn row_and_column_out_of_bounds() -> Result<(), MatrixError> {
        let m = Matrix::zeros(2, 3)?;
        assert_eq!(m.row(2).unwrap_err(), MatrixError::index_out_of_bounds(2, 2));
        assert_eq!(
            m.column_values(3).unwrap_err(),
            MatrixError::index_out_of_bounds(3, 3)
        );
        Ok(())
    }

    #[test]
    fn transpose() -> Result<(), MatrixError> {
        let m = Matrix::from_shape_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])?;
        let t = m.transpose();
        assert_eq!(t.shape(), [3, 2]);
        assert_eq!(t.as_slice(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
        assert_eq!(t.transpose(), m);
        Ok(())
    }

    #[test]
    fn minor() -> Result<(), MatrixError> {
        let m = Matrix::from_shape_vec(3, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0])?;
        assert_eq!(m.minor(0, 0)?.as_slice(), &[5.0, 6.0, 8.0, 9.0]);
        assert_eq!(m.minor(1, 2)?.as_slice(), &[1.0, 2.0, 7.0, 8.0]);
        assert!(m.minor(3, 0).is_err());

        let single = Matrix::from_shape_vec(1, 1, vec![5.0])?;
        assert_eq!(
            single.minor(0, 0).unwrap_err(),
            MatrixError::InvalidDimensions { rows: 0, cols: 0 }
        );
        Ok(())
    }

    #[test]
    fn exact_equality() -> Result<(), MatrixError> {
        let a = Matrix::from_shape_vec(1, 2, vec![0.1 + 0.2, 1.0])?;
        let b = Matrix::from_shape_vec(1, 2, vec![0.3, 1.0])?;
        assert_ne!(a, b);
        assert_ne!(Matrix::zeros(1, 4)?, Matrix::zeros(2, 2)?);
        Ok(())
    }
}

use crate::{error::MatrixError, matrix::Matrix};

pub(crate) fn ensure_square(m: &Matrix) -> Result<usize, MatrixError> {
    if !m.is_square() {
        return Err(MatrixError::NotSquare {
            rows: m.rows(),
            cols: m.cols(),
        });
    }
    Ok(m.rows())
}

/// Computes the matrix product `a * b`.
///
/// Entry `(i, j)` of the `a.rows() x b.cols()` result is the dot product of
/// row `i` of `a` and column `j` of `b`.
///
/// # Errors
///
/// Returns [`MatrixError::DimensionMismatch`] if `a.cols() != b.rows()`.
pub fn matmul(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    let values = matmul_values(a, b)?;
    Ok(Matrix::from_raw_parts(a.rows(), b.cols(), values))
}

/// Computes the matrix product `a * b` as a flat row-major vector.
///
/// # Errors
///
/// Returns [`MatrixError::DimensionMismatch`] if `a.cols() != b.rows()`.
pub fn matmul_values(a: &Matrix, b: &Matrix) -> Result<Vec<f64>, MatrixError> {
    if a.cols() != b.rows() {
        return Err(MatrixError::dimension_mismatch(
            "left operand columns must equal right operand rows",
            &[a.cols(), b.cols()],
            &b.shape(),
        ));
    }

    let (n, p) = (a.cols(), b.cols());
    let (lhs, rhs) = (a.as_slice(), b.as_slice());

    let mut out = Vec::with_capacity(a.rows() * p);
    for i in 0..a.rows() {
        let row = &lhs[i * n..(i + 1) * n];
        for j in 0..p {
            let mut sum = 0.0;
            for (k, a_ik) in row.iter().enumerate() {
                sum += a_ik * rhs[k * p + j];
            }
            out.push(sum);
        }
    }
    Ok(out)
}

/// Computes the determinant by Laplace (cofactor) expansion along the first row.
///
/// This is the textbook recursive algorithm and runs in O(n!) time: fine for the
/// 2x2 to 4x4 matrices of 2D graphics, unusable for large matrices.
///
/// # Errors
///
/// Returns [`MatrixError::NotSquare`] for a non-square matrix.
pub fn cofactor_determinant(m: &Matrix) -> Result<f64, MatrixError> {
    let n = ensure_square(m)?;
    Ok(laplace(m.as_slice(), n))
}

/// Computes the adjugate, the transpose of the cofactor matrix.
///
/// Cofactor `(q, p)` is `(-1)^(q + p)` times the determinant of the minor that
/// drops row `q` and column `p`. The adjugate of a 1x1 matrix is `[1]`.
///
/// # Errors
///
/// Returns [`MatrixError::NotSquare`] for a non-square matrix.
pub fn adjugate(m: &Matrix) -> Result<Matrix, MatrixError> {
    let n = ensure_square(m)?;
    if n == 1 {
        return Ok(Matrix::from_raw_parts(1, 1, vec![1.0]));
    }

    let a = m.as_slice();
    let mut adj = vec![0.0; n * n];
    for q in 0..n {
        for p in 0..n {
            let sign = if (q + p) % 2 == 0 { 1.0 } else { -1.0 };
            let minor = minor_values(a, n, q, p);
            // transposed on write
            adj[p * n + q] = sign * laplace(&minor, n - 1);
        }
    }
    Ok(Matrix::from_raw_parts(n, n, adj))
}

fn laplace(a: &[f64], n: usize) -> f64 {
    if n == 1 {
        return a[0];
    }

    let mut det = 0.0;
    let mut sign = 1.0;
    for c in 0..n {
        let minor = minor_values(a, n, 0, c);
        det += sign * (a[c] * laplace(&minor, n - 1));
        sign = -sign;
    }
    det
}

// row-major values of the (n-1)x(n-1) minor of an n x n matrix
fn minor_values(a: &[f64], n: usize, row: usize, col: usize) -> Vec<f64> {
    let mut out = Vec::with_capacity((n - 1) * (n - 1));
    for i in (0..n).filter(|&i| i != row) {
        for j in (0..n).filter(|&j| j != col) {
            out.push(a[i * n + j]);
        }
    }
    out
}

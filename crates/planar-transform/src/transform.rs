use std::num::NonZeroUsize;

use planar_matrix::{Matrix, MatrixAlgebra, MatrixError};

use crate::{
    error::TransformError,
    params::{Angle, Planar, Scale},
};

/// A 2D affine transform stored as a 3x3 matrix in row-vector convention.
///
/// The matrix rows are `[ax, ay, 0]`, `[bx, by, 0]` and `[tx, ty, 1]`. A point
/// `(x, y)` is mapped as `[x', y', 1] = [x, y, 1] * M`, so composition reads
/// left to right in the order the transforms are applied: `a.compose(&b)`
/// leaves `a` holding `a * b`, which applies `a` first and then `b`.
///
/// The third column is always `[0, 0, 1]`. Every constructor, conversion and
/// composition checks it.
///
/// # Example
///
/// ```
/// use planar_transform::Transform;
///
/// // rotate by 90 degrees, then move right by 10
/// let mut t = Transform::rotation_matrix(90.0)?;
/// t.compose(&Transform::translation_matrix(&(10.0, 0.0))?)?;
///
/// let (x, y) = t.transform_point(1.0, 0.0)?;
/// assert!((x - 10.0).abs() < 1e-12);
/// assert!((y - 1.0).abs() < 1e-12);
/// # Ok::<(), planar_transform::TransformError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    matrix: Matrix,
}

impl Transform {
    /// Creates a transform from its six free components.
    ///
    /// # Arguments
    ///
    /// * `ax`, `ay` - First row, the image of the x axis.
    /// * `bx`, `by` - Second row, the image of the y axis.
    /// * `tx`, `ty` - Third row, the translation.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NonNumeric`] if any component is NaN.
    pub fn new(ax: f64, ay: f64, bx: f64, by: f64, tx: f64, ty: f64) -> Result<Self, TransformError> {
        let matrix = Matrix::from_shape_vec(3, 3, vec![ax, ay, 0.0, bx, by, 0.0, tx, ty, 1.0])?;
        Ok(Self { matrix })
    }

    /// Creates a counterclockwise rotation.
    ///
    /// A bare `f64` is taken as degrees; pass [`Angle::Radians`] to skip the
    /// conversion.
    ///
    /// # Errors
    ///
    /// Returns an error if the angle is NaN.
    pub fn rotation_matrix(angle: impl Into<Angle>) -> Result<Self, TransformError> {
        let theta = angle.into().radians();
        let (sin, cos) = theta.sin_cos();
        Self::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    /// Creates a translation by `(vector.x(), vector.y())`.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidVector`] if a coordinate is NaN.
    pub fn translation_matrix<V>(vector: &V) -> Result<Self, TransformError>
    where
        V: Planar + ?Sized,
    {
        let (x, y) = (vector.x(), vector.y());
        if x.is_nan() || y.is_nan() {
            return Err(TransformError::InvalidVector { x, y });
        }
        Self::new(1.0, 0.0, 0.0, 1.0, x, y)
    }

    /// Creates a scale, uniform for a single factor or per axis.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidScale`] if a factor is NaN.
    pub fn scale_matrix(scale: impl Into<Scale>) -> Result<Self, TransformError> {
        let (x, y) = scale.into().factors();
        if x.is_nan() || y.is_nan() {
            return Err(TransformError::InvalidScale { x, y });
        }
        Self::new(x, 0.0, 0.0, y, 0.0, 0.0)
    }

    /// The identity transform, the neutral element of composition.
    pub fn identity_matrix() -> Self {
        Self {
            matrix: Matrix::eye(NonZeroUsize::MIN.saturating_add(2)),
        }
    }

    /// Wraps a 3x3 matrix whose third column is `[0, 0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] for any other shape and
    /// [`TransformError::NotAffine`] for a different third column.
    pub fn from_matrix(matrix: Matrix) -> Result<Self, TransformError> {
        ensure_affine(&matrix)?;
        Ok(Self { matrix })
    }

    /// The underlying 3x3 matrix.
    pub fn into_matrix(self) -> Matrix {
        self.matrix
    }

    #[inline]
    fn at(&self, row: usize, col: usize) -> f64 {
        self.matrix[(row, col)]
    }

    /// Entry `(0, 0)`.
    pub fn ax(&self) -> f64 {
        self.at(0, 0)
    }

    /// Entry `(0, 1)`.
    pub fn ay(&self) -> f64 {
        self.at(0, 1)
    }

    /// Entry `(1, 0)`.
    pub fn bx(&self) -> f64 {
        self.at(1, 0)
    }

    /// Entry `(1, 1)`.
    pub fn by(&self) -> f64 {
        self.at(1, 1)
    }

    /// Entry `(2, 0)`, the horizontal translation.
    pub fn tx(&self) -> f64 {
        self.at(2, 0)
    }

    /// Entry `(2, 1)`, the vertical translation.
    pub fn ty(&self) -> f64 {
        self.at(2, 1)
    }

    /// The six free components `[ax, ay, bx, by, tx, ty]`.
    pub fn components(&self) -> [f64; 6] {
        [self.ax(), self.ay(), self.bx(), self.by(), self.tx(), self.ty()]
    }

    /// Replaces this transform with `self * other`.
    ///
    /// The product is computed in full before the receiver is touched, so on
    /// error the transform is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] if `other` is not 3x3 and
    /// [`TransformError::NotAffine`] if its third column is not `[0, 0, 1]`.
    pub fn compose<M>(&mut self, other: &M) -> Result<(), TransformError>
    where
        M: MatrixAlgebra + ?Sized,
    {
        ensure_affine(other.as_matrix())?;
        self.matrix = self.multiply(other)?;
        Ok(())
    }

    /// Returns `self * other` without modifying `self`.
    ///
    /// # Errors
    ///
    /// Same as [`Transform::compose`].
    pub fn then<M>(&self, other: &M) -> Result<Transform, TransformError>
    where
        M: MatrixAlgebra + ?Sized,
    {
        let mut out = self.clone();
        out.compose(other)?;
        Ok(out)
    }

    /// Returns the inverse transform, or `None` if this one is singular.
    ///
    /// # Errors
    ///
    /// Returns an error if the inverse is not affine, which only happens when
    /// the components are not finite.
    pub fn invert(&self) -> Result<Option<Transform>, TransformError> {
        self.inverse()?
            .into_option()
            .map(Transform::from_matrix)
            .transpose()
    }

    /// Maps the point `(x, y)` as the row vector `[x, y, 1] * M`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NonNumeric`] if a coordinate is NaN.
    pub fn transform_point(&self, x: f64, y: f64) -> Result<(f64, f64), TransformError> {
        let vertex = Matrix::from_shape_vec(1, 3, vec![x, y, 1.0])?;
        let mapped = vertex.multiply_values(self)?;
        Ok((mapped[0], mapped[1]))
    }
}

fn ensure_affine(m: &Matrix) -> Result<(), TransformError> {
    if m.shape() != [3, 3] {
        return Err(MatrixError::dimension_mismatch(
            "affine transforms compose only with 3x3 matrices",
            &[3, 3],
            &m.shape(),
        )
        .into());
    }
    let third = [m[(0, 2)], m[(1, 2)], m[(2, 2)]];
    if third != [0.0, 0.0, 1.0] {
        log::debug!("rejecting non-affine 3x3 matrix with third column {:?}", third);
        return Err(TransformError::NotAffine(third));
    }
    Ok(())
}

impl MatrixAlgebra for Transform {
    #[inline]
    fn as_matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Closed-form 3x3 cofactor expansion along the first row.
    ///
    /// Gives the same value as the recursive expansion, without the recursion.
    fn determinant(&self) -> Result<f64, MatrixError> {
        let m = &self.matrix;
        let mut det = m[(0, 0)] * (m[(1, 1)] * m[(2, 2)] - m[(2, 1)] * m[(1, 2)]);
        det -= m[(0, 1)] * (m[(1, 0)] * m[(2, 2)] - m[(2, 0)] * m[(1, 2)]);
        det += m[(0, 2)] * (m[(1, 0)] * m[(2, 1)] - m[(1, 1)] * m[(2, 0)]);
        Ok(det)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity_matrix()
    }
}

impl AsRef<Matrix> for Transform {
    fn as_ref(&self) -> &Matrix {
        &self.matrix
    }
}

impl From<Transform> for Matrix {
    fn from(t: Transform) -> Self {
        t.matrix
    }
}

impl TryFrom<Matrix> for Transform {
    type Error = TransformError;

    fn try_from(matrix: Matrix) -> Result<Self, Self::Error> {
        Self::from_matrix(matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use planar_matrix::{linalg, ErrorKind, Inverse};

    const EPSILON: f64 = 1e-12;

    fn make_matrix(data: [f64; 9]) -> Matrix {
        Matrix::from_shape_slice(3, 3, &data).unwrap()
    }

    #[test]
    fn test_new_layout() -> Result<(), TransformError> {
        let t = Transform::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0)?;
        assert_eq!(
            t.as_matrix().as_slice(),
            &[1.0, 2.0, 0.0, 3.0, 4.0, 0.0, 5.0, 6.0, 1.0]
        );
        assert_eq!(t.components(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert!(Transform::new(f64::NAN, 0.0, 0.0, 1.0, 0.0, 0.0).is_err());
        Ok(())
    }

    #[test]
    fn test_rotation_matrix() -> Result<(), TransformError> {
        let t = Transform::rotation_matrix(90.0)?;
        assert_relative_eq!(t.ax(), 0.0, epsilon = EPSILON);
        assert_relative_eq!(t.ay(), 1.0, epsilon = EPSILON);
        assert_relative_eq!(t.bx(), -1.0, epsilon = EPSILON);
        assert_relative_eq!(t.by(), 0.0, epsilon = EPSILON);
        assert_eq!(t.tx(), 0.0);
        assert_eq!(t.ty(), 0.0);

        let r = Transform::rotation_matrix(Angle::Radians(std::f64::consts::FRAC_PI_2))?;
        for (a, b) in r.components().iter().zip(t.components().iter()) {
            assert_relative_eq!(*a, *b, epsilon = EPSILON);
        }
        Ok(())
    }

    #[test]
    fn test_two_quarter_turns() -> Result<(), TransformError> {
        let mut t = Transform::rotation_matrix(90.0)?;
        t.compose(&Transform::rotation_matrix(90.0)?)?;
        let (x, y) = t.transform_point(1.0, 0.0)?;
        assert_relative_eq!(x, -1.0, epsilon = EPSILON);
        assert_relative_eq!(y, 0.0, epsilon = EPSILON);
        Ok(())
    }

    #[test]
    fn test_translation_matrix() -> Result<(), TransformError> {
        let t = Transform::translation_matrix(&(3.0, -4.0))?;
        assert_eq!(t.components(), [1.0, 0.0, 0.0, 1.0, 3.0, -4.0]);
        assert_eq!(t.transform_point(1.0, 1.0)?, (4.0, -3.0));

        let err = Transform::translation_matrix(&[f64::NAN, 1.0]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
        assert!(matches!(err, TransformError::InvalidVector { .. }));
        Ok(())
    }

    #[test]
    fn test_scale_matrix() -> Result<(), TransformError> {
        let uniform = Transform::scale_matrix(2.0)?;
        assert_eq!(uniform.components(), [2.0, 0.0, 0.0, 2.0, 0.0, 0.0]);

        let axes = Transform::scale_matrix((2.0, 3.0))?;
        assert_eq!(axes.components(), [2.0, 0.0, 0.0, 3.0, 0.0, 0.0]);
        assert_eq!(axes.transform_point(1.0, 1.0)?, (2.0, 3.0));

        let err = Transform::scale_matrix(f64::NAN).unwrap_err();
        assert!(matches!(err, TransformError::InvalidScale { .. }));
        Ok(())
    }

    #[test]
    fn test_identity_matrix() -> Result<(), TransformError> {
        let id = Transform::identity_matrix();
        assert!(id.is_identity_matrix());
        assert_eq!(id, Transform::translation_matrix(&(0.0, 0.0))?);
        assert_eq!(id, Transform::default());
        assert_eq!(id.into_matrix(), Matrix::identity(3)?);
        Ok(())
    }

    #[test]
    fn test_compose_order() -> Result<(), TransformError> {
        // translate by y=90, then rotate a quarter turn
        let mut t = Transform::from_matrix(make_matrix([
            1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 90.0, 1.0,
        ]))?;
        let rotate = make_matrix([0.0, 1.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
        t.compose(&rotate)?;
        assert!(t.equals(&make_matrix([
            0.0, 1.0, 0.0, -1.0, 0.0, 0.0, -90.0, 0.0, 1.0
        ])));
        Ok(())
    }

    #[test]
    fn test_compose_not_commutative() -> Result<(), TransformError> {
        let rotate = Transform::rotation_matrix(90.0)?;
        let translate = Transform::translation_matrix(&(10.0, 0.0))?;

        let (x, y) = rotate.then(&translate)?.transform_point(1.0, 0.0)?;
        assert_relative_eq!(x, 10.0, epsilon = EPSILON);
        assert_relative_eq!(y, 1.0, epsilon = EPSILON);

        let (x, y) = translate.then(&rotate)?.transform_point(1.0, 0.0)?;
        assert_relative_eq!(x, 0.0, epsilon = EPSILON);
        assert_relative_eq!(y, 11.0, epsilon = EPSILON);
        Ok(())
    }

    #[test]
    fn test_compose_rejects_bad_operands() -> Result<(), TransformError> {
        let mut t = Transform::scale_matrix(2.0)?;
        let before = t.clone();

        let err = t.compose(&Matrix::identity(2)?).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Dimension);

        let projective = make_matrix([1.0, 0.0, 0.5, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
        let err = t.compose(&projective).unwrap_err();
        assert_eq!(err, TransformError::NotAffine([0.5, 0.0, 1.0]));

        assert_eq!(t, before);
        Ok(())
    }

    #[test]
    fn test_determinant_matches_cofactor_expansion() -> Result<(), TransformError> {
        let samples = [
            Transform::rotation_matrix(33.0)?,
            Transform::new(1.5, -0.25, 3.0, 7.0, -12.0, 4.5)?,
            Transform::scale_matrix((2.0, -3.0))?,
            Transform::new(1.0, 2.0, 2.0, 4.0, 1.0, 1.0)?,
        ];
        for t in &samples {
            assert_eq!(t.determinant()?, linalg::cofactor_determinant(t.as_matrix())?);
        }
        Ok(())
    }

    #[test]
    fn test_scale_composed_with_inverse_is_identity() -> Result<(), TransformError> {
        let mut t = Transform::scale_matrix((2.0, 2.0))?;
        let inv = t.invert()?.ok_or(TransformError::Singular)?;
        t.compose(&inv)?;
        assert!(t.is_identity_matrix());
        Ok(())
    }

    #[test]
    fn test_invert_singular() -> Result<(), TransformError> {
        let t = Transform::scale_matrix((0.0, 1.0))?;
        assert_eq!(t.invert()?, None);
        assert_eq!(t.inverse()?, Inverse::Singular);
        Ok(())
    }

    #[test]
    fn test_try_from_matrix() -> Result<(), TransformError> {
        let m = make_matrix([2.0, 0.0, 0.0, 0.0, 2.0, 0.0, 1.0, 1.0, 1.0]);
        let t = Transform::try_from(m.clone())?;
        assert_eq!(Matrix::from(t), m);

        let wide = Matrix::zeros(3, 4)?;
        assert!(Transform::try_from(wide).is_err());
        Ok(())
    }
}

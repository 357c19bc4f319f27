use planar_matrix::{Matrix, MatrixAlgebra, MatrixError};
use planar_transform::{Planar, Scale};

use crate::error::GeometryError;

/// A 2D point, also used as a difference vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// The origin.
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a point.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonNumeric`] if a coordinate is NaN.
    pub fn new(x: f64, y: f64) -> Result<Self, GeometryError> {
        if x.is_nan() || y.is_nan() {
            return Err(GeometryError::NonNumeric("x and y"));
        }
        Ok(Self { x, y })
    }

    /// The difference vector `other - self`, pointing from `self` to `other`.
    ///
    /// Note this is not the Euclidean distance; use [`Point::length`] on the
    /// result for that.
    pub fn distance(&self, other: &Point) -> Point {
        *other - *self
    }

    /// Euclidean length of the point taken as a vector.
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Maps this point in place through a 3-row matrix with at least two
    /// columns, usually a transform.
    ///
    /// The point is written as the row vector `[x, y, 1]`, right-multiplied by
    /// `matrix`, and the first two entries of the result become the new
    /// coordinates.
    ///
    /// # Errors
    ///
    /// Returns a dimension error if `matrix` does not have three rows or has
    /// fewer than two columns. The point is unchanged in that case.
    pub fn apply_transform<M>(&mut self, matrix: &M) -> Result<(), GeometryError>
    where
        M: MatrixAlgebra + ?Sized,
    {
        *self = self.transformed(matrix)?;
        Ok(())
    }

    /// Returns this point mapped through a 3-row matrix with at least two columns.
    ///
    /// # Errors
    ///
    /// Same as [`Point::apply_transform`].
    pub fn transformed<M>(&self, matrix: &M) -> Result<Point, GeometryError>
    where
        M: MatrixAlgebra + ?Sized,
    {
        let [rows, cols] = matrix.as_matrix().shape();
        if rows != 3 || cols < 2 {
            return Err(MatrixError::dimension_mismatch(
                "points map through 3-row matrices with at least 2 columns",
                &[3, 2],
                &[rows, cols],
            )
            .into());
        }
        let vertex = Matrix::from_shape_vec(1, 3, vec![self.x, self.y, 1.0])?;
        let result = vertex.multiply(matrix)?;
        Ok(Point {
            x: result[(0, 0)],
            y: result[(0, 1)],
        })
    }
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl std::ops::Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl Planar for Point {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl From<Point> for Scale {
    fn from(p: Point) -> Self {
        Scale::from_planar(&p)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

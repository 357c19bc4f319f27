use crate::{error::GeometryError, point::Point};

/// A width and a height.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Size {
    /// Creates a size.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonNumeric`] if an extent is NaN.
    pub fn new(width: f64, height: f64) -> Result<Self, GeometryError> {
        if width.is_nan() || height.is_nan() {
            return Err(GeometryError::NonNumeric("width and height"));
        }
        Ok(Self { width, height })
    }
}

/// An axis-aligned rectangle given by its origin and size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Frame {
    /// Corner with the smallest coordinates.
    pub origin: Point,
    /// Extent from the origin.
    pub size: Size,
}

impl Frame {
    /// Creates a frame.
    pub fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Creates a frame from raw coordinates and extents.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonNumeric`] if any argument is NaN.
    pub fn make(x: f64, y: f64, width: f64, height: f64) -> Result<Self, GeometryError> {
        Ok(Self::new(Point::new(x, y)?, Size::new(width, height)?))
    }

    /// Whether `point` lies inside the frame, edges included.
    pub fn is_point_inside_frame(&self, point: &Point) -> bool {
        point.x >= self.origin.x
            && point.x <= self.origin.x + self.size.width
            && point.y >= self.origin.y
            && point.y <= self.origin.y + self.size.height
    }
}

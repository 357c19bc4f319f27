/// Anything exposing numeric `x` and `y` coordinates.
pub trait Planar {
    /// The horizontal coordinate.
    fn x(&self) -> f64;
    /// The vertical coordinate.
    fn y(&self) -> f64;
}

impl Planar for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }

    fn y(&self) -> f64 {
        self.1
    }
}

impl Planar for [f64; 2] {
    fn x(&self) -> f64 {
        self[0]
    }

    fn y(&self) -> f64 {
        self[1]
    }
}

impl<P: Planar + ?Sized> Planar for &P {
    fn x(&self) -> f64 {
        (**self).x()
    }

    fn y(&self) -> f64 {
        (**self).y()
    }
}

/// A rotation angle. A bare `f64` converts to degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Angle {
    /// Angle in degrees.
    Degrees(f64),
    /// Angle in radians.
    Radians(f64),
}

impl Angle {
    /// The angle in radians.
    pub fn radians(self) -> f64 {
        match self {
            Self::Degrees(deg) => deg * (std::f64::consts::PI / 180.0),
            Self::Radians(rad) => rad,
        }
    }
}

impl From<f64> for Angle {
    fn from(degrees: f64) -> Self {
        Self::Degrees(degrees)
    }
}

/// Scale factors, either one factor for both axes or one per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scale {
    /// The same factor on both axes.
    Uniform(f64),
    /// Independent horizontal and vertical factors.
    Axes {
        /// Horizontal factor
        x: f64,
        /// Vertical factor
        y: f64,
    },
}

impl Scale {
    /// Per-axis factors as `(x, y)`.
    pub fn factors(self) -> (f64, f64) {
        match self {
            Self::Uniform(s) => (s, s),
            Self::Axes { x, y } => (x, y),
        }
    }

    /// Per-axis factors taken from a planar vector.
    pub fn from_planar<P: Planar + ?Sized>(vector: &P) -> Self {
        Self::Axes {
            x: vector.x(),
            y: vector.y(),
        }
    }
}

impl From<f64> for Scale {
    fn from(s: f64) -> Self {
        Self::Uniform(s)
    }
}

impl From<(f64, f64)> for Scale {
    fn from((x, y): (f64, f64)) -> Self {
        Self::Axes { x, y }
    }
}

impl From<[f64; 2]> for Scale {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::Axes { x, y }
    }
}

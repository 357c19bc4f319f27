#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! Plain value types for UI layout. Their only link to the matrix algebra is
//! [`Point::apply_transform`], which maps a point as the row vector `[x, y, 1]`
//! right-multiplied by a transform.
//!
//! ```rust
//! use planar_geometry::{Frame, Point};
//! use planar_transform::Transform;
//!
//! let frame = Frame::make(0.0, 0.0, 100.0, 100.0)?;
//! let mut p = Point::new(10.0, 10.0)?;
//! p.apply_transform(&Transform::scale_matrix(2.0)?)?;
//! assert!(frame.is_point_inside_frame(&p));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Error types for geometry primitives.
pub mod error;

/// Sizes and axis-aligned frames.
pub mod frame;

/// Line segments and their intersection.
pub mod line;

/// Points and 2D vectors.
pub mod point;

pub use crate::error::GeometryError;
pub use crate::frame::{Frame, Size};
pub use crate::line::Line;
pub use crate::point::Point;

#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Overview
//!
//! A [`Transform`] is a 3x3 [`planar_matrix::Matrix`] with a fixed third column
//! `[0, 0, 1]`, applied to points written as row vectors: `[x', y', 1] = [x, y, 1] * M`.
//! It delegates the whole [`MatrixAlgebra`](planar_matrix::MatrixAlgebra) to its
//! matrix and only overrides the determinant with the closed-form 3x3 expansion.
//!
//! - **Factories**: rotation (degrees or radians), translation, scale, identity
//! - **Composition**: `a.compose(&b)` makes `a` hold `a * b`, i.e. `a` then `b`
//! - **Style strings**: `matrix(ax,ay,bx,by,tx,ty)` with 16 fractional digits
//! - **Surfaces**: anything implementing [`RenderSurface`] can receive the
//!   transform or its inverse
//!
//! # Example
//!
//! ```rust
//! use planar_transform::{Transform, TransformError};
//! use planar_matrix::MatrixAlgebra;
//!
//! let mut t = Transform::scale_matrix(2.0)?;
//! let inverse = t.invert()?.ok_or(TransformError::Singular)?;
//! t.compose(&inverse)?;
//!
//! assert!(t.is_identity_matrix());
//! assert_eq!(
//!     t.to_style_string(),
//!     "matrix(1.0000000000000000,0.0000000000000000,0.0000000000000000,\
//!      1.0000000000000000,0.0000000000000000,0.0000000000000000)"
//! );
//! # Ok::<(), TransformError>(())
//! ```

/// Error types for transforms.
pub mod error;

/// Arguments accepted by the transform factories.
pub mod params;

/// Serialization support, enabled with the `serde` feature.
#[cfg(feature = "serde")]
pub mod serde;

/// Style string formatting.
pub mod style;

/// Rendering surfaces driven by transforms.
pub mod surface;

/// The affine transform type.
pub mod transform;

pub use crate::error::TransformError;
pub use crate::params::{Angle, Planar, Scale};
pub use crate::surface::RenderSurface;
pub use crate::transform::Transform;

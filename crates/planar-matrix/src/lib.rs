#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Overview
//!
//! `planar-matrix` is a small dense matrix container with exactly the algebra
//! 2D graphics needs: multiplication, determinant, inverse, row and column
//! extraction, identity and equality tests.
//!
//! - **Matrix**: a row-major `rows x cols` array of `f64` with a fixed shape
//! - **MatrixAlgebra**: the operations, implemented once and shared by every
//!   shape-constrained specialization through a single `as_matrix` accessor
//! - **Inverse**: the outcome of an inversion, either a matrix or `Singular`
//!
//! The determinant is a recursive cofactor expansion and the inverse is the
//! adjugate divided by the determinant. Both are O(n!) and meant for the 2x2 to
//! 4x4 matrices of planar geometry.
//!
//! # Quick Start
//!
//! ```rust
//! use planar_matrix::{Matrix, MatrixAlgebra};
//!
//! // a translation by (0, 90) in row-vector convention
//! let m = Matrix::from_shape_vec(3, 3, vec![1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 90.0, 1.0])?;
//!
//! let inv = m.inverse()?.into_option().expect("translation is invertible");
//! assert_eq!(inv.get(2, 1), Some(-90.0));
//! assert!(m.multiply(&inv)?.is_identity_matrix());
//! # Ok::<(), planar_matrix::MatrixError>(())
//! ```

/// Operations shared by matrices and their specializations.
pub mod algebra;

/// Error types for matrix construction and algebra.
pub mod error;

/// Free functions implementing the algebra on plain matrices.
pub mod linalg;

/// The dense matrix container.
pub mod matrix;

/// Serialization support, enabled with the `serde` feature.
#[cfg(feature = "serde")]
pub mod serde;

pub use crate::algebra::{Inverse, MatrixAlgebra};
pub use crate::error::{ErrorKind, MatrixError};
pub use crate::matrix::Matrix;

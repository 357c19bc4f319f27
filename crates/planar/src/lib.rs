#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use planar_matrix as matrix;

#[doc(inline)]
pub use planar_transform as transform;

#[doc(inline)]
pub use planar_geometry as geometry;

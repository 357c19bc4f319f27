use crate::{error::TransformError, transform::Transform};

/// A rendering surface that accepts an affine transform as six floats.
///
/// The arguments are the matrix components in `(ax, ay, bx, by, tx, ty)` order,
/// i.e. the rows `[a, b, 0]`, `[c, d, 0]` and `[e, f, 1]`. This is the argument
/// order of the 2D canvas `transform` call.
pub trait RenderSurface {
    /// Multiplies the surface's current transform by the given one.
    fn transform(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64);
}

impl<S: RenderSurface + ?Sized> RenderSurface for &mut S {
    fn transform(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) {
        (**self).transform(a, b, c, d, e, f);
    }
}

impl Transform {
    /// Passes this transform to the surface's `transform` call.
    pub fn apply_to_surface<S>(&self, surface: &mut S)
    where
        S: RenderSurface + ?Sized,
    {
        let [a, b, c, d, e, f] = self.components();
        surface.transform(a, b, c, d, e, f);
    }

    /// Passes the inverse of this transform to the surface's `transform` call.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::Singular`] if this transform has no inverse.
    /// The surface is not touched in that case.
    pub fn apply_inverse_to_surface<S>(&self, surface: &mut S) -> Result<(), TransformError>
    where
        S: RenderSurface + ?Sized,
    {
        match self.invert()? {
            Some(inverse) => {
                inverse.apply_to_surface(surface);
                Ok(())
            }
            None => {
                log::warn!("cannot apply the inverse of singular transform {}", self);
                Err(TransformError::Singular)
            }
        }
    }
}

//! Value-type affine transform.

use crate::error::{Error, Result};
use crate::ffi;

/// A 2D affine transformation.
///
/// The layout matches `cairo_matrix_t` exactly, so values cross the FFI
/// boundary without conversion:
///
/// ```text
/// x_new = xx * x + xy * y + x0
/// y_new = yx * x + yy * y + y0
/// ```
///
/// Pure value semantics; copying is always safe and never shares state.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix {
    pub xx: f64,
    pub yx: f64,
    pub xy: f64,
    pub yy: f64,
    pub x0: f64,
    pub y0: f64,
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix::identity()
    }
}

impl Matrix {
    /// Builds a matrix from its six affine components.
    pub fn new(xx: f64, yx: f64, xy: f64, yy: f64, x0: f64, y0: f64) -> Matrix {
        let mut matrix = Matrix::zeroed();
        unsafe {
            ffi::cairo_matrix_init(&mut matrix, xx, yx, xy, yy, x0, y0);
        }
        matrix
    }

    pub fn identity() -> Matrix {
        let mut matrix = Matrix::zeroed();
        unsafe {
            ffi::cairo_matrix_init_identity(&mut matrix);
        }
        matrix
    }

    pub fn from_translation(tx: f64, ty: f64) -> Matrix {
        let mut matrix = Matrix::zeroed();
        unsafe {
            ffi::cairo_matrix_init_translate(&mut matrix, tx, ty);
        }
        matrix
    }

    pub fn from_scale(sx: f64, sy: f64) -> Matrix {
        let mut matrix = Matrix::zeroed();
        unsafe {
            ffi::cairo_matrix_init_scale(&mut matrix, sx, sy);
        }
        matrix
    }

    pub fn from_rotation(radians: f64) -> Matrix {
        let mut matrix = Matrix::zeroed();
        unsafe {
            ffi::cairo_matrix_init_rotate(&mut matrix, radians);
        }
        matrix
    }

    fn zeroed() -> Matrix {
        Matrix {
            xx: 0.0,
            yx: 0.0,
            xy: 0.0,
            yy: 0.0,
            x0: 0.0,
            y0: 0.0,
        }
    }

    /// Applies a translation before the existing transformation.
    pub fn translate(&mut self, tx: f64, ty: f64) {
        unsafe {
            ffi::cairo_matrix_translate(self, tx, ty);
        }
    }

    /// Applies a scale before the existing transformation.
    pub fn scale(&mut self, sx: f64, sy: f64) {
        unsafe {
            ffi::cairo_matrix_scale(self, sx, sy);
        }
    }

    /// Applies a rotation before the existing transformation.
    pub fn rotate(&mut self, radians: f64) {
        unsafe {
            ffi::cairo_matrix_rotate(self, radians);
        }
    }

    /// Replaces `self` with `a` applied first, then `b`.
    pub fn multiply(&mut self, a: &Matrix, b: &Matrix) {
        unsafe {
            ffi::cairo_matrix_multiply(self, a, b);
        }
    }

    /// Inverts the matrix in place.
    ///
    /// A degenerate matrix (one that collapses points together) has no
    /// inverse; in that case `self` is left untouched and
    /// [`Error::InvalidMatrix`] is returned.
    pub fn invert(&mut self) -> Result<()> {
        let status = unsafe { ffi::cairo_matrix_invert(self) };
        match Error::from_status(status) {
            None => Ok(()),
            Some(err) => Err(err),
        }
    }

    /// Transforms the point `(x, y)` by this matrix.
    pub fn transform_point(&self, x: f64, y: f64) -> (f64, f64) {
        let (mut x, mut y) = (x, y);
        unsafe {
            ffi::cairo_matrix_transform_point(self, &mut x, &mut y);
        }
        (x, y)
    }

    /// Transforms the distance vector `(dx, dy)`, ignoring translation.
    pub fn transform_distance(&self, dx: f64, dy: f64) -> (f64, f64) {
        let (mut dx, mut dy) = (dx, dy);
        unsafe {
            ffi::cairo_matrix_transform_distance(self, &mut dx, &mut dy);
        }
        (dx, dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: &Matrix, b: &Matrix, tolerance: f64) -> bool {
        (a.xx - b.xx).abs() < tolerance
            && (a.yx - b.yx).abs() < tolerance
            && (a.xy - b.xy).abs() < tolerance
            && (a.yy - b.yy).abs() < tolerance
            && (a.x0 - b.x0).abs() < tolerance
            && (a.y0 - b.y0).abs() < tolerance
    }

    #[test]
    fn identity_is_left_and_right_neutral() {
        let m = Matrix::new(2.0, 0.5, -1.0, 3.0, 10.0, -4.0);
        let identity = Matrix::identity();

        let mut left = Matrix::identity();
        left.multiply(&identity, &m);
        assert_eq!(left, m);

        let mut right = Matrix::identity();
        right.multiply(&m, &identity);
        assert_eq!(right, m);
    }

    #[test]
    fn invert_composes_to_identity() {
        let m = Matrix::new(2.0, 0.0, 0.0, 4.0, 7.0, -3.0);
        let mut inverse = m;
        inverse.invert().unwrap();

        let mut product = Matrix::identity();
        product.multiply(&m, &inverse);
        assert!(approx_eq(&product, &Matrix::identity(), 1e-9));
    }

    #[test]
    fn degenerate_matrix_reports_invalid_matrix() {
        let mut degenerate = Matrix::from_scale(1.0, 0.0);
        degenerate.xx = 0.0;
        assert_eq!(degenerate.invert(), Err(Error::InvalidMatrix));
    }

    #[test]
    fn scale_then_translate_transforms_points() {
        let mut m = Matrix::from_translation(10.0, 20.0);
        m.scale(2.0, 3.0);
        assert_eq!(m.transform_point(1.0, 1.0), (12.0, 23.0));
        // Distances ignore the translation component.
        assert_eq!(m.transform_distance(1.0, 1.0), (2.0, 3.0));
    }

    #[test]
    fn default_is_identity() {
        assert_eq!(Matrix::default(), Matrix::identity());
    }
}

//! Paint sources: solid colors, gradients, surface-backed and mesh patterns.

use std::fmt;
use std::ptr::NonNull;

use libc::c_int;

use crate::enums::{Extend, PatternType, from_raw_or_default};
use crate::error::{Error, Result, status_to_result};
use crate::ffi;
use crate::matrix::Matrix;
use crate::surface::Surface;

/// A source used when filling, stroking, or masking.
///
/// One wrapper type covers every pattern kind; construction goes through the
/// kind-specific constructors and [`Pattern::pattern_type`] reads the
/// discriminant back from the native handle (it cannot change after
/// construction, so it is never cached on the Rust side).
///
/// Ownership is shared through cairo's reference count, same as
/// [`Surface`]: `Clone` retains, `Drop` releases exactly once. Not
/// thread-safe; callers must serialize access per object.
pub struct Pattern {
    ptr: NonNull<ffi::cairo_pattern_t>,
}

impl Pattern {
    pub(crate) fn from_raw_full(raw: *mut ffi::cairo_pattern_t) -> Result<Pattern> {
        let ptr = NonNull::new(raw).ok_or(Error::NoMemory)?;
        let pattern = Pattern { ptr };
        pattern.status()?;
        Ok(pattern)
    }

    /// Wraps a handle borrowed from cairo (e.g. a context's current source)
    /// by taking an additional reference first.
    pub(crate) fn from_raw_borrowed(raw: *mut ffi::cairo_pattern_t) -> Result<Pattern> {
        if raw.is_null() {
            return Err(Error::NullPointer);
        }
        unsafe {
            ffi::cairo_pattern_reference(raw);
        }
        Pattern::from_raw_full(raw)
    }

    pub(crate) fn to_raw(&self) -> *mut ffi::cairo_pattern_t {
        self.ptr.as_ptr()
    }

    /// An opaque solid color.
    pub fn solid_rgb(red: f64, green: f64, blue: f64) -> Result<Pattern> {
        Pattern::from_raw_full(unsafe { ffi::cairo_pattern_create_rgb(red, green, blue) })
    }

    /// A translucent solid color.
    pub fn solid_rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Result<Pattern> {
        Pattern::from_raw_full(unsafe { ffi::cairo_pattern_create_rgba(red, green, blue, alpha) })
    }

    /// A pattern that paints with the contents of `surface`.
    pub fn for_surface(surface: &Surface) -> Result<Pattern> {
        Pattern::from_raw_full(unsafe { ffi::cairo_pattern_create_for_surface(surface.to_raw()) })
    }

    /// A linear gradient along the line from `(x0, y0)` to `(x1, y1)`.
    pub fn linear(x0: f64, y0: f64, x1: f64, y1: f64) -> Result<Pattern> {
        Pattern::from_raw_full(unsafe { ffi::cairo_pattern_create_linear(x0, y0, x1, y1) })
    }

    /// A radial gradient between two circles.
    pub fn radial(cx0: f64, cy0: f64, radius0: f64, cx1: f64, cy1: f64, radius1: f64) -> Result<Pattern> {
        Pattern::from_raw_full(unsafe {
            ffi::cairo_pattern_create_radial(cx0, cy0, radius0, cx1, cy1, radius1)
        })
    }

    /// An empty mesh pattern. Populating the mesh is out of scope for this
    /// crate; the constructor exists so mesh handles can round-trip.
    pub fn mesh() -> Result<Pattern> {
        Pattern::from_raw_full(unsafe { ffi::cairo_pattern_create_mesh() })
    }

    /// The pattern kind, read from the native handle, or `None` for a kind
    /// unknown to this crate.
    pub fn pattern_type(&self) -> Option<PatternType> {
        PatternType::from_raw(unsafe { ffi::cairo_pattern_get_type(self.to_raw()) })
    }

    /// Adds an opaque gradient stop at `offset` in `[0, 1]`.
    ///
    /// Stops may be added in any order; interpolation order is decided by
    /// offset, not by submission order. On non-gradient patterns this
    /// latches [`Error::PatternTypeMismatch`].
    pub fn add_color_stop_rgb(&self, offset: f64, red: f64, green: f64, blue: f64) {
        unsafe {
            ffi::cairo_pattern_add_color_stop_rgb(self.to_raw(), offset, red, green, blue);
        }
    }

    /// Adds a translucent gradient stop at `offset` in `[0, 1]`.
    pub fn add_color_stop_rgba(&self, offset: f64, red: f64, green: f64, blue: f64, alpha: f64) {
        unsafe {
            ffi::cairo_pattern_add_color_stop_rgba(self.to_raw(), offset, red, green, blue, alpha);
        }
    }

    /// Number of gradient stops, or an error for non-gradient patterns.
    pub fn color_stop_count(&self) -> Result<usize> {
        let mut count: c_int = 0;
        status_to_result(unsafe {
            ffi::cairo_pattern_get_color_stop_count(self.to_raw(), &mut count)
        })?;
        Ok(count as usize)
    }

    /// The stop at `index` as `(offset, red, green, blue, alpha)`.
    pub fn color_stop_rgba(&self, index: usize) -> Result<(f64, f64, f64, f64, f64)> {
        let index = c_int::try_from(index).map_err(|_| Error::InvalidIndex)?;
        let mut stop = (0.0, 0.0, 0.0, 0.0, 0.0);
        status_to_result(unsafe {
            ffi::cairo_pattern_get_color_stop_rgba(
                self.to_raw(),
                index,
                &mut stop.0,
                &mut stop.1,
                &mut stop.2,
                &mut stop.3,
                &mut stop.4,
            )
        })?;
        Ok(stop)
    }

    pub fn set_extend(&self, extend: Extend) {
        unsafe {
            ffi::cairo_pattern_set_extend(self.to_raw(), extend.into_raw());
        }
    }

    pub fn extend(&self) -> Extend {
        let raw = unsafe { ffi::cairo_pattern_get_extend(self.to_raw()) };
        from_raw_or_default(Extend::from_raw(raw), raw, "pattern extend")
    }

    /// Sets the transformation from user space to pattern space.
    pub fn set_matrix(&self, matrix: &Matrix) {
        unsafe {
            ffi::cairo_pattern_set_matrix(self.to_raw(), matrix);
        }
    }

    pub fn matrix(&self) -> Matrix {
        let mut matrix = Matrix::identity();
        unsafe {
            ffi::cairo_pattern_get_matrix(self.to_raw(), &mut matrix);
        }
        matrix
    }

    /// Polls the error latched on this pattern, if any.
    pub fn status(&self) -> Result<()> {
        status_to_result(unsafe { ffi::cairo_pattern_status(self.to_raw()) })
    }

    /// The native reference count, exposed for lifetime tests.
    pub fn reference_count(&self) -> u32 {
        unsafe { ffi::cairo_pattern_get_reference_count(self.to_raw()) }
    }
}

impl Clone for Pattern {
    fn clone(&self) -> Pattern {
        unsafe {
            ffi::cairo_pattern_reference(self.to_raw());
        }
        Pattern { ptr: self.ptr }
    }
}

impl Drop for Pattern {
    fn drop(&mut self) {
        unsafe {
            ffi::cairo_pattern_destroy(self.to_raw());
        }
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pattern")
            .field("type", &self.pattern_type())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_report_their_type() {
        let solid = Pattern::solid_rgb(1.0, 0.0, 0.0).unwrap();
        assert_eq!(solid.pattern_type(), Some(PatternType::Solid));

        let linear = Pattern::linear(0.0, 0.0, 1.0, 0.0).unwrap();
        assert_eq!(linear.pattern_type(), Some(PatternType::Linear));

        let radial = Pattern::radial(0.5, 0.5, 0.1, 0.5, 0.5, 1.0).unwrap();
        assert_eq!(radial.pattern_type(), Some(PatternType::Radial));

        let mesh = Pattern::mesh().unwrap();
        assert_eq!(mesh.pattern_type(), Some(PatternType::Mesh));
    }

    #[test]
    fn gradient_accumulates_stops() {
        let gradient = Pattern::linear(0.0, 0.0, 1.0, 0.0).unwrap();
        gradient.add_color_stop_rgb(1.0, 1.0, 1.0, 1.0);
        gradient.add_color_stop_rgba(0.0, 0.0, 0.0, 0.0, 0.5);
        assert_eq!(gradient.color_stop_count().unwrap(), 2);
        assert!(gradient.status().is_ok());
    }

    #[test]
    fn color_stops_on_solid_pattern_fail() {
        let solid = Pattern::solid_rgb(0.0, 0.0, 0.0).unwrap();
        assert_eq!(
            solid.color_stop_count(),
            Err(Error::PatternTypeMismatch)
        );
    }

    #[test]
    fn extend_round_trips() {
        let gradient = Pattern::linear(0.0, 0.0, 0.0, 1.0).unwrap();
        gradient.set_extend(Extend::Reflect);
        assert_eq!(gradient.extend(), Extend::Reflect);
    }

    #[test]
    fn clone_tracks_native_reference_count() {
        let pattern = Pattern::solid_rgb(0.2, 0.4, 0.6).unwrap();
        assert_eq!(pattern.reference_count(), 1);
        let clone = pattern.clone();
        assert_eq!(pattern.reference_count(), 2);
        drop(clone);
        assert_eq!(pattern.reference_count(), 1);
    }

    #[test]
    fn matrix_round_trips() {
        let pattern = Pattern::solid_rgb(0.0, 0.0, 0.0).unwrap();
        let matrix = Matrix::from_scale(2.0, 4.0);
        pattern.set_matrix(&matrix);
        assert_eq!(pattern.matrix(), matrix);
    }
}

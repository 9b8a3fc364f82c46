//! A font face bound to concrete transformations and options.

use std::ffi::CString;
use std::fmt;
use std::ptr::NonNull;

use libc::{c_int, c_ulong};

use crate::enums::FontType;
use crate::error::{Error, Result, status_to_result};
use crate::ffi;
use crate::font::{FontFace, FontOptions};
use crate::matrix::Matrix;

/// A single positioned glyph, in the layout cairo consumes directly.
///
/// `index` is backend-specific (for FreeType it is the glyph index in the
/// underlying face); `x` and `y` position the glyph origin in user space.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
    pub index: c_ulong,
    pub x: f64,
    pub y: f64,
}

/// Measurements of a run of text or glyphs, in user space.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextExtents {
    pub x_bearing: f64,
    pub y_bearing: f64,
    pub width: f64,
    pub height: f64,
    pub x_advance: f64,
    pub y_advance: f64,
}

/// Whole-font vertical metrics, in user space.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FontExtents {
    pub ascent: f64,
    pub descent: f64,
    pub height: f64,
    pub max_x_advance: f64,
    pub max_y_advance: f64,
}

/// A [`FontFace`] combined with a font matrix, a device transformation
/// and [`FontOptions`], ready to measure and render at a fixed size.
///
/// Shares ownership of the native handle; [`Clone`] takes a reference and
/// [`Drop`] releases exactly one. Cairo caches scaled fonts internally,
/// so creating the same combination twice may return the same handle.
/// Not thread-safe.
pub struct ScaledFont {
    ptr: NonNull<ffi::cairo_scaled_font_t>,
}

impl ScaledFont {
    /// Binds `face` to a font matrix (glyph space to user space), the
    /// current transformation matrix (user space to device space) and
    /// rendering options.
    pub fn new(
        face: &FontFace,
        font_matrix: &Matrix,
        ctm: &Matrix,
        options: &FontOptions,
    ) -> Result<ScaledFont> {
        ScaledFont::from_raw_full(unsafe {
            ffi::cairo_scaled_font_create(face.to_raw(), font_matrix, ctm, options.to_raw())
        })
    }

    pub(crate) fn from_raw_full(raw: *mut ffi::cairo_scaled_font_t) -> Result<ScaledFont> {
        let ptr = NonNull::new(raw).ok_or(Error::NoMemory)?;
        let font = ScaledFont { ptr };
        font.status()?;
        Ok(font)
    }

    pub(crate) fn from_raw_borrowed(raw: *mut ffi::cairo_scaled_font_t) -> Result<ScaledFont> {
        if raw.is_null() {
            return Err(Error::NullPointer);
        }
        ScaledFont::from_raw_full(unsafe { ffi::cairo_scaled_font_reference(raw) })
    }

    pub(crate) fn to_raw(&self) -> *mut ffi::cairo_scaled_font_t {
        self.ptr.as_ptr()
    }

    /// The face this scaled font was created from, shared via the native
    /// reference count.
    pub fn font_face(&self) -> Result<FontFace> {
        FontFace::from_raw_borrowed(unsafe { ffi::cairo_scaled_font_get_font_face(self.to_raw()) })
    }

    pub fn font_matrix(&self) -> Matrix {
        let mut matrix = Matrix::identity();
        unsafe {
            ffi::cairo_scaled_font_get_font_matrix(self.to_raw(), &mut matrix);
        }
        matrix
    }

    pub fn ctm(&self) -> Matrix {
        let mut matrix = Matrix::identity();
        unsafe {
            ffi::cairo_scaled_font_get_ctm(self.to_raw(), &mut matrix);
        }
        matrix
    }

    /// The font matrix and CTM combined: glyph space straight to device
    /// space.
    pub fn scale_matrix(&self) -> Matrix {
        let mut matrix = Matrix::identity();
        unsafe {
            ffi::cairo_scaled_font_get_scale_matrix(self.to_raw(), &mut matrix);
        }
        matrix
    }

    pub fn extents(&self) -> FontExtents {
        let mut extents = FontExtents::default();
        unsafe {
            ffi::cairo_scaled_font_extents(self.to_raw(), &mut extents);
        }
        extents
    }

    pub fn text_extents(&self, text: &str) -> Result<TextExtents> {
        let text = CString::new(text).map_err(|_| Error::InvalidString)?;
        let mut extents = TextExtents::default();
        unsafe {
            ffi::cairo_scaled_font_text_extents(self.to_raw(), text.as_ptr(), &mut extents);
        }
        Ok(extents)
    }

    pub fn glyph_extents(&self, glyphs: &[Glyph]) -> TextExtents {
        let mut extents = TextExtents::default();
        unsafe {
            ffi::cairo_scaled_font_glyph_extents(
                self.to_raw(),
                glyphs.as_ptr(),
                glyphs.len() as c_int,
                &mut extents,
            );
        }
        extents
    }

    /// The backend this scaled font renders through, or `None` for a
    /// backend this binding does not know about.
    pub fn font_type(&self) -> Option<FontType> {
        FontType::from_raw(unsafe { ffi::cairo_scaled_font_get_type(self.to_raw()) })
    }

    /// Polls the error latched on this scaled font, if any.
    pub fn status(&self) -> Result<()> {
        status_to_result(unsafe { ffi::cairo_scaled_font_status(self.to_raw()) })
    }

    /// The native reference count, exposed for lifetime tests.
    pub fn reference_count(&self) -> u32 {
        unsafe { ffi::cairo_scaled_font_get_reference_count(self.to_raw()) }
    }
}

impl Clone for ScaledFont {
    fn clone(&self) -> ScaledFont {
        unsafe {
            ffi::cairo_scaled_font_reference(self.to_raw());
        }
        ScaledFont { ptr: self.ptr }
    }
}

impl Drop for ScaledFont {
    fn drop(&mut self) {
        unsafe {
            ffi::cairo_scaled_font_destroy(self.to_raw());
        }
    }
}

impl fmt::Debug for ScaledFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScaledFont")
            .field("type", &self.font_type())
            .field("font_matrix", &self.font_matrix())
            .finish()
    }
}

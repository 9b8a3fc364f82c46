//! Font faces, rendering options and scaled fonts.

use std::ffi::{CStr, CString};
use std::fmt;
use std::ptr::NonNull;

use crate::enums::{FontSlant, FontType, FontWeight};
use crate::error::{Error, Result, status_to_result};
use crate::ffi;

mod options;
mod scaled;

#[cfg(feature = "freetype")]
mod freetype;

pub use options::FontOptions;
pub use scaled::{FontExtents, Glyph, ScaledFont, TextExtents};

#[cfg(feature = "freetype")]
pub use freetype::FtFaceGuard;

/// An unscaled description of a typeface.
///
/// Shares ownership of the native handle; [`Clone`] takes a reference and
/// [`Drop`] releases exactly one. Not thread-safe.
pub struct FontFace {
    ptr: NonNull<ffi::cairo_font_face_t>,
}

impl FontFace {
    /// Creates a face through cairo's "toy" text API from a family name
    /// and style. The family is resolved against the platform font system;
    /// unknown families fall back to a default face rather than failing.
    pub fn toy(family: &str, slant: FontSlant, weight: FontWeight) -> Result<FontFace> {
        let family = CString::new(family).map_err(|_| Error::InvalidString)?;
        FontFace::from_raw_full(unsafe {
            ffi::cairo_toy_font_face_create(family.as_ptr(), slant.into_raw(), weight.into_raw())
        })
    }

    /// Takes over one native reference. Rejects null handles and handles
    /// already carrying an error.
    pub(crate) fn from_raw_full(raw: *mut ffi::cairo_font_face_t) -> Result<FontFace> {
        let ptr = NonNull::new(raw).ok_or(Error::NoMemory)?;
        let face = FontFace { ptr };
        face.status()?;
        Ok(face)
    }

    /// Wraps a handle owned elsewhere by taking a reference of our own.
    pub(crate) fn from_raw_borrowed(raw: *mut ffi::cairo_font_face_t) -> Result<FontFace> {
        if raw.is_null() {
            return Err(Error::NullPointer);
        }
        FontFace::from_raw_full(unsafe { ffi::cairo_font_face_reference(raw) })
    }

    pub(crate) fn to_raw(&self) -> *mut ffi::cairo_font_face_t {
        self.ptr.as_ptr()
    }

    /// The backend this face belongs to, or `None` for a backend this
    /// binding does not know about.
    pub fn font_type(&self) -> Option<FontType> {
        FontType::from_raw(unsafe { ffi::cairo_font_face_get_type(self.to_raw()) })
    }

    /// The family this face was created with. Only toy faces carry one;
    /// other backends return `None`.
    pub fn family(&self) -> Option<String> {
        if self.font_type() != Some(FontType::Toy) {
            return None;
        }
        let raw = unsafe { ffi::cairo_toy_font_face_get_family(self.to_raw()) };
        if raw.is_null() {
            return None;
        }
        Some(unsafe { CStr::from_ptr(raw) }.to_string_lossy().into_owned())
    }

    /// The slant a toy face was created with; `None` for other backends.
    pub fn slant(&self) -> Option<FontSlant> {
        if self.font_type() != Some(FontType::Toy) {
            return None;
        }
        FontSlant::from_raw(unsafe { ffi::cairo_toy_font_face_get_slant(self.to_raw()) })
    }

    /// The weight a toy face was created with; `None` for other backends.
    pub fn weight(&self) -> Option<FontWeight> {
        if self.font_type() != Some(FontType::Toy) {
            return None;
        }
        FontWeight::from_raw(unsafe { ffi::cairo_toy_font_face_get_weight(self.to_raw()) })
    }

    /// Polls the error latched on this face, if any.
    pub fn status(&self) -> Result<()> {
        status_to_result(unsafe { ffi::cairo_font_face_status(self.to_raw()) })
    }

    /// The native reference count, exposed for lifetime tests.
    pub fn reference_count(&self) -> u32 {
        unsafe { ffi::cairo_font_face_get_reference_count(self.to_raw()) }
    }
}

impl Clone for FontFace {
    fn clone(&self) -> FontFace {
        unsafe {
            ffi::cairo_font_face_reference(self.to_raw());
        }
        FontFace { ptr: self.ptr }
    }
}

impl Drop for FontFace {
    fn drop(&mut self) {
        unsafe {
            ffi::cairo_font_face_destroy(self.to_raw());
        }
    }
}

impl fmt::Debug for FontFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontFace")
            .field("type", &self.font_type())
            .field("family", &self.family())
            .finish()
    }
}

#[cfg(test)]
mod tests;

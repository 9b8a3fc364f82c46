//! Render targets and their backend-specific subtypes.

use std::ffi::CString;
use std::fmt;
use std::path::Path;
use std::ptr::NonNull;

use crate::enums::{Content, SurfaceType, from_raw_or_default};
use crate::error::{Error, Result, status_to_result};
use crate::ffi;

mod image;
#[cfg(feature = "pdf")]
mod pdf;
#[cfg(feature = "png")]
mod png;
#[cfg(feature = "svg")]
mod svg;

pub use image::{ImageData, ImageSurface};
#[cfg(feature = "pdf")]
pub use pdf::PdfSurface;
#[cfg(feature = "svg")]
pub use svg::SvgSurface;

/// A drawing target backed by one `cairo_surface_t` handle.
///
/// Ownership is shared through cairo's intrusive reference count: `Clone`
/// retains the native handle and `Drop` releases it exactly once, so the
/// underlying resource lives until the last wrapper (or internal cairo
/// reference) goes away.
///
/// Like every handle type in this crate, `Surface` is `!Send` and `!Sync`:
/// cairo objects are not thread-safe and callers must serialize access per
/// object.
pub struct Surface {
    ptr: NonNull<ffi::cairo_surface_t>,
}

impl Surface {
    /// Takes over one native reference.
    ///
    /// Rejects null handles (allocation failure) and handles created in an
    /// error state; in the latter case the reference is released before
    /// returning so no half-valid object can leak.
    pub(crate) fn from_raw_full(raw: *mut ffi::cairo_surface_t) -> Result<Surface> {
        let ptr = NonNull::new(raw).ok_or(Error::NoMemory)?;
        let surface = Surface { ptr };
        surface.status()?;
        Ok(surface)
    }

    /// Wraps a handle borrowed from cairo (e.g. a context's group target) by
    /// taking an additional reference, so the eventual release in `Drop`
    /// stays symmetric regardless of the handle's origin.
    pub(crate) fn from_raw_borrowed(raw: *mut ffi::cairo_surface_t) -> Result<Surface> {
        if raw.is_null() {
            return Err(Error::NullPointer);
        }
        unsafe {
            ffi::cairo_surface_reference(raw);
        }
        Surface::from_raw_full(raw)
    }

    pub(crate) fn to_raw(&self) -> *mut ffi::cairo_surface_t {
        self.ptr.as_ptr()
    }

    /// Finishes any pending drawing so the surface contents can be read or
    /// modified outside of cairo.
    pub fn flush(&self) {
        unsafe {
            ffi::cairo_surface_flush(self.to_raw());
        }
    }

    /// Tells cairo the surface was modified outside of cairo and its caches
    /// must be dropped. Call [`Surface::flush`] before such modification.
    pub fn mark_dirty(&self) {
        unsafe {
            ffi::cairo_surface_mark_dirty(self.to_raw());
        }
    }

    /// Like [`Surface::mark_dirty`], restricted to a rectangle.
    pub fn mark_dirty_rectangle(&self, x: i32, y: i32, width: i32, height: i32) {
        unsafe {
            ffi::cairo_surface_mark_dirty_rectangle(self.to_raw(), x, y, width, height);
        }
    }

    /// Finishes the surface and drops all references to external resources
    /// (output files, backing memory). Drawing against a finished surface is
    /// a library-level error that latches [`Error::SurfaceFinished`].
    pub fn finish(&self) {
        unsafe {
            ffi::cairo_surface_finish(self.to_raw());
        }
    }

    /// Polls the error latched on this surface, if any.
    pub fn status(&self) -> Result<()> {
        status_to_result(unsafe { ffi::cairo_surface_status(self.to_raw()) })
    }

    /// Whether the surface holds color, alpha, or both.
    pub fn content(&self) -> Content {
        let raw = unsafe { ffi::cairo_surface_get_content(self.to_raw()) };
        from_raw_or_default(Content::from_raw(raw), raw, "surface content")
    }

    /// The backend behind this surface, or `None` when the linked library
    /// reports a backend unknown to this crate.
    pub fn surface_type(&self) -> Option<SurfaceType> {
        SurfaceType::from_raw(unsafe { ffi::cairo_surface_get_type(self.to_raw()) })
    }

    /// The native reference count, visible mainly so tests can verify
    /// acquire/release symmetry.
    pub fn reference_count(&self) -> u32 {
        unsafe { ffi::cairo_surface_get_reference_count(self.to_raw()) }
    }
}

impl Clone for Surface {
    fn clone(&self) -> Surface {
        unsafe {
            ffi::cairo_surface_reference(self.to_raw());
        }
        Surface { ptr: self.ptr }
    }
}

impl Drop for Surface {
    fn drop(&mut self) {
        unsafe {
            ffi::cairo_surface_destroy(self.to_raw());
        }
    }
}

impl fmt::Debug for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Surface")
            .field("type", &self.surface_type())
            .field("content", &self.content())
            .finish()
    }
}

/// Converts a filesystem path for a file-backed surface constructor.
pub(crate) fn path_to_cstring(path: &Path) -> Result<CString> {
    let utf8 = path.to_str().ok_or(Error::InvalidString)?;
    CString::new(utf8).map_err(|_| Error::InvalidString)
}

#[cfg(test)]
mod tests;

//! PDF document surfaces.

use std::ops::Deref;
use std::path::Path;

use super::{Surface, path_to_cstring};
use crate::enums::SurfaceType;
use crate::error::{Error, Result};
use crate::ffi;

/// A `Surface` that writes each page to a PDF file.
#[derive(Clone, Debug)]
pub struct PdfSurface(pub(crate) Surface);

impl PdfSurface {
    /// Creates a PDF surface writing to `path`, sized in PostScript points
    /// (1 pt = 1/72 inch). A path that cannot be opened surfaces as an error
    /// here, through the same status mechanism as every other failure.
    pub fn new<P: AsRef<Path>>(path: P, width_pt: f64, height_pt: f64) -> Result<PdfSurface> {
        let filename = path_to_cstring(path.as_ref())?;
        let raw = unsafe { ffi::cairo_pdf_surface_create(filename.as_ptr(), width_pt, height_pt) };
        Ok(PdfSurface(Surface::from_raw_full(raw)?))
    }

    /// Changes the page size applied to pages emitted after this call.
    pub fn set_size(&self, width_pt: f64, height_pt: f64) {
        unsafe {
            ffi::cairo_pdf_surface_set_size(self.0.to_raw(), width_pt, height_pt);
        }
    }

    /// Whether this subtype can represent the given backend.
    pub fn backend_compatible(surface_type: SurfaceType) -> bool {
        surface_type == SurfaceType::Pdf
    }
}

impl TryFrom<Surface> for PdfSurface {
    type Error = Error;

    fn try_from(surface: Surface) -> Result<PdfSurface> {
        match surface.surface_type() {
            Some(ty) if PdfSurface::backend_compatible(ty) => Ok(PdfSurface(surface)),
            _ => Err(Error::SurfaceTypeMismatch),
        }
    }
}

impl From<PdfSurface> for Surface {
    fn from(surface: PdfSurface) -> Surface {
        surface.0
    }
}

impl Deref for PdfSurface {
    type Target = Surface;

    fn deref(&self) -> &Surface {
        &self.0
    }
}

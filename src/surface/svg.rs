//! SVG document surfaces.

use std::ops::Deref;
use std::path::Path;

use super::{Surface, path_to_cstring};
use crate::enums::SurfaceType;
use crate::error::{Error, Result};
use crate::ffi;

/// A `Surface` that writes its output as an SVG document.
#[derive(Clone, Debug)]
pub struct SvgSurface(pub(crate) Surface);

impl SvgSurface {
    /// Creates an SVG surface writing to `path`, sized in PostScript points.
    pub fn new<P: AsRef<Path>>(path: P, width_pt: f64, height_pt: f64) -> Result<SvgSurface> {
        let filename = path_to_cstring(path.as_ref())?;
        let raw = unsafe { ffi::cairo_svg_surface_create(filename.as_ptr(), width_pt, height_pt) };
        Ok(SvgSurface(Surface::from_raw_full(raw)?))
    }

    /// Whether this subtype can represent the given backend.
    pub fn backend_compatible(surface_type: SurfaceType) -> bool {
        surface_type == SurfaceType::Svg
    }
}

impl TryFrom<Surface> for SvgSurface {
    type Error = Error;

    fn try_from(surface: Surface) -> Result<SvgSurface> {
        match surface.surface_type() {
            Some(ty) if SvgSurface::backend_compatible(ty) => Ok(SvgSurface(surface)),
            _ => Err(Error::SurfaceTypeMismatch),
        }
    }
}

impl From<SvgSurface> for Surface {
    fn from(surface: SvgSurface) -> Surface {
        surface.0
    }
}

impl Deref for SvgSurface {
    type Target = Surface;

    fn deref(&self) -> &Surface {
        &self.0
    }
}

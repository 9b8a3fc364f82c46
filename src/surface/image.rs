//! In-memory image surfaces with direct pixel access.

use std::mem;
use std::ops::Deref;
use std::ptr::NonNull;
use std::slice;

use libc::{c_int, c_void};

use super::Surface;
use crate::enums::{Format, SurfaceType};
use crate::error::{Error, Result};
use crate::ffi;

/// Key under which a caller-supplied pixel buffer is attached to the native
/// surface, so cairo frees it together with the handle.
static PIXEL_BUFFER_KEY: ffi::cairo_user_data_key_t = ffi::cairo_user_data_key_t { unused: 0 };

unsafe extern "C" fn drop_pixel_buffer(data: *mut c_void) {
    unsafe {
        drop(Box::from_raw(data as *mut Vec<u8>));
    }
}

/// A `Surface` rendered to a memory buffer.
#[derive(Clone, Debug)]
pub struct ImageSurface(pub(crate) Surface);

impl ImageSurface {
    /// Creates an image surface of the given format and size, with every
    /// pixel initially zero.
    pub fn new(format: Format, width: i32, height: i32) -> Result<ImageSurface> {
        let raw = unsafe { ffi::cairo_image_surface_create(format.into_raw(), width, height) };
        Ok(ImageSurface(Surface::from_raw_full(raw)?))
    }

    /// Creates an image surface over a caller-allocated pixel buffer.
    ///
    /// `stride` must be exactly what [`Format::stride_for_width`] reports for
    /// `format` and `width`, and the buffer must cover `stride * height`
    /// bytes. The buffer is handed to the native surface and freed when the
    /// last reference to it goes away.
    pub fn create_for_data(
        mut data: Vec<u8>,
        format: Format,
        width: i32,
        height: i32,
        stride: usize,
    ) -> Result<ImageSurface> {
        if stride != format.stride_for_width(width)? {
            return Err(Error::InvalidStride);
        }
        if height < 0 || data.len() < stride * height as usize {
            return Err(Error::InvalidStride);
        }

        let raw = unsafe {
            ffi::cairo_image_surface_create_for_data(
                data.as_mut_ptr(),
                format.into_raw(),
                width,
                height,
                stride as c_int,
            )
        };
        let surface = Surface::from_raw_full(raw)?;

        let buffer: *mut Vec<u8> = Box::into_raw(Box::new(data));
        let status = unsafe {
            ffi::cairo_surface_set_user_data(
                surface.to_raw(),
                &PIXEL_BUFFER_KEY,
                buffer as *mut c_void,
                Some(drop_pixel_buffer),
            )
        };
        if let Some(err) = Error::from_status(status) {
            // Release the handle before the buffer it points into.
            mem::drop(surface);
            unsafe {
                drop(Box::from_raw(buffer));
            }
            return Err(err);
        }
        Ok(ImageSurface(surface))
    }

    /// Whether this subtype can represent the given backend.
    pub fn backend_compatible(surface_type: SurfaceType) -> bool {
        surface_type == SurfaceType::Image
    }

    /// The pixel format, or `None` if the native handle reports a format
    /// unknown to this crate.
    pub fn format(&self) -> Option<Format> {
        Format::from_raw(unsafe { ffi::cairo_image_surface_get_format(self.0.to_raw()) })
    }

    /// Width in pixels.
    pub fn width(&self) -> i32 {
        unsafe { ffi::cairo_image_surface_get_width(self.0.to_raw()) }
    }

    /// Height in pixels.
    pub fn height(&self) -> i32 {
        unsafe { ffi::cairo_image_surface_get_height(self.0.to_raw()) }
    }

    /// Bytes per row, including any alignment padding.
    pub fn stride(&self) -> usize {
        unsafe { ffi::cairo_image_surface_get_stride(self.0.to_raw()) as usize }
    }

    /// Runs `modify` over the raw pixel rows, flushing pending drawing first
    /// and invalidating cairo's caches afterwards.
    pub fn with_data<F>(&mut self, modify: F) -> Result<()>
    where
        F: FnOnce(&mut [u8]),
    {
        self.0.status()?;
        self.0.flush();
        let data = unsafe { ffi::cairo_image_surface_get_data(self.0.to_raw()) };
        if data.is_null() {
            return Err(Error::NullPointer);
        }
        let len = self.stride() * self.height() as usize;
        modify(unsafe { slice::from_raw_parts_mut(data, len) });
        self.0.mark_dirty();
        Ok(())
    }

    /// A read-only view of the pixel buffer.
    ///
    /// The view holds its own reference to the surface, so the pixels stay
    /// valid for as long as the view exists, independent of this wrapper.
    pub fn data(&self) -> Result<ImageData> {
        self.0.status()?;
        self.0.flush();
        let data = unsafe { ffi::cairo_image_surface_get_data(self.0.to_raw()) };
        let ptr = NonNull::new(data).ok_or(Error::NullPointer)?;
        let len = self.stride() * self.height() as usize;
        Ok(ImageData {
            _surface: self.clone(),
            ptr,
            len,
        })
    }
}

impl TryFrom<Surface> for ImageSurface {
    type Error = Error;

    /// Downcasts a generic surface, failing with
    /// [`Error::SurfaceTypeMismatch`] if the backend is not the image one.
    fn try_from(surface: Surface) -> Result<ImageSurface> {
        match surface.surface_type() {
            Some(ty) if ImageSurface::backend_compatible(ty) => Ok(ImageSurface(surface)),
            _ => Err(Error::SurfaceTypeMismatch),
        }
    }
}

impl From<ImageSurface> for Surface {
    fn from(surface: ImageSurface) -> Surface {
        surface.0
    }
}

impl Deref for ImageSurface {
    type Target = Surface;

    fn deref(&self) -> &Surface {
        &self.0
    }
}

/// Shared-ownership view of an image surface's pixels.
pub struct ImageData {
    // Keeps the native buffer alive; the field itself is never read.
    _surface: ImageSurface,
    ptr: NonNull<u8>,
    len: usize,
}

impl Deref for ImageData {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }
}

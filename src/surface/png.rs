//! PNG encoding and decoding, file-based and streaming.
//!
//! The streaming variants speak cairo's read/write callback interface: an
//! `extern "C"` trampoline forwards each chunk to a Rust cursor (any
//! `io::Read` for decoding, a `Vec<u8>` for encoding). Reads must fill the
//! requested length exactly — coming up short is end-of-data and maps to
//! cairo's read-error status.

use std::io::{self, Read};
use std::path::Path;
use std::slice;

use libc::{c_uchar, c_uint, c_void};
use log::debug;

use super::{ImageSurface, Surface, path_to_cstring};
use crate::error::{Result, status_to_result};
use crate::ffi;

unsafe extern "C" fn write_to_vec(
    closure: *mut c_void,
    data: *const c_uchar,
    length: c_uint,
) -> ffi::cairo_status_t {
    let buffer = unsafe { &mut *(closure as *mut Vec<u8>) };
    let bytes = unsafe { slice::from_raw_parts(data, length as usize) };
    buffer.extend_from_slice(bytes);
    ffi::STATUS_SUCCESS
}

struct ReadEnv<'a, R: Read> {
    reader: &'a mut R,
    error: Option<io::Error>,
}

unsafe extern "C" fn read_from_reader<R: Read>(
    closure: *mut c_void,
    data: *mut c_uchar,
    length: c_uint,
) -> ffi::cairo_status_t {
    let env = unsafe { &mut *(closure as *mut ReadEnv<'_, R>) };
    let buffer = unsafe { slice::from_raw_parts_mut(data, length as usize) };
    match env.reader.read_exact(buffer) {
        Ok(()) => ffi::STATUS_SUCCESS,
        Err(err) => {
            env.error = Some(err);
            ffi::STATUS_READ_ERROR
        }
    }
}

impl Surface {
    /// Writes the surface contents to a PNG file.
    pub fn write_to_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let filename = path_to_cstring(path.as_ref())?;
        status_to_result(unsafe {
            ffi::cairo_surface_write_to_png(self.to_raw(), filename.as_ptr())
        })
    }

    /// Encodes the surface contents to an in-memory PNG.
    pub fn write_to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut buffer: Vec<u8> = Vec::new();
        let status = unsafe {
            ffi::cairo_surface_write_to_png_stream(
                self.to_raw(),
                Some(write_to_vec),
                &mut buffer as *mut Vec<u8> as *mut c_void,
            )
        };
        status_to_result(status)?;
        Ok(buffer)
    }
}

impl ImageSurface {
    /// Decodes a PNG file into a new image surface.
    ///
    /// Surfaces decoded from PNG always come back in a color format
    /// (`Argb32` or `Rgb24`), whatever the source format was.
    pub fn from_png<P: AsRef<Path>>(path: P) -> Result<ImageSurface> {
        let filename = path_to_cstring(path.as_ref())?;
        let raw = unsafe { ffi::cairo_image_surface_create_from_png(filename.as_ptr()) };
        Ok(ImageSurface(Surface::from_raw_full(raw)?))
    }

    /// Decodes PNG data read incrementally from `reader`.
    pub fn from_png_reader<R: Read>(reader: &mut R) -> Result<ImageSurface> {
        let mut env = ReadEnv {
            reader,
            error: None,
        };
        let raw = unsafe {
            ffi::cairo_image_surface_create_from_png_stream(
                Some(read_from_reader::<R>),
                &mut env as *mut ReadEnv<'_, R> as *mut c_void,
            )
        };
        match Surface::from_raw_full(raw) {
            Ok(surface) => Ok(ImageSurface(surface)),
            Err(err) => {
                if let Some(io_err) = env.error {
                    debug!("png stream read failed: {io_err}");
                }
                Err(err)
            }
        }
    }

    /// Decodes an in-memory PNG.
    pub fn from_png_bytes(mut bytes: &[u8]) -> Result<ImageSurface> {
        ImageSurface::from_png_reader(&mut bytes)
    }
}

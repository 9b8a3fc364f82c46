//! Immutable snapshots of path geometry.

use std::fmt;
use std::ptr::NonNull;
use std::slice;

use crate::error::{Error, Result, status_to_result};
use crate::ffi;

/// A copy of a context's path, taken at a point in time.
///
/// The snapshot owns its native `cairo_path_t` allocation and is never
/// mutated; request a fresh copy from the context to observe later changes.
pub struct Path {
    ptr: NonNull<ffi::cairo_path_t>,
}

/// One decoded element of a path snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo((f64, f64)),
    LineTo((f64, f64)),
    /// Two control points followed by the end point.
    CurveTo((f64, f64), (f64, f64), (f64, f64)),
    ClosePath,
}

impl Path {
    pub(crate) fn from_raw_full(raw: *mut ffi::cairo_path_t) -> Result<Path> {
        let ptr = NonNull::new(raw).ok_or(Error::NoMemory)?;
        let path = Path { ptr };
        path.status()?;
        Ok(path)
    }

    /// The status recorded in the snapshot at copy time.
    pub fn status(&self) -> Result<()> {
        status_to_result(unsafe { self.ptr.as_ref().status })
    }

    fn data(&self) -> &[ffi::cairo_path_data_t] {
        let path = unsafe { self.ptr.as_ref() };
        if path.data.is_null() || path.num_data <= 0 {
            return &[];
        }
        unsafe { slice::from_raw_parts(path.data, path.num_data as usize) }
    }

    /// Number of raw path-data records (headers plus coordinate pairs).
    pub fn num_data(&self) -> usize {
        self.data().len()
    }

    /// Iterates the decoded segments.
    pub fn iter(&self) -> PathSegments<'_> {
        PathSegments {
            data: self.data(),
            index: 0,
        }
    }
}

impl Drop for Path {
    fn drop(&mut self) {
        unsafe {
            ffi::cairo_path_destroy(self.ptr.as_ptr());
        }
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = PathSegment;
    type IntoIter = PathSegments<'a>;

    fn into_iter(self) -> PathSegments<'a> {
        self.iter()
    }
}

/// Iterator over [`PathSegment`]s, decoding cairo's tagged-union records:
/// each header element announces its kind and total record length, followed
/// by `length - 1` coordinate elements.
pub struct PathSegments<'a> {
    data: &'a [ffi::cairo_path_data_t],
    index: usize,
}

impl PathSegments<'_> {
    fn point(&self, offset: usize) -> Option<(f64, f64)> {
        let element = self.data.get(self.index + offset)?;
        let point = unsafe { element.point };
        Some((point.x, point.y))
    }
}

impl Iterator for PathSegments<'_> {
    type Item = PathSegment;

    fn next(&mut self) -> Option<PathSegment> {
        let header = unsafe { self.data.get(self.index)?.header };
        let segment = match header.data_type {
            0 => PathSegment::MoveTo(self.point(1)?),
            1 => PathSegment::LineTo(self.point(1)?),
            2 => PathSegment::CurveTo(self.point(1)?, self.point(2)?, self.point(3)?),
            3 => PathSegment::ClosePath,
            // A record kind this crate does not know; stop rather than
            // misread the remaining elements.
            _ => return None,
        };
        // The header's length governs the advance, not the segment kind.
        self.index += (header.length.max(1)) as usize;
        Some(segment)
    }
}

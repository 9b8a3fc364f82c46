//! FreeType/Fontconfig interop, behind the `freetype` feature.

use crate::error::{Error, Result};
use crate::ffi;
use crate::font::{FontFace, ScaledFont};

impl FontFace {
    /// Creates a face from a resolved Fontconfig pattern.
    ///
    /// # Safety
    ///
    /// `pattern` must point to a valid `FcPattern` that has been through
    /// `FcConfigSubstitute` and `FcDefaultSubstitute`. Cairo copies what it
    /// needs; the caller keeps ownership of the pattern.
    pub unsafe fn from_fontconfig_pattern(pattern: *mut ffi::ft::FcPattern) -> Result<FontFace> {
        FontFace::from_raw_full(unsafe { ffi::ft::cairo_ft_font_face_create_for_pattern(pattern) })
    }
}

/// Scoped access to the FreeType `FT_Face` behind a [`ScaledFont`].
///
/// Cairo requires every lock of the underlying face to be paired with an
/// unlock before cairo touches the font again; the guard unlocks on drop,
/// and borrowing the scaled font keeps other use of it out of the locked
/// region.
pub struct FtFaceGuard<'a> {
    scaled: &'a ScaledFont,
    face: ffi::ft::FT_Face,
}

impl ScaledFont {
    /// Locks the underlying FreeType face for direct use.
    ///
    /// Fails with [`Error::FontTypeMismatch`] when this scaled font is not
    /// backed by FreeType.
    pub fn lock_ft_face(&self) -> Result<FtFaceGuard<'_>> {
        let face = unsafe { ffi::ft::cairo_ft_scaled_font_lock_face(self.to_raw()) };
        if face.is_null() {
            self.status()?;
            return Err(Error::FontTypeMismatch);
        }
        Ok(FtFaceGuard { scaled: self, face })
    }
}

impl FtFaceGuard<'_> {
    /// The raw `FT_Face`, valid until the guard drops.
    pub fn as_ptr(&self) -> ffi::ft::FT_Face {
        self.face
    }
}

impl Drop for FtFaceGuard<'_> {
    fn drop(&mut self) {
        unsafe {
            ffi::ft::cairo_ft_scaled_font_unlock_face(self.scaled.to_raw());
        }
    }
}

//! Translation of cairo's integer status domain into a closed error enum.
//!
//! Cairo reports most failures by latching a status code on the object that
//! failed rather than returning an error from each call. The wrappers keep
//! that model: drawing operations stay infallible at the call site and each
//! handle type exposes a `status()` accessor that polls the latched code
//! through [`status_to_result`]. Construction-time failures (allocation,
//! file open, decode) are the exception and surface immediately as `Err`.

use std::ffi::CStr;

use log::warn;
use thiserror::Error;

use crate::ffi;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// One variant per defined non-success cairo status code.
///
/// The numeric mapping follows cairo's header exactly; `Unknown` captures
/// any code this build of the crate does not recognize, so an unrecognized
/// status is never mistaken for success.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("out of memory")]
    NoMemory,
    #[error("cairo_restore() without matching cairo_save()")]
    InvalidRestore,
    #[error("no saved group to pop, i.e. cairo_pop_group() without matching cairo_push_group()")]
    InvalidPopGroup,
    #[error("no current point defined")]
    NoCurrentPoint,
    #[error("invalid matrix (not invertible)")]
    InvalidMatrix,
    #[error("invalid value for an input status")]
    InvalidStatus,
    #[error("null pointer")]
    NullPointer,
    #[error("input string not valid UTF-8")]
    InvalidString,
    #[error("input path data not valid")]
    InvalidPathData,
    #[error("error while reading from input stream")]
    ReadError,
    #[error("error while writing to output stream")]
    WriteError,
    #[error("the target surface has been finished")]
    SurfaceFinished,
    #[error("the surface type is not appropriate for the operation")]
    SurfaceTypeMismatch,
    #[error("the pattern type is not appropriate for the operation")]
    PatternTypeMismatch,
    #[error("invalid value for an input content")]
    InvalidContent,
    #[error("invalid value for an input format")]
    InvalidFormat,
    #[error("invalid value for an input visual")]
    InvalidVisual,
    #[error("file not found")]
    FileNotFound,
    #[error("invalid value for a dash setting")]
    InvalidDash,
    #[error("invalid value for a DSC comment")]
    InvalidDscComment,
    #[error("invalid index passed to getter")]
    InvalidIndex,
    #[error("clip region not representable in desired format")]
    ClipNotRepresentable,
    #[error("error creating or writing to a temporary file")]
    TempFileError,
    #[error("invalid value for stride")]
    InvalidStride,
    #[error("the font type is not appropriate for the operation")]
    FontTypeMismatch,
    #[error("the user-font is immutable")]
    UserFontImmutable,
    #[error("error occurred in a user-font callback function")]
    UserFontError,
    #[error("negative number used where it is not allowed")]
    NegativeCount,
    #[error("input clusters do not represent the accompanying text and glyph arrays")]
    InvalidClusters,
    #[error("invalid value for an input font slant")]
    InvalidSlant,
    #[error("invalid value for an input font weight")]
    InvalidWeight,
    #[error("invalid value (typically too big) for a font size")]
    InvalidSize,
    #[error("user-font method not implemented")]
    UserFontNotImplemented,
    #[error("the device type is not appropriate for the operation")]
    DeviceTypeMismatch,
    #[error("an operation to the device caused an unspecified error")]
    DeviceError,
    #[error("a mesh pattern construction operation was used outside of a begin/end pair")]
    InvalidMeshConstruction,
    #[error("the target device has been finished")]
    DeviceFinished,
    #[error("JBIG2_GLOBAL_MISSING used but no global data available")]
    Jbig2GlobalMissing,
    #[error("error occurred in libpng while reading or writing PNG")]
    PngError,
    #[error("error occurred in libfreetype")]
    FreetypeError,
    #[error("error occurred in the Windows GDI")]
    Win32GdiError,
    #[error("invalid tag name, attributes, or nesting")]
    TagError,
    #[error("error occurred in DirectWrite")]
    DwriteError,
    #[error("error occurred in an OpenType-SVG font")]
    SvgFontError,
    #[error("unrecognized cairo status code {0}")]
    Unknown(i32),
}

impl Error {
    /// Maps a raw status code to an error, or `None` for success.
    ///
    /// Every non-zero code yields `Some`; codes outside the range this crate
    /// was written against come back as [`Error::Unknown`].
    pub fn from_status(status: ffi::cairo_status_t) -> Option<Error> {
        Some(match status {
            ffi::STATUS_SUCCESS => return None,
            1 => Error::NoMemory,
            2 => Error::InvalidRestore,
            3 => Error::InvalidPopGroup,
            4 => Error::NoCurrentPoint,
            5 => Error::InvalidMatrix,
            6 => Error::InvalidStatus,
            7 => Error::NullPointer,
            8 => Error::InvalidString,
            9 => Error::InvalidPathData,
            10 => Error::ReadError,
            11 => Error::WriteError,
            12 => Error::SurfaceFinished,
            13 => Error::SurfaceTypeMismatch,
            14 => Error::PatternTypeMismatch,
            15 => Error::InvalidContent,
            16 => Error::InvalidFormat,
            17 => Error::InvalidVisual,
            18 => Error::FileNotFound,
            19 => Error::InvalidDash,
            20 => Error::InvalidDscComment,
            21 => Error::InvalidIndex,
            22 => Error::ClipNotRepresentable,
            23 => Error::TempFileError,
            24 => Error::InvalidStride,
            25 => Error::FontTypeMismatch,
            26 => Error::UserFontImmutable,
            27 => Error::UserFontError,
            28 => Error::NegativeCount,
            29 => Error::InvalidClusters,
            30 => Error::InvalidSlant,
            31 => Error::InvalidWeight,
            32 => Error::InvalidSize,
            33 => Error::UserFontNotImplemented,
            34 => Error::DeviceTypeMismatch,
            35 => Error::DeviceError,
            36 => Error::InvalidMeshConstruction,
            37 => Error::DeviceFinished,
            38 => Error::Jbig2GlobalMissing,
            39 => Error::PngError,
            40 => Error::FreetypeError,
            41 => Error::Win32GdiError,
            42 => Error::TagError,
            43 => Error::DwriteError,
            44 => Error::SvgFontError,
            other => {
                warn!("unrecognized cairo status code {other}");
                Error::Unknown(other)
            }
        })
    }

    /// The raw status code this error corresponds to.
    pub fn to_status(self) -> ffi::cairo_status_t {
        match self {
            Error::NoMemory => 1,
            Error::InvalidRestore => 2,
            Error::InvalidPopGroup => 3,
            Error::NoCurrentPoint => 4,
            Error::InvalidMatrix => 5,
            Error::InvalidStatus => 6,
            Error::NullPointer => 7,
            Error::InvalidString => 8,
            Error::InvalidPathData => 9,
            Error::ReadError => 10,
            Error::WriteError => 11,
            Error::SurfaceFinished => 12,
            Error::SurfaceTypeMismatch => 13,
            Error::PatternTypeMismatch => 14,
            Error::InvalidContent => 15,
            Error::InvalidFormat => 16,
            Error::InvalidVisual => 17,
            Error::FileNotFound => 18,
            Error::InvalidDash => 19,
            Error::InvalidDscComment => 20,
            Error::InvalidIndex => 21,
            Error::ClipNotRepresentable => 22,
            Error::TempFileError => 23,
            Error::InvalidStride => 24,
            Error::FontTypeMismatch => 25,
            Error::UserFontImmutable => 26,
            Error::UserFontError => 27,
            Error::NegativeCount => 28,
            Error::InvalidClusters => 29,
            Error::InvalidSlant => 30,
            Error::InvalidWeight => 31,
            Error::InvalidSize => 32,
            Error::UserFontNotImplemented => 33,
            Error::DeviceTypeMismatch => 34,
            Error::DeviceError => 35,
            Error::InvalidMeshConstruction => 36,
            Error::DeviceFinished => 37,
            Error::Jbig2GlobalMissing => 38,
            Error::PngError => 39,
            Error::FreetypeError => 40,
            Error::Win32GdiError => 41,
            Error::TagError => 42,
            Error::DwriteError => 43,
            Error::SvgFontError => 44,
            Error::Unknown(code) => code,
        }
    }

    /// Cairo's own human-readable description of the underlying status code.
    ///
    /// This goes through `cairo_status_to_string`, so the wording comes from
    /// the linked library rather than from this crate's `Display` impl.
    pub fn native_message(self) -> String {
        unsafe {
            let message = ffi::cairo_status_to_string(self.to_status());
            if message.is_null() {
                return String::from("unknown status");
            }
            CStr::from_ptr(message).to_string_lossy().into_owned()
        }
    }
}

/// Turns a raw status code into `Ok(())` or the matching error.
pub fn status_to_result(status: ffi::cairo_status_t) -> Result<()> {
    match Error::from_status(status) {
        None => Ok(()),
        Some(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_maps_to_none() {
        assert_eq!(Error::from_status(0), None);
        assert!(status_to_result(0).is_ok());
    }

    #[test]
    fn known_codes_round_trip() {
        for code in 1..=44 {
            let err = Error::from_status(code).unwrap();
            assert_eq!(err.to_status(), code, "code {code} did not round-trip");
            assert!(!matches!(err, Error::Unknown(_)), "code {code} mapped to Unknown");
        }
    }

    #[test]
    fn out_of_range_code_is_flagged() {
        assert_eq!(Error::from_status(999), Some(Error::Unknown(999)));
        assert_eq!(Error::Unknown(999).to_status(), 999);
    }

    #[test]
    fn native_message_matches_cairo() {
        // The linked library describes code 1 as a memory failure.
        let message = Error::NoMemory.native_message();
        assert!(message.to_lowercase().contains("memory"), "got: {message}");
    }
}

//! Per-font rendering options.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ptr::NonNull;

use crate::enums::{Antialias, HintMetrics, HintStyle, SubpixelOrder, from_raw_or_default};
use crate::error::{Error, Result, status_to_result};
use crate::ffi;

/// How a font should be rendered: antialiasing, hinting and subpixel
/// layout.
///
/// Unlike the reference-counted handles, options are plain value objects
/// on the native side; [`Clone`] makes a deep copy. Not thread-safe.
pub struct FontOptions {
    ptr: NonNull<ffi::cairo_font_options_t>,
}

impl FontOptions {
    /// Creates options with every field at its backend default.
    pub fn new() -> Result<FontOptions> {
        let ptr = NonNull::new(unsafe { ffi::cairo_font_options_create() })
            .ok_or(Error::NoMemory)?;
        let options = FontOptions { ptr };
        options.status()?;
        Ok(options)
    }

    pub(crate) fn to_raw(&self) -> *mut ffi::cairo_font_options_t {
        self.ptr.as_ptr()
    }

    /// Overwrites every field of `self` that `other` sets to a
    /// non-default value.
    pub fn merge(&mut self, other: &FontOptions) {
        unsafe {
            ffi::cairo_font_options_merge(self.to_raw(), other.to_raw());
        }
    }

    pub fn set_antialias(&mut self, antialias: Antialias) {
        unsafe {
            ffi::cairo_font_options_set_antialias(self.to_raw(), antialias.into_raw());
        }
    }

    pub fn antialias(&self) -> Antialias {
        let raw = unsafe { ffi::cairo_font_options_get_antialias(self.to_raw()) };
        from_raw_or_default(Antialias::from_raw(raw), raw, "antialias")
    }

    pub fn set_subpixel_order(&mut self, order: SubpixelOrder) {
        unsafe {
            ffi::cairo_font_options_set_subpixel_order(self.to_raw(), order.into_raw());
        }
    }

    pub fn subpixel_order(&self) -> SubpixelOrder {
        let raw = unsafe { ffi::cairo_font_options_get_subpixel_order(self.to_raw()) };
        from_raw_or_default(SubpixelOrder::from_raw(raw), raw, "subpixel order")
    }

    pub fn set_hint_style(&mut self, style: HintStyle) {
        unsafe {
            ffi::cairo_font_options_set_hint_style(self.to_raw(), style.into_raw());
        }
    }

    pub fn hint_style(&self) -> HintStyle {
        let raw = unsafe { ffi::cairo_font_options_get_hint_style(self.to_raw()) };
        from_raw_or_default(HintStyle::from_raw(raw), raw, "hint style")
    }

    pub fn set_hint_metrics(&mut self, metrics: HintMetrics) {
        unsafe {
            ffi::cairo_font_options_set_hint_metrics(self.to_raw(), metrics.into_raw());
        }
    }

    pub fn hint_metrics(&self) -> HintMetrics {
        let raw = unsafe { ffi::cairo_font_options_get_hint_metrics(self.to_raw()) };
        from_raw_or_default(HintMetrics::from_raw(raw), raw, "hint metrics")
    }

    /// Polls the error latched on these options, if any.
    pub fn status(&self) -> Result<()> {
        status_to_result(unsafe { ffi::cairo_font_options_status(self.to_raw()) })
    }
}

impl Clone for FontOptions {
    fn clone(&self) -> FontOptions {
        let raw = unsafe { ffi::cairo_font_options_copy(self.to_raw()) };
        // On allocation failure cairo hands back a preallocated error
        // object, never null.
        match NonNull::new(raw) {
            Some(ptr) => FontOptions { ptr },
            None => unreachable!("cairo_font_options_copy returned null"),
        }
    }
}

impl Drop for FontOptions {
    fn drop(&mut self) {
        unsafe {
            ffi::cairo_font_options_destroy(self.to_raw());
        }
    }
}

impl PartialEq for FontOptions {
    fn eq(&self, other: &FontOptions) -> bool {
        unsafe { ffi::cairo_font_options_equal(self.to_raw(), other.to_raw()) != 0 }
    }
}

impl Eq for FontOptions {}

impl Hash for FontOptions {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let native = unsafe { ffi::cairo_font_options_hash(self.to_raw()) };
        native.hash(state);
    }
}

impl fmt::Debug for FontOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontOptions")
            .field("antialias", &self.antialias())
            .field("subpixel_order", &self.subpixel_order())
            .field("hint_style", &self.hint_style())
            .field("hint_metrics", &self.hint_metrics())
            .finish()
    }
}

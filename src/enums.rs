//! Safe mirrors of cairo's enumerated domains.
//!
//! Each enum carries the exact discriminants from cairo's headers and
//! converts to/from the raw `c_int` representation at the FFI boundary.
//! Getters tolerate values from a newer libcairo by falling back to the
//! documented default with a warning instead of inventing a variant.

use libc::c_int;
use log::warn;

use crate::error::{Error, Result};
use crate::ffi;

/// Resolves a raw enum value read back from cairo, falling back to the
/// default variant if the linked library reports something newer than this
/// crate knows about.
pub(crate) fn from_raw_or_default<T: Default>(value: Option<T>, raw: c_int, what: &str) -> T {
    value.unwrap_or_else(|| {
        warn!("unexpected {what} value {raw} reported by cairo");
        T::default()
    })
}

/// Whether a surface holds color, alpha, or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Content {
    Color,
    Alpha,
    ColorAlpha,
}

impl Content {
    pub(crate) fn from_raw(raw: c_int) -> Option<Self> {
        match raw {
            0x1000 => Some(Content::Color),
            0x2000 => Some(Content::Alpha),
            0x3000 => Some(Content::ColorAlpha),
            _ => None,
        }
    }

    pub(crate) fn into_raw(self) -> c_int {
        match self {
            Content::Color => 0x1000,
            Content::Alpha => 0x2000,
            Content::ColorAlpha => 0x3000,
        }
    }
}

impl Default for Content {
    fn default() -> Self {
        Content::ColorAlpha
    }
}

/// Memory layout of image surface pixels.
///
/// `Argb32` is 32 bits per pixel, native-endian, with premultiplied alpha in
/// the top byte (50% transparent red is `0x80800000`, not `0x80ff0000`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Argb32,
    Rgb24,
    A8,
    A1,
    Rgb16_565,
    Rgb30,
}

impl Format {
    pub(crate) fn from_raw(raw: c_int) -> Option<Self> {
        match raw {
            0 => Some(Format::Argb32),
            1 => Some(Format::Rgb24),
            2 => Some(Format::A8),
            3 => Some(Format::A1),
            4 => Some(Format::Rgb16_565),
            5 => Some(Format::Rgb30),
            _ => None,
        }
    }

    pub(crate) fn into_raw(self) -> c_int {
        match self {
            Format::Argb32 => 0,
            Format::Rgb24 => 1,
            Format::A8 => 2,
            Format::A1 => 3,
            Format::Rgb16_565 => 4,
            Format::Rgb30 => 5,
        }
    }

    /// The stride cairo requires for an image of this format and width,
    /// including the library's platform alignment rules. Externally allocated
    /// pixel buffers must match this value exactly.
    pub fn stride_for_width(self, width: i32) -> Result<usize> {
        let stride = unsafe { ffi::cairo_format_stride_for_width(self.into_raw(), width) };
        if stride < 0 {
            return Err(Error::InvalidStride);
        }
        Ok(stride as usize)
    }
}

/// Surface backend kinds, read back from a live handle.
///
/// The set is closed: it mirrors every backend cairo has ever compiled in,
/// whether or not this crate can construct it. Unrecognized values surface
/// as `None` from the accessor rather than as a fabricated variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceType {
    Image,
    Pdf,
    Ps,
    Xlib,
    Xcb,
    Glitz,
    Quartz,
    Win32,
    Beos,
    Directfb,
    Svg,
    Os2,
    Win32Printing,
    QuartzImage,
    Script,
    Qt,
    Recording,
    Vg,
    Gl,
    Drm,
    Tee,
    Xml,
    Skia,
    Subsurface,
    Cogl,
}

impl SurfaceType {
    pub(crate) fn from_raw(raw: c_int) -> Option<Self> {
        use SurfaceType::*;
        Some(match raw {
            0 => Image,
            1 => Pdf,
            2 => Ps,
            3 => Xlib,
            4 => Xcb,
            5 => Glitz,
            6 => Quartz,
            7 => Win32,
            8 => Beos,
            9 => Directfb,
            10 => Svg,
            11 => Os2,
            12 => Win32Printing,
            13 => QuartzImage,
            14 => Script,
            15 => Qt,
            16 => Recording,
            17 => Vg,
            18 => Gl,
            19 => Drm,
            20 => Tee,
            21 => Xml,
            22 => Skia,
            23 => Subsurface,
            24 => Cogl,
            _ => return None,
        })
    }
}

/// Pattern kinds, read back from a live handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternType {
    Solid,
    Surface,
    Linear,
    Radial,
    Mesh,
    RasterSource,
}

impl PatternType {
    pub(crate) fn from_raw(raw: c_int) -> Option<Self> {
        match raw {
            0 => Some(PatternType::Solid),
            1 => Some(PatternType::Surface),
            2 => Some(PatternType::Linear),
            3 => Some(PatternType::Radial),
            4 => Some(PatternType::Mesh),
            5 => Some(PatternType::RasterSource),
            _ => None,
        }
    }
}

/// How a pattern repeats outside its natural area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Extend {
    #[default]
    None,
    Repeat,
    Reflect,
    Pad,
}

impl Extend {
    pub(crate) fn from_raw(raw: c_int) -> Option<Self> {
        match raw {
            0 => Some(Extend::None),
            1 => Some(Extend::Repeat),
            2 => Some(Extend::Reflect),
            3 => Some(Extend::Pad),
            _ => None,
        }
    }

    pub(crate) fn into_raw(self) -> c_int {
        match self {
            Extend::None => 0,
            Extend::Repeat => 1,
            Extend::Reflect => 2,
            Extend::Pad => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillRule {
    #[default]
    Winding,
    EvenOdd,
}

impl FillRule {
    pub(crate) fn from_raw(raw: c_int) -> Option<Self> {
        match raw {
            0 => Some(FillRule::Winding),
            1 => Some(FillRule::EvenOdd),
            _ => None,
        }
    }

    pub(crate) fn into_raw(self) -> c_int {
        match self {
            FillRule::Winding => 0,
            FillRule::EvenOdd => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

impl LineCap {
    pub(crate) fn from_raw(raw: c_int) -> Option<Self> {
        match raw {
            0 => Some(LineCap::Butt),
            1 => Some(LineCap::Round),
            2 => Some(LineCap::Square),
            _ => None,
        }
    }

    pub(crate) fn into_raw(self) -> c_int {
        match self {
            LineCap::Butt => 0,
            LineCap::Round => 1,
            LineCap::Square => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

impl LineJoin {
    pub(crate) fn from_raw(raw: c_int) -> Option<Self> {
        match raw {
            0 => Some(LineJoin::Miter),
            1 => Some(LineJoin::Round),
            2 => Some(LineJoin::Bevel),
            _ => None,
        }
    }

    pub(crate) fn into_raw(self) -> c_int {
        match self {
            LineJoin::Miter => 0,
            LineJoin::Round => 1,
            LineJoin::Bevel => 2,
        }
    }
}

/// Compositing operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Operator {
    Clear,
    Source,
    #[default]
    Over,
    In,
    Out,
    Atop,
    Dest,
    DestOver,
    DestIn,
    DestOut,
    DestAtop,
    Xor,
    Add,
    Saturate,
    Multiply,
    Screen,
    Overlay,
    Darken,
    Lighten,
    ColorDodge,
    ColorBurn,
    HardLight,
    SoftLight,
    Difference,
    Exclusion,
    HslHue,
    HslSaturation,
    HslColor,
    HslLuminosity,
}

impl Operator {
    pub(crate) fn from_raw(raw: c_int) -> Option<Self> {
        use Operator::*;
        Some(match raw {
            0 => Clear,
            1 => Source,
            2 => Over,
            3 => In,
            4 => Out,
            5 => Atop,
            6 => Dest,
            7 => DestOver,
            8 => DestIn,
            9 => DestOut,
            10 => DestAtop,
            11 => Xor,
            12 => Add,
            13 => Saturate,
            14 => Multiply,
            15 => Screen,
            16 => Overlay,
            17 => Darken,
            18 => Lighten,
            19 => ColorDodge,
            20 => ColorBurn,
            21 => HardLight,
            22 => SoftLight,
            23 => Difference,
            24 => Exclusion,
            25 => HslHue,
            26 => HslSaturation,
            27 => HslColor,
            28 => HslLuminosity,
            _ => return None,
        })
    }

    pub(crate) fn into_raw(self) -> c_int {
        use Operator::*;
        match self {
            Clear => 0,
            Source => 1,
            Over => 2,
            In => 3,
            Out => 4,
            Atop => 5,
            Dest => 6,
            DestOver => 7,
            DestIn => 8,
            DestOut => 9,
            DestAtop => 10,
            Xor => 11,
            Add => 12,
            Saturate => 13,
            Multiply => 14,
            Screen => 15,
            Overlay => 16,
            Darken => 17,
            Lighten => 18,
            ColorDodge => 19,
            ColorBurn => 20,
            HardLight => 21,
            SoftLight => 22,
            Difference => 23,
            Exclusion => 24,
            HslHue => 25,
            HslSaturation => 26,
            HslColor => 27,
            HslLuminosity => 28,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Antialias {
    #[default]
    Default,
    None,
    Gray,
    Subpixel,
    Fast,
    Good,
    Best,
}

impl Antialias {
    pub(crate) fn from_raw(raw: c_int) -> Option<Self> {
        match raw {
            0 => Some(Antialias::Default),
            1 => Some(Antialias::None),
            2 => Some(Antialias::Gray),
            3 => Some(Antialias::Subpixel),
            4 => Some(Antialias::Fast),
            5 => Some(Antialias::Good),
            6 => Some(Antialias::Best),
            _ => None,
        }
    }

    pub(crate) fn into_raw(self) -> c_int {
        match self {
            Antialias::Default => 0,
            Antialias::None => 1,
            Antialias::Gray => 2,
            Antialias::Subpixel => 3,
            Antialias::Fast => 4,
            Antialias::Good => 5,
            Antialias::Best => 6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontSlant {
    #[default]
    Normal,
    Italic,
    Oblique,
}

impl FontSlant {
    pub(crate) fn from_raw(raw: c_int) -> Option<Self> {
        match raw {
            0 => Some(FontSlant::Normal),
            1 => Some(FontSlant::Italic),
            2 => Some(FontSlant::Oblique),
            _ => None,
        }
    }

    pub(crate) fn into_raw(self) -> c_int {
        match self {
            FontSlant::Normal => 0,
            FontSlant::Italic => 1,
            FontSlant::Oblique => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    pub(crate) fn from_raw(raw: c_int) -> Option<Self> {
        match raw {
            0 => Some(FontWeight::Normal),
            1 => Some(FontWeight::Bold),
            _ => None,
        }
    }

    pub(crate) fn into_raw(self) -> c_int {
        match self {
            FontWeight::Normal => 0,
            FontWeight::Bold => 1,
        }
    }
}

/// Font backend behind a face or scaled font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontType {
    Toy,
    FreeType,
    Win32,
    Quartz,
    User,
    Dwrite,
}

impl FontType {
    pub(crate) fn from_raw(raw: c_int) -> Option<Self> {
        match raw {
            0 => Some(FontType::Toy),
            1 => Some(FontType::FreeType),
            2 => Some(FontType::Win32),
            3 => Some(FontType::Quartz),
            4 => Some(FontType::User),
            5 => Some(FontType::Dwrite),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HintStyle {
    #[default]
    Default,
    None,
    Slight,
    Medium,
    Full,
}

impl HintStyle {
    pub(crate) fn from_raw(raw: c_int) -> Option<Self> {
        match raw {
            0 => Some(HintStyle::Default),
            1 => Some(HintStyle::None),
            2 => Some(HintStyle::Slight),
            3 => Some(HintStyle::Medium),
            4 => Some(HintStyle::Full),
            _ => None,
        }
    }

    pub(crate) fn into_raw(self) -> c_int {
        match self {
            HintStyle::Default => 0,
            HintStyle::None => 1,
            HintStyle::Slight => 2,
            HintStyle::Medium => 3,
            HintStyle::Full => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HintMetrics {
    #[default]
    Default,
    Off,
    On,
}

impl HintMetrics {
    pub(crate) fn from_raw(raw: c_int) -> Option<Self> {
        match raw {
            0 => Some(HintMetrics::Default),
            1 => Some(HintMetrics::Off),
            2 => Some(HintMetrics::On),
            _ => None,
        }
    }

    pub(crate) fn into_raw(self) -> c_int {
        match self {
            HintMetrics::Default => 0,
            HintMetrics::Off => 1,
            HintMetrics::On => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubpixelOrder {
    #[default]
    Default,
    Rgb,
    Bgr,
    Vrgb,
    Vbgr,
}

impl SubpixelOrder {
    pub(crate) fn from_raw(raw: c_int) -> Option<Self> {
        match raw {
            0 => Some(SubpixelOrder::Default),
            1 => Some(SubpixelOrder::Rgb),
            2 => Some(SubpixelOrder::Bgr),
            3 => Some(SubpixelOrder::Vrgb),
            4 => Some(SubpixelOrder::Vbgr),
            _ => None,
        }
    }

    pub(crate) fn into_raw(self) -> c_int {
        match self {
            SubpixelOrder::Default => 0,
            SubpixelOrder::Rgb => 1,
            SubpixelOrder::Bgr => 2,
            SubpixelOrder::Vrgb => 3,
            SubpixelOrder::Vbgr => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_discriminants_match_header() {
        assert_eq!(Content::Color.into_raw(), 0x1000);
        assert_eq!(Content::ColorAlpha.into_raw(), 0x3000);
        assert_eq!(Content::from_raw(0x2000), Some(Content::Alpha));
        assert_eq!(Content::from_raw(0), None);
    }

    #[test]
    fn format_round_trips() {
        for format in [
            Format::Argb32,
            Format::Rgb24,
            Format::A8,
            Format::A1,
            Format::Rgb16_565,
            Format::Rgb30,
        ] {
            assert_eq!(Format::from_raw(format.into_raw()), Some(format));
        }
        assert_eq!(Format::from_raw(-1), None);
    }

    #[test]
    fn argb32_stride_is_four_bytes_per_pixel() {
        // ARGB32 rows are 4 * width rounded up to cairo's alignment, so for
        // power-of-two widths the stride is exact.
        assert_eq!(Format::Argb32.stride_for_width(64).unwrap(), 256);
    }

    #[test]
    fn unknown_state_value_falls_back_to_default() {
        let rule: FillRule = from_raw_or_default(FillRule::from_raw(99), 99, "fill rule");
        assert_eq!(rule, FillRule::Winding);
    }
}

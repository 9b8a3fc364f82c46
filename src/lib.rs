//! Safe Rust bindings for the cairo 2D graphics library.
//!
//! Wraps cairo's reference-counted C handles in owning Rust types: a
//! [`Context`] draws onto a [`Surface`] through sources described by
//! [`Pattern`]s, with [`Matrix`] transformations and the font types from
//! [`font`] covering text. Each wrapper pairs exactly one native reference
//! with its own lifetime, cloning takes a new reference and dropping
//! releases one, so handles may be shared freely on a single thread.
//!
//! Cairo reports most failures by latching an error status on the affected
//! object instead of failing each call; constructors translate that status
//! eagerly into [`Error`], and every wrapper exposes a `status` method for
//! polling afterwards.
//!
//! None of the types here are `Send` or `Sync`: cairo objects are not
//! internally locked, so each object stays on the thread that made it.

pub mod context;
pub mod enums;
pub mod error;
pub mod font;
pub mod matrix;
pub mod path;
pub mod pattern;
pub mod surface;

pub mod ffi;

pub use context::Context;
pub use enums::{
    Antialias, Content, Extend, FillRule, FontSlant, FontType, FontWeight, Format, HintMetrics,
    HintStyle, LineCap, LineJoin, Operator, PatternType, SubpixelOrder, SurfaceType,
};
pub use error::{Error, Result};
pub use font::{FontExtents, FontFace, FontOptions, Glyph, ScaledFont, TextExtents};
pub use matrix::Matrix;
pub use path::{Path, PathSegment};
pub use pattern::Pattern;
pub use surface::{ImageData, ImageSurface, Surface};

#[cfg(feature = "pdf")]
pub use surface::PdfSurface;

#[cfg(feature = "svg")]
pub use surface::SvgSurface;

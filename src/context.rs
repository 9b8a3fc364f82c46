//! The stateful drawing context.

use std::ffi::CString;
use std::fmt;
use std::ptr::NonNull;

use libc::c_int;

use crate::enums::{
    Antialias, Content, FillRule, FontSlant, FontWeight, LineCap, LineJoin, Operator,
    from_raw_or_default,
};
use crate::error::{Error, Result, status_to_result};
use crate::ffi;
use crate::font::{FontExtents, FontFace, Glyph, ScaledFont, TextExtents};
use crate::matrix::Matrix;
use crate::path::Path;
use crate::pattern::Pattern;
use crate::surface::Surface;

/// Sequences drawing operations against a target [`Surface`].
///
/// Every method forwards directly into cairo. Failures of drawing
/// operations do not surface at the call site: cairo latches an error on
/// the context and subsequent operations become no-ops, so callers poll
/// [`Context::status`] when they care. Construction is the exception and
/// fails eagerly.
///
/// The context keeps a strong (reference-counted) clone of its target
/// surface for its whole lifetime, so the target always outlives the
/// context on the Rust side as well as the native side.
///
/// Not thread-safe; callers must serialize access per object.
pub struct Context {
    ptr: NonNull<ffi::cairo_t>,
    surface: Surface,
}

impl Context {
    /// Creates a context with all graphics state at defaults, targeting
    /// `surface`.
    pub fn new(surface: &Surface) -> Result<Context> {
        let raw = unsafe { ffi::cairo_create(surface.to_raw()) };
        let ptr = NonNull::new(raw).ok_or(Error::NoMemory)?;
        let context = Context {
            ptr,
            surface: surface.clone(),
        };
        context.status()?;
        Ok(context)
    }

    fn to_raw(&self) -> *mut ffi::cairo_t {
        self.ptr.as_ptr()
    }

    /// The surface this context was created for.
    pub fn target(&self) -> &Surface {
        &self.surface
    }

    /// Polls the error latched on this context, if any.
    pub fn status(&self) -> Result<()> {
        status_to_result(unsafe { ffi::cairo_status(self.to_raw()) })
    }

    /// The native reference count, exposed for lifetime tests.
    pub fn reference_count(&self) -> u32 {
        unsafe { ffi::cairo_get_reference_count(self.to_raw()) }
    }

    // --- State stack -----------------------------------------------------

    /// Saves a copy of the current graphics state onto an internal stack.
    /// Calls nest strictly: each [`Context::restore`] pairs with the most
    /// recent unmatched `save`.
    pub fn save(&self) {
        unsafe {
            ffi::cairo_save(self.to_raw());
        }
    }

    /// Restores the most recently saved state. Restoring with no matching
    /// save latches [`Error::InvalidRestore`]; it is never silently ignored.
    pub fn restore(&self) {
        unsafe {
            ffi::cairo_restore(self.to_raw());
        }
    }

    /// Redirects drawing to an intermediate group surface until the group
    /// is popped.
    pub fn push_group(&self) {
        unsafe {
            ffi::cairo_push_group(self.to_raw());
        }
    }

    /// Like [`Context::push_group`], with an explicit content type for the
    /// intermediate surface.
    pub fn push_group_with_content(&self, content: Content) {
        unsafe {
            ffi::cairo_push_group_with_content(self.to_raw(), content.into_raw());
        }
    }

    /// Ends group redirection and returns the recorded drawing as a
    /// pattern. Popping with no matching push fails with
    /// [`Error::InvalidPopGroup`].
    pub fn pop_group(&self) -> Result<Pattern> {
        Pattern::from_raw_full(unsafe { ffi::cairo_pop_group(self.to_raw()) })
    }

    /// Ends group redirection and installs the result as the source
    /// pattern.
    pub fn pop_group_to_source(&self) {
        unsafe {
            ffi::cairo_pop_group_to_source(self.to_raw());
        }
    }

    /// The current destination: the original target, or the intermediate
    /// surface of the innermost pushed group.
    pub fn group_target(&self) -> Result<Surface> {
        Surface::from_raw_borrowed(unsafe { ffi::cairo_get_group_target(self.to_raw()) })
    }

    // --- Sources ---------------------------------------------------------

    pub fn set_source_rgb(&self, red: f64, green: f64, blue: f64) {
        unsafe {
            ffi::cairo_set_source_rgb(self.to_raw(), red, green, blue);
        }
    }

    pub fn set_source_rgba(&self, red: f64, green: f64, blue: f64, alpha: f64) {
        unsafe {
            ffi::cairo_set_source_rgba(self.to_raw(), red, green, blue, alpha);
        }
    }

    pub fn set_source(&self, pattern: &Pattern) {
        unsafe {
            ffi::cairo_set_source(self.to_raw(), pattern.to_raw());
        }
    }

    /// The current source pattern. The returned wrapper shares ownership
    /// with the context via the native reference count.
    pub fn source(&self) -> Result<Pattern> {
        Pattern::from_raw_borrowed(unsafe { ffi::cairo_get_source(self.to_raw()) })
    }

    /// Uses `surface` as the source, placed at `(x, y)` in user space.
    pub fn set_source_surface(&self, surface: &Surface, x: f64, y: f64) {
        unsafe {
            ffi::cairo_set_source_surface(self.to_raw(), surface.to_raw(), x, y);
        }
    }

    // --- Path construction -----------------------------------------------

    pub fn new_path(&self) {
        unsafe {
            ffi::cairo_new_path(self.to_raw());
        }
    }

    pub fn new_sub_path(&self) {
        unsafe {
            ffi::cairo_new_sub_path(self.to_raw());
        }
    }

    pub fn close_path(&self) {
        unsafe {
            ffi::cairo_close_path(self.to_raw());
        }
    }

    pub fn move_to(&self, x: f64, y: f64) {
        unsafe {
            ffi::cairo_move_to(self.to_raw(), x, y);
        }
    }

    pub fn line_to(&self, x: f64, y: f64) {
        unsafe {
            ffi::cairo_line_to(self.to_raw(), x, y);
        }
    }

    pub fn curve_to(&self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) {
        unsafe {
            ffi::cairo_curve_to(self.to_raw(), x1, y1, x2, y2, x3, y3);
        }
    }

    pub fn rel_move_to(&self, dx: f64, dy: f64) {
        unsafe {
            ffi::cairo_rel_move_to(self.to_raw(), dx, dy);
        }
    }

    pub fn rel_line_to(&self, dx: f64, dy: f64) {
        unsafe {
            ffi::cairo_rel_line_to(self.to_raw(), dx, dy);
        }
    }

    /// Adds a closed rectangular sub-path.
    pub fn rectangle(&self, x: f64, y: f64, width: f64, height: f64) {
        unsafe {
            ffi::cairo_rectangle(self.to_raw(), x, y, width, height);
        }
    }

    /// Adds a circular arc from `angle1` to `angle2` in the direction of
    /// increasing angles. If `angle2` is less than `angle1`, cairo advances
    /// it by full turns (2π) until it is greater, so the arc always runs
    /// forward; use [`Context::arc_negative`] for the decreasing direction.
    ///
    /// If there is a current point, an initial line segment connects it to
    /// the arc's start; call [`Context::new_sub_path`] first to avoid that.
    pub fn arc(&self, xc: f64, yc: f64, radius: f64, angle1: f64, angle2: f64) {
        unsafe {
            ffi::cairo_arc(self.to_raw(), xc, yc, radius, angle1, angle2);
        }
    }

    /// Arc in the direction of decreasing angles; `angle2` is reduced by
    /// full turns until it is less than `angle1`.
    pub fn arc_negative(&self, xc: f64, yc: f64, radius: f64, angle1: f64, angle2: f64) {
        unsafe {
            ffi::cairo_arc_negative(self.to_raw(), xc, yc, radius, angle1, angle2);
        }
    }

    /// Snapshots the current path.
    pub fn copy_path(&self) -> Result<Path> {
        Path::from_raw_full(unsafe { ffi::cairo_copy_path(self.to_raw()) })
    }

    /// Snapshots the current path with curves flattened to line segments
    /// within the current tolerance.
    pub fn copy_path_flat(&self) -> Result<Path> {
        Path::from_raw_full(unsafe { ffi::cairo_copy_path_flat(self.to_raw()) })
    }

    /// Bounding box `(x1, y1, x2, y2)` of the current path in user space.
    pub fn path_extents(&self) -> (f64, f64, f64, f64) {
        let mut extents = (0.0, 0.0, 0.0, 0.0);
        unsafe {
            ffi::cairo_path_extents(
                self.to_raw(),
                &mut extents.0,
                &mut extents.1,
                &mut extents.2,
                &mut extents.3,
            );
        }
        extents
    }

    pub fn has_current_point(&self) -> bool {
        unsafe { ffi::cairo_has_current_point(self.to_raw()) != 0 }
    }

    /// The current point, or `None` before any path-starting operation.
    pub fn current_point(&self) -> Option<(f64, f64)> {
        if !self.has_current_point() {
            return None;
        }
        let (mut x, mut y) = (0.0, 0.0);
        unsafe {
            ffi::cairo_get_current_point(self.to_raw(), &mut x, &mut y);
        }
        Some((x, y))
    }

    // --- Path consumption ------------------------------------------------

    /// Fills the current path and clears it; `fill_preserve` keeps the path
    /// for reuse.
    pub fn fill(&self) {
        unsafe {
            ffi::cairo_fill(self.to_raw());
        }
    }

    pub fn fill_preserve(&self) {
        unsafe {
            ffi::cairo_fill_preserve(self.to_raw());
        }
    }

    pub fn stroke(&self) {
        unsafe {
            ffi::cairo_stroke(self.to_raw());
        }
    }

    pub fn stroke_preserve(&self) {
        unsafe {
            ffi::cairo_stroke_preserve(self.to_raw());
        }
    }

    /// Intersects the clip region with the current path and clears the
    /// path; `clip_preserve` keeps it.
    pub fn clip(&self) {
        unsafe {
            ffi::cairo_clip(self.to_raw());
        }
    }

    pub fn clip_preserve(&self) {
        unsafe {
            ffi::cairo_clip_preserve(self.to_raw());
        }
    }

    pub fn reset_clip(&self) {
        unsafe {
            ffi::cairo_reset_clip(self.to_raw());
        }
    }

    /// Paints the current source everywhere within the clip.
    pub fn paint(&self) {
        unsafe {
            ffi::cairo_paint(self.to_raw());
        }
    }

    pub fn paint_with_alpha(&self, alpha: f64) {
        unsafe {
            ffi::cairo_paint_with_alpha(self.to_raw(), alpha);
        }
    }

    /// Paints the current source using the alpha channel of `surface` as a
    /// mask: opaque areas of the mask are painted, transparent ones are not.
    pub fn mask_surface(&self, surface: &Surface, x: f64, y: f64) {
        unsafe {
            ffi::cairo_mask_surface(self.to_raw(), surface.to_raw(), x, y);
        }
    }

    // --- Graphics state --------------------------------------------------

    pub fn set_line_width(&self, width: f64) {
        unsafe {
            ffi::cairo_set_line_width(self.to_raw(), width);
        }
    }

    pub fn line_width(&self) -> f64 {
        unsafe { ffi::cairo_get_line_width(self.to_raw()) }
    }

    pub fn set_line_cap(&self, cap: LineCap) {
        unsafe {
            ffi::cairo_set_line_cap(self.to_raw(), cap.into_raw());
        }
    }

    pub fn line_cap(&self) -> LineCap {
        let raw = unsafe { ffi::cairo_get_line_cap(self.to_raw()) };
        from_raw_or_default(LineCap::from_raw(raw), raw, "line cap")
    }

    pub fn set_line_join(&self, join: LineJoin) {
        unsafe {
            ffi::cairo_set_line_join(self.to_raw(), join.into_raw());
        }
    }

    pub fn line_join(&self) -> LineJoin {
        let raw = unsafe { ffi::cairo_get_line_join(self.to_raw()) };
        from_raw_or_default(LineJoin::from_raw(raw), raw, "line join")
    }

    /// Sets the dash pattern: an ordered sequence of on/off lengths plus a
    /// phase offset into it. An empty slice disables dashing. A negative or
    /// all-zero length latches [`Error::InvalidDash`].
    pub fn set_dash(&self, lengths: &[f64], phase: f64) {
        unsafe {
            ffi::cairo_set_dash(self.to_raw(), lengths.as_ptr(), lengths.len() as c_int, phase);
        }
    }

    /// The current dash pattern as `(phase, lengths)`.
    pub fn dash(&self) -> (f64, Vec<f64>) {
        let count = unsafe { ffi::cairo_get_dash_count(self.to_raw()) };
        let mut lengths = vec![0.0; count.max(0) as usize];
        let mut phase = 0.0;
        unsafe {
            ffi::cairo_get_dash(self.to_raw(), lengths.as_mut_ptr(), &mut phase);
        }
        (phase, lengths)
    }

    pub fn set_miter_limit(&self, limit: f64) {
        unsafe {
            ffi::cairo_set_miter_limit(self.to_raw(), limit);
        }
    }

    pub fn miter_limit(&self) -> f64 {
        unsafe { ffi::cairo_get_miter_limit(self.to_raw()) }
    }

    pub fn set_tolerance(&self, tolerance: f64) {
        unsafe {
            ffi::cairo_set_tolerance(self.to_raw(), tolerance);
        }
    }

    pub fn tolerance(&self) -> f64 {
        unsafe { ffi::cairo_get_tolerance(self.to_raw()) }
    }

    pub fn set_fill_rule(&self, rule: FillRule) {
        unsafe {
            ffi::cairo_set_fill_rule(self.to_raw(), rule.into_raw());
        }
    }

    pub fn fill_rule(&self) -> FillRule {
        let raw = unsafe { ffi::cairo_get_fill_rule(self.to_raw()) };
        from_raw_or_default(FillRule::from_raw(raw), raw, "fill rule")
    }

    pub fn set_antialias(&self, antialias: Antialias) {
        unsafe {
            ffi::cairo_set_antialias(self.to_raw(), antialias.into_raw());
        }
    }

    pub fn antialias(&self) -> Antialias {
        let raw = unsafe { ffi::cairo_get_antialias(self.to_raw()) };
        from_raw_or_default(Antialias::from_raw(raw), raw, "antialias")
    }

    pub fn set_operator(&self, operator: Operator) {
        unsafe {
            ffi::cairo_set_operator(self.to_raw(), operator.into_raw());
        }
    }

    pub fn operator(&self) -> Operator {
        let raw = unsafe { ffi::cairo_get_operator(self.to_raw()) };
        from_raw_or_default(Operator::from_raw(raw), raw, "operator")
    }

    // --- Transformations -------------------------------------------------

    pub fn translate(&self, tx: f64, ty: f64) {
        unsafe {
            ffi::cairo_translate(self.to_raw(), tx, ty);
        }
    }

    pub fn scale(&self, sx: f64, sy: f64) {
        unsafe {
            ffi::cairo_scale(self.to_raw(), sx, sy);
        }
    }

    pub fn rotate(&self, radians: f64) {
        unsafe {
            ffi::cairo_rotate(self.to_raw(), radians);
        }
    }

    /// Applies `matrix` as an additional transformation on top of the
    /// current one.
    pub fn transform(&self, matrix: &Matrix) {
        unsafe {
            ffi::cairo_transform(self.to_raw(), matrix);
        }
    }

    pub fn set_matrix(&self, matrix: &Matrix) {
        unsafe {
            ffi::cairo_set_matrix(self.to_raw(), matrix);
        }
    }

    pub fn matrix(&self) -> Matrix {
        let mut matrix = Matrix::identity();
        unsafe {
            ffi::cairo_get_matrix(self.to_raw(), &mut matrix);
        }
        matrix
    }

    pub fn identity_matrix(&self) {
        unsafe {
            ffi::cairo_identity_matrix(self.to_raw());
        }
    }

    pub fn user_to_device(&self, x: f64, y: f64) -> (f64, f64) {
        let (mut x, mut y) = (x, y);
        unsafe {
            ffi::cairo_user_to_device(self.to_raw(), &mut x, &mut y);
        }
        (x, y)
    }

    pub fn user_to_device_distance(&self, dx: f64, dy: f64) -> (f64, f64) {
        let (mut dx, mut dy) = (dx, dy);
        unsafe {
            ffi::cairo_user_to_device_distance(self.to_raw(), &mut dx, &mut dy);
        }
        (dx, dy)
    }

    pub fn device_to_user(&self, x: f64, y: f64) -> (f64, f64) {
        let (mut x, mut y) = (x, y);
        unsafe {
            ffi::cairo_device_to_user(self.to_raw(), &mut x, &mut y);
        }
        (x, y)
    }

    pub fn device_to_user_distance(&self, dx: f64, dy: f64) -> (f64, f64) {
        let (mut dx, mut dy) = (dx, dy);
        unsafe {
            ffi::cairo_device_to_user_distance(self.to_raw(), &mut dx, &mut dy);
        }
        (dx, dy)
    }

    // --- Text ------------------------------------------------------------

    /// Selects a family from cairo's "toy" font API.
    pub fn select_font_face(&self, family: &str, slant: FontSlant, weight: FontWeight) -> Result<()> {
        let family = CString::new(family).map_err(|_| Error::InvalidString)?;
        unsafe {
            ffi::cairo_select_font_face(
                self.to_raw(),
                family.as_ptr(),
                slant.into_raw(),
                weight.into_raw(),
            );
        }
        Ok(())
    }

    pub fn set_font_size(&self, size: f64) {
        unsafe {
            ffi::cairo_set_font_size(self.to_raw(), size);
        }
    }

    pub fn set_font_matrix(&self, matrix: &Matrix) {
        unsafe {
            ffi::cairo_set_font_matrix(self.to_raw(), matrix);
        }
    }

    pub fn font_matrix(&self) -> Matrix {
        let mut matrix = Matrix::identity();
        unsafe {
            ffi::cairo_get_font_matrix(self.to_raw(), &mut matrix);
        }
        matrix
    }

    pub fn set_font_face(&self, face: &FontFace) {
        unsafe {
            ffi::cairo_set_font_face(self.to_raw(), face.to_raw());
        }
    }

    /// The current font face, shared with the context via the native
    /// reference count.
    pub fn font_face(&self) -> Result<FontFace> {
        FontFace::from_raw_borrowed(unsafe { ffi::cairo_get_font_face(self.to_raw()) })
    }

    pub fn set_scaled_font(&self, scaled_font: &ScaledFont) {
        unsafe {
            ffi::cairo_set_scaled_font(self.to_raw(), scaled_font.to_raw());
        }
    }

    pub fn scaled_font(&self) -> Result<ScaledFont> {
        ScaledFont::from_raw_borrowed(unsafe { ffi::cairo_get_scaled_font(self.to_raw()) })
    }

    /// Draws `text` at the current point, advancing it past the text.
    pub fn show_text(&self, text: &str) -> Result<()> {
        let text = CString::new(text).map_err(|_| Error::InvalidString)?;
        unsafe {
            ffi::cairo_show_text(self.to_raw(), text.as_ptr());
        }
        Ok(())
    }

    /// Draws positioned glyphs.
    pub fn show_glyphs(&self, glyphs: &[Glyph]) {
        unsafe {
            ffi::cairo_show_glyphs(self.to_raw(), glyphs.as_ptr(), glyphs.len() as c_int);
        }
    }

    pub fn font_extents(&self) -> FontExtents {
        let mut extents = FontExtents::default();
        unsafe {
            ffi::cairo_font_extents(self.to_raw(), &mut extents);
        }
        extents
    }

    pub fn text_extents(&self, text: &str) -> Result<TextExtents> {
        let text = CString::new(text).map_err(|_| Error::InvalidString)?;
        let mut extents = TextExtents::default();
        unsafe {
            ffi::cairo_text_extents(self.to_raw(), text.as_ptr(), &mut extents);
        }
        Ok(extents)
    }

    // --- Paged output ----------------------------------------------------

    /// Emits and clears the current page on paged backends (PDF, SVG, PS).
    pub fn show_page(&self) {
        unsafe {
            ffi::cairo_show_page(self.to_raw());
        }
    }

    /// Emits the current page without clearing it.
    pub fn copy_page(&self) {
        unsafe {
            ffi::cairo_copy_page(self.to_raw());
        }
    }
}

impl Drop for Context {
    fn drop(&mut self) {
        unsafe {
            ffi::cairo_destroy(self.to_raw());
        }
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("target", &self.surface)
            .field("status", &self.status())
            .finish()
    }
}

#[cfg(test)]
mod tests;

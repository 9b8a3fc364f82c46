use super::*;
use crate::enums::{Format, PatternType};
use crate::path::PathSegment;
use crate::surface::ImageSurface;

fn canvas() -> ImageSurface {
    ImageSurface::new(Format::Argb32, 64, 64).unwrap()
}

#[test]
fn creation_keeps_the_target_alive() {
    let surface = canvas();
    let before = surface.reference_count();
    {
        let cr = Context::new(&surface).unwrap();
        assert!(cr.status().is_ok());
        // The context holds both a wrapper clone and cairo's own
        // internal reference.
        assert!(surface.reference_count() > before);
    }
    assert_eq!(surface.reference_count(), before);
}

#[test]
fn save_restore_round_trips_state() {
    let surface = canvas();
    let cr = Context::new(&surface).unwrap();

    cr.set_line_width(4.0);
    cr.set_line_cap(LineCap::Round);
    cr.set_fill_rule(FillRule::EvenOdd);
    cr.set_operator(Operator::Add);
    cr.translate(3.0, 9.0);
    let matrix = cr.matrix();

    cr.save();
    cr.set_line_width(8.0);
    cr.set_line_cap(LineCap::Square);
    cr.set_fill_rule(FillRule::Winding);
    cr.set_operator(Operator::Clear);
    cr.scale(2.0, 2.0);
    assert_eq!(cr.line_width(), 8.0);
    assert_ne!(cr.matrix(), matrix);

    cr.restore();
    assert_eq!(cr.line_width(), 4.0);
    assert_eq!(cr.line_cap(), LineCap::Round);
    assert_eq!(cr.fill_rule(), FillRule::EvenOdd);
    assert_eq!(cr.operator(), Operator::Add);
    assert_eq!(cr.matrix(), matrix);
    assert!(cr.status().is_ok());
}

#[test]
fn unmatched_restore_latches_an_error() {
    let surface = canvas();
    let cr = Context::new(&surface).unwrap();
    cr.restore();
    assert_eq!(cr.status(), Err(Error::InvalidRestore));
    // The latch is sticky: later operations do not clear it.
    cr.set_line_width(2.0);
    assert_eq!(cr.status(), Err(Error::InvalidRestore));
}

#[test]
fn unmatched_pop_group_fails() {
    let surface = canvas();
    let cr = Context::new(&surface).unwrap();
    assert_eq!(cr.pop_group().unwrap_err(), Error::InvalidPopGroup);
}

#[test]
fn group_round_trip_yields_a_surface_pattern() {
    let surface = canvas();
    let cr = Context::new(&surface).unwrap();

    cr.push_group();
    cr.set_source_rgb(0.0, 1.0, 0.0);
    cr.paint();
    let pattern = cr.pop_group().unwrap();

    assert_eq!(pattern.pattern_type(), Some(PatternType::Surface));
    assert!(cr.status().is_ok());
}

#[test]
fn copied_path_replays_construction() {
    let surface = canvas();
    let cr = Context::new(&surface).unwrap();

    cr.move_to(10.0, 20.0);
    cr.line_to(30.0, 40.0);
    cr.close_path();

    let path = cr.copy_path().unwrap();
    let segments: Vec<_> = path.iter().collect();
    assert_eq!(segments[0], PathSegment::MoveTo((10.0, 20.0)));
    assert_eq!(segments[1], PathSegment::LineTo((30.0, 40.0)));
    assert_eq!(segments[2], PathSegment::ClosePath);
    // Closing also re-establishes the start as the current point, which
    // the copied path records as a trailing move.
    assert_eq!(segments.last(), Some(&PathSegment::MoveTo((10.0, 20.0))));
}

#[test]
fn current_point_tracks_the_path() {
    let surface = canvas();
    let cr = Context::new(&surface).unwrap();

    assert_eq!(cr.current_point(), None);
    cr.move_to(5.0, 7.0);
    assert_eq!(cr.current_point(), Some((5.0, 7.0)));
    cr.rel_line_to(10.0, 0.0);
    assert_eq!(cr.current_point(), Some((15.0, 7.0)));
}

#[test]
fn transformations_map_points() {
    let surface = canvas();
    let cr = Context::new(&surface).unwrap();

    cr.translate(10.0, 5.0);
    cr.scale(2.0, 2.0);
    assert_eq!(cr.user_to_device(1.0, 1.0), (12.0, 7.0));
    assert_eq!(cr.user_to_device_distance(1.0, 1.0), (2.0, 2.0));

    let (x, y) = cr.device_to_user(12.0, 7.0);
    assert!((x - 1.0).abs() < 1e-9);
    assert!((y - 1.0).abs() < 1e-9);

    cr.identity_matrix();
    assert_eq!(cr.matrix(), Matrix::identity());
}

#[test]
fn dash_pattern_round_trips() {
    let surface = canvas();
    let cr = Context::new(&surface).unwrap();

    assert_eq!(cr.dash(), (0.0, vec![]));
    cr.set_dash(&[4.0, 2.0], 1.0);
    assert_eq!(cr.dash(), (1.0, vec![4.0, 2.0]));

    cr.set_dash(&[], 0.0);
    assert_eq!(cr.dash(), (0.0, vec![]));
}

#[test]
fn negative_dash_length_latches_an_error() {
    let surface = canvas();
    let cr = Context::new(&surface).unwrap();
    cr.set_dash(&[4.0, -1.0], 0.0);
    assert_eq!(cr.status(), Err(Error::InvalidDash));
}

#[test]
fn source_is_shared_with_the_context() {
    let surface = canvas();
    let cr = Context::new(&surface).unwrap();

    cr.set_source_rgb(1.0, 0.0, 0.0);
    let source = cr.source().unwrap();
    assert_eq!(source.pattern_type(), Some(PatternType::Solid));
    assert!(source.reference_count() >= 2);
}

#[test]
fn state_enum_round_trips() {
    let surface = canvas();
    let cr = Context::new(&surface).unwrap();

    assert_eq!(cr.operator(), Operator::Over);
    cr.set_operator(Operator::Clear);
    assert_eq!(cr.operator(), Operator::Clear);

    cr.set_fill_rule(FillRule::EvenOdd);
    assert_eq!(cr.fill_rule(), FillRule::EvenOdd);

    cr.set_line_cap(LineCap::Round);
    assert_eq!(cr.line_cap(), LineCap::Round);

    cr.set_line_join(LineJoin::Bevel);
    assert_eq!(cr.line_join(), LineJoin::Bevel);

    cr.set_miter_limit(4.0);
    assert_eq!(cr.miter_limit(), 4.0);
}

#[test]
fn toy_text_has_positive_extents() {
    let surface = canvas();
    let cr = Context::new(&surface).unwrap();

    cr.select_font_face("sans-serif", FontSlant::Normal, FontWeight::Normal)
        .unwrap();
    cr.set_font_size(14.0);

    let extents = cr.text_extents("Hello").unwrap();
    assert!(extents.width > 0.0);
    assert!(extents.x_advance > 0.0);

    let metrics = cr.font_extents();
    assert!(metrics.ascent > 0.0);
}

#[test]
fn drawing_fills_pixels() {
    let surface = canvas();
    let cr = Context::new(&surface).unwrap();

    cr.set_source_rgb(1.0, 0.0, 0.0);
    cr.rectangle(0.0, 0.0, 64.0, 64.0);
    cr.fill();
    drop(cr);

    let pixels = surface.data().unwrap();
    // ARGB32 is stored premultiplied in native endianness; solid red is
    // 0xffff0000 everywhere.
    let first = u32::from_ne_bytes([pixels[0], pixels[1], pixels[2], pixels[3]]);
    assert_eq!(first, 0xffff_0000);
}

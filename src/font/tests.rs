use super::*;
use crate::enums::{Antialias, HintMetrics};
use crate::matrix::Matrix;

#[test]
fn toy_face_reports_its_description() {
    let face = FontFace::toy("serif", FontSlant::Italic, FontWeight::Bold).unwrap();
    assert_eq!(face.font_type(), Some(FontType::Toy));
    assert_eq!(face.family().as_deref(), Some("serif"));
    assert_eq!(face.slant(), Some(FontSlant::Italic));
    assert_eq!(face.weight(), Some(FontWeight::Bold));
    assert!(face.status().is_ok());
}

#[test]
fn face_clone_balances_reference_count() {
    let face = FontFace::toy("sans-serif", FontSlant::Normal, FontWeight::Normal).unwrap();
    let before = face.reference_count();
    {
        let copy = face.clone();
        assert_eq!(copy.reference_count(), before + 1);
    }
    assert_eq!(face.reference_count(), before);
}

#[test]
fn nul_byte_in_family_is_rejected() {
    let err = FontFace::toy("se\0rif", FontSlant::Normal, FontWeight::Normal).unwrap_err();
    assert_eq!(err, Error::InvalidString);
}

#[test]
fn font_options_round_trip_and_compare() {
    let mut a = FontOptions::new().unwrap();
    let b = FontOptions::new().unwrap();
    assert_eq!(a, b);

    a.set_antialias(Antialias::None);
    a.set_hint_metrics(HintMetrics::Off);
    assert_eq!(a.antialias(), Antialias::None);
    assert_eq!(a.hint_metrics(), HintMetrics::Off);
    assert_ne!(a, b);

    let copy = a.clone();
    assert_eq!(copy, a);
    assert_eq!(copy.antialias(), Antialias::None);
}

#[test]
fn font_options_merge_takes_set_fields() {
    let mut base = FontOptions::new().unwrap();
    let mut overlay = FontOptions::new().unwrap();
    overlay.set_antialias(Antialias::Gray);
    base.merge(&overlay);
    assert_eq!(base.antialias(), Antialias::Gray);
    // Fields the overlay never set keep their defaults.
    assert_eq!(base.hint_metrics(), HintMetrics::Default);
}

fn sample_scaled_font() -> ScaledFont {
    let face = FontFace::toy("sans-serif", FontSlant::Normal, FontWeight::Normal).unwrap();
    let options = FontOptions::new().unwrap();
    ScaledFont::new(
        &face,
        &Matrix::from_scale(16.0, 16.0),
        &Matrix::identity(),
        &options,
    )
    .unwrap()
}

#[test]
fn scaled_font_measures_text() {
    let font = sample_scaled_font();
    assert!(font.status().is_ok());

    let metrics = font.extents();
    assert!(metrics.ascent > 0.0);
    assert!(metrics.height >= metrics.ascent + metrics.descent - 1e-6);

    let extents = font.text_extents("Hello").unwrap();
    assert!(extents.width > 0.0);
    assert!(extents.x_advance > extents.width * 0.5);

    let empty = font.text_extents("").unwrap();
    assert_eq!(empty.x_advance, 0.0);
}

#[test]
fn scaled_font_exposes_its_inputs() {
    let font = sample_scaled_font();
    assert_eq!(font.font_matrix(), Matrix::from_scale(16.0, 16.0));
    assert_eq!(font.ctm(), Matrix::identity());

    let face = font.font_face().unwrap();
    assert_eq!(face.font_type(), Some(FontType::Toy));
}

#[test]
fn glyph_extents_of_nothing_are_zero() {
    let font = sample_scaled_font();
    let extents = font.glyph_extents(&[]);
    assert_eq!(extents.width, 0.0);
    assert_eq!(extents.x_advance, 0.0);
}

use super::*;
use crate::enums::{Content, Format};
use crate::error::Error;

#[test]
fn image_surface_reports_its_geometry() {
    let surface = ImageSurface::new(Format::Argb32, 40, 30).unwrap();
    assert_eq!(surface.format(), Some(Format::Argb32));
    assert_eq!(surface.width(), 40);
    assert_eq!(surface.height(), 30);
    assert!(surface.stride() >= 40 * 4);
    assert_eq!(surface.surface_type(), Some(SurfaceType::Image));
    assert_eq!(surface.content(), Content::ColorAlpha);
    assert!(surface.status().is_ok());
}

#[test]
fn rgb24_surface_has_color_content() {
    let surface = ImageSurface::new(Format::Rgb24, 8, 8).unwrap();
    assert_eq!(surface.content(), Content::Color);
}

#[test]
fn clone_balances_reference_count() {
    let surface = ImageSurface::new(Format::A8, 4, 4).unwrap();
    assert_eq!(surface.reference_count(), 1);
    {
        let copy = surface.clone();
        assert_eq!(copy.reference_count(), 2);
        assert_eq!(surface.reference_count(), 2);
    }
    assert_eq!(surface.reference_count(), 1);
}

#[test]
fn create_for_data_accepts_a_well_formed_buffer() {
    let stride = Format::Argb32.stride_for_width(16).unwrap();
    let buffer = vec![0u8; stride * 16];
    let surface = ImageSurface::create_for_data(buffer, Format::Argb32, 16, 16, stride).unwrap();
    assert_eq!(surface.width(), 16);
    assert_eq!(surface.stride(), stride);
}

#[test]
fn create_for_data_rejects_a_wrong_stride() {
    let stride = Format::Argb32.stride_for_width(16).unwrap();
    let buffer = vec![0u8; (stride + 4) * 16];
    let err =
        ImageSurface::create_for_data(buffer, Format::Argb32, 16, 16, stride + 4).unwrap_err();
    assert_eq!(err, Error::InvalidStride);
}

#[test]
fn create_for_data_rejects_a_short_buffer() {
    let stride = Format::Argb32.stride_for_width(16).unwrap();
    let buffer = vec![0u8; stride * 8];
    let err = ImageSurface::create_for_data(buffer, Format::Argb32, 16, 16, stride).unwrap_err();
    assert_eq!(err, Error::InvalidStride);
}

#[test]
fn with_data_round_trips_pixels() {
    let mut surface = ImageSurface::new(Format::A8, 4, 4).unwrap();
    surface
        .with_data(|pixels| {
            pixels[0] = 0xab;
        })
        .unwrap();

    let pixels = surface.data().unwrap();
    assert_eq!(pixels[0], 0xab);
}

#[test]
fn pixel_view_outlives_the_wrapper() {
    let mut surface = ImageSurface::new(Format::A8, 2, 2).unwrap();
    surface
        .with_data(|pixels| {
            pixels[0] = 0x7f;
        })
        .unwrap();

    let view = surface.data().unwrap();
    drop(surface);
    // The view holds its own reference, so the buffer is still valid.
    assert_eq!(view[0], 0x7f);
}

#[test]
fn downcasting_the_wrong_backend_fails() {
    #[cfg(feature = "pdf")]
    {
        let dir = tempfile::tempdir().unwrap();
        let pdf = PdfSurface::new(dir.path().join("doc.pdf"), 100.0, 100.0).unwrap();
        let generic: Surface = pdf.into();
        assert_eq!(
            ImageSurface::try_from(generic).unwrap_err(),
            Error::SurfaceTypeMismatch
        );
    }
}

#[test]
fn downcasting_the_right_backend_succeeds() {
    let generic: Surface = ImageSurface::new(Format::Argb32, 4, 4).unwrap().into();
    let image = ImageSurface::try_from(generic).unwrap();
    assert_eq!(image.format(), Some(Format::Argb32));
}

#[cfg(feature = "pdf")]
#[test]
fn pdf_surface_reports_its_backend() {
    let dir = tempfile::tempdir().unwrap();
    let surface = PdfSurface::new(dir.path().join("doc.pdf"), 595.0, 842.0).unwrap();
    assert_eq!(surface.surface_type(), Some(SurfaceType::Pdf));
    assert!(PdfSurface::backend_compatible(SurfaceType::Pdf));
    assert!(!PdfSurface::backend_compatible(SurfaceType::Image));
    surface.set_size(842.0, 595.0);
    assert!(surface.status().is_ok());
}

#[cfg(feature = "svg")]
#[test]
fn svg_surface_reports_its_backend() {
    let dir = tempfile::tempdir().unwrap();
    let surface = SvgSurface::new(dir.path().join("pic.svg"), 320.0, 240.0).unwrap();
    assert_eq!(surface.surface_type(), Some(SurfaceType::Svg));
    assert!(SvgSurface::backend_compatible(SurfaceType::Svg));
}

#[cfg(feature = "png")]
#[test]
fn png_bytes_start_with_the_signature() {
    let surface = ImageSurface::new(Format::Argb32, 4, 4).unwrap();
    let bytes = surface.write_to_png_bytes().unwrap();
    assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n']);
}

#[test]
fn finish_keeps_the_handle_usable() {
    let surface = ImageSurface::new(Format::Argb32, 4, 4).unwrap();
    surface.finish();
    assert!(surface.status().is_ok());
    assert_eq!(surface.surface_type(), Some(SurfaceType::Image));
}

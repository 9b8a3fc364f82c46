use cairoink::{Context, Error, Format, ImageSurface};
use tempfile::TempDir;

/// Fills a small canvas with a pattern of fully opaque pixels. PNG stores
/// straight alpha while cairo stores premultiplied, so only opaque data
/// survives a round trip bit for bit.
fn opaque_sample() -> ImageSurface {
    let _ = env_logger::builder().is_test(true).try_init();
    let surface = ImageSurface::new(Format::Argb32, 16, 16).unwrap();
    let cr = Context::new(&surface).unwrap();
    cr.set_source_rgb(0.8, 0.2, 0.1);
    cr.paint();
    cr.set_source_rgb(0.0, 0.4, 1.0);
    cr.rectangle(4.0, 4.0, 8.0, 8.0);
    cr.fill();
    surface
}

#[test]
fn png_bytes_round_trip_preserves_opaque_pixels() {
    let original = opaque_sample();
    let encoded = original.write_to_png_bytes().unwrap();

    let decoded = ImageSurface::from_png_bytes(&encoded).unwrap();
    assert_eq!(decoded.width(), 16);
    assert_eq!(decoded.height(), 16);
    assert_eq!(decoded.format(), Some(Format::Argb32));

    let before = original.data().unwrap();
    let after = decoded.data().unwrap();
    assert_eq!(&before[..], &after[..]);
}

#[test]
fn png_file_round_trip_preserves_opaque_pixels() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sample.png");

    let original = opaque_sample();
    original.write_to_png(&path).unwrap();

    let decoded = ImageSurface::from_png(&path).unwrap();
    let before = original.data().unwrap();
    let after = decoded.data().unwrap();
    assert_eq!(&before[..], &after[..]);
}

#[test]
fn decoding_normalizes_to_a_color_format() {
    // An alpha-only surface encodes fine, but decoding always lands in
    // Argb32 or Rgb24 with the geometry intact.
    let mut alpha = ImageSurface::new(Format::A8, 10, 6).unwrap();
    alpha
        .with_data(|pixels| {
            pixels.fill(0x80);
        })
        .unwrap();

    let encoded = alpha.write_to_png_bytes().unwrap();
    let decoded = ImageSurface::from_png_bytes(&encoded).unwrap();

    assert_eq!(decoded.width(), 10);
    assert_eq!(decoded.height(), 6);
    assert!(matches!(
        decoded.format(),
        Some(Format::Argb32) | Some(Format::Rgb24)
    ));
}

#[test]
fn truncated_png_data_fails_to_decode() {
    let encoded = opaque_sample().write_to_png_bytes().unwrap();
    assert!(ImageSurface::from_png_bytes(&encoded[..encoded.len() / 2]).is_err());
}

#[test]
fn decoding_a_missing_file_reports_file_not_found() {
    let dir = TempDir::new().unwrap();
    let err = ImageSurface::from_png(dir.path().join("absent.png")).unwrap_err();
    assert_eq!(err, Error::FileNotFound);
}

#[test]
fn reader_failure_surfaces_as_a_read_error() {
    struct Failing;

    impl std::io::Read for Failing {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("backing store gone"))
        }
    }

    let err = ImageSurface::from_png_reader(&mut Failing).unwrap_err();
    assert_eq!(err, Error::ReadError);
}

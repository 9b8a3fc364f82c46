use cairoink::{Context, Format, ImageSurface, Pattern, PatternType, Surface};

/// Renders a horizontal linear gradient into a one-row canvas and returns
/// the pixel bytes.
fn render_gradient(stops: &[(f64, f64, f64, f64)]) -> Vec<u8> {
    let _ = env_logger::builder().is_test(true).try_init();
    let surface = ImageSurface::new(Format::Argb32, 32, 1).unwrap();
    let cr = Context::new(&surface).unwrap();

    let gradient = Pattern::linear(0.0, 0.0, 32.0, 0.0).unwrap();
    for &(offset, r, g, b) in stops {
        gradient.add_color_stop_rgb(offset, r, g, b);
    }
    cr.set_source(&gradient);
    cr.paint();
    drop(cr);

    surface.data().unwrap().to_vec()
}

#[test]
fn gradient_stops_sort_by_offset_not_insertion_order() {
    let ordered = render_gradient(&[
        (0.0, 1.0, 0.0, 0.0),
        (0.5, 0.0, 1.0, 0.0),
        (1.0, 0.0, 0.0, 1.0),
    ]);
    let shuffled = render_gradient(&[
        (1.0, 0.0, 0.0, 1.0),
        (0.0, 1.0, 0.0, 0.0),
        (0.5, 0.0, 1.0, 0.0),
    ]);
    assert_eq!(ordered, shuffled);
}

#[test]
fn surface_pattern_keeps_its_surface_alive() {
    let surface = ImageSurface::new(Format::Argb32, 8, 8).unwrap();
    assert_eq!(surface.reference_count(), 1);

    let pattern = Pattern::for_surface(&surface).unwrap();
    assert_eq!(pattern.pattern_type(), Some(PatternType::Surface));
    assert!(surface.reference_count() > 1);

    drop(pattern);
    assert_eq!(surface.reference_count(), 1);
}

#[test]
fn context_references_are_released_on_drop() {
    let surface = ImageSurface::new(Format::Argb32, 8, 8).unwrap();
    let cr = Context::new(&surface).unwrap();
    let held = surface.reference_count();
    assert!(held > 1);

    // A second context adds its own references independently.
    let cr2 = Context::new(&surface).unwrap();
    assert!(surface.reference_count() > held);
    drop(cr2);
    assert_eq!(surface.reference_count(), held);

    drop(cr);
    assert_eq!(surface.reference_count(), 1);
}

#[test]
fn painting_through_a_surface_pattern_copies_pixels() {
    let mut stamp = ImageSurface::new(Format::Argb32, 4, 4).unwrap();
    stamp
        .with_data(|pixels| {
            // Solid opaque green, premultiplied native-endian.
            for pixel in pixels.chunks_exact_mut(4) {
                pixel.copy_from_slice(&0xff00_ff00u32.to_ne_bytes());
            }
        })
        .unwrap();

    let target = ImageSurface::new(Format::Argb32, 4, 4).unwrap();
    let cr = Context::new(&target).unwrap();
    cr.set_source_surface(&stamp, 0.0, 0.0);
    cr.paint();
    drop(cr);

    let pixels = target.data().unwrap();
    let first = u32::from_ne_bytes([pixels[0], pixels[1], pixels[2], pixels[3]]);
    assert_eq!(first, 0xff00_ff00);
}

#[cfg(feature = "pdf")]
#[test]
fn pdf_surface_writes_a_document() {
    use cairoink::PdfSurface;

    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("out.pdf");

    let surface = PdfSurface::new(&path, 200.0, 100.0).unwrap();
    let cr = Context::new(&surface).unwrap();
    cr.set_source_rgb(0.0, 0.0, 0.0);
    cr.rectangle(10.0, 10.0, 50.0, 50.0);
    cr.fill();
    cr.show_page();
    drop(cr);
    surface.finish();
    assert!(surface.status().is_ok());

    let written = std::fs::read(&path).unwrap();
    assert!(written.starts_with(b"%PDF"));
}

#[cfg(feature = "svg")]
#[test]
fn svg_surface_writes_a_document() {
    use cairoink::SvgSurface;

    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("out.svg");

    let surface = SvgSurface::new(&path, 120.0, 80.0).unwrap();
    let cr = Context::new(&surface).unwrap();
    cr.set_source_rgb(1.0, 0.0, 0.0);
    cr.paint();
    drop(cr);
    surface.finish();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("<svg"));
}

#[test]
fn group_rendering_matches_direct_rendering() {
    let direct = ImageSurface::new(Format::Argb32, 8, 8).unwrap();
    let cr = Context::new(&direct).unwrap();
    cr.set_source_rgb(0.2, 0.6, 0.9);
    cr.paint();
    drop(cr);

    let grouped = ImageSurface::new(Format::Argb32, 8, 8).unwrap();
    let cr = Context::new(&grouped).unwrap();
    cr.push_group();
    cr.set_source_rgb(0.2, 0.6, 0.9);
    cr.paint();
    cr.pop_group_to_source();
    cr.paint();
    drop(cr);

    assert_eq!(
        &direct.data().unwrap()[..],
        &grouped.data().unwrap()[..]
    );
}

#[test]
fn generic_surface_downcasts_only_to_its_backend() {
    let image: Surface = ImageSurface::new(Format::Argb32, 4, 4).unwrap().into();
    assert!(ImageSurface::try_from(image).is_ok());

    #[cfg(feature = "svg")]
    {
        use cairoink::{Error, SvgSurface};

        let dir = tempfile::TempDir::new().unwrap();
        let svg: Surface = SvgSurface::new(dir.path().join("x.svg"), 10.0, 10.0)
            .unwrap()
            .into();
        assert_eq!(
            ImageSurface::try_from(svg).unwrap_err(),
            Error::SurfaceTypeMismatch
        );
    }
}

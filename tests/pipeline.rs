use cvdsim_rs::*;

fn gradient(width: u32, height: u32) -> PixelBuffer {
    let mut buffer = PixelBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let r = (x * 255 / width.max(1)) as u8;
            let g = (y * 255 / height.max(1)) as u8;
            let b = ((x + y) % 256) as u8;
            buffer.put_pixel(x as i64, y as i64, [r, g, b, (x % 7 * 30) as u8]);
        }
    }
    buffer
}

fn red_green_stripes(width: u32, height: u32) -> PixelBuffer {
    let mut buffer = PixelBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let color = if (x / 4) % 2 == 0 {
                [255, 0, 0, 255]
            } else {
                [0, 255, 0, 255]
            };
            buffer.put_pixel(x as i64, y as i64, color);
        }
    }
    buffer
}

#[test]
fn zero_severity_keeps_every_byte() {
    let src = gradient(37, 11);
    for variant in CvdVariant::ALL {
        assert_eq!(simulate_cvd(&src, variant, 0f32), src, "{variant}");
    }
    assert_eq!(simulate_cvd(&src, CvdVariant::Normal, 100f32), src);
}

#[test]
fn full_protanopia_on_red() {
    let src = PixelBuffer::filled(3, 2, [255, 0, 0, 255]);
    let dst = simulate_cvd(&src, CvdVariant::Protanopia, 100f32);
    for px in dst.data().chunks_exact(4) {
        assert!((px[0] as i32 - 109).abs() <= 1, "{px:?}");
        assert!((px[1] as i32 - 95).abs() <= 1, "{px:?}");
        assert!(px[2] <= 1, "{px:?}");
        assert_eq!(px[3], 255);
    }
}

#[test]
fn severity_is_clamped_at_the_boundary() {
    let src = gradient(16, 4);
    assert_eq!(
        simulate_cvd(&src, CvdVariant::Deuteranopia, 250f32),
        simulate_cvd(&src, CvdVariant::Deuteranopia, 100f32)
    );
    assert_eq!(simulate_cvd(&src, CvdVariant::Deuteranopia, -3f32), src);
}

#[test]
fn unknown_name_is_identity() {
    assert_eq!(matrix_for_name("monochromacy"), &IDENTITY);
    assert_eq!(matrix_for_name("Protanopia"), CvdVariant::Protanopia.matrix());
}

#[test]
fn slider_view_halves() {
    let original = PixelBuffer::filled(100, 10, [10, 20, 30, 255]);
    let transformed = PixelBuffer::filled(100, 10, [200, 100, 50, 255]);

    let clean = compose_split(&original, &transformed, 0.5, &SplitStyle::hidden()).unwrap();
    for y in 0..10 {
        for x in 0..100 {
            let expected = if x < 50 { [10, 20, 30, 255] } else { [200, 100, 50, 255] };
            assert_eq!(clean.get_pixel(x, y), Some(expected), "x={x} y={y}");
        }
    }

    let decorated = compose_split(&original, &transformed, 0.5, &SplitStyle::default()).unwrap();
    assert_eq!(decorated.get_pixel(0, 0), Some([10, 20, 30, 255]));
    assert_eq!(decorated.get_pixel(99, 9), Some([200, 100, 50, 255]));
    assert_ne!(decorated, clean);
}

#[test]
fn compare_rejects_mismatched_images() {
    let a = PixelBuffer::new(10, 10);
    let b = PixelBuffer::new(10, 11);
    assert!(matches!(
        compose_split(&a, &b, 0.5, &SplitStyle::default()),
        Err(CvdError::InvalidDimensions { .. })
    ));
    assert!(compose_side_by_side(&a, &b, 4).is_err());
}

#[test]
fn contrast_of_black_and_white() {
    let result = check(Rgb::<u8>::from_hex("#000000").unwrap(), Rgb::<u8>::from_hex("#FFFFFF").unwrap());
    assert_eq!(result.ratio, 21f64);
    assert!(result.aa_pass && result.aaa_pass && result.aa_large_pass && result.aaa_large_pass);
}

#[test]
fn scoring_is_deterministic() {
    let src = gradient(64, 48);
    let simulated = simulate_cvd(&src, CvdVariant::Tritanopia, 70f32);
    let first = analyze(&simulated, CvdVariant::Tritanopia, 70f32);
    let second = analyze(&simulated, CvdVariant::Tritanopia, 70f32);
    assert_eq!(first, second);
    assert!(first.overall <= 100);
}

#[test]
fn red_green_imagery_is_penalized() {
    let src = red_green_stripes(40, 20);
    let score = analyze(&src, CvdVariant::Protanopia, 100f32);
    assert!(score.recommendations.iter().any(|r| r == RECOMMEND_RED_GREEN));
    assert!(score.recommendations.iter().any(|r| r == RECOMMEND_ALTERNATIVE_INDICATORS));
    assert!(score.overall <= 65, "{}", score.overall);
    assert_eq!(score.color_dependency, 100f32);

    let tritan = analyze(&src, CvdVariant::Tritanopia, 0f32);
    assert!(!tritan.recommendations.iter().any(|r| r == RECOMMEND_RED_GREEN));
}

#[test]
fn raw_slice_entry_points() {
    let src = gradient(8, 8);
    let mut dst = vec![0u8; src.data().len()];
    rgba_simulate_cvd(src.data(), 32, &mut dst, 32, 8, 8, CvdVariant::Achromatopsia, 100f32).unwrap();
    let expected = simulate_cvd(&src, CvdVariant::Achromatopsia, 100f32);
    assert_eq!(dst, expected.data());

    let score = analyze_rgba(src.data(), 8, 8, CvdVariant::Normal, 0f32).unwrap();
    assert_eq!(score, analyze(&src, CvdVariant::Normal, 0f32));
}

#[test]
fn palettes_under_achromatopsia_turn_gray() {
    for palette in PRESET_PALETTES.iter() {
        for swatch in palette.simulate(CvdVariant::Achromatopsia, 100f32).unwrap() {
            let c = swatch.simulated;
            assert!(c.r.abs_diff(c.g) <= 1 && c.g.abs_diff(c.b) <= 1, "{}", swatch.swatch.name);
        }
    }
}

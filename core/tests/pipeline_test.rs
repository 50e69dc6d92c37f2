use image::GrayImage;
use ridgeline::{
    FixedSource, LandscapeConfig, Margin, Palette, SeededSource, SkyElement, compose_stack,
    generate_stack, render,
};

const WHITE: [u8; 4] = [255, 255, 255, 255];

fn flat_band_config() -> LandscapeConfig {
    LandscapeConfig {
        width: 100,
        height: 200,
        layers: 1,
        roughness: 0.0,
        decrease_roughness: false,
        lower_padding: 20,
        upper_padding: 20,
        intersection: 0.0,
        smoothing: 0,
        sky_element: SkyElement::Sun,
        sky_radius: 0,
        sky_center: (0, 0),
        white_outline: false,
        margin: Margin::None,
        palette: Palette {
            sky: [10, 20, 30, 255],
            sun: [240, 230, 220, 255],
            land: vec![[200, 50, 25, 255]],
        },
        texture_strength: 0.5,
    }
}

#[test]
fn flat_band_scenario() {
    // One layer, zero roughness, scripted equal endpoints: the raw field is
    // constant, so normalization collapses it onto the top of the depth band
    // and the mountain is a flat slab from row 20 down to the bottom edge.
    let config = flat_band_config();
    let mut source = FixedSource::new(vec![50.0, 50.0]);
    let frame = render(&config, &mut source, None).unwrap();

    let sky = config.palette.sky;
    let land = config.palette.land[0];
    for x in 0..100 {
        for y in 0..20 {
            assert_eq!(frame.get_pixel(x, y).0, sky, "sky expected at {x},{y}");
        }
        for y in 21..200 {
            assert_eq!(frame.get_pixel(x, y).0, land, "land expected at {x},{y}");
        }
    }
}

#[test]
fn sloped_band_stays_inside_padding() {
    // Distinct endpoints: the silhouette is a straight slope spanning the
    // whole band [20, 180]; rows above and below the band never change.
    let config = flat_band_config();
    let mut source = FixedSource::new(vec![0.0, 100.0]);
    let frame = render(&config, &mut source, None).unwrap();

    let sky = config.palette.sky;
    let land = config.palette.land[0];
    for x in 0..100 {
        for y in 0..19 {
            assert_eq!(frame.get_pixel(x, y).0, sky);
        }
        for y in 181..200 {
            assert_eq!(frame.get_pixel(x, y).0, land);
        }
    }
    // slope rises left to right: the left edge is land just below the band
    // top while the right edge is still sky there
    assert_eq!(frame.get_pixel(0, 25).0, land);
    assert_eq!(frame.get_pixel(99, 25).0, sky);
}

#[test]
fn regenerate_with_same_seed_reproduces_the_frame() {
    let config = LandscapeConfig {
        width: 120,
        height: 160,
        layers: 3,
        roughness: 80.0,
        lower_padding: 10,
        upper_padding: 10,
        ..Default::default()
    };
    let a = render(&config, &mut SeededSource::new(2025), None).unwrap();
    let b = render(&config, &mut SeededSource::new(2025), None).unwrap();
    assert_eq!(a, b);
}

#[test]
fn host_can_recompose_a_kept_stack() {
    // the original stack is reused: re-normalizing with different padding
    // must not require regeneration and must not disturb the raw fields
    let mut config = LandscapeConfig {
        width: 80,
        height: 120,
        layers: 2,
        roughness: 40.0,
        lower_padding: 10,
        upper_padding: 10,
        ..Default::default()
    };
    let stack = generate_stack(&config, &mut SeededSource::new(7)).unwrap();
    let before = stack.clone();

    let first = compose_stack(&config, &stack, None).unwrap();
    config.lower_padding = 30;
    let second = compose_stack(&config, &stack, None).unwrap();

    assert_eq!(stack, before);
    assert_ne!(first, second);
}

#[test]
fn full_frame_with_moon_margin_and_texture() {
    let config = LandscapeConfig {
        width: 600,
        height: 700,
        layers: 2,
        roughness: 60.0,
        lower_padding: 40,
        upper_padding: 40,
        sky_element: SkyElement::Moon,
        sky_radius: 60,
        sky_center: (420, 150),
        margin: Margin::Circle,
        palette: ridgeline::palettes::night(),
        texture_strength: 0.5,
        ..Default::default()
    };
    // uniform mid-gray grain: every surviving pixel moves toward white
    let texture = GrayImage::from_pixel(32, 32, image::Luma([128]));
    let frame = render(&config, &mut SeededSource::new(11), Some(&texture)).unwrap();

    assert_eq!(frame.dimensions(), (600, 700));
    // outside the margin cut-out (radius 100 around the center): the white
    // frame is unaffected by the texture blend
    assert_eq!(frame.get_pixel(5, 5).0, WHITE);
    // inside the cut-out the night sky has been lightened by the grain but
    // is neither pure sky nor pure white
    let sky = config.palette.sky;
    let center = frame.get_pixel(300, 300).0;
    assert!(center[0] >= sky[0]);
    assert_ne!(center, WHITE);
    assert_eq!(center[3], 255);
}

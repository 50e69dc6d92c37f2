use palette::{FromColor, Hsv, Srgb};
use ridgeline::{LandscapeConfig, Palette, SeededSource, render};

fn tone(hue: f32, saturation: f32, value: f32) -> [u8; 4] {
    let rgb = Srgb::from_color(Hsv::new(hue, saturation, value)).into_format::<u8>();
    [rgb.red, rgb.green, rgb.blue, 255]
}

// Derive a whole palette from a single hue: pale sky, bright sun, one deep
// land color that the pipeline fades toward the sky per layer
fn monochrome_palette(hue: f32) -> Palette {
    Palette {
        sky: tone(hue, 0.15, 0.95),
        sun: tone(hue, 0.35, 0.95),
        land: vec![tone(hue, 0.65, 0.45)],
    }
}

fn main() {
    env_logger::init();

    for (index, hue) in [25.0f32, 160.0, 265.0].iter().enumerate() {
        let config = LandscapeConfig {
            width: 620,
            height: 877,
            layers: 4,
            roughness: 150.0,
            lower_padding: 60,
            upper_padding: 60,
            sky_radius: 90,
            sky_center: (450, 200),
            palette: monochrome_palette(*hue),
            ..Default::default()
        };

        let image = render(&config, &mut SeededSource::new(40 + index as u64), None).unwrap();
        let filename = format!("hue_sweep_{}.png", *hue as u32);
        image.save(&filename).unwrap();
        println!("Saved {}", filename);
    }
}

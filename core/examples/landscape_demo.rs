use ridgeline::{LandscapeConfig, Margin, SeededSource, SkyElement, palettes, render};

fn main() {
    env_logger::init();

    // A4-ish canvas at half resolution, warm palette, low evening sun
    let config = LandscapeConfig {
        width: 1240,
        height: 1754,
        layers: 4,
        roughness: 220.0,
        decrease_roughness: true,
        lower_padding: 120,
        upper_padding: 90,
        intersection: 15.0,
        smoothing: 2,
        sky_element: SkyElement::Sun,
        sky_radius: 160,
        sky_center: (920, 420),
        white_outline: false,
        margin: Margin::None,
        palette: palettes::terracotta(),
        texture_strength: 0.5,
    };

    let mut source = SeededSource::new(2025);
    let image = render(&config, &mut source, None).unwrap();

    image.save("landscape_demo.png").unwrap();
    println!("Saved landscape_demo.png");
}

use ridgeline::{LandscapeConfig, SeededSource, SkyElement, palettes, render};

// Render one small landscape per built-in palette so they can be compared
// side by side
fn main() {
    env_logger::init();

    for name in palettes::names() {
        let palette = palettes::by_name(name).unwrap();
        // dark palettes read better with a moon
        let sky_element = if *name == "Night" || *name == "Vintage" {
            SkyElement::Moon
        } else {
            SkyElement::Sun
        };

        let config = LandscapeConfig {
            width: 496,
            height: 702,
            layers: 3,
            roughness: 120.0,
            decrease_roughness: true,
            lower_padding: 40,
            upper_padding: 40,
            intersection: 0.0,
            smoothing: 1,
            sky_element,
            sky_radius: 70,
            sky_center: (360, 160),
            white_outline: false,
            margin: ridgeline::Margin::None,
            palette,
            texture_strength: 0.5,
        };

        // one seed per palette keeps the sheet varied but reproducible
        let seed = 2025 + name.len() as u64;
        let image = render(&config, &mut SeededSource::new(seed), None).unwrap();

        let filename = format!("palette_{}.png", name.to_lowercase());
        image.save(&filename).unwrap();
        println!("Saved {}", filename);
    }
}

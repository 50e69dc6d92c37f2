use image::{GrayImage, Luma};
use ridgeline::{
    DisplacementSource, LandscapeConfig, Margin, SeededSource, SkyElement, palettes, render,
};

// Synthesize a paper-like grain in memory; the pipeline only consumes a
// grayscale raster, so no texture file is needed
fn grain(width: u32, height: u32, seed: u64) -> GrayImage {
    let mut source = SeededSource::new(seed);
    GrayImage::from_fn(width, height, |_, _| {
        Luma([source.uniform(0.0, 90.0) as u8])
    })
}

fn main() {
    env_logger::init();

    // Full poster resolution: the margin spacings assume a print-sized canvas
    let config = LandscapeConfig {
        width: 2480,
        height: 3508,
        layers: 5,
        roughness: 300.0,
        decrease_roughness: true,
        lower_padding: 200,
        upper_padding: 450,
        intersection: 20.0,
        smoothing: 3,
        sky_element: SkyElement::Moon,
        sky_radius: 280,
        sky_center: (1500, 950),
        white_outline: false,
        margin: Margin::Window,
        palette: palettes::night(),
        texture_strength: 0.5,
    };

    let texture = grain(620, 877, 99);
    let mut source = SeededSource::new(31);
    let image = render(&config, &mut source, Some(&texture)).unwrap();

    image.save("window_poster.png").unwrap();
    println!("Saved window_poster.png");
}

// ridgeline holds the landscape generation and compositing pipeline
pub mod color;
pub mod compose;
pub mod midpoint;
pub mod normalize;
pub mod palettes;
pub mod pipeline;
pub mod raster;
pub mod rng;
pub mod smooth;

pub use color::{Color, interpolate_colors, layer_colors};
pub use compose::{
    Margin, SkyElement, apply_texture, draw_margin, draw_mountains, draw_sky_element, sky_canvas,
};
pub use midpoint::{HeightField, Midpoint1D};
pub use normalize::{depth_band, normalize, normalize_layers};
pub use palettes::Palette;
pub use pipeline::{LandscapeConfig, compose_stack, generate_stack, render};
pub use rng::{FixedSource, SeededSource};
pub use smooth::{smooth, smooth_layers};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LandscapeError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

// Source of the random samples consumed by the generator.
// Implementations must be reproducible for a fixed seed or sequence so
// regeneration can be replayed in tests.
pub trait DisplacementSource {
    // Uniform sample in [low, high].
    fn uniform(&mut self, low: f64, high: f64) -> f64;
}

use image::{GrayImage, RgbaImage};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::compose::{self, Margin, SkyElement};
use crate::midpoint::{HeightField, Midpoint1D};
use crate::normalize::normalize_layers;
use crate::palettes::{self, Palette};
use crate::smooth::smooth_layers;
use crate::{DisplacementSource, LandscapeError};

// Everything one frame needs. Owned by the host and passed by reference;
// the pipeline keeps no state between calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandscapeConfig {
    pub width: u32,
    pub height: u32,
    pub layers: usize,
    pub roughness: f64,
    // each successive layer gets roughness / (layer + 1)
    pub decrease_roughness: bool,
    pub lower_padding: u32,
    pub upper_padding: u32,
    // percentage of vertical overlap between adjacent depth bands
    pub intersection: f64,
    pub smoothing: usize,
    pub sky_element: SkyElement,
    pub sky_radius: i64,
    pub sky_center: (i64, i64),
    pub white_outline: bool,
    pub margin: Margin,
    pub palette: Palette,
    pub texture_strength: f64,
}

impl Default for LandscapeConfig {
    fn default() -> Self {
        Self {
            width: 2480,
            height: 3508,
            layers: 3,
            roughness: 300.0,
            decrease_roughness: true,
            lower_padding: 100,
            upper_padding: 100,
            intersection: 0.0,
            smoothing: 0,
            sky_element: SkyElement::Sun,
            sky_radius: 0,
            sky_center: (0, 0),
            white_outline: false,
            margin: Margin::None,
            palette: palettes::desert(),
            texture_strength: 0.5,
        }
    }
}

impl LandscapeConfig {
    pub fn validate(&self) -> Result<(), LandscapeError> {
        if self.width == 0 || self.height == 0 {
            return Err(LandscapeError::InvalidArgument(format!(
                "canvas dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width < 3 {
            return Err(LandscapeError::InvalidArgument(format!(
                "canvas width {} is too narrow to subdivide",
                self.width
            )));
        }
        if self.roughness < 0.0 {
            return Err(LandscapeError::InvalidArgument(format!(
                "roughness must be non-negative, got {}",
                self.roughness
            )));
        }
        if self.layers == 0 {
            return Err(LandscapeError::InvalidConfiguration(
                "at least one mountain layer is required".into(),
            ));
        }
        if self.lower_padding + self.upper_padding >= self.height {
            return Err(LandscapeError::InvalidConfiguration(format!(
                "padding {}+{} does not fit into image height {}",
                self.lower_padding, self.upper_padding, self.height
            )));
        }
        if !(0.0..=100.0).contains(&self.intersection) {
            return Err(LandscapeError::InvalidConfiguration(format!(
                "intersection must be a percentage in 0..=100, got {}",
                self.intersection
            )));
        }
        Ok(())
    }
}

// Raw height fields, one per layer, farthest first. Kept separate from
// composition so the host can re-normalize or re-smooth a stack without
// regenerating it.
pub fn generate_stack(
    config: &LandscapeConfig,
    source: &mut dyn DisplacementSource,
) -> Result<Vec<HeightField>, LandscapeError> {
    config.validate()?;

    let mut stack = Vec::with_capacity(config.layers);
    for layer in 0..config.layers {
        let layer_roughness = if config.decrease_roughness {
            config.roughness / (layer + 1) as f64
        } else {
            config.roughness
        };
        // width - 1 segments put one sample on every pixel column
        let generator = Midpoint1D::new(
            config.width as usize - 1,
            config.height as f64,
            layer_roughness,
        )?;
        stack.push(generator.generate(source));
    }
    debug!("generated {} mountain layers", stack.len());
    Ok(stack)
}

// Paint one frame from an already generated stack
pub fn compose_stack(
    config: &LandscapeConfig,
    stack: &[HeightField],
    texture: Option<&GrayImage>,
) -> Result<RgbaImage, LandscapeError> {
    config.validate()?;

    let normalized = normalize_layers(
        stack,
        config.height,
        config.lower_padding,
        config.upper_padding,
        config.intersection,
    )?;
    let shaped = if config.smoothing > 0 {
        smooth_layers(&normalized, config.smoothing)
    } else {
        normalized
    };

    let mut canvas = compose::sky_canvas(config.width, config.height, config.palette.sky)?;
    compose::draw_sky_element(
        &mut canvas,
        config.sky_element,
        config.sky_radius,
        config.sky_center.0,
        config.sky_center.1,
        config.palette.sun,
        config.white_outline,
    );
    compose::draw_mountains(
        &mut canvas,
        &shaped,
        &config.palette.land,
        config.palette.sky,
        config.white_outline,
    )?;
    if config.margin != Margin::None {
        canvas = compose::draw_margin(&canvas, config.margin);
    }
    if let Some(texture) = texture {
        canvas = compose::apply_texture(&canvas, texture, config.texture_strength);
    }
    debug!(
        "composited {}x{} frame with {} layers",
        config.width,
        config.height,
        shaped.len()
    );
    Ok(canvas)
}

// Full pipeline: generate, normalize, smooth, composite
pub fn render(
    config: &LandscapeConfig,
    source: &mut dyn DisplacementSource,
    texture: Option<&GrayImage>,
) -> Result<RgbaImage, LandscapeError> {
    let stack = generate_stack(config, source)?;
    compose_stack(config, &stack, texture)
}

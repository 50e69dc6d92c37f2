use crate::LandscapeError;

// RGBA color, one byte per channel
pub type Color = [u8; 4];

pub const WHITE: Color = [255, 255, 255, 255];

// Per-channel linear interpolation between two colors. The first entry is
// `start`, the last is `end`; the alpha channel is forced to fully opaque.
pub fn interpolate_colors(
    start: Color,
    end: Color,
    divisions: usize,
) -> Result<Vec<Color>, LandscapeError> {
    if divisions < 2 {
        return Err(LandscapeError::InvalidArgument(format!(
            "color interpolation needs at least 2 divisions, got {divisions}"
        )));
    }

    let steps = (divisions - 1) as f64;
    let mut colors = Vec::with_capacity(divisions);
    for step in 0..divisions {
        let t = step as f64 / steps;
        let mut color = [0u8, 0, 0, 255];
        for channel in 0..3 {
            let a = start[channel] as f64;
            let b = end[channel] as f64;
            color[channel] = (a + (b - a) * t) as u8;
        }
        colors.push(color);
    }
    Ok(colors)
}

// Fill color for every layer in paint order. A single land color is expanded
// into a gradient toward the sky, so the nearest layer keeps the base color
// and the farthest fades into the horizon; multiple land colors cycle.
pub fn layer_colors(
    land: &[Color],
    sky: Color,
    num_layers: usize,
) -> Result<Vec<Color>, LandscapeError> {
    if land.is_empty() {
        return Err(LandscapeError::InvalidConfiguration(
            "palette needs at least one land color".into(),
        ));
    }
    if num_layers == 0 {
        return Ok(Vec::new());
    }
    if land.len() > 1 {
        return Ok((0..num_layers)
            .map(|layer| land[layer % land.len()])
            .collect());
    }

    let gradient = interpolate_colors(land[0], sky, num_layers + 1)?;
    Ok((0..num_layers)
        .map(|layer| gradient[num_layers - layer - 1])
        .collect())
}

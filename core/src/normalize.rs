use crate::{LandscapeError, midpoint::HeightField};

// Vertical pixel range a layer is mapped into: (top row, bottom row)
pub type DepthBand = (f64, f64);

// Linearly rescale a field so its minimum lands on `lower` and its maximum
// on `upper`. A constant field has no usable range and collapses to `lower`.
pub fn normalize(field: &[f64], lower: f64, upper: f64) -> HeightField {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &value in field {
        min = min.min(value);
        max = max.max(value);
    }

    let previous_range = max - min;
    if field.is_empty() || previous_range == 0.0 {
        return vec![lower; field.len()];
    }

    let new_range = upper - lower;
    field
        .iter()
        .map(|&value| (value - min) * new_range / previous_range + lower)
        .collect()
}

// Depth band for layer `layer` of `num_layers`. Later layers sit lower on
// the canvas (nearer); raising `intersection` pulls the bottom of the
// earlier bands upward so adjacent layers overlap.
pub fn depth_band(
    image_height: f64,
    lower_padding: f64,
    upper_padding: f64,
    intersection: f64,
    layer: usize,
    num_layers: usize,
) -> DepthBand {
    let span = image_height - lower_padding - upper_padding;
    let low = span / num_layers as f64 * layer as f64 + upper_padding;
    let high = image_height
        - lower_padding
        - span / num_layers as f64 * (num_layers - layer - 1) as f64 * intersection / 100.0;
    (low, high)
}

// Map every layer of the stack into its depth band. Returns a new stack;
// the raw fields stay untouched so the caller can re-normalize them later.
pub fn normalize_layers(
    stack: &[HeightField],
    image_height: u32,
    lower_padding: u32,
    upper_padding: u32,
    intersection: f64,
) -> Result<Vec<HeightField>, LandscapeError> {
    if lower_padding + upper_padding >= image_height {
        return Err(LandscapeError::InvalidConfiguration(format!(
            "padding {lower_padding}+{upper_padding} does not fit into image height {image_height}"
        )));
    }
    if !(0.0..=100.0).contains(&intersection) {
        return Err(LandscapeError::InvalidConfiguration(format!(
            "intersection must be a percentage in 0..=100, got {intersection}"
        )));
    }

    let num_layers = stack.len();
    Ok(stack
        .iter()
        .enumerate()
        .map(|(layer, field)| {
            let (low, high) = depth_band(
                image_height as f64,
                lower_padding as f64,
                upper_padding as f64,
                intersection,
                layer,
                num_layers,
            );
            normalize(field, low, high)
        })
        .collect())
}

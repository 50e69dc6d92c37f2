use crate::midpoint::HeightField;

// Sliding-window mean over a field. The window is truncated at the ends,
// so border columns average over fewer neighbours. Radius 0 is the identity.
pub fn smooth(field: &[f64], radius: usize) -> HeightField {
    let len = field.len();
    let mut smoothed = Vec::with_capacity(len);
    for column in 0..len {
        let lower = column.saturating_sub(radius);
        let upper = (column + radius + 1).min(len);
        let window = &field[lower..upper];
        smoothed.push(window.iter().sum::<f64>() / window.len() as f64);
    }
    smoothed
}

pub fn smooth_layers(stack: &[HeightField], radius: usize) -> Vec<HeightField> {
    stack.iter().map(|layer| smooth(layer, radius)).collect()
}

use std::collections::VecDeque;

use crate::{DisplacementSource, LandscapeError};

// Column heights for one terrain silhouette, one entry per pixel column
pub type HeightField = Vec<f64>;

// 1D fractal silhouette generator using midpoint displacement
pub struct Midpoint1D {
    width: usize,   // segment width; produces width + 1 samples
    height: f64,    // nominal vertical unit the endpoints are drawn from
    roughness: f64, // displacement amplitude, halved at each subdivision level
}

impl Midpoint1D {
    pub fn new(width: usize, height: f64, roughness: f64) -> Result<Self, LandscapeError> {
        if width < 2 {
            return Err(LandscapeError::InvalidArgument(format!(
                "segment width must be at least 2, got {width}"
            )));
        }
        if roughness < 0.0 {
            return Err(LandscapeError::InvalidArgument(format!(
                "roughness must be non-negative, got {roughness}"
            )));
        }
        Ok(Self {
            width,
            height,
            roughness,
        })
    }

    // Generate width + 1 column heights. Endpoints are drawn once from the
    // source; every interior column is assigned exactly once.
    pub fn generate(&self, source: &mut dyn DisplacementSource) -> HeightField {
        let mut heights = vec![0.0; self.width + 1];
        heights[0] = source.uniform(0.0, self.height);
        heights[self.width] = source.uniform(0.0, self.height);

        // Explicit FIFO worklist instead of recursion, so stack depth stays
        // flat no matter how wide the terrain is
        let mut segments: VecDeque<(usize, usize, f64)> = VecDeque::new();
        segments.push_back((0, self.width, self.roughness));

        while let Some((left, right, roughness)) = segments.pop_front() {
            // A 3-wide parent leaves a 1-wide child with no interior column
            if right - left < 2 {
                continue;
            }
            let mid = (left + right) / 2;
            let mean = ((heights[left] + heights[right]) / 2.0).round();
            heights[mid] = mean + source.uniform(-roughness, roughness);

            if right - left > 2 {
                let halved = roughness / 2.0;
                segments.push_back((left, mid, halved));
                segments.push_back((mid, right, halved));
            }
        }

        heights
    }
}

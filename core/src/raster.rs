use image::{Rgba, RgbaImage};

use crate::color::Color;

#[inline]
fn put(canvas: &mut RgbaImage, x: i64, y: i64, color: Color) {
    if x >= 0 && y >= 0 && (x as u32) < canvas.width() && (y as u32) < canvas.height() {
        canvas.put_pixel(x as u32, y as u32, Rgba(color));
    }
}

// Filled disc, clipped to the canvas. Radius 0 marks the center pixel.
pub fn fill_circle(canvas: &mut RgbaImage, cx: i64, cy: i64, radius: i64, color: Color) {
    if radius < 0 {
        return;
    }
    let rr = radius * radius;
    for y in (cy - radius)..=(cy + radius) {
        for x in (cx - radius)..=(cx + radius) {
            let dx = x - cx;
            let dy = y - cy;
            if dx * dx + dy * dy <= rr {
                put(canvas, x, y, color);
            }
        }
    }
}

// Ring of the given stroke width, centered on the circle of radius `radius`
pub fn stroke_circle(
    canvas: &mut RgbaImage,
    cx: i64,
    cy: i64,
    radius: i64,
    width: i64,
    color: Color,
) {
    if radius <= 0 || width <= 0 {
        return;
    }
    let half = width / 2;
    let inner = (radius - half).max(0);
    let outer = radius + half;
    let inner2 = inner * inner;
    let outer2 = outer * outer;
    for y in (cy - outer)..=(cy + outer) {
        for x in (cx - outer)..=(cx + outer) {
            let dx = x - cx;
            let dy = y - cy;
            let d2 = dx * dx + dy * dy;
            if d2 >= inner2 && d2 <= outer2 {
                put(canvas, x, y, color);
            }
        }
    }
}

// Scanline fill of a closed polygon (even-odd rule). Scanlines are sampled
// at pixel centers; spans are rounded outward to keep boundary columns.
pub fn fill_polygon(canvas: &mut RgbaImage, points: &[(f64, f64)], color: Color) {
    if points.len() < 3 {
        return;
    }
    let width = canvas.width() as i64;
    let height = canvas.height() as i64;
    let mut crossings: Vec<f64> = Vec::new();

    for row in 0..height {
        let scan_y = row as f64 + 0.5;
        crossings.clear();
        for i in 0..points.len() {
            let (xa, ya) = points[i];
            let (xb, yb) = points[(i + 1) % points.len()];
            if (ya <= scan_y && scan_y < yb) || (yb <= scan_y && scan_y < ya) {
                crossings.push(xa + (scan_y - ya) * (xb - xa) / (yb - ya));
            }
        }
        crossings.sort_by(f64::total_cmp);
        for pair in crossings.chunks(2) {
            if let [x0, x1] = pair {
                let start = (x0.round() as i64).max(0);
                let end = (x1.round() as i64).min(width - 1);
                for x in start..=end {
                    canvas.put_pixel(x as u32, row as u32, Rgba(color));
                }
            }
        }
    }
}

// Thick open or closed polyline: Bresenham along every segment, stamping a
// disc of half the stroke width at each step
pub fn stroke_polyline(
    canvas: &mut RgbaImage,
    points: &[(f64, f64)],
    closed: bool,
    width: i64,
    color: Color,
) {
    if points.len() < 2 || width <= 0 {
        return;
    }
    let radius = (width / 2).max(0);
    let last = if closed {
        points.len()
    } else {
        points.len() - 1
    };
    for i in 0..last {
        let (xa, ya) = points[i];
        let (xb, yb) = points[(i + 1) % points.len()];
        stamp_line(
            canvas,
            xa.round() as i64,
            ya.round() as i64,
            xb.round() as i64,
            yb.round() as i64,
            radius,
            color,
        );
    }
}

fn stamp_line(
    canvas: &mut RgbaImage,
    mut x0: i64,
    mut y0: i64,
    x1: i64,
    y1: i64,
    radius: i64,
    color: Color,
) {
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        fill_circle(canvas, x0, y0, radius, color);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

// Boolean pixel mask used for crescent and margin compositing
pub struct Mask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl Mask {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![false; (width * height) as usize],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y * self.width + x) as usize
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> bool {
        self.bits[self.index(x, y)]
    }

    // Set or carve a filled disc
    pub fn set_circle(&mut self, cx: i64, cy: i64, radius: i64, value: bool) {
        if radius < 0 {
            return;
        }
        let rr = radius * radius;
        for y in (cy - radius)..=(cy + radius) {
            for x in (cx - radius)..=(cx + radius) {
                if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
                    continue;
                }
                let dx = x - cx;
                let dy = y - cy;
                if dx * dx + dy * dy <= rr {
                    let i = self.index(x as u32, y as u32);
                    self.bits[i] = value;
                }
            }
        }
    }

    // Set a filled rectangle, corners inclusive
    pub fn set_rect(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, value: bool) {
        for y in y0.max(0)..=y1.min(self.height as i64 - 1) {
            for x in x0.max(0)..=x1.min(self.width as i64 - 1) {
                let i = self.index(x as u32, y as u32);
                self.bits[i] = value;
            }
        }
    }

    // Pixels inside the mask that touch an outside pixel or the canvas edge
    pub fn boundary(&self) -> Vec<(i64, i64)> {
        let mut edge = Vec::new();
        for y in 0..self.height as i64 {
            for x in 0..self.width as i64 {
                if !self.get(x as u32, y as u32) {
                    continue;
                }
                let mut on_edge = false;
                for (dx, dy) in [(1i64, 0i64), (-1, 0), (0, 1), (0, -1)] {
                    let nx = x + dx;
                    let ny = y + dy;
                    if nx < 0 || ny < 0 || nx >= self.width as i64 || ny >= self.height as i64 {
                        on_edge = true;
                        break;
                    }
                    if !self.get(nx as u32, ny as u32) {
                        on_edge = true;
                        break;
                    }
                }
                if on_edge {
                    edge.push((x, y));
                }
            }
        }
        edge
    }
}

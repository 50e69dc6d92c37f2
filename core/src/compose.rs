use image::{GrayImage, Rgba, RgbaImage, imageops};
use serde::{Deserialize, Serialize};

use crate::LandscapeError;
use crate::color::{Color, WHITE, layer_colors};
use crate::midpoint::HeightField;
use crate::raster::{Mask, fill_circle, fill_polygon, stroke_circle, stroke_polyline};

// Stroke width shared by every white outline (disc, crescent, polygons)
const STROKE_WIDTH: i64 = 12;
// Gap between the canvas border and the margin cut-out
const CIRCLE_SPACING: i64 = 200;
const WINDOW_SPACING: i64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkyElement {
    Sun,
    Moon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Margin {
    None,
    Circle,
    Window,
}

// Fresh canvas filled with the sky color
pub fn sky_canvas(width: u32, height: u32, color: Color) -> Result<RgbaImage, LandscapeError> {
    if width == 0 || height == 0 {
        return Err(LandscapeError::InvalidArgument(format!(
            "canvas dimensions must be positive, got {width}x{height}"
        )));
    }
    Ok(RgbaImage::from_pixel(width, height, Rgba(color)))
}

// Paint the sun or moon. A non-positive radius draws nothing.
pub fn draw_sky_element(
    canvas: &mut RgbaImage,
    element: SkyElement,
    radius: i64,
    center_x: i64,
    center_y: i64,
    color: Color,
    outline: bool,
) {
    if radius <= 0 {
        return;
    }
    match element {
        SkyElement::Sun => {
            fill_circle(canvas, center_x, center_y, radius, color);
            if outline {
                stroke_circle(canvas, center_x, center_y, radius, STROKE_WIDTH, WHITE);
            }
        }
        SkyElement::Moon => {
            // Carving an offset disc out of the full disc leaves the crescent
            let mut mask = Mask::new(canvas.width(), canvas.height());
            mask.set_circle(center_x, center_y, radius, true);
            let inner_radius = (radius as f64 / 1.2).floor() as i64;
            mask.set_circle(
                center_x + radius / 3,
                center_y - radius / 3,
                inner_radius,
                false,
            );
            for y in 0..canvas.height() {
                for x in 0..canvas.width() {
                    if mask.get(x, y) {
                        canvas.put_pixel(x, y, Rgba(color));
                    }
                }
            }
            if outline {
                for (x, y) in mask.boundary() {
                    fill_circle(canvas, x, y, STROKE_WIDTH / 2, WHITE);
                }
            }
        }
    }
}

// Paint the mountain layers in stack order, farthest first, each as a
// polygon closed along the bottom edge of the canvas
pub fn draw_mountains(
    canvas: &mut RgbaImage,
    stack: &[HeightField],
    land: &[Color],
    sky: Color,
    outline: bool,
) -> Result<(), LandscapeError> {
    let colors = layer_colors(land, sky, stack.len())?;
    let image_height = canvas.height() as f64;

    for (layer, field) in stack.iter().enumerate() {
        if field.is_empty() {
            continue;
        }
        let mut points: Vec<(f64, f64)> = Vec::with_capacity(field.len() + 2);
        points.push((0.0, image_height));
        for (column, &height) in field.iter().enumerate() {
            points.push((column as f64, height));
        }
        points.push(((field.len() - 1) as f64, image_height));

        fill_polygon(canvas, &points, colors[layer]);
        if outline {
            stroke_polyline(canvas, &points, true, STROKE_WIDTH, WHITE);
        }
    }
    Ok(())
}

// Frame the canvas with an opaque white margin. Pixels inside the cut-out
// keep their value; everything outside turns white. `None` is the identity.
pub fn draw_margin(canvas: &RgbaImage, margin: Margin) -> RgbaImage {
    if margin == Margin::None {
        return canvas.clone();
    }
    let (width, height) = canvas.dimensions();
    let mut mask = Mask::new(width, height);

    match margin {
        Margin::Circle => {
            let radius = width.min(height) as i64 / 2 - CIRCLE_SPACING;
            mask.set_circle(width as i64 / 2, height as i64 / 2, radius, true);
        }
        Margin::Window => {
            // Arch: a raised disc plus a rectangle hanging from its center
            let radius = width.min(height) as i64 / 2 - WINDOW_SPACING;
            let center_x = width as i64 / 2;
            let center_y = height as i64 / 2 - WINDOW_SPACING;
            mask.set_circle(center_x, center_y, radius, true);
            mask.set_rect(
                center_x - radius,
                center_y,
                center_x + radius,
                center_y + radius * 3 / 2,
                true,
            );
        }
        Margin::None => {}
    }

    let mut out = RgbaImage::from_pixel(width, height, Rgba(WHITE));
    for y in 0..height {
        for x in 0..width {
            if mask.get(x, y) {
                out.put_pixel(x, y, *canvas.get_pixel(x, y));
            }
        }
    }
    out
}

// Blend a grayscale texture over the canvas. The texture is resized to the
// canvas, its luminance scaled by `strength` becomes the per-pixel white
// weight: bright grain pushes pixels toward paper white, dark grain keeps
// the landscape. Output alpha is fully opaque.
pub fn apply_texture(canvas: &RgbaImage, texture: &GrayImage, strength: f64) -> RgbaImage {
    let (width, height) = canvas.dimensions();
    let resized = imageops::resize(texture, width, height, imageops::FilterType::Triangle);
    let strength = strength.clamp(0.0, 1.0);

    let mut out = RgbaImage::from_pixel(width, height, Rgba(WHITE));
    for y in 0..height {
        for x in 0..width {
            let luminance = resized.get_pixel(x, y).0[0] as f64 / 255.0;
            let weight = luminance * strength;
            let source = canvas.get_pixel(x, y).0;
            let mut blended = WHITE;
            for channel in 0..3 {
                blended[channel] =
                    (source[channel] as f64 * (1.0 - weight) + 255.0 * weight) as u8;
            }
            out.put_pixel(x, y, Rgba(blended));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{
        Margin, SkyElement, apply_texture, draw_margin, draw_mountains, draw_sky_element,
        sky_canvas,
    };
    use image::{GrayImage, Luma};

    const SKY: [u8; 4] = [30, 60, 120, 255];
    const SUN: [u8; 4] = [250, 240, 200, 255];

    #[test]
    fn sky_canvas_is_uniform() {
        let canvas = sky_canvas(16, 8, SKY).unwrap();
        assert!(canvas.pixels().all(|p| p.0 == SKY));
    }

    #[test]
    fn sky_canvas_rejects_zero_dimension() {
        assert!(sky_canvas(0, 10, SKY).is_err());
        assert!(sky_canvas(10, 0, SKY).is_err());
    }

    #[test]
    fn sun_disc_is_painted() {
        let mut canvas = sky_canvas(100, 100, SKY).unwrap();
        draw_sky_element(&mut canvas, SkyElement::Sun, 20, 50, 50, SUN, false);
        assert_eq!(canvas.get_pixel(50, 50).0, SUN);
        assert_eq!(canvas.get_pixel(50, 31).0, SUN);
        assert_eq!(canvas.get_pixel(5, 5).0, SKY);
    }

    #[test]
    fn sun_zero_radius_is_a_noop() {
        let mut canvas = sky_canvas(40, 40, SKY).unwrap();
        draw_sky_element(&mut canvas, SkyElement::Sun, 0, 20, 20, SUN, true);
        assert!(canvas.pixels().all(|p| p.0 == SKY));
    }

    #[test]
    fn sun_outline_rings_the_disc() {
        let mut canvas = sky_canvas(120, 120, SKY).unwrap();
        draw_sky_element(&mut canvas, SkyElement::Sun, 30, 60, 60, SUN, true);
        // ring sits on the disc radius, interior keeps the sun color
        assert_eq!(canvas.get_pixel(90, 60).0, [255, 255, 255, 255]);
        assert_eq!(canvas.get_pixel(60, 60).0, SUN);
    }

    #[test]
    fn moon_carves_a_crescent() {
        let mut canvas = sky_canvas(200, 200, SKY).unwrap();
        draw_sky_element(&mut canvas, SkyElement::Moon, 30, 100, 100, SUN, false);
        // left limb of the disc survives the carve
        assert_eq!(canvas.get_pixel(72, 100).0, SUN);
        // the carved disc center goes back to sky
        assert_eq!(canvas.get_pixel(110, 90).0, SKY);
        // well outside the disc
        assert_eq!(canvas.get_pixel(10, 10).0, SKY);
    }

    #[test]
    fn mountains_obey_paint_order() {
        // two flat layers; the later (nearer) one must win where they overlap
        let mut canvas = sky_canvas(40, 100, SKY).unwrap();
        let stack = vec![vec![30.0; 40], vec![60.0; 40]];
        let far = [10, 200, 10, 255];
        let near = [200, 10, 10, 255];
        draw_mountains(&mut canvas, &stack, &[far, near], SKY, false).unwrap();
        assert_eq!(canvas.get_pixel(20, 80).0, near);
        assert_eq!(canvas.get_pixel(20, 45).0, far);
        assert_eq!(canvas.get_pixel(20, 10).0, SKY);
    }

    #[test]
    fn mountains_fill_down_to_the_bottom_edge() {
        let mut canvas = sky_canvas(30, 60, SKY).unwrap();
        let stack = vec![vec![20.0; 30]];
        let land = [80, 70, 60, 255];
        draw_mountains(&mut canvas, &stack, &[land], SKY, false).unwrap();
        for x in 0..30 {
            assert_eq!(canvas.get_pixel(x, 59).0, land);
            assert_eq!(canvas.get_pixel(x, 5).0, SKY);
        }
    }

    #[test]
    fn mountains_outline_strokes_the_silhouette() {
        let mut canvas = sky_canvas(40, 100, SKY).unwrap();
        let stack = vec![vec![30.0; 40]];
        draw_mountains(&mut canvas, &stack, &[[80, 70, 60, 255]], SKY, true).unwrap();
        assert_eq!(canvas.get_pixel(20, 30).0, [255, 255, 255, 255]);
    }

    #[test]
    fn margin_circle_keeps_inside_whitens_outside() {
        let canvas = sky_canvas(600, 600, SKY).unwrap();
        let framed = draw_margin(&canvas, Margin::Circle);
        // cut-out radius is 600/2 - 200 = 100 around the center
        assert_eq!(framed.get_pixel(300, 300).0, SKY);
        assert_eq!(framed.get_pixel(300, 210).0, SKY);
        assert_eq!(framed.get_pixel(0, 0).0, [255, 255, 255, 255]);
        assert_eq!(framed.get_pixel(300, 180).0, [255, 255, 255, 255]);
    }

    #[test]
    fn margin_window_hangs_below_the_disc() {
        let canvas = sky_canvas(800, 1000, SKY).unwrap();
        let framed = draw_margin(&canvas, Margin::Window);
        // disc radius 100, center (400, 200); rectangle reaches y = 350
        assert_eq!(framed.get_pixel(400, 150).0, SKY);
        assert_eq!(framed.get_pixel(400, 340).0, SKY);
        assert_eq!(framed.get_pixel(400, 360).0, [255, 255, 255, 255]);
        assert_eq!(framed.get_pixel(0, 0).0, [255, 255, 255, 255]);
    }

    #[test]
    fn margin_none_is_identity() {
        let canvas = sky_canvas(50, 50, SKY).unwrap();
        let framed = draw_margin(&canvas, Margin::None);
        assert_eq!(framed, canvas);
    }

    #[test]
    fn texture_black_grain_keeps_the_image() {
        let canvas = sky_canvas(20, 20, SKY).unwrap();
        let texture = GrayImage::from_pixel(20, 20, Luma([0]));
        let blended = apply_texture(&canvas, &texture, 1.0);
        assert!(blended.pixels().all(|p| p.0 == SKY));
    }

    #[test]
    fn texture_white_grain_washes_to_paper() {
        let canvas = sky_canvas(20, 20, SKY).unwrap();
        let texture = GrayImage::from_pixel(20, 20, Luma([255]));
        let blended = apply_texture(&canvas, &texture, 1.0);
        assert!(blended.pixels().all(|p| p.0 == [255, 255, 255, 255]));
    }

    #[test]
    fn texture_strength_scales_the_mask() {
        let canvas = sky_canvas(20, 20, SKY).unwrap();
        let texture = GrayImage::from_pixel(20, 20, Luma([255]));
        let untouched = apply_texture(&canvas, &texture, 0.0);
        assert!(untouched.pixels().all(|p| p.0 == SKY));
        let half = apply_texture(&canvas, &texture, 0.5);
        let p = half.get_pixel(10, 10).0;
        assert!(p[0] > SKY[0] && p[0] < 255);
        assert_eq!(p[3], 255);
    }
}

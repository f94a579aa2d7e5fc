//! Frame rasterization into RGBA images
//!
//! Shared by the GIF recorder (at the configured viewport size) and the
//! terminal renderer (at two pixels per character cell).

use crate::io::configuration::SPOKE_WIDTH;
use crate::math::color::Color;
use crate::math::geometry::{Point, Rect, bar_rect, spoke, wedge};
use crate::render::{DisplayMethod, FrameView};
use image::{Rgba, RgbaImage};

/// Redraw `image` from scratch for `frame`
///
/// The image keeps its dimensions; they define the viewport.
pub fn rasterize(frame: &FrameView<'_>, image: &mut RgbaImage) {
    clear(image, Color::BLACK);

    let width = f64::from(image.width());
    let height = f64::from(image.height());
    let count = frame.values.len();

    for (index, &value) in frame.values.iter().enumerate() {
        let Some(color) = frame.palette.color_for(value) else {
            continue;
        };

        match frame.config.display_method() {
            DisplayMethod::Bars => {
                fill_rect(image, bar_rect(index, value, count, width, height), color);
            }
            DisplayMethod::Spiral => {
                let (from, to) = spoke(index, value, count, width, height);
                draw_line(image, from, to, SPOKE_WIDTH, color);
            }
            DisplayMethod::Circle => {
                fill_triangle(image, wedge(index, count, width, height), color);
            }
        }
    }
}

/// Paint every pixel with `color`
pub fn clear(image: &mut RgbaImage, color: Color) {
    let rgba = Rgba(color.to_rgba());
    for pixel in image.pixels_mut() {
        *pixel = rgba;
    }
}

/// Fill the pixels whose rounded span lies inside `rect`
///
/// Adjacent rectangles sharing an edge never overlap or leave a gap.
pub fn fill_rect(image: &mut RgbaImage, rect: Rect, color: Color) {
    let (x_start, x_end) = pixel_span(rect.x0, rect.x1, image.width());
    let (y_start, y_end) = pixel_span(rect.y0, rect.y1, image.height());
    for y in y_start..y_end {
        for x in x_start..x_end {
            put(image, i64::from(x), i64::from(y), color);
        }
    }
}

/// Stroke a straight line `thickness` pixels wide
pub fn draw_line(image: &mut RgbaImage, from: Point, to: Point, thickness: u32, color: Color) {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as u32;
    let offset = i64::from(thickness.saturating_sub(1) / 2);

    for step in 0..=steps {
        let t = f64::from(step) / f64::from(steps);
        let x = dx.mul_add(t, from.x).floor() as i64 - offset;
        let y = dy.mul_add(t, from.y).floor() as i64 - offset;
        for oy in 0..i64::from(thickness) {
            for ox in 0..i64::from(thickness) {
                put(image, x + ox, y + oy, color);
            }
        }
    }
}

/// Fill the pixels whose centres lie inside the triangle (either winding)
pub fn fill_triangle(image: &mut RgbaImage, corners: [Point; 3], color: Color) {
    let [a, b, c] = corners;
    let area = edge(a, b, c);
    if area.abs() < f64::EPSILON {
        return;
    }

    let (x_start, x_end) = pixel_span(
        a.x.min(b.x).min(c.x),
        a.x.max(b.x).max(c.x) + 1.0,
        image.width(),
    );
    let (y_start, y_end) = pixel_span(
        a.y.min(b.y).min(c.y),
        a.y.max(b.y).max(c.y) + 1.0,
        image.height(),
    );

    for y in y_start..y_end {
        for x in x_start..x_end {
            let p = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
            let w0 = edge(b, c, p) * area.signum();
            let w1 = edge(c, a, p) * area.signum();
            let w2 = edge(a, b, p) * area.signum();
            if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                put(image, i64::from(x), i64::from(y), color);
            }
        }
    }
}

/// Twice the signed area of `(a, b, p)`
fn edge(a: Point, b: Point, p: Point) -> f64 {
    (b.x - a.x).mul_add(p.y - a.y, -((b.y - a.y) * (p.x - a.x)))
}

/// Rounded `[start, end)` clamped to `[0, limit]`
fn pixel_span(start: f64, end: f64, limit: u32) -> (u32, u32) {
    let clamp = |value: f64| value.round().clamp(0.0, f64::from(limit)) as u32;
    (clamp(start), clamp(end))
}

fn put(image: &mut RgbaImage, x: i64, y: i64, color: Color) {
    let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
        return;
    };
    if let Some(pixel) = image.get_pixel_mut_checked(x, y) {
        *pixel = Rgba(color.to_rgba());
    }
}

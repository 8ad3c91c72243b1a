//! Filled shapes: rectangles, gradients, polygons, rounded rectangles

use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_rect_mut, draw_polygon_mut};
use imageproc::point::Point;
use imageproc::rect::Rect;

/// Inclusive pixel bounds `[x0, y0, x1, y1]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Bounds {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Whole-canvas bounds
    pub fn of_canvas(width: u32, height: u32) -> Self {
        Self::new(0, 0, width as i32 - 1, height as i32 - 1)
    }

    pub fn width(&self) -> i32 {
        self.x1 - self.x0 + 1
    }

    pub fn height(&self) -> i32 {
        self.y1 - self.y0 + 1
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Shrink every side by `by` pixels
    pub fn inset(&self, by: i32) -> Self {
        Self::new(self.x0 + by, self.y0 + by, self.x1 - by, self.y1 - by)
    }

    fn to_rect(self) -> Option<Rect> {
        if self.is_empty() {
            return None;
        }
        Some(Rect::at(self.x0, self.y0).of_size(self.width() as u32, self.height() as u32))
    }
}

/// Fill `bounds` and stroke its border inward, `border_width` pixels thick.
/// Parts outside the canvas are clipped.
pub fn draw_rectangle(
    canvas: &mut RgbaImage,
    bounds: Bounds,
    fill: Rgba<u8>,
    outline: Option<Rgba<u8>>,
    border_width: u32,
) {
    match outline {
        Some(outline) if border_width > 0 => {
            fill_bounds(canvas, bounds, outline);
            fill_bounds(canvas, bounds.inset(border_width as i32), fill);
        }
        _ => fill_bounds(canvas, bounds, fill),
    }
}

fn fill_bounds(canvas: &mut RgbaImage, bounds: Bounds, color: Rgba<u8>) {
    if let Some(rect) = bounds.to_rect() {
        draw_filled_rect_mut(canvas, rect, color);
    }
}

/// Row color of a vertical gradient: channels interpolated by `y / height`
/// and truncated. Alpha is always opaque.
pub fn gradient_color(top: Rgba<u8>, bottom: Rgba<u8>, y: u32, height: u32) -> Rgba<u8> {
    let ratio = y as f64 / height as f64;
    let mix = |a: u8, b: u8| (a as f64 * (1.0 - ratio) + b as f64 * ratio) as u8;
    Rgba([
        mix(top[0], bottom[0]),
        mix(top[1], bottom[1]),
        mix(top[2], bottom[2]),
        255,
    ])
}

/// Fill the whole canvas with a top-to-bottom gradient
pub fn draw_vertical_gradient(canvas: &mut RgbaImage, top: Rgba<u8>, bottom: Rgba<u8>) {
    let (width, height) = canvas.dimensions();
    for y in 0..height {
        let color = gradient_color(top, bottom, y, height);
        for x in 0..width {
            canvas.put_pixel(x, y, color);
        }
    }
}

/// Fill a simple polygon. A repeated closing vertex is dropped; fewer than
/// three distinct vertices draws nothing.
pub fn draw_polygon(canvas: &mut RgbaImage, vertices: &[(i32, i32)], fill: Rgba<u8>) {
    let mut points: Vec<Point<i32>> = vertices.iter().map(|&(x, y)| Point::new(x, y)).collect();
    points.dedup();
    if points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
    if points.len() < 3 {
        return;
    }
    draw_polygon_mut(canvas, &points, fill);
}

/// Largest corner radius whose corner discs fit inside `bounds`
pub fn clamp_corner_radius(bounds: Bounds, radius: i32) -> i32 {
    let max = ((bounds.width().min(bounds.height()) - 1) / 2).max(0);
    radius.clamp(0, max)
}

/// Rounded rectangle built from two mid-band rectangles and four corner discs.
///
/// With an outline, the outer shape is painted in the outline color and the
/// shape inset by `border_width` (radius shrunk by the same amount) in the
/// fill color. The radius is clamped with [`clamp_corner_radius`].
pub fn draw_rounded_rectangle(
    canvas: &mut RgbaImage,
    bounds: Bounds,
    radius: u32,
    fill: Rgba<u8>,
    outline: Option<Rgba<u8>>,
    border_width: u32,
) {
    let radius = radius as i32;
    match outline {
        Some(outline) if border_width > 0 => {
            let inset = border_width as i32;
            fill_rounded(canvas, bounds, radius, outline);
            fill_rounded(canvas, bounds.inset(inset), radius - inset, fill);
        }
        _ => fill_rounded(canvas, bounds, radius, fill),
    }
}

fn fill_rounded(canvas: &mut RgbaImage, bounds: Bounds, radius: i32, color: Rgba<u8>) {
    if bounds.is_empty() {
        return;
    }
    let r = clamp_corner_radius(bounds, radius);
    let Bounds { x0, y0, x1, y1 } = bounds;

    fill_bounds(canvas, Bounds::new(x0 + r, y0, x1 - r, y1), color);
    fill_bounds(canvas, Bounds::new(x0, y0 + r, x1, y1 - r), color);

    if r == 0 {
        return;
    }
    for center in [
        (x0 + r, y0 + r),
        (x1 - r, y0 + r),
        (x0 + r, y1 - r),
        (x1 - r, y1 - r),
    ] {
        draw_filled_circle_mut(canvas, center, r, color);
    }
}

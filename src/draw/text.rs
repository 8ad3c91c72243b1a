//! Label fonts, text measurement, and label drawing

use super::shapes::Bounds;
use crate::error::{AssetError, AssetResult};
use ab_glyph::{FontVec, PxScale};
use font8x8::{BASIC_FONTS, LATIN_FONTS, UnicodeFonts};
use image::{GrayImage, Luma, Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut};
use imageproc::rect::Rect;
use log::{debug, warn};
use std::fs;
use std::path::PathBuf;

/// Glyph cell size of the built-in bitmap font
const BITMAP_CELL: u32 = 8;

/// Font used to draw labels
pub enum LabelFont {
    /// TrueType/OpenType font loaded from disk
    Vector(FontVec),
    /// Built-in 8x8 bitmap font, integer-scaled
    Bitmap,
}

impl LabelFont {
    /// First loadable candidate, or the bitmap font if none loads
    pub fn load(candidates: &[PathBuf]) -> Self {
        match Self::load_vector(candidates) {
            Ok(font) => font,
            Err(e) => {
                warn!("{}, falling back to built-in bitmap font", e);
                LabelFont::Bitmap
            }
        }
    }

    pub fn load_vector(candidates: &[PathBuf]) -> AssetResult<Self> {
        for path in candidates {
            let Ok(data) = fs::read(path) else {
                continue;
            };
            match FontVec::try_from_vec(data) {
                Ok(font) => {
                    debug!("Using font {}", path.display());
                    return Ok(LabelFont::Vector(font));
                }
                Err(e) => warn!("Ignoring font {}: {}", path.display(), e),
            }
        }
        Err(AssetError::FontUnavailable {
            tried: candidates.len(),
        })
    }

    pub fn is_bitmap(&self) -> bool {
        matches!(self, LabelFont::Bitmap)
    }
}

/// Pixel size, color, and optional drop shadow of a label
#[derive(Debug, Clone, Copy)]
pub struct LabelStyle {
    pub size: f32,
    pub fill: Rgba<u8>,
    /// Drawn first, offset by (+1, +1)
    pub shadow: Option<Rgba<u8>>,
}

impl LabelStyle {
    pub const fn plain(size: f32, fill: Rgba<u8>) -> Self {
        Self {
            size,
            fill,
            shadow: None,
        }
    }

    pub const fn shadowed(size: f32, fill: Rgba<u8>, shadow: Rgba<u8>) -> Self {
        Self {
            size,
            fill,
            shadow: Some(shadow),
        }
    }
}

fn bitmap_scale(size: f32) -> u32 {
    ((size / BITMAP_CELL as f32) as u32).max(1)
}

/// Rendered width and height of `text`
pub fn text_size(font: &LabelFont, size: f32, text: &str) -> (u32, u32) {
    match font {
        LabelFont::Vector(font) => imageproc::drawing::text_size(PxScale::from(size), font, text),
        LabelFont::Bitmap => {
            let chars = text.chars().count() as u32;
            if chars == 0 {
                return (0, 0);
            }
            let cell = BITMAP_CELL * bitmap_scale(size);
            (chars * cell, cell)
        }
    }
}

/// Draw `text` with its top-left corner at `(x, y)`.
///
/// Glyph coverage is rendered into a mask first, then `color` is composited
/// over the canvas with its alpha scaled by coverage. Transparent pixels pick
/// up the label color unchanged, so edges stay straight-alpha.
pub fn draw_text(
    canvas: &mut RgbaImage,
    font: &LabelFont,
    size: f32,
    text: &str,
    origin: (i32, i32),
    color: Rgba<u8>,
) {
    let (width, height) = canvas.dimensions();
    let mask = coverage_mask(width, height, font, size, text, origin);
    for (x, y, coverage) in mask.enumerate_pixels() {
        let coverage = coverage[0] as u32;
        if coverage == 0 {
            continue;
        }
        let alpha = ((color[3] as u32 * coverage + 127) / 255) as u8;
        let src = Rgba([color[0], color[1], color[2], alpha]);
        composite_over(canvas.get_pixel_mut(x, y), src);
    }
}

fn coverage_mask(
    width: u32,
    height: u32,
    font: &LabelFont,
    size: f32,
    text: &str,
    (x, y): (i32, i32),
) -> GrayImage {
    let mut mask = GrayImage::new(width, height);
    match font {
        LabelFont::Vector(font) => {
            draw_text_mut(&mut mask, Luma([255]), x, y, PxScale::from(size), font, text)
        }
        LabelFont::Bitmap => draw_bitmap_text(&mut mask, bitmap_scale(size), text, x, y),
    }
    mask
}

fn draw_bitmap_text(mask: &mut GrayImage, scale: u32, text: &str, x: i32, y: i32) {
    let cell = (BITMAP_CELL * scale) as i32;
    for (i, c) in text.chars().enumerate() {
        let origin_x = x + i as i32 * cell;
        let glyph = BASIC_FONTS.get(c).or_else(|| LATIN_FONTS.get(c));
        for row in 0..BITMAP_CELL as i32 {
            for col in 0..BITMAP_CELL as i32 {
                let on = match glyph {
                    Some(rows) => rows[row as usize] & (1 << col) != 0,
                    // Hollow box for characters the bitmap font lacks
                    None => row == 0 || col == 0 || row == 7 || col == 7,
                };
                if on {
                    let (px, py) = (origin_x + col * scale as i32, y + row * scale as i32);
                    let rect = Rect::at(px, py).of_size(scale, scale);
                    draw_filled_rect_mut(mask, rect, Luma([255]));
                }
            }
        }
    }
}

/// Source-over compositing in straight alpha, rounded to the nearest value.
/// `Pixel::blend` truncates, which can leave opaque pixels at alpha 254.
fn composite_over(dst: &mut Rgba<u8>, src: Rgba<u8>) {
    if src[3] == 255 {
        *dst = src;
        return;
    }
    let src_a = src[3] as f32 / 255.0;
    let dst_a = dst[3] as f32 / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);
    if out_a <= 0.0 {
        return;
    }
    for c in 0..3 {
        let mixed = src[c] as f32 * src_a + dst[c] as f32 * dst_a * (1.0 - src_a);
        dst[c] = (mixed / out_a).round() as u8;
    }
    dst[3] = (out_a * 255.0).round() as u8;
}

/// Top-left origin that centers a `text_w` x `text_h` box inside `region`.
/// Offsets floor-divide, so oversized text starts left of/above the region.
pub fn centered_origin(region: Bounds, text_w: u32, text_h: u32) -> (i32, i32) {
    (
        region.x0 + (region.width() - text_w as i32).div_euclid(2),
        region.y0 + (region.height() - text_h as i32).div_euclid(2),
    )
}

/// Draw a label at `origin`, shadow first
pub fn draw_label(
    canvas: &mut RgbaImage,
    font: &LabelFont,
    style: &LabelStyle,
    text: &str,
    origin: (i32, i32),
) {
    if let Some(shadow) = style.shadow {
        draw_text(canvas, font, style.size, text, (origin.0 + 1, origin.1 + 1), shadow);
    }
    draw_text(canvas, font, style.size, text, origin, style.fill);
}

/// Draw a label centered inside `region`
pub fn draw_centered_label(
    canvas: &mut RgbaImage,
    font: &LabelFont,
    style: &LabelStyle,
    text: &str,
    region: Bounds,
) {
    let (w, h) = text_size(font, style.size, text);
    let origin = centered_origin(region, w, h);
    draw_label(canvas, font, style, text, origin);
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const SHADOW: Rgba<u8> = Rgba([0, 0, 0, 200]);

    fn dejavu() -> LabelFont {
        let data = include_bytes!("../../fonts/DejaVuSans.ttf").to_vec();
        LabelFont::Vector(FontVec::try_from_vec(data).unwrap())
    }

    fn ink_bounds(canvas: &RgbaImage) -> Option<(u32, u32, u32, u32)> {
        canvas
            .enumerate_pixels()
            .filter(|(_, _, p)| p[3] > 0)
            .fold(None, |acc, (x, y, _)| match acc {
                None => Some((x, y, x, y)),
                Some((x0, y0, x1, y1)) => Some((x0.min(x), y0.min(y), x1.max(x), y1.max(y))),
            })
    }

    #[test]
    fn test_missing_fonts_fall_back_to_bitmap() {
        let font = LabelFont::load(&[PathBuf::from("no/such/font.ttf")]);
        assert!(font.is_bitmap());

        let err = LabelFont::load_vector(&[]).err().unwrap();
        assert!(matches!(err, AssetError::FontUnavailable { tried: 0 }));
    }

    #[test]
    fn test_unparseable_font_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let bogus = dir.path().join("bogus.ttf");
        fs::write(&bogus, b"definitely not a font").unwrap();
        assert!(LabelFont::load(&[bogus]).is_bitmap());
    }

    #[test]
    fn test_bitmap_text_size_scales() {
        let font = LabelFont::Bitmap;
        assert_eq!(text_size(&font, 10.0, "W0"), (16, 8));
        assert_eq!(text_size(&font, 16.0, "PANEL"), (80, 16));
        assert_eq!(text_size(&font, 24.0, "A"), (24, 24));
        assert_eq!(text_size(&font, 12.0, ""), (0, 0));
    }

    #[test]
    fn test_centered_origin() {
        assert_eq!(centered_origin(Bounds::of_canvas(32, 32), 16, 8), (8, 12));
        assert_eq!(centered_origin(Bounds::new(10, 10, 19, 19), 4, 4), (13, 13));
        // Oversized text floors toward negative
        assert_eq!(centered_origin(Bounds::of_canvas(10, 10), 15, 10), (-3, 0));
    }

    #[test]
    fn test_bitmap_glyph_pixels() {
        let mut canvas = RgbaImage::new(8, 8);
        draw_text(&mut canvas, &LabelFont::Bitmap, 8.0, "I", (0, 0), WHITE);
        let lit = canvas.pixels().filter(|p| **p == WHITE).count();
        let expected: u32 = BASIC_FONTS.get('I').unwrap().iter().map(|row| row.count_ones()).sum();
        assert_eq!(lit as u32, expected);
    }

    #[test]
    fn test_missing_glyph_draws_box() {
        let mut canvas = RgbaImage::new(8, 8);
        draw_text(&mut canvas, &LabelFont::Bitmap, 8.0, "\u{2191}", (0, 0), WHITE);
        assert_eq!(*canvas.get_pixel(0, 0), WHITE);
        assert_eq!(*canvas.get_pixel(7, 7), WHITE);
        assert_eq!(*canvas.get_pixel(4, 4), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_text_is_clipped() {
        let mut canvas = RgbaImage::new(4, 4);
        draw_text(&mut canvas, &LabelFont::Bitmap, 24.0, "XYZ", (-10, -10), WHITE);
        draw_text(&mut canvas, &LabelFont::Bitmap, 24.0, "XYZ", (100, 100), WHITE);
    }

    #[test]
    fn test_shadow_drawn_under_label() {
        let mut canvas = RgbaImage::new(20, 20);
        let style = LabelStyle::shadowed(8.0, WHITE, SHADOW);
        draw_label(&mut canvas, &LabelFont::Bitmap, &style, "\u{2191}", (2, 2));
        // Box outline at (2..9); the shadow only survives where the label is not
        assert_eq!(*canvas.get_pixel(2, 2), WHITE);
        assert_eq!(*canvas.get_pixel(10, 10), SHADOW);
        assert_eq!(*canvas.get_pixel(3, 10), SHADOW);
    }

    #[test]
    fn test_centered_label_uses_region() {
        let mut canvas = RgbaImage::new(40, 20);
        let style = LabelStyle::plain(8.0, WHITE);
        let region = Bounds::new(20, 0, 39, 19);
        draw_centered_label(&mut canvas, &LabelFont::Bitmap, &style, "\u{2193}", region);
        // 8x8 box centered in x 20..39, y 0..19 starts at (26, 6)
        assert_eq!(*canvas.get_pixel(26, 6), WHITE);
        assert_eq!(*canvas.get_pixel(33, 13), WHITE);
        assert_eq!(*canvas.get_pixel(25, 6), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_font_file_loads_as_vector() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("label.ttf");
        fs::write(&path, include_bytes!("../../fonts/DejaVuSans.ttf")).unwrap();
        let font = LabelFont::load(&[PathBuf::from("missing.ttf"), path]);
        assert!(!font.is_bitmap());
    }

    #[test]
    fn test_vector_label_keeps_straight_alpha() {
        let font = dejavu();
        for color in [WHITE, Rgba([200, 100, 50, 255]), Rgba([255, 255, 255, 200])] {
            let mut canvas = RgbaImage::new(120, 40);
            draw_text(&mut canvas, &font, 20.0, "Mountains", (4, 4), color);

            let inked: Vec<_> = canvas.pixels().filter(|p| p[3] > 0).collect();
            assert!(!inked.is_empty());
            // Anti-aliased edges fade in alpha only, never toward black
            assert!(inked.iter().all(|p| p.0[..3] == color.0[..3]), "{:?}", color);
            assert!(inked.iter().any(|p| p[3] < color[3]));
            assert!(inked.iter().all(|p| p[3] <= color[3]));
        }
    }

    #[test]
    fn test_vector_label_on_opaque_canvas_stays_opaque() {
        let mut canvas = RgbaImage::from_pixel(120, 40, Rgba([70, 130, 180, 255]));
        draw_text(&mut canvas, &dejavu(), 24.0, "SKY", (4, 4), Rgba([255, 255, 255, 200]));
        assert!(canvas.pixels().all(|p| p[3] == 255));
        assert!(canvas.pixels().any(|p| p[0] > 200));
    }

    #[test]
    fn test_vector_text_size() {
        let font = dejavu();
        let (w, h) = text_size(&font, 20.0, "PANEL");
        assert!(w > 20 && w < 100, "width {}", w);
        assert!(h > 8 && h <= 20, "height {}", h);
        assert!(text_size(&font, 40.0, "PANEL").0 > w);
    }

    #[test]
    fn test_vector_label_centered_horizontally() {
        let font = dejavu();
        let mut canvas = RgbaImage::new(128, 32);
        let style = LabelStyle::plain(14.0, WHITE);
        draw_centered_label(&mut canvas, &font, &style, "BUTTON", Bounds::of_canvas(128, 32));

        let (x0, y0, x1, y1) = ink_bounds(&canvas).unwrap();
        let left_margin = x0 as i32;
        let right_margin = 127 - x1 as i32;
        assert!((left_margin - right_margin).abs() <= 3, "{} vs {}", left_margin, right_margin);
        assert!(y0 > 0 && y1 < 31);
    }

    #[test]
    fn test_vector_shadow_is_offset_by_one() {
        let font = dejavu();
        let mut plain = RgbaImage::new(80, 32);
        draw_text(&mut plain, &font, 16.0, "OLD", (10, 6), Rgba([0, 0, 0, 255]));

        // Invisible fill leaves only the shadow behind
        let mut shadow_only = RgbaImage::new(80, 32);
        let style = LabelStyle::shadowed(16.0, Rgba([255, 255, 255, 0]), Rgba([0, 0, 0, 255]));
        draw_label(&mut shadow_only, &font, &style, "OLD", (10, 6));

        assert!(plain.pixels().any(|p| p[3] > 0));
        for (x, y, p) in plain.enumerate_pixels() {
            if x + 1 < 80 && y + 1 < 32 {
                assert_eq!(shadow_only.get_pixel(x + 1, y + 1)[3], p[3], "at ({}, {})", x, y);
            }
        }
        assert!((0..32).all(|y| shadow_only.get_pixel(0, y)[3] == 0));
    }
}

//! Parallax background layers
//!
//! sky.png (opaque gradient), mountains.png and trees.png (transparent),
//! each 640x480 and labeled with its layer depth.

use super::{save_opaque_png, save_png};
use crate::config::GeneratorConfig;
use crate::constants::*;
use crate::draw::{
    Bounds, LabelFont, LabelStyle, centered_origin, draw_label, draw_polygon, draw_rectangle,
    draw_vertical_gradient, text_size,
};
use crate::error::AssetResult;
use image::RgbaImage;
use std::path::PathBuf;

const SKY_LABEL_STYLE: LabelStyle = LabelStyle::plain(SKY_LABEL_SIZE, SKY_LABEL_COLOR);
const LAYER_LABEL_STYLE: LabelStyle = LabelStyle::plain(LAYER_LABEL_SIZE, WHITE);

pub fn sky(font: &LabelFont) -> RgbaImage {
    let (width, height) = BACKGROUND_SIZE;
    let mut canvas = RgbaImage::new(width, height);
    draw_vertical_gradient(&mut canvas, SKY_TOP, SKY_BOTTOM);

    let (text_w, text_h) = text_size(font, SKY_LABEL_STYLE.size, SKY_LABEL);
    let (x, _) = centered_origin(Bounds::of_canvas(width, height), text_w, text_h);
    draw_label(&mut canvas, font, &SKY_LABEL_STYLE, SKY_LABEL, (x, SKY_LABEL_Y));
    canvas
}

pub fn mountains(font: &LabelFont) -> RgbaImage {
    let (width, height) = BACKGROUND_SIZE;
    let mut canvas = RgbaImage::new(width, height);
    for mountain in &MOUNTAINS {
        draw_polygon(&mut canvas, mountain, MOUNTAIN_COLOR);
    }
    draw_label(&mut canvas, font, &LAYER_LABEL_STYLE, MOUNTAINS_LABEL, MOUNTAINS_LABEL_POS);
    canvas
}

pub fn trees(font: &LabelFont) -> RgbaImage {
    let (width, height) = BACKGROUND_SIZE;
    let ground = height as i32;
    let mut canvas = RgbaImage::new(width, height);

    for x in TREE_XS {
        let canopy_base = ground - TRUNK_HEIGHT;
        draw_rectangle(
            &mut canvas,
            Bounds::new(x - TRUNK_HALF_WIDTH, canopy_base, x + TRUNK_HALF_WIDTH, ground),
            TRUNK_COLOR,
            None,
            0,
        );
        draw_polygon(
            &mut canvas,
            &[
                (x, canopy_base - FOLIAGE_HEIGHT),
                (x - FOLIAGE_HALF_WIDTH, canopy_base),
                (x + FOLIAGE_HALF_WIDTH, canopy_base),
            ],
            FOLIAGE_COLOR,
        );
    }
    draw_label(&mut canvas, font, &LAYER_LABEL_STYLE, TREES_LABEL, TREES_LABEL_POS);
    canvas
}

pub fn run(config: &GeneratorConfig) -> AssetResult<Vec<PathBuf>> {
    let font = LabelFont::load(&config.font_paths);
    let dir = config.backgrounds_dir();

    Ok(vec![
        save_opaque_png(sky(&font), &dir.join("sky.png"))?,
        save_png(&mountains(&font), &dir.join("mountains.png"))?,
        save_png(&trees(&font), &dir.join("trees.png"))?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::gradient_color;
    use image::Rgba;

    #[test]
    fn test_sky_gradient_and_label() {
        let sky = sky(&LabelFont::Bitmap);
        assert_eq!(sky.dimensions(), BACKGROUND_SIZE);
        assert_eq!(*sky.get_pixel(0, 0), SKY_TOP);
        assert_eq!(*sky.get_pixel(639, 479), Rgba([70, 130, 180, 255]));

        assert!(sky.pixels().all(|p| p[3] == 255));

        // 18 chars at 3x scale = 432 px wide, centered -> starts at x = 104
        let label: Vec<_> = sky
            .enumerate_pixels()
            .filter(|&(_, y, p)| *p != gradient_color(SKY_TOP, SKY_BOTTOM, y, 480))
            .map(|(x, y, _)| (x, y))
            .collect();
        assert!(!label.is_empty());
        assert!(label.iter().all(|&(x, y)| (104..536).contains(&x) && (50..74).contains(&y)));
    }

    #[test]
    fn test_layer_labels_fade_in_alpha_only() {
        let data = include_bytes!("../../fonts/DejaVuSans.ttf").to_vec();
        let font = LabelFont::Vector(ab_glyph::FontVec::try_from_vec(data).unwrap());
        // Both labels sit over transparency, above the mountain peaks and tree tops
        for layer in [mountains(&font), trees(&font)] {
            let label: Vec<_> = layer
                .enumerate_pixels()
                .filter(|&(_, y, p)| y < 140 && p[3] > 0)
                .map(|(_, _, p)| *p)
                .collect();
            assert!(!label.is_empty());
            assert!(label.iter().all(|p| p.0[..3] == [255, 255, 255]));
            assert!(label.iter().any(|p| p[3] < 255));
        }
    }

    #[test]
    fn test_mountains_transparent_above_peaks() {
        let layer = mountains(&LabelFont::Bitmap);
        assert_eq!(*layer.get_pixel(320, 10), TRANSPARENT);
        assert_eq!(*layer.get_pixel(100, 400), MOUNTAIN_COLOR);
        assert_eq!(*layer.get_pixel(320, 300), MOUNTAIN_COLOR);
        assert_eq!(*layer.get_pixel(560, 450), MOUNTAIN_COLOR);
    }

    #[test]
    fn test_trees() {
        let layer = trees(&LabelFont::Bitmap);
        for x in TREE_XS {
            assert_eq!(*layer.get_pixel(x as u32, 470), TRUNK_COLOR);
            assert_eq!(*layer.get_pixel(x as u32, 360), FOLIAGE_COLOR);
            assert_eq!(*layer.get_pixel(x as u32 + 20, 470), TRANSPARENT);
        }
    }
}

//! Player animation sprite sheets
//!
//! idle.png (4 frames), walk.png (8 frames), jump.png (2 frames), each frame
//! 32x32 and laid out left to right.

use super::save_png;
use crate::config::GeneratorConfig;
use crate::constants::*;
use crate::draw::{
    Bounds, LabelFont, LabelStyle, compose_strip, draw_centered_label, draw_rectangle,
};
use crate::error::AssetResult;
use crate::palettes::Animation;
use image::{Rgba, RgbaImage};
use std::path::PathBuf;

const FRAME_LABEL: LabelStyle = LabelStyle::plain(ANIMATION_LABEL_SIZE, WHITE);

pub fn frame(font: &LabelFont, color: Rgba<u8>, label: &str) -> RgbaImage {
    let size = ANIMATION_FRAME_SIZE;
    let mut canvas = RgbaImage::new(size, size);
    draw_rectangle(
        &mut canvas,
        Bounds::new(2, 2, size as i32 - 3, size as i32 - 3),
        color,
        Some(WHITE),
        ANIMATION_BORDER_WIDTH,
    );
    draw_centered_label(&mut canvas, font, &FRAME_LABEL, label, Bounds::of_canvas(size, size));
    canvas
}

pub fn sheet(font: &LabelFont, animation: Animation) -> RgbaImage {
    let frames: Vec<RgbaImage> = (0..animation.frame_count())
        .map(|i| frame(font, animation.frame_color(i), &animation.frame_label(i)))
        .collect();
    compose_strip(&frames).unwrap_or_else(|| RgbaImage::new(0, ANIMATION_FRAME_SIZE))
}

pub fn run(config: &GeneratorConfig) -> AssetResult<Vec<PathBuf>> {
    let font = LabelFont::load(&config.font_paths);
    let dir = config.player_sprites_dir();

    Animation::ALL
        .iter()
        .map(|&animation| save_png(&sheet(&font, animation), &dir.join(animation.file_name())))
        .collect()
}

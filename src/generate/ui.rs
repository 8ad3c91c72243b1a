//! UI widget generator
//!
//! button.png (128x32) and panel.png (200x150), both rounded rectangles.

use super::save_png;
use crate::config::GeneratorConfig;
use crate::constants::*;
use crate::draw::{
    Bounds, LabelFont, LabelStyle, draw_centered_label, draw_label, draw_rounded_rectangle,
};
use crate::error::AssetResult;
use image::RgbaImage;
use std::path::PathBuf;

const BUTTON_LABEL_STYLE: LabelStyle = LabelStyle::plain(BUTTON_LABEL_SIZE, WHITE);
const PANEL_TITLE_STYLE: LabelStyle = LabelStyle::plain(PANEL_TITLE_SIZE, WHITE);
const PANEL_BODY_STYLE: LabelStyle = LabelStyle::plain(PANEL_BODY_SIZE, PANEL_BODY_COLOR);

pub fn button(font: &LabelFont) -> RgbaImage {
    let (width, height) = BUTTON_SIZE;
    let mut canvas = RgbaImage::new(width, height);
    draw_rounded_rectangle(
        &mut canvas,
        Bounds::new(2, 2, width as i32 - 3, height as i32 - 3),
        BUTTON_RADIUS,
        BUTTON_FILL,
        Some(WHITE),
        BUTTON_BORDER_WIDTH,
    );
    draw_centered_label(
        &mut canvas,
        font,
        &BUTTON_LABEL_STYLE,
        BUTTON_LABEL,
        Bounds::of_canvas(width, height),
    );
    canvas
}

pub fn panel(font: &LabelFont) -> RgbaImage {
    let (width, height) = PANEL_SIZE;
    let (w, h) = (width as i32, height as i32);
    let mut canvas = RgbaImage::new(width, height);

    draw_rounded_rectangle(
        &mut canvas,
        Bounds::new(5, 5, w - 6, h - 6),
        PANEL_RADIUS,
        PANEL_FILL,
        Some(PANEL_OUTLINE),
        PANEL_BORDER_WIDTH,
    );
    // Title bar
    draw_rounded_rectangle(
        &mut canvas,
        Bounds::new(8, 8, w - 9, 35),
        PANEL_TITLE_RADIUS,
        PANEL_TITLE_FILL,
        None,
        0,
    );

    draw_label(&mut canvas, font, &PANEL_TITLE_STYLE, PANEL_TITLE, PANEL_TITLE_POS);
    for (line, y) in PANEL_BODY_LINES {
        draw_label(&mut canvas, font, &PANEL_BODY_STYLE, line, (PANEL_BODY_X, y));
    }
    canvas
}

pub fn run(config: &GeneratorConfig) -> AssetResult<Vec<PathBuf>> {
    let font = LabelFont::load(&config.font_paths);
    let dir = config.ui_dir();

    Ok(vec![
        save_png(&button(&font), &dir.join("button.png"))?,
        save_png(&panel(&font), &dir.join("panel.png"))?,
    ])
}

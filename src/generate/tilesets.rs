//! Dungeon tileset generator
//!
//! dungeon.png: an 8x3 grid of 32x32 tiles, each labeled with its 1-based id.

use super::save_png;
use crate::config::GeneratorConfig;
use crate::constants::*;
use crate::draw::{Bounds, LabelFont, LabelStyle, compose_grid, draw_centered_label, draw_rectangle};
use crate::error::AssetResult;
use crate::palettes::{tile_color, tile_kind, tile_name};
use image::RgbaImage;
use log::debug;
use std::path::PathBuf;

const TILE_LABEL: LabelStyle = LabelStyle::plain(TILE_LABEL_SIZE, WHITE);

pub fn tile(font: &LabelFont, id: u32) -> RgbaImage {
    debug!("Tile {}: {} ({:?})", id, tile_name(id), tile_kind(id));
    let size = TILE_SIZE;
    let mut canvas = RgbaImage::new(size, size);
    draw_rectangle(
        &mut canvas,
        Bounds::new(1, 1, size as i32 - 2, size as i32 - 2),
        tile_color(id),
        Some(TILE_BORDER_COLOR),
        TILE_BORDER_WIDTH,
    );
    let label = id.to_string();
    draw_centered_label(&mut canvas, font, &TILE_LABEL, &label, Bounds::of_canvas(size, size));
    canvas
}

pub fn dungeon(font: &LabelFont) -> RgbaImage {
    let tiles: Vec<RgbaImage> = (1..=TILESET_COLS * TILESET_ROWS)
        .map(|id| tile(font, id))
        .collect();
    compose_grid(&tiles, TILESET_COLS, TILE_SIZE)
}

pub fn run(config: &GeneratorConfig) -> AssetResult<Vec<PathBuf>> {
    let font = LabelFont::load(&config.font_paths);
    let path = save_png(&dungeon(&font), &config.tilesets_dir().join("dungeon.png"))?;
    Ok(vec![path])
}

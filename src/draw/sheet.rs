//! Compose frames and tiles into sheets

use image::{RgbaImage, imageops};

/// Paste equal-size frames left to right, in order.
/// Returns `None` for an empty frame list.
pub fn compose_strip(frames: &[RgbaImage]) -> Option<RgbaImage> {
    let first = frames.first()?;
    let (frame_w, frame_h) = first.dimensions();

    let mut sheet = RgbaImage::new(frame_w * frames.len() as u32, frame_h);
    for (i, frame) in frames.iter().enumerate() {
        imageops::replace(&mut sheet, frame, (i as u32 * frame_w) as i64, 0);
    }
    Some(sheet)
}

/// Paste square tiles into a `cols`-wide grid, row-major
pub fn compose_grid(tiles: &[RgbaImage], cols: u32, tile_size: u32) -> RgbaImage {
    let cols = cols.max(1);
    let rows = (tiles.len() as u32).div_ceil(cols);
    let mut grid = RgbaImage::new(tile_size * cols, tile_size * rows);
    for (i, tile) in tiles.iter().enumerate() {
        let (col, row) = (i as u32 % cols, i as u32 / cols);
        imageops::replace(&mut grid, tile, (col * tile_size) as i64, (row * tile_size) as i64);
    }
    grid
}

//! Dungeon tileset colors
//!
//! Tile ids are 1-based and row-major across an 8x3 grid. Tile maps reference
//! these ids directly, so the order here must not change.

use image::Rgba;

pub const TILE_COUNT: u32 = 24;

/// Color used for ids outside 1..=TILE_COUNT
pub const MISSING_TILE_COLOR: Rgba<u8> = Rgba([255, 0, 255, 255]);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    Floor,
    Wall,
    Special,
}

struct TileDef {
    name: &'static str,
    color: Rgba<u8>,
}

const fn tile(name: &'static str, r: u8, g: u8, b: u8) -> TileDef {
    TileDef {
        name,
        color: Rgba([r, g, b, 255]),
    }
}

const TILES: [TileDef; TILE_COUNT as usize] = [
    // Row 1: floors
    tile("Stone floor", 100, 100, 100),
    tile("Dirt floor", 120, 90, 70),
    tile("Blue tile", 80, 80, 120),
    tile("Yellow tile", 120, 120, 80),
    tile("Stone variant", 100, 100, 100),
    tile("Dirt variant", 120, 90, 70),
    tile("Blue variant", 80, 80, 120),
    tile("Yellow variant", 120, 120, 80),
    // Row 2: walls
    tile("Dark stone", 70, 70, 70),
    tile("Dark brick", 60, 50, 40),
    tile("Red brick", 80, 60, 60),
    tile("Green brick", 60, 80, 60),
    tile("Stone wall variant", 70, 70, 70),
    tile("Brick variant", 60, 50, 40),
    tile("Red variant", 80, 60, 60),
    tile("Green variant", 60, 80, 60),
    // Row 3: special
    tile("Gold", 150, 150, 0),
    tile("Danger", 200, 50, 50),
    tile("Safe", 50, 200, 50),
    tile("Water", 50, 50, 200),
    tile("Wood", 150, 100, 50),
    tile("Magic", 100, 50, 100),
    tile("Ice", 200, 200, 200),
    tile("Lava", 255, 140, 0),
];

fn lookup(id: u32) -> Option<&'static TileDef> {
    id.checked_sub(1).and_then(|i| TILES.get(i as usize))
}

pub fn tile_color(id: u32) -> Rgba<u8> {
    lookup(id).map(|t| t.color).unwrap_or(MISSING_TILE_COLOR)
}

pub fn tile_name(id: u32) -> &'static str {
    lookup(id).map(|t| t.name).unwrap_or("Missing")
}

/// Theme of the tileset row holding `id`
pub fn tile_kind(id: u32) -> Option<TileKind> {
    lookup(id)?;
    Some(match (id - 1) / 8 {
        0 => TileKind::Floor,
        1 => TileKind::Wall,
        _ => TileKind::Special,
    })
}

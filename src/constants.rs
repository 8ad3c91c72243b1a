//! Fixed geometry and shared colors for generated assets
//!
//! Sizes here must stay in sync with what the game expects to load.

use image::Rgba;

// =============================================================================
// SHARED COLORS
// =============================================================================

pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub const LABEL_SHADOW: Rgba<u8> = Rgba([0, 0, 0, 200]);

// =============================================================================
// ACTOR SPRITES
// =============================================================================

pub const CHARACTER_SPRITE_SIZE: (u32, u32) = (32, 48);
pub const ITEM_SPRITE_SIZE: (u32, u32) = (24, 24);
pub const ACTOR_BORDER_WIDTH: u32 = 2;
pub const ACTOR_LABEL_SIZE: f32 = 12.0;
pub const NPC_LABEL_CHARS: usize = 3;
pub const ITEM_LABEL_CHARS: usize = 2;
pub const PLAYER_LABEL: &str = "P";
pub const DEFAULT_NPC_NAME: &str = "NPC";
pub const DEFAULT_ITEM_NAME: &str = "Item";

// =============================================================================
// PLAYER ANIMATIONS
// =============================================================================

pub const ANIMATION_FRAME_SIZE: u32 = 32;
pub const ANIMATION_BORDER_WIDTH: u32 = 2;
pub const ANIMATION_LABEL_SIZE: f32 = 10.0;

// =============================================================================
// BACKGROUNDS
// =============================================================================

pub const BACKGROUND_SIZE: (u32, u32) = (640, 480);

pub const SKY_TOP: Rgba<u8> = Rgba([135, 206, 250, 255]); // Light sky blue
pub const SKY_BOTTOM: Rgba<u8> = Rgba([70, 130, 180, 255]); // Steel blue
pub const SKY_LABEL: &str = "SKY LAYER (z:-300)";
pub const SKY_LABEL_Y: i32 = 50;

pub const MOUNTAIN_COLOR: Rgba<u8> = Rgba([80, 80, 120, 200]);
/// Triangle silhouettes: left foot, peak, right foot (feet on the bottom edge)
pub const MOUNTAINS: [[(i32, i32); 3]; 3] = [
    [(0, 480), (100, 200), (250, 480)],
    [(200, 480), (320, 150), (450, 480)],
    [(400, 480), (520, 220), (640, 480)],
];
pub const MOUNTAINS_LABEL: &str = "MOUNTAINS (z:-200)";
pub const MOUNTAINS_LABEL_POS: (i32, i32) = (220, 100);

pub const TREE_XS: [i32; 6] = [50, 150, 250, 350, 450, 550];
pub const TRUNK_COLOR: Rgba<u8> = Rgba([101, 67, 33, 255]);
pub const FOLIAGE_COLOR: Rgba<u8> = Rgba([34, 139, 34, 200]);
pub const TRUNK_HALF_WIDTH: i32 = 5;
pub const TRUNK_HEIGHT: i32 = 100;
pub const FOLIAGE_HALF_WIDTH: i32 = 30;
pub const FOLIAGE_HEIGHT: i32 = 50;
pub const TREES_LABEL: &str = "TREES (z:-100)";
pub const TREES_LABEL_POS: (i32, i32) = (250, 50);

pub const SKY_LABEL_SIZE: f32 = 24.0;
pub const LAYER_LABEL_SIZE: f32 = 20.0;
pub const SKY_LABEL_COLOR: Rgba<u8> = Rgba([255, 255, 255, 200]);

// =============================================================================
// TILESET
// =============================================================================

pub const TILE_SIZE: u32 = 32;
pub const TILESET_COLS: u32 = 8;
pub const TILESET_ROWS: u32 = 3;
pub const TILE_BORDER_COLOR: Rgba<u8> = Rgba([50, 50, 50, 255]);
pub const TILE_BORDER_WIDTH: u32 = 2;
pub const TILE_LABEL_SIZE: f32 = 12.0;

// =============================================================================
// UI ELEMENTS
// =============================================================================

pub const BUTTON_SIZE: (u32, u32) = (128, 32);
pub const BUTTON_RADIUS: u32 = 8;
pub const BUTTON_FILL: Rgba<u8> = Rgba([80, 120, 200, 255]);
pub const BUTTON_BORDER_WIDTH: u32 = 2;
pub const BUTTON_LABEL: &str = "BUTTON";
pub const BUTTON_LABEL_SIZE: f32 = 14.0;

pub const PANEL_SIZE: (u32, u32) = (200, 150);
pub const PANEL_RADIUS: u32 = 12;
pub const PANEL_FILL: Rgba<u8> = Rgba([40, 40, 60, 220]);
pub const PANEL_OUTLINE: Rgba<u8> = Rgba([100, 100, 120, 255]);
pub const PANEL_BORDER_WIDTH: u32 = 3;
pub const PANEL_TITLE_FILL: Rgba<u8> = Rgba([60, 60, 100, 255]);
pub const PANEL_TITLE_RADIUS: u32 = 8;
pub const PANEL_TITLE: &str = "PANEL";
pub const PANEL_TITLE_POS: (i32, i32) = (15, 12);
pub const PANEL_TITLE_SIZE: f32 = 16.0;
pub const PANEL_BODY_COLOR: Rgba<u8> = Rgba([200, 200, 200, 255]);
pub const PANEL_BODY_SIZE: f32 = 12.0;
pub const PANEL_BODY_X: i32 = 15;
pub const PANEL_BODY_LINES: [(&str, i32); 3] =
    [("Content area", 45), ("Line 2", 65), ("Line 3", 85)];

//! Asset descriptor tables
//!
//! Static key -> color tables for actors, tiles, and animation frames. Every
//! lookup is total: unknown keys resolve to a documented default color.

pub mod actors;
pub mod animations;
pub mod tiles;

use image::Rgba;

pub use actors::{
    DEFAULT_ITEM_COLOR, DEFAULT_NPC_COLOR, ITEM_COLORS, NPC_COLORS, PLAYER_COLOR, item_color,
    npc_color,
};
pub use animations::Animation;
pub use tiles::{MISSING_TILE_COLOR, TILE_COUNT, TileKind, tile_color, tile_kind, tile_name};

/// Resolved styling for one generated sprite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetDescriptor {
    /// Semantic key, also the output file stem
    pub key: String,
    pub color: Rgba<u8>,
    pub label: String,
}

impl AssetDescriptor {
    pub fn new(key: impl Into<String>, color: Rgba<u8>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            color,
            label: label.into(),
        }
    }
}

/// First `chars` characters of `name`, uppercased
pub fn short_label(name: &str, chars: usize) -> String {
    name.chars().take(chars).collect::<String>().to_uppercase()
}

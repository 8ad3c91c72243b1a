//! Player, NPC, and item colors

use image::Rgba;

pub const PLAYER_COLOR: Rgba<u8> = Rgba([0, 191, 255, 255]); // Deep sky blue

/// NPC sprite name -> color, matched exactly
pub const NPC_COLORS: &[(&str, Rgba<u8>)] = &[
    ("bartender", Rgba([139, 69, 19, 255])),   // Saddle brown
    ("drunk", Rgba([255, 140, 0, 255])),       // Dark orange
    ("shopkeeper", Rgba([85, 107, 47, 255])),  // Dark olive
    ("stranger", Rgba([75, 0, 130, 255])),     // Indigo
    ("guard", Rgba([178, 34, 34, 255])),       // Firebrick
    ("librarian", Rgba([112, 128, 144, 255])), // Slate gray
    ("hermit", Rgba([107, 142, 35, 255])),     // Olive drab
    ("cat", Rgba([255, 255, 255, 255])),       // White
];

pub const DEFAULT_NPC_COLOR: Rgba<u8> = Rgba([150, 150, 150, 255]);

/// Item-id substring -> color. Checked in this order against the lowercased
/// id; the first key contained in the id wins.
pub const ITEM_COLORS: &[(&str, Rgba<u8>)] = &[
    ("key", Rgba([255, 215, 0, 255])),       // Gold
    ("coin", Rgba([255, 215, 0, 255])),      // Gold
    ("letter", Rgba([245, 245, 220, 255])),  // Beige
    ("note", Rgba([245, 245, 220, 255])),    // Beige
    ("lantern", Rgba([255, 140, 0, 255])),   // Dark orange
    ("matches", Rgba([160, 82, 45, 255])),   // Sienna
    ("rope", Rgba([210, 180, 140, 255])),    // Tan
    ("hook", Rgba([169, 169, 169, 255])),    // Dark gray
    ("mushroom", Rgba([128, 0, 128, 255])),  // Purple
    ("bottle", Rgba([173, 216, 230, 255])),  // Light blue
    ("potion", Rgba([138, 43, 226, 255])),   // Blue violet
    ("book", Rgba([139, 69, 19, 255])),      // Saddle brown
    ("crystal", Rgba([147, 112, 219, 255])), // Medium purple
    ("map", Rgba([222, 184, 135, 255])),     // Burlywood
    ("gemstone", Rgba([220, 20, 60, 255])),  // Crimson
];

pub const DEFAULT_ITEM_COLOR: Rgba<u8> = Rgba([200, 200, 200, 255]);

pub fn npc_color(sprite: &str) -> Rgba<u8> {
    NPC_COLORS
        .iter()
        .find(|(name, _)| *name == sprite)
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_NPC_COLOR)
}

pub fn item_color(item_id: &str) -> Rgba<u8> {
    let id = item_id.to_lowercase();
    ITEM_COLORS
        .iter()
        .find(|(key, _)| id.contains(key))
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_ITEM_COLOR)
}

//! Actor sprite generator
//!
//! One labeled rectangle per actor: the player, every NPC in npcs.json, and
//! every item in items.json. Missing or unreadable data files skip that part.

use super::save_png;
use crate::config::GeneratorConfig;
use crate::constants::*;
use crate::data::{self, ItemEntry, NpcEntry, is_plain_file_stem};
use crate::draw::{Bounds, LabelFont, LabelStyle, draw_centered_label, draw_rectangle};
use crate::error::AssetResult;
use crate::palettes::{AssetDescriptor, PLAYER_COLOR, item_color, npc_color, short_label};
use image::RgbaImage;
use log::{info, warn};
use std::path::PathBuf;

const ACTOR_LABEL: LabelStyle = LabelStyle::shadowed(ACTOR_LABEL_SIZE, WHITE, LABEL_SHADOW);

/// Colored rectangle with a black border and a centered, shadowed label
pub fn actor_sprite(
    font: &LabelFont,
    (width, height): (u32, u32),
    descriptor: &AssetDescriptor,
) -> RgbaImage {
    let mut canvas = RgbaImage::new(width, height);
    draw_rectangle(
        &mut canvas,
        Bounds::new(1, 1, width as i32 - 2, height as i32 - 2),
        descriptor.color,
        Some(BLACK),
        ACTOR_BORDER_WIDTH,
    );
    draw_centered_label(
        &mut canvas,
        font,
        &ACTOR_LABEL,
        &descriptor.label,
        Bounds::of_canvas(width, height),
    );
    canvas
}

pub fn player_descriptor() -> AssetDescriptor {
    AssetDescriptor::new("player", PLAYER_COLOR, PLAYER_LABEL)
}

pub fn npc_descriptor(npc: &NpcEntry) -> AssetDescriptor {
    AssetDescriptor::new(
        npc.sprite.as_str(),
        npc_color(&npc.sprite),
        short_label(&npc.name, NPC_LABEL_CHARS),
    )
}

pub fn item_descriptor(item: &ItemEntry) -> AssetDescriptor {
    AssetDescriptor::new(
        item.id.as_str(),
        item_color(&item.id),
        short_label(&item.id, ITEM_LABEL_CHARS),
    )
}

/// Entries with an empty key are dropped; keys that can't be a file name are
/// dropped with a warning
fn usable_key(key: &str, kind: &str) -> bool {
    if key.is_empty() {
        return false;
    }
    if !is_plain_file_stem(key) {
        warn!("Skipping {} '{}': not a plain file name", kind, key);
        return false;
    }
    true
}

pub fn npc_descriptors(npcs: &[NpcEntry]) -> Vec<AssetDescriptor> {
    npcs.iter()
        .filter(|npc| usable_key(&npc.sprite, "NPC sprite"))
        .map(npc_descriptor)
        .collect()
}

pub fn item_descriptors(items: &[ItemEntry]) -> Vec<AssetDescriptor> {
    items
        .iter()
        .filter(|item| usable_key(&item.id, "item id"))
        .map(item_descriptor)
        .collect()
}

pub fn run(config: &GeneratorConfig) -> AssetResult<Vec<PathBuf>> {
    let font = LabelFont::load(&config.font_paths);
    let sprites_dir = config.sprites_dir();
    let data_dir = config.data_dir();
    let mut created = Vec::new();

    let player = player_descriptor();
    let sprite = actor_sprite(&font, CHARACTER_SPRITE_SIZE, &player);
    created.push(save_png(&sprite, &sprites_dir.join("player.png"))?);

    match data::load_npcs(&data_dir.join(data::NPCS_FILE)) {
        Ok(npcs) => {
            info!("Generating sprites for {} NPCs", npcs.len());
            for descriptor in npc_descriptors(&npcs) {
                let sprite = actor_sprite(&font, CHARACTER_SPRITE_SIZE, &descriptor);
                let path = sprites_dir.join(format!("{}.png", descriptor.key));
                created.push(save_png(&sprite, &path)?);
            }
        }
        Err(e) => warn!("{}; skipping NPC sprites", e),
    }

    match data::load_items(&data_dir.join(data::ITEMS_FILE)) {
        Ok(items) => {
            info!("Generating sprites for {} items", items.len());
            for descriptor in item_descriptors(&items) {
                let sprite = actor_sprite(&font, ITEM_SPRITE_SIZE, &descriptor);
                let path = sprites_dir.join(format!("{}.png", descriptor.key));
                created.push(save_png(&sprite, &path)?);
            }
        }
        Err(e) => warn!("{}; skipping item sprites", e),
    }

    Ok(created)
}

//! Asset generation modules
//!
//! Unified interface for generating placeholder art:
//! - Actor sprites (player, NPCs, items)
//! - Parallax background layers
//! - Player animation sprite sheets
//! - Dungeon tileset
//! - UI widgets
//!
//! Builders are independent. A failing builder is reported and the rest still
//! run.

pub mod actors;
pub mod animations;
pub mod backgrounds;
pub mod tilesets;
pub mod ui;

use crate::config::GeneratorConfig;
use crate::error::{AssetError, AssetResult};
use clap::ValueEnum;
use image::{DynamicImage, RgbaImage};
use log::{error, info};
use std::fs;
use std::path::{Path, PathBuf};

type BuildFn = fn(&GeneratorConfig) -> AssetResult<Vec<PathBuf>>;

/// Which builders to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum AssetGroup {
    #[default]
    All,
    Actors,
    Backgrounds,
    Player,
    Tilesets,
    Ui,
}

const BUILDERS: [(AssetGroup, &str, BuildFn); 5] = [
    (AssetGroup::Actors, "actor sprites", actors::run),
    (AssetGroup::Backgrounds, "backgrounds", backgrounds::run),
    (AssetGroup::Player, "player animations", animations::run),
    (AssetGroup::Tilesets, "tilesets", tilesets::run),
    (AssetGroup::Ui, "UI elements", ui::run),
];

/// Outcome of a generation run
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub created: Vec<PathBuf>,
    pub failures: Vec<(&'static str, AssetError)>,
}

impl GenerationReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Run every builder in `group`, in a fixed order
pub fn run(config: &GeneratorConfig, group: AssetGroup) -> GenerationReport {
    let mut report = GenerationReport::default();

    for (builder_group, name, build) in BUILDERS {
        if group != AssetGroup::All && group != builder_group {
            continue;
        }
        info!("Generating {}...", name);
        match build(config) {
            Ok(paths) => {
                info!("Generated {} file(s) for {}", paths.len(), name);
                report.created.extend(paths);
            }
            Err(e) => {
                error!("Failed to generate {}: {}", name, e);
                report.failures.push((name, e));
            }
        }
    }

    report
}

fn ensure_parent(path: &Path) -> AssetResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| AssetError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Save as RGBA PNG, creating parent directories
pub fn save_png(image: &RgbaImage, path: &Path) -> AssetResult<PathBuf> {
    ensure_parent(path)?;
    image.save(path).map_err(|source| AssetError::Save {
        path: path.to_path_buf(),
        source,
    })?;
    info!("  Created: {}", path.display());
    Ok(path.to_path_buf())
}

/// Save an opaque canvas as RGB PNG
pub fn save_opaque_png(image: RgbaImage, path: &Path) -> AssetResult<PathBuf> {
    ensure_parent(path)?;
    DynamicImage::ImageRgba8(image)
        .into_rgb8()
        .save(path)
        .map_err(|source| AssetError::Save {
            path: path.to_path_buf(),
            source,
        })?;
    info!("  Created: {}", path.display());
    Ok(path.to_path_buf())
}

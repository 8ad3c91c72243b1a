//! Generator configuration
//!
//! Where assets are written and which fonts are tried for labels. Loaded from
//! config/asset_generator.json when present, otherwise defaults.

use log::{info, warn};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Path to the optional config file
pub const CONFIG_FILE: &str = "config/asset_generator.json";

/// Root of the generated asset tree
pub const DEFAULT_ASSETS_DIR: &str = "assets";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Root directory for inputs (data/) and outputs (sprites/, ui/, ...)
    pub assets_dir: PathBuf,
    /// Font files tried in order; the built-in bitmap font is used if none load
    pub font_paths: Vec<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            font_paths: vec![
                PathBuf::from("fonts/DejaVuSans.ttf"),
                PathBuf::from("arial.ttf"),
                PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"),
                PathBuf::from("/usr/share/fonts/TTF/DejaVuSans.ttf"),
                PathBuf::from("/Library/Fonts/Arial.ttf"),
                PathBuf::from("C:\\Windows\\Fonts\\arial.ttf"),
            ],
        }
    }
}

impl GeneratorConfig {
    /// Load from the default config file, or return defaults if it doesn't exist
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(config) => {
                    info!("Loaded generator config from {}", path.display());
                    config
                }
                Err(e) => {
                    warn!("Failed to parse {}: {}, using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Config rooted at `assets_dir` with no font candidates (bitmap labels only)
    pub fn with_assets_dir(assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            assets_dir: assets_dir.into(),
            font_paths: Vec::new(),
        }
    }

    pub fn data_dir(&self) -> PathBuf {
        self.assets_dir.join("data")
    }

    pub fn sprites_dir(&self) -> PathBuf {
        self.assets_dir.join("sprites")
    }

    pub fn player_sprites_dir(&self) -> PathBuf {
        self.sprites_dir().join("player")
    }

    pub fn backgrounds_dir(&self) -> PathBuf {
        self.assets_dir.join("backgrounds")
    }

    pub fn tilesets_dir(&self) -> PathBuf {
        self.assets_dir.join("tilesets")
    }

    pub fn ui_dir(&self) -> PathBuf {
        self.assets_dir.join("ui")
    }
}

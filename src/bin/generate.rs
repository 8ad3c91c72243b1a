//! Placeholder asset generator
//!
//! Usage:
//!   cargo run --bin generate                # Generate everything
//!   cargo run --bin generate actors         # Player, NPC, and item sprites
//!   cargo run --bin generate backgrounds    # Parallax layers
//!   cargo run --bin generate player         # Player animation sheets
//!   cargo run --bin generate tilesets       # Dungeon tileset
//!   cargo run --bin generate ui             # Button and panel

use anyhow::{Result, bail};
use clap::Parser;
use log::{LevelFilter, info};
use placeholder_art::{AssetGroup, GeneratorConfig, generate};

#[derive(Parser, Debug)]
#[command(version, about = "Generate placeholder PNG art assets")]
struct Args {
    /// Asset group to generate
    #[arg(value_enum, default_value_t = AssetGroup::All)]
    target: AssetGroup,
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .format_target(false)
        .init();
    let args = Args::parse();

    let config = GeneratorConfig::load();
    info!("=== Placeholder Asset Generator ===");
    info!("Assets directory: {}", config.assets_dir.display());

    let report = generate::run(&config, args.target);
    info!("Generated {} file(s)", report.created.len());

    if !report.is_success() {
        let failed: Vec<&str> = report.failures.iter().map(|(name, _)| *name).collect();
        bail!("{} builder(s) failed: {}", failed.len(), failed.join(", "));
    }
    Ok(())
}

//! Placeholder art generator for a 2D game prototype
//!
//! Draws labeled rectangles, gradients, polygons, and rounded rectangles into
//! PNG sprites, sprite sheets, tilesets, backgrounds, and UI widgets.

pub mod config;
pub mod constants;
pub mod data;
pub mod draw;
pub mod error;
pub mod generate;
pub mod palettes;

pub use config::GeneratorConfig;
pub use error::{AssetError, AssetResult};
pub use generate::{AssetGroup, GenerationReport};

//! Error kinds raised while loading inputs and writing assets

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    /// Optional input file is absent; the dependent step is skipped
    #[error("input file not found: {}", path.display())]
    MissingInput { path: PathBuf },

    /// Input file exists but could not be read or parsed
    #[error("failed to parse {}: {source}", path.display())]
    InvalidInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// No configured font could be loaded
    #[error("no usable font among {tried} candidate(s)")]
    FontUnavailable { tried: usize },

    #[error("failed to save {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("i/o error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type AssetResult<T> = Result<T, AssetError>;

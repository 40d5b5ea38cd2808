//! Error types for the game core.
//!
//! Nothing here is recoverable at runtime: an unknown colour is a programmer
//! error and an asset failure aborts startup.

use std::path::PathBuf;

use thiserror::Error;

use crate::assets::SpriteId;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("unknown enemy colour `{0}` (expected red, green or blue)")]
    UnknownColor(String),
}

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("sprite {id:?} not found at {}", path.display())]
    Missing { id: SpriteId, path: PathBuf },

    #[error("failed to decode {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A sprite without a single opaque pixel can never collide with anything.
    #[error("sprite {0:?} has no opaque pixels")]
    Empty(SpriteId),
}

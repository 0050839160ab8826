//! Error types for the vine brush

use glam::IVec3;
use thiserror::Error;

/// Main error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    #[error("position {position} is outside the world")]
    OutOfBounds { position: IVec3 },

    #[error("unknown material: {0}")]
    UnknownMaterial(String),

    #[error("invalid block state: {0}")]
    InvalidBlockState(String),

    #[error("invalid setting: {0}")]
    InvalidSetting(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

//! Error types shared by every BARRAGE crate.

use thiserror::Error;

/// Result alias used across the workspace.
pub type Result<T> = std::result::Result<T, GameError>;

/// Everything that can go wrong in the game logic.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameError {
    /// Battery is too hot to fire. Recoverable: callers treat it as a misfire.
    #[error("battery {battery} is overheated")]
    Overheated { battery: usize },

    /// A required template asset was not found at startup. Fatal.
    #[error("required asset '{name}' is missing")]
    AssetMissing { name: String },

    /// Battery index outside the registry.
    #[error("no battery with index {index} (have {count})")]
    UnknownBattery { index: usize, count: usize },

    /// Theatre has no batteries to fire from.
    #[error("theatre has no missile batteries")]
    NoBatteries,

    /// Configuration failed to parse or validate.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Theatre layout failed to parse or validate.
    #[error("invalid theatre layout: {0}")]
    Layout(String),
}

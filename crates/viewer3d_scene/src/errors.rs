//! Error Types
//!
//! [`SceneError`] covers everything that can go wrong while turning a scene
//! file into a [`Scene`](crate::Scene): reading it, parsing it, and building
//! its animators.

use thiserror::Error;
use viewer3d_animation::AnimationError;

#[derive(Error, Debug)]
pub enum SceneError {
    /// Scene file could not be read.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Scene file is not valid JSON or does not match the schema.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// One animation entry of an object was rejected.
    #[error("Invalid animation '{prop}' on object '{object}': {source}")]
    InvalidAnimation {
        object: String,
        prop: String,
        #[source]
        source: AnimationError,
    },

    /// The scene-wide sampling settings were rejected.
    #[error("Invalid scene settings: {0}")]
    InvalidSettings(#[from] AnimationError),

    /// An object has neither a name nor a model path to derive one from.
    #[error("Object #{0} has no name and no model path")]
    MissingName(usize),
}

/// Alias for `Result<T, SceneError>`.
pub type Result<T> = std::result::Result<T, SceneError>;

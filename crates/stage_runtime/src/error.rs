//! Runtime-layer error types.

use stage_object::SpriteId;

/// Errors that can occur while assembling or running a stage.
#[derive(Debug, thiserror::Error)]
pub enum StageError {
    /// Failed to spawn a sprite executor thread.
    #[error("failed to spawn executor thread: {0}")]
    Spawn(#[from] std::io::Error),

    /// A sprite with this ID is already registered on the stage.
    #[error("{0} is already registered")]
    DuplicateSprite(SpriteId),
}

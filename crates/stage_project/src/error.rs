//! Project-layer error types.

/// Errors that can occur loading or saving a project file.
#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    /// Failed to read or write the project file.
    #[error("project file io: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid JSON for the project model.
    #[error("project file parse: {0}")]
    Json(#[from] serde_json::Error),
}

/// CLI error types
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cannot read snapshot {path:?}: {source}")]
    SnapshotRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed snapshot {path:?}: {source}")]
    SnapshotParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Core(#[from] technotes_core::TechNotesError),

    #[error(transparent)]
    View(#[from] technotes_views::ViewError),

    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        CliError::Config(err.to_string())
    }
}

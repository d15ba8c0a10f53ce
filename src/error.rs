//! Error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating a `GameConfig`
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config JSON {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Errors reported by a high-score backend
///
/// These are recoverable: the run has already ended when a submission fails,
/// so callers surface them to the player and keep going.
#[derive(Error, Debug)]
pub enum ScoreServiceError {
    #[error("score storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("score data is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("score service unavailable: {0}")]
    Unavailable(String),
}

use thiserror::Error;

/// Errors emitted while reading or writing the config file.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

use thiserror::Error;

/// Errors originating from SharePoint REST calls.
#[derive(Debug, Error)]
pub enum RestError {
    /// The request never reached the server or the response was cut off.
    #[error("{message}")]
    Transport { message: String },

    #[error("http client setup failed: {0}")]
    Setup(String),

    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<reqwest::Error> for RestError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RestError>;

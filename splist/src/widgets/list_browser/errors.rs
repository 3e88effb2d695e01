use splist_rest::RestError;
use thiserror::Error;

/// Errors surfaced by a list load.
///
/// The display text is what the table shows after `Error: `.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum ListBrowserError {
    #[error("Failed to load list: {status}")]
    ListStatus { status: u16 },
    #[error("Failed to load items: {status}")]
    ItemsStatus { status: u16 },
    #[error("{message}")]
    Transport { message: String },
    #[error("Unexpected response: {message}")]
    Decode { message: String },
    #[error("SharePoint client is not available")]
    ClientUnavailable,
}

impl From<RestError> for ListBrowserError {
    fn from(err: RestError) -> Self {
        match err {
            RestError::Json(err) => Self::Decode {
                message: err.to_string(),
            },
            other => Self::Transport {
                message: other.to_string(),
            },
        }
    }
}

use splist_rest::RestError;
use thiserror::Error;

/// Errors raised while fetching the site's list catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum ListPickerError {
    #[error("HTTP {status}")]
    Status { status: u16 },
    #[error("{message}")]
    Transport { message: String },
    #[error("SharePoint client is not available")]
    ClientUnavailable,
}

impl From<RestError> for ListPickerError {
    fn from(err: RestError) -> Self {
        Self::Transport {
            message: err.to_string(),
        }
    }
}

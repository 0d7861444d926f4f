use thiserror::Error;

/// Errors from fetching the remote version file
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected status: {status}")]
    Status { status: reqwest::StatusCode },
}

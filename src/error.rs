use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Every fetch attempt for a page failed.
    #[error("{url} unavailable after {attempts} attempts: {detail}")]
    Unavailable {
        url: String,
        attempts: usize,
        detail: String,
    },

    /// The chat API answered with a non-success status.
    #[error("telegram rejected message with {status}: {description}")]
    Delivery {
        status: StatusCode,
        description: String,
    },

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

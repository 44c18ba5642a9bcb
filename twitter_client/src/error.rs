use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing credential: {0}")]
    MissingCredential(String),
    #[error("Rate limit exceeded, window resets at {reset}")]
    RateLimit { reset: i64 },
    #[error("Twitter server error: {0}")]
    ServerError(StatusCode),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    #[error("Cannot encode/decode JSON: {0}")]
    JSONError(#[from] serde_json::Error),
    #[error("IO Error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Network Error: {0}")]
    NetworkError(#[from] reqwest::Error),
    #[error("Cannot parse URL: {0}")]
    UrlError(#[from] url::ParseError),
}

impl Error {
    /// Only platform 5xx responses are worth retrying.
    pub fn retryable(&self) -> bool {
        matches!(self, Error::ServerError(_))
    }
}

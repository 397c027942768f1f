use thiserror::Error;

/// The fetched page or archive could not be turned into stories.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid selector '{selector}': {details}")]
    Selector { selector: String, details: String },
    #[error("Invalid archive JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Malformed payload: {0}")]
    Malformed(String),
}

/// A single page request failed. Always all-or-nothing: no partial results.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Request timed out: {0}")]
    Timeout(String),
    #[error("HTTP error: {status}")]
    Status { status: u16 },
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout(e.to_string())
        } else if let Some(status) = e.status() {
            FetchError::Status {
                status: status.as_u16(),
            }
        } else {
            FetchError::Network(e.to_string())
        }
    }
}

//! Error types for the fetch helper.

use thiserror::Error;

/// Why a GET did not produce a usable JSON body.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The server answered with a non-success status (redirects included).
    /// Displays as the status text alone.
    #[error("{status_text}")]
    Status { status: u16, status_text: String },

    /// The request never produced a response.
    #[error("Network error: {0}")]
    Transport(String),

    /// The URL points at another origin.
    #[error("Cross-origin request refused: {0}")]
    CrossOrigin(String),

    /// The URL could not be parsed or joined to the base origin.
    #[error("Invalid url `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The body was not the JSON the caller expected.
    #[error("Malformed response body: {0}")]
    Decode(String),
}

impl FetchError {
    pub fn status(status: u16, status_text: impl Into<String>) -> Self {
        FetchError::Status {
            status,
            status_text: status_text.into(),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            FetchError::Decode(e.to_string())
        } else {
            FetchError::Transport(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_displays_status_text_only() {
        assert_eq!(FetchError::status(404, "Not Found").to_string(), "Not Found");
    }
}

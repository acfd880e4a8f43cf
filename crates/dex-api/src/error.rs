//! Error types for API fetches.

use thiserror::Error;

/// Errors that can occur while talking to the data API.
///
/// The client performs no retries; every failure propagates to the caller
/// unchanged. Error payloads are plain strings so the type stays `Clone`
/// and can travel through the GUI's message loop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// Transport failure or non-success HTTP status.
    #[error("network error: {0}")]
    Network(String),

    /// The response body could not be parsed into the expected shape.
    #[error("decode error: {0}")]
    Decode(String),

    /// The upstream signalled that the requested name does not exist.
    #[error("not found: {0}")]
    NotFound(String),
}

impl ApiError {
    /// Returns a user-friendly message suitable for display in the UI.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Network(_) => "Could not reach the Pokédex service. Check your connection.",
            Self::Decode(_) => "The service returned data in an unexpected shape.",
            Self::NotFound(_) => "That entry does not exist in the Pokédex.",
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

/// Result type alias for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages_are_undifferentiated_but_present() {
        assert!(
            ApiError::Network("connection refused".to_string())
                .user_message()
                .contains("connection")
        );
        assert!(
            ApiError::NotFound("missingno".to_string())
                .user_message()
                .contains("does not exist")
        );
    }
}

//! Error handling for the API module

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Failed to decode a JSON body from the server
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Non-success HTTP status with a body that was not a valid envelope.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// The backend answered `success: false` with an application error.
    #[error("{0}")]
    Backend(String),
}

impl ApiError {
    /// True when the failure happened below the application protocol. The
    /// user then sees a generic message instead of backend-provided text.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Reqwest(_))
    }

    pub(crate) fn from_envelope(error: Option<String>) -> ApiError {
        ApiError::Backend(error.unwrap_or_else(|| "Unknown backend error".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_errors_display_verbatim() {
        let err = ApiError::from_envelope(Some("Title required".to_string()));
        assert_eq!(err.to_string(), "Title required");
        assert!(!err.is_transport());
    }

    #[test]
    fn missing_envelope_error_gets_fallback_text() {
        let err = ApiError::from_envelope(None);
        assert_eq!(err.to_string(), "Unknown backend error");
    }
}

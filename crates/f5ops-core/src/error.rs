use thiserror::Error;

/// Result type alias for iControl REST operations
pub type Result<T> = std::result::Result<T, F5Error>;

/// Errors that can occur when talking to a BIG-IP or BIG-IQ
#[derive(Error, Debug)]
pub enum F5Error {
    /// Authentication failed - bad username/password
    #[error("authentication failed (401): bad username/password?")]
    Unauthorized,

    /// The management API returned a non-2xx status
    #[error("API error ({code}): {message}")]
    Api {
        /// HTTP status code
        code: u16,
        /// Raw response body (iControl errors are not always JSON)
        message: String,
    },

    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Request timed out
    #[error("request timed out after {0} seconds")]
    Timeout(u64),

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid management URL (bad host string)
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl F5Error {
    /// Returns true if the error is due to authentication
    #[must_use]
    pub const fn is_auth_error(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Returns the HTTP status code if the appliance answered at all
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}

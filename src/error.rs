use thiserror::Error;

/// Error type for Immich API operations.
///
/// - `Transport`: network/transport errors (wraps `reqwest::Error`), including
///   connection failures and timeouts that exhausted their retries
/// - `Http`: any non-2xx status other than 422, after retries
/// - `Validation`: HTTP 422, carries the field-level `details` list
/// - `Decode`: a JSON body could not be (de)serialized
/// - `InvalidHeader`: an API key or extra header is not a valid header value
/// - `Config`: missing or malformed client configuration
///
/// `Http` and `Validation` are the API-level errors; use
/// [`ImmichError::is_api_error`] to catch both without discriminating.
#[derive(Debug, Error)]
pub enum ImmichError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status}: {message}")]
    Http {
        status: u16,
        message: String,
        /// Raw response body, kept byte-for-byte.
        body: Vec<u8>,
    },

    #[error("Validation error: {message}")]
    Validation {
        status: u16,
        message: String,
        details: Vec<serde_json::Value>,
    },

    #[error("Deserialization error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ImmichError {
    /// `true` for the errors produced from an API response (`Http` or `Validation`).
    pub fn is_api_error(&self) -> bool {
        matches!(self, Self::Http { .. } | Self::Validation { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// HTTP status carried by an API-level error, or reported by reqwest.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } | Self::Validation { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Message extracted from the error response, if this is an API-level error.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Http { message, .. } | Self::Validation { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Raw body of an `Http` error response.
    pub fn body(&self) -> Option<&[u8]> {
        match self {
            Self::Http { body, .. } => Some(body.as_slice()),
            _ => None,
        }
    }

    /// [`ImmichError::body`] decoded as UTF-8, with invalid sequences replaced.
    pub fn body_text(&self) -> Option<String> {
        self.body()
            .map(|body| String::from_utf8_lossy(body).into_owned())
    }

    /// Field-level validation details; empty for every other kind.
    pub fn details(&self) -> &[serde_json::Value] {
        match self {
            Self::Validation { details, .. } => details,
            _ => &[],
        }
    }
}

pub type Result<T> = std::result::Result<T, ImmichError>;

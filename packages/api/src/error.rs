//! Error types for the inventory API client.

use thiserror::Error;

use crate::claims::ClaimsError;

/// Result type alias for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Message shown when a request never received a response.
pub const NETWORK_ERROR_MESSAGE: &str =
    "Could not reach the server. Check your connection and try again.";

/// Error types for the inventory API client.
#[derive(Error, Debug)]
pub enum ApiError {
    /// No bearer token is stored; raised before any request is built.
    #[error("No token found")]
    MissingToken,

    /// The request was sent but no response came back.
    #[error("{0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("{message}")]
    Backend { status: u16, message: String },

    /// The backend answered 2xx but the payload failed a shape check.
    #[error("{0}")]
    InvalidResponse(String),

    /// A form payload failed client-side validation.
    #[error("{0}")]
    Validation(String),

    #[error("Invalid session token: {0}")]
    Claims(#[from] ClaimsError),

    #[error(transparent)]
    Storage(#[from] store::StorageError),

    /// Any other transport failure, passed through unchanged.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ApiError {
    /// The HTTP status, when the backend produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Backend { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True when the error means the stored credentials are missing or rejected.
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::MissingToken | ApiError::Claims(_))
            || matches!(self.status(), Some(401))
    }

    pub(crate) fn invalid_format() -> Self {
        ApiError::InvalidResponse("Invalid response format".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(ApiError::MissingToken.to_string(), "No token found");
        assert_eq!(
            ApiError::invalid_format().to_string(),
            "Invalid response format"
        );
        let backend = ApiError::Backend {
            status: 404,
            message: "Producto no encontrado".into(),
        };
        assert_eq!(backend.to_string(), "Producto no encontrado");
        assert_eq!(backend.status(), Some(404));
    }

    #[test]
    fn test_is_auth() {
        assert!(ApiError::MissingToken.is_auth());
        assert!(ApiError::Backend { status: 401, message: String::new() }.is_auth());
        assert!(!ApiError::Backend { status: 500, message: String::new() }.is_auth());
        assert!(!ApiError::Network(NETWORK_ERROR_MESSAGE.into()).is_auth());
    }
}

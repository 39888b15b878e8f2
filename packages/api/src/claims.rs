//! # Bearer token claims
//!
//! The backend issues JWTs. The client never verifies signatures (it holds no
//! key); it only needs to read a couple of claims, chiefly the numeric user id
//! that stock movements are attributed to. [`TokenClaims::decode`] checks the
//! `header.payload.signature` shape once and returns typed claims, so no other
//! module splits or base64-decodes tokens by hand.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClaimsError {
    #[error("token must have three dot-separated segments")]
    Malformed,
    #[error("token payload is not valid base64url")]
    Encoding,
    #[error("token payload is not valid JSON: {0}")]
    Payload(String),
    #[error("token carries no user id")]
    MissingUserId,
}

/// Claims read from a bearer token payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TokenClaims {
    /// Subject; the backend puts the user's email or id here.
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub id_usuario: Option<i64>,
    /// Expiry as seconds since the epoch.
    #[serde(default)]
    pub exp: Option<i64>,
}

impl TokenClaims {
    pub fn decode(token: &str) -> Result<Self, ClaimsError> {
        let mut segments = token.split('.');
        let (Some(_header), Some(payload), Some(_signature), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Err(ClaimsError::Malformed);
        };
        if payload.is_empty() {
            return Err(ClaimsError::Malformed);
        }

        // Some issuers keep the padding; the no-pad engine rejects it.
        let bytes = URL_SAFE_NO_PAD
            .decode(payload.trim_end_matches('='))
            .map_err(|_| ClaimsError::Encoding)?;
        serde_json::from_slice(&bytes).map_err(|e| ClaimsError::Payload(e.to_string()))
    }

    /// Numeric user id: `id_usuario` if present, else a numeric `sub`.
    pub fn user_id(&self) -> Result<i64, ClaimsError> {
        if let Some(id) = self.id_usuario {
            return Ok(id);
        }
        self.sub
            .as_deref()
            .and_then(|s| s.parse().ok())
            .ok_or(ClaimsError::MissingUserId)
    }
}

#[cfg(test)]
pub(crate) fn encode_test_token(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.signature")
}

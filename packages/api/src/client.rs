//! # ApiClient: authenticated HTTP plumbing shared by every resource module
//!
//! Each resource module (`services::*`) adds methods to [`ApiClient`] through
//! its own `impl` block and funnels every call through the helpers here, so the
//! request/response contract is stated once:
//!
//! 1. **Headers.** [`ApiClient::auth_headers`] reads the bearer token from
//!    [`SessionStorage`] and fails with [`ApiError::MissingToken`] before any
//!    request is built when there is none. Every call sends `Accept`.
//! 2. **Transport.** A request that never got a response becomes
//!    [`ApiError::Network`] with a connectivity message. Builder errors are
//!    returned unchanged as [`ApiError::Transport`].
//! 3. **Backend errors.** Non-2xx responses are unwrapped: the `detail` field
//!    (a string, or a list of `{msg}` validation entries) becomes the message,
//!    else the per-call default message is used.
//! 4. **Shape.** List endpoints must return a JSON array; anything else is
//!    [`ApiError::InvalidResponse`]. Arrays are sorted ascending by id and
//!    wrapped in a [`Page`].
//!
//! Nothing is retried.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use store::SessionStorage;

use crate::claims::TokenClaims;
use crate::config::ApiConfig;
use crate::error::{ApiError, Result, NETWORK_ERROR_MESSAGE};
use crate::models::{Identified, Page};

pub(crate) const JSON: &str = "application/json";

/// Inventory backend client.
///
/// Cheap to clone; clones share the HTTP connection pool and the storage.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    config: Arc<ApiConfig>,
    storage: SessionStorage,
}

impl ApiClient {
    pub fn new(config: ApiConfig, storage: SessionStorage) -> Self {
        Self {
            http: reqwest::Client::new(),
            config: Arc::new(config),
            storage,
        }
    }

    /// Client for the process-wide [`ApiConfig::global`] configuration.
    pub fn from_env(storage: SessionStorage) -> Self {
        Self::new(ApiConfig::global().clone(), storage)
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn storage(&self) -> &SessionStorage {
        &self.storage
    }

    /// The persisted bearer token.
    pub fn token(&self) -> Result<String> {
        self.storage.token()?.ok_or(ApiError::MissingToken)
    }

    /// Claims of the persisted bearer token.
    pub fn claims(&self) -> Result<TokenClaims> {
        Ok(TokenClaims::decode(&self.token()?)?)
    }

    /// `Authorization` and `Accept` headers for an authenticated call.
    pub fn auth_headers(&self, accept: &str) -> Result<HeaderMap> {
        let token = self.token()?;
        let mut headers = HeaderMap::new();
        let bearer = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| ApiError::Validation("stored token is not a valid header value".into()))?;
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(
            ACCEPT,
            HeaderValue::from_str(accept).unwrap_or(HeaderValue::from_static(JSON)),
        );
        Ok(headers)
    }

    fn authed(&self, method: Method, path: &str, accept: &str) -> Result<RequestBuilder> {
        let headers = self.auth_headers(accept)?;
        Ok(self.http.request(method, self.config.url(path)).headers(headers))
    }

    async fn send(&self, request: RequestBuilder, fallback: &str) -> Result<Response> {
        let response = request.send().await.map_err(|e| {
            if e.is_builder() {
                ApiError::Transport(e)
            } else {
                tracing::warn!("request failed without a response: {e}");
                ApiError::Network(NETWORK_ERROR_MESSAGE.to_string())
            }
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_detail(&body).unwrap_or_else(|| fallback.to_string());
        tracing::debug!("backend answered {status}: {message}");
        Err(ApiError::Backend {
            status: status.as_u16(),
            message,
        })
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        fallback: &str,
    ) -> Result<T> {
        let request = self.authed(Method::GET, path, JSON)?.query(query);
        decode(self.send(request, fallback).await?).await
    }

    /// GET a list endpoint and normalize it into a sorted [`Page`].
    pub(crate) async fn get_list<T: DeserializeOwned + Identified>(
        &self,
        path: &str,
        query: &[(&str, String)],
        fallback: &str,
    ) -> Result<Page<T>> {
        let value: Value = self.get_json(path, query, fallback).await?;
        parse_list(value)
    }

    pub(crate) async fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<T> {
        let request = self.authed(method, path, JSON)?.json(body);
        decode(self.send(request, fallback).await?).await
    }

    pub(crate) async fn delete(&self, path: &str, fallback: &str) -> Result<()> {
        let request = self.authed(Method::DELETE, path, JSON)?;
        self.send(request, fallback).await?;
        Ok(())
    }

    /// GET a binary export with a format-specific `Accept` header.
    pub(crate) async fn get_bytes(
        &self,
        path: &str,
        query: &[(&str, String)],
        accept: &str,
        fallback: &str,
    ) -> Result<Vec<u8>> {
        let request = self.authed(Method::GET, path, accept)?.query(query);
        let response = self.send(request, fallback).await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// POST without credentials (login).
    pub(crate) async fn post_public<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<T> {
        let request = self
            .http
            .post(self.config.url(path))
            .header(ACCEPT, JSON)
            .json(body);
        decode(self.send(request, fallback).await?).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let bytes = response.bytes().await?;
    // 204 and empty bodies decode as JSON null.
    let bytes: &[u8] = if bytes.is_empty() { b"null" } else { &bytes };
    serde_json::from_slice(bytes).map_err(|e| {
        tracing::warn!("unexpected response body: {e}");
        ApiError::InvalidResponse(format!("Invalid response format: {e}"))
    })
}

/// Require a JSON array, decode it, sort by id.
pub(crate) fn parse_list<T: DeserializeOwned + Identified>(value: Value) -> Result<Page<T>> {
    if !value.is_array() {
        return Err(ApiError::invalid_format());
    }
    let items: Vec<T> = serde_json::from_value(value)
        .map_err(|e| ApiError::InvalidResponse(format!("Invalid response format: {e}")))?;
    Ok(Page::from_unsorted(items))
}

/// Pull a human-readable message out of an error body.
pub(crate) fn error_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail") {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Array(entries)) => {
            let messages: Vec<String> = entries
                .iter()
                .filter_map(|entry| match entry {
                    Value::String(s) => Some(s.clone()),
                    other => other.get("msg").and_then(Value::as_str).map(str::to_string),
                })
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => value
            .get("message")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rol;
    use serde_json::json;
    use store::MemoryStore;

    fn client_without_token() -> ApiClient {
        ApiClient::new(
            ApiConfig::new("http://127.0.0.1:9"),
            SessionStorage::new(Arc::new(MemoryStore::new())),
        )
    }

    #[test]
    fn test_error_detail_string() {
        assert_eq!(
            error_detail(r#"{"detail": "Credenciales inválidas"}"#).as_deref(),
            Some("Credenciales inválidas")
        );
    }

    #[test]
    fn test_error_detail_validation_list() {
        let body = json!({"detail": [
            {"loc": ["body", "email"], "msg": "field required"},
            {"loc": ["body", "password"], "msg": "too short"}
        ]})
        .to_string();
        assert_eq!(
            error_detail(&body).as_deref(),
            Some("field required; too short")
        );
    }

    #[test]
    fn test_error_detail_absent() {
        assert_eq!(error_detail("<html>502</html>"), None);
        assert_eq!(error_detail(r#"{"detail": ""}"#), None);
        assert_eq!(error_detail(r#"{"other": 1}"#), None);
        assert_eq!(
            error_detail(r#"{"message": "boom"}"#).as_deref(),
            Some("boom")
        );
    }

    #[test]
    fn test_parse_list_rejects_non_array() {
        let err = parse_list::<Rol>(json!({"items": []})).unwrap_err();
        assert_eq!(err.to_string(), "Invalid response format");
        assert!(matches!(err, ApiError::InvalidResponse(_)));
    }

    #[test]
    fn test_parse_list_sorts() {
        let page: Page<Rol> = parse_list(json!([
            {"id_rol": 3, "nombre": "C"},
            {"id_rol": 1, "nombre": "A"}
        ]))
        .unwrap();
        assert_eq!(page.total, 2);
        assert_eq!(page.items.iter().map(|r| r.id_rol).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_headers_fail_fast_without_token() {
        let client = client_without_token();
        let err = client.auth_headers(JSON).unwrap_err();
        assert_eq!(err.to_string(), "No token found");
    }

    #[test]
    fn test_headers_carry_bearer_and_accept() {
        let client = client_without_token();
        client.storage().set_token("abc").unwrap();
        let headers = client.auth_headers("application/pdf").unwrap();
        assert_eq!(headers[AUTHORIZATION], "Bearer abc");
        assert_eq!(headers[ACCEPT], "application/pdf");
    }
}

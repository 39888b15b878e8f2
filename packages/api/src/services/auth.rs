use serde::{Deserialize, Serialize};

use crate::models::{User, Usuario};
use crate::{ApiClient, ApiError, Result};

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Body of a successful `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(alias = "token")]
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    /// Some backend versions embed the user; others require `/auth/me`.
    #[serde(default)]
    pub usuario: Option<Usuario>,
}

impl ApiClient {
    /// Exchange credentials for a bearer token. Sends no `Authorization`.
    /// A blank token fails the shape check: it could never authenticate.
    pub async fn login_request(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let response: LoginResponse = self
            .post_public(
                "/auth/login",
                &LoginRequest { email, password },
                "Invalid email or password",
            )
            .await?;
        if response.access_token.trim().is_empty() {
            tracing::warn!("login response carried an empty token");
            return Err(ApiError::invalid_format());
        }
        Ok(response)
    }

    /// Validate the stored token and fetch the user it belongs to.
    pub async fn current_user(&self) -> Result<User> {
        let usuario: Usuario = self
            .get_json("/auth/me", &[], "Session expired")
            .await?;
        Ok(usuario.to_user())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::services::testing::client;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_login_request_posts_credentials() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(body_json(json!({"email": "user@example.com", "password": "secret"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "tok",
                "token_type": "bearer"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let (api, _) = client(&server, None);
        let response = api.login_request("user@example.com", "secret").await.unwrap();
        assert_eq!(response.access_token, "tok");
        assert!(response.usuario.is_none());
    }

    #[tokio::test]
    async fn test_login_rejection_uses_detail() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"detail": "Credenciales inválidas"})),
            )
            .mount(&server)
            .await;

        let (api, _) = client(&server, None);
        let err = api.login_request("a@b.c", "x").await.unwrap_err();
        assert!(matches!(err, ApiError::Backend { status: 401, .. }));
        assert_eq!(err.to_string(), "Credenciales inválidas");
    }

    #[tokio::test]
    async fn test_login_request_rejects_blank_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "  ",
                "token_type": "bearer"
            })))
            .mount(&server)
            .await;

        let (api, _) = client(&server, None);
        let err = api.login_request("user@example.com", "secret").await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidResponse(_)));
        assert_eq!(err.to_string(), "Invalid response format");
    }

    #[tokio::test]
    async fn test_current_user_sends_bearer() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/auth/me"))
            .and(header("authorization", "Bearer tok"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id_usuario": 1,
                "email": "user@example.com",
                "nombre": "Ana",
                "apellido": "Pérez",
                "id_rol": 1
            })))
            .mount(&server)
            .await;

        let (api, _) = client(&server, Some("tok"));
        let user = api.current_user().await.unwrap();
        assert_eq!(user.email, "user@example.com");
        assert_eq!(user.role, Role::Supervisor);
    }
}

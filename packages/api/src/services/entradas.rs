use reqwest::Method;

use crate::models::{Entrada, EntradaInput, Page};
use crate::{ApiClient, Result};

impl ApiClient {
    pub async fn get_entradas(&self) -> Result<Page<Entrada>> {
        self.get_list("/entradas", &[], "Could not load stock entries")
            .await
    }

    /// Register an entry attributed to the signed-in user (from the token).
    pub async fn create_entrada(&self, input: &EntradaInput) -> Result<Entrada> {
        input.validate()?;
        let input = EntradaInput {
            id_usuario: Some(self.claims()?.user_id()?),
            ..input.clone()
        };
        self.send_json(Method::POST, "/entradas", &input, "Could not register stock entry")
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::claims::encode_test_token;
    use crate::models::EntradaInput;
    use crate::services::testing::client;
    use crate::ApiError;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_create_entrada_stamps_user_from_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/entradas"))
            .and(body_partial_json(json!({"id_producto": 3, "cantidad": 10, "id_usuario": 12})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id_entrada": 1, "id_producto": 3, "cantidad": 10, "id_usuario": 12,
                "fecha": "2024-05-01T10:00:00"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let token = encode_test_token(&json!({"sub": "ana@example.com", "id_usuario": 12}));
        let (api, _) = client(&server, Some(&token));
        let input = EntradaInput {
            id_producto: 3,
            cantidad: 10,
            ..Default::default()
        };
        let entrada = api.create_entrada(&input).await.unwrap();
        assert_eq!(entrada.id_usuario, Some(12));
    }

    #[tokio::test]
    async fn test_opaque_token_cannot_attribute_entry() {
        let server = MockServer::start().await;
        let (api, _) = client(&server, Some("opaque"));
        let input = EntradaInput {
            id_producto: 3,
            cantidad: 10,
            ..Default::default()
        };
        let err = api.create_entrada(&input).await.unwrap_err();
        assert!(matches!(err, ApiError::Claims(_)));
    }
}

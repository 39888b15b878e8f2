use reqwest::Method;

use super::search_query;
use crate::models::{Page, Proveedor, ProveedorInput};
use crate::{ApiClient, Result};

impl ApiClient {
    pub async fn get_proveedores(&self, search: Option<&str>) -> Result<Page<Proveedor>> {
        self.get_list("/proveedores", &search_query(search), "Could not load suppliers")
            .await
    }

    pub async fn create_proveedor(&self, input: &ProveedorInput) -> Result<Proveedor> {
        input.validate()?;
        self.send_json(Method::POST, "/proveedores", input, "Could not create supplier")
            .await
    }

    pub async fn update_proveedor(&self, id: i64, input: &ProveedorInput) -> Result<Proveedor> {
        input.validate()?;
        self.send_json(
            Method::PUT,
            &format!("/proveedores/{id}"),
            input,
            "Could not update supplier",
        )
        .await
    }

    pub async fn delete_proveedor(&self, id: i64) -> Result<()> {
        self.delete(&format!("/proveedores/{id}"), "Could not delete supplier")
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::services::testing::client;
    use crate::ApiError;
    use store::{KeyValueStore, TOKEN_KEY};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_no_token_rejects_before_any_request() {
        let server = MockServer::start().await;
        Mock::given(wiremock::matchers::any())
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(0)
            .mount(&server)
            .await;

        let (api, mem) = client(&server, None);
        let err = api.get_proveedores(None).await.unwrap_err();
        assert!(matches!(err, ApiError::MissingToken));
        assert_eq!(err.to_string(), "No token found");
        assert_eq!(mem.get(TOKEN_KEY).unwrap(), None);
        assert!(server.received_requests().await.unwrap_or_default().is_empty());
    }

    #[tokio::test]
    async fn test_network_failure_has_connectivity_message() {
        let storage = store::SessionStorage::new(std::sync::Arc::new(store::MemoryStore::new()));
        storage.set_token("tok").unwrap();
        // Nothing listens on the discard port.
        let api = crate::ApiClient::new(crate::ApiConfig::new("http://127.0.0.1:9"), storage);
        let err = api.get_proveedores(None).await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
        assert_eq!(err.to_string(), crate::error::NETWORK_ERROR_MESSAGE);
    }
}

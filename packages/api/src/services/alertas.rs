use reqwest::Method;

use crate::models::{Alerta, Page};
use crate::{ApiClient, Result};

impl ApiClient {
    pub async fn get_alertas(&self) -> Result<Page<Alerta>> {
        self.get_list("/alertas", &[], "Could not load alerts").await
    }

    /// Mark an alert as handled.
    pub async fn resolve_alerta(&self, id: i64) -> Result<Alerta> {
        self.send_json(
            Method::PUT,
            &format!("/alertas/{id}/resolver"),
            &serde_json::json!({}),
            "Could not resolve alert",
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use crate::services::testing::client;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_resolve_alerta() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/alertas/8/resolver"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id_alerta": 8, "mensaje": "Stock bajo: Tornillo", "resuelta": true
            })))
            .mount(&server)
            .await;

        let (api, _) = client(&server, Some("tok"));
        let alerta = api.resolve_alerta(8).await.unwrap();
        assert!(!alerta.is_pending());
    }
}

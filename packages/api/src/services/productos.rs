use reqwest::Method;

use super::search_query;
use crate::models::{Page, Producto, ProductoInput};
use crate::{ApiClient, Result};

impl ApiClient {
    pub async fn get_productos(&self, search: Option<&str>) -> Result<Page<Producto>> {
        self.get_list("/productos", &search_query(search), "Could not load products")
            .await
    }

    pub async fn get_producto(&self, id: i64) -> Result<Producto> {
        self.get_json(&format!("/productos/{id}"), &[], "Could not load product")
            .await
    }

    pub async fn create_producto(&self, input: &ProductoInput) -> Result<Producto> {
        input.validate()?;
        self.send_json(Method::POST, "/productos", input, "Could not create product")
            .await
    }

    pub async fn update_producto(&self, id: i64, input: &ProductoInput) -> Result<Producto> {
        input.validate()?;
        self.send_json(
            Method::PUT,
            &format!("/productos/{id}"),
            input,
            "Could not update product",
        )
        .await
    }

    pub async fn delete_producto(&self, id: i64) -> Result<()> {
        self.delete(&format!("/productos/{id}"), "Could not delete product")
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::models::ProductoInput;
    use crate::services::testing::client;
    use crate::ApiError;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_productos_sorted_and_wrapped() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/productos"))
            .and(query_param("search", "tor"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id_producto": 9, "nombre": "Tornillo largo", "stock_actual": 3, "stock_minimo": 5},
                {"id_producto": 2, "nombre": "Tornillo corto", "stock_actual": 40, "stock_minimo": 5}
            ])))
            .mount(&server)
            .await;

        let (api, _) = client(&server, Some("tok"));
        let page = api.get_productos(Some("tor")).await.unwrap();
        assert_eq!(page.total, 2);
        assert_eq!(page.items[0].id_producto, 2);
        assert!(page.items[1].is_low_stock());
    }

    #[tokio::test]
    async fn test_object_instead_of_array_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/productos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
            .mount(&server)
            .await;

        let (api, _) = client(&server, Some("tok"));
        let err = api.get_productos(None).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidResponse(_)));
        assert_eq!(err.to_string(), "Invalid response format");
    }

    #[tokio::test]
    async fn test_invalid_input_never_reaches_backend() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&server)
            .await;

        let (api, _) = client(&server, Some("tok"));
        let err = api
            .create_producto(&ProductoInput::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn test_backend_error_without_detail_uses_default() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/productos/4"))
            .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
            .mount(&server)
            .await;

        let (api, _) = client(&server, Some("tok"));
        let err = api.delete_producto(4).await.unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.to_string(), "Could not delete product");
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/productos/4"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id_producto": 4, "nombre": "Arandela", "precio": 0.25
            })))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/productos/4"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let (api, _) = client(&server, Some("tok"));
        let input = ProductoInput {
            nombre: "Arandela".into(),
            precio: 0.25,
            ..Default::default()
        };
        let updated = api.update_producto(4, &input).await.unwrap();
        assert_eq!(updated.nombre, "Arandela");
        api.delete_producto(4).await.unwrap();
    }
}

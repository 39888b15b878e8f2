use reqwest::Method;

use super::search_query;
use crate::models::{Page, Usuario, UsuarioInput};
use crate::{ApiClient, Result};

impl ApiClient {
    pub async fn get_usuarios(&self, search: Option<&str>) -> Result<Page<Usuario>> {
        self.get_list("/usuarios", &search_query(search), "Could not load users")
            .await
    }

    pub async fn create_usuario(&self, input: &UsuarioInput) -> Result<Usuario> {
        input.validate(true)?;
        self.send_json(Method::POST, "/usuarios", input, "Could not create user")
            .await
    }

    pub async fn update_usuario(&self, id: i64, input: &UsuarioInput) -> Result<Usuario> {
        input.validate(false)?;
        self.send_json(
            Method::PUT,
            &format!("/usuarios/{id}"),
            input,
            "Could not update user",
        )
        .await
    }

    pub async fn delete_usuario(&self, id: i64) -> Result<()> {
        self.delete(&format!("/usuarios/{id}"), "Could not delete user")
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::models::UsuarioInput;
    use crate::services::testing::client;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_update_omits_password() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/usuarios/5"))
            .and(body_json(json!({
                "nombre": "Luis",
                "apellido": "Gómez",
                "email": "luis@example.com",
                "id_rol": 2
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id_usuario": 5,
                "email": "luis@example.com",
                "nombre": "Luis",
                "apellido": "Gómez",
                "id_rol": 2
            })))
            .expect(1)
            .mount(&server)
            .await;

        let (api, _) = client(&server, Some("tok"));
        let input = UsuarioInput {
            nombre: "Luis".into(),
            apellido: "Gómez".into(),
            email: "luis@example.com".into(),
            password: None,
            id_rol: 2,
            id_sucursal: None,
        };
        let usuario = api.update_usuario(5, &input).await.unwrap();
        assert_eq!(usuario.id_usuario, 5);
    }
}

use crate::models::{Categoria, Marca, Motivo, Page, Rol, Sucursal, Ubicacion};
use crate::{ApiClient, Result};

impl ApiClient {
    pub async fn get_sucursales(&self) -> Result<Page<Sucursal>> {
        self.get_list("/sucursales", &[], "Could not load branches").await
    }

    pub async fn get_ubicaciones(&self) -> Result<Page<Ubicacion>> {
        self.get_list("/ubicaciones", &[], "Could not load locations").await
    }

    pub async fn get_categorias(&self) -> Result<Page<Categoria>> {
        self.get_list("/categorias", &[], "Could not load categories").await
    }

    pub async fn get_marcas(&self) -> Result<Page<Marca>> {
        self.get_list("/marcas", &[], "Could not load brands").await
    }

    pub async fn get_motivos(&self) -> Result<Page<Motivo>> {
        self.get_list("/motivos", &[], "Could not load exit reasons").await
    }

    pub async fn get_roles(&self) -> Result<Page<Rol>> {
        self.get_list("/roles", &[], "Could not load roles").await
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{Page, Rol};
    use crate::services::testing::client;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_roles_single() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/roles"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([{"id_rol": 1, "nombre": "Supervisor"}])),
            )
            .mount(&server)
            .await;

        let (api, _) = client(&server, Some("tok"));
        let roles = api.get_roles().await.unwrap();
        assert_eq!(
            roles,
            Page {
                items: vec![Rol { id_rol: 1, nombre: "Supervisor".into() }],
                total: 1,
            }
        );
    }

    #[tokio::test]
    async fn test_repeated_calls_are_equal_and_sorted() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/sucursales"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id_sucursal": 3, "nombre": "Norte"},
                {"id_sucursal": 1, "nombre": "Centro"},
                {"id_sucursal": 2, "nombre": "Sur"}
            ])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/roles"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id_rol": 2, "nombre": "Asistente"},
                {"id_rol": 1, "nombre": "Supervisor"}
            ])))
            .mount(&server)
            .await;

        let (api, _) = client(&server, Some("tok"));
        let first = api.get_sucursales().await.unwrap();
        let second = api.get_sucursales().await.unwrap();
        assert_eq!(first, second);
        let ids: Vec<i64> = first.items.iter().map(|s| s.id_sucursal).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let roles_a = api.get_roles().await.unwrap();
        let roles_b = api.get_roles().await.unwrap();
        assert_eq!(roles_a, roles_b);
        assert_eq!(roles_a.items[0].id_rol, 1);
        assert_eq!(roles_a.total, 2);
    }
}

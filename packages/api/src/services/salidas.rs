use reqwest::Method;

use crate::models::{Page, Salida, SalidaInput};
use crate::{ApiClient, Result};

impl ApiClient {
    pub async fn get_salidas(&self) -> Result<Page<Salida>> {
        self.get_list("/salidas", &[], "Could not load stock exits")
            .await
    }

    /// Register an exit attributed to the signed-in user (from the token).
    /// Stock sufficiency is the backend's call; forms check it beforehand
    /// with [`SalidaInput::validate_against_stock`].
    pub async fn create_salida(&self, input: &SalidaInput) -> Result<Salida> {
        input.validate()?;
        let input = SalidaInput {
            id_usuario: Some(self.claims()?.user_id()?),
            ..input.clone()
        };
        self.send_json(Method::POST, "/salidas", &input, "Could not register stock exit")
            .await
    }

    /// Re-read the product and refuse an exit larger than its current stock
    /// before registering it. Lists shown in a form may be stale.
    pub async fn create_salida_checked(&self, input: &SalidaInput) -> Result<Salida> {
        input.validate()?;
        let producto = self.get_producto(input.id_producto).await?;
        input.validate_against_stock(producto.stock_actual)?;
        self.create_salida(input).await
    }
}

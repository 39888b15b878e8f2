use futures::try_join;

use crate::models::{Alerta, Entrada, Page, Producto, Salida};
use crate::{ApiClient, Result};

/// How many of the latest entries/exits the dashboard lists.
pub const RECENT_MOVEMENTS: usize = 5;

/// Figures shown on the dashboard, computed client-side from the resource lists.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardSummary {
    pub total_productos: usize,
    pub unidades_en_stock: i64,
    /// Products at or below their minimum, lowest stock first.
    pub stock_bajo: Vec<Producto>,
    pub alertas_pendientes: Vec<Alerta>,
    /// Newest first.
    pub entradas_recientes: Vec<Entrada>,
    /// Newest first.
    pub salidas_recientes: Vec<Salida>,
}

impl DashboardSummary {
    pub fn build(
        productos: &Page<Producto>,
        alertas: &Page<Alerta>,
        entradas: &Page<Entrada>,
        salidas: &Page<Salida>,
    ) -> Self {
        let mut stock_bajo: Vec<Producto> = productos
            .items
            .iter()
            .filter(|p| p.is_low_stock())
            .cloned()
            .collect();
        stock_bajo.sort_by_key(|p| (p.stock_actual, p.id_producto));

        // Pages are ascending by id, so the newest records are at the end.
        Self {
            total_productos: productos.total,
            unidades_en_stock: productos.items.iter().map(|p| p.stock_actual.max(0)).sum(),
            stock_bajo,
            alertas_pendientes: alertas.items.iter().filter(|a| a.is_pending()).cloned().collect(),
            entradas_recientes: entradas.items.iter().rev().take(RECENT_MOVEMENTS).cloned().collect(),
            salidas_recientes: salidas.items.iter().rev().take(RECENT_MOVEMENTS).cloned().collect(),
        }
    }
}

impl ApiClient {
    /// Fetch the four lists concurrently; the first failure aborts the rest.
    pub async fn get_dashboard_summary(&self) -> Result<DashboardSummary> {
        let (productos, alertas, entradas, salidas) = try_join!(
            self.get_productos(None),
            self.get_alertas(),
            self.get_entradas(),
            self.get_salidas()
        )?;
        Ok(DashboardSummary::build(&productos, &alertas, &entradas, &salidas))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::client;
    use serde_json::{json, Value};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mount(server: &MockServer, route: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_summary() {
        let server = MockServer::start().await;
        mount(&server, "/productos", json!([
            {"id_producto": 1, "nombre": "A", "stock_actual": 2, "stock_minimo": 5},
            {"id_producto": 2, "nombre": "B", "stock_actual": 50, "stock_minimo": 5},
            {"id_producto": 3, "nombre": "C", "stock_actual": 0, "stock_minimo": 1}
        ])).await;
        mount(&server, "/alertas", json!([
            {"id_alerta": 1, "mensaje": "x", "resuelta": true},
            {"id_alerta": 2, "mensaje": "y"}
        ])).await;
        let entradas: Vec<Value> = (1..=7)
            .map(|i| json!({"id_entrada": i, "id_producto": 1, "cantidad": i}))
            .collect();
        mount(&server, "/entradas", Value::Array(entradas)).await;
        mount(&server, "/salidas", json!([])).await;

        let (api, _) = client(&server, Some("tok"));
        let summary = api.get_dashboard_summary().await.unwrap();
        assert_eq!(summary.total_productos, 3);
        assert_eq!(summary.unidades_en_stock, 52);
        let low: Vec<i64> = summary.stock_bajo.iter().map(|p| p.id_producto).collect();
        assert_eq!(low, vec![3, 1]);
        assert_eq!(summary.alertas_pendientes.len(), 1);
        let recent: Vec<i64> = summary.entradas_recientes.iter().map(|e| e.id_entrada).collect();
        assert_eq!(recent, vec![7, 6, 5, 4, 3]);
        assert!(summary.salidas_recientes.is_empty());
    }

    #[tokio::test]
    async fn test_one_failure_fails_summary() {
        let server = MockServer::start().await;
        mount(&server, "/productos", json!([])).await;
        mount(&server, "/alertas", json!({"not": "a list"})).await;
        mount(&server, "/entradas", json!([])).await;
        mount(&server, "/salidas", json!([])).await;

        let (api, _) = client(&server, Some("tok"));
        let err = api.get_dashboard_summary().await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid response format");
    }
}

//! Per-resource service modules. Each one adds methods to
//! [`ApiClient`](crate::ApiClient) for a single REST resource.

mod alertas;
mod auth;
mod catalogos;
mod dashboard;
mod entradas;
mod productos;
mod proveedores;
mod reportes;
mod salidas;
mod usuarios;

pub use auth::LoginResponse;
pub use dashboard::{DashboardSummary, RECENT_MOVEMENTS};
pub use reportes::{DateRange, ReportFile, ReportFormat, ReportKind};

/// Query string for list endpoints that accept a free-text search.
pub(crate) fn search_query(search: Option<&str>) -> Vec<(&'static str, String)> {
    match search.map(str::trim).filter(|s| !s.is_empty()) {
        Some(term) => vec![("search", term.to_string())],
        None => Vec::new(),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_query() {
        assert!(search_query(None).is_empty());
        assert!(search_query(Some("   ")).is_empty());
        assert_eq!(search_query(Some(" tornillo ")), vec![("search", "tornillo".to_string())]);
    }
}

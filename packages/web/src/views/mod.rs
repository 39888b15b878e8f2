mod shell;
pub use shell::{AppShell, SupervisorOnly};

mod login;
pub use login::Login;

mod dashboard;
pub use dashboard::Dashboard;

mod productos;
pub use productos::Productos;

mod entradas;
pub use entradas::Entradas;

mod salidas;
pub use salidas::Salidas;

mod proveedores;
pub use proveedores::Proveedores;

mod alertas;
pub use alertas::Alertas;

mod usuarios;
pub use usuarios::Usuarios;

mod reportes;
pub use reportes::Reportes;

mod unauthorized;
pub use unauthorized::{NotFound, Unauthorized};

/// Blank form text means "not provided".
pub(crate) fn optional_text(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Select values are ids as text; the placeholder option is empty.
pub(crate) fn optional_id(value: &str) -> Option<i64> {
    value.trim().parse().ok().filter(|id| *id > 0)
}

pub(crate) fn id_text(id: Option<i64>) -> String {
    id.map(|id| id.to_string()).unwrap_or_default()
}

/// Numeric form input; anything unparsable counts as zero so validation
/// reports it.
pub(crate) fn number<T: std::str::FromStr + Default>(value: &str) -> T {
    value.trim().parse().unwrap_or_default()
}

/// `(value, label)` pairs for a `Select`.
pub(crate) fn select_options<T>(
    items: &[T],
    id: impl Fn(&T) -> i64,
    label: impl Fn(&T) -> String,
) -> Vec<(String, String)> {
    items.iter().map(|item| (id(item).to_string(), label(item))).collect()
}

/// Split a lookup resource into its value and a displayable error. Still
/// pending reads as empty with no error.
pub(crate) fn resolved<T: Clone + Default>(lookup: &Option<api::Result<T>>) -> (T, Option<String>) {
    match lookup {
        Some(Ok(value)) => (value.clone(), None),
        Some(Err(e)) => (T::default(), Some(e.to_string())),
        None => (T::default(), None),
    }
}

/// Backend timestamps are ISO 8601; lists only show the date part.
pub(crate) fn short_date(fecha: &str) -> &str {
    fecha.get(..10).unwrap_or(fecha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_helpers() {
        assert_eq!(optional_text("  "), None);
        assert_eq!(optional_text(" Norte "), Some("Norte".to_string()));
        assert_eq!(optional_id(""), None);
        assert_eq!(optional_id("0"), None);
        assert_eq!(optional_id("12"), Some(12));
        assert_eq!(id_text(Some(3)), "3");
        assert_eq!(id_text(None), "");
        assert_eq!(number::<i64>("x"), 0);
        assert_eq!(number::<f64>("2.5"), 2.5);
    }

    #[test]
    fn test_resolved_surfaces_lookup_errors() {
        let pending: Option<api::Result<Vec<i64>>> = None;
        assert_eq!(resolved(&pending), (Vec::new(), None));

        let ready: Option<api::Result<Vec<i64>>> = Some(Ok(vec![1, 2]));
        assert_eq!(resolved(&ready), (vec![1, 2], None));

        let failed: Option<api::Result<Vec<i64>>> = Some(Err(api::ApiError::MissingToken));
        assert_eq!(resolved(&failed), (Vec::new(), Some("No token found".to_string())));
    }

    #[test]
    fn test_short_date() {
        assert_eq!(short_date("2024-03-01T10:00:00"), "2024-03-01");
        assert_eq!(short_date("hoy"), "hoy");
    }
}

use serde::{Deserialize, Serialize};

use super::require;
use crate::{ApiError, Result};

/// Product record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Producto {
    pub id_producto: i64,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default)]
    pub codigo: Option<String>,
    #[serde(default)]
    pub precio: f64,
    #[serde(default)]
    pub stock_actual: i64,
    #[serde(default)]
    pub stock_minimo: i64,
    #[serde(default)]
    pub id_categoria: Option<i64>,
    #[serde(default)]
    pub id_marca: Option<i64>,
    #[serde(default)]
    pub id_proveedor: Option<i64>,
    #[serde(default)]
    pub id_ubicacion: Option<i64>,
}

impl Producto {
    /// At or below the configured minimum.
    pub fn is_low_stock(&self) -> bool {
        self.stock_actual <= self.stock_minimo
    }
}

/// Create/update payload for `/productos`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductoInput {
    pub nombre: String,
    pub descripcion: Option<String>,
    pub codigo: Option<String>,
    pub precio: f64,
    pub stock_minimo: i64,
    pub id_categoria: Option<i64>,
    pub id_marca: Option<i64>,
    pub id_proveedor: Option<i64>,
    pub id_ubicacion: Option<i64>,
}

impl ProductoInput {
    pub fn from_producto(p: &Producto) -> Self {
        Self {
            nombre: p.nombre.clone(),
            descripcion: p.descripcion.clone(),
            codigo: p.codigo.clone(),
            precio: p.precio,
            stock_minimo: p.stock_minimo,
            id_categoria: p.id_categoria,
            id_marca: p.id_marca,
            id_proveedor: p.id_proveedor,
            id_ubicacion: p.id_ubicacion,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require(&self.nombre, "nombre")?;
        if !self.precio.is_finite() || self.precio < 0.0 {
            return Err(ApiError::Validation("precio must not be negative".to_string()));
        }
        if self.stock_minimo < 0 {
            return Err(ApiError::Validation(
                "stock_minimo must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_backend_omits_fields() {
        let p: Producto =
            serde_json::from_str(r#"{"id_producto": 1, "nombre": "Tornillo"}"#).unwrap();
        assert_eq!(p.stock_actual, 0);
        assert!(p.is_low_stock());
        assert!(p.codigo.is_none());
    }

    #[test]
    fn test_validate() {
        let mut input = ProductoInput {
            nombre: "Tuerca".into(),
            precio: 1.5,
            ..Default::default()
        };
        assert!(input.validate().is_ok());
        input.precio = -1.0;
        assert!(input.validate().is_err());
        input.precio = 0.0;
        input.nombre = "   ".into();
        assert_eq!(input.validate().unwrap_err().to_string(), "nombre is required");
    }
}

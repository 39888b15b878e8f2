//! Stock movements: entries (`/entradas`) and exits (`/salidas`).
//!
//! Both inputs carry an `id_usuario` that the form never fills in; the service
//! layer stamps it from the bearer token claims right before sending.

use serde::{Deserialize, Serialize};

use super::require_positive;
use crate::{ApiError, Result};

/// Stock entry (goods received).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entrada {
    pub id_entrada: i64,
    pub id_producto: i64,
    pub cantidad: i64,
    #[serde(default)]
    pub fecha: String,
    #[serde(default)]
    pub id_proveedor: Option<i64>,
    #[serde(default)]
    pub id_usuario: Option<i64>,
    #[serde(default)]
    pub precio_unitario: Option<f64>,
    #[serde(default)]
    pub observaciones: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntradaInput {
    pub id_producto: i64,
    pub cantidad: i64,
    pub id_proveedor: Option<i64>,
    pub precio_unitario: Option<f64>,
    pub observaciones: Option<String>,
    pub id_usuario: Option<i64>,
}

impl EntradaInput {
    pub fn validate(&self) -> Result<()> {
        require_positive(self.id_producto, "id_producto")?;
        require_positive(self.cantidad, "cantidad")?;
        if self.precio_unitario.is_some_and(|p| !p.is_finite() || p < 0.0) {
            return Err(ApiError::Validation(
                "precio_unitario must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// Stock exit (goods leaving the warehouse).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Salida {
    pub id_salida: i64,
    pub id_producto: i64,
    pub cantidad: i64,
    #[serde(default)]
    pub fecha: String,
    #[serde(default)]
    pub id_motivo: Option<i64>,
    #[serde(default)]
    pub id_usuario: Option<i64>,
    #[serde(default)]
    pub observaciones: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalidaInput {
    pub id_producto: i64,
    pub cantidad: i64,
    pub id_motivo: Option<i64>,
    pub observaciones: Option<String>,
    pub id_usuario: Option<i64>,
}

impl SalidaInput {
    pub fn validate(&self) -> Result<()> {
        require_positive(self.id_producto, "id_producto")?;
        require_positive(self.cantidad, "cantidad")?;
        if self.id_motivo.is_none() {
            return Err(ApiError::Validation("id_motivo is required".to_string()));
        }
        Ok(())
    }

    /// An exit may not take more than what is on hand.
    pub fn validate_against_stock(&self, stock_actual: i64) -> Result<()> {
        self.validate()?;
        if self.cantidad > stock_actual {
            return Err(ApiError::Validation(format!(
                "cantidad ({}) exceeds available stock ({stock_actual})",
                self.cantidad
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entrada_validate() {
        let mut input = EntradaInput {
            id_producto: 1,
            cantidad: 5,
            ..Default::default()
        };
        assert!(input.validate().is_ok());
        input.cantidad = 0;
        assert!(input.validate().is_err());
        input.cantidad = 1;
        input.precio_unitario = Some(-2.0);
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_salida_against_stock() {
        let input = SalidaInput {
            id_producto: 1,
            cantidad: 4,
            id_motivo: Some(2),
            ..Default::default()
        };
        assert!(input.validate_against_stock(4).is_ok());
        let err = input.validate_against_stock(3).unwrap_err();
        assert_eq!(err.to_string(), "cantidad (4) exceeds available stock (3)");
    }

    #[test]
    fn test_salida_requires_motivo() {
        let input = SalidaInput {
            id_producto: 1,
            cantidad: 1,
            ..Default::default()
        };
        assert_eq!(input.validate().unwrap_err().to_string(), "id_motivo is required");
    }
}

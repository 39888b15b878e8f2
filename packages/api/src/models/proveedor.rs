use serde::{Deserialize, Serialize};

use super::require;
use crate::{ApiError, Result};

/// Supplier record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Proveedor {
    pub id_proveedor: i64,
    pub nombre: String,
    #[serde(default)]
    pub contacto: Option<String>,
    #[serde(default)]
    pub telefono: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub direccion: Option<String>,
}

/// Create/update payload for `/proveedores`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProveedorInput {
    pub nombre: String,
    pub contacto: Option<String>,
    pub telefono: Option<String>,
    pub email: Option<String>,
    pub direccion: Option<String>,
}

impl ProveedorInput {
    pub fn from_proveedor(p: &Proveedor) -> Self {
        Self {
            nombre: p.nombre.clone(),
            contacto: p.contacto.clone(),
            telefono: p.telefono.clone(),
            email: p.email.clone(),
            direccion: p.direccion.clone(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        require(&self.nombre, "nombre")?;
        if let Some(email) = self.email.as_deref().filter(|e| !e.trim().is_empty()) {
            if !email.contains('@') {
                return Err(ApiError::Validation("email is not valid".to_string()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        let mut input = ProveedorInput {
            nombre: "Ferretería Central".into(),
            ..Default::default()
        };
        assert!(input.validate().is_ok());
        input.email = Some(String::new());
        assert!(input.validate().is_ok());
        input.email = Some("ventas".into());
        assert!(input.validate().is_err());
        input.email = Some("ventas@central.com".into());
        assert!(input.validate().is_ok());
    }
}

//! Small reference catalogs used to fill selects in forms.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sucursal {
    pub id_sucursal: i64,
    pub nombre: String,
    #[serde(default)]
    pub direccion: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ubicacion {
    pub id_ubicacion: i64,
    pub nombre: String,
    #[serde(default)]
    pub id_sucursal: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Categoria {
    pub id_categoria: i64,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marca {
    pub id_marca: i64,
    pub nombre: String,
}

/// Reason attached to a stock exit (sale, damage, transfer...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Motivo {
    pub id_motivo: i64,
    #[serde(alias = "descripcion")]
    pub nombre: String,
}

/// Role catalog entry. `nombre` is display text as the backend returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rol {
    pub id_rol: i64,
    pub nombre: String,
}

//! Data models exchanged with the inventory backend.
//!
//! Every record the backend owns is identified by an integer primary key
//! (exposed through [`Identified`]). Create/update payloads are separate
//! `*Input` types whose `validate` runs before a request is built.

mod alerta;
mod catalogo;
mod movimiento;
mod producto;
mod proveedor;
mod usuario;

pub use alerta::Alerta;
pub use catalogo::{Categoria, Marca, Motivo, Rol, Sucursal, Ubicacion};
pub use movimiento::{Entrada, EntradaInput, Salida, SalidaInput};
pub use producto::{Producto, ProductoInput};
pub use proveedor::{Proveedor, ProveedorInput};
pub use usuario::{Role, User, Usuario, UsuarioInput};

use serde::{Deserialize, Serialize};

/// A backend record with an integer primary key.
pub trait Identified {
    fn id(&self) -> i64;
}

macro_rules! identified {
    ($($ty:ty => $field:ident),* $(,)?) => {
        $(impl Identified for $ty {
            fn id(&self) -> i64 {
                self.$field
            }
        })*
    };
}

identified! {
    Producto => id_producto,
    Proveedor => id_proveedor,
    Usuario => id_usuario,
    Entrada => id_entrada,
    Salida => id_salida,
    Alerta => id_alerta,
    Sucursal => id_sucursal,
    Ubicacion => id_ubicacion,
    Categoria => id_categoria,
    Marca => id_marca,
    Motivo => id_motivo,
    Rol => id_rol,
}

/// A list result: items sorted ascending by id, plus their count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
}

impl<T: Identified> Page<T> {
    /// Sort by id and wrap. The backend does not guarantee order.
    pub fn from_unsorted(mut items: Vec<T>) -> Self {
        items.sort_by_key(Identified::id);
        let total = items.len();
        Self { items, total }
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }
}

pub(crate) fn require(value: &str, field: &str) -> crate::Result<()> {
    if value.trim().is_empty() {
        return Err(crate::ApiError::Validation(format!("{field} is required")));
    }
    Ok(())
}

pub(crate) fn require_positive(value: i64, field: &str) -> crate::Result<()> {
    if value <= 0 {
        return Err(crate::ApiError::Validation(format!(
            "{field} must be greater than zero"
        )));
    }
    Ok(())
}

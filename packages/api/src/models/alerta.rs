use serde::{Deserialize, Serialize};

/// Stock alert raised by the backend (e.g. a product fell under its minimum).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alerta {
    pub id_alerta: i64,
    #[serde(default)]
    pub id_producto: Option<i64>,
    pub mensaje: String,
    #[serde(default)]
    pub tipo: Option<String>,
    #[serde(default)]
    pub fecha: String,
    #[serde(default)]
    pub resuelta: bool,
}

impl Alerta {
    pub fn is_pending(&self) -> bool {
        !self.resuelta
    }
}

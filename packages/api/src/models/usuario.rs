//! # Users and roles
//!
//! Two representations of a person, mirroring the split between what the
//! backend stores and what the client keeps in its session:
//!
//! - [`Usuario`]: the backend record (`/usuarios`, `/auth/me`), with a
//!   numeric `id_rol`.
//! - [`User`]: the signed-in user held in the session and persisted under the
//!   `user` storage key as `{email, role, nombre, apellido}`.
//!
//! [`Usuario::to_user`] projects the former into the latter, mapping the role
//! id through [`Role::from_id`]. Roles travel lowercase (`"supervisor"`,
//! `"asistente"`); the capitalized names only appear as display text of the
//! `/roles` catalog and are never parsed into a [`Role`].

use serde::{Deserialize, Serialize};

use super::{require, require_positive};
use crate::{ApiError, Result};

/// Application role. Gates the supervisor-only routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Supervisor,
    Asistente,
}

impl Role {
    /// Map the backend's `id_rol`. Unknown ids get the least privileged role.
    pub fn from_id(id_rol: i64) -> Self {
        match id_rol {
            1 => Role::Supervisor,
            _ => Role::Asistente,
        }
    }

    pub fn id(self) -> i64 {
        match self {
            Role::Supervisor => 1,
            Role::Asistente => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Supervisor => "supervisor",
            Role::Asistente => "asistente",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Supervisor => "Supervisor",
            Role::Asistente => "Asistente",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The signed-in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub role: Role,
    pub nombre: String,
    pub apellido: String,
}

impl User {
    /// Full name, falling back to email if both name parts are blank.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.nombre.trim(), self.apellido.trim());
        let full = full.trim();
        if full.is_empty() {
            self.email.clone()
        } else {
            full.to_string()
        }
    }

    pub fn is_supervisor(&self) -> bool {
        self.role == Role::Supervisor
    }
}

/// User record as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Usuario {
    pub id_usuario: i64,
    pub email: String,
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub apellido: String,
    #[serde(default)]
    pub id_rol: i64,
    #[serde(default)]
    pub id_sucursal: Option<i64>,
    #[serde(default = "default_true")]
    pub activo: bool,
}

fn default_true() -> bool {
    true
}

impl Usuario {
    pub fn role(&self) -> Role {
        Role::from_id(self.id_rol)
    }

    /// Convert to the session's [`User`].
    pub fn to_user(&self) -> User {
        User {
            email: self.email.clone(),
            role: self.role(),
            nombre: self.nombre.clone(),
            apellido: self.apellido.clone(),
        }
    }
}

/// Create/update payload for `/usuarios`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UsuarioInput {
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    /// Required on create; omitted on update to keep the current password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub id_rol: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_sucursal: Option<i64>,
}

impl UsuarioInput {
    pub fn from_usuario(usuario: &Usuario) -> Self {
        Self {
            nombre: usuario.nombre.clone(),
            apellido: usuario.apellido.clone(),
            email: usuario.email.clone(),
            password: None,
            id_rol: usuario.id_rol,
            id_sucursal: usuario.id_sucursal,
        }
    }

    pub fn validate(&self, creating: bool) -> Result<()> {
        require(&self.nombre, "nombre")?;
        require(&self.apellido, "apellido")?;
        require(&self.email, "email")?;
        if !self.email.contains('@') {
            return Err(ApiError::Validation("email is not valid".to_string()));
        }
        require_positive(self.id_rol, "id_rol")?;
        if creating {
            require(self.password.as_deref().unwrap_or_default(), "password")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_id() {
        assert_eq!(Role::from_id(1), Role::Supervisor);
        assert_eq!(Role::from_id(2), Role::Asistente);
        assert_eq!(Role::from_id(99), Role::Asistente);
        assert_eq!(Role::from_id(0), Role::Asistente);
    }

    #[test]
    fn test_role_wire_format_is_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Supervisor).unwrap(), "\"supervisor\"");
        let role: Role = serde_json::from_str("\"asistente\"").unwrap();
        assert_eq!(role, Role::Asistente);
        assert!(serde_json::from_str::<Role>("\"Supervisor\"").is_err());
    }

    #[test]
    fn test_persisted_user_shape() {
        let user = User {
            email: "ana@example.com".into(),
            role: Role::Supervisor,
            nombre: "Ana".into(),
            apellido: "Pérez".into(),
        };
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "email": "ana@example.com",
                "role": "supervisor",
                "nombre": "Ana",
                "apellido": "Pérez"
            })
        );
        assert_eq!(user.display_name(), "Ana Pérez");
    }

    #[test]
    fn test_to_user_maps_role() {
        let usuario: Usuario = serde_json::from_value(serde_json::json!({
            "id_usuario": 3,
            "email": "luis@example.com",
            "nombre": "Luis",
            "apellido": "Gómez",
            "id_rol": 2
        }))
        .unwrap();
        assert!(usuario.activo);
        let user = usuario.to_user();
        assert_eq!(user.role, Role::Asistente);
        assert!(!user.is_supervisor());
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let user = User {
            email: "x@y.z".into(),
            role: Role::Asistente,
            nombre: " ".into(),
            apellido: String::new(),
        };
        assert_eq!(user.display_name(), "x@y.z");
    }

    #[test]
    fn test_input_validation() {
        let mut input = UsuarioInput {
            nombre: "Ana".into(),
            apellido: "Pérez".into(),
            email: "ana@example.com".into(),
            password: None,
            id_rol: 1,
            id_sucursal: None,
        };
        assert!(input.validate(false).is_ok());
        assert!(input.validate(true).is_err());
        input.password = Some("secret".into());
        assert!(input.validate(true).is_ok());
        input.email = "nope".into();
        assert!(input.validate(false).is_err());
    }
}

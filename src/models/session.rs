use serde::{Deserialize, Serialize};

use crate::models::Route;

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum Role {
    Employee,
    Admin,
}

impl Role {
    /// Pantalla de aterrizaje tras el login
    pub fn landing(self) -> Route {
        match self {
            Role::Employee => Route::Bills,
            Role::Admin => Route::Dashboard,
        }
    }
}

/// Sesión del usuario autenticado.
/// Se persiste repartida en dos claves: `user` (StoredUser) y `jwt`.
#[derive(Clone, PartialEq, Debug)]
pub struct Session {
    pub role: Role,
    pub identity: String,
    pub auth_token: String,
}

/// Forma persistida bajo la clave `user`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct StoredUser {
    #[serde(rename = "type")]
    pub role: Role,
    pub email: String,
    #[serde(default = "connected")]
    pub status: String,
}

fn connected() -> String {
    "connected".to_string()
}

impl StoredUser {
    pub fn new(role: Role, email: impl Into<String>) -> Self {
        Self {
            role,
            email: email.into(),
            status: connected(),
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Alta de usuario cuando el login es rechazado
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct NewUser {
    #[serde(rename = "type")]
    pub role: Role,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl NewUser {
    pub fn from_credentials(role: Role, credentials: &Credentials) -> Self {
        let name = credentials
            .email
            .split('@')
            .next()
            .unwrap_or_default()
            .to_string();
        Self {
            role,
            name,
            email: credentials.email.clone(),
            password: credentials.password.clone(),
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AuthToken {
    pub jwt: String,
}

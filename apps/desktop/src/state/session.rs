//! # Session State
//!
//! Who is logged in, established once by a successful login and carried
//! explicitly by the navigator. No global mutable session exists: windows
//! that need the identity receive it as an argument.

use serde::Serialize;

/// An authenticated session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Credential identifier the user logged in with.
    pub usuarios: String,

    /// Display name, greeted on the dashboard.
    pub nombre_usuario: String,
}

impl Session {
    pub fn new(usuarios: impl Into<String>, nombre_usuario: impl Into<String>) -> Self {
        Session {
            usuarios: usuarios.into(),
            nombre_usuario: nombre_usuario.into(),
        }
    }

    /// Dashboard greeting line.
    pub fn greeting(&self) -> String {
        format!("Bienvenido, {}", self.nombre_usuario)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_uses_display_name() {
        let session = Session::new("jdoe", "Jane Doe");
        assert_eq!(session.greeting(), "Bienvenido, Jane Doe");
    }
}

//! # Domain Types
//!
//! Records mirroring the three tables, plus the drafts submitted from
//! New/Edit dialogs.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Usuario      │   │    Cliente      │   │    Producto     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  usuarios (id)  │   │  id_cliente     │   │  id_producto    │       │
//! │  │  nombre_usuario │   │  nombre         │   │  nombre         │       │
//! │  │  contrasena     │   │  apellido       │   │  categoria      │       │
//! │  │  rol / estado   │   │  telefono       │   │  precio (text)  │       │
//! │  │  token          │   │  correo_...     │   │  cantidad (text)│       │
//! │  │  fecha_creacion │   │  usuario        │   │  descripcion    │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  Drafts carry the same fields minus the storage-assigned id:           │
//! │  RegistroDraft, ClienteDraft, ProductoDraft                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Field names deliberately match column names one to one so the db layer
//! can derive its row mapping without aliases.

use serde::{Deserialize, Serialize};

// =============================================================================
// Entity
// =============================================================================

/// A record displayed in a management listing.
///
/// `id` is the storage-assigned, immutable key used for edit/delete;
/// `label` is the row's short display text, and `selection_text` the
/// full sentence announced when the operator selects the row.
pub trait Entity {
    fn id(&self) -> i64;
    fn label(&self) -> String;
    fn selection_text(&self) -> String;
}

// =============================================================================
// Usuario (credential)
// =============================================================================

/// A stored credential.
///
/// Created once at registration and never edited through the current UI.
/// `contrasena` is stored and compared in plaintext — authentication
/// hardening is explicitly out of scope for this application.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Usuario {
    /// Login identifier.
    pub usuarios: String,

    /// Display name shown in the dashboard header after login.
    pub nombre_usuario: String,

    /// Plaintext secret, exact-match compared at login.
    pub contrasena: String,

    pub rol: String,

    pub estado: String,

    /// Process-unique identifier issued at registration, never reused.
    pub token: String,

    /// Creation timestamp, stored as `%Y-%m-%d %H:%M:%S`.
    pub fecha_creacion: String,
}

/// Fields submitted from the registration window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistroDraft {
    pub usuarios: String,
    pub nombre_usuario: String,
    pub contrasena: String,
}

// =============================================================================
// Cliente
// =============================================================================

/// A customer record, managed through the "Gestión de Usuarios" window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Cliente {
    /// Storage-assigned key; immutable.
    pub id_cliente: i64,
    pub nombre: String,
    pub apellido: String,
    pub telefono: String,
    pub correo_electronico: String,
    /// Login identifier of the account associated with this customer.
    pub usuario: String,
}

impl Entity for Cliente {
    fn id(&self) -> i64 {
        self.id_cliente
    }

    fn label(&self) -> String {
        format!("{} {}", self.nombre, self.apellido)
    }

    // "Usuario", not "Cliente": these rows are surfaced through the
    // "Gestión de Usuarios" window and its dialogs say usuario.
    fn selection_text(&self) -> String {
        format!("Usuario seleccionado: {}", self.label())
    }
}

/// Fields submitted from the Nuevo/Editar Cliente dialog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClienteDraft {
    pub nombre: String,
    pub apellido: String,
    pub telefono: String,
    pub correo_electronico: String,
    pub usuario: String,
}

// =============================================================================
// Producto
// =============================================================================

/// A product record.
///
/// `precio` and `cantidad` are kept exactly as typed; the application never
/// parses them numerically.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Producto {
    /// Storage-assigned key; immutable.
    pub id_producto: i64,
    pub nombre: String,
    pub categoria: String,
    pub precio: String,
    pub cantidad: String,
    pub descripcion: String,
}

impl Entity for Producto {
    fn id(&self) -> i64 {
        self.id_producto
    }

    fn label(&self) -> String {
        self.nombre.clone()
    }

    fn selection_text(&self) -> String {
        format!("Producto seleccionado: {}", self.label())
    }
}

/// Fields submitted from the Nuevo/Editar Producto dialog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductoDraft {
    pub nombre: String,
    pub categoria: String,
    pub precio: String,
    pub cantidad: String,
    pub descripcion: String,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cliente_label_is_full_name() {
        let c = Cliente {
            id_cliente: 7,
            nombre: "Ana".to_string(),
            apellido: "Gómez".to_string(),
            telefono: "555-0100".to_string(),
            correo_electronico: "ana@example.com".to_string(),
            usuario: "anag".to_string(),
        };
        assert_eq!(c.id(), 7);
        assert_eq!(c.label(), "Ana Gómez");
        assert_eq!(c.selection_text(), "Usuario seleccionado: Ana Gómez");
    }

    #[test]
    fn test_producto_label_is_name() {
        let p = Producto {
            id_producto: 3,
            nombre: "Widget".to_string(),
            categoria: "Tools".to_string(),
            precio: "9.99".to_string(),
            cantidad: "10".to_string(),
            descripcion: "x".to_string(),
        };
        assert_eq!(p.id(), 3);
        assert_eq!(p.label(), "Widget");
        assert_eq!(p.selection_text(), "Producto seleccionado: Widget");
    }
}

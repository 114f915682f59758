//! # Validation Module
//!
//! Client-side validation for dialog drafts.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Dialog (this module)                                         │
//! │  └── every required field must be non-empty                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  └── UNIQUE token constraint                                           │
//! │                                                                         │
//! │  There is NO numeric validation: precio and cantidad are accepted as   │
//! │  arbitrary strings, matching the deployed behavior. A create/update    │
//! │  that fails Layer 1 leaves the stored table completely untouched.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::{ClienteDraft, ProductoDraft, RegistroDraft};

/// A set of dialog fields that can be checked before submission.
pub trait Draft {
    /// Returns the first empty required field, if any.
    fn validate(&self) -> ValidationResult<()>;
}

/// Rejects empty (or whitespace-only) values for a required field.
pub fn require_non_empty(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::required(field));
    }
    Ok(())
}

impl Draft for ClienteDraft {
    fn validate(&self) -> ValidationResult<()> {
        require_non_empty("nombre", &self.nombre)?;
        require_non_empty("apellido", &self.apellido)?;
        require_non_empty("telefono", &self.telefono)?;
        require_non_empty("correo_electronico", &self.correo_electronico)?;
        require_non_empty("usuario", &self.usuario)?;
        Ok(())
    }
}

impl Draft for ProductoDraft {
    fn validate(&self) -> ValidationResult<()> {
        require_non_empty("nombre", &self.nombre)?;
        require_non_empty("categoria", &self.categoria)?;
        require_non_empty("precio", &self.precio)?;
        require_non_empty("cantidad", &self.cantidad)?;
        require_non_empty("descripcion", &self.descripcion)?;
        Ok(())
    }
}

impl Draft for RegistroDraft {
    fn validate(&self) -> ValidationResult<()> {
        require_non_empty("usuarios", &self.usuarios)?;
        require_non_empty("nombre_usuario", &self.nombre_usuario)?;
        require_non_empty("contrasena", &self.contrasena)?;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn cliente_completo() -> ClienteDraft {
        ClienteDraft {
            nombre: "Ana".to_string(),
            apellido: "Gómez".to_string(),
            telefono: "555-0100".to_string(),
            correo_electronico: "ana@example.com".to_string(),
            usuario: "anag".to_string(),
        }
    }

    #[test]
    fn test_cliente_draft_complete() {
        assert!(cliente_completo().validate().is_ok());
    }

    #[test]
    fn test_cliente_draft_rejects_any_empty_field() {
        let mut d = cliente_completo();
        d.telefono = "".to_string();
        assert_eq!(d.validate(), Err(ValidationError::required("telefono")));

        let mut d = cliente_completo();
        d.apellido = "   ".to_string();
        assert_eq!(d.validate(), Err(ValidationError::required("apellido")));
    }

    #[test]
    fn test_producto_draft_keeps_precio_lenient() {
        // No numeric check: a non-numeric price passes validation.
        let d = ProductoDraft {
            nombre: "Widget".to_string(),
            categoria: "Tools".to_string(),
            precio: "nueve con algo".to_string(),
            cantidad: "10".to_string(),
            descripcion: "x".to_string(),
        };
        assert!(d.validate().is_ok());
    }

    #[test]
    fn test_producto_draft_rejects_empty_descripcion() {
        let d = ProductoDraft {
            nombre: "Widget".to_string(),
            categoria: "Tools".to_string(),
            precio: "9.99".to_string(),
            cantidad: "10".to_string(),
            descripcion: "".to_string(),
        };
        assert_eq!(d.validate(), Err(ValidationError::required("descripcion")));
    }

    #[test]
    fn test_registro_draft() {
        let d = RegistroDraft {
            usuarios: "jdoe".to_string(),
            nombre_usuario: "Jane Doe".to_string(),
            contrasena: "secret1".to_string(),
        };
        assert!(d.validate().is_ok());

        let d = RegistroDraft {
            contrasena: "".to_string(),
            ..d
        };
        assert_eq!(d.validate(), Err(ValidationError::required("contrasena")));
    }
}

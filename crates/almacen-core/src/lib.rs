//! # almacen-core: Pure Domain Types for Almacén
//!
//! This crate holds the domain model of the inventory manager as plain data
//! plus the client-side validation rules, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Almacén Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Desktop App (apps/desktop)                   │   │
//! │  │    Login ──► Dashboard ──► Gestión windows ──► New/Edit dialogs │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ almacen-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐        ┌───────────┐       ┌───────────────┐   │   │
//! │  │   │   types   │        │validation │       │     error     │   │   │
//! │  │   │  Usuario  │        │ non-empty │       │ Validation-   │   │   │
//! │  │   │  Cliente  │        │   field   │       │    Error      │   │   │
//! │  │   │  Producto │        │   rules   │       │               │   │   │
//! │  │   └───────────┘        └───────────┘       └───────────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO WINDOWING • PURE DATA               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    almacen-db (Database Layer)                  │   │
//! │  │              SQLite queries, migrations, repositories           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Data**: records mirror their table rows one to one
//! 2. **No I/O**: database and windowing access is FORBIDDEN here
//! 3. **Lenient Fields**: `precio`/`cantidad` stay strings, exactly as the
//!    operator typed them; only emptiness is validated
//! 4. **Explicit Errors**: validation failures are typed, never panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ValidationError, ValidationResult};
pub use types::*;
pub use validation::Draft;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Role assigned to every credential created through the registration
/// window. There is no role-management surface; the column exists for
/// compatibility with the deployed schema.
pub const DEFAULT_ROL: &str = "Usuario";

/// Initial account status for registered credentials.
pub const DEFAULT_ESTADO: &str = "Activo";

/// Storage format of `usuarios.fecha_creacion`.
pub const FECHA_CREACION_FORMATO: &str = "%Y-%m-%d %H:%M:%S";

//! # almacen-db: Database Layer for Almacén
//!
//! This crate is the only component permitted to hold and use the database
//! connection. Everything above it talks to repositories.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Almacén Data Flow                                │
//! │                                                                         │
//! │  App command (e.g. "Guardar" in the Nuevo Producto dialog)             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    almacen-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │◄───│ usuario.rs    │    │  (embedded)  │  │   │
//! │  │   │               │    │ cliente.rs    │    │              │  │   │
//! │  │   │ SqlitePool    │    │ producto.rs   │    │ 001_esquema  │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite database file (WAL mode)                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! One deliberate departure from the system this replaces: the connection is
//! opened once and pooled for the process lifetime instead of a
//! connect/execute/disconnect cycle per button press, and every failure is
//! reported as a typed [`DbError`] instead of being logged and flattened
//! into an empty result set. Callers can finally tell "no rows" from
//! "query failed".
//!
//! ## Usage
//!
//! ```rust,ignore
//! use almacen_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("almacen.db")).await?;
//! let productos = db.productos().list().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::cliente::ClienteRepository;
pub use repository::producto::ProductoRepository;
pub use repository::usuario::UsuarioRepository;
pub use repository::RecordStore;

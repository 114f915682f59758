//! # Repository Module
//!
//! Database repository implementations for Almacén.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  App command                                                            │
//! │       │   db.productos().list()                                         │
//! │       ▼                                                                 │
//! │  ProductoRepository ── SQL ──► SQLite                                   │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • SQL is isolated in one place per table                               │
//! │  • Easy to test against an in-memory database                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`usuario::UsuarioRepository`] - credential verification + registration
//! - [`cliente::ClienteRepository`] - customer CRUD
//! - [`producto::ProductoRepository`] - product CRUD

use almacen_core::{Draft, Entity};

use crate::error::DbResult;

pub mod cliente;
pub mod producto;
pub mod usuario;

/// Common surface of the two managed tables.
///
/// The listing windows for clientes and productos behave identically; this
/// trait is what lets one controller drive both. Futures are not required
/// to be Send: every call is awaited on the single UI task.
#[allow(async_fn_in_trait)]
pub trait RecordStore {
    type Record: Entity + Clone;
    type Draft: Draft;

    /// Entity name used in error messages ("Cliente", "Producto").
    fn entity_name() -> &'static str;

    /// Returns all rows in storage-defined order.
    ///
    /// Deliberately no ORDER BY: the displayed order is whatever the engine
    /// returns, same as the deployment this is compatible with.
    async fn list(&self) -> DbResult<Vec<Self::Record>>;

    /// Inserts a new row and returns the storage-assigned id.
    async fn create(&self, draft: &Self::Draft) -> DbResult<i64>;

    /// Updates the row with the given id. `DbError::NotFound` when the id
    /// no longer exists.
    async fn update(&self, id: i64, draft: &Self::Draft) -> DbResult<()>;

    /// Deletes by id and returns the number of rows affected. Deleting an
    /// id that is already gone returns `Ok(0)`, not an error.
    async fn delete(&self, id: i64) -> DbResult<u64>;
}

//! # Cliente Repository
//!
//! CRUD operations for the `clientes` table.
//!
//! Every mutating operation in the app is followed by a wholesale re-list;
//! that synchronization strategy lives in the app's listing controller, so
//! the repository stays a thin statement-per-method layer.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::repository::RecordStore;
use almacen_core::{Cliente, ClienteDraft};

/// Repository for customer database operations.
#[derive(Debug, Clone)]
pub struct ClienteRepository {
    pool: SqlitePool,
}

impl ClienteRepository {
    /// Creates a new ClienteRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ClienteRepository { pool }
    }
}

impl RecordStore for ClienteRepository {
    type Record = Cliente;
    type Draft = ClienteDraft;

    fn entity_name() -> &'static str {
        "Cliente"
    }

    async fn list(&self) -> DbResult<Vec<Cliente>> {
        let clientes = sqlx::query_as::<_, Cliente>(
            r#"
            SELECT id_cliente, nombre, apellido, telefono, correo_electronico, usuario
            FROM clientes
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = clientes.len(), "Listed clientes");
        Ok(clientes)
    }

    async fn create(&self, draft: &ClienteDraft) -> DbResult<i64> {
        debug!(nombre = %draft.nombre, "Inserting cliente");

        let result = sqlx::query(
            r#"
            INSERT INTO clientes (nombre, apellido, telefono, correo_electronico, usuario)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&draft.nombre)
        .bind(&draft.apellido)
        .bind(&draft.telefono)
        .bind(&draft.correo_electronico)
        .bind(&draft.usuario)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn update(&self, id: i64, draft: &ClienteDraft) -> DbResult<()> {
        debug!(id_cliente = id, "Updating cliente");

        let result = sqlx::query(
            r#"
            UPDATE clientes
            SET nombre = ?2, apellido = ?3, telefono = ?4, correo_electronico = ?5, usuario = ?6
            WHERE id_cliente = ?1
            "#,
        )
        .bind(id)
        .bind(&draft.nombre)
        .bind(&draft.apellido)
        .bind(&draft.telefono)
        .bind(&draft.correo_electronico)
        .bind(&draft.usuario)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(Self::entity_name(), id));
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> DbResult<u64> {
        debug!(id_cliente = id, "Deleting cliente");

        let result = sqlx::query("DELETE FROM clientes WHERE id_cliente = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

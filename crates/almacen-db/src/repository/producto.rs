//! # Producto Repository
//!
//! CRUD operations for the `productos` table.
//!
//! `precio` and `cantidad` pass through as strings in both directions.
//! The dialogs only check that they are non-empty; the engine stores
//! whatever was typed.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::repository::RecordStore;
use almacen_core::{Producto, ProductoDraft};

/// Repository for product database operations.
#[derive(Debug, Clone)]
pub struct ProductoRepository {
    pool: SqlitePool,
}

impl ProductoRepository {
    /// Creates a new ProductoRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductoRepository { pool }
    }
}

impl RecordStore for ProductoRepository {
    type Record = Producto;
    type Draft = ProductoDraft;

    fn entity_name() -> &'static str {
        "Producto"
    }

    async fn list(&self) -> DbResult<Vec<Producto>> {
        let productos = sqlx::query_as::<_, Producto>(
            r#"
            SELECT id_producto, nombre, categoria, precio, cantidad, descripcion
            FROM productos
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = productos.len(), "Listed productos");
        Ok(productos)
    }

    async fn create(&self, draft: &ProductoDraft) -> DbResult<i64> {
        debug!(nombre = %draft.nombre, "Inserting producto");

        let result = sqlx::query(
            r#"
            INSERT INTO productos (nombre, categoria, precio, cantidad, descripcion)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&draft.nombre)
        .bind(&draft.categoria)
        .bind(&draft.precio)
        .bind(&draft.cantidad)
        .bind(&draft.descripcion)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn update(&self, id: i64, draft: &ProductoDraft) -> DbResult<()> {
        debug!(id_producto = id, "Updating producto");

        let result = sqlx::query(
            r#"
            UPDATE productos
            SET nombre = ?2, categoria = ?3, precio = ?4, cantidad = ?5, descripcion = ?6
            WHERE id_producto = ?1
            "#,
        )
        .bind(id)
        .bind(&draft.nombre)
        .bind(&draft.categoria)
        .bind(&draft.precio)
        .bind(&draft.cantidad)
        .bind(&draft.descripcion)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(Self::entity_name(), id));
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> DbResult<u64> {
        debug!(id_producto = id, "Deleting producto");

        let result = sqlx::query("DELETE FROM productos WHERE id_producto = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn test_repo() -> ProductoRepository {
        Database::new(DbConfig::in_memory())
            .await
            .unwrap()
            .productos()
    }

    fn widget() -> ProductoDraft {
        ProductoDraft {
            nombre: "Widget".to_string(),
            categoria: "Tools".to_string(),
            precio: "9.99".to_string(),
            cantidad: "10".to_string(),
            descripcion: "x".to_string(),
        }
    }

    #[tokio::test]
    async fn test_widget_lifecycle() {
        let repo = test_repo().await;

        let id = repo.create(&widget()).await.unwrap();

        let rows = repo.list().await.unwrap();
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.id_producto, id);
        assert_eq!(row.nombre, "Widget");
        assert_eq!(row.categoria, "Tools");
        assert_eq!(row.precio, "9.99");
        assert_eq!(row.cantidad, "10");
        assert_eq!(row.descripcion, "x");

        assert_eq!(repo.delete(id).await.unwrap(), 1);
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_precio_stored_verbatim() {
        let repo = test_repo().await;
        let mut d = widget();
        d.precio = "gratis".to_string();
        d.cantidad = "muchos".to_string();

        let id = repo.create(&d).await.unwrap();
        let rows = repo.list().await.unwrap();
        assert_eq!(rows[0].id_producto, id);
        assert_eq!(rows[0].precio, "gratis");
        assert_eq!(rows[0].cantidad, "muchos");
    }

    #[tokio::test]
    async fn test_update_merges_fields_by_id() {
        let repo = test_repo().await;
        let a = repo.create(&widget()).await.unwrap();
        let b = repo.create(&widget()).await.unwrap();

        let mut cambio = widget();
        cambio.precio = "11.50".to_string();
        cambio.cantidad = "4".to_string();
        repo.update(b, &cambio).await.unwrap();

        let rows = repo.list().await.unwrap();
        let row_a = rows.iter().find(|p| p.id_producto == a).unwrap();
        let row_b = rows.iter().find(|p| p.id_producto == b).unwrap();
        assert_eq!(row_a.precio, "9.99");
        assert_eq!(row_b.precio, "11.50");
        assert_eq!(row_b.cantidad, "4");
    }

    #[tokio::test]
    async fn test_update_missing_id_is_not_found() {
        let repo = test_repo().await;
        let err = repo.update(99, &widget()).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }
}

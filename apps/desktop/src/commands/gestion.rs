//! # Management Commands
//!
//! The CRUD commands behind both management windows, generic over the
//! record store so the customer and product windows share one
//! implementation.
//!
//! ## Mutation Protocol
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Button Press → Listing Refresh                      │
//! │                                                                         │
//! │  nuevo / editar / eliminar                                              │
//! │       │                                                                 │
//! │       ├── guards (selection present, fields non-empty)                  │
//! │       │                                                                 │
//! │       ├── store mutation (create / update / delete)                     │
//! │       │                                                                 │
//! │       ├── success dialog                                                │
//! │       │                                                                 │
//! │       └── wholesale re-list ── failure keeps stale rows + error dialog  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Guard behavior is deliberately asymmetric: the create path announces an
//! empty-field abort with a dialog, the edit path aborts silently. Both
//! return `Ok(false)` so callers can tell "nothing happened" from success.

use almacen_core::{Draft, Entity};
use almacen_db::{DbError, RecordStore};
use tracing::instrument;

use crate::error::AppError;
use crate::shell::Shell;
use crate::state::ListingView;

/// Opens a management window: performs the initial listing.
///
/// A failed listing shows an error dialog and leaves the view in its
/// error phase with whatever rows it already had.
#[instrument(skip_all, fields(entity = S::entity_name()))]
pub async fn abrir<S: RecordStore>(
    shell: &impl Shell,
    view: &mut ListingView<S::Record>,
    store: &S,
) -> Result<(), AppError> {
    actualizar(shell, view, store).await
}

/// Re-lists every row from the store, replacing the view wholesale.
pub async fn actualizar<S: RecordStore>(
    shell: &impl Shell,
    view: &mut ListingView<S::Record>,
    store: &S,
) -> Result<(), AppError> {
    view.begin_refresh();

    match store.list().await {
        Ok(rows) => {
            tracing::debug!(entity = S::entity_name(), count = rows.len(), "Listed");
            view.refreshed(rows);
            Ok(())
        }
        Err(err) => {
            view.failed();
            let app_err: AppError = err.into();
            shell.show_error("Error", &app_err.message);
            Err(app_err)
        }
    }
}

/// Selects the row at `index` and announces it.
pub fn seleccionar<R: Entity + Clone>(shell: &impl Shell, view: &mut ListingView<R>, index: usize) {
    view.select(index);

    if let Some(row) = view.selected() {
        shell.show_info("Éxito", &row.selection_text());
    }
}

/// Records a failed mutation: error dialog, prior rows kept on screen.
fn mutation_failed<R: Entity + Clone>(
    shell: &impl Shell,
    view: &mut ListingView<R>,
    err: DbError,
) -> AppError {
    view.failed();
    let app_err: AppError = err.into();
    shell.show_error("Error", &app_err.message);
    app_err
}

/// Creates a record from the dialog draft.
///
/// Empty fields abort with a dialog and `Ok(false)`; nothing reaches the
/// store. On success the view is re-listed.
#[instrument(skip_all, fields(entity = S::entity_name()))]
pub async fn nuevo<S: RecordStore>(
    shell: &impl Shell,
    view: &mut ListingView<S::Record>,
    store: &S,
    draft: &S::Draft,
) -> Result<bool, AppError> {
    if draft.validate().is_err() {
        shell.show_error("Error", "Por favor complete todos los campos.");
        return Ok(false);
    }

    view.begin_mutation();
    let id = match store.create(draft).await {
        Ok(id) => id,
        Err(err) => return Err(mutation_failed(shell, view, err)),
    };
    tracing::info!(entity = S::entity_name(), id, "Record created");

    shell.show_info("Éxito", "Registro agregado correctamente.");
    actualizar(shell, view, store).await?;
    Ok(true)
}

/// Updates the selected record from the dialog draft.
///
/// Without a selection, a dialog asks for one and nothing happens. An
/// empty-field draft aborts silently. On success the view is re-listed.
#[instrument(skip_all, fields(entity = S::entity_name()))]
pub async fn editar<S: RecordStore>(
    shell: &impl Shell,
    view: &mut ListingView<S::Record>,
    store: &S,
    draft: &S::Draft,
) -> Result<bool, AppError> {
    let Some(id) = view.selected_id() else {
        shell.show_error("Error", "Por favor seleccione un registro para editar.");
        return Ok(false);
    };

    if draft.validate().is_err() {
        tracing::debug!(entity = S::entity_name(), id, "Edit aborted by validation");
        return Ok(false);
    }

    view.begin_mutation();
    if let Err(err) = store.update(id, draft).await {
        return Err(mutation_failed(shell, view, err));
    }
    tracing::info!(entity = S::entity_name(), id, "Record updated");

    shell.show_info("Éxito", "Registro actualizado correctamente.");
    actualizar(shell, view, store).await?;
    Ok(true)
}

/// Deletes the selected record after confirmation.
///
/// Without a selection, a dialog asks for one. Declining the confirmation
/// leaves everything untouched. Deleting a row someone else already
/// removed still counts as success.
#[instrument(skip_all, fields(entity = S::entity_name()))]
pub async fn eliminar<S: RecordStore>(
    shell: &impl Shell,
    view: &mut ListingView<S::Record>,
    store: &S,
) -> Result<bool, AppError> {
    let Some(id) = view.selected_id() else {
        shell.show_error("Error", "Por favor seleccione un registro para eliminar.");
        return Ok(false);
    };

    if !shell.confirm("Confirmar", "¿Está seguro de eliminar el registro?") {
        return Ok(false);
    }

    view.begin_mutation();
    let deleted = match store.delete(id).await {
        Ok(deleted) => deleted,
        Err(err) => return Err(mutation_failed(shell, view, err)),
    };
    tracing::info!(entity = S::entity_name(), id, deleted, "Record deleted");

    shell.show_info("Éxito", "Registro eliminado correctamente.");
    actualizar(shell, view, store).await?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::scripted::ScriptedShell;
    use crate::state::ListingPhase;
    use almacen_core::{Cliente, ClienteDraft, Producto, ProductoDraft};
    use almacen_db::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn cliente_draft(nombre: &str) -> ClienteDraft {
        ClienteDraft {
            nombre: nombre.to_string(),
            apellido: "Pérez".to_string(),
            telefono: "555-0100".to_string(),
            correo_electronico: "p@example.com".to_string(),
            usuario: "admin".to_string(),
        }
    }

    fn producto_draft(nombre: &str, precio: &str) -> ProductoDraft {
        ProductoDraft {
            nombre: nombre.to_string(),
            categoria: "Herramientas".to_string(),
            precio: precio.to_string(),
            cantidad: "10".to_string(),
            descripcion: "x".to_string(),
        }
    }

    #[tokio::test]
    async fn test_nuevo_creates_and_relists() {
        let db = test_db().await;
        let store = db.clientes();
        let shell = ScriptedShell::new();
        let mut view = ListingView::<Cliente>::new();

        abrir(&shell, &mut view, &store).await.unwrap();
        assert!(view.rows().is_empty());

        let ok = nuevo(&shell, &mut view, &store, &cliente_draft("Ana"))
            .await
            .unwrap();

        assert!(ok);
        assert_eq!(view.rows().len(), 1);
        assert_eq!(view.phase(), ListingPhase::Loaded);
        assert_eq!(
            shell.infos.lock().unwrap()[0],
            (
                "Éxito".to_string(),
                "Registro agregado correctamente.".to_string()
            )
        );
    }

    #[tokio::test]
    async fn test_nuevo_empty_field_shows_dialog_and_skips_store() {
        let db = test_db().await;
        let store = db.clientes();
        let shell = ScriptedShell::new();
        let mut view = ListingView::<Cliente>::new();

        let ok = nuevo(&shell, &mut view, &store, &cliente_draft(""))
            .await
            .unwrap();

        assert!(!ok);
        assert_eq!(
            shell.last_error(),
            Some((
                "Error".to_string(),
                "Por favor complete todos los campos.".to_string()
            ))
        );
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_editar_without_selection_asks_for_one() {
        let db = test_db().await;
        let store = db.clientes();
        let shell = ScriptedShell::new();
        let mut view = ListingView::<Cliente>::new();

        abrir(&shell, &mut view, &store).await.unwrap();
        let ok = editar(&shell, &mut view, &store, &cliente_draft("Ana"))
            .await
            .unwrap();

        assert!(!ok);
        assert_eq!(
            shell.last_error(),
            Some((
                "Error".to_string(),
                "Por favor seleccione un registro para editar.".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn test_editar_empty_field_aborts_silently() {
        let db = test_db().await;
        let store = db.clientes();
        let shell = ScriptedShell::new();
        let mut view = ListingView::<Cliente>::new();

        nuevo(&shell, &mut view, &store, &cliente_draft("Ana"))
            .await
            .unwrap();
        seleccionar(&shell, &mut view, 0);

        let errors_before = shell.error_count();
        let ok = editar(&shell, &mut view, &store, &cliente_draft(""))
            .await
            .unwrap();

        assert!(!ok);
        assert_eq!(shell.error_count(), errors_before);
        assert_eq!(store.list().await.unwrap()[0].nombre, "Ana");
    }

    #[tokio::test]
    async fn test_editar_updates_selected_row() {
        let db = test_db().await;
        let store = db.clientes();
        let shell = ScriptedShell::new();
        let mut view = ListingView::<Cliente>::new();

        nuevo(&shell, &mut view, &store, &cliente_draft("Ana"))
            .await
            .unwrap();
        seleccionar(&shell, &mut view, 0);

        let ok = editar(&shell, &mut view, &store, &cliente_draft("Marta"))
            .await
            .unwrap();

        assert!(ok);
        assert_eq!(view.rows()[0].nombre, "Marta");
        // Re-list cleared the selection.
        assert!(view.selected().is_none());
    }

    #[tokio::test]
    async fn test_eliminar_confirmation_gates_delete() {
        let db = test_db().await;
        let store = db.productos();
        let shell = ScriptedShell::new();
        let mut view = ListingView::<Producto>::new();

        nuevo(&shell, &mut view, &store, &producto_draft("Widget", "9.99"))
            .await
            .unwrap();
        seleccionar(&shell, &mut view, 0);

        shell.push_answer(false);
        let ok = eliminar(&shell, &mut view, &store).await.unwrap();
        assert!(!ok);
        assert_eq!(view.rows().len(), 1);

        seleccionar(&shell, &mut view, 0);
        shell.push_answer(true);
        let ok = eliminar(&shell, &mut view, &store).await.unwrap();
        assert!(ok);
        assert!(view.rows().is_empty());
    }

    #[tokio::test]
    async fn test_eliminar_without_selection_asks_for_one() {
        let db = test_db().await;
        let store = db.productos();
        let shell = ScriptedShell::new();
        let mut view = ListingView::<Producto>::new();

        let ok = eliminar(&shell, &mut view, &store).await.unwrap();
        assert!(!ok);
        assert_eq!(
            shell.last_error(),
            Some((
                "Error".to_string(),
                "Por favor seleccione un registro para eliminar.".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn test_seleccionar_announces_label() {
        let db = test_db().await;
        let store = db.productos();
        let shell = ScriptedShell::new();
        let mut view = ListingView::<Producto>::new();

        nuevo(&shell, &mut view, &store, &producto_draft("Widget", "gratis"))
            .await
            .unwrap();

        seleccionar(&shell, &mut view, 0);
        assert_eq!(
            shell.last_info(),
            Some((
                "Éxito".to_string(),
                "Producto seleccionado: Widget".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn test_store_failure_during_nuevo_shows_dialog_and_keeps_rows() {
        let db = test_db().await;
        let store = db.clientes();
        let shell = ScriptedShell::new();
        let mut view = ListingView::<Cliente>::new();

        nuevo(&shell, &mut view, &store, &cliente_draft("Ana"))
            .await
            .unwrap();
        db.close().await;

        let result = nuevo(&shell, &mut view, &store, &cliente_draft("Eva")).await;

        assert!(result.is_err());
        assert_eq!(shell.error_count(), 1);
        assert_eq!(view.phase(), ListingPhase::Error);
        // The rows from before the failed insert stay on screen.
        assert_eq!(view.rows().len(), 1);
        assert_eq!(view.rows()[0].nombre, "Ana");
    }

    #[tokio::test]
    async fn test_store_failure_during_eliminar_shows_dialog_and_keeps_rows() {
        let db = test_db().await;
        let store = db.productos();
        let shell = ScriptedShell::new();
        let mut view = ListingView::<Producto>::new();

        nuevo(&shell, &mut view, &store, &producto_draft("Widget", "9.99"))
            .await
            .unwrap();
        seleccionar(&shell, &mut view, 0);
        db.close().await;

        shell.push_answer(true);
        let result = eliminar(&shell, &mut view, &store).await;

        assert!(result.is_err());
        assert_eq!(shell.error_count(), 1);
        assert_eq!(view.phase(), ListingPhase::Error);
        assert_eq!(view.rows().len(), 1);
    }

    #[tokio::test]
    async fn test_lenient_precio_passes_through() {
        let db = test_db().await;
        let store = db.productos();
        let shell = ScriptedShell::new();
        let mut view = ListingView::<Producto>::new();

        let ok = nuevo(
            &shell,
            &mut view,
            &store,
            &producto_draft("Muestra", "nueve con algo"),
        )
        .await
        .unwrap();

        assert!(ok);
        assert_eq!(view.rows()[0].precio, "nueve con algo");
    }
}

//! # Listing State
//!
//! Per-window listing state: the rows on screen, which one is selected,
//! and where the view is in its refresh cycle.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Listing Lifecycle                                │
//! │                                                                         │
//! │         begin_refresh            refreshed(rows)                        │
//! │  Loaded ─────────────► Loading ─────────────────► Loaded                │
//! │    │                      │                                             │
//! │    │ begin_mutation       │ failed                                      │
//! │    ▼                      ▼                                             │
//! │  Mutating ─► (refresh)  Error  (previous rows stay on screen)           │
//! │                                                                         │
//! │  Every mutation is followed by a wholesale re-list: the view never      │
//! │  patches individual rows, it replaces all of them from the store.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failed refresh keeps the previous rows visible; the next successful
//! refresh replaces them wholesale.

use almacen_core::Entity;

/// Where the listing is in its refresh cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingPhase {
    /// A refresh is in flight.
    Loading,

    /// Rows reflect the last successful listing.
    Loaded,

    /// A create/update/delete is in flight; a refresh follows.
    Mutating,

    /// The last refresh failed; rows are stale.
    Error,
}

/// Listing state for one management window.
#[derive(Debug, Clone)]
pub struct ListingView<R: Entity + Clone> {
    rows: Vec<R>,
    selected: Option<usize>,
    phase: ListingPhase,
}

impl<R: Entity + Clone> Default for ListingView<R> {
    fn default() -> Self {
        ListingView {
            rows: Vec::new(),
            selected: None,
            phase: ListingPhase::Loading,
        }
    }
}

impl<R: Entity + Clone> ListingView<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ListingPhase {
        self.phase
    }

    /// Rows currently on screen. Stale after a failed refresh.
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Marks the start of a listing refresh.
    pub fn begin_refresh(&mut self) {
        self.phase = ListingPhase::Loading;
    }

    /// Marks the start of a create/update/delete.
    pub fn begin_mutation(&mut self) {
        self.phase = ListingPhase::Mutating;
    }

    /// Replaces every row with the fresh listing.
    ///
    /// Clears the selection: row indices from before the refresh are
    /// meaningless against the new rows.
    pub fn refreshed(&mut self, rows: Vec<R>) {
        self.rows = rows;
        self.selected = None;
        self.phase = ListingPhase::Loaded;
    }

    /// Records a failed refresh. Previous rows stay on screen.
    pub fn failed(&mut self) {
        self.phase = ListingPhase::Error;
    }

    /// Selects the row at `index`. Out-of-range indices clear the selection.
    pub fn select(&mut self, index: usize) {
        self.selected = if index < self.rows.len() {
            Some(index)
        } else {
            None
        };
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// The selected row, if any.
    pub fn selected(&self) -> Option<&R> {
        self.selected.and_then(|i| self.rows.get(i))
    }

    /// Id of the selected row, if any.
    pub fn selected_id(&self) -> Option<i64> {
        self.selected().map(|r| r.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use almacen_core::Cliente;

    fn cliente(id: i64, nombre: &str) -> Cliente {
        Cliente {
            id_cliente: id,
            nombre: nombre.to_string(),
            apellido: "Pérez".to_string(),
            telefono: "555-0100".to_string(),
            correo_electronico: "p@example.com".to_string(),
            usuario: "admin".to_string(),
        }
    }

    #[test]
    fn test_refresh_replaces_rows_wholesale() {
        let mut view = ListingView::new();
        view.refreshed(vec![cliente(1, "Ana"), cliente(2, "Luis")]);
        assert_eq!(view.rows().len(), 2);

        view.begin_refresh();
        assert_eq!(view.phase(), ListingPhase::Loading);

        view.refreshed(vec![cliente(3, "Marta")]);
        assert_eq!(view.rows().len(), 1);
        assert_eq!(view.rows()[0].id_cliente, 3);
        assert_eq!(view.phase(), ListingPhase::Loaded);
    }

    #[test]
    fn test_refresh_clears_selection() {
        let mut view = ListingView::new();
        view.refreshed(vec![cliente(1, "Ana"), cliente(2, "Luis")]);
        view.select(1);
        assert_eq!(view.selected_id(), Some(2));

        view.refreshed(vec![cliente(2, "Luis")]);
        assert_eq!(view.selected_id(), None);
    }

    #[test]
    fn test_failed_refresh_keeps_stale_rows() {
        let mut view = ListingView::new();
        view.refreshed(vec![cliente(1, "Ana")]);

        view.begin_refresh();
        view.failed();

        assert_eq!(view.phase(), ListingPhase::Error);
        assert_eq!(view.rows().len(), 1);
    }

    #[test]
    fn test_out_of_range_select_clears() {
        let mut view = ListingView::new();
        view.refreshed(vec![cliente(1, "Ana")]);
        view.select(0);
        assert!(view.selected().is_some());

        view.select(5);
        assert!(view.selected().is_none());
    }

    #[test]
    fn test_mutation_phase() {
        let mut view: ListingView<Cliente> = ListingView::new();
        view.refreshed(vec![]);
        view.begin_mutation();
        assert_eq!(view.phase(), ListingPhase::Mutating);
    }
}
